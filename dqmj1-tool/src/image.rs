use dqmj1_dataview::image::Image;

struct File {
    path: std::path::PathBuf,
    data: Vec<u8>,
    dirty: bool,
}

/// An image that was extracted to a directory.
///
/// Files are read up front since [`Image`] hands out borrowed contents. Writes stay in
/// memory until [`DirectoryImage::save`].
pub struct DirectoryImage {
    code_region: Vec<u8>,
    files: std::collections::HashMap<String, File>,
}

fn find(root: &std::path::Path, name: &str) -> Option<std::path::PathBuf> {
    [root.join(name), root.join("data").join(name)]
        .into_iter()
        .find(|path| path.is_file())
}

impl DirectoryImage {
    pub fn open(root: &std::path::Path, names: &[&str]) -> Result<Self, anyhow::Error> {
        let code_region_path = find(root, dqmj1_dataview::image::CODE_REGION_FILE).ok_or_else(|| {
            anyhow::anyhow!(
                "{} not found in {}",
                dqmj1_dataview::image::CODE_REGION_FILE,
                root.display()
            )
        })?;
        let code_region = std::fs::read(&code_region_path)?;
        log::info!("loaded code region from {}", code_region_path.display());

        let mut files = std::collections::HashMap::new();
        for name in names {
            let Some(path) = find(root, name) else {
                log::warn!("{} not found in {}", name, root.display());
                continue;
            };
            let data = std::fs::read(&path)?;
            log::debug!("loaded {} ({} bytes)", path.display(), data.len());
            files.insert(
                name.to_string(),
                File {
                    path,
                    data,
                    dirty: false,
                },
            );
        }

        Ok(Self { code_region, files })
    }

    /// Writes modified files back where they were read from.
    pub fn save(&self) -> Result<(), anyhow::Error> {
        for file in self.files.values().filter(|file| file.dirty) {
            std::fs::write(&file.path, &file.data)?;
            log::info!("wrote {}", file.path.display());
        }
        Ok(())
    }
}

impl Image for DirectoryImage {
    fn file(&self, name: &str) -> Option<&[u8]> {
        self.files.get(name).map(|file| file.data.as_slice())
    }

    // Only files that were found on open can be written back.
    fn set_file(&mut self, name: &str, data: Vec<u8>) {
        let Some(file) = self.files.get_mut(name) else {
            log::warn!("ignoring write to unknown file {}", name);
            return;
        };
        file.data = data;
        file.dirty = true;
    }

    fn code_region(&self) -> &[u8] {
        &self.code_region
    }
}
