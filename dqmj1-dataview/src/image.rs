/// Name of the file holding the main executable code.
pub const CODE_REGION_FILE: &str = "arm9.bin";

/// The storage image the game data lives in.
///
/// Opening and repackaging the image is up to the implementor. Only named
/// file access and the executable code region are needed here.
pub trait Image {
    fn file(&self, name: &str) -> Option<&[u8]>;
    fn set_file(&mut self, name: &str, data: Vec<u8>);
    fn code_region(&self) -> &[u8];
}

#[derive(Clone, Debug, Default)]
pub struct MemoryImage {
    files: std::collections::HashMap<String, Vec<u8>>,
    code_region: Vec<u8>,
}

impl MemoryImage {
    pub fn new(code_region: Vec<u8>) -> Self {
        Self {
            files: std::collections::HashMap::new(),
            code_region,
        }
    }

    pub fn with_file(mut self, name: &str, data: Vec<u8>) -> Self {
        self.files.insert(name.to_string(), data);
        self
    }
}

impl Image for MemoryImage {
    fn file(&self, name: &str) -> Option<&[u8]> {
        self.files.get(name).map(|data| data.as_slice())
    }

    fn set_file(&mut self, name: &str, data: Vec<u8>) {
        self.files.insert(name.to_string(), data);
    }

    fn code_region(&self) -> &[u8] {
        &self.code_region
    }
}
