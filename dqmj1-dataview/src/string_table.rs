use byteorder::ByteOrder;

pub const POINTER_SIZE: usize = std::mem::size_of::<u32>();
pub const DEFAULT_MAX_STRING_LENGTH: usize = 100;

/// Files whose contents are memory mapped at a known address, with that address.
#[rustfmt::skip]
pub static FILE_OFFSETS: &[(&str, u32)] = &[
    ("arm9.bin", 0x02000000),
];

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("unsupported string table file: {file}")]
    UnsupportedLocation { file: String },

    #[error("pointer {pointer:#010x} is outside of {file}")]
    PointerOutOfRange { file: String, pointer: u32 },

    #[error("failed to decode string at {pointer:#010x}: {source}")]
    Decode {
        pointer: u32,
        #[source]
        source: crate::msg::DecodeError,
    },
}

fn file_offset(file: &str) -> Option<u32> {
    FILE_OFFSETS.iter().find(|(name, _)| *name == file).map(|(_, offset)| *offset)
}

/// Where a table of string pointers lives, in absolute addresses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TableLocation {
    pub file: &'static str,
    pub start: u32,
    pub end: u32,
}

impl TableLocation {
    /// Contents of the file the table lives in. Only the code region is supported.
    pub fn source<'a>(&self, image: &'a dyn crate::image::Image) -> Result<&'a [u8], Error> {
        if self.file != crate::image::CODE_REGION_FILE {
            return Err(Error::UnsupportedLocation {
                file: self.file.to_string(),
            });
        }
        Ok(image.code_region())
    }

    /// Reads every string the table points at. `data` is the contents of `self.file`.
    pub fn read(
        &self,
        data: &[u8],
        codec: &crate::msg::Codec,
        max_string_length: usize,
    ) -> Result<Vec<String>, Error> {
        let base = file_offset(self.file).ok_or_else(|| Error::UnsupportedLocation {
            file: self.file.to_string(),
        })?;

        let resolve = |pointer: u32| {
            pointer
                .checked_sub(base)
                .map(|offset| offset as usize)
                .ok_or_else(|| Error::PointerOutOfRange {
                    file: self.file.to_string(),
                    pointer,
                })
        };

        let start = resolve(self.start)?;
        let end = resolve(self.end)?;
        let pointers = data.get(start..end).ok_or_else(|| Error::PointerOutOfRange {
            file: self.file.to_string(),
            pointer: self.end,
        })?;

        pointers
            .chunks_exact(POINTER_SIZE)
            .map(|raw| {
                let pointer = byteorder::LittleEndian::read_u32(raw);
                let offset = resolve(pointer)?;
                // Past the end of the file there is nothing to read, which decodes as an empty string.
                let window = data.get(offset..).unwrap_or(&[]);
                let window = &window[..window.len().min(max_string_length)];
                codec
                    .read_string(window)
                    .map_err(|source| Error::Decode { pointer, source })
            })
            .collect()
    }
}

/// Where each category of string table lives for one region.
pub struct StringTableLocations {
    pub species_names: Option<TableLocation>,
    pub skill_names: Option<TableLocation>,
    pub trait_names: Option<TableLocation>,
    pub skill_set_names: Option<TableLocation>,
    pub item_names: Option<TableLocation>,
}

/// Tables of strings stored in the game's code, indexed by id.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct StringTables {
    pub species_names: Vec<String>,
    pub skill_names: Vec<String>,
    pub trait_names: Vec<String>,
    pub skill_set_names: Vec<String>,
    pub item_names: Vec<String>,
}

impl StringTables {
    /// Reads all known tables. Categories without a location come back empty.
    pub fn read(
        locations: &StringTableLocations,
        image: &dyn crate::image::Image,
        codec: &crate::msg::Codec,
        max_string_length: usize,
    ) -> Result<Self, Error> {
        let read = |location: &Option<TableLocation>| -> Result<Vec<String>, Error> {
            let Some(location) = location else {
                return Ok(vec![]);
            };
            let strings = location.read(location.source(image)?, codec, max_string_length)?;
            log::debug!("read {} strings from {:08x?}", strings.len(), location);
            Ok(strings)
        };

        Ok(Self {
            species_names: read(&locations.species_names)?,
            skill_names: read(&locations.skill_names)?,
            trait_names: read(&locations.trait_names)?,
            skill_set_names: read(&locations.skill_set_names)?,
            item_names: read(&locations.item_names)?,
        })
    }

    pub fn species_name(&self, id: usize) -> Option<&str> {
        self.species_names.get(id).map(|s| s.as_str())
    }

    pub fn skill_name(&self, id: usize) -> Option<&str> {
        self.skill_names.get(id).map(|s| s.as_str())
    }

    pub fn trait_name(&self, id: usize) -> Option<&str> {
        self.trait_names.get(id).map(|s| s.as_str())
    }

    pub fn skill_set_name(&self, id: usize) -> Option<&str> {
        self.skill_set_names.get(id).map(|s| s.as_str())
    }

    pub fn item_name(&self, id: usize) -> Option<&str> {
        self.item_names.get(id).map(|s| s.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codec() -> &'static crate::msg::Codec {
        crate::region::Region::NorthAmerica.codec()
    }

    // Pointer table at 0x02000000 with two entries, strings right after it.
    fn arm9() -> Vec<u8> {
        let mut buf = vec![];
        buf.extend_from_slice(&0x02000008u32.to_le_bytes());
        buf.extend_from_slice(&0x0200000bu32.to_le_bytes());
        buf.extend_from_slice(b"\x25\x26\xff");
        buf.extend_from_slice(b"\x0a\x27\xff");
        buf
    }

    #[test]
    fn test_read_table() {
        let location = TableLocation {
            file: "arm9.bin",
            start: 0x02000000,
            end: 0x02000008,
        };
        assert_eq!(
            location.read(&arm9(), codec(), DEFAULT_MAX_STRING_LENGTH).unwrap(),
            vec!["ab".to_string(), "c".to_string()]
        );
    }

    #[test]
    fn test_read_table_bounded_string() {
        let location = TableLocation {
            file: "arm9.bin",
            start: 0x02000000,
            end: 0x02000004,
        };
        assert!(matches!(
            location.read(&arm9(), codec(), 2),
            Err(Error::Decode {
                pointer: 0x02000008,
                source: crate::msg::DecodeError::Unterminated(_),
            })
        ));
    }

    #[test]
    fn test_unsupported_file() {
        let location = TableLocation {
            file: "arm7.bin",
            start: 0x02000000,
            end: 0x02000008,
        };
        assert!(matches!(
            location.read(&arm9(), codec(), DEFAULT_MAX_STRING_LENGTH),
            Err(Error::UnsupportedLocation { file }) if file == "arm7.bin"
        ));
    }

    #[test]
    fn test_source_must_be_code_region() {
        let image = crate::image::MemoryImage::new(arm9()).with_file("arm7.bin", vec![]);
        let location = TableLocation {
            file: "arm7.bin",
            start: 0x02000000,
            end: 0x02000008,
        };
        assert!(matches!(location.source(&image), Err(Error::UnsupportedLocation { .. })));

        let location = TableLocation {
            file: "arm9.bin",
            ..location
        };
        assert_eq!(location.source(&image).unwrap(), &arm9()[..]);
    }

    #[test]
    fn test_pointer_below_base() {
        let location = TableLocation {
            file: "arm9.bin",
            start: 0x01000000,
            end: 0x02000008,
        };
        assert!(matches!(
            location.read(&arm9(), codec(), DEFAULT_MAX_STRING_LENGTH),
            Err(Error::PointerOutOfRange { pointer: 0x01000000, .. })
        ));
    }

    #[test]
    fn test_missing_locations_read_empty() {
        let tables = StringTables::read(
            crate::region::Region::Europe.string_table_locations(),
            &crate::image::MemoryImage::new(arm9()),
            codec(),
            DEFAULT_MAX_STRING_LENGTH,
        )
        .unwrap();
        assert_eq!(tables, StringTables::default());
        assert_eq!(tables.species_name(0), None);
    }
}
