use once_cell::sync::Lazy;

use crate::string_table::{StringTableLocations, TableLocation};

static NORTH_AMERICA_EUROPE_CODEC: Lazy<crate::msg::Codec> =
    Lazy::new(|| crate::charset::codec(crate::charset::NORTH_AMERICA_EUROPE));
static JAPAN_CODEC: Lazy<crate::msg::Codec> = Lazy::new(|| crate::charset::codec(crate::charset::JAPAN));

#[rustfmt::skip]
static NORTH_AMERICA_LOCATIONS: StringTableLocations = StringTableLocations {
    species_names:   Some(TableLocation { file: "arm9.bin", start: 0x0207785c, end: 0x0207805c }),
    skill_names:     None,
    trait_names:     None,
    skill_set_names: None,
    item_names:      None,
};

static EUROPE_LOCATIONS: StringTableLocations = StringTableLocations {
    species_names: None,
    skill_names: None,
    trait_names: None,
    skill_set_names: None,
    item_names: None,
};

#[rustfmt::skip]
static JAPAN_LOCATIONS: StringTableLocations = StringTableLocations {
    species_names:   Some(TableLocation { file: "arm9.bin", start: 0x0208e8e8, end: 0x0208f0e8 }),
    // Runs past the real end of the table, but covers every skill name.
    skill_names:     Some(TableLocation { file: "arm9.bin", start: 0x0208dce0, end: 0x0208e27c }),
    trait_names:     Some(TableLocation { file: "arm9.bin", start: 0x0208c8d8, end: 0x0208ccd8 }),
    skill_set_names: Some(TableLocation { file: "arm9.bin", start: 0x0208d4d8, end: 0x0208d8dc }),
    item_names:      Some(TableLocation { file: "arm9.bin", start: 0x0208d8dc, end: 0x0208dce0 }),
};

/// Release the image was built for.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash, serde::Serialize)]
pub enum Region {
    NorthAmerica,
    Europe,
    Japan,
}

impl Region {
    pub fn codec(self) -> &'static crate::msg::Codec {
        match self {
            Region::NorthAmerica | Region::Europe => &NORTH_AMERICA_EUROPE_CODEC,
            Region::Japan => &JAPAN_CODEC,
        }
    }

    pub fn string_table_locations(self) -> &'static StringTableLocations {
        match self {
            Region::NorthAmerica => &NORTH_AMERICA_LOCATIONS,
            Region::Europe => &EUROPE_LOCATIONS,
            Region::Japan => &JAPAN_LOCATIONS,
        }
    }

    /// Whether skill set records carry the trailing 20 byte block.
    pub fn has_extended_skill_sets(self) -> bool {
        self != Region::Japan
    }
}
