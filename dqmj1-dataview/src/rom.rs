use crate::image::Image;
use crate::region::Region;
use crate::table::btl_enmy_prm::BtlEnmyPrm;
use crate::table::skill_tbl::SkillTbl;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("file not found in image: {name}")]
    MissingFile { name: &'static str },

    #[error("table: {0}")]
    Table(#[from] crate::table::Error),

    #[error("string table: {0}")]
    StringTable(#[from] crate::string_table::Error),
}

/// A value computed from the image, stamped with the generation it was computed at.
#[derive(Clone, Debug, PartialEq)]
pub struct Derived<T> {
    value: T,
    generation: u64,
}

impl<T> Derived<T> {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether the image has been modified since this value was computed.
    pub fn is_stale<I: Image>(&self, rom: &Rom<I>) -> bool {
        self.generation != rom.generation
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T> std::ops::Deref for Derived<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

/// Game data backed by an image.
///
/// Nothing is cached. Every accessor reads from the image, so the image always
/// reflects the latest written tables.
pub struct Rom<I> {
    image: I,
    region: Region,
    generation: u64,
    max_string_length: usize,
}

impl<I: Image> Rom<I> {
    pub fn new(image: I, region: Region) -> Self {
        Self {
            image,
            region,
            generation: 0,
            max_string_length: crate::string_table::DEFAULT_MAX_STRING_LENGTH,
        }
    }

    pub fn with_max_string_length(mut self, max_string_length: usize) -> Self {
        self.max_string_length = max_string_length;
        self
    }

    pub fn region(&self) -> Region {
        self.region
    }

    /// Incremented on every successful write.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn image(&self) -> &I {
        &self.image
    }

    pub fn into_image(self) -> I {
        self.image
    }

    fn derive<T>(&self, value: T) -> Derived<T> {
        Derived {
            value,
            generation: self.generation,
        }
    }

    fn file(&self, name: &'static str) -> Result<&[u8], Error> {
        self.image.file(name).ok_or(Error::MissingFile { name })
    }

    pub fn btl_enmy_prm(&self) -> Result<BtlEnmyPrm, Error> {
        Ok(BtlEnmyPrm::decode(
            self.file(crate::table::btl_enmy_prm::FILE_NAME)?,
        )?)
    }

    pub fn set_btl_enmy_prm(&mut self, table: &BtlEnmyPrm) -> Result<(), Error> {
        let buf = table.encode()?;
        self.image.set_file(crate::table::btl_enmy_prm::FILE_NAME, buf);
        self.generation += 1;
        log::info!(
            "wrote {} encounters to {}",
            table.entries.len(),
            crate::table::btl_enmy_prm::FILE_NAME
        );
        Ok(())
    }

    pub fn skill_tbl(&self) -> Result<SkillTbl, Error> {
        Ok(SkillTbl::decode(
            self.file(crate::table::skill_tbl::FILE_NAME)?,
            self.region,
        )?)
    }

    pub fn set_skill_tbl(&mut self, table: &SkillTbl) -> Result<(), Error> {
        let buf = table.encode()?;
        self.image.set_file(crate::table::skill_tbl::FILE_NAME, buf);
        self.generation += 1;
        Ok(())
    }

    pub fn string_tables(&self) -> Result<Derived<crate::string_table::StringTables>, Error> {
        Ok(self.derive(crate::string_table::StringTables::read(
            self.region.string_table_locations(),
            &self.image,
            self.region.codec(),
            self.max_string_length,
        )?))
    }

    pub fn encounters(&self) -> Result<Derived<Vec<crate::simple::Encounter>>, Error> {
        let string_tables = self.string_tables()?;
        Ok(self.derive(
            self.btl_enmy_prm()?
                .entries
                .iter()
                .map(|raw| crate::simple::Encounter::from_raw(raw, &string_tables))
                .collect(),
        ))
    }

    pub fn skill_sets(&self) -> Result<Derived<Vec<crate::simple::SkillSet>>, Error> {
        let string_tables = self.string_tables()?;
        Ok(self.derive(
            self.skill_tbl()?
                .entries()
                .enumerate()
                .map(|(i, raw)| crate::simple::SkillSet::from_raw(i, raw, &string_tables))
                .collect(),
        ))
    }

    pub fn skills(&self) -> Result<Derived<Vec<crate::simple::Skill>>, Error> {
        let string_tables = self.string_tables()?;
        Ok(self.derive(
            (0..crate::simple::NUM_SKILLS)
                .map(|id| crate::simple::Skill::from_raw(id, &string_tables))
                .collect(),
        ))
    }
}
