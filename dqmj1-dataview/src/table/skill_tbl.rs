pub const FILE_NAME: &str = "SkillTbl.bin";
pub const NUM_TIERS: usize = 10;

#[repr(packed, C)]
#[derive(bytemuck::Pod, bytemuck::Zeroable, Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillPointRequirement {
    pub points_delta: u16,
    pub points_total: u16,
}
const _: () = assert!(std::mem::size_of::<SkillPointRequirement>() == 0x4);

/// Skills learned at one tier. More than one id is set when a tier grants several
/// skills, or when a skill replaces lower level ones. Empty slots are 0.
#[repr(packed, C)]
#[derive(bytemuck::Pod, bytemuck::Zeroable, Clone, Copy, Debug, PartialEq, Eq)]
pub struct RewardSkills {
    pub skill_ids: [u16; 4],
    pub unknown_a: [u8; 4],
}
const _: () = assert!(std::mem::size_of::<RewardSkills>() == 0xc);

impl RewardSkills {
    pub fn len(&self) -> usize {
        let skill_ids = self.skill_ids;
        skill_ids.iter().filter(|id| **id != 0).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn first(&self) -> Option<u16> {
        let skill_ids = self.skill_ids;
        skill_ids.into_iter().find(|id| *id != 0)
    }
}

/// Traits learned at one tier. Empty slots are 0.
#[repr(packed, C)]
#[derive(bytemuck::Pod, bytemuck::Zeroable, Clone, Copy, Debug, PartialEq, Eq)]
pub struct RewardTraits {
    pub trait_ids: [u8; 4],
}
const _: () = assert!(std::mem::size_of::<RewardTraits>() == 0x4);

impl RewardTraits {
    pub fn len(&self) -> usize {
        self.trait_ids.iter().filter(|id| **id != 0).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn first(&self) -> Option<u8> {
        self.trait_ids.into_iter().find(|id| *id != 0)
    }
}

/// Skill set record in the Japanese layout. Other regions append 20 bytes,
/// see [`SkillSetEntryExtended`].
#[repr(packed, C)]
#[derive(bytemuck::Pod, bytemuck::Zeroable, Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillSetEntry {
    pub can_upgrade: u8,
    pub category: u8,
    pub max_skill_points: u8,
    pub unknown_a: [u8; 1],
    pub skill_point_requirements: [SkillPointRequirement; NUM_TIERS],
    pub skills: [RewardSkills; NUM_TIERS],
    pub traits: [RewardTraits; NUM_TIERS],
    pub skill_set_id: u16,
    pub unknown_b: [u8; 2],
    pub species_learnt_by: [u16; 6],
}
const _: () = assert!(std::mem::size_of::<SkillSetEntry>() == 0xdc);

impl SkillSetEntry {
    /// Number of populated reward tiers.
    ///
    /// Unused tiers repeat the previous cumulative point total.
    pub fn num_rewards(&self) -> usize {
        let mut prev_total = 0;
        for (i, requirement) in self.skill_point_requirements.iter().enumerate() {
            let total = requirement.points_total;
            if total == prev_total {
                return i;
            }
            prev_total = total;
        }
        NUM_TIERS
    }
}

impl super::Entry for SkillSetEntry {
    const FILE_NAME: &'static str = FILE_NAME;
    const MAGIC: &'static [u8; 4] = b"SKIL";
    const WRITABLE: bool = false;
}

#[repr(packed, C)]
#[derive(bytemuck::Pod, bytemuck::Zeroable, Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillSetEntryExtended {
    pub entry: SkillSetEntry,
    pub unknown_c: [u8; 20],
}
const _: () = assert!(std::mem::size_of::<SkillSetEntryExtended>() == 0xf0);

impl super::Entry for SkillSetEntryExtended {
    const FILE_NAME: &'static str = FILE_NAME;
    const MAGIC: &'static [u8; 4] = b"SKIL";
    const WRITABLE: bool = false;
}

/// The skill set table, in the record layout of the region it was read from.
#[derive(Clone, Debug, PartialEq)]
pub enum SkillTbl {
    Japan(super::Table<SkillSetEntry>),
    Extended(super::Table<SkillSetEntryExtended>),
}

impl SkillTbl {
    pub fn decode(buf: &[u8], region: crate::region::Region) -> Result<Self, super::Error> {
        Ok(if region.has_extended_skill_sets() {
            SkillTbl::Extended(super::Table::decode(buf)?)
        } else {
            SkillTbl::Japan(super::Table::decode(buf)?)
        })
    }

    // TODO: support writing once the trailing block of the extended layout is understood.
    pub fn encode(&self) -> Result<Vec<u8>, super::Error> {
        match self {
            SkillTbl::Japan(table) => table.encode(),
            SkillTbl::Extended(table) => table.encode(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            SkillTbl::Japan(table) => table.entries.len(),
            SkillTbl::Extended(table) => table.entries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn entries(&self) -> Box<dyn Iterator<Item = &SkillSetEntry> + '_> {
        match self {
            SkillTbl::Japan(table) => Box::new(table.entries.iter()),
            SkillTbl::Extended(table) => Box::new(table.entries.iter().map(|e| &e.entry)),
        }
    }
}
