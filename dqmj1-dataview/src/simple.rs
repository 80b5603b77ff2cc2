//! Read-only views that resolve the numeric ids in raw records to names.

use itertools::Itertools;

use crate::string_table::StringTables;
use crate::table::btl_enmy_prm::EncounterEntry;
use crate::table::skill_tbl::{SkillPointRequirement, SkillSetEntry};

pub const NUM_SKILLS: usize = 285;

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ItemDrop {
    pub item: Option<String>,
    pub item_id: u16,
    pub chance: f64,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Encounter {
    pub species: Option<String>,
    pub species_id: u16,
    pub skills: Vec<Option<String>>,
    pub skill_ids: Vec<u16>,
    pub item_drops: Vec<ItemDrop>,
    pub gold: u16,
    pub exp: u16,
    pub level: u8,
    pub scout_chance: u8,
    pub max_hp: u16,
    pub max_mp: u16,
    pub attack: u16,
    pub defense: u16,
    pub agility: u16,
    pub wisdom: u16,
    pub skill_sets: Vec<Option<String>>,
    pub skill_set_ids: Vec<u8>,
}

impl Encounter {
    pub fn from_raw(raw: &EncounterEntry, string_tables: &StringTables) -> Self {
        // A slot only counts as a repeat if its unknown bytes match too.
        let skills = raw.skills.into_iter().unique().collect::<Vec<_>>();
        let skill_set_ids = raw
            .skill_set_ids
            .into_iter()
            .filter(|id| *id != 0)
            .unique()
            .collect::<Vec<_>>();

        Self {
            species: string_tables.species_name(raw.species_id as usize).map(String::from),
            species_id: raw.species_id,
            skills: skills
                .iter()
                .map(|skill| string_tables.skill_name(skill.skill_id as usize).map(String::from))
                .collect(),
            skill_ids: skills.iter().map(|skill| skill.skill_id).collect(),
            item_drops: raw
                .item_drops
                .into_iter()
                .filter(|drop| drop.item_id != 0)
                .map(|drop| ItemDrop {
                    item: string_tables.item_name(drop.item_id as usize).map(String::from),
                    item_id: drop.item_id,
                    chance: drop.chance(),
                })
                .collect(),
            gold: raw.gold,
            exp: raw.exp,
            level: raw.level,
            scout_chance: raw.scout_chance,
            max_hp: raw.max_hp,
            max_mp: raw.max_mp,
            attack: raw.attack,
            defense: raw.defense,
            agility: raw.agility,
            wisdom: raw.wisdom,
            skill_sets: skill_set_ids
                .iter()
                .map(|id| string_tables.skill_set_name(*id as usize).map(String::from))
                .collect(),
            skill_set_ids,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Reward {
    pub points_delta: u16,
    pub points_total: u16,
    pub skill: Option<String>,
    pub skill_id: Option<u16>,
    pub trait_name: Option<String>,
    pub trait_id: Option<u8>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SkillSet {
    pub name: Option<String>,
    pub can_upgrade: bool,
    pub category: u8,
    pub max_skill_points: u8,
    pub rewards: Vec<Reward>,
    pub species_learnt_by: Vec<Option<String>>,
    pub species_learnt_by_ids: Vec<u16>,
}

impl SkillSet {
    /// `index` is the entry's position in the skill set table, which is what names are keyed by.
    pub fn from_raw(index: usize, raw: &SkillSetEntry, string_tables: &StringTables) -> Self {
        let species_learnt_by = raw.species_learnt_by;
        let species_learnt_by_ids = species_learnt_by
            .into_iter()
            .filter(|id| *id != 0)
            .collect::<Vec<_>>();

        Self {
            name: string_tables.skill_set_name(index).map(String::from),
            can_upgrade: raw.can_upgrade > 0,
            category: raw.category,
            max_skill_points: raw.max_skill_points,
            rewards: raw
                .skill_point_requirements
                .iter()
                .zip(raw.skills.iter())
                .zip(raw.traits.iter())
                .take(raw.num_rewards())
                .map(|((requirement, skills), traits)| {
                    let SkillPointRequirement {
                        points_delta,
                        points_total,
                    } = *requirement;
                    let skill_id = skills.first();
                    let trait_id = traits.first();
                    Reward {
                        points_delta,
                        points_total,
                        skill: skill_id.and_then(|id| string_tables.skill_name(id as usize).map(String::from)),
                        skill_id,
                        trait_name: trait_id.and_then(|id| string_tables.trait_name(id as usize).map(String::from)),
                        trait_id,
                    }
                })
                .collect(),
            species_learnt_by: species_learnt_by_ids
                .iter()
                .map(|id| string_tables.species_name(*id as usize).map(String::from))
                .collect(),
            species_learnt_by_ids,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Skill {
    pub id: usize,
    pub name: Option<String>,
}

impl Skill {
    pub fn from_raw(id: usize, string_tables: &StringTables) -> Self {
        Self {
            id,
            name: string_tables.skill_name(id).map(String::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::btl_enmy_prm::EnemySkill;

    fn string_tables() -> StringTables {
        StringTables {
            species_names: (0..512).map(|i| format!("species_{}", i)).collect(),
            skill_names: (0..NUM_SKILLS).map(|i| format!("skill_{}", i)).collect(),
            trait_names: (0..256).map(|i| format!("trait_{}", i)).collect(),
            skill_set_names: (0..257).map(|i| format!("skill_set_{}", i)).collect(),
            item_names: (0..257).map(|i| format!("item_{}", i)).collect(),
        }
    }

    fn raw_encounter() -> EncounterEntry {
        let mut raw: EncounterEntry = bytemuck::Zeroable::zeroed();
        raw.species_id = 1;
        for (i, skill) in raw.skills.iter_mut().enumerate() {
            skill.skill_id = i as u16 + 1;
        }
        raw.item_drops[0].item_id = 1;
        raw.item_drops[1].item_id = 2;
        raw.item_drops[1].chance_exponent = 7;
        raw.gold = 288;
        raw.exp = 2;
        raw.level = 16;
        raw.scout_chance = 5;
        raw.max_hp = 5;
        raw.max_mp = 6;
        raw.attack = 7;
        raw.defense = 8;
        raw.agility = 9;
        raw.wisdom = 10;
        raw.skill_set_ids = [1, 2, 3];
        raw
    }

    fn names(prefix: &str, ids: &[usize]) -> Vec<Option<String>> {
        ids.iter().map(|i| Some(format!("{}_{}", prefix, i))).collect()
    }

    #[test]
    fn test_encounter_simple() {
        let encounter = Encounter::from_raw(&raw_encounter(), &string_tables());
        assert_eq!(
            encounter,
            Encounter {
                species: Some("species_1".to_string()),
                species_id: 1,
                skills: names("skill", &[1, 2, 3, 4, 5, 6]),
                skill_ids: vec![1, 2, 3, 4, 5, 6],
                item_drops: vec![
                    ItemDrop {
                        item: Some("item_1".to_string()),
                        item_id: 1,
                        chance: 1.0,
                    },
                    ItemDrop {
                        item: Some("item_2".to_string()),
                        item_id: 2,
                        chance: 0.0078125,
                    },
                ],
                gold: 288,
                exp: 2,
                level: 16,
                scout_chance: 5,
                max_hp: 5,
                max_mp: 6,
                attack: 7,
                defense: 8,
                agility: 9,
                wisdom: 10,
                skill_sets: names("skill_set", &[1, 2, 3]),
                skill_set_ids: vec![1, 2, 3],
            }
        );
    }

    #[test]
    fn test_encounter_repeat_skill() {
        let mut raw = raw_encounter();
        raw.skills[3].skill_id = 2;
        let encounter = Encounter::from_raw(&raw, &string_tables());
        assert_eq!(encounter.skill_ids, vec![1, 2, 3, 5, 6]);
        assert_eq!(encounter.skills, names("skill", &[1, 2, 3, 5, 6]));
    }

    #[test]
    fn test_encounter_repeat_skill_with_different_unknown() {
        let mut raw = raw_encounter();
        raw.skills[3] = EnemySkill {
            unknown_a: [0x01, 0x00],
            skill_id: 2,
        };
        let encounter = Encounter::from_raw(&raw, &string_tables());
        assert_eq!(encounter.skill_ids, vec![1, 2, 3, 2, 5, 6]);
    }

    #[test]
    fn test_encounter_repeat_and_empty_skill_set() {
        let mut raw = raw_encounter();
        raw.skill_set_ids = [1, 0, 1];
        let encounter = Encounter::from_raw(&raw, &string_tables());
        assert_eq!(encounter.skill_set_ids, vec![1]);
        assert_eq!(encounter.skill_sets, names("skill_set", &[1]));
    }

    #[test]
    fn test_encounter_empty_item_drop() {
        let mut raw = raw_encounter();
        raw.item_drops[0].item_id = 0;
        let encounter = Encounter::from_raw(&raw, &string_tables());
        assert_eq!(encounter.item_drops.len(), 1);
        assert_eq!(encounter.item_drops[0].item_id, 2);
    }

    #[test]
    fn test_encounter_missing_names() {
        let encounter = Encounter::from_raw(&raw_encounter(), &StringTables::default());
        assert_eq!(encounter.species, None);
        assert_eq!(encounter.species_id, 1);
        assert!(encounter.skills.iter().all(|name| name.is_none()));
    }

    #[test]
    fn test_skill_set() {
        let mut raw: SkillSetEntry = bytemuck::Zeroable::zeroed();
        raw.can_upgrade = 1;
        raw.category = 3;
        raw.max_skill_points = 50;
        for (i, total) in [3u16, 6, 9, 9, 9, 9, 9, 9, 9, 9].into_iter().enumerate() {
            raw.skill_point_requirements[i] = SkillPointRequirement {
                points_delta: 3,
                points_total: total,
            };
        }
        raw.skills[0].skill_ids = [0, 12, 0, 0];
        raw.traits[1].trait_ids = [4, 5, 0, 0];
        raw.species_learnt_by = [7, 0, 9, 0, 0, 0];

        let skill_set = SkillSet::from_raw(2, &raw, &string_tables());
        assert_eq!(skill_set.name.as_deref(), Some("skill_set_2"));
        assert!(skill_set.can_upgrade);
        assert_eq!(skill_set.category, 3);
        assert_eq!(skill_set.max_skill_points, 50);
        assert_eq!(
            skill_set.rewards,
            vec![
                Reward {
                    points_delta: 3,
                    points_total: 3,
                    skill: Some("skill_12".to_string()),
                    skill_id: Some(12),
                    trait_name: None,
                    trait_id: None,
                },
                Reward {
                    points_delta: 3,
                    points_total: 6,
                    skill: None,
                    skill_id: None,
                    trait_name: Some("trait_4".to_string()),
                    trait_id: Some(4),
                },
                Reward {
                    points_delta: 3,
                    points_total: 9,
                    skill: None,
                    skill_id: None,
                    trait_name: None,
                    trait_id: None,
                },
            ]
        );
        assert_eq!(skill_set.species_learnt_by_ids, vec![7, 9]);
        assert_eq!(skill_set.species_learnt_by, names("species", &[7, 9]));
    }

    #[test]
    fn test_skill() {
        let tables = string_tables();
        assert_eq!(Skill::from_raw(4, &tables).name.as_deref(), Some("skill_4"));
        assert_eq!(Skill::from_raw(NUM_SKILLS, &tables).name, None);
    }
}
