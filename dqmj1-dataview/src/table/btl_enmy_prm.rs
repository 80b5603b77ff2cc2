pub const FILE_NAME: &str = "BtlEnmyPrm.bin";

#[repr(packed, C)]
#[derive(bytemuck::Pod, bytemuck::Zeroable, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EnemySkill {
    pub unknown_a: [u8; 2],
    pub skill_id: u16,
}
const _: () = assert!(std::mem::size_of::<EnemySkill>() == 0x4);

#[repr(packed, C)]
#[derive(bytemuck::Pod, bytemuck::Zeroable, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ItemDrop {
    pub item_id: u16,
    pub chance_exponent: u16,
}
const _: () = assert!(std::mem::size_of::<ItemDrop>() == 0x4);

impl ItemDrop {
    /// Probability of the drop, `1 / 2^chance_exponent`.
    pub fn chance(&self) -> f64 {
        0.5f64.powi(self.chance_exponent as i32)
    }
}

/// A monster as it appears in a battle, as a gift or as a starter.
#[repr(packed, C)]
#[derive(bytemuck::Pod, bytemuck::Zeroable, Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncounterEntry {
    pub species_id: u16,
    pub unknown_a: [u8; 6],
    pub skills: [EnemySkill; 6],
    pub item_drops: [ItemDrop; 2],
    pub gold: u16,
    pub unknown_b: [u8; 2],
    pub exp: u16,
    pub unknown_c: [u8; 2],
    pub level: u8,
    pub unknown_d: [u8; 1],
    pub unknown_e: [u8; 1],
    pub scout_chance: u8,
    pub max_hp: u16,
    pub max_mp: u16,
    pub attack: u16,
    pub defense: u16,
    pub agility: u16,
    pub wisdom: u16,
    pub unknown_f: [u8; 20],
    pub skill_set_ids: [u8; 3],
    pub unknown_g: [u8; 1],
}
const _: () = assert!(std::mem::size_of::<EncounterEntry>() == 0x58);

impl super::Entry for EncounterEntry {
    const FILE_NAME: &'static str = FILE_NAME;
    const MAGIC: &'static [u8; 4] = b"BEPT";
}

pub type BtlEnmyPrm = super::Table<EncounterEntry>;

#[cfg(test)]
mod tests {
    use super::*;

    #[rustfmt::skip]
    const ENTRY: &[u8] = &[
        // species_id
        0x01, 0x00,
        // unknown_a
        0x0a, 0x0b, 0x0c, 0x0d, 0x0e, 0x0f,
        // skills
        0x00, 0x00, 0x01, 0x00,
        0x00, 0x00, 0x02, 0x00,
        0x00, 0x00, 0x03, 0x00,
        0x00, 0x00, 0x04, 0x00,
        0x00, 0x00, 0x05, 0x00,
        0x11, 0x22, 0x06, 0x00,
        // item_drops
        0x01, 0x00, 0x00, 0x00,
        0x02, 0x00, 0x07, 0x00,
        // gold
        0x20, 0x01,
        // unknown_b
        0x33, 0x44,
        // exp
        0x02, 0x00,
        // unknown_c
        0x00, 0x00,
        // level
        0x10,
        // unknown_d
        0x00,
        // unknown_e
        0x99,
        // scout_chance
        0x05,
        // max_hp, max_mp, attack, defense, agility, wisdom
        0x05, 0x00, 0x06, 0x00, 0x07, 0x00, 0x08, 0x00, 0x09, 0x00, 0x0a, 0x00,
        // unknown_f
        0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09,
        0x0a, 0x0b, 0x0c, 0x0d, 0x0e, 0x0f, 0x10, 0x11, 0x12, 0x13,
        // skill_set_ids
        0x01, 0x02, 0x03,
        // unknown_g
        0xee,
    ];

    fn table_bytes(count: u32, entries: &[&[u8]]) -> Vec<u8> {
        let mut buf = b"BEPT".to_vec();
        buf.extend_from_slice(&count.to_le_bytes());
        for entry in entries {
            buf.extend_from_slice(entry);
        }
        buf
    }

    #[test]
    fn test_decode_entry() {
        let table = BtlEnmyPrm::decode(&table_bytes(1, &[ENTRY])).unwrap();
        assert_eq!(table.entries.len(), 1);

        let entry = table.entries[0];
        assert_eq!({ entry.species_id }, 1);
        assert_eq!(entry.unknown_a, [0x0a, 0x0b, 0x0c, 0x0d, 0x0e, 0x0f]);
        assert_eq!(
            entry.skills.map(|skill| skill.skill_id),
            [1, 2, 3, 4, 5, 6]
        );
        assert_eq!(entry.skills[5].unknown_a, [0x11, 0x22]);
        assert_eq!({ entry.item_drops[1].item_id }, 2);
        assert_eq!({ entry.item_drops[1].chance_exponent }, 7);
        assert_eq!({ entry.gold }, 288);
        assert_eq!(entry.unknown_b, [0x33, 0x44]);
        assert_eq!({ entry.exp }, 2);
        assert_eq!(entry.level, 16);
        assert_eq!(entry.unknown_e, [0x99]);
        assert_eq!(entry.scout_chance, 5);
        assert_eq!(
            [entry.max_hp, entry.max_mp, entry.attack, entry.defense, entry.agility, entry.wisdom],
            [5, 6, 7, 8, 9, 10]
        );
        assert_eq!(entry.unknown_f[19], 0x13);
        assert_eq!(entry.skill_set_ids, [1, 2, 3]);
        assert_eq!(entry.unknown_g, [0xee]);
    }

    #[test]
    fn test_round_trip_preserves_unknown_fields() {
        let buf = table_bytes(1, &[ENTRY]);
        let table = BtlEnmyPrm::decode(&buf).unwrap();
        assert_eq!(table.encode().unwrap(), buf);
        assert_eq!(BtlEnmyPrm::decode(&table.encode().unwrap()).unwrap(), table);
    }

    #[test]
    fn test_encode_count_follows_entries() {
        let mut table = BtlEnmyPrm::decode(&table_bytes(3, &[ENTRY, ENTRY, ENTRY])).unwrap();
        table.entries.pop();

        let reencoded = table.encode().unwrap();
        assert_eq!(&reencoded[4..8], &[2, 0, 0, 0]);
        assert_eq!(BtlEnmyPrm::decode(&reencoded).unwrap().entries.len(), 2);
    }

    #[test]
    fn test_decode_truncated() {
        let buf = table_bytes(5, &[ENTRY, ENTRY, ENTRY, ENTRY]);
        assert_eq!(
            BtlEnmyPrm::decode(&buf),
            Err(crate::table::Error::Truncated {
                expected: 8 + 5 * 0x58,
                actual: 8 + 4 * 0x58,
            })
        );
        assert!(matches!(
            BtlEnmyPrm::decode(b"BEPT\x01"),
            Err(crate::table::Error::Truncated { expected: 8, actual: 5 })
        ));
    }

    #[test]
    fn test_decode_ignores_magic() {
        let mut buf = table_bytes(1, &[ENTRY]);
        buf[..4].copy_from_slice(b"XXXX");
        assert_eq!(BtlEnmyPrm::decode(&buf).unwrap().entries.len(), 1);
        // The expected magic is always written back.
        assert_eq!(&BtlEnmyPrm::decode(&buf).unwrap().encode().unwrap()[..4], b"BEPT");
    }

    #[test]
    fn test_modify_field() {
        let mut table = BtlEnmyPrm::decode(&table_bytes(1, &[ENTRY])).unwrap();
        table.entries[0].gold = 0x1234;
        let buf = table.encode().unwrap();
        assert_eq!(&buf[8 + 0x28..][..2], &[0x34, 0x12]);
        assert_eq!(&buf[8 + 0x2a..][..2], &[0x33, 0x44]);
    }

    #[test]
    fn test_item_drop_chance() {
        let always = ItemDrop {
            item_id: 1,
            chance_exponent: 0,
        };
        let rare = ItemDrop {
            item_id: 2,
            chance_exponent: 7,
        };
        assert_eq!(always.chance(), 1.0);
        assert_eq!(rare.chance(), 0.0078125);
    }
}
