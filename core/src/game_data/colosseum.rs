//! Fortis Colosseum identification data
//!
//! NPC template ids, the region the encounter lives in, and the calibration
//! constants used by the LoS tool at los.colosim.com.

use phf::phf_map;

/// Map region containing the arena
pub const COLOSSEUM_REGION_ID: u32 = 7216;

/// Every LoS link starts with this prefix
pub const LOS_BASE_URL: &str = "https://los.colosim.com/?";

/// Scene x of the LoS grid origin
pub const LOS_COORD_OFFSET_X: i32 = 32;
/// Scene y of the LoS grid origin (the LoS y axis is flipped)
pub const LOS_COORD_OFFSET_Y: i32 = 83;

/// Reinforcements are assumed to have spawned once more than this many ticks
/// have passed since the wave started.
pub const REINFORCEMENT_DELAY_TICKS: u32 = 10;

/// Mantimayhem stack level at which manticores fire full three-orb patterns
pub const MANTIMAYHEM_ACTIVE_LEVEL: i32 = 3;

pub mod npc_id {
    pub const SERPENT_SHAMAN: i32 = 12811;
    pub const JAVELIN_COLOSSUS: i32 = 12817;
    pub const JAGUAR_WARRIOR: i32 = 12810;
    pub const MANTICORE: i32 = 12818;
    pub const MINOTAUR: i32 = 12812;
    pub const MINOTAUR_RED_FLAG: i32 = 12813;
    pub const SHOCKWAVE_COLOSSUS: i32 = 12816;
}

/// Wave NPC template id → single digit code understood by the LoS tool
pub static WAVE_NPC_LOS_CODES: phf::Map<i32, u8> = phf_map! {
    12811i32 => 1, // Serpent shaman
    12817i32 => 2, // Javelin Colossus
    12810i32 => 3, // Jaguar warrior
    12818i32 => 4, // Manticore
    12812i32 => 5, // Minotaur
    12813i32 => 5, // Minotaur (red flag)
    12816i32 => 6, // Shockwave Colossus
};

/// LoS code for an NPC template, `None` for anything outside the wave roster
pub fn los_code(npc_id: i32) -> Option<u8> {
    WAVE_NPC_LOS_CODES.get(&npc_id).copied()
}

pub fn is_wave_npc(npc_id: i32) -> bool {
    WAVE_NPC_LOS_CODES.contains_key(&npc_id)
}

pub fn is_manticore(npc_id: i32) -> bool {
    npc_id == self::npc_id::MANTICORE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_has_six_codes_for_seven_npcs() {
        assert_eq!(WAVE_NPC_LOS_CODES.len(), 7);
        let mut codes: Vec<u8> = WAVE_NPC_LOS_CODES.values().copied().collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn both_minotaurs_share_a_code() {
        assert_eq!(los_code(npc_id::MINOTAUR), Some(5));
        assert_eq!(los_code(npc_id::MINOTAUR_RED_FLAG), Some(5));
    }

    #[test]
    fn unknown_npc_has_no_code() {
        assert_eq!(los_code(1), None);
        assert!(!is_wave_npc(1));
        assert!(is_wave_npc(npc_id::MANTICORE));
        assert!(is_manticore(npc_id::MANTICORE));
        assert!(!is_manticore(npc_id::MINOTAUR));
    }
}
