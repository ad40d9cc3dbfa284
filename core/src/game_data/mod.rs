mod colosseum;
mod spot_anims;

pub use colosseum::{
    COLOSSEUM_REGION_ID, LOS_BASE_URL, LOS_COORD_OFFSET_X, LOS_COORD_OFFSET_Y, MANTIMAYHEM_ACTIVE_LEVEL,
    REINFORCEMENT_DELAY_TICKS, WAVE_NPC_LOS_CODES, is_manticore, is_wave_npc, los_code, npc_id,
};
pub use spot_anims::spot_anim_id;
