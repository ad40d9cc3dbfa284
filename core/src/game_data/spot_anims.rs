// Manticore orb projectiles, shown on the manticore while it charges an attack
pub mod spot_anim_id {
    pub const MANTICORE_MAGIC_ORB: i32 = 2681;
    pub const MANTICORE_RANGED_ORB: i32 = 2683;
    pub const MANTICORE_MELEE_ORB: i32 = 2685;
}
