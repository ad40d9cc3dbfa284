//! Inbound view of the game world.
//!
//! The session controller never talks to a game client directly; whatever
//! hosts it implements [`GameWorld`] and hands it in with every event.

/// Integer tile position. Scene space when reported by the world, LoS space
/// after [`crate::los::to_los_space`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// An NPC as currently seen by the world.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Npc {
    /// Instance index, stable for as long as the NPC exists
    pub index: i32,
    /// NPC class/template ID
    pub npc_id: i32,
    /// Scene position, `None` when it can't be resolved against the world view
    pub scene_position: Option<Position>,
    /// Spot animations currently playing on the NPC
    pub spot_anims: Vec<i32>,
}

/// Queries the core makes against the live game world.
///
/// Unavailable data is reported as absence, never as an error.
pub trait GameWorld {
    /// Current game tick
    fn tick_count(&self) -> u32;

    /// Map regions of the loaded scene, `None` when there is no world view
    fn map_regions(&self) -> Option<&[u32]>;

    /// Every NPC in the top-level world view
    fn npcs(&self) -> &[Npc];

    /// Local player's scene position, `None` when it can't be resolved
    fn local_player_position(&self) -> Option<Position>;

    /// Current Mantimayhem modifier stack level
    fn modifier_level(&self) -> i32;
}
