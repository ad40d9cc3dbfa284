//! Arena membership check

use crate::game_data::COLOSSEUM_REGION_ID;
use crate::world::GameWorld;

/// Decides whether the local player is inside the tracked region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionGate {
    region_id: u32,
}

impl Default for RegionGate {
    fn default() -> Self {
        Self::new(COLOSSEUM_REGION_ID)
    }
}

impl RegionGate {
    pub const fn new(region_id: u32) -> Self {
        Self { region_id }
    }

    pub const fn region_id(&self) -> u32 {
        self.region_id
    }

    /// No world view counts as outside the region.
    pub fn is_in_region<W: GameWorld + ?Sized>(&self, world: &W) -> bool {
        world
            .map_regions()
            .is_some_and(|regions| regions.contains(&self.region_id))
    }
}
