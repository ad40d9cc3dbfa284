//! In-memory world driven by a replay script.

use colo_core::{GameWorld, Npc, Position};

#[derive(Debug, Clone, Default)]
pub struct ScriptedWorld {
    pub tick: u32,
    pub regions: Option<Vec<u32>>,
    pub npcs: Vec<Npc>,
    pub player: Option<Position>,
    pub modifier_level: i32,
}

impl ScriptedWorld {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an NPC, replacing any NPC that already holds its index.
    pub fn spawn(&mut self, npc: Npc) {
        self.despawn(npc.index);
        self.npcs.push(npc);
    }

    pub fn despawn(&mut self, index: i32) -> bool {
        let before = self.npcs.len();
        self.npcs.retain(|npc| npc.index != index);
        self.npcs.len() != before
    }

    pub fn npc_mut(&mut self, index: i32) -> Option<&mut Npc> {
        self.npcs.iter_mut().find(|npc| npc.index == index)
    }
}

impl GameWorld for ScriptedWorld {
    fn tick_count(&self) -> u32 {
        self.tick
    }

    fn map_regions(&self) -> Option<&[u32]> {
        self.regions.as_deref()
    }

    fn npcs(&self) -> &[Npc] {
        &self.npcs
    }

    fn local_player_position(&self) -> Option<Position> {
        self.player
    }

    fn modifier_level(&self) -> i32 {
        self.modifier_level
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn npc(index: i32, npc_id: i32) -> Npc {
        Npc {
            index,
            npc_id,
            scene_position: Some(Position::new(40, 70)),
            spot_anims: Vec::new(),
        }
    }

    #[test]
    fn spawn_replaces_same_index() {
        let mut world = ScriptedWorld::new();
        world.spawn(npc(1, 10));
        world.spawn(npc(1, 20));
        assert_eq!(world.npcs().len(), 1);
        assert_eq!(world.npcs()[0].npc_id, 20);
    }

    #[test]
    fn despawn_reports_removal() {
        let mut world = ScriptedWorld::new();
        world.spawn(npc(1, 10));
        assert!(world.despawn(1));
        assert!(!world.despawn(1));
    }
}
