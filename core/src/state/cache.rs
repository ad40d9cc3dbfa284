use crate::los::EntitySnapshot;
use crate::manticore::OrbPatternTracker;
use crate::signal_processor::WavePhase;
use crate::world::Position;

/// Pure storage for the encounter in progress.
/// Routing logic lives in SessionController.
#[derive(Debug, Clone, Default)]
pub struct EncounterState {
    /// Whether the player was inside the arena on the last tick
    pub in_region: bool,
    pub phase: WavePhase,

    // Captured NPCs, in capture order
    pub wave_spawns: Vec<EntitySnapshot>,
    pub reinforcement_spawns: Vec<EntitySnapshot>,

    // Player location in LoS space at capture time
    pub player_at_wave_spawn: Option<Position>,
    pub player_at_reinforcements: Option<Position>,

    /// Mantimayhem III, re-read on every wave start
    pub mantimayhem: bool,
    pub orb_patterns: OrbPatternTracker,
}

impl EncounterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to defaults: outside the arena, no modifier, no wave.
    pub fn reset(&mut self) {
        self.in_region = false;
        self.mantimayhem = false;
        self.clear_wave_state();
    }

    /// Drop everything tied to the current wave. Region membership and the
    /// modifier flag survive.
    pub fn clear_wave_state(&mut self) {
        self.phase = WavePhase::Idle;
        self.wave_spawns.clear();
        self.reinforcement_spawns.clear();
        self.player_at_wave_spawn = None;
        self.player_at_reinforcements = None;
        self.orb_patterns.clear();
    }

    pub fn current_wave(&self) -> u32 {
        self.phase.current_wave()
    }

    pub fn spawns(&self, reinforcements: bool) -> &[EntitySnapshot] {
        if reinforcements {
            &self.reinforcement_spawns
        } else {
            &self.wave_spawns
        }
    }
}
