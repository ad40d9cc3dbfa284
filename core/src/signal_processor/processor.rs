use colo_types::AppConfig;

use crate::game_data::{MANTIMAYHEM_ACTIVE_LEVEL, is_manticore, is_wave_npc};
use crate::los::{EntitySnapshot, LinkContext, build_los_url, to_los_space};
use crate::region::RegionGate;
use crate::signal_processor::chat::{ChatTrigger, parse_chat_trigger};
use crate::signal_processor::signal::WaveSignal;
use crate::signal_processor::wave_state::{PendingCapture, WavePhase};
use crate::state::EncounterState;
use crate::world::{GameWorld, Npc, Position};

/// Routes inbound game events into the encounter state and emits signals.
///
/// Every call runs to completion before the next one; hosts that receive
/// events on several threads must queue them into a single consumer.
#[derive(Debug, Clone)]
pub struct SessionController {
    state: EncounterState,
    region: RegionGate,
    config: AppConfig,
}

impl Default for SessionController {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl SessionController {
    pub fn new(config: AppConfig) -> Self {
        Self::with_region(config, RegionGate::default())
    }

    pub fn with_region(config: AppConfig, region: RegionGate) -> Self {
        Self {
            state: EncounterState::new(),
            region,
            config,
        }
    }

    pub fn state(&self) -> &EncounterState {
        &self.state
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: AppConfig) {
        self.config = config;
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Inbound Events
    // ─────────────────────────────────────────────────────────────────────────

    /// Handle a game chat message. Only wave start/complete messages matter.
    pub fn on_chat_line<W: GameWorld + ?Sized>(&mut self, message: &str, world: &W) -> Vec<WaveSignal> {
        match parse_chat_trigger(message) {
            Some(ChatTrigger::WaveStarted { wave }) => self.start_wave(wave, world),
            Some(ChatTrigger::WaveCompleted { wave }) => {
                tracing::info!(wave, current_wave = self.state.current_wave(), "Wave completed");
                self.state.clear_wave_state();
                Vec::new()
            }
            None => Vec::new(),
        }
    }

    /// Handle a game tick: region polling, reinforcement timing, pending
    /// captures and manticore sampling, in that order.
    pub fn on_tick<W: GameWorld + ?Sized>(&mut self, world: &W) -> Vec<WaveSignal> {
        let mut signals = Vec::new();

        self.poll_region(world);

        let tick = world.tick_count();
        if self.state.phase.advance(tick) {
            tracing::info!(wave = self.state.current_wave(), tick, "Reinforcement phase started");
        }

        if self.state.in_region
            && let Some(capture) = self.state.phase.take_capture()
        {
            signals.extend(self.capture(capture, world));
        }

        if self.state.in_region && self.state.phase.is_active() {
            signals.extend(self.sample_manticores(world));
        }

        signals
    }

    /// Handle an NPC spawn. Wave NPCs arm a capture for the next tick, so a
    /// whole batch of spawns results in a single snapshot.
    pub fn on_npc_spawned(&mut self, npc: &Npc) {
        if !self.state.in_region {
            return;
        }

        // Reinforcement manticores are picked up by the per-tick scan instead
        if is_manticore(npc.npc_id) && !self.state.phase.in_reinforcements() {
            self.state.orb_patterns.track(npc);
        }

        if is_wave_npc(npc.npc_id) && self.state.phase.arm_capture() {
            tracing::debug!(
                wave = self.state.current_wave(),
                npc_id = npc.npc_id,
                reinforcements = self.state.phase.in_reinforcements(),
                "Capture armed"
            );
        }
    }

    /// Re-check the region after a login, in case the player logged out
    /// inside the arena and came back somewhere else.
    pub fn on_logged_in<W: GameWorld + ?Sized>(&mut self, world: &W) {
        if self.state.in_region && !self.region.is_in_region(world) {
            tracing::info!("Logged in outside the colosseum");
            self.state.reset();
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // On-demand Links
    // ─────────────────────────────────────────────────────────────────────────

    /// Link for the arena as it is right now. `None` outside the arena or when
    /// no wave NPCs are present.
    pub fn generate_current_link<W: GameWorld + ?Sized>(&mut self, world: &W) -> Option<String> {
        if !self.state.in_region {
            return None;
        }

        let snapshots = self.collect_wave_npcs(world);
        if snapshots.is_empty() {
            return None;
        }

        let player = if self.config.player_location.current {
            player_los_position(world)
        } else {
            None
        };

        Some(build_los_url(
            &snapshots,
            player,
            LinkContext::Current,
            self.state.mantimayhem,
            &self.state.orb_patterns,
        ))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Internals
    // ─────────────────────────────────────────────────────────────────────────

    fn start_wave<W: GameWorld + ?Sized>(&mut self, wave: u32, world: &W) -> Vec<WaveSignal> {
        let mut signals = Vec::new();

        if wave == 1 {
            signals.push(WaveSignal::SessionReset);
            self.state.clear_wave_state();
        }

        let tick = world.tick_count();
        self.state.phase = WavePhase::start(wave, tick);

        let level = world.modifier_level();
        let mantimayhem = level >= MANTIMAYHEM_ACTIVE_LEVEL;
        if mantimayhem != self.state.mantimayhem {
            tracing::info!(level, mantimayhem, "Mantimayhem III status changed");
        }
        self.state.mantimayhem = mantimayhem;

        tracing::info!(wave, tick, "Wave started");
        signals
    }

    fn poll_region<W: GameWorld + ?Sized>(&mut self, world: &W) {
        let in_region = self.region.is_in_region(world);

        if !self.state.in_region && in_region {
            self.state.reset();
            self.state.in_region = true;
            tracing::info!(region_id = self.region.region_id(), "Entered the colosseum");
        } else if self.state.in_region && !in_region {
            self.state.reset();
            tracing::info!(region_id = self.region.region_id(), "Left the colosseum");
        }
    }

    /// Snapshot every wave NPC with a resolvable position. Manticores found
    /// here start being tracked if no spawn event introduced them.
    fn collect_wave_npcs<W: GameWorld + ?Sized>(&mut self, world: &W) -> Vec<EntitySnapshot> {
        let mut snapshots = Vec::new();

        for npc in world.npcs() {
            if !is_wave_npc(npc.npc_id) {
                continue;
            }
            let Some(position) = npc.scene_position else {
                continue;
            };
            if is_manticore(npc.npc_id) {
                self.state.orb_patterns.track(npc);
            }
            snapshots.push(EntitySnapshot {
                npc_id: npc.npc_id,
                npc_index: npc.index,
                position,
            });
        }

        snapshots
    }

    fn capture<W: GameWorld + ?Sized>(&mut self, capture: PendingCapture, world: &W) -> Vec<WaveSignal> {
        let PendingCapture { wave, reinforcements } = capture;

        let snapshots = self.collect_wave_npcs(world);
        self.state.orb_patterns.capture_spawn_states(reinforcements);

        tracing::info!(wave, reinforcements, npcs = snapshots.len(), "Captured wave NPCs");

        let captured_any = !snapshots.is_empty();
        if reinforcements {
            self.state.reinforcement_spawns = snapshots;
        } else {
            self.state.wave_spawns = snapshots;
        }

        if !captured_any {
            return Vec::new();
        }

        let mut signals = Vec::new();
        if reinforcements {
            if self.config.player_location.reinforcements {
                self.state.player_at_reinforcements = player_los_position(world);
            }
        } else {
            if self.config.player_location.spawns {
                self.state.player_at_wave_spawn = player_los_position(world);
            }
            signals.push(WaveSignal::WaveAdded { wave });
        }

        signals.extend(self.wave_link(reinforcements));
        signals
    }

    /// Sample every manticore in the scene. Links that include a manticore
    /// are re-encoded when a pattern completes.
    fn sample_manticores<W: GameWorld + ?Sized>(&mut self, world: &W) -> Vec<WaveSignal> {
        let mantimayhem = self.state.mantimayhem;
        let mut completed = 0usize;

        for npc in world.npcs().iter().filter(|npc| is_manticore(npc.npc_id)) {
            self.state.orb_patterns.track(npc);
            if self.state.orb_patterns.sample(npc, mantimayhem).is_some() {
                completed += 1;
            }
        }

        if completed == 0 {
            return Vec::new();
        }

        [false, true]
            .into_iter()
            .filter(|&reinforcements| {
                self.state
                    .spawns(reinforcements)
                    .iter()
                    .any(|s| is_manticore(s.npc_id))
            })
            .filter_map(|reinforcements| self.wave_link(reinforcements))
            .collect()
    }

    /// Encode the stored spawn or reinforcement link for the current wave.
    fn wave_link(&self, reinforcements: bool) -> Option<WaveSignal> {
        let wave = self.state.current_wave();
        if wave == 0 {
            return None;
        }

        let spawns = self.state.spawns(reinforcements);
        if spawns.is_empty() {
            return None;
        }

        let (context, player) = if reinforcements {
            let include = self.config.player_location.reinforcements;
            (
                LinkContext::Reinforcements,
                self.state.player_at_reinforcements.filter(|_| include),
            )
        } else {
            let include = self.config.player_location.spawns;
            (
                LinkContext::WaveSpawn,
                self.state.player_at_wave_spawn.filter(|_| include),
            )
        };

        let url = build_los_url(
            spawns,
            player,
            context,
            self.state.mantimayhem,
            &self.state.orb_patterns,
        );
        tracing::debug!(wave, reinforcements, %url, "LoS link encoded");

        Some(if reinforcements {
            WaveSignal::WaveReinforcementLink { wave, url }
        } else {
            WaveSignal::WaveSpawnLink { wave, url }
        })
    }
}

fn player_los_position<W: GameWorld + ?Sized>(world: &W) -> Option<Position> {
    world.local_player_position().map(to_los_space)
}
