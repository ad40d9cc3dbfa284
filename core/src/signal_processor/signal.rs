/// Signals emitted by the SessionController for whatever displays the waves.
/// Delivery is fire-and-forget; the core never waits on a consumer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WaveSignal {
    /// A new run started (wave 1), drop every wave row
    SessionReset,
    /// NPCs were captured for a new wave
    WaveAdded { wave: u32 },
    /// Spawn link for a wave was produced or refreshed
    WaveSpawnLink { wave: u32, url: String },
    /// Reinforcement link for a wave was produced or refreshed
    WaveReinforcementLink { wave: u32, url: String },
}
