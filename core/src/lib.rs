pub mod board;
pub mod context;
pub mod game_data;
pub mod los;
pub mod manticore;
pub mod region;
pub mod signal_processor;
pub mod state;
pub mod world;

// Re-exports for convenience
pub use board::{WaveBoard, WaveRow};
pub use context::{AppConfig, AppConfigExt, ConfigError, PlayerLocationConfig};
pub use los::{EntitySnapshot, LinkContext, build_los_url, to_los_space};
pub use manticore::{OrbPattern, OrbPatternTracker, OrbType, PatternCompleted};
pub use region::RegionGate;
pub use signal_processor::{SessionController, SignalHandler, WavePhase, WaveSignal};
pub use state::EncounterState;
pub use world::{GameWorld, Npc, Position};
