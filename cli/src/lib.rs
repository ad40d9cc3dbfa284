pub mod commands;
pub mod context;
pub mod logging;
pub mod replay;
pub mod world;

pub use context::CliContext;
pub use replay::replay_file;
pub use replay::{ReplayCommand, ReplayError, ReplaySession};
pub use world::ScriptedWorld;
