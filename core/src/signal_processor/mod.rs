pub mod handler;
pub mod processor;
pub mod signal;

mod chat;
mod wave_state;


pub use chat::{ChatTrigger, parse_chat_trigger};
pub use handler::SignalHandler;
pub use processor::SessionController;
pub use signal::WaveSignal;
pub use wave_state::{PendingCapture, WavePhase};
