pub mod cache;

pub use cache::EncounterState;
