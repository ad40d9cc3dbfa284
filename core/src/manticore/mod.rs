//! Manticore orb pattern tracking
//!
//! A manticore telegraphs its attack order by charging up to three orbs
//! (magic, ranged, melee) one after another. The orbs only show up as spot
//! animations on the NPC, so the order is recovered by sampling the NPC every
//! tick and recording each orb the first tick it appears.
//!
//! # Architecture
//!
//! ```text
//!   Npc spot anims (every tick)
//!              │
//!   OrbPatternTracker::sample ──► Option<PatternCompleted>
//!              │                          │
//!        OrbPattern (per NPC index)       ▼
//!              │                 SessionController re-encodes links
//!              ▼
//!   LoS suffix ("u", "m", "urmr", ...)
//! ```

mod pattern;
pub mod tracker;


pub use pattern::{MAX_ORBS, OrbPattern, OrbType};
pub use tracker::{OrbPatternTracker, PatternCompleted};
