//! Line-of-sight link generation for los.colosim.com

mod coords;
mod link;

pub use coords::to_los_space;
pub use link::{EntitySnapshot, LinkContext, build_los_url, encode_player_position};
