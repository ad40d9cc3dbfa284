//! LoS link encoding
//!
//! Format: `<base>` followed by one `XXYYc[suffix].` token per recognised NPC,
//! then `#<player>` when a player position is known, then `_ws` for wave
//! spawn links and `_mm3` when Mantimayhem III is active.

use std::fmt::Write;

use crate::game_data::{LOS_BASE_URL, is_manticore, los_code};
use crate::manticore::OrbPatternTracker;
use crate::world::Position;

use super::to_los_space;

/// An NPC as captured at a wave spawn, reinforcement, or on-demand scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntitySnapshot {
    /// NPC class/template ID
    pub npc_id: i32,
    /// Instance index, used to look up the manticore pattern
    pub npc_index: i32,
    /// Scene position at capture time
    pub position: Position,
}

/// What a link describes. Determines manticore suffixes and the `_ws` marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkContext {
    /// On-demand snapshot of the arena right now
    Current,
    /// NPCs as they spawned at the start of a wave
    WaveSpawn,
    /// NPCs present when reinforcements arrived
    Reinforcements,
}

impl LinkContext {
    pub const fn is_spawn(self) -> bool {
        matches!(self, LinkContext::WaveSpawn | LinkContext::Reinforcements)
    }

    pub const fn is_reinforcement(self) -> bool {
        matches!(self, LinkContext::Reinforcements)
    }
}

/// Player position as the LoS tool expects it: `x + 256 * y` in LoS space.
pub const fn encode_player_position(los: Position) -> i32 {
    los.x.wrapping_add(los.y.wrapping_mul(256))
}

/// Build a LoS link.
///
/// `player` must already be in LoS space. NPCs outside the wave roster are
/// skipped. Coordinates are written with `{:02}`, so negative or three digit
/// values come out wider than two characters; the LoS tool has always been
/// fed that form.
pub fn build_los_url(
    snapshots: &[EntitySnapshot],
    player: Option<Position>,
    context: LinkContext,
    mantimayhem: bool,
    patterns: &OrbPatternTracker,
) -> String {
    let mut url = String::from(LOS_BASE_URL);

    for snapshot in snapshots {
        let Some(code) = los_code(snapshot.npc_id) else {
            continue;
        };
        let los = to_los_space(snapshot.position);
        let _ = write!(url, "{:02}{:02}{}", los.x, los.y, code);

        if is_manticore(snapshot.npc_id) {
            let suffix = if context.is_spawn() {
                patterns.spawn_los_suffix(snapshot.npc_index, context.is_reinforcement(), mantimayhem)
            } else {
                patterns.los_suffix(snapshot.npc_index, mantimayhem)
            };
            url.push_str(&suffix);
        }
        url.push('.');
    }

    if let Some(player) = player {
        let _ = write!(url, "#{}", encode_player_position(player));
    }

    if context == LinkContext::WaveSpawn {
        url.push_str("_ws");
    }
    if mantimayhem {
        url.push_str("_mm3");
    }

    url
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_data::npc_id;
    use crate::game_data::spot_anim_id::{MANTICORE_MAGIC_ORB, MANTICORE_MELEE_ORB, MANTICORE_RANGED_ORB};
    use crate::world::Npc;

    fn snapshot(npc_id: i32, npc_index: i32, x: i32, y: i32) -> EntitySnapshot {
        EntitySnapshot {
            npc_id,
            npc_index,
            position: Position::new(x, y),
        }
    }

    fn manticore_npc(index: i32, spot_anims: &[i32]) -> Npc {
        Npc {
            index,
            npc_id: npc_id::MANTICORE,
            scene_position: Some(Position::new(42, 70)),
            spot_anims: spot_anims.to_vec(),
        }
    }

    #[test]
    fn empty_link_is_just_the_base() {
        let url = build_los_url(&[], None, LinkContext::Current, false, &OrbPatternTracker::new());
        assert_eq!(url, LOS_BASE_URL);
    }

    #[test]
    fn tokens_are_zero_padded() {
        let snapshots = [
            snapshot(npc_id::SERPENT_SHAMAN, 1, 37, 75),
            snapshot(npc_id::SHOCKWAVE_COLOSSUS, 2, 52, 60),
        ];
        let url = build_los_url(&snapshots, None, LinkContext::Current, false, &OrbPatternTracker::new());
        assert_eq!(url, "https://los.colosim.com/?05081.20236.");
    }

    #[test]
    fn negative_coordinates_keep_their_sign() {
        let snapshots = [snapshot(npc_id::MANTICORE, 5, 42, 90)];
        let url = build_los_url(&snapshots, None, LinkContext::WaveSpawn, false, &OrbPatternTracker::new());
        assert_eq!(url, "https://los.colosim.com/?10-74u._ws");
    }

    #[test]
    fn unknown_npcs_are_skipped() {
        let snapshots = [
            snapshot(1234, 1, 40, 70),
            snapshot(npc_id::JAGUAR_WARRIOR, 2, 40, 70),
        ];
        let url = build_los_url(&snapshots, None, LinkContext::Current, false, &OrbPatternTracker::new());
        assert_eq!(url, "https://los.colosim.com/?08133.");
    }

    #[test]
    fn player_position_and_markers_are_appended_in_order() {
        let snapshots = [snapshot(npc_id::MINOTAUR_RED_FLAG, 1, 40, 70)];
        let player = Some(to_los_space(Position::new(50, 60)));
        let url = build_los_url(&snapshots, player, LinkContext::WaveSpawn, true, &OrbPatternTracker::new());
        // player (18, 23) -> 18 + 256 * 23
        assert_eq!(url, "https://los.colosim.com/?08135.#5906_ws_mm3");
    }

    #[test]
    fn reinforcement_links_have_no_wave_marker() {
        let snapshots = [snapshot(npc_id::JAVELIN_COLOSSUS, 1, 40, 70)];
        let url = build_los_url(&snapshots, None, LinkContext::Reinforcements, false, &OrbPatternTracker::new());
        assert_eq!(url, "https://los.colosim.com/?08132.");
    }

    #[test]
    fn manticore_suffix_depends_on_context() {
        let mut patterns = OrbPatternTracker::new();
        patterns.track(&manticore_npc(7, &[]));
        patterns.sample(&manticore_npc(7, &[MANTICORE_RANGED_ORB]), false);

        let snapshots = [snapshot(npc_id::MANTICORE, 7, 42, 70)];

        let current = build_los_url(&snapshots, None, LinkContext::Current, false, &patterns);
        let spawn = build_los_url(&snapshots, None, LinkContext::WaveSpawn, false, &patterns);
        assert_eq!(current, "https://los.colosim.com/?10134r.");
        assert_eq!(spawn, "https://los.colosim.com/?10134ur._ws");
    }

    #[test]
    fn unusual_mantimayhem_pattern_is_spelled_out() {
        let mut patterns = OrbPatternTracker::new();
        patterns.track(&manticore_npc(7, &[]));
        for frame in [[MANTICORE_MELEE_ORB], [MANTICORE_RANGED_ORB], [MANTICORE_MAGIC_ORB]] {
            patterns.sample(&manticore_npc(7, &frame), true);
        }

        let snapshots = [snapshot(npc_id::MANTICORE, 7, 42, 70)];
        let url = build_los_url(&snapshots, None, LinkContext::Current, true, &patterns);
        assert_eq!(url, "https://los.colosim.com/?10134Mrm._mm3");
    }

    #[test]
    fn player_encoding_uses_los_space() {
        assert_eq!(encode_player_position(Position::new(0, 0)), 0);
        assert_eq!(encode_player_position(Position::new(3, 2)), 515);
        assert_eq!(encode_player_position(Position::new(3, -1)), -253);
    }
}
