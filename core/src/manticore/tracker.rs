//! Per-manticore orb tracking
//!
//! Keeps one [`OrbPattern`] per manticore, keyed by NPC index, and turns
//! per-tick spot anim samples into orb sequences.

use std::collections::HashSet;

use hashbrown::HashMap;

use crate::world::Npc;

use super::{OrbPattern, OrbType};

/// Emitted by [`OrbPatternTracker::sample`] the one time a manticore's
/// pattern goes from incomplete to complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternCompleted {
    pub npc_index: i32,
}

#[derive(Debug, Clone, Default)]
pub struct OrbPatternTracker {
    patterns: HashMap<i32, OrbPattern>,
}

impl OrbPatternTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking a manticore if it isn't tracked yet.
    ///
    /// Spot anims already playing are recorded as seen, so an orb that was up
    /// before discovery does not enter the pattern.
    pub fn track(&mut self, npc: &Npc) {
        self.patterns
            .entry(npc.index)
            .or_insert_with(|| OrbPattern::seeded(&npc.spot_anims));
    }

    pub fn is_tracked(&self, npc_index: i32) -> bool {
        self.patterns.contains_key(&npc_index)
    }

    pub fn pattern(&self, npc_index: i32) -> Option<&OrbPattern> {
        self.patterns.get(&npc_index)
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Compare the manticore's spot anims with the previous sample and record
    /// any orb that just appeared.
    pub fn sample(&mut self, npc: &Npc, mantimayhem: bool) -> Option<PatternCompleted> {
        let pattern = self.patterns.get_mut(&npc.index)?;

        // Nothing left to learn once all three orbs are in
        if pattern.is_charged() {
            return None;
        }

        let was_complete = pattern.is_complete(mantimayhem);
        let mut current = HashSet::with_capacity(npc.spot_anims.len());

        for &spot_anim in &npc.spot_anims {
            current.insert(spot_anim);
            if pattern.last_spot_anims.contains(&spot_anim) {
                continue;
            }
            if let Some(orb) = OrbType::from_spot_anim(spot_anim)
                && pattern.push(orb)
            {
                tracing::debug!(
                    npc_index = npc.index,
                    orb = ?orb,
                    orbs = pattern.orbs().len(),
                    "Manticore orb observed"
                );
            }
        }

        pattern.last_spot_anims = current;

        if !was_complete && pattern.is_complete(mantimayhem) {
            tracing::info!(npc_index = npc.index, orbs = ?pattern.orbs(), "Manticore pattern complete");
            return Some(PatternCompleted { npc_index: npc.index });
        }
        None
    }

    /// Record which manticores already had orbs at the moment a spawn
    /// snapshot was taken. Only reinforcement snapshots need this; every
    /// manticore is uncharged at the initial wave spawn.
    pub fn capture_spawn_states(&mut self, is_reinforcement: bool) {
        if !is_reinforcement {
            return;
        }
        for pattern in self.patterns.values_mut() {
            pattern.charged_at_reinforcements = !pattern.is_empty();
        }
    }

    pub fn is_complete(&self, npc_index: i32, mantimayhem: bool) -> bool {
        self.patterns
            .get(&npc_index)
            .is_some_and(|p| p.is_complete(mantimayhem))
    }

    /// Suffix for an on-demand link. Untracked manticores are uncharged.
    pub fn los_suffix(&self, npc_index: i32, mantimayhem: bool) -> String {
        self.patterns
            .get(&npc_index)
            .map_or_else(|| "u".to_string(), |p| p.los_suffix(mantimayhem))
    }

    /// Suffix for a spawn or reinforcement link. Untracked manticores are uncharged.
    pub fn spawn_los_suffix(&self, npc_index: i32, is_reinforcement: bool, mantimayhem: bool) -> String {
        self.patterns.get(&npc_index).map_or_else(
            || "u".to_string(),
            |p| p.spawn_los_suffix(is_reinforcement, mantimayhem),
        )
    }

    pub fn clear(&mut self) {
        self.patterns.clear();
    }
}
