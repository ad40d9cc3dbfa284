use std::collections::HashSet;

use crate::game_data::spot_anim_id;

/// A manticore never charges more than three orbs per pattern.
pub const MAX_ORBS: usize = 3;

/// Suffix used for a manticore whose pattern is unknown
const UNCHARGED: &str = "u";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrbType {
    Magic,
    Ranged,
    Melee,
}

impl OrbType {
    /// Single character used for this orb in LoS links
    pub const fn tag(self) -> char {
        match self {
            OrbType::Magic => 'm',
            OrbType::Ranged => 'r',
            OrbType::Melee => 'M',
        }
    }

    pub fn from_spot_anim(spot_anim: i32) -> Option<Self> {
        match spot_anim {
            spot_anim_id::MANTICORE_MAGIC_ORB => Some(OrbType::Magic),
            spot_anim_id::MANTICORE_RANGED_ORB => Some(OrbType::Ranged),
            spot_anim_id::MANTICORE_MELEE_ORB => Some(OrbType::Melee),
            _ => None,
        }
    }
}

/// Orb state for one manticore.
#[derive(Debug, Clone, Default)]
pub struct OrbPattern {
    orbs: Vec<OrbType>,
    /// Whether any orb had been seen when reinforcements were captured
    pub(crate) charged_at_reinforcements: bool,
    /// Spot anims seen on the previous sample, used for edge detection
    pub(crate) last_spot_anims: HashSet<i32>,
}

impl OrbPattern {
    /// New pattern that treats `spot_anims` as already seen, so orbs that are
    /// up at discovery time are not recorded.
    pub fn seeded(spot_anims: &[i32]) -> Self {
        Self {
            orbs: Vec::with_capacity(MAX_ORBS),
            charged_at_reinforcements: false,
            last_spot_anims: spot_anims.iter().copied().collect(),
        }
    }

    pub fn orbs(&self) -> &[OrbType] {
        &self.orbs
    }

    pub fn is_empty(&self) -> bool {
        self.orbs.is_empty()
    }

    /// All three orbs have been observed
    pub fn is_charged(&self) -> bool {
        self.orbs.len() >= MAX_ORBS
    }

    pub fn was_charged_at_reinforcements(&self) -> bool {
        self.charged_at_reinforcements
    }

    /// Without Mantimayhem III the first orb already tells the whole pattern.
    pub fn is_complete(&self, mantimayhem: bool) -> bool {
        if mantimayhem {
            self.is_charged()
        } else {
            !self.orbs.is_empty()
        }
    }

    /// Append an orb. Returns false when the pattern is full or the orb
    /// repeats the previous one.
    pub fn push(&mut self, orb: OrbType) -> bool {
        if self.is_charged() || self.orbs.last() == Some(&orb) {
            return false;
        }
        self.orbs.push(orb);
        true
    }

    /// LoS suffix for the pattern as currently known.
    ///
    /// A full Mantimayhem III pattern ending in melee is the usual order and
    /// is abbreviated to its first orb.
    pub fn los_suffix(&self, mantimayhem: bool) -> String {
        let Some(first) = self.orbs.first() else {
            return UNCHARGED.to_string();
        };

        if mantimayhem && self.orbs.len() == MAX_ORBS && self.orbs[2] != OrbType::Melee {
            return self.orbs.iter().map(|orb| orb.tag()).collect();
        }

        first.tag().to_string()
    }

    /// LoS suffix for a spawn or reinforcement link.
    ///
    /// Manticores always spawn uncharged, so spawn links prefix the known
    /// pattern with `u`. Reinforcement links only do so for manticores that
    /// had no orbs yet when reinforcements arrived.
    pub fn spawn_los_suffix(&self, is_reinforcement: bool, mantimayhem: bool) -> String {
        if is_reinforcement && self.charged_at_reinforcements {
            return self.los_suffix(mantimayhem);
        }
        if self.orbs.is_empty() {
            return UNCHARGED.to_string();
        }
        format!("{UNCHARGED}{}", self.los_suffix(mantimayhem))
    }
}
