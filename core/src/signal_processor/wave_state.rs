//! Wave phase state machine.
//!
//! Wave boundaries come from chat triggers. Reinforcements are not announced,
//! so the reinforcement phase starts once more than
//! [`REINFORCEMENT_DELAY_TICKS`] ticks have passed since the wave started.
//!
//! - Idle: no wave running
//! - Active: a wave is running; `reinforcements` flips once per wave and
//!   `capture_armed` is set by NPC spawns and consumed by the next tick

use crate::game_data::REINFORCEMENT_DELAY_TICKS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WavePhase {
    #[default]
    Idle,
    Active {
        wave: u32,
        started_at_tick: u32,
        reinforcements: bool,
        capture_armed: bool,
    },
}

/// A capture consumed from an armed phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingCapture {
    pub wave: u32,
    pub reinforcements: bool,
}

impl WavePhase {
    pub fn start(wave: u32, tick: u32) -> Self {
        WavePhase::Active {
            wave,
            started_at_tick: tick,
            reinforcements: false,
            capture_armed: false,
        }
    }

    /// Current wave number, 0 when idle
    pub fn current_wave(&self) -> u32 {
        match self {
            WavePhase::Idle => 0,
            WavePhase::Active { wave, .. } => *wave,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, WavePhase::Active { .. })
    }

    pub fn in_reinforcements(&self) -> bool {
        matches!(self, WavePhase::Active { reinforcements: true, .. })
    }

    pub fn is_capture_armed(&self) -> bool {
        matches!(self, WavePhase::Active { capture_armed: true, .. })
    }

    /// Enter the reinforcement phase once the delay has passed.
    /// Re-arms capture for the reinforcement NPCs. Returns true on transition.
    pub fn advance(&mut self, tick: u32) -> bool {
        let WavePhase::Active {
            started_at_tick,
            reinforcements,
            capture_armed,
            ..
        } = self
        else {
            return false;
        };

        if *reinforcements || tick.saturating_sub(*started_at_tick) <= REINFORCEMENT_DELAY_TICKS {
            return false;
        }
        *reinforcements = true;
        *capture_armed = false;
        true
    }

    /// Arm a capture for the current phase. Returns true if this call armed it.
    pub fn arm_capture(&mut self) -> bool {
        match self {
            WavePhase::Active { capture_armed, .. } if !*capture_armed => {
                *capture_armed = true;
                true
            }
            _ => false,
        }
    }

    /// Disarm and return the pending capture, if one was armed.
    pub fn take_capture(&mut self) -> Option<PendingCapture> {
        match self {
            WavePhase::Active {
                wave,
                reinforcements,
                capture_armed,
                ..
            } if *capture_armed => {
                *capture_armed = false;
                Some(PendingCapture {
                    wave: *wave,
                    reinforcements: *reinforcements,
                })
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_has_no_wave() {
        let mut phase = WavePhase::default();
        assert_eq!(phase.current_wave(), 0);
        assert!(!phase.arm_capture());
        assert!(!phase.advance(100));
        assert_eq!(phase.take_capture(), None);
    }

    #[test]
    fn reinforcements_start_after_more_than_ten_ticks() {
        let mut phase = WavePhase::start(2, 100);
        assert!(!phase.advance(105));
        assert!(!phase.advance(110), "exactly ten ticks is still the spawn phase");
        assert!(phase.advance(111));
        assert!(phase.in_reinforcements());
        assert!(!phase.advance(150), "transition happens once");
    }

    #[test]
    fn reinforcement_transition_disarms_capture() {
        let mut phase = WavePhase::start(2, 0);
        assert!(phase.arm_capture());
        phase.advance(11);
        assert!(!phase.is_capture_armed());
    }

    #[test]
    fn capture_is_armed_once_and_consumed_once() {
        let mut phase = WavePhase::start(5, 0);
        assert!(phase.arm_capture());
        assert!(!phase.arm_capture());

        assert_eq!(
            phase.take_capture(),
            Some(PendingCapture {
                wave: 5,
                reinforcements: false
            })
        );
        assert_eq!(phase.take_capture(), None);
    }

    #[test]
    fn capture_reports_reinforcement_phase() {
        let mut phase = WavePhase::start(5, 0);
        phase.advance(20);
        phase.arm_capture();
        assert_eq!(
            phase.take_capture(),
            Some(PendingCapture {
                wave: 5,
                reinforcements: true
            })
        );
    }
}
