//! Headless model of the wave list shown to the user.
//!
//! Mirrors what a panel does with [`WaveSignal`]s: one row per captured
//! wave, each with an optional spawn and reinforcement link.

use crate::signal_processor::{SignalHandler, WaveSignal};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaveRow {
    pub wave: u32,
    pub spawn_url: Option<String>,
    pub reinforcement_url: Option<String>,
}

impl WaveRow {
    fn new(wave: u32) -> Self {
        Self {
            wave,
            spawn_url: None,
            reinforcement_url: None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct WaveBoard {
    rows: Vec<WaveRow>,
}

impl WaveBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[WaveRow] {
        &self.rows
    }

    /// Rows are addressed by wave number, wave 1 being the first row.
    fn row_mut(&mut self, wave: u32) -> Option<&mut WaveRow> {
        let idx = usize::try_from(wave).ok()?.checked_sub(1)?;
        self.rows.get_mut(idx)
    }
}

impl SignalHandler for WaveBoard {
    fn handle_signal(&mut self, signal: &WaveSignal) {
        match signal {
            WaveSignal::SessionReset => self.rows.clear(),
            WaveSignal::WaveAdded { wave } => self.rows.push(WaveRow::new(*wave)),
            WaveSignal::WaveSpawnLink { wave, url } => {
                if let Some(row) = self.row_mut(*wave) {
                    row.spawn_url = Some(url.clone());
                }
            }
            WaveSignal::WaveReinforcementLink { wave, url } => {
                if let Some(row) = self.row_mut(*wave) {
                    row.reinforcement_url = Some(url.clone());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spawn_link(wave: u32, url: &str) -> WaveSignal {
        WaveSignal::WaveSpawnLink {
            wave,
            url: url.to_string(),
        }
    }

    #[test]
    fn links_land_on_their_wave_row() {
        let mut board = WaveBoard::new();
        board.handle_signals(&[
            WaveSignal::SessionReset,
            WaveSignal::WaveAdded { wave: 1 },
            spawn_link(1, "a"),
            WaveSignal::WaveAdded { wave: 2 },
            spawn_link(2, "b"),
            WaveSignal::WaveReinforcementLink {
                wave: 2,
                url: "c".to_string(),
            },
        ]);

        assert_eq!(board.rows().len(), 2);
        assert_eq!(board.rows()[0].spawn_url.as_deref(), Some("a"));
        assert_eq!(board.rows()[0].reinforcement_url, None);
        assert_eq!(board.rows()[1].spawn_url.as_deref(), Some("b"));
        assert_eq!(board.rows()[1].reinforcement_url.as_deref(), Some("c"));
    }

    #[test]
    fn links_for_missing_rows_are_dropped() {
        let mut board = WaveBoard::new();
        board.handle_signals(&[spawn_link(0, "zero"), spawn_link(3, "three")]);
        assert!(board.rows().is_empty());
    }

    #[test]
    fn refreshed_link_replaces_previous() {
        let mut board = WaveBoard::new();
        board.handle_signals(&[
            WaveSignal::WaveAdded { wave: 1 },
            spawn_link(1, "old"),
            spawn_link(1, "new"),
        ]);
        assert_eq!(board.rows()[0].spawn_url.as_deref(), Some("new"));
    }

    #[test]
    fn reset_clears_rows() {
        let mut board = WaveBoard::new();
        board.handle_signals(&[WaveSignal::WaveAdded { wave: 1 }, WaveSignal::SessionReset]);
        assert!(board.rows().is_empty());
    }
}
