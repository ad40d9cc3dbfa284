use super::signal::WaveSignal;

/// Trait for systems that react to wave signals.
/// Implement this for panels, link loggers, etc.
pub trait SignalHandler {
    /// Handle a single signal.
    fn handle_signal(&mut self, signal: &WaveSignal);

    /// Handle multiple signals (default implementation calls handle_signal for each)
    fn handle_signals(&mut self, signals: &[WaveSignal]) {
        for signal in signals {
            self.handle_signal(signal);
        }
    }
}
