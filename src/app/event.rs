use crossterm::event::Event as CrosstermEvent;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// Periodic refresh while the watch is running
    Tick,

    /// Terminal input stream ended or failed; no key can reach the app again
    InputClosed,
}
