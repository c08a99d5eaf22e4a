/// Side effects requested by the handler and carried out by the main loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    StartTicker,
    StopTicker,
    Quit,
}
