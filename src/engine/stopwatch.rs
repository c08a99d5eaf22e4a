use super::snapshot::Snapshot;
use super::state::{transition, Command, Phase, StopwatchState};

/// Owns the stopwatch state and exposes the four commands plus `tick`.
///
/// Every operation takes the current instant and returns the snapshot the
/// display should render next.
#[derive(Debug, Clone, Default)]
pub struct StopwatchEngine {
    state: StopwatchState,
}

impl StopwatchEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, now_ms: u64) -> Snapshot {
        self.apply(Command::Start, now_ms)
    }

    pub fn stop(&mut self, now_ms: u64) -> Snapshot {
        self.apply(Command::Stop, now_ms)
    }

    pub fn lap(&mut self, now_ms: u64) -> Snapshot {
        self.apply(Command::Lap, now_ms)
    }

    pub fn reset(&mut self, now_ms: u64) -> Snapshot {
        self.apply(Command::Reset, now_ms)
    }

    /// Refresh derived display values. Never changes state.
    pub fn tick(&self, now_ms: u64) -> Snapshot {
        Snapshot::capture(&self.state, now_ms)
    }

    pub fn apply(&mut self, command: Command, now_ms: u64) -> Snapshot {
        let before = self.state.phase();
        let next = transition(&self.state, command, now_ms);
        let after = next.phase();

        if before != after {
            tracing::debug!(?command, ?before, ?after, now_ms, "stopwatch phase change");
        } else if command == Command::Lap && after == Phase::Running {
            tracing::debug!(lap = next.lap_counter, now_ms, "lap recorded");
        } else if next == self.state {
            tracing::trace!(?command, phase = ?before, "command ignored");
        }

        self.state = next;
        Snapshot::capture(&self.state, now_ms)
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn state(&self) -> &StopwatchState {
        &self.state
    }

    pub fn total_elapsed_ms(&self, now_ms: u64) -> u64 {
        self.state.total_elapsed_ms(now_ms)
    }

    pub fn section_elapsed_ms(&self, now_ms: u64) -> u64 {
        self.state.section_elapsed_ms(now_ms)
    }
}
