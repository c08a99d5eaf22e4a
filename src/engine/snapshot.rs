use super::format::format_elapsed;
use super::lap::LapRecord;
use super::state::{Phase, StopwatchState};

/// Read-only view of the engine handed to the display after every command
/// and every tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub total_time: String,
    pub section_time: String,
    pub laps: Vec<LapRecord>,
    pub is_running: bool,
    pub has_started: bool,
    pub phase: Phase,
}

impl Snapshot {
    pub fn capture(state: &StopwatchState, now_ms: u64) -> Self {
        Self {
            total_time: format_elapsed(state.total_elapsed_ms(now_ms)),
            section_time: format_elapsed(state.section_elapsed_ms(now_ms)),
            laps: state.laps.to_vec(),
            is_running: state.running,
            has_started: state.has_started,
            phase: state.phase(),
        }
    }

    /// Label of the start/stop button.
    pub fn primary_label(&self) -> &'static str {
        if self.is_running {
            "Stop"
        } else {
            "Start"
        }
    }

    /// Label of the lap/reset button.
    pub fn secondary_label(&self) -> &'static str {
        if self.is_running {
            "Lap"
        } else {
            "Reset"
        }
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::capture(&StopwatchState::new(), 0)
    }
}
