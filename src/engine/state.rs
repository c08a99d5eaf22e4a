//! Stopwatch state and the pure transition function that drives it.
//!
//! All mutation goes through [`transition`], which takes the current state,
//! a [`Command`] and the wall-clock instant (ms since epoch) and returns the
//! next state. Invalid orderings are absorbed rather than rejected:
//!
//! | phase   | start      | stop    | lap       | reset |
//! |---------|------------|---------|-----------|-------|
//! | Idle    | Running    | no-op   | no-op     | Idle  |
//! | Running | no-op      | Stopped | Running   | Idle  |
//! | Stopped | Running    | no-op   | as reset  | Idle  |

use super::format::format_elapsed;
use super::lap::{LapHistory, LapRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
    Stopped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Stop,
    Lap,
    Reset,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopwatchState {
    pub running: bool,
    /// Set by the first start after a reset; cleared only by reset.
    pub has_started: bool,
    /// Elapsed time frozen at the last stop.
    pub accumulated_ms: u64,
    /// Start of the current run segment, `None` unless running.
    pub run_start_ms: Option<u64>,
    /// Total elapsed time at the most recent lap boundary.
    pub last_lap_elapsed_ms: u64,
    pub lap_counter: u32,
    pub laps: LapHistory,
}

impl StopwatchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        match (self.running, self.has_started) {
            (true, _) => Phase::Running,
            (false, true) => Phase::Stopped,
            (false, false) => Phase::Idle,
        }
    }

    pub fn total_elapsed_ms(&self, now_ms: u64) -> u64 {
        let live = match self.run_start_ms {
            Some(start) if self.running => now_ms.saturating_sub(start),
            _ => 0,
        };
        self.accumulated_ms + live
    }

    pub fn section_elapsed_ms(&self, now_ms: u64) -> u64 {
        self.total_elapsed_ms(now_ms)
            .saturating_sub(self.last_lap_elapsed_ms)
    }
}

pub fn transition(state: &StopwatchState, command: Command, now_ms: u64) -> StopwatchState {
    match (state.phase(), command) {
        (Phase::Idle, Command::Start) => StopwatchState {
            running: true,
            has_started: true,
            run_start_ms: Some(now_ms),
            ..StopwatchState::new()
        },
        (Phase::Stopped, Command::Start) => StopwatchState {
            running: true,
            run_start_ms: Some(now_ms),
            ..state.clone()
        },
        (Phase::Running, Command::Stop) => StopwatchState {
            running: false,
            accumulated_ms: state.total_elapsed_ms(now_ms),
            run_start_ms: None,
            ..state.clone()
        },
        (Phase::Running, Command::Lap) => {
            let total = state.total_elapsed_ms(now_ms);
            let section = total.saturating_sub(state.last_lap_elapsed_ms);
            let lap_counter = state.lap_counter + 1;
            let mut laps = state.laps.clone();
            laps.push(LapRecord::new(lap_counter, format_elapsed(section)));
            StopwatchState {
                last_lap_elapsed_ms: total,
                lap_counter,
                laps,
                ..state.clone()
            }
        }
        (Phase::Stopped, Command::Lap) | (_, Command::Reset) => StopwatchState::new(),
        (Phase::Running, Command::Start)
        | (Phase::Idle | Phase::Stopped, Command::Stop)
        | (Phase::Idle, Command::Lap) => state.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(commands: &[(Command, u64)]) -> StopwatchState {
        commands
            .iter()
            .fold(StopwatchState::new(), |s, &(cmd, now)| transition(&s, cmd, now))
    }

    #[test]
    fn test_initial_state_is_idle() {
        let state = StopwatchState::new();
        assert_eq!(state.phase(), Phase::Idle);
        assert_eq!(state.total_elapsed_ms(5_000), 0);
        assert!(state.laps.is_empty());
    }

    #[test]
    fn test_start_from_idle() {
        let state = run(&[(Command::Start, 1_000)]);
        assert_eq!(state.phase(), Phase::Running);
        assert!(state.has_started);
        assert_eq!(state.run_start_ms, Some(1_000));
        assert_eq!(state.accumulated_ms, 0);
        assert_eq!(state.total_elapsed_ms(1_750), 750);
    }

    #[test]
    fn test_stop_freezes_accumulated() {
        let state = run(&[(Command::Start, 1_000), (Command::Stop, 3_300)]);
        assert_eq!(state.phase(), Phase::Stopped);
        assert_eq!(state.accumulated_ms, 2_300);
        assert_eq!(state.run_start_ms, None);
        assert_eq!(state.total_elapsed_ms(99_000), 2_300);
    }

    #[test]
    fn test_restart_resumes() {
        let state = run(&[
            (Command::Start, 0),
            (Command::Stop, 1_000),
            (Command::Start, 5_000),
        ]);
        assert_eq!(state.phase(), Phase::Running);
        assert_eq!(state.accumulated_ms, 1_000);
        assert_eq!(state.total_elapsed_ms(5_400), 1_400);
    }

    #[test]
    fn test_lap_records_section_time() {
        let state = run(&[
            (Command::Start, 0),
            (Command::Lap, 1_500),
            (Command::Lap, 2_300),
        ]);
        let laps = state.laps.to_vec();
        assert_eq!(laps[0].label, "Lap 2");
        assert_eq!(laps[0].formatted_time, "00:00.80");
        assert_eq!(laps[1].label, "Lap 1");
        assert_eq!(laps[1].formatted_time, "00:01.50");
        assert_eq!(state.last_lap_elapsed_ms, 2_300);
        assert_eq!(state.accumulated_ms, 0);
        assert_eq!(state.section_elapsed_ms(2_500), 200);
    }

    #[test]
    fn test_section_time_spans_stop_and_resume() {
        let state = run(&[
            (Command::Start, 0),
            (Command::Lap, 1_000),
            (Command::Stop, 1_600),
            (Command::Start, 10_000),
        ]);
        assert_eq!(state.section_elapsed_ms(10_400), 1_000);
    }

    #[test]
    fn test_lap_while_stopped_resets() {
        let state = run(&[
            (Command::Start, 0),
            (Command::Lap, 500),
            (Command::Stop, 900),
            (Command::Lap, 1_200),
        ]);
        assert_eq!(state, StopwatchState::new());
    }

    #[test]
    fn test_reset_while_running_goes_idle() {
        let state = run(&[(Command::Start, 0), (Command::Reset, 700)]);
        assert_eq!(state.phase(), Phase::Idle);
        assert_eq!(state.total_elapsed_ms(2_000), 0);
    }

    #[test]
    fn test_noops() {
        let idle = StopwatchState::new();
        assert_eq!(transition(&idle, Command::Stop, 10), idle);
        assert_eq!(transition(&idle, Command::Lap, 10), idle);

        let running = run(&[(Command::Start, 0)]);
        assert_eq!(transition(&running, Command::Start, 50), running);

        let stopped = run(&[(Command::Start, 0), (Command::Stop, 40)]);
        assert_eq!(transition(&stopped, Command::Stop, 90), stopped);
    }

    #[test]
    fn test_lap_counter_restarts_after_reset() {
        let state = run(&[
            (Command::Start, 0),
            (Command::Lap, 100),
            (Command::Lap, 200),
            (Command::Reset, 300),
            (Command::Start, 400),
            (Command::Lap, 600),
        ]);
        let laps = state.laps.to_vec();
        assert_eq!(laps.len(), 1);
        assert_eq!(laps[0].label, "Lap 1");
        assert_eq!(laps[0].formatted_time, "00:00.20");
    }

    #[test]
    fn test_clock_skew_does_not_underflow() {
        let state = run(&[(Command::Start, 5_000)]);
        assert_eq!(state.total_elapsed_ms(4_000), 0);
    }
}
