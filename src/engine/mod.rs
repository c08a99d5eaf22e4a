//! Stopwatch timing core: state machine, lap history and time formatting.
//!
//! Nothing in here touches a clock, a terminal or the filesystem.

pub mod clock;
pub mod format;
pub mod lap;
pub mod snapshot;
pub mod state;
pub mod stopwatch;

pub use clock::{Clock, ManualClock, SystemClock};
pub use format::{format_elapsed, ZERO_TIME};
pub use lap::{LapHistory, LapRecord, LAP_CAPACITY};
pub use snapshot::Snapshot;
pub use state::{transition, Command, Phase, StopwatchState};
pub use stopwatch::StopwatchEngine;
