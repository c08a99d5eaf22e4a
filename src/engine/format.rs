//! Elapsed-time formatting for the watch face and lap records.

const MS_PER_MINUTE: u64 = 60_000;
const MS_PER_SECOND: u64 = 1_000;

/// Format a millisecond duration as `MM:SS.HH`.
///
/// Every field is truncated, never rounded. Minutes do not roll over into
/// hours, so durations of 100 minutes or more widen the minutes field
/// (`6_000_000` renders as `100:00.00`).
pub fn format_elapsed(ms: u64) -> String {
    let minutes = ms / MS_PER_MINUTE;
    let seconds = (ms % MS_PER_MINUTE) / MS_PER_SECOND;
    let hundredths = (ms % MS_PER_SECOND) / 10;
    format!("{:02}:{:02}.{:02}", minutes, seconds, hundredths)
}

/// The value shown before the watch has accumulated any time.
pub const ZERO_TIME: &str = "00:00.00";
