//! Lap records and the bounded, newest-first lap history.

use std::collections::VecDeque;

/// Maximum number of laps kept; older ones are evicted.
pub const LAP_CAPACITY: usize = 7;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LapRecord {
    pub label: String,
    pub formatted_time: String,
}

impl LapRecord {
    pub fn new(number: u32, formatted_time: String) -> Self {
        Self {
            label: format!("Lap {}", number),
            formatted_time,
        }
    }
}

/// Lap history ordered newest first, holding at most [`LAP_CAPACITY`] entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LapHistory {
    records: VecDeque<LapRecord>,
}

impl LapHistory {
    pub fn new() -> Self {
        Self {
            records: VecDeque::with_capacity(LAP_CAPACITY),
        }
    }

    /// Insert at the front, dropping the oldest record once full.
    pub fn push(&mut self, record: LapRecord) {
        if self.records.len() == LAP_CAPACITY {
            self.records.pop_back();
        }
        self.records.push_front(record);
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LapRecord> {
        self.records.iter()
    }

    pub fn to_vec(&self) -> Vec<LapRecord> {
        self.records.iter().cloned().collect()
    }
}
