use crate::engine::LAP_CAPACITY;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub watch_face: Rect,
    pub controls: Rect,
    pub record_list: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),                    // Watch face
            Constraint::Length(3),                    // Buttons
            Constraint::Min(LAP_CAPACITY as u16 + 2), // Lap records
            Constraint::Length(1),                    // Status bar
        ])
        .split(area);

    AppLayout {
        watch_face: chunks[0],
        controls: chunks[1],
        record_list: chunks[2],
        status_bar: chunks[3],
    }
}
