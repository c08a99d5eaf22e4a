mod controls;
mod layout;
mod record_list;
mod status_bar;
mod theme;
mod watch_face;

use crate::app::state::AppState;
use ratatui::prelude::*;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    watch_face::render(frame, app_layout.watch_face, state);
    controls::render(frame, app_layout.controls, state);
    record_list::render(frame, app_layout.record_list, state);
    status_bar::render(frame, app_layout.status_bar, state);
}
