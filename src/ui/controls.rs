use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

const BUTTON_WIDTH: u16 = 11;

/// Lap/Reset on the left, Start/Stop on the right.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let snap = &state.snapshot;
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let left = Rect {
        width: BUTTON_WIDTH.min(halves[0].width),
        ..halves[0]
    };
    let right_width = BUTTON_WIDTH.min(halves[1].width);
    let right = Rect {
        x: halves[1].right() - right_width,
        width: right_width,
        ..halves[1]
    };

    render_button(frame, left, snap.secondary_label(), Theme::secondary_button());
    render_button(
        frame,
        right,
        snap.primary_label(),
        Theme::primary_button(snap.is_running),
    );
}

fn render_button(frame: &mut Frame, area: Rect, label: &str, style: Style) {
    let button = Paragraph::new(Span::styled(label, style))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Theme::border()),
        );
    frame.render_widget(button, area);
}
