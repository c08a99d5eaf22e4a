use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

/// Section time right-aligned on the first line, total time centered below.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Stopwatch ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(Theme::border());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Min(1)])
        .split(inner);

    let section = Paragraph::new(Span::styled(
        format!("{} ", state.snapshot.section_time),
        Theme::section_time(),
    ))
    .alignment(Alignment::Right);
    frame.render_widget(section, rows[0]);

    let total = Paragraph::new(Span::styled(
        state.snapshot.total_time.as_str(),
        Theme::total_time(),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(total, rows[2]);
}
