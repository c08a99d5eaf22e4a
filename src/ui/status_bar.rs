use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

const HINTS: &str = "[space] start/stop  [l] lap/reset  [r] reset  [q] quit";

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = vec![Span::styled(
        format!(" {} ", state.status_line()),
        Theme::status_bar(),
    )];

    let hints = if state.config.ui.show_hints { HINTS } else { "" };

    // Pad to fill remaining space
    let used: usize = parts.iter().map(|s| s.content.len()).sum();
    let remaining = (area.width as usize).saturating_sub(used + hints.len() + 1);
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    if !hints.is_empty() {
        parts.push(Span::styled(format!("{} ", hints), Theme::hint()));
    }

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
