use crate::app::state::AppState;
use crate::engine::LAP_CAPACITY;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem};
use unicode_width::UnicodeWidthStr;

/// Always shows [`LAP_CAPACITY`] rows, newest lap first, blanks below.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Laps ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(Theme::border());

    let width = block.inner(area).width as usize;
    let laps = &state.snapshot.laps;

    let items: Vec<ListItem> = (0..LAP_CAPACITY)
        .map(|i| match laps.get(i) {
            Some(lap) => ListItem::new(lap_row(&lap.label, &lap.formatted_time, width)),
            None => ListItem::new(Line::default()),
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

fn lap_row(label: &str, time: &str, width: usize) -> Line<'static> {
    let left = format!("  {}", label);
    let right = format!("{}  ", time);
    let gap = width.saturating_sub(left.width() + right.width()).max(1);
    Line::from(vec![
        Span::styled(left, Theme::lap_label()),
        Span::raw(" ".repeat(gap)),
        Span::styled(right, Theme::lap_time()),
    ])
}
