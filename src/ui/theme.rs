use ratatui::style::{Color, Modifier, Style};

pub struct Theme;

impl Theme {
    pub const START_RED: Color = Color::Rgb(0xff, 0x00, 0x44);
    pub const STOP_GREEN: Color = Color::Rgb(0x60, 0xb6, 0x44);

    pub fn border() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn title() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn section_time() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn total_time() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn primary_button(running: bool) -> Style {
        let fg = if running {
            Self::STOP_GREEN
        } else {
            Self::START_RED
        };
        Style::default().fg(fg).add_modifier(Modifier::BOLD)
    }

    pub fn secondary_button() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn lap_label() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn lap_time() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }

    pub fn hint() -> Style {
        Style::default().fg(Color::Cyan).bg(Color::DarkGray)
    }
}
