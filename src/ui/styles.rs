use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};

/// Orange used for the screen title, the name field and the menu cursor.
pub const ACCENT: Color = Color::Indexed(208);

pub fn highlight_style() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn field_style() -> Style {
    Style::default().fg(ACCENT)
}

fn muted_style() -> Style {
    Style::default().add_modifier(Modifier::DIM)
}

/// Multi-line status header; every line gets the highlight style.
pub fn title_text(text: impl Into<String>) -> Text<'static> {
    Text::styled(text.into(), highlight_style())
}

/// Key help and hints under a widget.
pub fn hint_line(text: impl Into<String>) -> Line<'static> {
    Line::styled(text.into(), muted_style())
}

/// Explanation shown next to a menu label.
pub fn description_span(text: &'static str) -> Span<'static> {
    Span::styled(text, muted_style())
}
