use ratatui::layout::{Constraint, Direction, Layout, Rect};
use unicode_width::UnicodeWidthStr;

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vertical = split(
        Direction::Vertical,
        r,
        &[
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ],
    );
    split(
        Direction::Horizontal,
        vertical[1],
        &[
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ],
    )[1]
}

pub fn split_vertical(area: Rect, constraints: &[Constraint]) -> Vec<Rect> {
    split(Direction::Vertical, area, constraints)
}

fn split(direction: Direction, area: Rect, constraints: &[Constraint]) -> Vec<Rect> {
    Layout::default()
        .direction(direction)
        .constraints(constraints.to_vec())
        .split(area)
        .to_vec()
}

/// Pad `label` with spaces up to `target_width` display columns.
pub fn pad_label(label: &str, target_width: usize) -> String {
    let padding = target_width.saturating_sub(UnicodeWidthStr::width(label));
    format!("{}{}", label, " ".repeat(padding))
}

/// Widest label in display columns.
pub fn max_label_width<'a>(labels: impl IntoIterator<Item = &'a str>) -> usize {
    labels
        .into_iter()
        .map(UnicodeWidthStr::width)
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_by_display_width() {
        assert_eq!(pad_label("ab", 4), "ab  ");
        assert_eq!(pad_label("日本", 5), "日本 ");
        assert_eq!(pad_label("longer", 2), "longer");
    }

    #[test]
    fn measures_widest_label() {
        assert_eq!(max_label_width(["a", "日本", "abc"]), 4);
        assert_eq!(max_label_width(Vec::<&str>::new()), 0);
    }
}
