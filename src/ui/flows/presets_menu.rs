use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::prelude::Stylize;
use ratatui::{prelude::*, widgets::*};
use std::time::Duration;

use crate::error::Result;
use crate::host::MenuHost;
use crate::menu::{MenuAction, MenuEntry, Menus};
use crate::records::Transforms;
use crate::ui::components::utils::{max_label_width, pad_label, split_vertical};
use crate::ui::styles::{description_span, highlight_style, hint_line, title_text};
use crate::ui::{TerminalSession, UiRoute};

/// Keeps the most recently published menus and shows them as a navigable list.
#[derive(Debug, Default)]
pub struct TerminalMenuHost {
    menus: Menus,
    selected: usize,
}

impl MenuHost for TerminalMenuHost {
    fn publish(&mut self, menus: Menus) {
        self.selected = clamp_selection(self.selected, menus.len());
        self.menus = menus;
    }
}

impl TerminalMenuHost {
    pub fn menus(&self) -> &Menus {
        &self.menus
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Block until an entry is chosen. `Ok(None)` means the user quit.
    pub fn run_menu(
        &mut self,
        config_name: &str,
        transforms: &Transforms,
    ) -> Result<Option<MenuAction>> {
        if self.menus.is_empty() {
            return Ok(None);
        }

        let mut session = TerminalSession::enter()?;
        let label_width = max_label_width(self.menus.iter().map(menu_label));

        loop {
            let selected = self.selected;
            let entries = self.menus.entries();
            session.draw(|f| {
                let chunks = split_vertical(
                    f.size(),
                    &[
                        Constraint::Length(4),
                        Constraint::Min(1),
                        Constraint::Length(1),
                    ],
                );

                let header = Paragraph::new(title_text(format!(
                    "{} — config: {}\nIDT: {}\nODT: {}\nLook: {}",
                    UiRoute::PresetsMenu.title(),
                    config_name,
                    transforms.idt,
                    transforms.odt,
                    transforms.look
                )));
                f.render_widget(header, chunks[0]);

                let items: Vec<ListItem> = entries
                    .iter()
                    .enumerate()
                    .map(|(i, entry)| {
                        let line: Line = vec![
                            Span::from(pad_label(menu_label(entry), label_width)).bold(),
                            "  ".into(),
                            description_span(entry.action.describe()),
                        ]
                        .into();
                        let item = ListItem::new(line);
                        if i == selected {
                            item.style(highlight_style())
                        } else {
                            item
                        }
                    })
                    .collect();
                let list = List::new(items).block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(crate::menu::MENU_ROOT),
                );
                f.render_widget(list, chunks[1]);

                let help = Paragraph::new(hint_line(
                    "↑/↓ or j/k navigate • Enter select • q/Esc quit",
                ));
                f.render_widget(help, chunks[2]);
            })?;

            if !event::poll(Duration::from_millis(200))? {
                continue;
            }
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }

            let total = self.menus.len();
            match key.code {
                KeyCode::Up | KeyCode::Char('k') => {
                    self.selected = step_selection(self.selected, total, -1);
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    self.selected = step_selection(self.selected, total, 1);
                }
                KeyCode::Enter => {
                    let action = self.menus.entries()[self.selected].action.clone();
                    session.leave()?;
                    return Ok(Some(action));
                }
                KeyCode::Esc | KeyCode::Char('q') => {
                    session.leave()?;
                    return Ok(None);
                }
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    session.leave()?;
                    return Ok(None);
                }
                _ => {}
            }
        }
    }
}

/// Path below the root menu, e.g. `Presets/Day`.
fn menu_label(entry: &MenuEntry) -> &str {
    entry
        .path
        .strip_prefix(crate::menu::MENU_ROOT)
        .and_then(|rest| rest.strip_prefix('/'))
        .unwrap_or(&entry.path)
}

/// Move the cursor by `delta`, wrapping at both ends.
fn step_selection(selected: usize, total: usize, delta: isize) -> usize {
    if total == 0 {
        return 0;
    }
    let total = total as isize;
    (selected as isize + delta).rem_euclid(total) as usize
}

fn clamp_selection(selected: usize, total: usize) -> usize {
    selected.min(total.saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_wraps_around() {
        assert_eq!(step_selection(0, 4, -1), 3);
        assert_eq!(step_selection(3, 4, 1), 0);
        assert_eq!(step_selection(1, 4, 1), 2);
        assert_eq!(step_selection(0, 0, 1), 0);
    }

    #[test]
    fn publish_keeps_cursor_in_range() {
        let mut host = TerminalMenuHost::default();
        host.publish(Menus::for_presets(&["A", "B", "C"]));
        host.selected = 7;

        host.publish(Menus::for_presets(&["A"]));

        assert_eq!(host.selected(), 3);
        assert_eq!(host.menus().len(), 4);
    }

    #[test]
    fn labels_drop_root_segment() {
        let menus = Menus::for_presets(&["Day"]);
        let labels: Vec<&str> = menus.iter().map(menu_label).collect();
        assert_eq!(
            labels,
            vec!["Presets/Day", "Current OCIO Config", "Save Preset", "Remove Preset/Day"]
        );
    }
}
