use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{prelude::*, widgets::*};
use std::time::Duration;

use crate::error::Result;
use crate::host::PresetDialog;
use crate::ui::styles::{field_style, hint_line};
use crate::ui::{
    components::utils::{centered_rect, split_vertical},
    TerminalSession, UiRoute,
};
use crate::utils::normalize_preset_name;

const DEFAULT_HINT: &str = "Enter to save • Esc to cancel • Backspace delete";

/// Result of feeding one key to the name field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputOutcome {
    Pending,
    Confirmed(String),
    Cancelled,
}

/// Editable buffer behind the "Preset Name" field.
#[derive(Debug, Default)]
pub struct NameInput {
    buffer: String,
    error: Option<&'static str>,
}

impl NameInput {
    pub fn value(&self) -> &str {
        &self.buffer
    }

    pub fn error(&self) -> Option<&'static str> {
        self.error
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> InputOutcome {
        match key.code {
            KeyCode::Esc => InputOutcome::Cancelled,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                InputOutcome::Cancelled
            }
            KeyCode::Enter => match normalize_preset_name(&self.buffer) {
                Some(name) => InputOutcome::Confirmed(name),
                None => {
                    self.error = Some("Name cannot be empty");
                    InputOutcome::Pending
                }
            },
            KeyCode::Backspace => {
                self.buffer.pop();
                self.error = None;
                InputOutcome::Pending
            }
            // `/` is kept in the stored name; menus show it as `-`.
            KeyCode::Char(ch) if !ch.is_control() => {
                self.buffer.push(ch);
                self.error = None;
                InputOutcome::Pending
            }
            _ => InputOutcome::Pending,
        }
    }
}

/// Prompt for a preset name inside the alternate screen. `Ok(None)` when cancelled.
pub fn run_save_preset_dialog() -> Result<Option<String>> {
    let mut session = TerminalSession::enter()?;
    let mut input = NameInput::default();

    loop {
        session.draw(|f| {
            let area = centered_rect(60, 30, f.size());
            f.render_widget(Clear, area);

            let block = Block::default()
                .borders(Borders::ALL)
                .title(format!("{} — Enter preset name", UiRoute::SavePreset.title()));
            f.render_widget(block.clone(), area);
            let inner = block.inner(area);

            let chunks = split_vertical(
                inner,
                &[
                    Constraint::Length(3),
                    Constraint::Length(3),
                    Constraint::Min(1),
                ],
            );

            let instructions = Paragraph::new(hint_line(
                "Captures the current IDT, ODT and Look. '/' is shown as '-' in menus.",
            ));
            f.render_widget(instructions, chunks[0]);

            let field = Paragraph::new(format!("{}_", input.value()))
                .style(field_style())
                .block(Block::default().borders(Borders::ALL).title("Preset Name:"));
            f.render_widget(field, chunks[1]);

            let message = input.error().unwrap_or(DEFAULT_HINT);
            f.render_widget(Paragraph::new(hint_line(message)), chunks[2]);
        })?;

        if event::poll(Duration::from_millis(200))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match input.handle_key(key) {
                    InputOutcome::Pending => {}
                    InputOutcome::Confirmed(name) => {
                        session.leave()?;
                        return Ok(Some(name));
                    }
                    InputOutcome::Cancelled => {
                        session.leave()?;
                        return Ok(None);
                    }
                }
            }
        }
    }
}

/// [`PresetDialog`] backed by the terminal prompt above.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalPresetDialog;

impl PresetDialog for TerminalPresetDialog {
    fn prompt_preset_name(&mut self) -> Result<Option<String>> {
        run_save_preset_dialog()
    }
}
