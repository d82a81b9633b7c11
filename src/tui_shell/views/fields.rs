use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::screens::{FieldRow, FormScreen, LoginController};

use super::super::input::Input;

/// Anything that exposes editable rows by index.
pub(in crate::tui_shell) trait FieldTarget {
    fn rows(&self) -> Vec<FieldRow>;
    fn set(&mut self, index: usize, value: &str) -> anyhow::Result<()>;
}

impl FieldTarget for LoginController {
    fn rows(&self) -> Vec<FieldRow> {
        self.field_rows()
    }

    fn set(&mut self, index: usize, value: &str) -> anyhow::Result<()> {
        self.set_field(index, value)
    }
}

impl FieldTarget for Box<dyn FormScreen> {
    fn rows(&self) -> Vec<FieldRow> {
        self.field_rows()
    }

    fn set(&mut self, index: usize, value: &str) -> anyhow::Result<()> {
        self.set_field(index, value)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::tui_shell) enum CursorOutcome {
    Handled,
    Submit,
    Unhandled,
}

/// Focus over the field rows plus the submit button (index == row count).
/// The focused row is edited through `input`; plain fields are written back
/// on every key, file pickers only when focus leaves or Enter is pressed.
#[derive(Debug, Default)]
pub(in crate::tui_shell) struct FormCursor {
    pub(in crate::tui_shell) focus: usize,
    pub(in crate::tui_shell) input: Input,
    /// Last file selection problem, shown under the field.
    pub(in crate::tui_shell) note: Option<String>,
}

impl FormCursor {
    pub(in crate::tui_shell) fn sync(&mut self, target: &dyn FieldTarget) {
        match target.rows().get(self.focus) {
            Some(row) => self.input.set(row.value.clone()),
            None => self.input.clear(),
        }
    }

    pub(in crate::tui_shell) fn on_button(&self, target: &dyn FieldTarget) -> bool {
        self.focus >= target.rows().len()
    }

    pub(in crate::tui_shell) fn handle_key(
        &mut self,
        key: KeyEvent,
        target: &mut dyn FieldTarget,
    ) -> CursorOutcome {
        let rows = target.rows();
        let n = rows.len();
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);

        match key.code {
            KeyCode::Char('s') if ctrl => {
                if !self.commit(target) {
                    return CursorOutcome::Handled;
                }
                return CursorOutcome::Submit;
            }
            KeyCode::Up | KeyCode::BackTab => {
                self.commit(target);
                self.focus = self.focus.saturating_sub(1);
                self.sync(target);
                return CursorOutcome::Handled;
            }
            KeyCode::Down | KeyCode::Tab => {
                self.commit(target);
                self.focus = (self.focus + 1).min(n);
                self.sync(target);
                return CursorOutcome::Handled;
            }
            KeyCode::Enter => {
                if self.focus >= n {
                    return CursorOutcome::Submit;
                }
                self.commit(target);
                if self.note.is_none() {
                    self.focus += 1;
                    self.sync(target);
                }
                return CursorOutcome::Handled;
            }
            _ => {}
        }

        let Some(row) = rows.get(self.focus) else {
            return CursorOutcome::Unhandled;
        };

        match key.code {
            KeyCode::Backspace => self.input.backspace(),
            KeyCode::Delete => self.input.delete(),
            KeyCode::Left => self.input.move_left(),
            KeyCode::Right => self.input.move_right(),
            KeyCode::Home => self.input.home(),
            KeyCode::End => self.input.end(),
            KeyCode::Char(c) if !ctrl && !alt => self.input.insert_char(c),
            _ => return CursorOutcome::Unhandled,
        }
        if !row.picks_file {
            self.apply(target);
        }
        CursorOutcome::Handled
    }

    /// False when a pending file pick was attempted and failed.
    fn commit(&mut self, target: &mut dyn FieldTarget) -> bool {
        let rows = target.rows();
        let Some(row) = rows.get(self.focus) else {
            return true;
        };
        if row.picks_file && self.input.buf.trim() != row.value {
            return self.apply(target);
        }
        true
    }

    fn apply(&mut self, target: &mut dyn FieldTarget) -> bool {
        match target.set(self.focus, &self.input.buf) {
            Ok(()) => {
                self.note = None;
                true
            }
            Err(err) => {
                self.note = Some(format!("{:#}", err));
                false
            }
        }
    }
}

pub(in crate::tui_shell) fn field_lines(
    rows: &[FieldRow],
    cursor: &FormCursor,
    button: &str,
    disabled: bool,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (i, row) in rows.iter().enumerate() {
        let focused = cursor.focus == i;
        let shown = if focused { cursor.input.buf.clone() } else { row.value.clone() };
        let shown = if row.secret {
            "*".repeat(shown.chars().count())
        } else {
            shown
        };

        let label_style = if focused {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let mut spans = vec![Span::styled(format!("{:<28}", row.label), label_style)];
        if focused {
            spans.push(Span::styled(
                format!("{}_", shown),
                Style::default().bg(Color::DarkGray),
            ));
        } else {
            spans.push(Span::raw(shown));
        }
        if row.picks_file {
            spans.push(Span::styled(
                "  (path, Enter to select)",
                Style::default().fg(Color::DarkGray),
            ));
        }
        lines.push(Line::from(spans));

        if row.multiline {
            lines.push(Line::from(""));
        }
        if focused && let Some(note) = cursor.note.as_deref() {
            lines.push(Line::from(Span::styled(
                format!("{:<28}{}", "", note),
                Style::default().fg(Color::Yellow),
            )));
        }
        if let Some(err) = row.error {
            lines.push(Line::from(Span::styled(
                format!("{:<28}{}", "", err),
                Style::default().fg(Color::Red),
            )));
        }
    }

    lines.push(Line::from(""));
    let button_style = if disabled {
        Style::default().fg(Color::DarkGray)
    } else if cursor.focus >= rows.len() {
        Style::default().fg(Color::Black).bg(Color::White)
    } else {
        Style::default().fg(Color::White)
    };
    lines.push(Line::from(Span::styled(format!("[ {} ]", button), button_style)));
    lines
}

#[cfg(test)]
#[path = "../../tests/tui_shell/fields_tests.rs"]
mod tests;
