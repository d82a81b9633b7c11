use std::any::Any;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::screens::{FormScreen, Screen};

use super::super::{RenderCtx, View, ViewAction, render_view_chrome};
use super::fields::{CursorOutcome, FormCursor, field_lines};

/// Create or edit form for one link kind.
pub(in crate::tui_shell) struct EditorView {
    screen: Screen,
    pub(in crate::tui_shell) editor: Box<dyn FormScreen>,
    cursor: FormCursor,
    updated_at: String,
}

impl EditorView {
    pub(in crate::tui_shell) fn new(
        screen: Screen,
        editor: Box<dyn FormScreen>,
        updated_at: String,
    ) -> Self {
        let mut cursor = FormCursor::default();
        cursor.sync(&editor);
        Self {
            screen,
            editor,
            cursor,
            updated_at,
        }
    }
}

impl View for EditorView {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn screen(&self) -> Screen {
        self.screen
    }

    fn title(&self) -> String {
        self.screen.title()
    }

    fn updated_at(&self) -> &str {
        &self.updated_at
    }

    fn hints(&self) -> &'static str {
        "Tab/Up/Down: field  Ctrl+S: save  Ctrl+Y: copy link  Esc: back"
    }

    fn handle_key(&mut self, key: KeyEvent) -> ViewAction {
        match key.code {
            KeyCode::Esc => return ViewAction::Navigate(Screen::Dashboard),
            KeyCode::Char('y') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return ViewAction::CopyResult;
            }
            _ => {}
        }
        match self.cursor.handle_key(key, &mut self.editor) {
            CursorOutcome::Submit => ViewAction::Submit,
            CursorOutcome::Handled | CursorOutcome::Unhandled => ViewAction::None,
        }
    }

    fn render(&self, frame: &mut ratatui::Frame, area: Rect, ctx: &RenderCtx) {
        let inner = render_view_chrome(frame, &self.title(), self.updated_at(), area, ctx);

        let state = self.editor.state();
        let result_height = if state.success_url.is_some() { 5 } else { 0 };
        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(result_height)])
            .split(inner);

        let mut lines = field_lines(
            &self.editor.field_rows(),
            &self.cursor,
            self.editor.submit_label(),
            state.is_submitting,
        );
        if let Some(err) = state.error.as_deref() {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                err.to_string(),
                Style::default().fg(Color::Red),
            )));
        }
        if let Some(notice) = self.editor.notice() {
            lines.push(Line::from(Span::styled(
                notice.to_string(),
                Style::default().fg(Color::Yellow),
            )));
        }
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), parts[0]);

        if let Some(url) = state.success_url.as_deref() {
            let panel = Paragraph::new(vec![
                Line::from(Span::styled(
                    url.to_string(),
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(Span::styled("Ctrl+Y: COPY", Style::default().fg(Color::Gray))),
            ])
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(self.editor.success_title()),
            );
            frame.render_widget(panel, parts[1]);
        }
    }
}
