use std::any::Any;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::screens::{LoginController, Screen};

use super::super::{RenderCtx, View, ViewAction, render_view_chrome};
use super::fields::{CursorOutcome, FormCursor, field_lines};

#[derive(Debug)]
pub(in crate::tui_shell) struct LoginView {
    pub(in crate::tui_shell) ctl: LoginController,
    cursor: FormCursor,
    updated_at: String,
}

impl LoginView {
    pub(in crate::tui_shell) fn new(updated_at: String) -> Self {
        let ctl = LoginController::new();
        let mut cursor = FormCursor::default();
        cursor.sync(&ctl);
        Self {
            ctl,
            cursor,
            updated_at,
        }
    }
}

impl View for LoginView {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn screen(&self) -> Screen {
        Screen::Login
    }

    fn title(&self) -> String {
        Screen::Login.title()
    }

    fn updated_at(&self) -> &str {
        &self.updated_at
    }

    fn hints(&self) -> &'static str {
        "Tab/Up/Down: field  Enter: next/login  Ctrl+S: login  Esc: quit"
    }

    fn handle_key(&mut self, key: KeyEvent) -> ViewAction {
        if key.code == KeyCode::Esc {
            return ViewAction::Quit;
        }
        match self.cursor.handle_key(key, &mut self.ctl) {
            CursorOutcome::Submit => ViewAction::Submit,
            CursorOutcome::Handled | CursorOutcome::Unhandled => ViewAction::None,
        }
    }

    fn render(&self, frame: &mut ratatui::Frame, area: Rect, ctx: &RenderCtx) {
        let inner = render_view_chrome(frame, &self.title(), self.updated_at(), area, ctx);

        let mut lines = field_lines(
            &self.ctl.field_rows(),
            &self.cursor,
            self.ctl.submit_label(),
            self.ctl.is_submitting(),
        );
        if let Some(err) = self.ctl.error() {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                err.to_string(),
                Style::default().fg(Color::Red),
            )));
        }
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
    }
}
