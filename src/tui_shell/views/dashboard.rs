use std::any::Any;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState};

use crate::screens::{COLUMNS, DashboardController, Screen, TableBody, row_cells};

use super::super::{RenderCtx, View, ViewAction, render_view_chrome};

const WIDTHS: [u16; 12] = [5, 8, 12, 12, 14, 14, 20, 14, 12, 20, 14, 14];

#[derive(Debug)]
pub(in crate::tui_shell) struct DashboardView {
    pub(in crate::tui_shell) ctl: DashboardController,
    pub(in crate::tui_shell) selected: usize,
    pub(in crate::tui_shell) updated_at: String,
}

impl DashboardView {
    pub(in crate::tui_shell) fn new(ctl: DashboardController, updated_at: String) -> Self {
        Self {
            ctl,
            selected: 0,
            updated_at,
        }
    }

    /// Keeps the selection inside the table after a re-fetch.
    pub(in crate::tui_shell) fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.ctl.rows().len().saturating_sub(1));
    }

    /// Header plus a single full-width line in place of the rows.
    fn render_message(
        &self,
        frame: &mut ratatui::Frame,
        area: Rect,
        header: Row<'_>,
        msg: &str,
        color: Color,
    ) {
        let split = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(area);
        let widths = WIDTHS.iter().map(|w| Constraint::Length(*w));
        frame.render_widget(Table::new(Vec::<Row>::new(), widths).header(header), split[0]);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                msg.to_string(),
                Style::default().fg(color),
            ))),
            split[1],
        );
    }

    fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn move_down(&mut self) {
        let max = self.ctl.rows().len().saturating_sub(1);
        self.selected = (self.selected + 1).min(max);
    }
}

impl View for DashboardView {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn screen(&self) -> Screen {
        Screen::Dashboard
    }

    fn title(&self) -> String {
        Screen::Dashboard.title()
    }

    fn updated_at(&self) -> &str {
        &self.updated_at
    }

    fn hints(&self) -> &'static str {
        "Enter/e: edit  d: delete  o: open link  a: add  r: reload  L: logout  q: quit"
    }

    fn handle_key(&mut self, key: KeyEvent) -> ViewAction {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_up();
                ViewAction::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_down();
                ViewAction::None
            }
            KeyCode::Enter | KeyCode::Char('e') => match self.ctl.row(self.selected) {
                Some(row) => ViewAction::Navigate(DashboardController::edit_target(row)),
                None => ViewAction::None,
            },
            KeyCode::Char('d') | KeyCode::Delete => match self.ctl.row(self.selected) {
                Some(row) => {
                    let id = row.id;
                    self.ctl.request_delete(id);
                    ViewAction::ConfirmDelete(id)
                }
                None => ViewAction::None,
            },
            KeyCode::Char('o') => match self.ctl.row(self.selected) {
                Some(row) => ViewAction::OpenLink(row.slug.clone()),
                None => ViewAction::None,
            },
            KeyCode::Char('a') => {
                self.ctl.toggle_menu();
                ViewAction::CreateMenu
            }
            KeyCode::Char('r') => ViewAction::Reload,
            KeyCode::Char('L') => ViewAction::Logout,
            KeyCode::Char('q') | KeyCode::Esc => ViewAction::Quit,
            _ => ViewAction::None,
        }
    }

    fn render(&self, frame: &mut ratatui::Frame, area: Rect, ctx: &RenderCtx) {
        let inner = render_view_chrome(frame, &self.title(), self.updated_at(), area, ctx);
        let action_height = if self.ctl.action_error().is_some() { 1 } else { 0 };
        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(action_height)])
            .split(inner);

        let header = Row::new(COLUMNS[..12].iter().map(|c| Cell::from(*c))).style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );
        match self.ctl.body() {
            TableBody::Rows(rows) => {
                let widths = WIDTHS.iter().map(|w| Constraint::Length(*w));
                let body = rows.iter().map(|r| Row::new(row_cells(r).map(Cell::from)));
                let table = Table::new(body, widths)
                    .header(header)
                    .block(Block::default().borders(Borders::BOTTOM).title(format!(
                        "{} link{}",
                        rows.len(),
                        if rows.len() == 1 { "" } else { "s" }
                    )))
                    .row_highlight_style(Style::default().bg(Color::DarkGray));
                let mut state = TableState::default()
                    .with_selected(Some(self.selected.min(rows.len().saturating_sub(1))));
                frame.render_stateful_widget(table, parts[0], &mut state);
            }
            TableBody::Placeholder(msg) => self.render_message(frame, parts[0], header, msg, Color::Gray),
            TableBody::Error(msg) => self.render_message(frame, parts[0], header, msg, Color::Red),
        }

        if let Some(err) = self.ctl.action_error() {
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    err.to_string(),
                    Style::default().fg(Color::Red),
                ))),
                parts[1],
            );
        }
    }
}

#[cfg(test)]
#[path = "../../tests/tui_shell/dashboard_view_tests.rs"]
mod tests;
