use std::any::Any;

use crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders};

use time::OffsetDateTime;

use crate::screens::Screen;

#[derive(Clone, Copy, Debug)]
pub(super) struct RenderCtx {
    pub(super) now: OffsetDateTime,
}

pub(super) trait View: Any {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn screen(&self) -> Screen;
    fn title(&self) -> String;
    fn updated_at(&self) -> &str;

    /// Key help shown in the footer.
    fn hints(&self) -> &'static str;

    /// Edits stay inside the view; anything needing the backend, the store or
    /// navigation comes back as an action.
    fn handle_key(&mut self, key: KeyEvent) -> super::ViewAction;

    fn render(&self, frame: &mut ratatui::Frame, area: Rect, ctx: &RenderCtx);
}

/// What a key press asks the shell to do beyond editing the view itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(super) enum ViewAction {
    None,
    Quit,
    Navigate(Screen),
    Submit,
    CopyResult,
    Reload,
    ConfirmDelete(u64),
    OpenLink(String),
    CreateMenu,
    Logout,
}

pub(super) fn render_view_chrome(
    frame: &mut ratatui::Frame,
    title: &str,
    updated_at: &str,
    area: Rect,
    ctx: &RenderCtx,
) -> Rect {
    let mut spans = vec![Span::styled(
        title.to_string(),
        Style::default().fg(Color::Yellow),
    )];
    if !updated_at.is_empty() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            super::fmt_since(updated_at, ctx.now),
            Style::default().fg(Color::Gray),
        ));
    }

    let outer = Block::default()
        .borders(Borders::ALL)
        .title(Line::from(spans));
    let inner = outer.inner(area);
    frame.render_widget(outer, area);
    inner
}
