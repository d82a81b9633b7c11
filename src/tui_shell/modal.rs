use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crossterm::event::{KeyCode, KeyEvent};

use crate::screens::CREATE_MENU;

pub(super) fn draw_modal(frame: &mut ratatui::Frame, modal: &super::Modal) {
    let area = frame.area();
    let w = area.width.saturating_sub(6).clamp(20, 70);
    let h = (modal.lines.len() as u16 + 2).clamp(5, area.height.saturating_sub(4).max(5));
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    let box_area = ratatui::layout::Rect {
        x,
        y,
        width: w,
        height: h,
    };

    frame.render_widget(ratatui::widgets::Clear, box_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(modal.title.as_str());
    frame.render_widget(block.clone(), box_area);
    let inner = block.inner(box_area);

    let lines: Vec<Line> = match &modal.kind {
        super::ModalKind::Viewer | super::ModalKind::ConfirmDelete { .. } => {
            modal.lines.iter().map(|s| Line::from(s.as_str())).collect()
        }
        super::ModalKind::CreateMenu { selected } => modal
            .lines
            .iter()
            .enumerate()
            .map(|(i, s)| {
                let text = format!("{}. {}", i + 1, s);
                if i == *selected {
                    Line::from(Span::styled(
                        text,
                        Style::default().fg(Color::Black).bg(Color::White),
                    ))
                } else {
                    Line::from(text)
                }
            })
            .collect(),
    };
    let scroll = modal.scroll.min(modal.lines.len().saturating_sub(1)) as u16;
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0)),
        inner,
    );
}

pub(super) fn handle_modal_key(app: &mut super::app::App, key: KeyEvent) {
    enum ModalAction {
        None,
        Close,
        Delete,
        Open(usize),
    }

    let action = {
        let Some(m) = app.modal_mut() else {
            return;
        };

        match &mut m.kind {
            super::ModalKind::Viewer => match key.code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => ModalAction::Close,
                KeyCode::Up => {
                    m.scroll = m.scroll.saturating_sub(1);
                    ModalAction::None
                }
                KeyCode::Down => {
                    if m.scroll < m.lines.len().saturating_sub(1) {
                        m.scroll += 1;
                    }
                    ModalAction::None
                }
                _ => ModalAction::None,
            },
            super::ModalKind::ConfirmDelete { .. } => match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => ModalAction::Delete,
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => ModalAction::Close,
                _ => ModalAction::None,
            },
            super::ModalKind::CreateMenu { selected } => match key.code {
                KeyCode::Esc => ModalAction::Close,
                KeyCode::Up => {
                    *selected = selected.saturating_sub(1);
                    ModalAction::None
                }
                KeyCode::Down => {
                    *selected = (*selected + 1).min(CREATE_MENU.len() - 1);
                    ModalAction::None
                }
                KeyCode::Enter => ModalAction::Open(*selected),
                KeyCode::Char(c @ '1'..='3') => ModalAction::Open(c as usize - '1' as usize),
                _ => ModalAction::None,
            },
        }
    };

    match action {
        ModalAction::None => {}
        ModalAction::Close => app.close_modal(),
        ModalAction::Delete => app.confirm_delete(),
        ModalAction::Open(i) => {
            app.close_modal();
            if let Some((_, target)) = CREATE_MENU.get(i) {
                app.navigate(*target);
            }
        }
    }
}
