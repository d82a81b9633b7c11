use super::*;

pub(super) fn draw(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(area);

    // Header
    let session = app.session_label();
    let session_color = if session == "signed in" {
        Color::Green
    } else {
        Color::Red
    };
    let spans = vec![
        Span::styled(
            "Link Generator",
            Style::default().fg(Color::Black).bg(Color::White),
        ),
        Span::raw("  "),
        Span::raw(app.client.base_url().to_string()),
        Span::raw("  "),
        Span::styled(session, Style::default().fg(session_color)),
    ];
    let header = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, chunks[0]);

    let ctx = RenderCtx {
        now: OffsetDateTime::now_utc(),
    };
    app.view().render(frame, chunks[1], &ctx);

    // Status / last result
    {
        let mut lines = Vec::new();
        if let Some(r) = &app.last_result {
            let style = match r.kind {
                EntryKind::Output => Style::default().fg(Color::White),
                EntryKind::Error => Style::default().fg(Color::Red),
            };
            for (i, l) in r.lines.iter().enumerate() {
                if i == 0 {
                    lines.push(Line::from(vec![
                        Span::styled(
                            format!("{} ", fmt_ts_ui(&r.ts)),
                            Style::default().fg(Color::DarkGray),
                        ),
                        Span::styled(l.as_str(), style),
                    ]));
                } else {
                    lines.push(Line::from(Span::styled(l.as_str(), style)));
                }
            }
        }
        let status = Paragraph::new(lines)
            .block(Block::default().borders(Borders::TOP).title("Last"))
            .wrap(Wrap { trim: false });
        frame.render_widget(status, chunks[2]);
    }

    let hints = if app.has_pending() {
        "working..."
    } else if app.modal.is_some() {
        "Up/Down: move  Enter: select  Esc: close"
    } else {
        app.view().hints()
    };
    frame.render_widget(
        Paragraph::new(Span::styled(hints, Style::default().fg(Color::DarkGray))),
        chunks[3],
    );

    if let Some(m) = &app.modal {
        modal::draw_modal(frame, m);
    }
}
