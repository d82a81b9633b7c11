use anyhow::Context;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::io;

use super::*;

mod key_dispatch;

pub(super) use key_dispatch::handle_key;

pub(super) fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        app.trace_screen_view_if_changed();
        terminal
            .draw(|f| super::render::draw(f, app))
            .context("draw")?;

        // The frame above shows the submitting state; now do the blocking call.
        if app.has_pending() {
            app.run_pending();
            continue;
        }

        if app.quit {
            app.trace_session_end("quit");
            return Ok(());
        }

        if event::poll(Duration::from_millis(50)).context("poll")? {
            match event::read().context("read event")? {
                Event::Key(k) if k.kind == KeyEventKind::Press => handle_key(app, k),
                _ => {}
            }
        }
    }
}
