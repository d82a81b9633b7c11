use std::io::{self, IsTerminal};
use std::sync::OnceLock;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::clipboard::{Clipboard, SystemClipboard};
use crate::remote::RemoteClient;
use crate::screens::Screen;
use crate::store::LocalStore;
use crate::tui::TuiRunOptions;

use time::OffsetDateTime;
use time::format_description::FormatItem;
use time::format_description::well_known::Rfc3339;

use super::modal;
use super::view::{RenderCtx, View, ViewAction};
use super::views::{DashboardView, EditorView, LoginView};

mod actions;
mod agent_trace;
mod event_loop;
mod log_types;
mod modal_output;
mod modal_types;
mod navigation;
mod pending;
mod render;
mod time_utils;

use self::agent_trace::{AgentTraceStats, AgentTraceWriter};
use self::log_types::{EntryKind, ScrollEntry};
pub(super) use self::modal_types::{Modal, ModalKind};
use self::pending::PendingRequest;
pub(in crate::tui_shell) use self::time_utils::now_ts;
pub(super) use self::time_utils::{fmt_since, fmt_ts_ui};

pub(super) fn run(opts: TuiRunOptions) -> Result<()> {
    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        anyhow::bail!("TUI requires an interactive terminal (TTY)");
    }

    // State problems surface before the terminal is taken over.
    let mut app = App::load(&opts)?;

    let mut stdout = io::stdout();
    enable_raw_mode().context("enable raw mode")?;
    execute!(stdout, EnterAlternateScreen).context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;
    terminal.clear().ok();

    let res = event_loop::run_loop(&mut terminal, &mut app);

    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    res
}

pub(super) struct App {
    store: LocalStore,
    client: RemoteClient,
    clipboard: Box<dyn Clipboard>,

    /// Latest output or error, shown in the "Last" panel.
    last_result: Option<ScrollEntry>,

    modal: Option<Modal>,
    view: Box<dyn View>,

    /// Request to run right after the next draw.
    pending: Option<PendingRequest>,

    agent_trace: Option<AgentTraceWriter>,
    agent_trace_stats: AgentTraceStats,
    last_traced_screen: Option<Screen>,

    quit: bool,
}

impl App {
    fn load(opts: &TuiRunOptions) -> Result<Self> {
        let store = LocalStore::open(&opts.state_dir)?;
        let token = store.get_credential()?;
        let client = RemoteClient::new(&opts.api_base_url, token)?;
        let mut app = Self::with_parts(store, client, Box::new(SystemClipboard::default()));
        app.enable_agent_trace(opts.trace.clone());
        let start = crate::screens::initial_screen(&app.store)?;
        app.navigate(start);
        Ok(app)
    }

    fn with_parts(store: LocalStore, client: RemoteClient, clipboard: Box<dyn Clipboard>) -> Self {
        Self {
            store,
            client,
            clipboard,
            last_result: None,
            modal: None,
            view: Box::new(LoginView::new(now_ts())),
            pending: None,
            agent_trace: None,
            agent_trace_stats: AgentTraceStats::default(),
            last_traced_screen: None,
            quit: false,
        }
    }

    pub(in crate::tui_shell) fn view(&self) -> &dyn View {
        self.view.as_ref()
    }

    pub(in crate::tui_shell) fn screen(&self) -> Screen {
        self.view.screen()
    }

    pub(in crate::tui_shell) fn modal_mut(&mut self) -> Option<&mut Modal> {
        self.modal.as_mut()
    }

    fn view_as<T: 'static>(&self) -> Option<&T> {
        self.view.as_any().downcast_ref::<T>()
    }

    fn view_as_mut<T: 'static>(&mut self) -> Option<&mut T> {
        self.view.as_any_mut().downcast_mut::<T>()
    }

    fn session_label(&self) -> &'static str {
        if self.client.has_token() { "signed in" } else { "signed out" }
    }
}

#[cfg(test)]
#[path = "../tests/tui_shell/app_tests.rs"]
mod tests;
