use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::json;

use crate::forms::SubmitPhase;

use super::*;

#[derive(Debug, Default)]
pub(in crate::tui_shell) struct AgentTraceStats {
    pub(in crate::tui_shell) screen_views: u64,
    pub(in crate::tui_shell) user_actions: u64,
    pub(in crate::tui_shell) submissions: u64,
    pub(in crate::tui_shell) validation_errors: u64,
    pub(in crate::tui_shell) request_errors: u64,
}

/// Append-only JSONL event log (`--trace`).
#[derive(Debug)]
pub(in crate::tui_shell) struct AgentTraceWriter {
    out: BufWriter<File>,
    path: PathBuf,
    seq: u64,
}

impl AgentTraceWriter {
    fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).with_context(|| {
                format!(
                    "create parent directories for trace path {}",
                    path.display()
                )
            })?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("open trace file {}", path.display()))?;
        Ok(Self {
            out: BufWriter::new(file),
            path: path.to_path_buf(),
            seq: 0,
        })
    }

    fn write_event<T: Serialize>(&mut self, event: &str, payload: T) -> Result<()> {
        self.seq += 1;
        let line = json!({
            "seq": self.seq,
            "ts": now_ts(),
            "event": event,
            "payload": payload
        });
        serde_json::to_writer(&mut self.out, &line).context("serialize trace event")?;
        self.out.write_all(b"\n").context("write trace newline")?;
        self.out.flush().context("flush trace event")?;
        Ok(())
    }
}

impl App {
    pub(in crate::tui_shell) fn enable_agent_trace(&mut self, path: Option<PathBuf>) {
        let Some(path) = path else {
            return;
        };
        match AgentTraceWriter::open(&path) {
            Ok(mut writer) => {
                let _ = writer.write_event(
                    "session_start",
                    json!({
                        "api_base_url": self.client.base_url(),
                        "state_dir": self.store.root().display().to_string(),
                        "session": self.session_label(),
                    }),
                );
                self.agent_trace = Some(writer);
                self.push_output(vec![format!("trace enabled: {}", path.display())]);
            }
            Err(err) => {
                self.push_error(format!("trace disabled: {:#}", err));
            }
        }
    }

    pub(in crate::tui_shell) fn trace_screen_view_if_changed(&mut self) {
        let screen = self.screen();
        if self.last_traced_screen == Some(screen) {
            return;
        }
        self.last_traced_screen = Some(screen);
        if self.agent_trace.is_none() {
            return;
        }
        self.agent_trace_stats.screen_views += 1;
        self.write_trace_event(
            "screen_view",
            json!({
                "screen": screen_id(screen),
                "title": self.view().title(),
                "has_modal": self.modal.is_some(),
            }),
        );
    }

    pub(in crate::tui_shell) fn trace_key_action(&mut self, key: KeyEvent) {
        if self.agent_trace.is_none() {
            return;
        }
        self.agent_trace_stats.user_actions += 1;
        let reveal_chars = self.modal.is_some() || self.screen() == Screen::Dashboard;
        self.write_trace_event(
            "user_action",
            json!({
                "source": "keyboard",
                "key": key_to_string(&key, reveal_chars),
                "screen": screen_id(self.screen()),
            }),
        );
    }

    pub(in crate::tui_shell) fn trace_submit(
        &mut self,
        phase: SubmitPhase,
        error: Option<&str>,
        short_url: Option<&str>,
    ) {
        self.agent_trace_stats.submissions += 1;
        if phase == SubmitPhase::Invalid {
            self.agent_trace_stats.validation_errors += 1;
        }
        self.write_trace_event(
            "submit",
            json!({
                "screen": screen_id(self.screen()),
                "phase": format!("{:?}", phase).to_lowercase(),
                "error": error,
                "short_url": short_url,
            }),
        );
    }

    pub(in crate::tui_shell) fn trace_error(&mut self, msg: &str) {
        self.agent_trace_stats.request_errors += 1;
        self.write_trace_event(
            "error",
            json!({
                "message": msg,
                "screen": screen_id(self.screen()),
            }),
        );
    }

    pub(in crate::tui_shell) fn trace_session_end(&mut self, reason: &str) {
        self.write_trace_event(
            "session_end",
            json!({
                "reason": reason,
                "stats": {
                    "screen_views": self.agent_trace_stats.screen_views,
                    "user_actions": self.agent_trace_stats.user_actions,
                    "submissions": self.agent_trace_stats.submissions,
                    "validation_errors": self.agent_trace_stats.validation_errors,
                    "request_errors": self.agent_trace_stats.request_errors
                },
                "trace_path": self.agent_trace.as_ref().map(|w| w.path.display().to_string()),
            }),
        );
    }

    fn write_trace_event<T: Serialize>(&mut self, event: &str, payload: T) {
        let Some(writer) = self.agent_trace.as_mut() else {
            return;
        };
        if writer.write_event(event, payload).is_err() {
            self.agent_trace = None;
        }
    }
}

fn screen_id(screen: Screen) -> String {
    match screen {
        Screen::Login => "login".to_string(),
        Screen::Dashboard => "dashboard".to_string(),
        Screen::Create(kind) => format!("create:{}", kind.segment()),
        Screen::Edit(kind, id) => format!("edit:{}:{}", kind.segment(), id),
    }
}

/// Characters typed into form fields are recorded as `char` only.
fn key_to_string(key: &KeyEvent, reveal_chars: bool) -> String {
    let mut parts = Vec::new();
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("ctrl".to_string());
    }
    if key.modifiers.contains(KeyModifiers::ALT) {
        parts.push("alt".to_string());
    }
    let code = match key.code {
        KeyCode::Char(c) if reveal_chars || !parts.is_empty() => c.to_string(),
        KeyCode::Char(_) => "char".to_string(),
        KeyCode::Enter => "enter".to_string(),
        KeyCode::Esc => "esc".to_string(),
        KeyCode::Tab => "tab".to_string(),
        KeyCode::BackTab => "backtab".to_string(),
        KeyCode::Backspace => "backspace".to_string(),
        KeyCode::Delete => "delete".to_string(),
        KeyCode::Up => "up".to_string(),
        KeyCode::Down => "down".to_string(),
        KeyCode::Left => "left".to_string(),
        KeyCode::Right => "right".to_string(),
        other => format!("{:?}", other).to_lowercase(),
    };
    parts.push(code);
    parts.join("+")
}
