use anyhow::Result;

use crate::clipboard::Clipboard;
use crate::model::{LinkDetail, LinkKind, ShortUrlResponse};
use crate::remote::{LinksApi, is_http_status_error};

use super::{FieldValues, ValidationResult};

pub const UNEXPECTED_ERROR: &str = "Unexpected error.";

/// A create/edit form for one link kind.
pub trait LinkForm: FieldValues + Sized {
    const KIND: LinkKind;
    /// Shown when an edit prefill returns a record of another kind.
    const NOT_FOUND: &'static str;

    /// Pure function of the current form state.
    fn validate(&self) -> ValidationResult<Self::Field>;

    /// Issues exactly one request for the given mode.
    fn send(&self, api: &dyn LinksApi, mode: SubmitMode) -> Result<ShortUrlResponse>;

    /// `None` when the record is of another kind or lacks its payload.
    fn from_detail(detail: &LinkDetail) -> Option<Self>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitMode {
    Create,
    Edit(u64),
}

impl SubmitMode {
    fn request_failure(self) -> &'static str {
        match self {
            SubmitMode::Create => "Failed to create link.",
            SubmitMode::Edit(_) => "Failed to update link.",
        }
    }
}

/// Validation runs synchronously inside `begin_submit`, so it never shows up
/// as an observable phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitPhase {
    Idle,
    Invalid,
    Submitting,
    Succeeded,
    Failed,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubmitState {
    pub error: Option<String>,
    pub success_url: Option<String>,
    pub is_submitting: bool,
}

/// Maps a failed request to the one line shown on screen: rejected requests
/// get the fixed `request_failure` text, anything else its own message.
pub fn failure_message(err: &anyhow::Error, request_failure: &str, fallback: &str) -> String {
    if is_http_status_error(err) {
        return request_failure.to_string();
    }
    let msg = format!("{:#}", err);
    if msg.trim().is_empty() {
        fallback.to_string()
    } else {
        msg
    }
}

#[derive(Debug)]
pub struct FormController<F: LinkForm> {
    form: F,
    mode: SubmitMode,
    submit_attempted: bool,
    phase: SubmitPhase,
    state: SubmitState,
    notice: Option<String>,
}

impl<F: LinkForm> FormController<F> {
    pub fn new(form: F, mode: SubmitMode) -> Self {
        Self {
            form,
            mode,
            submit_attempted: false,
            phase: SubmitPhase::Idle,
            state: SubmitState::default(),
            notice: None,
        }
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut F {
        &mut self.form
    }

    pub fn mode(&self) -> SubmitMode {
        self.mode
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn state(&self) -> &SubmitState {
        &self.state
    }

    pub fn submit_attempted(&self) -> bool {
        self.submit_attempted
    }

    /// Non-fatal side-effect failures (clipboard) from the last submission.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn validation(&self) -> ValidationResult<F::Field> {
        self.form.validate()
    }

    /// Field errors stay hidden until the first submit attempt.
    pub fn visible_error(&self, field: F::Field) -> Option<&'static str> {
        if !self.submit_attempted {
            return None;
        }
        self.validation().get(field)
    }

    pub fn can_submit(&self) -> bool {
        !self.state.is_submitting
    }

    pub fn set_value(&mut self, field: F::Field, value: &str) -> Result<()> {
        self.form.set_value(field, value)
    }

    /// Replaces the form with a fetched record; on mismatch the form keeps its
    /// defaults and the error is shown instead.
    pub fn apply_prefill(&mut self, loaded: Result<LinkDetail>) {
        match loaded {
            Ok(detail) => match F::from_detail(&detail) {
                Some(form) => self.form = form,
                None => self.set_load_error(F::NOT_FOUND.to_string()),
            },
            Err(err) => {
                let msg = failure_message(&err, "Failed to load link.", "Failed to load link.");
                self.set_load_error(msg);
            }
        }
    }

    fn set_load_error(&mut self, msg: String) {
        self.state = SubmitState {
            error: Some(msg),
            success_url: None,
            is_submitting: false,
        };
        self.phase = SubmitPhase::Failed;
    }

    /// Validates and, when the form is clean, enters `Submitting`. Returns
    /// whether the caller should now send the request.
    pub fn begin_submit(&mut self) -> bool {
        if self.state.is_submitting {
            return false;
        }
        self.submit_attempted = true;
        self.notice = None;

        if let Some(first) = self.validation().first() {
            self.state = SubmitState {
                error: Some(first.to_string()),
                success_url: None,
                is_submitting: false,
            };
            self.phase = SubmitPhase::Invalid;
            return false;
        }

        self.state = SubmitState {
            error: None,
            success_url: None,
            is_submitting: true,
        };
        self.phase = SubmitPhase::Submitting;
        true
    }

    pub fn finish_submit(&mut self, result: Result<ShortUrlResponse>, clipboard: &mut dyn Clipboard) {
        if !self.state.is_submitting {
            return;
        }
        match result {
            Ok(resp) => {
                if let Err(err) = clipboard.write_text(&resp.short_url) {
                    self.notice = Some(format!("copy to clipboard failed: {:#}", err));
                }
                self.state = SubmitState {
                    error: None,
                    success_url: Some(resp.short_url),
                    is_submitting: false,
                };
                self.phase = SubmitPhase::Succeeded;
            }
            Err(err) => {
                self.state = SubmitState {
                    error: Some(failure_message(
                        &err,
                        self.mode.request_failure(),
                        UNEXPECTED_ERROR,
                    )),
                    success_url: None,
                    is_submitting: false,
                };
                self.phase = SubmitPhase::Failed;
            }
        }
    }

    /// Whole sequence in one call, for callers that need no redraw between
    /// the two halves.
    pub fn submit(&mut self, api: &dyn LinksApi, clipboard: &mut dyn Clipboard) -> SubmitPhase {
        if !self.begin_submit() {
            return self.phase;
        }
        let result = self.form.send(api, self.mode);
        self.finish_submit(result, clipboard);
        self.phase
    }

    /// Manual copy of the last short link. `Ok(false)` when there is none yet.
    pub fn copy_result(&self, clipboard: &mut dyn Clipboard) -> Result<bool> {
        let Some(url) = self.state.success_url.as_deref() else {
            return Ok(false);
        };
        clipboard.write_text(url)?;
        Ok(true)
    }
}

#[cfg(test)]
#[path = "../tests/forms/submit_tests.rs"]
mod tests;
