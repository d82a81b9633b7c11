use anyhow::Result;

use crate::forms::{FieldValues, FormField, LoginField, LoginForm, failure_message};
use crate::model::LoginResponse;
use crate::remote::LinksApi;
use crate::store::LocalStore;

use super::{FieldRow, Screen};

const INVALID_CREDENTIALS: &str = "Invalid credentials.";
const LOGIN_FAILED: &str = "Login failed.";

#[derive(Debug, Default)]
pub struct LoginController {
    form: LoginForm,
    submit_attempted: bool,
    error: Option<String>,
    is_submitting: bool,
}

impl LoginController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &LoginForm {
        &self.form
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting { "LOGGING IN" } else { "LOGIN" }
    }

    pub fn set_value(&mut self, field: LoginField, value: &str) -> Result<()> {
        self.form.set_value(field, value)
    }

    pub fn field_rows(&self) -> Vec<FieldRow> {
        let errors = self.form.validate();
        self.form
            .fields()
            .into_iter()
            .map(|f| FieldRow {
                label: f.label(),
                name: f.name(),
                value: self.form.value(f),
                error: if self.submit_attempted { errors.get(f) } else { None },
                secret: f.secret(),
                multiline: f.multiline(),
                picks_file: f.picks_file(),
            })
            .collect()
    }

    pub fn set_field(&mut self, index: usize, value: &str) -> Result<()> {
        let fields = self.form.fields();
        let Some(field) = fields.get(index).copied() else {
            anyhow::bail!("no field at index {}", index);
        };
        self.set_value(field, value)
    }

    /// Login shows field errors inline but leaves the shared error line alone
    /// when validation fails.
    pub fn begin_submit(&mut self) -> bool {
        if self.is_submitting {
            return false;
        }
        self.submit_attempted = true;
        if !self.form.validate().is_empty() {
            return false;
        }
        self.error = None;
        self.is_submitting = true;
        true
    }

    /// Stores the credential on success and returns where to go next.
    pub fn finish_submit(
        &mut self,
        result: Result<LoginResponse>,
        store: &LocalStore,
    ) -> Option<Screen> {
        if !self.is_submitting {
            return None;
        }
        self.is_submitting = false;
        let stored = result.and_then(|resp| store.set_credential(&resp.token));
        match stored {
            Ok(()) => Some(Screen::Dashboard),
            Err(err) => {
                self.error = Some(failure_message(&err, INVALID_CREDENTIALS, LOGIN_FAILED));
                None
            }
        }
    }

    pub fn submit(&mut self, api: &dyn LinksApi, store: &LocalStore) -> Option<Screen> {
        if !self.begin_submit() {
            return None;
        }
        let result = api.login(&self.form.request());
        self.finish_submit(result, store)
    }
}

#[cfg(test)]
#[path = "../tests/screens/login_tests.rs"]
mod tests;
