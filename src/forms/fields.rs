use std::fmt;
use std::sync::LazyLock;

use anyhow::Result;
use regex::Regex;

pub trait FormField: Copy + Eq + fmt::Debug + 'static {
    /// Stable field name, as used in form state.
    fn name(self) -> &'static str;
    /// Placeholder shown next to the input.
    fn label(self) -> &'static str;

    fn secret(self) -> bool {
        false
    }

    fn multiline(self) -> bool {
        false
    }

    /// Value is a path that is resolved to a file when committed.
    fn picks_file(self) -> bool {
        false
    }
}

/// Field-by-field read/write access to a form's state.
pub trait FieldValues {
    type Field: FormField;

    /// Editable fields in display order.
    fn fields(&self) -> Vec<Self::Field>;
    fn value(&self, field: Self::Field) -> String;
    fn set_value(&mut self, field: Self::Field, value: &str) -> Result<()>;
}

/// Field errors in field enumeration order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationResult<F> {
    errors: Vec<(F, &'static str)>,
}

impl<F: FormField> Default for ValidationResult<F> {
    fn default() -> Self {
        Self { errors: Vec::new() }
    }
}

impl<F: FormField> ValidationResult<F> {
    pub(super) fn push(&mut self, field: F, message: &'static str) {
        self.errors.push((field, message));
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn get(&self, field: F) -> Option<&'static str> {
        self.errors
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, msg)| *msg)
    }

    pub fn first(&self) -> Option<&'static str> {
        self.errors.first().map(|(_, msg)| *msg)
    }

    pub fn iter(&self) -> impl Iterator<Item = (F, &'static str)> + '_ {
        self.errors.iter().copied()
    }
}

pub(super) fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

static HTTP_SCHEME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^https?://").expect("valid scheme pattern"));

pub(super) fn has_http_scheme(s: &str) -> bool {
    HTTP_SCHEME_REGEX.is_match(s)
}

pub(super) fn optional(s: &str) -> Option<String> {
    let s = s.trim();
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}
