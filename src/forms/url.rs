use anyhow::Result;

use crate::model::{LinkDetail, LinkKind, ShortUrlResponse, UrlPayload};
use crate::remote::LinksApi;

use super::fields::{has_http_scheme, is_blank, optional};
use super::{FieldValues, FormField, LinkForm, SubmitMode, ValidationResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UrlField {
    /// Sent to the backend as `title`.
    UrlName,
    Url,
}

impl FormField for UrlField {
    fn name(self) -> &'static str {
        match self {
            UrlField::UrlName => "urlName",
            UrlField::Url => "url",
        }
    }

    fn label(self) -> &'static str {
        match self {
            UrlField::UrlName => "URL Name",
            UrlField::Url => "Enter URL",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UrlForm {
    pub url: String,
    pub title: String,
    pub url_name: String,
}

impl UrlForm {
    /// The visible "URL Name" input wins over a title carried from prefill.
    pub fn payload(&self) -> UrlPayload {
        UrlPayload {
            url: self.url.trim().to_string(),
            title: optional(&self.url_name).or_else(|| optional(&self.title)),
        }
    }
}

impl FieldValues for UrlForm {
    type Field = UrlField;

    fn fields(&self) -> Vec<UrlField> {
        vec![UrlField::UrlName, UrlField::Url]
    }

    fn value(&self, field: UrlField) -> String {
        match field {
            UrlField::UrlName => self.url_name.clone(),
            UrlField::Url => self.url.clone(),
        }
    }

    fn set_value(&mut self, field: UrlField, value: &str) -> Result<()> {
        match field {
            UrlField::UrlName => self.url_name = value.to_string(),
            UrlField::Url => self.url = value.to_string(),
        }
        Ok(())
    }
}

impl LinkForm for UrlForm {
    const KIND: LinkKind = LinkKind::Url;
    const NOT_FOUND: &'static str = "URL link not found.";

    fn validate(&self) -> ValidationResult<UrlField> {
        let mut errors = ValidationResult::default();
        if is_blank(&self.url) {
            errors.push(UrlField::Url, "URL is required.");
        } else if !has_http_scheme(self.url.trim()) {
            errors.push(UrlField::Url, "URL must start with http:// or https://.");
        }
        errors
    }

    fn send(&self, api: &dyn LinksApi, mode: SubmitMode) -> Result<ShortUrlResponse> {
        let payload = self.payload();
        match mode {
            SubmitMode::Create => api.create_url(&payload),
            SubmitMode::Edit(id) => api.update_url(id, &payload),
        }
    }

    fn from_detail(detail: &LinkDetail) -> Option<Self> {
        if detail.kind != LinkKind::Url.tag() {
            return None;
        }
        let u = detail.url.as_ref()?;
        let title = u.title.clone().unwrap_or_default();
        Some(Self {
            url: u.url.clone(),
            url_name: title.clone(),
            title,
        })
    }
}

#[cfg(test)]
#[path = "../tests/forms/url_tests.rs"]
mod tests;
