use std::fmt;

use super::*;

/// Raised for any non-success response so callers can tell a rejected
/// request apart from a transport failure.
#[derive(Debug)]
pub struct HttpStatusError {
    pub status: reqwest::StatusCode,
    pub label: String,
}

impl fmt::Display for HttpStatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} failed with status {}", self.label, self.status)
    }
}

impl std::error::Error for HttpStatusError {}

pub fn is_http_status_error(err: &anyhow::Error) -> bool {
    err.chain().any(|e| e.is::<HttpStatusError>())
}

impl RemoteClient {
    pub(super) fn ensure_ok(
        &self,
        resp: reqwest::blocking::Response,
        label: &str,
    ) -> Result<reqwest::blocking::Response> {
        let status = resp.status();
        if !status.is_success() {
            return Err(HttpStatusError {
                status,
                label: label.to_string(),
            }
            .into());
        }
        Ok(resp)
    }

    pub(super) fn request(
        &self,
        method: reqwest::Method,
        path: &str,
    ) -> reqwest::blocking::RequestBuilder {
        let req = self.client.request(method, self.url(path));
        match &self.token {
            Some(token) => req.header(reqwest::header::AUTHORIZATION, format!("Bearer {}", token)),
            None => req,
        }
    }

    pub(super) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(super) fn send_json<T: serde::Serialize>(
        &self,
        method: reqwest::Method,
        path: &str,
        body: &T,
        label: &str,
    ) -> Result<ShortUrlResponse> {
        let resp = self
            .request(method, path)
            .json(body)
            .send()
            .with_context(|| label.to_string())?;
        let out: ShortUrlResponse = self
            .ensure_ok(resp, label)?
            .json()
            .with_context(|| format!("parse {} response", label))?;
        Ok(out)
    }
}
