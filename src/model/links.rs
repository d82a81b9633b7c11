use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LinkKind {
    Contact,
    Pdf,
    Url,
}

impl LinkKind {
    /// Tag used by the backend in the `type` field.
    pub fn tag(self) -> &'static str {
        match self {
            LinkKind::Contact => "Contact",
            LinkKind::Pdf => "PDF",
            LinkKind::Url => "URL",
        }
    }

    /// Path segment of the kind-specific endpoints.
    pub fn segment(self) -> &'static str {
        match self {
            LinkKind::Contact => "contact",
            LinkKind::Pdf => "pdf",
            LinkKind::Url => "url",
        }
    }

    /// Rows tagged with anything other than Contact or PDF are edited as URLs.
    pub fn from_row_tag(tag: &str) -> Self {
        match tag {
            "Contact" => LinkKind::Contact,
            "PDF" => LinkKind::Pdf,
            _ => LinkKind::Url,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRow {
    pub id: u64,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub mobile: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub pdf_name: Option<String>,
    #[serde(default)]
    pub url_name: Option<String>,
    pub slug: String,
}

impl LinkRow {
    pub fn link_kind(&self) -> LinkKind {
        LinkKind::from_row_tag(&self.kind)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PdfRecord {
    pub filename: String,
    #[serde(default)]
    pub file_path: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlRecord {
    pub url: String,
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkDetail {
    pub id: u64,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub contact: Option<ContactRecord>,
    #[serde(default)]
    pub pdf: Option<PdfRecord>,
    #[serde(default)]
    pub url: Option<UrlRecord>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortUrlResponse {
    pub short_url: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Optional fields serialize as `null` when empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactPayload {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub company: Option<String>,
    pub title: Option<String>,
    pub website: Option<String>,
    pub notes: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct UrlPayload {
    pub url: String,
    pub title: Option<String>,
}

/// Multipart body for the PDF endpoints. Create always carries a file; edit
/// may carry either part, or neither.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PdfPayload {
    pub file: Option<PdfFile>,
    pub filename: Option<String>,
}

/// A file picked for upload, with the content type declared at selection time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PdfFile {
    pub path: PathBuf,
    pub name: String,
    pub content_type: String,
}

impl PdfFile {
    pub fn select(path: &Path) -> Result<Self> {
        let meta = std::fs::metadata(path)
            .with_context(|| format!("stat selected file {}", path.display()))?;
        if !meta.is_file() {
            anyhow::bail!("{} is not a file", path.display());
        }
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self {
            path: path.to_path_buf(),
            content_type: declared_content_type(&name).to_string(),
            name,
        })
    }

    pub fn read_bytes(&self) -> Result<Vec<u8>> {
        std::fs::read(&self.path).with_context(|| format!("read {}", self.path.display()))
    }
}

pub(crate) fn declared_content_type(name: &str) -> &'static str {
    let ext = Path::new(name)
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "pdf" => "application/pdf",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "txt" => "text/plain",
        "html" | "htm" => "text/html",
        "json" => "application/json",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
#[path = "../tests/model/links_tests.rs"]
mod tests;
