use crate::forms::failure_message;
use crate::model::{LinkKind, LinkRow};
use crate::remote::LinksApi;

use super::Screen;

pub const EMPTY_PLACEHOLDER: &str = "No links yet.";
const LOAD_FAILED: &str = "Failed to load links.";
const DELETE_FAILED: &str = "Failed to delete link.";
/// Confirmation shown before any delete request.
pub const DELETE_PROMPT: &str = "Delete this link?";

pub const COLUMNS: [&str; 13] = [
    "ID", "Type", "F. Name", "L. Name", "Phone", "Mobile", "Email", "Company", "Title", "Website",
    "PDF", "URL", "Actions",
];

pub const CREATE_MENU: [(&str, Screen); 3] = [
    ("Add Contact", Screen::Create(LinkKind::Contact)),
    ("Add PDF", Screen::Create(LinkKind::Pdf)),
    ("Add URL", Screen::Create(LinkKind::Url)),
];

/// What the table body shows. Exactly one of the three at a time.
#[derive(Debug, PartialEq, Eq)]
pub enum TableBody<'a> {
    Rows(&'a [LinkRow]),
    Placeholder(&'static str),
    Error(&'a str),
}

/// Data cells for one row, `-` where the backend sent nothing.
pub fn row_cells(row: &LinkRow) -> [String; 12] {
    let cell = |v: &Option<String>| v.clone().unwrap_or_else(|| "-".to_string());
    [
        row.id.to_string(),
        row.kind.clone(),
        cell(&row.first_name),
        cell(&row.last_name),
        cell(&row.phone),
        cell(&row.mobile),
        cell(&row.email),
        cell(&row.company),
        cell(&row.title),
        row.website
            .clone()
            .filter(|w| !w.is_empty())
            .unwrap_or_else(|| "-".to_string()),
        cell(&row.pdf_name),
        cell(&row.url_name),
    ]
}

#[derive(Debug, Default)]
pub struct DashboardController {
    rows: Vec<LinkRow>,
    load_error: Option<String>,
    action_error: Option<String>,
    pending_delete: Option<u64>,
    menu_open: bool,
}

impl DashboardController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetches the whole collection; no caching between visits.
    pub fn load(&mut self, api: &dyn LinksApi) {
        self.action_error = None;
        match api.list_links() {
            Ok(rows) => {
                self.rows = rows;
                self.load_error = None;
            }
            Err(err) => {
                self.rows.clear();
                self.load_error = Some(failure_message(&err, LOAD_FAILED, LOAD_FAILED));
            }
        }
    }

    pub fn rows(&self) -> &[LinkRow] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&LinkRow> {
        self.rows.get(index)
    }

    pub fn body(&self) -> TableBody<'_> {
        if let Some(err) = self.load_error.as_deref() {
            return TableBody::Error(err);
        }
        if self.rows.is_empty() {
            return TableBody::Placeholder(EMPTY_PLACEHOLDER);
        }
        TableBody::Rows(&self.rows)
    }

    /// Inline error from the last row action; the table stays as it was.
    pub fn action_error(&self) -> Option<&str> {
        self.action_error.as_deref()
    }

    pub fn edit_target(row: &LinkRow) -> Screen {
        Screen::Edit(row.link_kind(), row.id)
    }

    pub fn public_link(api: &dyn LinksApi, row: &LinkRow) -> String {
        api.public_link(&row.slug)
    }

    /// Asks for confirmation first; nothing is sent yet.
    pub fn request_delete(&mut self, id: u64) {
        self.pending_delete = Some(id);
    }

    pub fn pending_delete(&self) -> Option<u64> {
        self.pending_delete
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Sends the confirmed delete and re-fetches the collection on success.
    /// Returns whether a delete went through.
    pub fn confirm_delete(&mut self, api: &dyn LinksApi) -> bool {
        let Some(id) = self.pending_delete.take() else {
            return false;
        };
        match api.delete_link(id) {
            Ok(()) => {
                self.action_error = None;
                self.load(api);
                true
            }
            Err(err) => {
                self.action_error = Some(failure_message(&err, DELETE_FAILED, DELETE_FAILED));
                false
            }
        }
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }
}

#[cfg(test)]
#[path = "../tests/screens/dashboard_tests.rs"]
mod tests;
