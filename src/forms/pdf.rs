use std::path::Path;

use anyhow::Result;

use crate::model::{LinkDetail, LinkKind, PdfFile, PdfPayload, ShortUrlResponse};
use crate::remote::LinksApi;

use super::fields::optional;
use super::{FieldValues, FormField, LinkForm, SubmitMode, ValidationResult};

const PDF_CONTENT_TYPE: &str = "application/pdf";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PdfField {
    FileName,
    File,
}

impl FormField for PdfField {
    fn name(self) -> &'static str {
        match self {
            PdfField::FileName => "fileName",
            PdfField::File => "file",
        }
    }

    fn label(self) -> &'static str {
        match self {
            PdfField::FileName => "File Name",
            PdfField::File => "Upload File",
        }
    }

    fn picks_file(self) -> bool {
        self == PdfField::File
    }
}

/// Create mode requires a file; edit mode treats it as optional and may
/// rename the stored file instead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PdfForm {
    pub file: Option<PdfFile>,
    pub file_name: String,
    require_file: bool,
}

impl Default for PdfForm {
    fn default() -> Self {
        Self::for_create()
    }
}

impl PdfForm {
    pub fn for_create() -> Self {
        Self {
            file: None,
            file_name: String::new(),
            require_file: true,
        }
    }

    pub fn for_edit() -> Self {
        Self {
            file: None,
            file_name: String::new(),
            require_file: false,
        }
    }

    pub fn requires_file(&self) -> bool {
        self.require_file
    }

    /// Picks a file from disk. An empty path or a failed pick clears the
    /// selection.
    pub fn select_file(&mut self, path: &str) -> Result<()> {
        self.file = None;
        let path = path.trim();
        if path.is_empty() {
            return Ok(());
        }
        self.file = Some(PdfFile::select(Path::new(path))?);
        Ok(())
    }

    pub fn payload(&self) -> PdfPayload {
        if self.require_file {
            PdfPayload {
                file: self.file.clone(),
                filename: None,
            }
        } else {
            PdfPayload {
                file: self.file.clone(),
                filename: optional(&self.file_name),
            }
        }
    }
}

impl FieldValues for PdfForm {
    type Field = PdfField;

    fn fields(&self) -> Vec<PdfField> {
        if self.require_file {
            vec![PdfField::File]
        } else {
            vec![PdfField::FileName, PdfField::File]
        }
    }

    fn value(&self, field: PdfField) -> String {
        match field {
            PdfField::FileName => self.file_name.clone(),
            PdfField::File => self
                .file
                .as_ref()
                .map(|f| f.path.display().to_string())
                .unwrap_or_default(),
        }
    }

    fn set_value(&mut self, field: PdfField, value: &str) -> Result<()> {
        match field {
            PdfField::FileName => {
                self.file_name = value.to_string();
                Ok(())
            }
            PdfField::File => self.select_file(value),
        }
    }
}

impl LinkForm for PdfForm {
    const KIND: LinkKind = LinkKind::Pdf;
    const NOT_FOUND: &'static str = "PDF link not found.";

    fn validate(&self) -> ValidationResult<PdfField> {
        let mut errors = ValidationResult::default();
        match &self.file {
            None if self.require_file => {
                errors.push(PdfField::File, "PDF file is required.");
            }
            Some(file) if file.content_type != PDF_CONTENT_TYPE => {
                errors.push(PdfField::File, "File must be a PDF.");
            }
            _ => {}
        }
        errors
    }

    fn send(&self, api: &dyn LinksApi, mode: SubmitMode) -> Result<ShortUrlResponse> {
        let payload = self.payload();
        match mode {
            SubmitMode::Create => api.create_pdf(&payload),
            SubmitMode::Edit(id) => api.update_pdf(id, &payload),
        }
    }

    fn from_detail(detail: &LinkDetail) -> Option<Self> {
        if detail.kind != LinkKind::Pdf.tag() {
            return None;
        }
        let pdf = detail.pdf.as_ref()?;
        let mut form = Self::for_edit();
        form.file_name = pdf.filename.clone();
        Some(form)
    }
}

#[cfg(test)]
#[path = "../tests/forms/pdf_tests.rs"]
mod tests;
