use reqwest::blocking::multipart::{Form, Part};

use super::*;

pub(super) fn pdf_form(payload: &PdfPayload) -> Result<Form> {
    let mut form = Form::new();
    if let Some(file) = &payload.file {
        let bytes = file.read_bytes()?;
        let part = Part::bytes(bytes)
            .file_name(file.name.clone())
            .mime_str(&file.content_type)
            .with_context(|| format!("content type {}", file.content_type))?;
        form = form.part("file", part);
    }
    if let Some(filename) = &payload.filename {
        form = form.text("filename", filename.clone());
    }
    Ok(form)
}

impl RemoteClient {
    pub(super) fn send_pdf(
        &self,
        method: reqwest::Method,
        path: &str,
        payload: &PdfPayload,
        label: &str,
    ) -> Result<ShortUrlResponse> {
        let form = pdf_form(payload)?;
        let resp = self
            .request(method, path)
            .multipart(form)
            .send()
            .with_context(|| label.to_string())?;
        let out: ShortUrlResponse = self
            .ensure_ok(resp, label)?
            .json()
            .with_context(|| format!("parse {} response", label))?;
        Ok(out)
    }
}
