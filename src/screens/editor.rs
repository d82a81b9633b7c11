use anyhow::Result;

use crate::clipboard::Clipboard;
use crate::forms::{
    ContactForm, FieldValues, FormController, FormField, LinkForm, PdfForm, SubmitMode,
    SubmitPhase, SubmitState, UrlForm,
};
use crate::model::{LinkDetail, LinkKind, ShortUrlResponse};
use crate::remote::LinksApi;

/// One input as a renderer sees it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldRow {
    pub label: &'static str,
    pub name: &'static str,
    pub value: String,
    /// Only set once a submit has been attempted.
    pub error: Option<&'static str>,
    pub secret: bool,
    pub multiline: bool,
    pub picks_file: bool,
}

/// Kind-erased create/edit screen, so shells can hold any of the six.
pub trait FormScreen {
    fn kind(&self) -> LinkKind;
    fn mode(&self) -> SubmitMode;

    fn field_rows(&self) -> Vec<FieldRow>;
    fn set_field(&mut self, index: usize, value: &str) -> Result<()>;

    fn prefill(&mut self, loaded: Result<LinkDetail>);

    fn begin_submit(&mut self) -> bool;
    fn send(&self, api: &dyn LinksApi) -> Result<ShortUrlResponse>;
    fn finish_submit(&mut self, result: Result<ShortUrlResponse>, clipboard: &mut dyn Clipboard);
    fn submit(&mut self, api: &dyn LinksApi, clipboard: &mut dyn Clipboard) -> SubmitPhase;

    fn phase(&self) -> SubmitPhase;
    fn state(&self) -> &SubmitState;
    fn notice(&self) -> Option<&str>;
    fn copy_result(&self, clipboard: &mut dyn Clipboard) -> Result<bool>;

    fn submit_label(&self) -> &'static str {
        if self.state().is_submitting { "Saving..." } else { "SAVE" }
    }

    fn success_title(&self) -> &'static str {
        match self.mode() {
            SubmitMode::Create => "Link Successfully Created",
            SubmitMode::Edit(_) => "Link Successfully Updated",
        }
    }
}

impl<F: LinkForm> FormScreen for FormController<F> {
    fn kind(&self) -> LinkKind {
        F::KIND
    }

    fn mode(&self) -> SubmitMode {
        FormController::mode(self)
    }

    fn field_rows(&self) -> Vec<FieldRow> {
        let form = self.form();
        form.fields()
            .into_iter()
            .map(|f| FieldRow {
                label: f.label(),
                name: f.name(),
                value: form.value(f),
                error: self.visible_error(f),
                secret: f.secret(),
                multiline: f.multiline(),
                picks_file: f.picks_file(),
            })
            .collect()
    }

    fn set_field(&mut self, index: usize, value: &str) -> Result<()> {
        let fields = self.form().fields();
        let Some(field) = fields.get(index).copied() else {
            anyhow::bail!("no field at index {}", index);
        };
        self.set_value(field, value)
    }

    fn prefill(&mut self, loaded: Result<LinkDetail>) {
        self.apply_prefill(loaded);
    }

    fn begin_submit(&mut self) -> bool {
        FormController::begin_submit(self)
    }

    fn send(&self, api: &dyn LinksApi) -> Result<ShortUrlResponse> {
        self.form().send(api, FormController::mode(self))
    }

    fn finish_submit(&mut self, result: Result<ShortUrlResponse>, clipboard: &mut dyn Clipboard) {
        FormController::finish_submit(self, result, clipboard);
    }

    fn submit(&mut self, api: &dyn LinksApi, clipboard: &mut dyn Clipboard) -> SubmitPhase {
        FormController::submit(self, api, clipboard)
    }

    fn phase(&self) -> SubmitPhase {
        FormController::phase(self)
    }

    fn state(&self) -> &SubmitState {
        FormController::state(self)
    }

    fn notice(&self) -> Option<&str> {
        FormController::notice(self)
    }

    fn copy_result(&self, clipboard: &mut dyn Clipboard) -> Result<bool> {
        FormController::copy_result(self, clipboard)
    }
}

/// Empty form for the kind and mode, without touching the backend.
pub fn new_editor(kind: LinkKind, mode: SubmitMode) -> Box<dyn FormScreen> {
    match kind {
        LinkKind::Contact => Box::new(FormController::new(ContactForm::default(), mode)),
        LinkKind::Pdf => {
            let form = match mode {
                SubmitMode::Create => PdfForm::for_create(),
                SubmitMode::Edit(_) => PdfForm::for_edit(),
            };
            Box::new(FormController::new(form, mode))
        }
        LinkKind::Url => Box::new(FormController::new(UrlForm::default(), mode)),
    }
}

/// Mounts a screen; edit mode fetches the record once to prefill.
pub fn mount_editor(kind: LinkKind, mode: SubmitMode, api: &dyn LinksApi) -> Box<dyn FormScreen> {
    let mut editor = new_editor(kind, mode);
    if let SubmitMode::Edit(id) = mode {
        editor.prefill(api.get_link(id));
    }
    editor
}

#[cfg(test)]
#[path = "../tests/screens/editor_tests.rs"]
mod tests;
