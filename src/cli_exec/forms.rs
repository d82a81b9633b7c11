use std::path::Path;

use linkgen::forms::{
    ContactField, ContactForm, FormController, LinkForm, PdfField, PdfForm, SubmitMode,
    SubmitPhase, UNEXPECTED_ERROR, UrlField, UrlForm,
};

use super::*;

pub(super) fn handle_add_command(session: &Session, command: AddCommands) -> Result<()> {
    match command {
        AddCommands::Contact(args) => run_form(
            session,
            FormController::new(ContactForm::default(), SubmitMode::Create),
            contact_values(args),
        ),
        AddCommands::Pdf { file } => run_form(
            session,
            FormController::new(PdfForm::for_create(), SubmitMode::Create),
            pdf_values(file.as_deref(), None),
        ),
        AddCommands::Url(args) => run_form(
            session,
            FormController::new(UrlForm::default(), SubmitMode::Create),
            url_values(args),
        ),
    }
}

pub(super) fn handle_edit_command(session: &Session, command: EditCommands) -> Result<()> {
    match command {
        EditCommands::Contact { id, args } => run_form(
            session,
            FormController::new(ContactForm::default(), SubmitMode::Edit(id)),
            contact_values(args),
        ),
        EditCommands::Pdf { id, file, filename } => run_form(
            session,
            FormController::new(PdfForm::for_edit(), SubmitMode::Edit(id)),
            pdf_values(file.as_deref(), filename),
        ),
        EditCommands::Url { id, args } => run_form(
            session,
            FormController::new(UrlForm::default(), SubmitMode::Edit(id)),
            url_values(args),
        ),
    }
}

/// Same sequence as the TUI: prefill (edit only), apply the given fields,
/// validate, send once.
fn run_form<F: LinkForm>(
    session: &Session,
    mut ctl: FormController<F>,
    values: Vec<(F::Field, String)>,
) -> Result<()> {
    if let SubmitMode::Edit(id) = ctl.mode() {
        ctl.apply_prefill(session.client.get_link(id));
        if let Some(err) = ctl.state().error.clone() {
            anyhow::bail!(err);
        }
    }
    for (field, value) in values {
        ctl.set_value(field, &value)?;
    }

    let mut clipboard = session.clipboard();
    match ctl.submit(&session.client, clipboard.as_mut()) {
        SubmitPhase::Succeeded => {
            if let Some(url) = ctl.state().success_url.as_deref() {
                println!("{}", url);
            }
            if let Some(notice) = ctl.notice() {
                eprintln!("note: {}", notice);
            }
            Ok(())
        }
        _ => anyhow::bail!(
            ctl.state()
                .error
                .clone()
                .unwrap_or_else(|| UNEXPECTED_ERROR.to_string())
        ),
    }
}

fn given<F>(pairs: Vec<(F, Option<String>)>) -> Vec<(F, String)> {
    pairs
        .into_iter()
        .filter_map(|(field, value)| value.map(|v| (field, v)))
        .collect()
}

fn contact_values(args: ContactArgs) -> Vec<(ContactField, String)> {
    given(vec![
        (ContactField::FirstName, args.first_name),
        (ContactField::LastName, args.last_name),
        (ContactField::Phone, args.phone),
        (ContactField::Email, args.email),
        (ContactField::Company, args.company),
        (ContactField::Title, args.title),
        (ContactField::Website, args.website),
        (ContactField::Notes, args.notes),
    ])
}

fn url_values(args: UrlArgs) -> Vec<(UrlField, String)> {
    given(vec![
        (UrlField::UrlName, args.name),
        (UrlField::Url, args.url),
    ])
}

fn pdf_values(file: Option<&Path>, filename: Option<String>) -> Vec<(PdfField, String)> {
    given(vec![
        (PdfField::FileName, filename),
        (PdfField::File, file.map(|p| p.display().to_string())),
    ])
}
