use super::*;
use crate::clipboard::MemoryClipboard;
use crate::model::ContactRecord;
use crate::test_support::FakeApi;

fn contact_detail(id: u64) -> LinkDetail {
    LinkDetail {
        id,
        kind: "Contact".to_string(),
        slug: "c".to_string(),
        contact: Some(ContactRecord {
            first_name: "Ann".to_string(),
            last_name: "Lee".to_string(),
            phone: "555".to_string(),
            email: "a@b.com".to_string(),
            company: Some("Acme".to_string()),
            title: None,
            website: None,
            notes: None,
        }),
        pdf: None,
        url: None,
    }
}

#[test]
fn create_mount_does_not_fetch() {
    let api = FakeApi::default();
    let editor = mount_editor(LinkKind::Url, SubmitMode::Create, &api);
    assert!(api.calls().is_empty());
    assert_eq!(editor.kind(), LinkKind::Url);
    assert_eq!(
        editor
            .field_rows()
            .iter()
            .map(|r| r.label)
            .collect::<Vec<_>>(),
        vec!["URL Name", "Enter URL"]
    );
}

#[test]
fn edit_mount_prefills_from_record() {
    let api = FakeApi::default();
    *api.detail.borrow_mut() = Some(contact_detail(4));
    let editor = mount_editor(LinkKind::Contact, SubmitMode::Edit(4), &api);
    assert_eq!(api.calls(), vec!["GET /links/4".to_string()]);

    let rows = editor.field_rows();
    assert_eq!(rows[0].value, "Ann");
    assert_eq!(rows[4].value, "Acme");
    assert_eq!(editor.state().error, None);
}

#[test]
fn edit_mount_with_wrong_kind_shows_error_and_empty_form() {
    let api = FakeApi::default();
    *api.detail.borrow_mut() = Some(contact_detail(4));
    let editor = mount_editor(LinkKind::Pdf, SubmitMode::Edit(4), &api);
    assert_eq!(editor.state().error.as_deref(), Some("PDF link not found."));
    assert!(editor.field_rows().iter().all(|r| r.value.is_empty()));
}

#[test]
fn contact_example_blocks_on_last_name() {
    let api = FakeApi::default();
    let mut clip = MemoryClipboard::default();
    let mut editor = new_editor(LinkKind::Contact, SubmitMode::Create);
    editor.set_field(0, "Ann").unwrap();
    editor.set_field(1, "").unwrap();
    editor.set_field(2, "555").unwrap();
    editor.set_field(3, "a@b.com").unwrap();

    assert_eq!(editor.submit(&api, &mut clip), SubmitPhase::Invalid);
    assert!(api.calls().is_empty());
    let errors: Vec<_> = editor
        .field_rows()
        .into_iter()
        .filter_map(|r| r.error.map(|e| (r.name, e)))
        .collect();
    assert_eq!(errors, vec![("lastName", "Last name is required.")]);
}

#[test]
fn edit_submit_puts_to_record() {
    let api = FakeApi::default();
    *api.detail.borrow_mut() = Some(contact_detail(4));
    let mut clip = MemoryClipboard::default();
    let mut editor = mount_editor(LinkKind::Contact, SubmitMode::Edit(4), &api);

    assert_eq!(editor.submit_label(), "SAVE");
    assert_eq!(editor.submit(&api, &mut clip), SubmitPhase::Succeeded);
    assert_eq!(api.calls().last().map(String::as_str), Some("PUT /links/4/contact"));
    assert_eq!(editor.success_title(), "Link Successfully Updated");
    assert_eq!(clip.writes, vec!["http://short.test/c4".to_string()]);

    let sent = api.last_contact.borrow().clone().unwrap();
    assert_eq!(sent.company.as_deref(), Some("Acme"));
    assert_eq!(sent.title, None);
}

#[test]
fn pdf_create_without_file_is_invalid() {
    let api = FakeApi::default();
    let mut clip = MemoryClipboard::default();
    let mut editor = new_editor(LinkKind::Pdf, SubmitMode::Create);
    assert_eq!(editor.submit(&api, &mut clip), SubmitPhase::Invalid);
    assert_eq!(editor.state().error.as_deref(), Some("PDF file is required."));
    assert_eq!(editor.field_rows()[0].error, Some("PDF file is required."));
}

#[test]
fn out_of_range_field_is_an_error() {
    let mut editor = new_editor(LinkKind::Url, SubmitMode::Create);
    assert!(editor.set_field(9, "x").is_err());
}
