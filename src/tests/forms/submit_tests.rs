use super::*;
use crate::clipboard::MemoryClipboard;
use crate::forms::{ContactForm, UrlField, UrlForm};
use crate::test_support::FakeApi;

fn valid_url() -> UrlForm {
    UrlForm {
        url: "https://example.com".to_string(),
        ..UrlForm::default()
    }
}

#[test]
fn invalid_form_never_issues_a_request() {
    let api = FakeApi::default();
    let mut clip = MemoryClipboard::default();
    let mut ctl = FormController::new(ContactForm::default(), SubmitMode::Create);

    assert_eq!(ctl.submit(&api, &mut clip), SubmitPhase::Invalid);
    assert!(api.calls().is_empty());
    assert!(clip.writes.is_empty());
    assert_eq!(ctl.state().error.as_deref(), Some("First name is required."));
    assert_eq!(ctl.state().success_url, None);
    assert!(!ctl.state().is_submitting);
}

#[test]
fn field_errors_hidden_until_first_attempt() {
    let api = FakeApi::default();
    let mut clip = MemoryClipboard::default();
    let mut ctl = FormController::new(UrlForm::default(), SubmitMode::Create);
    assert_eq!(ctl.visible_error(UrlField::Url), None);
    assert!(!ctl.validation().is_empty());

    ctl.submit(&api, &mut clip);
    assert!(ctl.submit_attempted());
    assert_eq!(ctl.visible_error(UrlField::Url), Some("URL is required."));

    ctl.set_value(UrlField::Url, "https://ok.example").unwrap();
    assert_eq!(ctl.visible_error(UrlField::Url), None);
    assert!(ctl.submit_attempted());
}

#[test]
fn success_sets_url_and_copies_once() {
    let api = FakeApi::default();
    let mut clip = MemoryClipboard::default();
    let mut ctl = FormController::new(valid_url(), SubmitMode::Create);

    assert_eq!(ctl.submit(&api, &mut clip), SubmitPhase::Succeeded);
    assert_eq!(api.calls(), vec!["POST /links/url".to_string()]);
    assert_eq!(
        ctl.state().success_url.as_deref(),
        Some("http://short.test/u1")
    );
    assert_eq!(ctl.state().error, None);
    assert_eq!(clip.writes, vec!["http://short.test/u1".to_string()]);

    assert!(ctl.copy_result(&mut clip).unwrap());
    assert_eq!(clip.writes.len(), 2);
    assert_eq!(clip.writes[1], "http://short.test/u1");
}

#[test]
fn second_submit_while_in_flight_is_refused() {
    let api = FakeApi::default();
    let mut clip = MemoryClipboard::default();
    let mut ctl = FormController::new(valid_url(), SubmitMode::Create);

    assert!(ctl.begin_submit());
    assert!(ctl.state().is_submitting);
    assert!(!ctl.can_submit());
    assert_eq!(ctl.state().error, None);
    assert_eq!(ctl.state().success_url, None);
    assert_eq!(ctl.phase(), SubmitPhase::Submitting);

    assert!(!ctl.begin_submit());
    assert_eq!(ctl.submit(&api, &mut clip), SubmitPhase::Submitting);
    assert!(api.calls().is_empty());

    let result = ctl.form().send(&api, ctl.mode());
    ctl.finish_submit(result, &mut clip);
    assert!(!ctl.state().is_submitting);
    assert!(ctl.can_submit());
    assert_eq!(api.calls().len(), 1);
}

#[test]
fn rejected_request_uses_mode_message() {
    let api = FakeApi::default();
    api.reject_with(500);
    let mut clip = MemoryClipboard::default();

    let mut create = FormController::new(valid_url(), SubmitMode::Create);
    assert_eq!(create.submit(&api, &mut clip), SubmitPhase::Failed);
    assert_eq!(create.state().error.as_deref(), Some("Failed to create link."));

    let mut edit = FormController::new(valid_url(), SubmitMode::Edit(3));
    edit.submit(&api, &mut clip);
    assert_eq!(edit.state().error.as_deref(), Some("Failed to update link."));
    assert_eq!(edit.state().success_url, None);
    assert!(clip.writes.is_empty());
}

#[test]
fn transport_failure_surfaces_its_message() {
    let api = FakeApi::default();
    api.fail_transport("connection refused");
    let mut clip = MemoryClipboard::default();
    let mut ctl = FormController::new(valid_url(), SubmitMode::Create);
    ctl.submit(&api, &mut clip);
    assert_eq!(ctl.state().error.as_deref(), Some("connection refused"));
}

#[test]
fn clipboard_failure_is_not_fatal() {
    let api = FakeApi::default();
    let mut clip = MemoryClipboard {
        fail: true,
        ..MemoryClipboard::default()
    };
    let mut ctl = FormController::new(valid_url(), SubmitMode::Create);
    assert_eq!(ctl.submit(&api, &mut clip), SubmitPhase::Succeeded);
    assert!(ctl.state().success_url.is_some());
    assert!(ctl.notice().is_some());
}

#[test]
fn resubmit_after_failure_resets_state() {
    let api = FakeApi::default();
    api.reject_with(400);
    let mut clip = MemoryClipboard::default();
    let mut ctl = FormController::new(valid_url(), SubmitMode::Edit(5));
    ctl.submit(&api, &mut clip);
    assert!(ctl.state().error.is_some());

    api.reject_status.set(None);
    assert_eq!(ctl.submit(&api, &mut clip), SubmitPhase::Succeeded);
    assert_eq!(ctl.state().error, None);
    assert_eq!(
        api.calls(),
        vec!["PUT /links/5/url".to_string(), "PUT /links/5/url".to_string()]
    );
}

#[test]
fn copy_without_result_is_a_no_op() {
    let mut clip = MemoryClipboard::default();
    let ctl = FormController::new(valid_url(), SubmitMode::Create);
    assert!(!ctl.copy_result(&mut clip).unwrap());
    assert!(clip.writes.is_empty());
}

#[test]
fn prefill_mismatch_keeps_defaults_and_reports() {
    let api = FakeApi::default();
    *api.detail.borrow_mut() = Some(LinkDetail {
        id: 1,
        kind: "PDF".to_string(),
        slug: "x".to_string(),
        contact: None,
        pdf: None,
        url: None,
    });
    let mut ctl = FormController::new(UrlForm::default(), SubmitMode::Edit(1));
    ctl.apply_prefill(api.get_link(1));
    assert_eq!(ctl.state().error.as_deref(), Some("URL link not found."));
    assert_eq!(ctl.form(), &UrlForm::default());
}

#[test]
fn prefill_request_failure_reports_load_error() {
    let api = FakeApi::default();
    let mut ctl = FormController::new(UrlForm::default(), SubmitMode::Edit(1));
    ctl.apply_prefill(api.get_link(1));
    assert_eq!(ctl.state().error.as_deref(), Some("Failed to load link."));
}

#[test]
fn failure_message_falls_back_when_empty() {
    let err = anyhow::anyhow!("");
    assert_eq!(failure_message(&err, "x", UNEXPECTED_ERROR), UNEXPECTED_ERROR);
}

#[test]
fn clipboard_notice_does_not_outlive_the_next_attempt() {
    let api = FakeApi::default();
    let mut clip = MemoryClipboard {
        fail: true,
        ..MemoryClipboard::default()
    };
    let mut ctl = FormController::new(valid_url(), SubmitMode::Create);
    assert_eq!(ctl.submit(&api, &mut clip), SubmitPhase::Succeeded);
    assert!(ctl.notice().is_some());

    ctl.set_value(UrlField::Url, "").expect("clear url");
    assert_eq!(ctl.submit(&api, &mut clip), SubmitPhase::Invalid);
    assert_eq!(ctl.state().error.as_deref(), Some("URL is required."));
    assert_eq!(ctl.notice(), None);
}
