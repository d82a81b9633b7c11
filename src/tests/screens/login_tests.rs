use super::*;
use crate::test_support::FakeApi;

fn store() -> (tempfile::TempDir, LocalStore) {
    let dir = tempfile::tempdir().unwrap();
    let store = LocalStore::open(dir.path()).unwrap();
    (dir, store)
}

#[test]
fn blank_fields_block_login() {
    let (_dir, store) = store();
    let api = FakeApi::default();
    let mut ctl = LoginController::new();

    assert_eq!(ctl.field_rows()[0].error, None);
    assert_eq!(ctl.submit(&api, &store), None);
    assert!(api.calls().is_empty());

    let rows = ctl.field_rows();
    assert_eq!(rows[0].error, Some("Username is required."));
    assert_eq!(rows[1].error, Some("Password is required."));
    assert!(rows[1].secret);
}

#[test]
fn success_stores_credential_and_navigates() {
    let (_dir, store) = store();
    let api = FakeApi::default();
    let mut ctl = LoginController::new();
    ctl.set_value(LoginField::Username, " ann ").unwrap();
    ctl.set_value(LoginField::Password, " pw ").unwrap();

    assert_eq!(ctl.submit(&api, &store), Some(Screen::Dashboard));
    assert_eq!(store.get_credential().unwrap().as_deref(), Some("token-for-ann"));

    let sent = api.last_login.borrow().clone().unwrap();
    assert_eq!(sent.username, "ann");
    assert_eq!(sent.password, "pw");
}

#[test]
fn rejected_login_reports_invalid_credentials() {
    let (_dir, store) = store();
    let api = FakeApi::default();
    api.reject_with(401);
    let mut ctl = LoginController::new();
    ctl.set_field(0, "ann").unwrap();
    ctl.set_field(1, "bad").unwrap();

    assert_eq!(ctl.submit(&api, &store), None);
    assert_eq!(ctl.error(), Some("Invalid credentials."));
    assert!(!ctl.is_submitting());
    assert_eq!(store.get_credential().unwrap(), None);
}

#[test]
fn in_flight_login_is_not_repeated() {
    let mut ctl = LoginController::new();
    ctl.set_field(0, "ann").unwrap();
    ctl.set_field(1, "pw").unwrap();
    assert!(ctl.begin_submit());
    assert_eq!(ctl.submit_label(), "LOGGING IN");
    assert!(!ctl.begin_submit());
}
