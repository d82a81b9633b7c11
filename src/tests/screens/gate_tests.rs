use super::*;

#[test]
fn credential_presence_selects_screen() {
    assert_eq!(screen_for_credential(Some("tok")), Screen::Dashboard);
    assert_eq!(screen_for_credential(Some("")), Screen::Login);
    assert_eq!(screen_for_credential(None), Screen::Login);
}

#[test]
fn logout_clears_credential() {
    let dir = tempfile::tempdir().unwrap();
    let store = LocalStore::open(dir.path()).unwrap();
    assert_eq!(initial_screen(&store).unwrap(), Screen::Login);

    store.set_credential("tok").unwrap();
    assert_eq!(initial_screen(&store).unwrap(), Screen::Dashboard);

    assert_eq!(logout(&store).unwrap(), Screen::Login);
    assert_eq!(initial_screen(&store).unwrap(), Screen::Login);
}
