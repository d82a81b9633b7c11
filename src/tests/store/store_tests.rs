use super::*;

#[test]
fn credential_round_trip_and_clear() {
    let dir = tempfile::tempdir().unwrap();
    let store = LocalStore::open(dir.path()).unwrap();

    assert_eq!(store.get_credential().unwrap(), None);
    store.set_credential("tok-1").unwrap();
    assert_eq!(store.get_credential().unwrap().as_deref(), Some("tok-1"));

    let reopened = LocalStore::open(dir.path()).unwrap();
    assert_eq!(reopened.get_credential().unwrap().as_deref(), Some("tok-1"));

    reopened.clear_credential().unwrap();
    assert_eq!(store.get_credential().unwrap(), None);
}

#[test]
fn state_file_uses_fixed_key() {
    let dir = tempfile::tempdir().unwrap();
    let store = LocalStore::open(dir.path()).unwrap();
    store.set_credential("abc").unwrap();

    let raw = std::fs::read_to_string(dir.path().join("state.json")).unwrap();
    let v: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(v["auth_token"], "abc");
}

#[test]
fn base_url_resolution_order() {
    let dir = tempfile::tempdir().unwrap();
    let store = LocalStore::open(dir.path()).unwrap();

    assert_eq!(
        store.resolve_base_url(None, None).unwrap(),
        DEFAULT_API_BASE_URL
    );

    store
        .write_config(&ClientConfig {
            version: 1,
            api_base_url: Some("http://cfg:9000/".to_string()),
        })
        .unwrap();
    assert_eq!(
        store.resolve_base_url(None, None).unwrap(),
        "http://cfg:9000"
    );
    assert_eq!(
        store.resolve_base_url(None, Some("http://env:1")).unwrap(),
        "http://env:1"
    );
    assert_eq!(
        store
            .resolve_base_url(Some("http://flag:2/"), Some("http://env:1"))
            .unwrap(),
        "http://flag:2"
    );
    assert_eq!(
        store.resolve_base_url(Some("  "), None).unwrap(),
        "http://cfg:9000"
    );
}

#[test]
fn unsupported_state_version_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("state.json"),
        br#"{"version": 2, "auth_token": "x"}"#,
    )
    .unwrap();
    let store = LocalStore::open(dir.path()).unwrap();
    assert!(store.get_credential().is_err());
}
