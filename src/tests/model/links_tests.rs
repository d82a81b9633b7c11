use super::*;

#[test]
fn row_tag_selects_edit_kind() {
    assert_eq!(LinkKind::from_row_tag("Contact"), LinkKind::Contact);
    assert_eq!(LinkKind::from_row_tag("PDF"), LinkKind::Pdf);
    assert_eq!(LinkKind::from_row_tag("URL"), LinkKind::Url);
    assert_eq!(LinkKind::from_row_tag("something-else"), LinkKind::Url);
}

#[test]
fn row_parses_with_missing_optionals() {
    let row: LinkRow = serde_json::from_value(serde_json::json!({
        "id": 3,
        "type": "URL",
        "url_name": "docs",
        "slug": "abc123"
    }))
    .unwrap();
    assert_eq!(row.id, 3);
    assert_eq!(row.link_kind(), LinkKind::Url);
    assert_eq!(row.url_name.as_deref(), Some("docs"));
    assert!(row.first_name.is_none());
}

#[test]
fn contact_payload_sends_null_for_empty_optionals() {
    let payload = ContactPayload {
        first_name: "Ann".to_string(),
        last_name: "Lee".to_string(),
        phone: "555".to_string(),
        email: "a@b.com".to_string(),
        company: None,
        title: Some("CTO".to_string()),
        website: None,
        notes: None,
    };
    let v = serde_json::to_value(&payload).unwrap();
    assert_eq!(v["company"], serde_json::Value::Null);
    assert_eq!(v["title"], "CTO");
    assert_eq!(v["notes"], serde_json::Value::Null);
}

#[test]
fn declared_content_type_follows_extension() {
    assert_eq!(declared_content_type("report.pdf"), "application/pdf");
    assert_eq!(declared_content_type("REPORT.PDF"), "application/pdf");
    assert_eq!(declared_content_type("photo.png"), "image/png");
    assert_eq!(declared_content_type("noext"), "application/octet-stream");
}

#[test]
fn select_rejects_directories() {
    let dir = tempfile::tempdir().unwrap();
    assert!(PdfFile::select(dir.path()).is_err());

    let path = dir.path().join("doc.pdf");
    std::fs::write(&path, b"%PDF-1.4").unwrap();
    let file = PdfFile::select(&path).unwrap();
    assert_eq!(file.name, "doc.pdf");
    assert_eq!(file.content_type, "application/pdf");
    assert_eq!(file.read_bytes().unwrap(), b"%PDF-1.4");
}
