use super::*;

fn file(name: &str, content_type: &str) -> PdfFile {
    PdfFile {
        path: std::path::PathBuf::from(name),
        name: name.to_string(),
        content_type: content_type.to_string(),
    }
}

#[test]
fn create_requires_a_file() {
    let form = PdfForm::for_create();
    let errors = form.validate();
    assert_eq!(errors.iter().count(), 1);
    assert_eq!(errors.get(PdfField::File), Some("PDF file is required."));
}

#[test]
fn edit_allows_no_file() {
    assert!(PdfForm::for_edit().validate().is_empty());
}

#[test]
fn declared_type_must_be_exactly_pdf() {
    for mut form in [PdfForm::for_create(), PdfForm::for_edit()] {
        form.file = Some(file("notes.txt", "text/plain"));
        assert_eq!(form.validate().get(PdfField::File), Some("File must be a PDF."));

        form.file = Some(file("doc.pdf", "application/pdf"));
        assert!(form.validate().is_empty());
    }
}

#[test]
fn create_payload_omits_filename() {
    let mut form = PdfForm::for_create();
    form.file_name = "ignored".to_string();
    form.file = Some(file("doc.pdf", "application/pdf"));
    let p = form.payload();
    assert!(p.file.is_some());
    assert_eq!(p.filename, None);
    assert_eq!(form.fields(), vec![PdfField::File]);
}

#[test]
fn edit_payload_carries_only_present_parts() {
    let mut form = PdfForm::for_edit();
    assert_eq!(
        form.payload(),
        PdfPayload {
            file: None,
            filename: None
        }
    );

    form.file_name = " renamed.pdf ".to_string();
    let p = form.payload();
    assert_eq!(p.file, None);
    assert_eq!(p.filename.as_deref(), Some("renamed.pdf"));
}

#[test]
fn selecting_a_file_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("doc.pdf");
    std::fs::write(&path, b"%PDF").unwrap();

    let mut form = PdfForm::for_create();
    form.set_value(PdfField::File, path.to_str().unwrap()).unwrap();
    assert_eq!(form.file.as_ref().map(|f| f.name.as_str()), Some("doc.pdf"));

    assert!(form
        .set_value(PdfField::File, dir.path().join("missing.pdf").to_str().unwrap())
        .is_err());
    assert!(form.file.is_some());

    form.set_value(PdfField::File, "").unwrap();
    assert!(form.file.is_none());
}

#[test]
fn prefill_takes_stored_filename() {
    let detail = LinkDetail {
        id: 2,
        kind: "PDF".to_string(),
        slug: "p".to_string(),
        contact: None,
        pdf: Some(crate::model::PdfRecord {
            filename: "brochure.pdf".to_string(),
            file_path: "/store/brochure.pdf".to_string(),
        }),
        url: None,
    };
    let form = PdfForm::from_detail(&detail).unwrap();
    assert_eq!(form.file_name, "brochure.pdf");
    assert!(!form.requires_file());
}

#[test]
fn failed_select_clears_the_previous_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let good = dir.path().join("a.pdf");
    std::fs::write(&good, b"%PDF-1.4").expect("write pdf");

    let mut form = PdfForm::for_create();
    form.select_file(&good.display().to_string()).expect("select a.pdf");
    assert!(form.file.is_some());

    let missing = dir.path().join("missing.pdf");
    assert!(form.select_file(&missing.display().to_string()).is_err());
    assert_eq!(form.file, None);
    assert_eq!(form.validate().get(PdfField::File), Some("PDF file is required."));
}
