use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::*;
use crate::forms::SubmitMode;
use crate::model::LinkKind;
use crate::screens::new_editor;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn type_str(cursor: &mut FormCursor, target: &mut dyn FieldTarget, s: &str) {
    for c in s.chars() {
        cursor.handle_key(key(KeyCode::Char(c)), target);
    }
}

#[test]
fn typing_writes_through_to_the_focused_field() {
    let mut login = LoginController::new();
    let mut cursor = FormCursor::default();
    cursor.sync(&login);

    type_str(&mut cursor, &mut login, "ann");
    assert_eq!(login.field_rows()[0].value, "ann");

    cursor.handle_key(key(KeyCode::Tab), &mut login);
    type_str(&mut cursor, &mut login, "pw");
    assert_eq!(login.field_rows()[1].value, "pw");
    assert_eq!(cursor.input.buf, "pw");

    cursor.handle_key(key(KeyCode::Up), &mut login);
    assert_eq!(cursor.focus, 0);
    assert_eq!(cursor.input.buf, "ann");
}

#[test]
fn enter_on_button_and_ctrl_s_submit() {
    let mut login = LoginController::new();
    let mut cursor = FormCursor::default();
    cursor.sync(&login);

    assert_eq!(
        cursor.handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL), &mut login),
        CursorOutcome::Submit
    );

    cursor.handle_key(key(KeyCode::Down), &mut login);
    cursor.handle_key(key(KeyCode::Down), &mut login);
    assert!(cursor.on_button(&login));
    assert_eq!(cursor.handle_key(key(KeyCode::Enter), &mut login), CursorOutcome::Submit);
    assert_eq!(cursor.handle_key(key(KeyCode::Char('q')), &mut login), CursorOutcome::Unhandled);
}

#[test]
fn file_picker_commits_on_enter_and_reports_bad_paths() {
    let mut editor = new_editor(LinkKind::Pdf, SubmitMode::Create);
    let mut cursor = FormCursor::default();
    cursor.sync(&editor);

    type_str(&mut cursor, &mut editor, "/definitely/not/here.pdf");
    assert_eq!(editor.field_rows()[0].value, "");

    cursor.handle_key(key(KeyCode::Enter), &mut editor);
    assert!(cursor.note.is_some());
    assert_eq!(cursor.focus, 0);

    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("menu.pdf");
    std::fs::write(&path, b"%PDF-1.4").expect("write pdf");
    cursor.input.set(path.display().to_string());
    cursor.handle_key(key(KeyCode::Enter), &mut editor);
    assert!(cursor.note.is_none());
    assert_eq!(cursor.focus, 1);
    assert!(editor.field_rows()[0].value.ends_with("menu.pdf"));
}

#[test]
fn secret_fields_are_masked_and_errors_rendered() {
    let mut login = LoginController::new();
    login.set_field(1, "hunter2").expect("set");
    login.begin_submit();

    let cursor = FormCursor::default();
    let text: Vec<String> = field_lines(&login.field_rows(), &cursor, "LOGIN", false)
        .iter()
        .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
        .collect();
    let all = text.join("\n");
    assert!(all.contains("*******"));
    assert!(!all.contains("hunter2"));
    assert!(all.contains("Username is required."));
    assert!(all.contains("[ LOGIN ]"));
}

#[test]
fn failed_repick_drops_the_old_file_and_blocks_ctrl_s() {
    let mut editor = new_editor(LinkKind::Pdf, SubmitMode::Create);
    let mut cursor = FormCursor::default();
    cursor.sync(&editor);

    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("a.pdf");
    std::fs::write(&path, b"%PDF-1.4").expect("write pdf");
    cursor.input.set(path.display().to_string());
    cursor.handle_key(key(KeyCode::Enter), &mut editor);
    assert!(editor.field_rows()[0].value.ends_with("a.pdf"));

    cursor.handle_key(key(KeyCode::Up), &mut editor);
    assert_eq!(cursor.focus, 0);
    cursor.input.set(dir.path().join("missing.pdf").display().to_string());

    let ctrl_s = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL);
    assert_eq!(cursor.handle_key(ctrl_s, &mut editor), CursorOutcome::Handled);
    assert!(cursor.note.is_some());
    assert_eq!(editor.field_rows()[0].value, "");

    assert!(!editor.begin_submit());
    assert_eq!(editor.state().error.as_deref(), Some("PDF file is required."));
}
