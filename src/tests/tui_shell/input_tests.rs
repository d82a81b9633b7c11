use super::*;

#[test]
fn edits_respect_multibyte_chars() {
    let mut input = Input::default();
    for c in "añb".chars() {
        input.insert_char(c);
    }
    assert_eq!(input.buf, "añb");

    input.move_left();
    input.backspace();
    assert_eq!(input.buf, "ab");
    assert_eq!(input.cursor, 1);

    input.move_right();
    input.insert_char('é');
    assert_eq!(input.buf, "abé");
}

#[test]
fn home_end_and_delete() {
    let mut input = Input::default();
    input.set("hello".to_string());
    input.home();
    input.delete();
    assert_eq!(input.buf, "ello");
    input.end();
    input.delete();
    assert_eq!(input.buf, "ello");
    input.backspace();
    assert_eq!(input.buf, "ell");
}

#[test]
fn backspace_at_start_is_a_no_op() {
    let mut input = Input::default();
    input.backspace();
    input.move_left();
    assert_eq!(input.buf, "");
    assert_eq!(input.cursor, 0);
}
