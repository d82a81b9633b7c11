use super::*;

pub(in crate::tui_shell::app) fn handle_key(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit = true;
        return;
    }
    // Controls are disabled while a request is in flight.
    if app.has_pending() {
        return;
    }

    app.trace_key_action(key);

    if app.modal.is_some() {
        modal::handle_modal_key(app, key);
        return;
    }

    let action = app.view.handle_key(key);
    app.apply_action(action);
}
