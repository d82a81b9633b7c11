use crate::screens::{CREATE_MENU, DELETE_PROMPT, DashboardController};

use super::*;

impl App {
    pub(in crate::tui_shell) fn apply_action(&mut self, action: ViewAction) {
        match action {
            ViewAction::None => {}
            ViewAction::Quit => self.quit = true,
            ViewAction::Navigate(target) => self.navigate(target),
            ViewAction::Submit => self.start_submit(),
            ViewAction::CopyResult => self.copy_result(),
            ViewAction::Reload => self.reload_dashboard(),
            ViewAction::ConfirmDelete(id) => self.open_modal(
                "Delete",
                vec![
                    DELETE_PROMPT.to_string(),
                    String::new(),
                    format!("id: {}", id),
                    String::new(),
                    "y/Enter: delete   n/Esc: cancel".to_string(),
                ],
                ModalKind::ConfirmDelete { id },
            ),
            ViewAction::OpenLink(slug) => self.open_link(&slug),
            ViewAction::CreateMenu => self.open_modal(
                "Create",
                CREATE_MENU.iter().map(|(label, _)| label.to_string()).collect(),
                ModalKind::CreateMenu { selected: 0 },
            ),
            ViewAction::Logout => self.logout(),
        }
    }

    pub(in crate::tui_shell) fn confirm_delete(&mut self) {
        self.modal = None;
        let Some(v) = self.view.as_any_mut().downcast_mut::<DashboardView>() else {
            return;
        };
        let id = v.ctl.pending_delete();
        let deleted = v.ctl.confirm_delete(&self.client);
        v.clamp_selection();
        v.updated_at = now_ts();
        let err = v.ctl.action_error().map(str::to_string);

        match (deleted, id, err) {
            (true, Some(id), _) => self.push_output(vec![format!("deleted link {}", id)]),
            (_, _, Some(err)) => self.push_error(err),
            _ => {}
        }
    }

    fn open_link(&mut self, slug: &str) {
        let Some(row) = self
            .view_as::<DashboardView>()
            .and_then(|v| v.ctl.rows().iter().find(|r| r.slug == slug).cloned())
        else {
            return;
        };
        let link = DashboardController::public_link(&self.client, &row);
        let mut lines = vec![link.clone(), String::new()];
        match self.clipboard.write_text(&link) {
            Ok(()) => lines.push("copied to clipboard".to_string()),
            Err(err) => lines.push(format!("copy failed: {:#}", err)),
        }
        self.open_modal("Public link", lines, ModalKind::Viewer);
    }

    fn copy_result(&mut self) {
        let Some(v) = self.view.as_any().downcast_ref::<EditorView>() else {
            return;
        };
        match v.editor.copy_result(self.clipboard.as_mut()) {
            Ok(true) => self.push_output(vec!["copied short link".to_string()]),
            Ok(false) => {}
            Err(err) => self.push_error(format!("copy failed: {:#}", err)),
        }
    }
}
