use crate::forms::SubmitMode;
use crate::screens::{DashboardController, mount_editor, new_editor};

use super::*;

impl App {
    /// Swaps the current view, sending unauthenticated visits to Login.
    pub(in crate::tui_shell) fn navigate(&mut self, target: Screen) {
        let target = if target.requires_credential() {
            match self.store.get_credential() {
                Ok(Some(_)) => target,
                Ok(None) => Screen::Login,
                Err(err) => {
                    self.push_error(format!("read session: {:#}", err));
                    Screen::Login
                }
            }
        } else {
            target
        };

        self.modal = None;
        self.view = match target {
            Screen::Login => Box::new(LoginView::new(now_ts())),
            Screen::Dashboard => {
                let mut ctl = DashboardController::new();
                ctl.load(&self.client);
                Box::new(DashboardView::new(ctl, now_ts()))
            }
            Screen::Create(kind) => Box::new(EditorView::new(
                target,
                new_editor(kind, SubmitMode::Create),
                now_ts(),
            )),
            Screen::Edit(kind, id) => Box::new(EditorView::new(
                target,
                mount_editor(kind, SubmitMode::Edit(id), &self.client),
                now_ts(),
            )),
        };
    }

    pub(in crate::tui_shell) fn reload_dashboard(&mut self) {
        let Some(v) = self.view.as_any_mut().downcast_mut::<DashboardView>() else {
            return;
        };
        v.ctl.load(&self.client);
        v.clamp_selection();
        v.updated_at = now_ts();
    }

    pub(in crate::tui_shell) fn logout(&mut self) {
        match crate::screens::logout(&self.store) {
            Ok(next) => {
                self.client.set_token(None);
                self.push_output(vec!["logged out".to_string()]);
                self.navigate(next);
            }
            Err(err) => self.push_error(format!("logout: {:#}", err)),
        }
    }
}
