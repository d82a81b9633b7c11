use super::*;

/// A backend call deferred until the in-flight state has been drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::tui_shell) enum PendingRequest {
    Login,
    Submit,
}

impl App {
    pub(in crate::tui_shell) fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Validates and flips the form into its submitting state; the request
    /// itself runs on the next loop turn.
    pub(in crate::tui_shell) fn start_submit(&mut self) {
        if self.pending.is_some() {
            return;
        }
        if let Some(v) = self.view_as_mut::<LoginView>() {
            if v.ctl.begin_submit() {
                self.pending = Some(PendingRequest::Login);
            }
            return;
        }

        let Some(v) = self.view_as_mut::<EditorView>() else {
            return;
        };
        if v.editor.begin_submit() {
            self.pending = Some(PendingRequest::Submit);
            return;
        }
        let phase = v.editor.phase();
        let error = v.editor.state().error.clone();
        self.trace_submit(phase, error.as_deref(), None);
    }

    pub(in crate::tui_shell) fn run_pending(&mut self) {
        match self.pending.take() {
            Some(PendingRequest::Login) => self.run_login(),
            Some(PendingRequest::Submit) => self.run_submit(),
            None => {}
        }
    }

    fn run_login(&mut self) {
        let Some(v) = self.view.as_any_mut().downcast_mut::<LoginView>() else {
            return;
        };
        let req = v.ctl.form().request();
        let result = self.client.login(&req);
        match v.ctl.finish_submit(result, &self.store) {
            Some(next) => {
                let token = self.store.get_credential().ok().flatten();
                self.client.set_token(token);
                self.push_output(vec![format!("logged in as {}", req.username)]);
                self.navigate(next);
            }
            None => {
                let msg = v.ctl.error().unwrap_or("Login failed.").to_string();
                self.push_error(msg);
            }
        }
    }

    fn run_submit(&mut self) {
        let Some(v) = self.view.as_any_mut().downcast_mut::<EditorView>() else {
            return;
        };
        let result = v.editor.send(&self.client);
        v.editor.finish_submit(result, self.clipboard.as_mut());

        let phase = v.editor.phase();
        let state = v.editor.state().clone();
        let notice = v.editor.notice().map(str::to_string);
        self.trace_submit(phase, state.error.as_deref(), state.success_url.as_deref());

        if let Some(url) = state.success_url {
            let mut lines = vec![format!("short link: {}", url)];
            lines.extend(notice);
            self.push_output(lines);
        } else if let Some(err) = state.error {
            self.push_error(err);
        }
    }
}
