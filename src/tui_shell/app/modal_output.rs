use super::*;

impl App {
    fn push_entry(&mut self, kind: EntryKind, lines: Vec<String>) {
        self.last_result = Some(ScrollEntry {
            ts: now_ts(),
            kind,
            lines,
        });
    }

    pub(in crate::tui_shell) fn push_output(&mut self, lines: Vec<String>) {
        self.push_entry(EntryKind::Output, lines);
    }

    pub(in crate::tui_shell) fn push_error(&mut self, msg: String) {
        self.trace_error(&msg);
        self.push_entry(EntryKind::Error, vec![msg]);
    }

    pub(in crate::tui_shell) fn open_modal(&mut self, title: &str, lines: Vec<String>, kind: ModalKind) {
        self.modal = Some(Modal {
            title: title.to_string(),
            lines,
            scroll: 0,
            kind,
        });
    }

    pub(in crate::tui_shell) fn close_modal(&mut self) {
        self.modal = None;
        if let Some(v) = self.view_as_mut::<DashboardView>() {
            v.ctl.close_menu();
            v.ctl.cancel_delete();
        }
    }
}
