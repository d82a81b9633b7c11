#[derive(Clone, Debug, PartialEq, Eq)]
pub(in crate::tui_shell) enum ModalKind {
    Viewer,
    ConfirmDelete { id: u64 },
    CreateMenu { selected: usize },
}

#[derive(Debug)]
pub(in crate::tui_shell) struct Modal {
    pub(in crate::tui_shell) title: String,
    pub(in crate::tui_shell) lines: Vec<String>,
    pub(in crate::tui_shell) scroll: usize,
    pub(in crate::tui_shell) kind: ModalKind,
}
