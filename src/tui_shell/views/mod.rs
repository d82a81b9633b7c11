mod dashboard;
mod editor;
mod fields;
mod login;

pub(in crate::tui_shell) use dashboard::DashboardView;
pub(in crate::tui_shell) use editor::EditorView;
pub(in crate::tui_shell) use login::LoginView;
