pub mod clipboard;
pub mod forms;
pub mod model;
pub mod remote;
pub mod screens;
pub mod store;
pub mod tui;

mod tui_shell;

#[cfg(test)]
#[path = "tests/support/fake_api.rs"]
pub(crate) mod test_support;
