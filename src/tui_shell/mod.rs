use anyhow::Result;

mod app;
mod input;
mod modal;
mod view;
mod views;

// Core TUI types/helpers for submodules via `super::...`.
use app::{Modal, ModalKind, fmt_since};
use view::{RenderCtx, View, ViewAction, render_view_chrome};

pub fn run_with_options(opts: crate::tui::TuiRunOptions) -> Result<()> {
    app::run(opts)
}
