use std::path::PathBuf;

use anyhow::Result;

#[derive(Clone, Debug)]
pub struct TuiRunOptions {
    pub state_dir: PathBuf,
    pub api_base_url: String,
    /// Append a JSONL event trace to this file.
    pub trace: Option<PathBuf>,
}

pub fn run_with_options(opts: TuiRunOptions) -> Result<()> {
    crate::tui_shell::run_with_options(opts)
}
