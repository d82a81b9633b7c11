use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use linkgen::clipboard::{Clipboard, NoClipboard, SystemClipboard};
use linkgen::remote::RemoteClient;
use linkgen::store::LocalStore;

use crate::Commands;

const API_BASE_URL_ENV: &str = "LINKGEN_API_BASE_URL";

#[derive(Parser)]
#[command(name = "linkgen")]
#[command(about = "Short-link generator client", long_about = None)]
pub(crate) struct Cli {
    /// State directory (defaults to $LINKGEN_HOME, else ~/.linkgen)
    #[arg(long, value_name = "DIR", global = true)]
    state_dir: Option<PathBuf>,

    /// Backend base URL (overrides LINKGEN_API_BASE_URL and config.json)
    #[arg(long, value_name = "URL")]
    api_base_url: Option<String>,

    /// Do not copy short links to the clipboard
    #[arg(long, global = true)]
    no_copy: bool,

    /// Append a JSONL event trace (TUI only)
    #[arg(long, value_name = "PATH")]
    trace: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

pub(crate) fn run() -> Result<()> {
    let cli = Cli::parse();

    let state_dir = match cli.state_dir {
        Some(dir) => dir,
        None => LocalStore::default_root()?,
    };
    let store = LocalStore::open(&state_dir)?;
    let env_url = std::env::var(API_BASE_URL_ENV).ok();
    let base_url = store.resolve_base_url(cli.api_base_url.as_deref(), env_url.as_deref())?;

    match cli.command {
        None => {
            linkgen::tui::run_with_options(linkgen::tui::TuiRunOptions {
                state_dir,
                api_base_url: base_url,
                trace: cli.trace,
            })?;
        }
        Some(command) => {
            if cli.trace.is_some() {
                anyhow::bail!("`--trace` is only supported when running the TUI (no subcommand)");
            }
            let token = store.get_credential()?;
            let client = RemoteClient::new(&base_url, token)?;
            let session = Session {
                store,
                client,
                no_copy: cli.no_copy,
            };
            crate::cli_exec::handle_command(&session, command)?
        }
    }

    Ok(())
}

/// Everything a subcommand needs: local state plus a client carrying the
/// stored credential.
pub(crate) struct Session {
    pub(crate) store: LocalStore,
    pub(crate) client: RemoteClient,
    no_copy: bool,
}

impl Session {
    pub(crate) fn clipboard(&self) -> Box<dyn Clipboard> {
        if self.no_copy {
            Box::new(NoClipboard)
        } else {
            Box::new(SystemClipboard::default())
        }
    }

    pub(crate) fn copies(&self) -> bool {
        !self.no_copy
    }

    pub(crate) fn require_credential(&self) -> Result<()> {
        self.store
            .get_credential()?
            .map(|_| ())
            .context("not logged in (run `linkgen login --username ... --password ...`)")
    }
}
