use std::path::PathBuf;

use clap::{Args, Subcommand};

#[derive(Args)]
pub(crate) struct ContactArgs {
    #[arg(long)]
    pub(crate) first_name: Option<String>,
    #[arg(long)]
    pub(crate) last_name: Option<String>,
    #[arg(long)]
    pub(crate) phone: Option<String>,
    #[arg(long)]
    pub(crate) email: Option<String>,
    #[arg(long)]
    pub(crate) company: Option<String>,
    #[arg(long)]
    pub(crate) title: Option<String>,
    #[arg(long)]
    pub(crate) website: Option<String>,
    #[arg(long)]
    pub(crate) notes: Option<String>,
}

#[derive(Args)]
pub(crate) struct UrlArgs {
    #[arg(long)]
    pub(crate) url: Option<String>,
    /// Display name (sent as the title)
    #[arg(long)]
    pub(crate) name: Option<String>,
}

#[derive(Subcommand)]
pub(crate) enum AddCommands {
    /// Create a contact card link
    Contact(ContactArgs),

    /// Upload a PDF and create a link to it
    Pdf {
        #[arg(long, value_name = "PATH")]
        file: Option<PathBuf>,
    },

    /// Create a link to a URL
    Url(UrlArgs),
}

#[derive(Subcommand)]
pub(crate) enum EditCommands {
    /// Edit a contact card link
    Contact {
        id: u64,
        #[command(flatten)]
        args: ContactArgs,
    },

    /// Replace the file and/or rename a PDF link
    Pdf {
        id: u64,
        #[arg(long, value_name = "PATH")]
        file: Option<PathBuf>,
        #[arg(long)]
        filename: Option<String>,
    },

    /// Edit a URL link
    Url {
        id: u64,
        #[command(flatten)]
        args: UrlArgs,
    },
}
