use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum LinksCommands {
    /// List all links
    List {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one link
    Show {
        id: u64,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a link (asks for confirmation)
    Delete {
        id: u64,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Print the public link and copy it
    Open { id: u64 },
}
