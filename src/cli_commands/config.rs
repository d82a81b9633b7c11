use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum ConfigCommands {
    /// Show the stored and effective configuration
    Show {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Store settings in config.json
    Set {
        #[arg(long, value_name = "URL")]
        api_base_url: String,
    },
}
