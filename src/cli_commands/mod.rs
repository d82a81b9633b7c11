use clap::Subcommand;

pub(crate) mod config;
pub(crate) mod forms;
pub(crate) mod links;
pub(crate) mod session;

pub(crate) use self::config::ConfigCommands;
pub(crate) use self::forms::{AddCommands, ContactArgs, EditCommands, UrlArgs};
pub(crate) use self::links::LinksCommands;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Show whether a session is stored and which screen the TUI opens on
    Status(session::StatusArgs),

    /// Log in and store the returned credential
    Login(session::LoginArgs),

    /// Log out (clear the stored credential)
    Logout,

    /// List, inspect and delete links
    Links {
        #[command(subcommand)]
        command: LinksCommands,
    },

    /// Create a contact, PDF or URL link
    Add {
        #[command(subcommand)]
        command: AddCommands,
    },

    /// Edit an existing link; omitted fields keep their current values
    Edit {
        #[command(subcommand)]
        command: EditCommands,
    },

    /// Show or change client configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}
