mod cli_commands;
mod cli_exec;
mod cli_runtime;

pub(crate) use cli_commands::{
    AddCommands, Commands, ConfigCommands, ContactArgs, EditCommands, LinksCommands, UrlArgs,
};
pub(crate) use cli_runtime::Session;

fn main() {
    if let Err(err) = cli_runtime::run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}
