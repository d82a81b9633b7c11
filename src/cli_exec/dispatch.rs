use super::config::handle_config_command;
use super::forms::{handle_add_command, handle_edit_command};
use super::links::handle_links_command;
use super::session::{handle_login_command, handle_logout_command, handle_status_command};
use super::*;

pub(super) fn handle_command(session: &Session, command: Commands) -> Result<()> {
    match command {
        Commands::Status(args) => handle_status_command(session, args.json)?,
        Commands::Login(args) => handle_login_command(session, &args.username, &args.password)?,
        Commands::Logout => handle_logout_command(session)?,
        Commands::Links { command } => {
            session.require_credential()?;
            handle_links_command(session, command)?
        }
        Commands::Add { command } => {
            session.require_credential()?;
            handle_add_command(session, command)?
        }
        Commands::Edit { command } => {
            session.require_credential()?;
            handle_edit_command(session, command)?
        }
        Commands::Config { command } => handle_config_command(session, command)?,
    }
    Ok(())
}
