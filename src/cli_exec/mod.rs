use anyhow::{Context, Result};

use linkgen::screens::DashboardController;

use crate::{
    AddCommands, Commands, ConfigCommands, ContactArgs, EditCommands, LinksCommands, Session,
    UrlArgs,
};

mod config;
mod dispatch;
mod forms;
mod links;
mod session;

pub(super) fn handle_command(session: &Session, command: Commands) -> Result<()> {
    dispatch::handle_command(session, command)
}
