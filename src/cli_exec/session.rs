use linkgen::forms::LoginField;
use linkgen::screens::{LoginController, initial_screen};

use super::*;

pub(super) fn handle_status_command(session: &Session, json: bool) -> Result<()> {
    let logged_in = session.store.get_credential()?.is_some();
    let screen = initial_screen(&session.store)?;
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "logged_in": logged_in,
                "screen": screen.title(),
                "api_base_url": session.client.base_url(),
                "state_dir": session.store.root().display().to_string(),
            }))
            .context("serialize status json")?
        );
    } else {
        println!("session: {}", if logged_in { "logged in" } else { "logged out" });
        println!("screen: {}", screen.title());
        println!("api_base_url: {}", session.client.base_url());
        println!("state_dir: {}", session.store.root().display());
    }
    Ok(())
}

pub(super) fn handle_login_command(session: &Session, username: &str, password: &str) -> Result<()> {
    let mut ctl = LoginController::new();
    ctl.set_value(LoginField::Username, username)?;
    ctl.set_value(LoginField::Password, password)?;

    if ctl.submit(&session.client, &session.store).is_some() {
        println!("Logged in as {}", ctl.form().request().username);
        return Ok(());
    }

    let field_error = ctl.field_rows().into_iter().find_map(|row| row.error);
    match (field_error, ctl.error()) {
        (Some(msg), _) => anyhow::bail!(msg),
        (None, Some(msg)) => anyhow::bail!(msg.to_string()),
        (None, None) => anyhow::bail!("Login failed."),
    }
}

pub(super) fn handle_logout_command(session: &Session) -> Result<()> {
    linkgen::screens::logout(&session.store)?;
    println!("Logged out");
    Ok(())
}
