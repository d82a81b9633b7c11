use linkgen::model::{DEFAULT_API_BASE_URL, normalize_base_url};

use super::*;

pub(super) fn handle_config_command(session: &Session, command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Show { json } => {
            let cfg = session.store.read_config()?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&serde_json::json!({
                        "stored": cfg,
                        "effective_api_base_url": session.client.base_url(),
                        "default_api_base_url": DEFAULT_API_BASE_URL,
                    }))
                    .context("serialize config json")?
                );
            } else {
                println!(
                    "api_base_url: {}",
                    cfg.api_base_url.as_deref().unwrap_or("(default)")
                );
                println!("effective: {}", session.client.base_url());
            }
        }
        ConfigCommands::Set { api_base_url } => {
            let url = normalize_base_url(&api_base_url);
            if !url.starts_with("http://") && !url.starts_with("https://") {
                anyhow::bail!("api base url must start with http:// or https://");
            }
            let mut cfg = session.store.read_config()?;
            cfg.api_base_url = Some(url.clone());
            session.store.write_config(&cfg)?;
            println!("api_base_url: {}", url);
        }
    }
    Ok(())
}
