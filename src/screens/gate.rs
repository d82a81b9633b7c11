use anyhow::Result;

use crate::store::LocalStore;

use super::Screen;

pub fn screen_for_credential(credential: Option<&str>) -> Screen {
    match credential {
        Some(token) if !token.is_empty() => Screen::Dashboard,
        _ => Screen::Login,
    }
}

pub fn initial_screen(store: &LocalStore) -> Result<Screen> {
    let token = store.get_credential()?;
    Ok(screen_for_credential(token.as_deref()))
}

/// Local only; the backend is not told.
pub fn logout(store: &LocalStore) -> Result<Screen> {
    store.clear_credential()?;
    Ok(Screen::Login)
}

#[cfg(test)]
#[path = "../tests/screens/gate_tests.rs"]
mod tests;
