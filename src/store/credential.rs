use anyhow::Result;

use super::LocalStore;

impl LocalStore {
    pub fn get_credential(&self) -> Result<Option<String>> {
        let st = self.read_state()?;
        Ok(st.auth_token.filter(|t| !t.is_empty()))
    }

    pub fn set_credential(&self, token: &str) -> Result<()> {
        let mut st = self.read_state()?;
        st.auth_token = Some(token.to_string());
        self.write_state(&st)
    }

    pub fn clear_credential(&self) -> Result<()> {
        let mut st = self.read_state()?;
        st.auth_token = None;
        self.write_state(&st)
    }
}
