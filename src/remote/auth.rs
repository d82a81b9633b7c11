use super::*;

impl RemoteClient {
    pub fn login(&self, req: &LoginRequest) -> Result<LoginResponse> {
        let resp = self
            .client
            .post(self.url("/auth/login"))
            .json(req)
            .send()
            .context("login")?;
        let out: LoginResponse = self
            .ensure_ok(resp, "login")?
            .json()
            .context("parse login response")?;
        Ok(out)
    }
}
