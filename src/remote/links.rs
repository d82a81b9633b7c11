use super::*;

impl RemoteClient {
    pub fn list_links(&self) -> Result<Vec<LinkRow>> {
        let resp = self
            .request(reqwest::Method::GET, "/links")
            .send()
            .context("list links")?;
        let rows: Vec<LinkRow> = self
            .ensure_ok(resp, "list links")?
            .json()
            .context("parse links")?;
        Ok(rows)
    }

    pub fn get_link(&self, id: u64) -> Result<LinkDetail> {
        let resp = self
            .request(reqwest::Method::GET, &format!("/links/{}", id))
            .send()
            .context("get link")?;
        let detail: LinkDetail = self
            .ensure_ok(resp, "get link")?
            .json()
            .context("parse link")?;
        Ok(detail)
    }

    pub fn delete_link(&self, id: u64) -> Result<()> {
        let resp = self
            .request(reqwest::Method::DELETE, &format!("/links/{}", id))
            .send()
            .context("delete link")?;
        self.ensure_ok(resp, "delete link")?;
        Ok(())
    }
}
