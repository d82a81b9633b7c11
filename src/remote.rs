use anyhow::{Context, Result};

use crate::model::{
    ContactPayload, LinkDetail, LinkRow, LoginRequest, LoginResponse, PdfPayload,
    ShortUrlResponse, UrlPayload,
};

mod http_client;
pub use self::http_client::{HttpStatusError, is_http_status_error};

mod auth;
mod links;
mod uploads;

/// The backend surface every screen talks to. `RemoteClient` is the HTTP
/// implementation; tests substitute in-memory fakes.
pub trait LinksApi {
    fn login(&self, req: &LoginRequest) -> Result<LoginResponse>;

    fn list_links(&self) -> Result<Vec<LinkRow>>;
    fn get_link(&self, id: u64) -> Result<LinkDetail>;
    fn delete_link(&self, id: u64) -> Result<()>;

    fn create_contact(&self, payload: &ContactPayload) -> Result<ShortUrlResponse>;
    fn update_contact(&self, id: u64, payload: &ContactPayload) -> Result<ShortUrlResponse>;

    fn create_pdf(&self, payload: &PdfPayload) -> Result<ShortUrlResponse>;
    fn update_pdf(&self, id: u64, payload: &PdfPayload) -> Result<ShortUrlResponse>;

    fn create_url(&self, payload: &UrlPayload) -> Result<ShortUrlResponse>;
    fn update_url(&self, id: u64, payload: &UrlPayload) -> Result<ShortUrlResponse>;

    /// Public address of a short link.
    fn public_link(&self, slug: &str) -> String;
}

pub struct RemoteClient {
    base_url: String,
    token: Option<String>,
    client: reqwest::blocking::Client,
}

impl RemoteClient {
    pub fn new(base_url: &str, token: Option<String>) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent("linkgen")
            .build()
            .context("build reqwest client")?;
        Ok(Self {
            base_url: crate::model::normalize_base_url(base_url),
            token,
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }
}

impl LinksApi for RemoteClient {
    fn login(&self, req: &LoginRequest) -> Result<LoginResponse> {
        RemoteClient::login(self, req)
    }

    fn list_links(&self) -> Result<Vec<LinkRow>> {
        RemoteClient::list_links(self)
    }

    fn get_link(&self, id: u64) -> Result<LinkDetail> {
        RemoteClient::get_link(self, id)
    }

    fn delete_link(&self, id: u64) -> Result<()> {
        RemoteClient::delete_link(self, id)
    }

    fn create_contact(&self, payload: &ContactPayload) -> Result<ShortUrlResponse> {
        self.send_json(reqwest::Method::POST, "/links/contact", payload, "create contact")
    }

    fn update_contact(&self, id: u64, payload: &ContactPayload) -> Result<ShortUrlResponse> {
        self.send_json(
            reqwest::Method::PUT,
            &format!("/links/{}/contact", id),
            payload,
            "update contact",
        )
    }

    fn create_pdf(&self, payload: &PdfPayload) -> Result<ShortUrlResponse> {
        self.send_pdf(reqwest::Method::POST, "/links/pdf", payload, "create pdf")
    }

    fn update_pdf(&self, id: u64, payload: &PdfPayload) -> Result<ShortUrlResponse> {
        self.send_pdf(
            reqwest::Method::PUT,
            &format!("/links/{}/pdf", id),
            payload,
            "update pdf",
        )
    }

    fn create_url(&self, payload: &UrlPayload) -> Result<ShortUrlResponse> {
        self.send_json(reqwest::Method::POST, "/links/url", payload, "create url")
    }

    fn update_url(&self, id: u64, payload: &UrlPayload) -> Result<ShortUrlResponse> {
        self.send_json(
            reqwest::Method::PUT,
            &format!("/links/{}/url", id),
            payload,
            "update url",
        )
    }

    fn public_link(&self, slug: &str) -> String {
        self.url(&format!("/{}", slug))
    }
}
