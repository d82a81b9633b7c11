mod config;
mod links;

pub use self::config::{ClientConfig, DEFAULT_API_BASE_URL, SessionState, normalize_base_url};
pub use self::links::{
    ContactPayload, ContactRecord, LinkDetail, LinkKind, LinkRow, LoginRequest, LoginResponse,
    PdfFile, PdfPayload, PdfRecord, ShortUrlResponse, UrlPayload, UrlRecord,
};
