//! Transport abstraction over the portal's HTTP endpoints.

use async_trait::async_trait;

use crate::error::Result;

/// Request operations used by the download pipeline.
///
/// [`Session`](crate::api::Session) is the network implementation; tests
/// substitute a scripted portal.
#[async_trait]
pub trait Transport: Send + Sync {
    /// GET a URL and return the body as text. Non-2xx responses are errors.
    async fn get_text(&self, url: &str) -> Result<String>;

    /// POST to a URL with query parameters and return the body as text,
    /// regardless of status.
    async fn post_form(&self, url: &str, params: &[(&str, String)]) -> Result<String>;

    /// GET a URL and return the raw body. Non-2xx responses are errors.
    async fn get_bytes(&self, url: &str) -> Result<Vec<u8>>;
}
