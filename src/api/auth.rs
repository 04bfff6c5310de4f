//! Access gate for password-protected videos.

use std::sync::LazyLock;

use regex::Regex;

use crate::api::transport::Transport;
use crate::error::{Error, Result};

/// Shape of a protected video URL: the `get/v/` path followed by a
/// 24-character identifier and nothing else.
static PROTECTED_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https://lecture2go\.uni-hamburg\.de/l2go/-/get/v/[a-zA-Z0-9]{24}$")
        .expect("protected URL pattern is valid")
});

/// Substring present only in pages that expose a playable stream.
pub const MANIFEST_MARKER: &str = ".m3u8";

/// Check whether a URL points at a password-protected video.
pub fn is_protected(url: &str) -> bool {
    PROTECTED_URL.is_match(url)
}

/// Build the password form parameters.
pub fn build_auth_params(password: &str, form_date: i64) -> Vec<(&'static str, String)> {
    vec![
        ("_OpenAccessVideos_formDate", form_date.to_string()),
        ("_OpenAccessVideos_password", password.to_string()),
        ("_OpenAccessVideos_tryauth", "1".to_string()),
        ("p_auth", String::new()),
    ]
}

/// Fetches video pages, unlocking protected ones with the configured password.
#[derive(Debug, Clone, Default)]
pub struct AccessGate {
    password: Option<String>,
}

impl AccessGate {
    pub fn new(password: Option<String>) -> Self {
        Self { password }
    }

    /// Fetch the body of a video page.
    ///
    /// Open pages are fetched with a plain GET. Protected pages are unlocked
    /// by submitting the password; the response body is accepted only if it
    /// references a manifest. Cookies set along the way stay in the session.
    pub async fn open_page(&self, transport: &dyn Transport, url: &str) -> Result<String> {
        if !is_protected(url) {
            return transport.get_text(url).await;
        }

        tracing::info!("Site is protected");

        let password = self
            .password
            .as_deref()
            .ok_or_else(|| Error::CredentialRequired(url.to_string()))?;

        tracing::info!("Password provided, trying to access protected area...");
        let params = build_auth_params(password, chrono::Utc::now().timestamp());
        let body = transport.post_form(url, &params).await?;

        if !body.contains(MANIFEST_MARKER) {
            return Err(Error::CredentialIncorrect(url.to_string()));
        }

        tracing::info!("Password correct, continuing");
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::FakeTransport;

    const PROTECTED: &str =
        "https://lecture2go.uni-hamburg.de/l2go/-/get/v/AbCdEfGhIjKlMnOpQrStUvWx";

    #[test]
    fn test_protected_pattern_matches_exact_shape() {
        assert!(is_protected(PROTECTED));
        assert!(is_protected(
            "https://lecture2go.uni-hamburg.de/l2go/-/get/v/012345678901234567890123"
        ));
    }

    #[test]
    fn test_protected_pattern_rejects_deviations() {
        // 23 and 25 characters
        assert!(!is_protected(
            "https://lecture2go.uni-hamburg.de/l2go/-/get/v/AbCdEfGhIjKlMnOpQrStUvW"
        ));
        assert!(!is_protected(
            "https://lecture2go.uni-hamburg.de/l2go/-/get/v/AbCdEfGhIjKlMnOpQrStUvWxY"
        ));
        // Trailing characters
        assert!(!is_protected(&format!("{}/", PROTECTED)));
        assert!(!is_protected(&format!("{}?x=1", PROTECTED)));
        // Wrong prefix
        assert!(!is_protected(
            "http://lecture2go.uni-hamburg.de/l2go/-/get/v/AbCdEfGhIjKlMnOpQrStUvWx"
        ));
        assert!(!is_protected(
            "https://lecture2go.uni-hamburg.de/l2go/-/get/l/AbCdEfGhIjKlMnOpQrStUvWx"
        ));
        assert!(!is_protected(
            "https://evil.example/https://lecture2go.uni-hamburg.de/l2go/-/get/v/AbCdEfGhIjKlMnOpQrStUvWx"
        ));
        // Numeric ids are open videos
        assert!(!is_protected("https://lecture2go.uni-hamburg.de/l2go/-/get/v/12345"));
        // Non-alphanumeric characters
        assert!(!is_protected(
            "https://lecture2go.uni-hamburg.de/l2go/-/get/v/AbCdEfGhIjKlMnOpQrStUv-x"
        ));
    }

    #[test]
    fn test_build_auth_params() {
        let params = build_auth_params("hunter2", 1_700_000_000);
        assert_eq!(
            params,
            vec![
                ("_OpenAccessVideos_formDate", "1700000000".to_string()),
                ("_OpenAccessVideos_password", "hunter2".to_string()),
                ("_OpenAccessVideos_tryauth", "1".to_string()),
                ("p_auth", String::new()),
            ]
        );
    }

    #[test]
    fn test_open_page_plain_get() {
        let url = "https://lecture2go.uni-hamburg.de/l2go/-/get/v/12345";
        let transport = FakeTransport::new().with_page(url, "<html>open</html>");

        let body =
            tokio_test::block_on(AccessGate::new(None).open_page(&transport, url)).unwrap();
        assert_eq!(body, "<html>open</html>");
        assert!(transport.posts().is_empty());
    }

    #[tokio::test]
    async fn test_protected_without_password() {
        let transport = FakeTransport::new();

        let err = AccessGate::new(None)
            .open_page(&transport, PROTECTED)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::CredentialRequired(_)));
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_protected_wrong_password() {
        let transport = FakeTransport::new().with_post(PROTECTED, "<html>Wrong password</html>");

        let err = AccessGate::new(Some("nope".into()))
            .open_page(&transport, PROTECTED)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::CredentialIncorrect(_)));
    }

    #[tokio::test]
    async fn test_protected_correct_password() {
        let body = r#"<script>var src = "https://cdn.example/vod/master.m3u8";</script>"#;
        let transport = FakeTransport::new().with_post(PROTECTED, body);

        let page = AccessGate::new(Some("hunter2".into()))
            .open_page(&transport, PROTECTED)
            .await
            .unwrap();
        assert_eq!(page, body);

        let posts = transport.posts();
        assert_eq!(posts.len(), 1);
        let (url, params) = &posts[0];
        assert_eq!(url, PROTECTED);
        assert!(params.contains(&(
            "_OpenAccessVideos_password".to_string(),
            "hunter2".to_string()
        )));
    }
}
