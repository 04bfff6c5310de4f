//! Lecture2Go HTTP session.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::cookie::{CookieStore, Jar};
use reqwest::{Client, ClientBuilder, Response};
use url::Url;

use crate::api::transport::Transport;
use crate::config::Config;
use crate::error::{Error, Result};

/// HTTP session holding the cookies of every response for the whole run.
pub struct Session {
    client: Client,
    cookies: Arc<Jar>,
}

impl Session {
    /// Create a new session from the run configuration.
    pub fn new(config: &Config) -> Result<Self> {
        Self::from_builder(Client::builder(), config)
    }

    /// Finish `builder` with the session's cookie jar, user agent and TLS policy.
    fn from_builder(builder: ClientBuilder, config: &Config) -> Result<Self> {
        let cookies = Arc::new(Jar::default());

        let client = builder
            .user_agent(&config.user_agent)
            .cookie_provider(Arc::clone(&cookies))
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

        if config.accept_invalid_certs {
            tracing::debug!("TLS certificate verification disabled");
        }

        Ok(Self { client, cookies })
    }

    /// Cookie header the session would send to `url`, if any.
    pub fn cookie_header(&self, url: &str) -> Option<String> {
        let url = Url::parse(url).ok()?;
        self.cookies
            .cookies(&url)
            .and_then(|value| value.to_str().ok().map(str::to_string))
    }

    /// Make a GET request and reject non-success statuses.
    async fn get(&self, url: &str) -> Result<Response> {
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).send().await?;

        let status = response.status();
        tracing::debug!("Response status: {}", status);

        if !status.is_success() {
            return Err(Error::Download(format!("HTTP {} for {}", status, url)));
        }

        Ok(response)
    }
}

#[async_trait]
impl Transport for Session {
    async fn get_text(&self, url: &str) -> Result<String> {
        let response = self.get(url).await?;
        Ok(response.text().await?)
    }

    async fn post_form(&self, url: &str, params: &[(&str, String)]) -> Result<String> {
        tracing::debug!("POST {}", url);

        let response = self.client.post(url).query(params).send().await?;
        tracing::debug!("Response status: {}", response.status());

        let text = response.text().await?;
        tracing::debug!(
            "Session cookies after POST: {}",
            self.cookie_header(url).as_deref().unwrap_or("<none>")
        );

        Ok(text)
    }

    async fn get_bytes(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.get(url).await?;
        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::Download(format!("Failed to read body of {}: {}", url, e)))?;
        Ok(bytes.to_vec())
    }
}
