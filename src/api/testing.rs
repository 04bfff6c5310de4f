//! Scripted in-memory portal for tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::api::transport::Transport;
use crate::error::{Error, Result};

/// Transport answering from fixed responses and recording every request.
#[derive(Default)]
pub struct FakeTransport {
    pages: HashMap<String, Vec<u8>>,
    form_responses: HashMap<String, String>,
    requests: Mutex<Vec<String>>,
    posts: Mutex<Vec<(String, Vec<(String, String)>)>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` for GET requests to `url`.
    pub fn with_page(mut self, url: &str, body: impl Into<Vec<u8>>) -> Self {
        self.pages.insert(url.to_string(), body.into());
        self
    }

    /// Serve `body` for POST requests to `url`.
    pub fn with_post(mut self, url: &str, body: &str) -> Self {
        self.form_responses.insert(url.to_string(), body.to_string());
        self
    }

    /// URLs requested so far, prefixed with the method.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    /// POST requests made so far with their parameters.
    pub fn posts(&self) -> Vec<(String, Vec<(String, String)>)> {
        self.posts.lock().unwrap().clone()
    }

    fn lookup(&self, url: &str) -> Result<&Vec<u8>> {
        self.requests.lock().unwrap().push(format!("GET {}", url));
        self.pages
            .get(url)
            .ok_or_else(|| Error::Download(format!("HTTP 404 Not Found for {}", url)))
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn get_text(&self, url: &str) -> Result<String> {
        let body = self.lookup(url)?;
        Ok(String::from_utf8_lossy(body).into_owned())
    }

    async fn post_form(&self, url: &str, params: &[(&str, String)]) -> Result<String> {
        self.requests.lock().unwrap().push(format!("POST {}", url));
        self.posts.lock().unwrap().push((
            url.to_string(),
            params
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
        ));
        Ok(self.form_responses.get(url).cloned().unwrap_or_default())
    }

    async fn get_bytes(&self, url: &str) -> Result<Vec<u8>> {
        self.lookup(url).cloned()
    }
}
