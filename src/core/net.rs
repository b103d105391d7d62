// src/core/net.rs
//! Document Source: fetch one CTR page by code.
//!
//! The rest of the crate only sees the `DocumentSource` trait; tests plug in
//! canned markup, the front ends use `HttpSource`.

use reqwest::StatusCode;
use reqwest::blocking::Client;

use crate::config::options::SourceConfig;
use crate::error::FetchError;
use crate::verify::Code;

pub trait DocumentSource: Send + Sync {
    /// Where the document for `code` lives (shown to the user, logged).
    fn locate(&self, code: &Code) -> String;

    /// Body text on success. `NotFound` only when the remote says the document
    /// does not exist; everything else is `Unavailable`.
    fn fetch(&self, code: &Code) -> Result<String, FetchError>;
}

/// Blocking HTTPS source with a pooled client and a per-request timeout.
pub struct HttpSource {
    client: Client,
    base_url: String,
}

impl HttpSource {
    pub fn new(cfg: &SourceConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(cfg.timeout)
            .user_agent(cfg.user_agent.as_str())
            .build()
            .map_err(|e| FetchError::Unavailable(format!("HTTP client setup failed: {e}")))?;
        Ok(Self { client, base_url: cfg.base_url.clone() })
    }
}

impl DocumentSource for HttpSource {
    fn locate(&self, code: &Code) -> String {
        join!(self.base_url.as_str(), code.as_str())
    }

    fn fetch(&self, code: &Code) -> Result<String, FetchError> {
        let url = self.locate(code);
        logd!("Net: GET {}", url);

        let resp = self.client.get(&url).send().map_err(|e| {
            let kind = if e.is_timeout() { "timeout" } else { "transport error" };
            FetchError::Unavailable(format!("{kind}: {e}"))
        })?;

        let status = resp.status();
        if status == StatusCode::NOT_FOUND || status == StatusCode::GONE {
            logd!("Net: {} → {}", url, status);
            return Err(FetchError::NotFound);
        }
        if !status.is_success() {
            return Err(FetchError::Unavailable(format!("HTTP error: {} {}", status, url)));
        }

        let body = resp
            .text()
            .map_err(|e| FetchError::Unavailable(format!("reading body failed: {e}")))?;
        logd!("Net: {} → {} ({} bytes)", url, status, body.len());
        Ok(body)
    }
}
