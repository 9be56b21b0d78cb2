//! Link shorteners.

use async_trait::async_trait;
use herald_core::{CoreError, CoreResult};
use herald_dispatch::ports::UrlShortener;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
struct ShortenRequest<'a> {
    long_url: &'a str,
}

#[derive(Deserialize)]
struct ShortenResponse {
    link: String,
}

/// Bitly v4 `POST /v4/shorten`.
pub struct BitlyShortener {
    client: reqwest::Client,
    api_url: String,
    access_token: String,
}

impl BitlyShortener {
    pub fn new(client: reqwest::Client, api_url: impl Into<String>, access_token: String) -> Self {
        Self {
            client,
            api_url: api_url.into().trim_end_matches('/').to_string(),
            access_token,
        }
    }
}

#[async_trait]
impl UrlShortener for BitlyShortener {
    async fn shorten(&self, long_url: &str) -> CoreResult<String> {
        let response = self
            .client
            .post(format!("{}/v4/shorten", self.api_url))
            .bearer_auth(&self.access_token)
            .json(&ShortenRequest { long_url })
            .send()
            .await
            .map_err(|e| CoreError::Upstream {
                service: "bitly",
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(CoreError::Status {
                service: "bitly",
                status: status.as_u16(),
            });
        }

        let body: ShortenResponse = response.json().await.map_err(|e| CoreError::Decode {
            service: "bitly",
            message: e.to_string(),
        })?;
        Ok(body.link)
    }
}

/// Returns every URL unchanged. Used when no Bitly token is configured.
pub struct IdentityShortener;

#[async_trait]
impl UrlShortener for IdentityShortener {
    async fn shorten(&self, long_url: &str) -> CoreResult<String> {
        Ok(long_url.to_string())
    }
}
