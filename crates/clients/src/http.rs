//! JSON-over-HTTP plumbing shared by the platform clients.

use std::time::Duration;

use herald_core::{CoreError, CoreResult};
use reqwest::{RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

pub const API_KEY_HEADER: &str = "X-Api-Key";

/// Build the pooled client shared by every service client.
pub fn build_http_client(timeout: Duration) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder().timeout(timeout).build()
}

/// One platform service at one base URL.
#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    service: &'static str,
    base_url: String,
    api_key: Option<String>,
}

impl ApiClient {
    pub fn new(
        client: reqwest::Client,
        service: &'static str,
        base_url: impl Into<String>,
        api_key: Option<String>,
    ) -> Self {
        Self {
            client,
            service,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
        }
    }

    /// `GET {base}/{segments...}`, each segment percent-encoded. A 404
    /// becomes [`CoreError::NotFound`] for `entity`/`id`.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        entity: &'static str,
        id: &str,
    ) -> CoreResult<T> {
        let request = self.client.get(self.url(segments)?);
        let response = self.send(request).await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(CoreError::NotFound {
                entity,
                id: id.to_string(),
            });
        }
        self.parse_response(response).await
    }

    /// `POST {base}/{segments...}` with a JSON body.
    pub async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        segments: &[&str],
        body: &B,
    ) -> CoreResult<T> {
        let request = self.client.post(self.url(segments)?).json(body);
        let response = self.send(request).await?;
        self.parse_response(response).await
    }

    // ---- private helpers ----

    fn url(&self, segments: &[&str]) -> CoreResult<Url> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| self.upstream(format!("invalid base url {}: {e}", self.base_url)))?;
        url.path_segments_mut()
            .map_err(|_| self.upstream(format!("base url {} cannot take a path", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn upstream(&self, message: String) -> CoreError {
        CoreError::Upstream {
            service: self.service,
            message,
        }
    }

    async fn send(&self, request: RequestBuilder) -> CoreResult<Response> {
        let request = match &self.api_key {
            Some(key) => request.header(API_KEY_HEADER, key),
            None => request,
        };

        request.send().await.map_err(|e| self.upstream(e.to_string()))
    }

    async fn parse_response<T: DeserializeOwned>(&self, response: Response) -> CoreResult<T> {
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(service = self.service, status = status.as_u16(), "Platform call failed");
            return Err(CoreError::Status {
                service: self.service,
                status: status.as_u16(),
            });
        }

        response.json::<T>().await.map_err(|e| CoreError::Decode {
            service: self.service,
            message: e.to_string(),
        })
    }
}
