use async_trait::async_trait;
use herald_core::CoreResult;
use herald_dispatch::ports::{SmsGateway, SmsRequest};
use serde::{Deserialize, Serialize};

use crate::http::ApiClient;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SendMessageRequest<'a> {
    phone_number: &'a str,
    message: &'a str,
}

#[derive(Deserialize)]
struct SendMessageResponse {
    id: String,
}

/// SMS gateway of the platform: `POST /v1/sms/messages`.
pub struct SmsClient {
    api: ApiClient,
}

impl SmsClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl SmsGateway for SmsClient {
    async fn send_message(&self, request: SmsRequest) -> CoreResult<String> {
        let body = SendMessageRequest {
            phone_number: &request.phone_number,
            message: &request.message,
        };
        let response: SendMessageResponse = self
            .api
            .post_json(&["v1", "sms", "messages"], &body)
            .await?;
        Ok(response.id)
    }
}
