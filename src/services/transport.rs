// ============================================================================
// TRANSPORT - one HTTP exchange, nothing else
// ============================================================================

use gloo_net::http::{Request, RequestBuilder};

use super::api_client::{ApiRequest, HttpMethod};
use super::error::ApiError;

/// Status and raw body of a completed exchange, whatever the status.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a fully built request. Implementations never retry.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn execute(&self, request: ApiRequest) -> Result<RawResponse, ApiError>;
}

/// Browser `fetch` through gloo-net. No explicit timeout.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FetchTransport;

impl Transport for FetchTransport {
    async fn execute(&self, request: ApiRequest) -> Result<RawResponse, ApiError> {
        let mut builder: RequestBuilder = match request.method {
            HttpMethod::Get => Request::get(&request.url),
            HttpMethod::Post => Request::post(&request.url),
            HttpMethod::Put => Request::put(&request.url),
            HttpMethod::Delete => Request::delete(&request.url),
        };

        if !request.query.is_empty() {
            builder = builder.query(
                request
                    .query
                    .iter()
                    .map(|(key, value)| (key.as_str(), value.as_str())),
            );
        }
        if let Some(token) = &request.authorization {
            builder = builder.header("Authorization", token);
        }

        let response = match &request.body {
            Some(body) => {
                builder
                    .header("Content-Type", "application/json")
                    .body(body.to_string())
                    .map_err(|e| ApiError::Serialization(e.to_string()))?
                    .send()
                    .await
            }
            None => builder.send().await,
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;

        Ok(RawResponse { status, body })
    }
}
