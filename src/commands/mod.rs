//! Lead API Bindings
//!
//! Frontend bindings to the backend HTTP API, organized by domain.

mod lead;
mod stats;

use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::models::ApiEnvelope;

/// Handle used for every API call
#[derive(Clone)]
pub struct Api {
    http: reqwest::Client,
    config: ClientConfig,
}

impl Api {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    fn url(&self, path: &str) -> String {
        self.config.url(path)
    }
}

// ========================
// Response Helpers
// ========================

/// Decode a JSON body, rejecting non-2xx responses first
async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status(status.as_u16()));
    }
    response.json::<T>().await.map_err(|e| {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Transport(e)
        }
    })
}

/// Unwrap a `{success, ...}` envelope into a `Result`
fn into_result<T>(envelope: ApiEnvelope<T>) -> Result<ApiEnvelope<T>, ApiError> {
    if envelope.success {
        Ok(envelope)
    } else {
        Err(ApiError::rejected(envelope.error, envelope.message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_into_result() {
        let ok: ApiEnvelope<Value> = serde_json::from_str(r#"{"success": true, "message": "Star toggled"}"#).unwrap();
        assert!(into_result(ok).is_ok());

        let rejected: ApiEnvelope<Value> =
            serde_json::from_str(r#"{"success": false, "error": "Invalid row number"}"#).unwrap();
        match into_result(rejected) {
            Err(ApiError::Rejected(msg)) => assert_eq!(msg, "Invalid row number"),
            other => panic!("expected rejection, got {:?}", other.map(|e| e.success)),
        }
    }

    #[test]
    fn test_api_urls() {
        let api = Api::new(ClientConfig::with_base("http://localhost:8000"));
        assert_eq!(api.url("/api/leads"), "http://localhost:8000/api/leads");
    }
}
