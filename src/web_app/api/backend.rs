// web_app/api/backend.rs - HTTP client for the external analysis backend
//
// The backend owns ingredient extraction and allergy classification. This
// module only speaks its two-endpoint JSON contract:
//
//   POST {base}/search  {"input": ...} -> {"products": [{brand, title, url}]}
//   POST {base}/compute {"url": ...}   -> {"allergies": [..], "image"?: ..}

use std::sync::Mutex;
use std::sync::OnceLock;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use super::config::BackendConfig;
use crate::web_app::model::{ComputeRequest, ComputeResponse, ProductSummary, SearchRequest, SearchResponse};

static CLIENT: OnceLock<BackendClient> = OnceLock::new();
static TEST_CLIENT_OVERRIDE: Mutex<Option<BackendClient>> = Mutex::new(None);

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Request to analysis backend failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Analysis backend responded with {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Unexpected response from analysis backend: {body}")]
    Decode {
        body: String,
        #[source]
        source: serde_json::Error,
    },
}

impl BackendError {
    /// Raw response text where there was one, otherwise the error itself
    pub fn raw_response(&self) -> String {
        match self {
            BackendError::Status { body, .. } | BackendError::Decode { body, .. } => body.clone(),
            BackendError::Transport(e) => e.to_string(),
        }
    }
}

/// Client for the analysis backend
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone, Debug)]
pub struct BackendClient {
    http: reqwest::Client,
    config: BackendConfig,
}

impl BackendClient {
    pub fn new(config: BackendConfig) -> Result<Self, BackendError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    /// Look up products by name
    pub async fn search(&self, input: &str) -> Result<Vec<ProductSummary>, BackendError> {
        let body = SearchRequest { input: input.to_string() };
        let response: SearchResponse = self.post(self.config.search_url(), &body).await?;
        Ok(response.products)
    }

    /// Ask the backend which ingredients of the product at `url` are allergens
    pub async fn compute(&self, url: &str) -> Result<ComputeResponse, BackendError> {
        let body = ComputeRequest { url: url.to_string() };
        self.post(self.config.compute_url(), &body).await
    }

    async fn post<B, R>(&self, endpoint: String, body: &B) -> Result<R, BackendError>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        tracing::debug!("POST {}", endpoint);

        let response = self.http.post(&endpoint).json(body).send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(BackendError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        serde_json::from_str(&text).map_err(|source| BackendError::Decode { body: text, source })
    }
}

/// Initialize the global backend client
pub fn init_client(client: BackendClient) {
    tracing::info!("Initializing analysis backend client for {}", client.config().base_url);
    if CLIENT.set(client).is_err() {
        tracing::warn!("Backend client already initialized");
    }
}

/// Set a client override for testing
pub fn set_test_client(client: BackendClient) {
    let mut guard = TEST_CLIENT_OVERRIDE
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = Some(client);
}

/// Get the global backend client
pub fn get_client() -> Option<BackendClient> {
    {
        let guard = TEST_CLIENT_OVERRIDE
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(ref client) = *guard {
            return Some(client.clone());
        }
    }

    let client = CLIENT.get().cloned();
    if client.is_none() {
        tracing::warn!("Backend client has not been initialized");
    }
    client
}
