//! Scoring gateway over HTTP

use super::error::{HttpError, Result};
use super::wire::{SaveBody, ScoreBody, StoredBody, SubmitBody};
use async_trait::async_trait;
use compass_application::{GatewayError, ScoreResponse, ScoringGateway};
use compass_domain::{AnswerMap, ResultKey, SaveRequest, StoredResult};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info};

/// Default scoring service address
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

const USER_AGENT: &str = concat!("ideo-compass/", env!("CARGO_PKG_VERSION"));

/// [`ScoringGateway`] backed by the service's JSON API
pub struct HttpScoringGateway {
    client: reqwest::Client,
    base_url: String,
}

impl HttpScoringGateway {
    /// Create a gateway for `base_url` with a per-request timeout.
    ///
    /// The use cases apply their own bound as well; this one only guards
    /// against a stalled connection outliving the call.
    pub fn with_config(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| HttpError::ClientBuild(e.to_string()))?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        info!("HttpScoringGateway targeting {}", base_url);

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn read(&self, response: reqwest::Response) -> Result<String> {
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(HttpError::NotFound);
        }
        let body = response.text().await?;
        if !status.is_success() {
            return Err(HttpError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(body)
    }

    fn decode<T: DeserializeOwned>(raw: &str) -> Result<T> {
        serde_json::from_str(raw).map_err(|e| HttpError::ParseError {
            error: e.to_string(),
            raw: raw.to_string(),
        })
    }

    async fn get_questions(&self) -> Result<Value> {
        let response = self.client.get(self.url("/api/questions")).send().await?;
        let raw = self.read(response).await?;
        Self::decode(&raw)
    }

    async fn post_submit(&self, answers: &AnswerMap) -> Result<ScoreResponse> {
        let response = self
            .client
            .post(self.url("/api/submit"))
            .json(&SubmitBody { answers })
            .send()
            .await?;
        let raw = self.read(response).await?;
        let body: ScoreBody = Self::decode(&raw)?;
        Ok(body.into())
    }

    async fn post_save(&self, request: &SaveRequest) -> Result<ResultKey> {
        let response = self
            .client
            .post(self.url("/api/save_result"))
            .json(request)
            .send()
            .await?;
        let raw = self.read(response).await?;
        let body: SaveBody = Self::decode(&raw)?;
        body.into_key()
    }

    async fn get_result(&self, key: &ResultKey) -> Result<StoredResult> {
        let response = self
            .client
            .get(self.url(&format!("/api/result/{}", key)))
            .send()
            .await?;
        let raw = self.read(response).await?;
        Ok(StoredBody::parse(&raw)?.into_stored(key))
    }
}

#[async_trait]
impl ScoringGateway for HttpScoringGateway {
    async fn fetch_questions(&self) -> std::result::Result<Value, GatewayError> {
        debug!("GET /api/questions");
        Ok(self.get_questions().await?)
    }

    async fn submit(&self, answers: &AnswerMap) -> std::result::Result<ScoreResponse, GatewayError> {
        debug!("POST /api/submit ({} answers)", answers.len());
        Ok(self.post_submit(answers).await?)
    }

    async fn save_result(
        &self,
        request: &SaveRequest,
    ) -> std::result::Result<ResultKey, GatewayError> {
        debug!("POST /api/save_result (profile {})", request.profile_key);
        Ok(self.post_save(request).await?)
    }

    async fn fetch_result(&self, key: &ResultKey) -> std::result::Result<StoredResult, GatewayError> {
        debug!("GET /api/result/{}", key);
        Ok(self.get_result(key).await?)
    }
}
