//! Analysis API Client
//!
//! HTTP client for the LegacyMap analysis service. Covers the four
//! endpoints the client-state layer relies on: archive upload,
//! per-function detail, AI summary generation, and the health probe.

use std::time::Duration;

use reqwest::multipart;

use crate::models::{AnalysisResult, FunctionDetail, SummaryResponse};
use crate::utils::error::{AppError, AppResult};

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default analysis-service base URL when none is configured.
const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Environment variable overriding the analysis-service base URL.
const BACKEND_URL_ENV: &str = "LEGACYMAP_BACKEND_URL";

/// Fallback message when a non-success response carries no `detail`.
const GENERIC_UPLOAD_FAILURE: &str = "Analysis failed";

/// Optional structured error payload on non-success responses.
#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

/// Configuration for the analysis API client.
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    /// Analysis-service base URL, without a trailing slash.
    pub base_url: String,
    /// Request timeout duration.
    pub timeout: Duration,
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ApiClientConfig {
    /// Builds a config for the given base URL, normalizing a trailing slash.
    pub fn for_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }

    /// Reads the base URL from `LEGACYMAP_BACKEND_URL`, falling back to
    /// `http://localhost:8000`.
    pub fn from_env() -> Self {
        match std::env::var(BACKEND_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self::for_base_url(url),
            _ => Self::default(),
        }
    }
}

/// HTTP client for the LegacyMap analysis service.
pub struct AnalysisApiClient {
    client: reqwest::Client,
    config: ApiClientConfig,
}

impl AnalysisApiClient {
    /// Creates a client with default configuration.
    pub fn new() -> AppResult<Self> {
        Self::with_config(ApiClientConfig::default())
    }

    /// Creates a client with the given configuration.
    pub fn with_config(config: ApiClientConfig) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AppError::internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// Creates a client wrapping an existing reqwest::Client.
    ///
    /// Useful for testing or when the caller wants to control the client
    /// configuration (e.g., custom TLS, proxy settings).
    pub fn with_reqwest_client(client: reqwest::Client, config: ApiClientConfig) -> Self {
        Self { client, config }
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Uploads a codebase archive and returns the bulk analysis document.
    ///
    /// Sends exactly one multipart POST to `/upload-analyze` with the
    /// archive bytes under the `file` field. On a non-success status the
    /// service's `{ detail }` payload is surfaced when parseable,
    /// otherwise a generic failure message.
    pub async fn upload_archive(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> AppResult<AnalysisResult> {
        let part = multipart::Part::bytes(bytes).file_name(file_name.to_string());
        let form = multipart::Form::new().part("file", part);

        let response = self
            .client
            .post(format!("{}/upload-analyze", self.config.base_url))
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.detail)
                .unwrap_or_else(|| GENERIC_UPLOAD_FAILURE.to_string());
            return Err(AppError::Http {
                status: status.as_u16(),
                detail,
            });
        }

        response.json::<AnalysisResult>().await.map_err(|e| {
            AppError::InvalidResponse(format!("Failed to parse analysis result: {}", e))
        })
    }

    /// Fetches enrichment data for one function.
    ///
    /// Sends GET `/function-details/{repo_id}/{encoded_file}/{name}`.
    /// The file identifier is path-encoded; the function name is used as
    /// a raw path segment.
    pub async fn function_details(
        &self,
        repo_id: &str,
        file: &str,
        name: &str,
    ) -> AppResult<FunctionDetail> {
        let encoded_file = urlencoding::encode(file);
        let response = self
            .client
            .get(format!(
                "{}/function-details/{}/{}/{}",
                self.config.base_url, repo_id, encoded_file, name
            ))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Http {
                status: status.as_u16(),
                detail: body,
            });
        }

        response.json::<FunctionDetail>().await.map_err(|e| {
            AppError::InvalidResponse(format!("Failed to parse function detail: {}", e))
        })
    }

    /// Requests an AI-generated narrative summary for the whole session.
    ///
    /// Sends a bodyless POST to `/generate-summary/{repo_id}` and unwraps
    /// the `{ summary }` envelope.
    pub async fn generate_summary(&self, repo_id: &str) -> AppResult<String> {
        let response = self
            .client
            .post(format!(
                "{}/generate-summary/{}",
                self.config.base_url, repo_id
            ))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Http {
                status: status.as_u16(),
                detail: body,
            });
        }

        let envelope: SummaryResponse = response
            .json()
            .await
            .map_err(|e| AppError::InvalidResponse(format!("Failed to parse summary: {}", e)))?;

        Ok(envelope.summary)
    }

    /// Probes the analysis service's `/health` endpoint.
    pub async fn health(&self) -> AppResult<bool> {
        let response = self
            .client
            .get(format!("{}/health", self.config.base_url))
            .send()
            .await?;

        Ok(response.status().is_success())
    }
}

// ============================================================================
// Tests
// ============================================================================
