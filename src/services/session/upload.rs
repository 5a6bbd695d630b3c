//! Upload Flow
//!
//! Validates a selected archive, stages it, and submits it to the
//! analysis service. A rejected candidate never clears the staged file,
//! and a failed submit keeps it, so the user can retry without
//! re-selecting.

use crate::models::AnalysisResult;
use crate::services::api::AnalysisApiClient;
use crate::utils::error::{AppError, AppResult};

/// Required archive extension; the only validation performed.
const ARCHIVE_EXTENSION: &str = ".zip";

/// Message shown when a candidate has the wrong extension.
const WRONG_EXTENSION_MESSAGE: &str = "Please upload a ZIP file";

/// Fallback message when a submit fails without a usable error string.
const GENERIC_SUBMIT_FAILURE: &str = "Failed to upload and analyze file";

/// An accepted, not-yet-submitted archive.
#[derive(Debug, Clone)]
pub struct StagedArchive {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl StagedArchive {
    /// Size in bytes, for display next to the staged file name.
    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

/// Stages and submits a codebase archive.
///
/// Concurrent submits are not permitted; `submit` takes `&mut self`, so
/// the borrow checker enforces what the disabled submit control enforces
/// in the UI.
#[derive(Debug, Default)]
pub struct UploadFlow {
    staged: Option<StagedArchive>,
    loading: bool,
    error: Option<String>,
}

impl UploadFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn staged(&self) -> Option<&StagedArchive> {
        self.staged.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Validates and stages a candidate archive.
    ///
    /// Only the file-name extension is checked; no size or content-type
    /// introspection. An accepted candidate replaces any previously
    /// staged file; a rejected one leaves it in place.
    pub fn stage(&mut self, name: impl Into<String>, bytes: Vec<u8>) -> AppResult<()> {
        let name = name.into();
        if !name.to_lowercase().ends_with(ARCHIVE_EXTENSION) {
            self.error = Some(WRONG_EXTENSION_MESSAGE.to_string());
            return Err(AppError::validation(WRONG_EXTENSION_MESSAGE));
        }
        self.staged = Some(StagedArchive { name, bytes });
        self.error = None;
        Ok(())
    }

    /// Drops the staged archive and any inline error.
    pub fn clear(&mut self) {
        self.staged = None;
        self.error = None;
    }

    /// Submits the staged archive to the analysis service.
    ///
    /// Exactly one network call per invocation; no automatic retries. On
    /// failure the staged archive is retained and the best available
    /// message is stored for inline display.
    pub async fn submit(&mut self, client: &AnalysisApiClient) -> AppResult<AnalysisResult> {
        let archive = self
            .staged
            .as_ref()
            .ok_or_else(|| AppError::validation("No file staged for upload"))?
            .clone();

        self.loading = true;
        self.error = None;

        let outcome = client.upload_archive(&archive.name, archive.bytes).await;
        self.loading = false;

        match outcome {
            Ok(result) => Ok(result),
            Err(err) => {
                tracing::warn!("[Upload] Submit failed: {}", err);
                let message = match &err {
                    AppError::Http { detail, .. } if !detail.is_empty() => detail.clone(),
                    AppError::Http { .. } => GENERIC_SUBMIT_FAILURE.to_string(),
                    other => other.to_string(),
                };
                self.error = Some(message);
                Err(err)
            }
        }
    }
}
