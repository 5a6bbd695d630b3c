//! Summary Enrichment
//!
//! Session-level AI summary, fetched on demand and independent of
//! per-function detail state. One summary per analysis result; each
//! request overwrites the prior value. Failures never leave the panel
//! empty-handed: a fixed message replaces the would-be summary so the
//! surface shows a visible error card instead of silently doing nothing.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::services::api::AnalysisApiClient;
use crate::utils::error::{AppError, AppResult};

/// Resident summary text after a failed generation attempt.
pub const SUMMARY_FAILURE_MESSAGE: &str = "Failed to generate summary. Please try again.";

#[derive(Debug, Default)]
struct SummaryPanelState {
    summary: Option<String>,
    generating: bool,
}

/// Drives the AI-summary card.
#[derive(Debug, Clone, Default)]
pub struct SummaryPanel {
    inner: Arc<Mutex<SummaryPanelState>>,
}

impl SummaryPanel {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> AppResult<MutexGuard<'_, SummaryPanelState>> {
        self.inner
            .lock()
            .map_err(|_| AppError::internal("Summary panel mutex poisoned"))
    }

    pub fn summary(&self) -> AppResult<Option<String>> {
        Ok(self.lock()?.summary.clone())
    }

    pub fn is_generating(&self) -> AppResult<bool> {
        Ok(self.lock()?.generating)
    }

    /// Requests a narrative summary for `repo_id`.
    ///
    /// Exactly one generation may be in flight per session; a call while
    /// one is pending is a no-op (the trigger control is disabled). On
    /// success the resident summary is replaced; on failure it becomes
    /// [`SUMMARY_FAILURE_MESSAGE`]. The generating flag clears on both
    /// paths.
    pub async fn generate(&self, client: &AnalysisApiClient, repo_id: &str) -> AppResult<()> {
        {
            let mut state = self.lock()?;
            if state.generating {
                return Ok(());
            }
            state.generating = true;
        }

        let outcome = client.generate_summary(repo_id).await;

        let mut state = self.lock()?;
        state.generating = false;
        match outcome {
            Ok(summary) => state.summary = Some(summary),
            Err(err) => {
                tracing::warn!("[Summary] Generation failed for {}: {}", repo_id, err);
                state.summary = Some(SUMMARY_FAILURE_MESSAGE.to_string());
            }
        }
        Ok(())
    }

    /// Discards the resident summary (session reset).
    pub fn clear(&self) -> AppResult<()> {
        let mut state = self.lock()?;
        state.summary = None;
        state.generating = false;
        Ok(())
    }
}
