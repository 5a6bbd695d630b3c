//! Analysis Session
//!
//! The single live session object. All mutation of session state goes
//! through the operations here; there are no ambient globals.

use crate::models::{AnalysisResult, FunctionRecord};
use crate::services::api::{AnalysisApiClient, ApiClientConfig};
use crate::services::session::{
    DashboardView, DetailPanel, SessionStore, SummaryPanel, UploadFlow, ViewMode,
};
use crate::utils::error::{AppError, AppResult};

/// One user-facing analysis session: view-mode state machine, upload
/// flow, live analysis result, and both enrichment panels.
pub struct AnalysisSession {
    client: AnalysisApiClient,
    store: SessionStore,
    upload: UploadFlow,
    details: DetailPanel,
    summary: SummaryPanel,
}

impl AnalysisSession {
    /// Creates a session talking to the service configured via
    /// `LEGACYMAP_BACKEND_URL` (default `http://localhost:8000`).
    pub fn new() -> AppResult<Self> {
        Ok(Self::with_client(AnalysisApiClient::with_config(
            ApiClientConfig::from_env(),
        )?))
    }

    /// Creates a session with an explicit API client.
    pub fn with_client(client: AnalysisApiClient) -> Self {
        Self {
            client,
            store: SessionStore::new(),
            upload: UploadFlow::new(),
            details: DetailPanel::new(),
            summary: SummaryPanel::new(),
        }
    }

    pub fn mode(&self) -> ViewMode {
        self.store.mode()
    }

    pub fn upload(&self) -> &UploadFlow {
        &self.upload
    }

    pub fn details(&self) -> &DetailPanel {
        &self.details
    }

    pub fn summary(&self) -> &SummaryPanel {
        &self.summary
    }

    /// The live analysis result, gated on the dashboard being active.
    pub fn dashboard_content(&self) -> Option<&AnalysisResult> {
        self.store.dashboard_content()
    }

    /// Derived dashboard projections, gated the same way.
    pub fn dashboard_view(&self) -> Option<DashboardView<'_>> {
        self.store.dashboard_content().map(DashboardView::new)
    }

    /// Landing → Upload.
    pub fn start(&mut self) {
        self.store.start();
    }

    /// Validates and stages a candidate archive.
    pub fn stage_archive(&mut self, name: impl Into<String>, bytes: Vec<u8>) -> AppResult<()> {
        self.upload.stage(name, bytes)
    }

    /// Drops the staged archive.
    pub fn clear_archive(&mut self) {
        self.upload.clear();
    }

    /// Submits the staged archive; on success the session enters the
    /// dashboard with the returned result installed.
    pub async fn submit_archive(&mut self) -> AppResult<()> {
        let result = self.upload.submit(&self.client).await?;
        self.store.analysis_complete(result);
        Ok(())
    }

    /// Opens the detail modal for `func` and fetches its enrichment,
    /// scoped under the live result's repo id.
    pub async fn open_function(&self, func: FunctionRecord) -> AppResult<()> {
        let repo_id = self.require_repo_id()?;
        self.details
            .open_details(&self.client, &repo_id, func)
            .await
    }

    /// Closes the detail modal without clearing the selection.
    pub fn close_details(&self) -> AppResult<()> {
        self.details.close()
    }

    /// Requests the session-level AI summary.
    pub async fn generate_summary(&self) -> AppResult<()> {
        let repo_id = self.require_repo_id()?;
        self.summary.generate(&self.client, &repo_id).await
    }

    /// Dashboard → Upload: discards the result and every enrichment.
    pub fn reset(&mut self) -> AppResult<()> {
        self.store.reset();
        self.upload.clear();
        self.details.clear()?;
        self.summary.clear()
    }

    fn require_repo_id(&self) -> AppResult<String> {
        self.store
            .result()
            .map(|result| result.repo_id.clone())
            .ok_or_else(|| AppError::validation("No analysis result loaded"))
    }
}
