//! Detail Enrichment
//!
//! Per-function detail fetches with independent loading state. Fetches
//! for different functions are not interlocked; out-of-order completion
//! is handled by comparing each response's target identity against the
//! currently selected function before merging. There is no cancellation
//! primitive; a superseded response is simply dropped.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::models::{FunctionDetail, FunctionKey, FunctionRecord};
use crate::services::api::AnalysisApiClient;
use crate::utils::error::{AppError, AppResult};

/// The currently inspected function: the base record, plus detail once
/// (and if) the enrichment fetch lands.
#[derive(Debug, Clone)]
pub struct SelectedFunction {
    pub record: FunctionRecord,
    pub detail: Option<FunctionDetail>,
}

impl SelectedFunction {
    pub fn key(&self) -> FunctionKey {
        FunctionKey::of(&self.record)
    }
}

#[derive(Debug, Default)]
struct DetailPanelState {
    selected: Option<SelectedFunction>,
    loading: bool,
    modal_open: bool,
}

/// Drives the function-detail modal.
///
/// Cloned handles share state, so two in-flight fetches can genuinely
/// race; `apply` is the single merge point and enforces the identity
/// guard.
#[derive(Debug, Clone, Default)]
pub struct DetailPanel {
    inner: Arc<Mutex<DetailPanelState>>,
}

impl DetailPanel {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> AppResult<MutexGuard<'_, DetailPanelState>> {
        self.inner
            .lock()
            .map_err(|_| AppError::internal("Detail panel mutex poisoned"))
    }

    /// Starts inspecting a function.
    ///
    /// Synchronously installs the base record (so the modal can render a
    /// name immediately), opens the modal, and raises the loading flag.
    /// Returns the request's identity for the later [`apply`] call.
    ///
    /// [`apply`]: DetailPanel::apply
    pub fn begin(&self, func: FunctionRecord) -> AppResult<FunctionKey> {
        let key = FunctionKey::of(&func);
        let mut state = self.lock()?;
        state.selected = Some(SelectedFunction {
            record: func,
            detail: None,
        });
        state.modal_open = true;
        state.loading = true;
        Ok(key)
    }

    /// Lands the outcome of a detail fetch.
    ///
    /// If the selection has moved on since the fetch was fired, the
    /// response is stale and dropped without touching the newer request's
    /// loading flag. For the live request, loading is cleared on both
    /// outcomes: success merges the detail non-destructively, failure
    /// keeps the base record showing and is logged, never surfaced.
    pub fn apply(&self, key: &FunctionKey, outcome: AppResult<FunctionDetail>) -> AppResult<()> {
        let mut state = self.lock()?;

        let is_current = state
            .selected
            .as_ref()
            .map(|sel| sel.key() == *key)
            .unwrap_or(false);
        if !is_current {
            tracing::debug!("[Details] Dropping stale detail response for {}", key);
            return Ok(());
        }

        state.loading = false;
        match outcome {
            Ok(detail) => {
                if let Some(selected) = state.selected.as_mut() {
                    selected.detail = Some(detail);
                }
            }
            Err(err) => {
                tracing::warn!("[Details] Failed to fetch details for {}: {}", key, err);
            }
        }
        Ok(())
    }

    /// Opens the modal for `func` and fetches its detail.
    ///
    /// Composes [`begin`] → GET → [`apply`]; a transport failure reaches
    /// `apply` as an outcome rather than propagating, so the caller never
    /// sees enrichment errors.
    ///
    /// [`begin`]: DetailPanel::begin
    /// [`apply`]: DetailPanel::apply
    pub async fn open_details(
        &self,
        client: &AnalysisApiClient,
        repo_id: &str,
        func: FunctionRecord,
    ) -> AppResult<()> {
        let key = self.begin(func)?;
        let outcome = client
            .function_details(repo_id, &key.file, &key.name)
            .await;
        self.apply(&key, outcome)
    }

    /// Closes the modal without clearing the selection, so a fade-out or
    /// reopen displays the last-known value.
    pub fn close(&self) -> AppResult<()> {
        self.lock()?.modal_open = false;
        Ok(())
    }

    /// Discards the selection entirely (session reset).
    pub fn clear(&self) -> AppResult<()> {
        let mut state = self.lock()?;
        state.selected = None;
        state.loading = false;
        state.modal_open = false;
        Ok(())
    }

    pub fn selected(&self) -> AppResult<Option<SelectedFunction>> {
        Ok(self.lock()?.selected.clone())
    }

    pub fn is_loading(&self) -> AppResult<bool> {
        Ok(self.lock()?.loading)
    }

    pub fn is_open(&self) -> AppResult<bool> {
        Ok(self.lock()?.modal_open)
    }
}
