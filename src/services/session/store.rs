//! Session Store
//!
//! The view-mode state machine and the single live analysis result.
//! All downstream state derives from here.

use crate::models::AnalysisResult;

/// Which surface the session is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Landing,
    Upload,
    Dashboard,
}

/// Holds the current view mode and the live analysis result.
///
/// Exactly one result is live at a time; `reset` discards it entirely.
#[derive(Debug)]
pub struct SessionStore {
    mode: ViewMode,
    result: Option<AnalysisResult>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            mode: ViewMode::Landing,
            result: None,
        }
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    /// Landing → Upload. No data change.
    pub fn start(&mut self) {
        self.mode = ViewMode::Upload;
    }

    /// Upload → Dashboard, installing the analysis result.
    ///
    /// A re-upload replaces the prior result wholesale.
    pub fn analysis_complete(&mut self, result: AnalysisResult) {
        self.result = Some(result);
        self.mode = ViewMode::Dashboard;
    }

    /// Dashboard → Upload, clearing the result.
    pub fn reset(&mut self) {
        self.result = None;
        self.mode = ViewMode::Upload;
    }

    /// The result, but only while the dashboard is the active surface.
    ///
    /// A `Dashboard` mode with no result is an invariant violation that
    /// the transition contract makes unreachable; the consuming surface
    /// must not render dashboard content in that case, so this returns
    /// `None` rather than panicking.
    pub fn dashboard_content(&self) -> Option<&AnalysisResult> {
        match self.mode {
            ViewMode::Dashboard => self.result.as_ref(),
            _ => None,
        }
    }
}
