//! LegacyMap Client Library
//!
//! Client-side state and API bindings for the LegacyMap code-analysis
//! service. It includes:
//! - The analysis-session state machine (landing → upload → dashboard)
//! - Typed wire records for the analysis payload and its enrichments
//! - Derived dashboard views (search filter, top-risk files)
//! - On-demand detail and AI-summary enrichment with a stale-response
//!   guard
//!
//! The analysis engine itself (parsing, call graphs, risk scoring,
//! summaries) is an external HTTP collaborator; this crate only models
//! the contracts the client relies on.

pub mod models;
pub mod services;
pub mod state;
pub mod utils;

pub use models::{
    AnalysisResult, AnalysisSummary, CallSite, FileRecord, FunctionDetail, FunctionKey,
    FunctionKind, FunctionRecord, RiskLevel,
};
pub use services::api::{AnalysisApiClient, ApiClientConfig};
pub use services::session::{
    DashboardView, DetailPanel, SelectedFunction, SessionStore, StagedArchive, SummaryPanel,
    UploadFlow, ViewMode, DEFAULT_TOP_RISK_COUNT, SUMMARY_FAILURE_MESSAGE,
};
pub use state::AnalysisSession;
pub use utils::error::{AppError, AppResult};
