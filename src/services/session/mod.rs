//! Analysis Session Services
//!
//! The client-side analysis-session state machine and its satellites:
//! view-mode transitions, upload staging, dashboard projections, and
//! the two enrichment panels.

pub mod dashboard;
pub mod details;
pub mod store;
pub mod summary;
pub mod upload;

pub use dashboard::{DashboardView, DEFAULT_TOP_RISK_COUNT};
pub use details::{DetailPanel, SelectedFunction};
pub use store::{SessionStore, ViewMode};
pub use summary::{SummaryPanel, SUMMARY_FAILURE_MESSAGE};
pub use upload::{StagedArchive, UploadFlow};
