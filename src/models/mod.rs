//! Data Models
//!
//! Typed records for everything crossing the analysis-service wire.

pub mod analysis;
pub mod detail;

pub use analysis::{
    AnalysisResult, AnalysisSummary, FileRecord, FunctionKind, FunctionRecord, RiskLevel,
};
pub use detail::{CallSite, FunctionDetail, FunctionKey, SummaryResponse};
