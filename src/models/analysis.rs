//! Analysis Payload Types
//!
//! Typed records for the bulk analysis document returned by
//! `POST /upload-analyze`. Wire field names are snake_case and coincide
//! with the Rust field names; payloads are parsed-or-rejected at the
//! network boundary rather than passed through untyped.

use serde::{Deserialize, Serialize};

/// Categorical risk bucket computed by the analysis service.
///
/// Treated as authoritative: the client never recomputes it from
/// `risk_score`, even if the two disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    #[default]
    Low,
    Medium,
    High,
}

/// Whether a discovered symbol is a free function or a class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FunctionKind {
    Function,
    Class,
}

/// Aggregate counters for one analyzed codebase.
///
/// Absent fields default to zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisSummary {
    #[serde(default)]
    pub total_files: u64,
    #[serde(default)]
    pub total_functions: u64,
    #[serde(default)]
    pub total_loc: u64,
    #[serde(default)]
    pub average_risk_score: f64,
}

/// Per-file metrics and risk assessment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileRecord {
    /// Path within the analyzed archive, unique within a result.
    pub path: String,
    /// Lines of code.
    #[serde(default)]
    pub loc: u64,
    /// Number of imports in the file.
    #[serde(default)]
    pub imports_count: u64,
    /// Externally computed risk metric.
    #[serde(default)]
    pub risk_score: f64,
    /// Categorical bucket for `risk_score`.
    #[serde(default)]
    pub risk_level: RiskLevel,
}

impl FileRecord {
    /// Final path component, for compact display.
    pub fn file_name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }
}

/// A discovered function or class, as returned by the bulk analysis call.
///
/// `file` references a `FileRecord::path` but is not enforced as a hard
/// foreign key; dangling references are tolerated for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionRecord {
    pub name: String,
    pub file: String,
    #[serde(rename = "type")]
    pub kind: FunctionKind,
}

/// The bulk analysis document for one uploaded codebase.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Opaque identifier scoping subsequent detail/summary requests.
    pub repo_id: String,
    #[serde(default)]
    pub summary: AnalysisSummary,
    /// File records in the order the service returned them; derived
    /// views re-sort copies, never this sequence.
    #[serde(default)]
    pub files: Vec<FileRecord>,
    #[serde(default)]
    pub functions: Vec<FunctionRecord>,
}
