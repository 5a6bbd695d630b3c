//! Function Detail Types
//!
//! Typed records for the per-function enrichment returned by
//! `GET /function-details/{repo_id}/{file}/{name}` and the summary
//! envelope returned by `POST /generate-summary/{repo_id}`.

use serde::{Deserialize, Serialize};

use super::analysis::FunctionRecord;

/// Identity of a function within a result: its file path plus its name.
///
/// Used to guard detail merges against out-of-order responses.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FunctionKey {
    pub file: String,
    pub name: String,
}

impl FunctionKey {
    pub fn of(record: &FunctionRecord) -> Self {
        Self {
            file: record.file.clone(),
            name: record.name.clone(),
        }
    }
}

impl std::fmt::Display for FunctionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}::{}", self.file, self.name)
    }
}

/// A location where a function is invoked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallSite {
    pub file: String,
    /// 1-based line numbers; may be empty.
    #[serde(default)]
    pub lines: Vec<u32>,
    /// Invocations attributed to that file.
    pub count: u64,
}

/// On-demand enrichment of a [`FunctionRecord`].
///
/// `call_count` is expected but not required to equal the sum of the
/// per-site counts; the client displays it as received.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FunctionDetail {
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub called_in: Vec<CallSite>,
    /// Dependency names; insertion order preserved for display.
    #[serde(default)]
    pub dependencies: Vec<String>,
    #[serde(default)]
    pub call_count: u64,
}

/// Wire envelope for the AI-generated narrative summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub summary: String,
}
