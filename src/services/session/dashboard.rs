//! Dashboard View Model
//!
//! Pure projections over the live analysis result: the search-filtered
//! function list and the top-N risk-sorted files. Inputs are small, so
//! everything is recomputed on demand with no caching.

use std::cmp::Ordering;

use crate::models::{AnalysisResult, FileRecord, FunctionRecord};

/// Number of files shown in the high-risk panel.
pub const DEFAULT_TOP_RISK_COUNT: usize = 5;

/// Read-only projections over a borrowed [`AnalysisResult`].
#[derive(Debug, Clone, Copy)]
pub struct DashboardView<'a> {
    result: &'a AnalysisResult,
}

impl<'a> DashboardView<'a> {
    pub fn new(result: &'a AnalysisResult) -> Self {
        Self { result }
    }

    /// Functions whose `name` or `file` contains `term`, case-insensitively.
    ///
    /// A pure filter: original order is always preserved, and an empty
    /// term yields the full sequence.
    pub fn filtered_functions(&self, term: &str) -> Vec<&'a FunctionRecord> {
        if term.is_empty() {
            return self.result.functions.iter().collect();
        }
        let needle = term.to_lowercase();
        self.result
            .functions
            .iter()
            .filter(|func| {
                func.name.to_lowercase().contains(&needle)
                    || func.file.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// The `n` highest-risk files, sorted by `risk_score` descending.
    ///
    /// Risk scores commonly collide, so the sort must be stable: among
    /// equal scores, original relative order is preserved. The source
    /// sequence is never mutated.
    pub fn top_risk_files(&self, n: usize) -> Vec<&'a FileRecord> {
        let mut ranked: Vec<&FileRecord> = self.result.files.iter().collect();
        // Vec::sort_by is stable; NaN compares as equal to keep it total.
        ranked.sort_by(|a, b| {
            b.risk_score
                .partial_cmp(&a.risk_score)
                .unwrap_or(Ordering::Equal)
        });
        ranked.truncate(n);
        ranked
    }

    /// (shown, total) function counts for the given search term.
    pub fn function_counts(&self, term: &str) -> (usize, usize) {
        (
            self.filtered_functions(term).len(),
            self.result.functions.len(),
        )
    }
}
