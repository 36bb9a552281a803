//! The check contract.
//!
//! A check is a named, described, grouped unit of lint logic. Its single
//! entry point consumes a [`ClusterSnapshot`] and yields warning and error
//! diagnostics; internal faults travel separately as [`CheckError`] and are
//! never folded into either diagnostic list.

use crate::kube::ClusterSnapshot;
use crate::types::Diagnostic;

/// A unit of lint logic, resolvable by name or group.
///
/// Checks are stateless: `run` reads only the snapshot it is given, so a
/// single instance may be invoked repeatedly, against the same or different
/// snapshots, from parallel threads.
pub trait Check: Send + Sync {
    /// Stable unique identifier, e.g. `"fully-qualified-image"`.
    fn name(&self) -> &str;

    /// One-line human-readable summary.
    fn description(&self) -> &str;

    /// Category tags used by an orchestrator to select subsets of checks.
    fn groups(&self) -> Vec<&str>;

    /// Run the check against a snapshot.
    fn run(&self, snapshot: &ClusterSnapshot) -> Result<CheckReport, CheckError>;
}

/// The diagnostics accumulated by one check run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    /// Best-practice deviations.
    pub warnings: Vec<Diagnostic>,
    /// Structurally invalid input.
    pub errors: Vec<Diagnostic>,
}

impl CheckReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the run produced no diagnostics at all.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty() && self.errors.is_empty()
    }

    /// Total number of diagnostics.
    pub fn len(&self) -> usize {
        self.warnings.len() + self.errors.len()
    }

    /// Whether the report is empty. Same as [`CheckReport::is_clean`].
    pub fn is_empty(&self) -> bool {
        self.is_clean()
    }

    /// Absorb another report, e.g. when aggregating across checks.
    pub fn merge(&mut self, other: CheckReport) {
        self.warnings.extend(other.warnings);
        self.errors.extend(other.errors);
    }
}

/// Internal fault from a check run.
///
/// Reserved for truly exceptional conditions; per-container classification
/// outcomes are diagnostics, never faults.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    /// The snapshot carried no pod listing at all.
    #[error("cluster snapshot has no pod listing")]
    MissingPods,

    /// Unexpected structural inconsistency in the snapshot.
    #[error("internal check failure: {0}")]
    Internal(String),
}
