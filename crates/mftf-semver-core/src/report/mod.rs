//! Classification output.
//!
//! A [`ClassificationReport`] holds every change record of a run in
//! `(kind, path, code)` order, the per-kind failures that stopped a kind
//! from being compared, and the overall severity. The report serializes
//! deterministically: identical inputs give byte-identical JSON.

pub mod render;

pub use render::render_report;

use crate::diff::ChangeRecord;
use crate::errors::{ExError, MalformedArtifactError};
use crate::model::ArtifactKind;
use crate::taxonomy::Severity;
use serde::Serialize;

/// Worst severity of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OverallSeverity {
    /// No changes at all
    None,
    Patch,
    Minor,
    Major,
}

impl OverallSeverity {
    pub fn label(&self) -> &'static str {
        match self {
            OverallSeverity::None => "NONE",
            OverallSeverity::Patch => "PATCH",
            OverallSeverity::Minor => "MINOR",
            OverallSeverity::Major => "MAJOR",
        }
    }
}

impl From<Severity> for OverallSeverity {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Patch => OverallSeverity::Patch,
            Severity::Minor => OverallSeverity::Minor,
            Severity::Major => OverallSeverity::Major,
        }
    }
}

impl std::fmt::Display for OverallSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Which tree a failure was found in
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Before,
    After,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Before => f.write_str("before"),
            Side::After => f.write_str("after"),
        }
    }
}

/// A kind that could not be compared because one tree failed to build it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KindFailure {
    pub kind: ArtifactKind,
    pub side: Side,
    /// Stable `ERR_*` code of the construction error
    pub code: &'static str,
    pub message: String,
}

impl KindFailure {
    pub fn new(side: Side, err: &MalformedArtifactError) -> Self {
        Self {
            kind: err.artifact_kind(),
            side,
            code: err.error_kind().code(),
            message: err.to_string(),
        }
    }
}

/// Result of classifying two artifact trees
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassificationReport {
    pub records: Vec<ChangeRecord>,
    pub severity: OverallSeverity,
    pub failures: Vec<KindFailure>,
}

impl ClassificationReport {
    /// Assemble a report, ordering records and failures and computing the
    /// overall severity
    pub fn new(mut records: Vec<ChangeRecord>, mut failures: Vec<KindFailure>) -> Self {
        records.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
        failures.sort_by_key(|f| (f.kind, f.side));
        let severity = records
            .iter()
            .map(|r| OverallSeverity::from(r.severity))
            .max()
            .unwrap_or(OverallSeverity::None);
        Self {
            records,
            severity,
            failures,
        }
    }

    /// True when no change was detected and every kind was compared
    pub fn is_unchanged(&self) -> bool {
        self.records.is_empty() && self.failures.is_empty()
    }

    /// Records grouped by severity, MAJOR first; empty groups are omitted
    pub fn by_severity(&self) -> Vec<(Severity, Vec<&ChangeRecord>)> {
        [Severity::Major, Severity::Minor, Severity::Patch]
            .into_iter()
            .filter_map(|severity| {
                let group: Vec<&ChangeRecord> = self
                    .records
                    .iter()
                    .filter(|r| r.severity == severity)
                    .collect();
                (!group.is_empty()).then_some((severity, group))
            })
            .collect()
    }

    /// Number of records with a given severity
    pub fn count(&self, severity: Severity) -> usize {
        self.records.iter().filter(|r| r.severity == severity).count()
    }

    /// Records of one kind, in report order
    pub fn records_for(&self, kind: ArtifactKind) -> impl Iterator<Item = &ChangeRecord> {
        self.records.iter().filter(move |r| r.kind == kind)
    }

    /// Pretty-printed JSON form of the report
    ///
    /// # Errors
    ///
    /// `Serialization` if encoding fails
    pub fn to_json(&self) -> Result<String, ExError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ExError::from(e).with_op("report_to_json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(
        kind: ArtifactKind,
        path: &str,
        code: &'static str,
        severity: Severity,
    ) -> ChangeRecord {
        ChangeRecord {
            kind,
            path: path.to_string(),
            code,
            severity,
            message: String::new(),
        }
    }

    #[test]
    fn test_records_are_sorted_by_kind_path_code() {
        let report = ClassificationReport::new(
            vec![
                record(ArtifactKind::Data, "E1", "M205", Severity::Major),
                record(ArtifactKind::ActionGroup, "B", "M204", Severity::Patch),
                record(ArtifactKind::ActionGroup, "A", "M225", Severity::Minor),
            ],
            Vec::new(),
        );
        let paths: Vec<&str> = report.records.iter().map(|r| r.path.as_str()).collect();
        assert_eq!(paths, vec!["A", "B", "E1"]);
        assert_eq!(report.severity, OverallSeverity::Major);
    }

    #[test]
    fn test_empty_report_has_no_severity() {
        let report = ClassificationReport::new(Vec::new(), Vec::new());
        assert_eq!(report.severity, OverallSeverity::None);
        assert!(report.is_unchanged());
        assert!(report.by_severity().is_empty());
    }

    #[test]
    fn test_by_severity_groups_major_first() {
        let report = ClassificationReport::new(
            vec![
                record(ArtifactKind::Test, "T1", "M237", Severity::Minor),
                record(ArtifactKind::Test, "T2", "M218", Severity::Major),
                record(ArtifactKind::Test, "T3", "M244", Severity::Patch),
                record(ArtifactKind::Test, "T4", "M218", Severity::Major),
            ],
            Vec::new(),
        );
        let groups: Vec<(Severity, usize)> = report
            .by_severity()
            .into_iter()
            .map(|(severity, group)| (severity, group.len()))
            .collect();
        assert_eq!(
            groups,
            vec![
                (Severity::Major, 2),
                (Severity::Minor, 1),
                (Severity::Patch, 1)
            ]
        );
        assert_eq!(report.count(Severity::Major), 2);
    }

    #[test]
    fn test_overall_severity_json() {
        assert_eq!(
            serde_json::to_string(&OverallSeverity::None).unwrap(),
            "\"NONE\""
        );
        assert!(OverallSeverity::Patch > OverallSeverity::None);
    }
}
