//! Classification driver.
//!
//! The classifier runs one differ per enabled artifact kind, collects the
//! records, and assembles a [`ClassificationReport`]. A kind that failed to
//! build on either side becomes a [`KindFailure`]; the other kinds are still
//! compared.

use crate::config::ClassifierConfig;
use crate::core_types::RunId;
use crate::diff::{
    ActionGroupDiffer, ChangeRecord, DataDiffer, Differ, MetadataDiffer, PageDiffer,
    SectionDiffer, TestDiffer,
};
use crate::model::{ArtifactKind, ArtifactTree};
use crate::report::{ClassificationReport, KindFailure, Side};
use crate::{log_op_end, log_op_error, log_op_start};
use rayon::prelude::*;
use std::time::Instant;

/// Outcome of comparing one kind
type KindOutcome = Result<Vec<ChangeRecord>, Vec<KindFailure>>;

/// Compares two artifact trees and classifies every difference
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    config: ClassifierConfig,
}

impl Classifier {
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Classify all differences between `before` and `after`
    ///
    /// The report is identical whether or not the differs ran in parallel.
    pub fn classify(&self, before: &ArtifactTree, after: &ArtifactTree) -> ClassificationReport {
        let run_id = RunId::new();
        let kinds = self.config.enabled_kinds();
        log_op_start!(
            "classify",
            run_id = run_id.as_str(),
            kinds = kinds.len() as u64,
            parallel = self.config.effective_parallel()
        );
        let start = Instant::now();

        let outcomes: Vec<KindOutcome> = if self.config.effective_parallel() {
            kinds
                .par_iter()
                .map(|kind| diff_kind(*kind, before, after, &run_id))
                .collect()
        } else {
            kinds
                .iter()
                .map(|kind| diff_kind(*kind, before, after, &run_id))
                .collect()
        };

        let mut records = Vec::new();
        let mut failures = Vec::new();
        for outcome in outcomes {
            match outcome {
                Ok(kind_records) => records.extend(kind_records),
                Err(kind_failures) => failures.extend(kind_failures),
            }
        }
        let report = ClassificationReport::new(records, failures);

        log_op_end!(
            "classify",
            duration_ms = start.elapsed().as_millis() as u64,
            run_id = run_id.as_str(),
            record_count = report.records.len() as u64,
            severity = report.severity.label()
        );
        report
    }
}

/// Classify with the default configuration
pub fn classify(before: &ArtifactTree, after: &ArtifactTree) -> ClassificationReport {
    Classifier::default().classify(before, after)
}

fn diff_kind(
    kind: ArtifactKind,
    before: &ArtifactTree,
    after: &ArtifactTree,
    run_id: &RunId,
) -> KindOutcome {
    match kind {
        ArtifactKind::ActionGroup => run_differ(&ActionGroupDiffer, before, after, run_id),
        ArtifactKind::Test => run_differ(&TestDiffer, before, after, run_id),
        ArtifactKind::Page => run_differ(&PageDiffer, before, after, run_id),
        ArtifactKind::Section => run_differ(&SectionDiffer, before, after, run_id),
        ArtifactKind::Data => run_differ(&DataDiffer, before, after, run_id),
        ArtifactKind::Metadata => run_differ(&MetadataDiffer, before, after, run_id),
    }
}

fn run_differ<D: Differ>(
    differ: &D,
    before: &ArtifactTree,
    after: &ArtifactTree,
    run_id: &RunId,
) -> KindOutcome {
    let kind = D::KIND.label();
    log_op_start!("diff_kind", run_id = run_id.as_str(), kind = kind);
    let start = Instant::now();

    let old = D::slot(before);
    let new = D::slot(after);
    let mut failures = Vec::new();
    for (side, slot) in [(Side::Before, old), (Side::After, new)] {
        if let Err(err) = slot {
            log_op_error!(
                "diff_kind",
                err.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                run_id = run_id.as_str(),
                kind = kind,
                side = %side
            );
            failures.push(KindFailure::new(side, err));
        }
    }

    match (old, new) {
        (Ok(old), Ok(new)) => {
            let records = differ.diff_collection(old, new);
            log_op_end!(
                "diff_kind",
                duration_ms = start.elapsed().as_millis() as u64,
                run_id = run_id.as_str(),
                kind = kind,
                record_count = records.len() as u64
            );
            Ok(records)
        }
        _ => Err(failures),
    }
}
