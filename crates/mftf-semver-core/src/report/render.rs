//! Text rendering of a classification report.

use super::{ClassificationReport, OverallSeverity};

/// Render a report as plain text
///
/// ```text
/// Mftf (MAJOR)
/// ActionGroup/ActionGroup1 | <actionGroup> ActionGroup1 was removed | M200
///
/// Major change is detected.
/// ```
///
/// Kinds that could not be compared are listed after the records.
pub fn render_report(report: &ClassificationReport) -> String {
    let mut out = String::new();

    out.push_str(&format!("Mftf ({})\n", report.severity));
    for record in &report.records {
        out.push_str(&format!(
            "{}/{} | {} | {}\n",
            record.kind, record.path, record.message, record.code
        ));
    }

    if !report.failures.is_empty() {
        out.push('\n');
        for failure in &report.failures {
            out.push_str(&format!(
                "{} ({}) not compared | {} | {}\n",
                failure.kind, failure.side, failure.message, failure.code
            ));
        }
    }

    out.push('\n');
    out.push_str(closing_line(report.severity));
    out.push('\n');
    out
}

fn closing_line(severity: OverallSeverity) -> &'static str {
    match severity {
        OverallSeverity::Major => "Major change is detected.",
        OverallSeverity::Minor => "Minor change is detected.",
        OverallSeverity::Patch => "Patch change is detected.",
        OverallSeverity::None => "No changes detected.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::ChangeRecord;
    use crate::errors::MalformedArtifactError;
    use crate::model::ArtifactKind;
    use crate::report::{KindFailure, Side};
    use crate::taxonomy::Severity;

    #[test]
    fn test_render_major_report() {
        let report = ClassificationReport::new(
            vec![ChangeRecord {
                kind: ArtifactKind::ActionGroup,
                path: "ActionGroup1".to_string(),
                code: "M200",
                severity: Severity::Major,
                message: "<actionGroup> ActionGroup1 was removed".to_string(),
            }],
            Vec::new(),
        );
        assert_eq!(
            render_report(&report),
            "Mftf (MAJOR)\n\
             ActionGroup/ActionGroup1 | <actionGroup> ActionGroup1 was removed | M200\n\
             \n\
             Major change is detected.\n"
        );
    }

    #[test]
    fn test_render_empty_report() {
        let report = ClassificationReport::new(Vec::new(), Vec::new());
        assert_eq!(
            render_report(&report),
            "Mftf (NONE)\n\nNo changes detected.\n"
        );
    }

    #[test]
    fn test_render_lists_failures() {
        let err = MalformedArtifactError::DuplicateEntity {
            kind: ArtifactKind::Page,
            name: "HomePage".to_string(),
        };
        let failures = vec![KindFailure::new(Side::After, &err)];
        let report = ClassificationReport::new(Vec::new(), failures);
        let text = render_report(&report);
        assert!(text.contains(
            "Page (after) not compared | duplicate Page entity 'HomePage' | ERR_DUPLICATE_ENTITY"
        ));
        assert!(text.ends_with("No changes detected.\n"));
    }
}
