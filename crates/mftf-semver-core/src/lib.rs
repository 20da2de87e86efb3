//! MFTF semver core - structural diff and semantic-version classification
//!
//! This crate compares two versions of an MFTF artifact tree (action groups,
//! tests, pages, sections, data entities and metadata operations) and assigns
//! every structural difference a stable taxonomy code and a MAJOR, MINOR or
//! PATCH severity:
//! - Typed entity model with keyed child collections
//! - Key-based matching, independent of declaration order
//! - One differ per artifact kind, reporting at the deepest level
//! - Closed change taxonomy with stable codes
//! - Deterministic, serializable classification reports
//!
//! Loading and parsing artifact files is left to the caller; trees are
//! assembled through [`model::TreeBuilder`].
//!
//! ```
//! use mftf_semver_core::model::{ActionGroup, ArtifactTree, Step};
//! use mftf_semver_core::report::OverallSeverity;
//!
//! let before = ArtifactTree::builder()
//!     .add_result(ActionGroup::builder("LoginAsAdmin")
//!         .action(Step::new("fill", "fillField").attribute("userInput", "admin"))
//!         .build())
//!     .build();
//! let after = ArtifactTree::builder()
//!     .add_result(ActionGroup::builder("LoginAsAdmin")
//!         .action(Step::new("fill", "fillField").attribute("userInput", "root"))
//!         .build())
//!     .build();
//!
//! let report = mftf_semver_core::classify(&before, &after);
//! assert_eq!(report.severity, OverallSeverity::Patch);
//! assert_eq!(report.records[0].code, "M204");
//! ```

pub mod classifier;
pub mod config;
pub mod diff;
pub mod errors;
pub mod logging_facility;
pub mod matcher;
pub mod model;
pub mod report;
pub mod taxonomy;

/// Logging schema and correlation types shared with embedding applications
pub use mftf_semver_core_types as core_types;

// Re-export commonly used types
pub use classifier::{classify, Classifier};
pub use config::ClassifierConfig;
pub use diff::ChangeRecord;
pub use errors::{ExError, ExErrorKind, MalformedArtifactError, Result};
pub use model::{ArtifactKind, ArtifactTree};
pub use report::{render_report, ClassificationReport, KindFailure, OverallSeverity};
pub use taxonomy::{ChangeShape, Severity};
