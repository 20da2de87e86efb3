use serde::{Deserialize, Serialize};

/// The six artifact kinds of an MFTF module
///
/// Declaration order is the order in which kinds appear in a report.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum ArtifactKind {
    ActionGroup,
    Test,
    Page,
    Section,
    Data,
    Metadata,
}

impl ArtifactKind {
    /// Every kind, in report order
    pub const ALL: [ArtifactKind; 6] = [
        ArtifactKind::ActionGroup,
        ArtifactKind::Test,
        ArtifactKind::Page,
        ArtifactKind::Section,
        ArtifactKind::Data,
        ArtifactKind::Metadata,
    ];

    /// Label used as the leading path segment in rendered reports
    pub fn label(&self) -> &'static str {
        match self {
            ArtifactKind::ActionGroup => "ActionGroup",
            ArtifactKind::Test => "Test",
            ArtifactKind::Page => "Page",
            ArtifactKind::Section => "Section",
            ArtifactKind::Data => "Data",
            ArtifactKind::Metadata => "Metadata",
        }
    }
}

impl std::fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
