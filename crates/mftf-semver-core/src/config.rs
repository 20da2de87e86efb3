//! Classifier configuration.

use crate::errors::{ExError, ExErrorKind};
use crate::model::ArtifactKind;
use serde::{Deserialize, Serialize};

/// Configuration of one classification run
///
/// ```toml
/// parallel = true
/// kinds = ["ActionGroup", "Test"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct ClassifierConfig {
    /// Run the per-kind differs on the rayon pool. Default: false.
    pub parallel: Option<bool>,
    /// Kinds to compare. Empty means every kind.
    pub kinds: Vec<ArtifactKind>,
}

impl ClassifierConfig {
    /// Parse a configuration from TOML text
    ///
    /// # Errors
    ///
    /// `InvalidConfig` when the text is not valid TOML or names an unknown
    /// key or artifact kind.
    pub fn from_toml_str(text: &str) -> Result<Self, ExError> {
        toml::from_str(text).map_err(|e| {
            ExError::new(ExErrorKind::InvalidConfig)
                .with_op("load_config")
                .with_message(e.to_string())
        })
    }

    /// Returns whether differs run in parallel, defaulting to false.
    pub fn effective_parallel(&self) -> bool {
        self.parallel.unwrap_or(false)
    }

    /// Kinds to compare, in report order and without repeats
    pub fn enabled_kinds(&self) -> Vec<ArtifactKind> {
        if self.kinds.is_empty() {
            return ArtifactKind::ALL.to_vec();
        }
        ArtifactKind::ALL
            .into_iter()
            .filter(|kind| self.kinds.contains(kind))
            .collect()
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = Some(parallel);
        self
    }

    pub fn with_kinds(mut self, kinds: impl IntoIterator<Item = ArtifactKind>) -> Self {
        self.kinds = kinds.into_iter().collect();
        self
    }
}
