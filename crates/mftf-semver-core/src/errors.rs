use crate::model::ArtifactKind;
use thiserror::Error;

/// Result type alias for artifact construction
pub type Result<T> = std::result::Result<T, MalformedArtifactError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, tests and log filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Artifact construction
    /// Two items share a key inside one keyed collection
    DuplicateKey,
    /// Two entities of the same kind share a name
    DuplicateEntity,
    /// An entity name or child key is empty
    MissingIdentifier,

    // Configuration
    /// Classifier configuration could not be parsed
    InvalidConfig,

    // Output
    Serialization,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::DuplicateKey => "ERR_DUPLICATE_KEY",
            ExErrorKind::DuplicateEntity => "ERR_DUPLICATE_ENTITY",
            ExErrorKind::MissingIdentifier => "ERR_MISSING_IDENTIFIER",
            ExErrorKind::InvalidConfig => "ERR_INVALID_CONFIG",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }

    /// True for kinds raised while constructing an artifact tree
    pub fn is_malformed_artifact(&self) -> bool {
        matches!(
            self,
            ExErrorKind::DuplicateKey
                | ExErrorKind::DuplicateEntity
                | ExErrorKind::MissingIdentifier
        )
    }
}

/// Canonical structured error type
///
/// Carries a classification kind for programmatic handling plus optional
/// context (operation, artifact kind, entity name) for diagnostics.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    artifact_kind: Option<ArtifactKind>,
    entity: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            artifact_kind: None,
            entity: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add artifact kind context
    pub fn with_artifact_kind(mut self, kind: ArtifactKind) -> Self {
        self.artifact_kind = Some(kind);
        self
    }

    /// Add entity name context
    pub fn with_entity(mut self, entity: impl Into<String>) -> Self {
        self.entity = Some(entity.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Stable error code of this error's kind
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn artifact_kind(&self) -> Option<ArtifactKind> {
        self.artifact_kind
    }

    pub fn entity(&self) -> Option<&str> {
        self.entity.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(kind) = self.artifact_kind {
            write!(f, " (kind: {})", kind)?;
        }
        if let Some(entity) = &self.entity {
            write!(f, " (entity: {})", entity)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Construction errors raised while assembling an artifact tree
///
/// A malformed artifact aborts classification for its own kind only; the
/// remaining kinds are still compared.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedArtifactError {
    /// A keyed collection holds two items with the same key
    #[error("{kind} '{entity}' has duplicate key '{key}' in {collection}")]
    DuplicateKey {
        kind: ArtifactKind,
        entity: String,
        collection: String,
        key: String,
    },

    /// Two entities of one kind share a name
    #[error("duplicate {kind} entity '{name}'")]
    DuplicateEntity { kind: ArtifactKind, name: String },

    /// An entity name or a child key is empty
    #[error("{kind} '{entity}' is missing an identifier in {collection}")]
    MissingIdentifier {
        kind: ArtifactKind,
        entity: String,
        collection: String,
    },
}

impl MalformedArtifactError {
    /// Artifact kind whose construction failed
    pub fn artifact_kind(&self) -> ArtifactKind {
        match self {
            MalformedArtifactError::DuplicateKey { kind, .. }
            | MalformedArtifactError::DuplicateEntity { kind, .. }
            | MalformedArtifactError::MissingIdentifier { kind, .. } => *kind,
        }
    }

    /// Canonical error kind for this error
    pub fn error_kind(&self) -> ExErrorKind {
        match self {
            MalformedArtifactError::DuplicateKey { .. } => ExErrorKind::DuplicateKey,
            MalformedArtifactError::DuplicateEntity { .. } => ExErrorKind::DuplicateEntity,
            MalformedArtifactError::MissingIdentifier { .. } => ExErrorKind::MissingIdentifier,
        }
    }
}

impl From<MalformedArtifactError> for ExError {
    fn from(err: MalformedArtifactError) -> Self {
        let entity = match &err {
            MalformedArtifactError::DuplicateKey { entity, .. }
            | MalformedArtifactError::MissingIdentifier { entity, .. } => entity.clone(),
            MalformedArtifactError::DuplicateEntity { name, .. } => name.clone(),
        };
        ExError::new(err.error_kind())
            .with_artifact_kind(err.artifact_kind())
            .with_entity(entity)
            .with_message(err.to_string())
    }
}

impl From<serde_json::Error> for ExError {
    fn from(err: serde_json::Error) -> Self {
        ExError::new(ExErrorKind::Serialization).with_message(err.to_string())
    }
}
