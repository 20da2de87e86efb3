//! Change records and the paths that locate them.

use crate::model::ArtifactKind;
use crate::taxonomy::{self, ChangeShape, Severity};
use serde::Serialize;

/// Location of a change inside an artifact tree, relative to its kind
///
/// Paths are compositional: every nesting level appends one segment.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityPath {
    segments: Vec<String>,
}

impl EntityPath {
    /// Path of an entity
    pub fn root(name: impl Into<String>) -> Self {
        Self {
            segments: vec![name.into()],
        }
    }

    /// Path one level below this one
    pub fn child(&self, segment: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment.into());
        Self { segments }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Nesting depth; an entity path has depth 1
    pub fn depth(&self) -> usize {
        self.segments.len()
    }
}

impl std::fmt::Display for EntityPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.segments.join("/"))
    }
}

/// One classified structural difference
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangeRecord {
    pub kind: ArtifactKind,
    /// Slash-joined path relative to the kind (`AG1/Arguments/arg1`)
    pub path: String,
    /// Stable taxonomy code
    pub code: &'static str,
    pub severity: Severity,
    pub message: String,
}

impl ChangeRecord {
    /// Sort key: kind, then path, then code
    pub fn sort_key(&self) -> (ArtifactKind, &str, &str) {
        (self.kind, self.path.as_str(), self.code)
    }
}

/// Collects the records produced while diffing one entity
#[derive(Debug)]
pub struct Recorder<'a> {
    entity: &'a str,
    records: Vec<ChangeRecord>,
}

impl<'a> Recorder<'a> {
    pub fn new(entity: &'a str) -> Self {
        Self {
            entity,
            records: Vec::new(),
        }
    }

    /// Classify a change through the taxonomy and record it
    ///
    /// `target` is the key of the innermost item the change is about.
    pub fn emit(&mut self, shape: impl Into<ChangeShape>, path: &EntityPath, target: &str) {
        let shape = shape.into();
        let entry = taxonomy::entry(shape);
        self.records.push(ChangeRecord {
            kind: shape.kind(),
            path: path.to_string(),
            code: entry.code,
            severity: entry.severity,
            message: entry.render(self.entity, target),
        });
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn into_records(self) -> Vec<ChangeRecord> {
        self.records
    }
}
