use super::collection::{require_name, CollectionContext};
use super::{ArtifactKind, Attributes, Keyed, KeyedItem};
use crate::errors::Result;

/// Reference from a page to a section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionRef {
    pub name: String,
    pub attributes: Attributes,
}

impl SectionRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Attributes::new(),
        }
    }

    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }
}

impl KeyedItem for SectionRef {
    fn key(&self) -> &str {
        &self.name
    }
}

/// A page: `url`, `module`, `area` attributes plus the sections it contains
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub name: String,
    pub attributes: Attributes,
    pub sections: Keyed<SectionRef>,
}

impl Page {
    pub fn builder(name: impl Into<String>) -> PageBuilder {
        PageBuilder {
            name: name.into(),
            attributes: Attributes::new(),
            sections: Vec::new(),
        }
    }
}

impl KeyedItem for Page {
    fn key(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone)]
pub struct PageBuilder {
    name: String,
    attributes: Attributes,
    sections: Vec<SectionRef>,
}

impl PageBuilder {
    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn section(mut self, section: SectionRef) -> Self {
        self.sections.push(section);
        self
    }

    /// # Errors
    ///
    /// `MissingIdentifier` or `DuplicateKey` for a malformed name or section list
    pub fn build(self) -> Result<Page> {
        let kind = ArtifactKind::Page;
        require_name(kind, &self.name)?;
        let sections = Keyed::try_from_items(
            self.sections,
            CollectionContext {
                kind,
                entity: &self.name,
                collection: "Sections",
            },
        )?;
        Ok(Page {
            name: self.name,
            attributes: self.attributes,
            sections,
        })
    }
}
