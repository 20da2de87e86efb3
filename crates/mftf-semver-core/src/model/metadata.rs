//! Metadata operations: `<operation>` with a tree of `<field>`, `<object>`
//! and `<array>` children nested to any depth.

use super::collection::{require_name, CollectionContext};
use super::{ArtifactKind, Attributes, Keyed, KeyedItem};
use crate::errors::Result;

/// Parser output for one operation field and its nested children
///
/// Children are unvalidated; they become a [`FieldNode`] tree when the
/// owning operation is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationField {
    pub key: String,
    pub attributes: Attributes,
    pub children: Vec<OperationField>,
}

impl OperationField {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            attributes: Attributes::new(),
            children: Vec::new(),
        }
    }

    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn child(mut self, child: OperationField) -> Self {
        self.children.push(child);
        self
    }
}

/// A validated field of an operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldNode {
    pub key: String,
    pub attributes: Attributes,
    pub children: Keyed<FieldNode>,
}

impl FieldNode {
    /// Number of nodes in this subtree, including itself
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(FieldNode::subtree_len).sum::<usize>()
    }
}

impl KeyedItem for FieldNode {
    fn key(&self) -> &str {
        &self.key
    }
}

/// Validate a list of raw fields into a keyed node collection
///
/// `collection` is the path of the enclosing node (`Fields`,
/// `Fields/address`, ...) so errors point at the offending level.
fn build_nodes(
    raw: Vec<OperationField>,
    kind: ArtifactKind,
    entity: &str,
    collection: &str,
) -> Result<Keyed<FieldNode>> {
    let mut nodes = Vec::with_capacity(raw.len());
    for field in raw {
        let child_collection = format!("{}/{}", collection, field.key);
        let children = build_nodes(field.children, kind, entity, &child_collection)?;
        nodes.push(FieldNode {
            key: field.key,
            attributes: field.attributes,
            children,
        });
    }
    Keyed::try_from_items(
        nodes,
        CollectionContext {
            kind,
            entity,
            collection,
        },
    )
}

/// A metadata operation (`dataType`, `type`, `url`, `method`, ... attributes)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    pub name: String,
    pub attributes: Attributes,
    pub fields: Keyed<FieldNode>,
}

impl Operation {
    pub fn builder(name: impl Into<String>) -> OperationBuilder {
        OperationBuilder {
            name: name.into(),
            attributes: Attributes::new(),
            fields: Vec::new(),
        }
    }
}

impl KeyedItem for Operation {
    fn key(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone)]
pub struct OperationBuilder {
    name: String,
    attributes: Attributes,
    fields: Vec<OperationField>,
}

impl OperationBuilder {
    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn field(mut self, field: OperationField) -> Self {
        self.fields.push(field);
        self
    }

    /// # Errors
    ///
    /// `MissingIdentifier` or `DuplicateKey` at any nesting level
    pub fn build(self) -> Result<Operation> {
        let kind = ArtifactKind::Metadata;
        require_name(kind, &self.name)?;
        let fields = build_nodes(self.fields, kind, &self.name, "Fields")?;
        Ok(Operation {
            name: self.name,
            attributes: self.attributes,
            fields,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::MalformedArtifactError;

    #[test]
    fn test_nested_fields_are_keyed() {
        let op = Operation::builder("createCustomer")
            .field(
                OperationField::new("customer")
                    .attribute("type", "object")
                    .child(OperationField::new("email").attribute("type", "string"))
                    .child(OperationField::new("firstname").attribute("type", "string")),
            )
            .build()
            .unwrap();

        let customer = op.fields.get("customer").unwrap();
        assert_eq!(customer.children.len(), 2);
        assert_eq!(customer.subtree_len(), 3);
    }

    #[test]
    fn test_nested_duplicate_reports_its_level() {
        let err = Operation::builder("op")
            .field(
                OperationField::new("customer")
                    .child(OperationField::new("email"))
                    .child(OperationField::new("email")),
            )
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            MalformedArtifactError::DuplicateKey {
                kind: ArtifactKind::Metadata,
                entity: "op".to_string(),
                collection: "Fields/customer".to_string(),
                key: "email".to_string(),
            }
        );
    }
}
