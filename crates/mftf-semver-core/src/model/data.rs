//! Data entities: `<entity>` with its `<data>`, `<array>`, `<requiredEntity>`
//! and `<var>` children.

use super::collection::{require_name, CollectionContext};
use super::{ArtifactKind, Attributes, Keyed, KeyedItem};
use crate::errors::Result;

/// A `<data key="...">value</data>` field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataField {
    pub key: String,
    pub value: String,
}

impl DataField {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl KeyedItem for DataField {
    fn key(&self) -> &str {
        &self.key
    }
}

/// One `<item>` of an array, identified by its text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayItem {
    pub value: String,
    /// Position of the first occurrence in the declared array
    pub position: usize,
}

impl KeyedItem for ArrayItem {
    fn key(&self) -> &str {
        &self.value
    }
}

/// An `<array key="...">` holding sequential items
#[derive(Debug, Clone, Eq)]
pub struct DataArray {
    pub key: String,
    pub items: Keyed<ArrayItem>,
}

/// Arrays are equal when they hold the same item values; positions are
/// diagnostics only.
impl PartialEq for DataArray {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.items.keys().eq(other.items.keys())
    }
}

impl KeyedItem for DataArray {
    fn key(&self) -> &str {
        &self.key
    }
}

/// A `<requiredEntity>` reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredEntity {
    pub name: String,
    /// Typically just `type`
    pub attributes: Attributes,
}

impl RequiredEntity {
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

impl KeyedItem for RequiredEntity {
    fn key(&self) -> &str {
        &self.name
    }
}

/// A `<var key="..." entityType="..." entityKey="..."/>` reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataVar {
    pub key: String,
    pub attributes: Attributes,
}

impl DataVar {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            attributes: Attributes::new(),
        }
    }

    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }
}

impl KeyedItem for DataVar {
    fn key(&self) -> &str {
        &self.key
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataEntity {
    pub name: String,
    pub attributes: Attributes,
    pub fields: Keyed<DataField>,
    pub arrays: Keyed<DataArray>,
    pub required_entities: Keyed<RequiredEntity>,
    pub vars: Keyed<DataVar>,
}

impl DataEntity {
    pub fn builder(name: impl Into<String>) -> DataEntityBuilder {
        DataEntityBuilder {
            name: name.into(),
            attributes: Attributes::new(),
            fields: Vec::new(),
            arrays: Vec::new(),
            required_entities: Vec::new(),
            vars: Vec::new(),
        }
    }
}

impl KeyedItem for DataEntity {
    fn key(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone)]
pub struct DataEntityBuilder {
    name: String,
    attributes: Attributes,
    fields: Vec<DataField>,
    arrays: Vec<(String, Vec<String>)>,
    required_entities: Vec<RequiredEntity>,
    vars: Vec<DataVar>,
}

impl DataEntityBuilder {
    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn field(mut self, field: DataField) -> Self {
        self.fields.push(field);
        self
    }

    /// Add an array with its items in declaration order
    pub fn array<I, S>(mut self, key: impl Into<String>, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.arrays
            .push((key.into(), items.into_iter().map(Into::into).collect()));
        self
    }

    pub fn required_entity(mut self, entity: RequiredEntity) -> Self {
        self.required_entities.push(entity);
        self
    }

    pub fn var(mut self, var: DataVar) -> Self {
        self.vars.push(var);
        self
    }

    /// # Errors
    ///
    /// - `MissingIdentifier` for an empty name, key or array item
    /// - `DuplicateKey` for repeated field, array, required-entity or var keys
    pub fn build(self) -> Result<DataEntity> {
        let kind = ArtifactKind::Data;
        require_name(kind, &self.name)?;
        let ctx = |collection: &'static str| CollectionContext {
            kind,
            entity: &self.name,
            collection,
        };

        let mut arrays = Vec::with_capacity(self.arrays.len());
        for (key, values) in self.arrays {
            let items = values
                .into_iter()
                .enumerate()
                .map(|(position, value)| ArrayItem { value, position });
            let items = Keyed::try_from_sequence(items, ctx("Items"))?;
            arrays.push(DataArray { key, items });
        }

        let fields = Keyed::try_from_items(self.fields, ctx("Fields"))?;
        let arrays = Keyed::try_from_items(arrays, ctx("Arrays"))?;
        let required_entities =
            Keyed::try_from_items(self.required_entities, ctx("RequiredEntities"))?;
        let vars = Keyed::try_from_items(self.vars, ctx("Vars"))?;
        Ok(DataEntity {
            name: self.name,
            attributes: self.attributes,
            fields,
            arrays,
            required_entities,
            vars,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::MalformedArtifactError;

    #[test]
    fn test_array_items_keep_first_position() {
        let entity = DataEntity::builder("Customer")
            .array("street", ["one", "two", "one"])
            .build()
            .unwrap();
        let array = entity.arrays.get("street").unwrap();
        assert_eq!(array.items.len(), 2);
        assert_eq!(array.items.get("one").map(|i| i.position), Some(0));
        assert_eq!(array.items.get("two").map(|i| i.position), Some(1));
    }

    #[test]
    fn test_array_equality_ignores_item_order() {
        let a = DataEntity::builder("E").array("k", ["x", "y"]).build().unwrap();
        let b = DataEntity::builder("E").array("k", ["y", "x"]).build().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_duplicate_field_is_rejected() {
        let err = DataEntity::builder("E")
            .field(DataField::new("email", "a@example.com"))
            .field(DataField::new("email", "b@example.com"))
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            MalformedArtifactError::DuplicateKey { ref collection, .. } if collection == "Fields"
        ));
    }
}
