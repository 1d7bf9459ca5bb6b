//! Typed component model.
//!
//! This is the normalized form the emitters work against: every dynamic
//! aspect of the JSON documents has been resolved (exposure variant, overload
//! lists, descriptions), and member maps are ordered so emission is
//! lexicographic by member name regardless of JSON key order.

use std::collections::{BTreeMap, HashMap};

use crate::error::GenerateError;

/// The implicit root include present on nearly every component. It is
/// excluded when computing the single-supertype constraint.
pub const UNIVERSAL_BASE: &str = "NativeObject";

/// How a component is exposed in the generated declarations. Decided once
/// during normalization from the `type` / `object` keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Exposure {
    /// Instantiable class only (`type`).
    Class,
    /// Singleton value only (`object`).
    Singleton {
        /// Name of the top-level value binding.
        object_name: String,
    },
    /// Instantiable class additionally exposed as a singleton value
    /// (`type` and `object`).
    ClassAndSingleton {
        /// Name of the top-level value binding.
        object_name: String,
    },
}

impl Exposure {
    /// The singleton binding name, if the component declares one.
    pub fn object_name(&self) -> Option<&str> {
        match self {
            Exposure::Class => None,
            Exposure::Singleton { object_name } | Exposure::ClassAndSingleton { object_name } => {
                Some(object_name)
            }
        }
    }
}

/// A normalized component definition.
#[derive(Debug, Clone)]
pub struct ComponentSchema {
    /// Component identity, unique across the definition set.
    pub name: String,
    /// Class/singleton exposure variant.
    pub exposure: Exposure,
    /// Component-level description prose.
    pub description: Option<String>,
    /// Structurally included component names, in declared order.
    pub includes: Vec<String>,
    /// Plain fields, keyed by name.
    pub fields: BTreeMap<String, MemberSpec>,
    /// Methods, keyed by name; overloads keep their declared order.
    pub methods: BTreeMap<String, Vec<Overload>>,
    /// Settable properties, keyed by name.
    pub properties: BTreeMap<String, MemberSpec>,
    /// Events. Mutated in place by include resolution; afterwards this is the
    /// component's effective event set.
    pub events: BTreeMap<String, EventSpec>,
}

impl ComponentSchema {
    /// The declared supertype: the single non-base include, if any.
    ///
    /// More than one non-base include violates the restricted inheritance
    /// model and fails with [`GenerateError::MultipleSupertype`].
    pub fn super_class(&self) -> Result<Option<&str>, GenerateError> {
        let mut supers = self.includes.iter().filter(|name| *name != UNIVERSAL_BASE);
        let first = supers.next();
        if supers.next().is_some() {
            return Err(GenerateError::MultipleSupertype(self.name.clone()));
        }
        Ok(first.map(String::as_str))
    }
}

/// A field or property specification.
#[derive(Debug, Clone)]
pub struct MemberSpec {
    /// Type expression, treated as an opaque string.
    pub ty: String,
    /// Legal literal string values; when non-empty, the emitted type is the
    /// sorted union of these literals instead of `ty`.
    pub values: Vec<String>,
    /// Description prose.
    pub description: Option<String>,
    /// Documentation-only static marker.
    pub is_static: bool,
    /// Documentation-only provisional marker.
    pub is_provisional: bool,
}

/// One method overload.
#[derive(Debug, Clone)]
pub struct Overload {
    /// Ordered parameter list.
    pub parameters: Vec<Parameter>,
    /// Return type expression; emitted as `void` when absent.
    pub returns: Option<String>,
    /// Description prose.
    pub description: Option<String>,
    /// Documentation-only static marker.
    pub is_static: bool,
    /// Documentation-only provisional marker.
    pub is_provisional: bool,
}

/// A method or event-listener parameter.
#[derive(Debug, Clone)]
pub struct Parameter {
    /// Parameter name.
    pub name: String,
    /// Type expression, treated as an opaque string.
    pub ty: String,
    /// Optional prose used in `@param` annotations.
    pub description: Option<String>,
}

/// An event specification: the listener's callback signature.
#[derive(Debug, Clone)]
pub struct EventSpec {
    /// Ordered parameters passed to the listener.
    pub parameters: Vec<Parameter>,
}

/// Insertion-ordered set of component schemas with a by-name index.
///
/// Document order matters: the assembler emits components in the order their
/// definition files were loaded, never re-sorted.
#[derive(Debug, Default)]
pub struct SchemaSet {
    components: Vec<ComponentSchema>,
    index: HashMap<String, usize>,
}

impl SchemaSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of components in the set.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Insert a component, failing on a duplicate name.
    pub fn insert(&mut self, schema: ComponentSchema) -> Result<(), GenerateError> {
        if self.index.contains_key(&schema.name) {
            return Err(GenerateError::DuplicateComponent(schema.name));
        }
        self.index.insert(schema.name.clone(), self.components.len());
        self.components.push(schema);
        Ok(())
    }

    /// Look up a component by name.
    pub fn get(&self, name: &str) -> Option<&ComponentSchema> {
        self.index.get(name).map(|&idx| &self.components[idx])
    }

    /// Component at a given insertion position.
    pub fn get_index(&self, idx: usize) -> Option<&ComponentSchema> {
        self.components.get(idx)
    }

    /// Mutable access to the component at a given insertion position.
    pub fn get_index_mut(&mut self, idx: usize) -> Option<&mut ComponentSchema> {
        self.components.get_mut(idx)
    }

    /// Iterate components in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ComponentSchema> {
        self.components.iter()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn schema(name: &str, includes: &[&str]) -> ComponentSchema {
        ComponentSchema {
            name: name.to_string(),
            exposure: Exposure::Class,
            description: None,
            includes: includes.iter().map(|s| s.to_string()).collect(),
            fields: BTreeMap::new(),
            methods: BTreeMap::new(),
            properties: BTreeMap::new(),
            events: BTreeMap::new(),
        }
    }

    #[test]
    fn test_super_class_excludes_universal_base() {
        let widget = schema("Widget", &[UNIVERSAL_BASE]);
        assert_eq!(widget.super_class().unwrap(), None);

        let button = schema("Button", &[UNIVERSAL_BASE, "Widget"]);
        assert_eq!(button.super_class().unwrap(), Some("Widget"));
    }

    #[test]
    fn test_super_class_rejects_multiple_non_base_includes() {
        let bad = schema("Bad", &["A", "B"]);
        let err = bad.super_class().unwrap_err();
        assert!(matches!(err, GenerateError::MultipleSupertype(name) if name == "Bad"));
    }

    #[test]
    fn test_schema_set_preserves_insertion_order() {
        let mut set = SchemaSet::new();
        set.insert(schema("Zebra", &[])).unwrap();
        set.insert(schema("Apple", &[])).unwrap();
        let names: Vec<_> = set.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Zebra", "Apple"]);
    }

    #[test]
    fn test_schema_set_rejects_duplicates() {
        let mut set = SchemaSet::new();
        set.insert(schema("Widget", &[])).unwrap();
        let err = set.insert(schema("Widget", &[])).unwrap_err();
        assert!(matches!(err, GenerateError::DuplicateComponent(name) if name == "Widget"));
    }
}
