//! Raw widget definition structs for serde deserialization.
//!
//! This layer mirrors the hand-authored JSON documents as closely as
//! possible. Fields that the documents treat dynamically (descriptions,
//! method overload lists) are kept as [`serde_json::Value`] here so that
//! shape violations surface as domain errors during normalization rather
//! than as opaque parse failures.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

/// One widget/API definition document.
#[derive(Debug, Deserialize)]
pub struct WidgetDef {
    /// Class name, present when the component is an instantiable class.
    #[serde(rename = "type")]
    pub class_name: Option<String>,

    /// Singleton value name; may co-occur with `type`.
    pub object: Option<String>,

    /// Names of structurally included components, in declared order.
    #[serde(default)]
    pub include: Vec<String>,

    /// Component-level description prose.
    pub description: Option<Value>,

    /// Plain fields of the class.
    #[serde(default)]
    pub fields: BTreeMap<String, MemberDef>,

    /// Method name to overload list. The value must be a JSON array; this is
    /// validated during normalization.
    #[serde(default)]
    pub methods: BTreeMap<String, Value>,

    /// Settable widget properties.
    #[serde(default)]
    pub properties: BTreeMap<String, MemberDef>,

    /// Events the component fires.
    #[serde(default)]
    pub events: BTreeMap<String, EventDef>,
}

/// A field or property definition.
#[derive(Debug, Deserialize)]
pub struct MemberDef {
    /// Type expression, treated as an opaque string.
    #[serde(rename = "type")]
    pub ty: Option<String>,

    /// Legal literal string values; when present, the emitted type is the
    /// union of these literals instead of `type`.
    pub values: Option<Vec<String>>,

    /// Description prose (must be textual; checked during normalization).
    pub description: Option<Value>,

    /// Marks the member as static in the documentation.
    #[serde(default, rename = "static")]
    pub is_static: bool,

    /// Marks the member as provisional API in the documentation.
    #[serde(default)]
    pub provisional: bool,
}

/// One method overload.
#[derive(Debug, Deserialize)]
pub struct OverloadDef {
    /// Ordered parameter list.
    #[serde(default)]
    pub parameters: Vec<ParamDef>,

    /// Return type expression; `void` when absent.
    pub returns: Option<String>,

    /// Description prose (must be textual; checked during normalization).
    pub description: Option<Value>,

    /// Marks the overload as static in the documentation.
    #[serde(default, rename = "static")]
    pub is_static: bool,

    /// Marks the overload as provisional API in the documentation.
    #[serde(default)]
    pub provisional: bool,
}

/// An event definition: the listener's callback signature.
#[derive(Debug, Deserialize)]
pub struct EventDef {
    /// Ordered parameters passed to the listener.
    #[serde(default)]
    pub parameters: Vec<ParamDef>,
}

/// A method or event parameter.
#[derive(Debug, Clone, Deserialize)]
pub struct ParamDef {
    /// Parameter name.
    pub name: String,

    /// Type expression, treated as an opaque string.
    #[serde(rename = "type")]
    pub ty: String,

    /// Optional prose used in `@param` annotations.
    pub description: Option<String>,
}
