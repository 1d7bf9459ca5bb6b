//! Normalization from raw definition documents to the typed model.
//!
//! All dynamically-typed corner cases of the JSON documents are resolved
//! here, so the emitters can assume a well-formed model:
//! - the `type` / `object` exposure variant is decided once,
//! - method overload lists are validated to be JSON arrays,
//! - description fields are validated to be textual.

use std::collections::BTreeMap;
use std::path::Path;

use serde_json::Value;

use super::model::{ComponentSchema, EventSpec, Exposure, MemberSpec, Overload, Parameter};
use super::schema::{EventDef, MemberDef, OverloadDef, ParamDef, WidgetDef};
use crate::error::GenerateError;

/// Type expression used when a member declares neither `type` nor `values`.
const FALLBACK_TYPE: &str = "any";

/// Normalize one raw definition document into a [`ComponentSchema`].
///
/// `path` identifies the source document for error reporting only.
pub fn normalize_def(path: &Path, def: WidgetDef) -> Result<ComponentSchema, GenerateError> {
    let (name, exposure) = match (def.class_name, def.object) {
        (Some(class_name), Some(object_name)) => {
            (class_name, Exposure::ClassAndSingleton { object_name })
        }
        (Some(class_name), None) => (class_name, Exposure::Class),
        (None, Some(object_name)) => (
            object_name.clone(),
            Exposure::Singleton { object_name },
        ),
        (None, None) => return Err(GenerateError::MissingName(path.to_path_buf())),
    };

    let description = textual_description(def.description, &name)?;

    let mut fields = BTreeMap::new();
    for (member, raw) in def.fields {
        let context = format!("{name}.fields.{member}");
        fields.insert(member, normalize_member(raw, &context)?);
    }

    let mut properties = BTreeMap::new();
    for (member, raw) in def.properties {
        let context = format!("{name}.properties.{member}");
        properties.insert(member, normalize_member(raw, &context)?);
    }

    let mut methods = BTreeMap::new();
    for (member, raw) in def.methods {
        let context = format!("{name}.methods.{member}");
        methods.insert(member.clone(), normalize_overloads(&name, &member, raw, &context)?);
    }

    let mut events = BTreeMap::new();
    for (event, raw) in def.events {
        events.insert(event, normalize_event(raw));
    }

    Ok(ComponentSchema {
        name,
        exposure,
        description,
        includes: def.include,
        fields,
        methods,
        properties,
        events,
    })
}

fn normalize_member(raw: MemberDef, context: &str) -> Result<MemberSpec, GenerateError> {
    Ok(MemberSpec {
        ty: raw.ty.unwrap_or_else(|| FALLBACK_TYPE.to_string()),
        values: raw.values.unwrap_or_default(),
        description: textual_description(raw.description, context)?,
        is_static: raw.is_static,
        is_provisional: raw.provisional,
    })
}

fn normalize_overloads(
    component: &str,
    method: &str,
    raw: Value,
    context: &str,
) -> Result<Vec<Overload>, GenerateError> {
    let Value::Array(entries) = raw else {
        return Err(GenerateError::SchemaShape {
            component: component.to_string(),
            method: method.to_string(),
        });
    };
    let mut overloads = Vec::with_capacity(entries.len());
    for entry in entries {
        let def: OverloadDef =
            serde_json::from_value(entry).map_err(|source| GenerateError::Parse {
                context: context.to_string(),
                source,
            })?;
        overloads.push(Overload {
            parameters: def.parameters.into_iter().map(normalize_param).collect(),
            returns: def.returns,
            description: textual_description(def.description, context)?,
            is_static: def.is_static,
            is_provisional: def.provisional,
        });
    }
    Ok(overloads)
}

fn normalize_event(raw: EventDef) -> EventSpec {
    EventSpec {
        parameters: raw.parameters.into_iter().map(normalize_param).collect(),
    }
}

fn normalize_param(raw: ParamDef) -> Parameter {
    Parameter {
        name: raw.name,
        ty: raw.ty,
        description: raw.description,
    }
}

/// Accept a textual description, reject anything else.
fn textual_description(
    raw: Option<Value>,
    context: &str,
) -> Result<Option<String>, GenerateError> {
    match raw {
        None => Ok(None),
        Some(Value::String(text)) => Ok(Some(text)),
        Some(_) => Err(GenerateError::DescriptionType(context.to_string())),
    }
}
