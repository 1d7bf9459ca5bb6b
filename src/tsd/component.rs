//! Per-component emission: class declaration, property interface, and the
//! optional singleton value binding.

use super::doc::doc_block;
use super::members::{
    emit_event_accessors, emit_fields, emit_interface_property, emit_methods, emit_properties,
    emit_property_accessors,
};
use super::model::ComponentSchema;
use super::text::LineBuffer;
use crate::error::GenerateError;

/// Emit the full declaration block for one component: a name banner, the
/// behavior-bearing class declaration, the property-bag interface, and — for
/// singleton-exposed components — a top-level typed value binding.
pub fn emit_component(out: &mut LineBuffer, schema: &ComponentSchema) -> Result<(), GenerateError> {
    out.append(&format!("// {}", schema.name));
    out.blank();
    emit_class(out, schema)?;
    out.blank();
    emit_property_interface(out, schema);
    emit_singleton(out, schema);
    out.blank();
    Ok(())
}

fn emit_class(out: &mut LineBuffer, schema: &ComponentSchema) -> Result<(), GenerateError> {
    if let Some(doc) = doc_block(schema.description.as_deref(), &[], false, false) {
        out.append(&doc);
    }
    // The single-supertype check surfaces here, where the class header names
    // the supertype.
    out.append(&class_header(schema)?);
    out.indented(|out| {
        emit_constructor(out, &schema.name);
        emit_fields(out, schema);
        emit_methods(out, schema);
        emit_event_accessors(out, schema);
        emit_property_accessors(out, schema);
        emit_properties(out, schema);
    });
    out.append("}");
    Ok(())
}

fn class_header(schema: &ComponentSchema) -> Result<String, GenerateError> {
    let mut header = format!("export class {}", schema.name);
    if let Some(super_class) = schema.super_class()? {
        header.push_str(&format!(" extends {super_class}"));
    }
    header.push_str(" {");
    Ok(header)
}

fn emit_constructor(out: &mut LineBuffer, name: &str) {
    out.blank();
    out.append(&format!("constructor(properties?: {name}Properties);"));
}

fn emit_property_interface(out: &mut LineBuffer, schema: &ComponentSchema) {
    let mut header = format!("interface {}Properties", schema.name);
    if !schema.includes.is_empty() {
        let supers: Vec<String> = schema
            .includes
            .iter()
            .map(|include| format!("{include}Properties"))
            .collect();
        header.push_str(&format!(" extends {}", supers.join(", ")));
    }
    header.push_str(" {");
    out.append(&header);
    out.indented(|out| {
        for (name, spec) in &schema.properties {
            out.blank();
            emit_interface_property(out, name, spec);
        }
    });
    out.append("}");
}

fn emit_singleton(out: &mut LineBuffer, schema: &ComponentSchema) {
    if let Some(object_name) = schema.exposure.object_name() {
        out.blank();
        out.append(&format!("declare let {object_name}: {};", schema.name));
    }
}
