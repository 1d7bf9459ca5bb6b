//! Per-member declaration emitters.
//!
//! Each emitter consumes one member specification and appends fully-formed
//! declaration lines to the shared [`LineBuffer`]. Member iteration is
//! always lexicographic by name (the model's maps are ordered); overloads of
//! one method keep their declared order.

use super::doc::{block_comment, doc_block};
use super::model::{ComponentSchema, EventSpec, MemberSpec, Parameter};
use super::text::LineBuffer;

/// Emit all fields of a component, sorted by name.
pub fn emit_fields(out: &mut LineBuffer, schema: &ComponentSchema) {
    for (name, spec) in &schema.fields {
        out.blank();
        if let Some(doc) = doc_block(spec.description.as_deref(), &[], spec.is_static, spec.is_provisional) {
            out.append(&doc);
        }
        out.append(&format!("{name}: {};", member_type(spec)));
    }
}

/// Emit all methods of a component, sorted by name; each overload becomes
/// one signature line in its declared order.
pub fn emit_methods(out: &mut LineBuffer, schema: &ComponentSchema) {
    for (name, overloads) in &schema.methods {
        for overload in overloads {
            out.blank();
            if let Some(doc) = doc_block(
                overload.description.as_deref(),
                &overload.parameters,
                overload.is_static,
                overload.is_provisional,
            ) {
                out.append(&doc);
            }
            let returns = overload.returns.as_deref().unwrap_or("void");
            out.append(&format!(
                "{name}({}): {returns};",
                param_list(&overload.parameters)
            ));
        }
    }
}

const OFF_DOC: [&str; 8] = [
    "Removes all occurrences of *listener* that are bound to *event* and *context* from this widget.",
    "If the context parameter is not present, all matching listeners will be removed.",
    "If the listener parameter is not present, all listeners that are bound to *event* will be removed.",
    "If the event parameter is not present, all listeners for all events will be removed from this widget.",
    "Supports chaining.",
    "@param event",
    "@param listener",
    "@param context",
];

const ON_DOC: [&str; 6] = [
    "Adds a *listener* to the list of functions to be notified when *event* is fired. If the context",
    "parameter is not present, the listener will be called in the context of this object. Supports",
    "chaining.",
    "@param event",
    "@param listener",
    "@param context? In the listener function, `this` will point to this object.",
];

const ONCE_DOC: [&str; 4] = [
    "Same as `on`, but removes the listener after it has been invoked by an event. Supports chaining.",
    "@param event",
    "@param listener",
    "@param context? In the listener function, `this` will point to this object.",
];

const TRIGGER_DOC: [&str; 4] = [
    "Triggers an event of the given type. All registered listeners will be notified. Additional parameters",
    "will be passed to the listeners.",
    "@param event",
    "@param ...params",
];

/// Emit the event-subscription method family from the component's effective
/// event set. Order is a contract of the output: generic `off`, specialized
/// `off` per event (sorted), the same for `on` and `once`, then `trigger`.
/// Components with an empty resolved event set get no family at all.
pub fn emit_event_accessors(out: &mut LineBuffer, schema: &ComponentSchema) {
    if schema.events.is_empty() {
        return;
    }

    out.blank();
    out.append(&fixed_comment(&OFF_DOC));
    out.append("off(event?: string, listener?: Function, context?: this): this;");
    for event in schema.events.keys() {
        out.append(&format!(
            "off(event: \"{event}\", listener?: Function, context?: this): this;"
        ));
    }

    out.blank();
    out.append(&fixed_comment(&ON_DOC));
    out.append("on(event: string, listener: Function, context?: this): this;");
    for (event, spec) in &schema.events {
        out.append(&format!(
            "on(event: \"{event}\", listener: ({}) => any): this;",
            param_list(&spec.parameters)
        ));
    }

    out.blank();
    out.append(&fixed_comment(&ONCE_DOC));
    out.append("once(event: string, listener: Function, context?: this): this;");
    for (event, spec) in &schema.events {
        out.append(&format!(
            "once(event: \"{event}\", listener: ({}) => any): this;",
            once_listener_params(spec)
        ));
    }

    out.blank();
    out.append(&fixed_comment(&TRIGGER_DOC));
    out.append("trigger(event: string, ...params: any[]): this;");
}

/// Emit the property accessor trio for components with declared properties:
/// generic getter, generic setter, and a bulk setter typed to the
/// component's property interface.
pub fn emit_property_accessors(out: &mut LineBuffer, schema: &ComponentSchema) {
    if schema.properties.is_empty() {
        return;
    }

    out.blank();
    out.append(&fixed_comment(&[
        "Gets the current value of the given *property*.",
        "@param property",
    ]));
    out.append("get(property: string): any;");

    out.blank();
    out.append(&fixed_comment(&[
        "Sets the given property. Supports chaining.",
        "@param property",
        "@param value",
    ]));
    out.append("set(property: string, value: any): this;");

    out.blank();
    out.append(&fixed_comment(&[
        "Sets all key-value pairs in the properties object as widget properties. Supports chaining.",
        "@param properties",
    ]));
    out.append(&format!("set(properties: {}Properties): this;", schema.name));
}

/// Emit all inline properties of a component, sorted by name.
pub fn emit_properties(out: &mut LineBuffer, schema: &ComponentSchema) {
    for (name, spec) in &schema.properties {
        out.blank();
        if let Some(doc) = doc_block(spec.description.as_deref(), &[], spec.is_static, spec.is_provisional) {
            out.append(&doc);
        }
        out.append(&format!("{name}: {};", member_type(spec)));
    }
}

/// Emit one optional-valued property line for the property interface.
pub fn emit_interface_property(out: &mut LineBuffer, name: &str, spec: &MemberSpec) {
    if let Some(doc) = doc_block(spec.description.as_deref(), &[], spec.is_static, spec.is_provisional) {
        out.append(&doc);
    }
    out.append(&format!("{name}?: {};", member_type(spec)));
}

/// The emitted type of a field or property: the sorted, double-quoted union
/// of its literal values when present, otherwise the raw type expression.
fn member_type(spec: &MemberSpec) -> String {
    if spec.values.is_empty() {
        return spec.ty.clone();
    }
    let mut values = spec.values.clone();
    values.sort();
    values
        .iter()
        .map(|value| format!("\"{value}\""))
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Render `name: type` pairs joined by `, `.
fn param_list(parameters: &[Parameter]) -> String {
    parameters
        .iter()
        .map(|param| format!("{}: {}", param.name, param.ty))
        .collect::<Vec<_>>()
        .join(", ")
}

/// The `once` listener signature carries a trailing optional context
/// parameter after the event's own parameters.
fn once_listener_params(spec: &EventSpec) -> String {
    let params = param_list(&spec.parameters);
    if params.is_empty() {
        "context?: this".to_string()
    } else {
        format!("{params}, context?: this")
    }
}

fn fixed_comment(lines: &[&str]) -> String {
    let owned: Vec<String> = lines.iter().map(|line| (*line).to_string()).collect();
    block_comment(&owned)
}
