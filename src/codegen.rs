//! Proto3 schema generation from an OpenAPI definition.
//!
//! Renders an [`ApiDefinition`] into a single proto3 document:
//! - Request/response wrapper messages for each path operation
//! - One message (or enum) block per data-model definition
//! - A service block with one rpc line per operation
//!
//! The generated output is deterministic: identical input always produces
//! byte-identical output. Paths and definitions render in lexicographic
//! order, properties sort alphabetically, and field numbers are assigned
//! sequentially per block.

use std::collections::BTreeMap;
use std::fmt::Write;

use crate::api::{ApiDefinition, Model, Operation, Property};
use crate::error::{Error, Result};
use crate::naming;
use crate::postprocess;

/// Generate a proto3 schema document for the given API definition.
///
/// Returns the complete document as UTF-8 bytes, beginning with
/// `syntax = "proto3";`. Rendering is all-or-nothing: any failure while
/// walking the definition tree (such as a `$ref` naming a model absent from
/// `definitions`) aborts with [`Error::Codegen`] and no partial output.
pub fn generate(api: &ApiDefinition) -> Result<Vec<u8>> {
    let mut out = String::new();

    writeln!(out, "syntax = \"proto3\";").unwrap();
    writeln!(out).unwrap();
    writeln!(out, "package {};", naming::package_name(&api.info.title)).unwrap();

    let mut rpcs = Vec::new();
    for (path, endpoint) in &api.paths {
        for (verb, operation) in endpoint.operations() {
            rpcs.push(render_operation(api, path, verb, operation)?);
        }
    }

    for rpc in &rpcs {
        if !rpc.messages.is_empty() {
            writeln!(out).unwrap();
            out.push_str(&rpc.messages);
        }
    }

    for (name, model) in &api.definitions {
        writeln!(out).unwrap();
        render_model(&mut out, api, name, model)?;
    }

    writeln!(out).unwrap();
    writeln!(out, "service {} {{", naming::service_name(&api.info.title)).unwrap();
    for rpc in &rpcs {
        writeln!(
            out,
            "    rpc {}({}) returns ({});",
            rpc.method, rpc.request, rpc.response
        )
        .unwrap();
    }
    writeln!(out, "}}").unwrap();

    let text = postprocess::clean_spacing(&postprocess::add_imports(&out));
    Ok(text.into_bytes())
}

// ── Field numbering ────────────────────────────────────────────────────

/// Sequential number source scoped to one message or enum block.
///
/// Message fields count from 1, enum values from 0. Every rendered block
/// owns a fresh instance; nested blocks never share their parent's.
struct BlockNumbers {
    next: u32,
}

impl BlockNumbers {
    fn for_message() -> Self {
        Self { next: 1 }
    }

    fn for_enum() -> Self {
        Self { next: 0 }
    }

    fn next(&mut self) -> u32 {
        let number = self.next;
        self.next += 1;
        number
    }
}

// ── Message and enum rendering ─────────────────────────────────────────

/// Render one top-level definition: an enum block when the model declares
/// enum values, a message block otherwise.
fn render_model(out: &mut String, api: &ApiDefinition, name: &str, model: &Model) -> Result<()> {
    let block_name = naming::capitalize(name);
    if model.enum_values.is_empty() {
        render_message(out, api, &block_name, &model.properties, 0)
    } else {
        render_enum(out, &block_name, &model.enum_values, 0);
        Ok(())
    }
}

/// Append a `message <name> { ... }` block at the given nesting depth.
///
/// Fields render in sorted property order; nested message and enum blocks
/// render inside the body, directly before the field line that uses them.
fn render_message(
    out: &mut String,
    api: &ApiDefinition,
    name: &str,
    properties: &BTreeMap<String, Property>,
    depth: usize,
) -> Result<()> {
    let pad = naming::indent(depth);
    let mut numbers = BlockNumbers::for_message();

    writeln!(out, "{pad}message {name} {{").unwrap();
    for (property_name, property) in properties {
        render_field(out, api, property_name, property, depth + 1, &mut numbers)?;
    }
    writeln!(out, "{pad}}}").unwrap();
    Ok(())
}

/// Append an `enum <name> { ... }` block, one line per literal in document
/// order, values numbered from zero.
fn render_enum(out: &mut String, name: &str, values: &[String], depth: usize) {
    let pad = naming::indent(depth);
    let mut numbers = BlockNumbers::for_enum();

    writeln!(out, "{pad}enum {name} {{").unwrap();
    for value in values {
        writeln!(
            out,
            "{pad}    {} = {};",
            naming::to_enum_variant(name, value),
            numbers.next()
        )
        .unwrap();
    }
    writeln!(out, "{pad}}}").unwrap();
}

/// Append one field line, first rendering any nested block its type needs.
///
/// Only the field line consumes a number; nested message and enum
/// declarations do not.
fn render_field(
    out: &mut String,
    api: &ApiDefinition,
    name: &str,
    property: &Property,
    depth: usize,
    numbers: &mut BlockNumbers,
) -> Result<()> {
    let mut repeated = false;
    let field_type = if !property.enum_values.is_empty() {
        let enum_name = naming::capitalize(name);
        render_enum(out, &enum_name, &property.enum_values, depth);
        enum_name
    } else if let Some(reference) = &property.reference {
        resolve_reference(api, reference)?
    } else {
        match property.type_name.as_deref() {
            Some("object") => object_type(out, api, name, &property.properties, depth)?,
            Some("array") => {
                repeated = true;
                item_type(out, api, name, property.items.as_deref(), depth)?
            }
            Some(scalar) => naming::proto_scalar(scalar, property.format.as_deref()).to_string(),
            None => "string".to_string(),
        }
    };

    let pad = naming::indent(depth);
    let repeated = if repeated { "repeated " } else { "" };
    writeln!(out, "{pad}{repeated}{field_type} {name} = {};", numbers.next()).unwrap();
    Ok(())
}

/// Resolve an inline object schema: a nested message when it declares
/// properties, the free-form `google.protobuf.Any` otherwise.
fn object_type(
    out: &mut String,
    api: &ApiDefinition,
    name: &str,
    properties: &BTreeMap<String, Property>,
    depth: usize,
) -> Result<String> {
    if properties.is_empty() {
        return Ok("google.protobuf.Any".to_string());
    }
    let message_name = naming::capitalize(name);
    render_message(out, api, &message_name, properties, depth)?;
    Ok(message_name)
}

/// Resolve the element type of an array property.
///
/// Items may be a reference, an enum, an inline object, or a scalar. A
/// missing item schema, or an item kind proto cannot express (such as a
/// nested array), falls back to `string`.
fn item_type(
    out: &mut String,
    api: &ApiDefinition,
    field_name: &str,
    items: Option<&Property>,
    depth: usize,
) -> Result<String> {
    let Some(item) = items else {
        return Ok("string".to_string());
    };

    if !item.enum_values.is_empty() {
        let enum_name = naming::capitalize(field_name);
        render_enum(out, &enum_name, &item.enum_values, depth);
        return Ok(enum_name);
    }
    if let Some(reference) = &item.reference {
        return resolve_reference(api, reference);
    }
    match item.type_name.as_deref() {
        Some("object") => object_type(out, api, field_name, &item.properties, depth),
        Some(scalar) => Ok(naming::proto_scalar(scalar, item.format.as_deref()).to_string()),
        None => Ok("string".to_string()),
    }
}

/// Resolve a `$ref` to the referenced model's message name.
///
/// The model name is the last path segment of the reference string and must
/// exist in `definitions`. References are never expanded inline, so mutually
/// referencing models cannot recurse.
fn resolve_reference(api: &ApiDefinition, reference: &str) -> Result<String> {
    let name = reference.rsplit('/').next().unwrap_or(reference);
    if api.definitions.contains_key(name) {
        Ok(naming::capitalize(name))
    } else {
        Err(Error::Codegen(format!("definition '{name}' is not defined")))
    }
}

// ── Endpoint rendering ─────────────────────────────────────────────────

/// One operation's rendered artifacts: the rpc line pieces and any wrapper
/// message blocks its request/response schemas required.
struct RpcOperation {
    method: String,
    request: String,
    response: String,
    messages: String,
}

fn render_operation(
    api: &ApiDefinition,
    path: &str,
    verb: &str,
    operation: &Operation,
) -> Result<RpcOperation> {
    let method = naming::path_method_to_name(path, verb);
    let mut messages = String::new();

    let request = match operation.body_schema() {
        Some(schema) => wrapper_type(api, schema, format!("{method}Request"), &mut messages)?,
        None => "google.protobuf.Empty".to_string(),
    };
    let response = match operation.response_schema() {
        Some(schema) => wrapper_type(api, schema, format!("{method}Response"), &mut messages)?,
        None => "google.protobuf.Empty".to_string(),
    };

    Ok(RpcOperation {
        method,
        request,
        response,
        messages,
    })
}

/// Resolve a request or response schema to the type named in the rpc line,
/// rendering a wrapper message into `out` when the schema is inline.
///
/// References use the referenced model directly. Inline objects with
/// properties become a wrapper message of those properties; free-form
/// objects become `google.protobuf.Any` with no wrapper. Inline arrays wrap
/// into a single repeated `items` field, and inline scalars into a single
/// `value` field, so every schema shape has a nameable type.
fn wrapper_type(
    api: &ApiDefinition,
    schema: &Property,
    wrapper_name: String,
    out: &mut String,
) -> Result<String> {
    if let Some(reference) = &schema.reference {
        return resolve_reference(api, reference);
    }

    let properties = match schema.type_name.as_deref() {
        Some("object") | None => {
            if schema.properties.is_empty() {
                return Ok("google.protobuf.Any".to_string());
            }
            schema.properties.clone()
        }
        Some("array") => BTreeMap::from([(
            "items".to_string(),
            Property {
                type_name: Some("array".to_string()),
                items: schema.items.clone(),
                ..Property::default()
            },
        )]),
        Some(_) => BTreeMap::from([("value".to_string(), schema.clone())]),
    };

    render_message(out, api, &wrapper_name, &properties, 0)?;
    Ok(wrapper_name)
}
