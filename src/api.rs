//! OpenAPI definition types and document loading.
//!
//! Models the subset of a Swagger 2.0 / OpenAPI document that proto
//! generation consumes: `info`, `paths`, and `definitions`. Maps use
//! [`BTreeMap`] so path and definition traversal is deterministic and
//! lexicographic regardless of document order. Loading is deserialization
//! only; the definition is never validated or mutated afterwards.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

/// A parsed OpenAPI definition: the root of the schema tree.
#[derive(Debug, Default, Deserialize)]
pub struct ApiDefinition {
    /// Document format version (e.g., `"2.0"`). Not used in rendering.
    #[serde(default)]
    pub swagger: String,

    /// Document metadata; the title is the sole source of the proto package
    /// and service names.
    pub info: Info,

    /// API host (e.g., `"api.example.com"`). Carried for reference only.
    #[serde(default)]
    pub host: String,

    /// Base path prefix (e.g., `"/v1"`). Carried for reference only.
    #[serde(default, rename = "basePath")]
    pub base_path: String,

    /// URL path → endpoint. Sorted by `BTreeMap`.
    #[serde(default)]
    pub paths: BTreeMap<String, Endpoint>,

    /// Model name → model. Sorted by `BTreeMap`.
    #[serde(default)]
    pub definitions: BTreeMap<String, Model>,
}

/// Document metadata.
#[derive(Debug, Default, Deserialize)]
pub struct Info {
    /// Free-text API title (e.g., `"Swagger Petstore"`).
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub description: String,

    /// API version string. Not used in rendering.
    #[serde(default)]
    pub version: String,
}

/// One URL path's set of HTTP operations.
#[derive(Debug, Default, Deserialize)]
pub struct Endpoint {
    pub get: Option<Operation>,
    pub put: Option<Operation>,
    pub post: Option<Operation>,
    pub delete: Option<Operation>,
    pub patch: Option<Operation>,
}

impl Endpoint {
    /// The defined operations paired with their verb, in fixed verb order
    /// (`get`, `put`, `post`, `delete`, `patch`).
    pub fn operations(&self) -> Vec<(&'static str, &Operation)> {
        let verbs = [
            ("get", &self.get),
            ("put", &self.put),
            ("post", &self.post),
            ("delete", &self.delete),
            ("patch", &self.patch),
        ];
        verbs
            .into_iter()
            .filter_map(|(verb, op)| op.as_ref().map(|op| (verb, op)))
            .collect()
    }
}

/// A single HTTP operation on a path.
#[derive(Debug, Default, Deserialize)]
pub struct Operation {
    /// Source operation identifier. Parsed but not used for naming; RPC
    /// method names derive from the path and verb.
    #[serde(default, rename = "operationId")]
    pub operation_id: Option<String>,

    #[serde(default)]
    pub summary: String,

    #[serde(default)]
    pub description: String,

    /// Operation parameters. Only the body parameter participates in
    /// rendering; query and path parameters are carried for reference.
    #[serde(default)]
    pub parameters: Vec<Parameter>,

    /// Status code → response. Sorted by `BTreeMap`.
    #[serde(default)]
    pub responses: BTreeMap<String, Response>,
}

impl Operation {
    /// The request body schema: the first parameter with `in: body`.
    pub fn body_schema(&self) -> Option<&Property> {
        self.parameters
            .iter()
            .find(|p| p.location == "body")
            .and_then(|p| p.schema.as_ref())
    }

    /// The response schema: `"200"`, then `"201"`, then `"default"`.
    pub fn response_schema(&self) -> Option<&Property> {
        ["200", "201", "default"]
            .iter()
            .find_map(|code| self.responses.get(*code))
            .and_then(|r| r.schema.as_ref())
    }
}

/// One operation parameter.
#[derive(Debug, Default, Deserialize)]
pub struct Parameter {
    #[serde(default)]
    pub name: String,

    /// Parameter location: `"body"`, `"query"`, `"path"`, or `"header"`.
    #[serde(default, rename = "in")]
    pub location: String,

    #[serde(default)]
    pub required: bool,

    /// Schema of a body parameter.
    pub schema: Option<Property>,
}

/// One declared response of an operation.
#[derive(Debug, Default, Deserialize)]
pub struct Response {
    #[serde(default)]
    pub description: String,

    pub schema: Option<Property>,
}

/// A named data-model definition: either an object with properties or, when
/// `enum_values` is non-empty, an enumerated type.
#[derive(Debug, Default, Deserialize)]
pub struct Model {
    /// Schema type (usually `"object"`, or `"string"` for enum models).
    /// The enum list, not this field, decides how the model renders.
    #[serde(default, rename = "type")]
    pub type_name: Option<String>,

    #[serde(default)]
    pub description: String,

    /// Property name → property. Sorted by `BTreeMap`.
    #[serde(default)]
    pub properties: BTreeMap<String, Property>,

    /// Names of required properties. Carried for reference only; proto3
    /// fields are all optional.
    #[serde(default)]
    pub required: Vec<String>,

    /// Literal values marking this model as an enumerated type, in document
    /// order.
    #[serde(default, rename = "enum")]
    pub enum_values: Vec<String>,
}

/// One field of a model or inline object schema.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Property {
    /// Primitive kind: `string`, `number`, `integer`, `boolean`, `array`,
    /// or `object`. Absent when the property is a pure `$ref`.
    #[serde(default, rename = "type")]
    pub type_name: Option<String>,

    /// Scalar format refinement (e.g., `"int64"`, `"double"`, `"byte"`).
    #[serde(default)]
    pub format: Option<String>,

    /// Reference to a named model (e.g., `"#/definitions/Pet"`). References
    /// are resolved by name lookup only and never expanded inline.
    #[serde(default, rename = "$ref")]
    pub reference: Option<String>,

    /// Item schema of an `array` property.
    #[serde(default)]
    pub items: Option<Box<Property>>,

    /// Inline object properties. Sorted by `BTreeMap`.
    #[serde(default)]
    pub properties: BTreeMap<String, Property>,

    /// Enumerated literal values, in document order.
    #[serde(default, rename = "enum")]
    pub enum_values: Vec<String>,

    #[serde(default)]
    pub description: String,
}

/// Load an OpenAPI definition from disk.
///
/// Files with a `.json` extension parse as JSON; everything else parses as
/// YAML. Unknown document keys are ignored.
pub fn load_definition(path: &Path) -> Result<ApiDefinition> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Read {
        path: path.to_path_buf(),
        source: e,
    })?;

    let api = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::from_str(&content)?,
        _ => serde_yaml::from_str(&content)?,
    };
    Ok(api)
}
