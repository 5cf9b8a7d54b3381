//! Generate a Protocol Buffer v3 schema from an OpenAPI definition.
//!
//! `openapi-proto-gen` reads a Swagger 2.0 / OpenAPI document (YAML or JSON)
//! and renders an equivalent `.proto` schema: one message per data-model
//! definition, request/response wrapper messages per path operation, and a
//! service block with one rpc per operation.
//!
//! # Features
//!
//! - Proto3 messages for object definitions, including nested inline objects
//! - Enum blocks for enumerated properties and enum-typed models
//! - A service block with rpc names derived from path and verb
//! - `google.protobuf` well-known types for free-form and absent schemas,
//!   with import lines injected automatically
//! - Deterministic output: byte-identical across runs
//!
//! # Usage
//!
//! ```no_run
//! use std::path::Path;
//!
//! let api = openapi_proto_gen::api::load_definition(Path::new("swagger.yaml"))?;
//! let proto = openapi_proto_gen::codegen::generate(&api)?;
//! println!("{}", String::from_utf8_lossy(&proto));
//! # Ok::<(), openapi_proto_gen::error::Error>(())
//! ```

pub mod api;
pub mod codegen;
pub mod error;
pub mod naming;
pub mod postprocess;
