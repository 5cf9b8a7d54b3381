//! Name transforms and the OpenAPI-to-proto scalar type table.
//!
//! # Type Mapping Table
//!
//! | OpenAPI type | `format` | Proto type |
//! |--------------|----------|------------|
//! | `string` | — | `string` |
//! | `string` | `byte` | `bytes` |
//! | `integer` | — | `int32` |
//! | `integer` | `int64` | `int64` |
//! | `number` | — | `float` |
//! | `number` | `double` | `double` |
//! | `boolean` | — | `bool` |
//! | Unknown types | — | `string` (fallback) |
//!
//! `object`, `array`, and `$ref` kinds are not scalar; the codegen module
//! resolves those against the definition tree.

/// Map an OpenAPI scalar type (with optional `format` refinement) to a proto3
/// scalar type string.
///
/// Returns `"string"` as a fallback for unrecognized types.
pub fn proto_scalar(type_name: &str, format: Option<&str>) -> &'static str {
    match (type_name, format) {
        ("string", Some("byte")) => "bytes",
        ("string", _) => "string",

        ("integer", Some("int64")) => "int64",
        ("integer", _) => "int32",

        ("number", Some("double")) => "double",
        ("number", _) => "float",

        ("boolean", _) => "bool",

        // Fallback: unknown types emit as string.
        _ => "string",
    }
}

/// Derive the proto package name from the document title.
///
/// Lower-cases the title and removes all whitespace:
/// `"My Cool API"` → `"mycoolapi"`.
///
/// Non-alphanumeric characters other than whitespace pass through unchanged,
/// so a title like `"Pets 2.0"` yields a package name protoc will reject.
pub fn package_name(title: &str) -> String {
    title.split_whitespace().collect::<String>().to_lowercase()
}

/// Derive the proto service name from the document title.
///
/// Title-cases each whitespace-delimited word, concatenates, and appends
/// `Service`: `"My Cool API"` → `"MyCoolApiService"`.
pub fn service_name(title: &str) -> String {
    let mut name: String = title.split_whitespace().map(title_word).collect();
    name.push_str("Service");
    name
}

/// Build a proto enum value identifier from the enum name and a literal.
///
/// Empty or whitespace-only literals become `EMPTY`. Spaces map to `_` and
/// `&` to `and`, then the whole identifier is upper-cased:
/// `("Colors", "Red & Blue")` → `"COLORS_RED_AND_BLUE"`.
pub fn to_enum_variant(enum_name: &str, value: &str) -> String {
    let value = if value.trim().is_empty() { "EMPTY" } else { value };
    format!("{enum_name}_{value}")
        .replace(' ', "_")
        .replace('&', "and")
        .to_uppercase()
}

/// Derive an RPC method name from an HTTP path and verb.
///
/// A trailing `.json` is stripped, separator and bracket characters become
/// word breaks, each word is capitalized, and the capitalized verb is
/// prefixed: `("/v1/users/{userId}", "get")` → `"GetV1UsersUserId"`.
///
/// Distinct path/verb pairs can map to the same name (`/a-b` and `/a/b`);
/// the generator does not detect such collisions.
pub fn path_method_to_name(path: &str, method: &str) -> String {
    let path = path.strip_suffix(".json").unwrap_or(path);
    let words: String = path
        .chars()
        .map(|c| match c {
            '-' | '_' | '/' | '.' | '{' | '}' | '[' | ']' | '(' | ')' => ' ',
            c => c,
        })
        .collect();

    let mut name = capitalize(method);
    for word in words.split_whitespace() {
        name.push_str(&capitalize(word));
    }
    name
}

/// Capitalize the first letter of a name, preserving the remainder:
/// `"orderItem"` → `"OrderItem"`. Used for message and enum names derived
/// from definition and property names.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().to_string() + chars.as_str(),
    }
}

/// One indentation step per nesting level, four spaces each.
pub fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

// Title-case one word: first letter upper, remainder lower.
fn title_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().to_string() + &chars.as_str().to_lowercase(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_type_mapping() {
        assert_eq!(proto_scalar("string", None), "string");
        assert_eq!(proto_scalar("string", Some("byte")), "bytes");
        assert_eq!(proto_scalar("integer", None), "int32");
        assert_eq!(proto_scalar("integer", Some("int64")), "int64");
        assert_eq!(proto_scalar("number", None), "float");
        assert_eq!(proto_scalar("number", Some("double")), "double");
        assert_eq!(proto_scalar("boolean", None), "bool");
    }

    #[test]
    fn unknown_type_falls_back_to_string() {
        assert_eq!(proto_scalar("file", None), "string");
        assert_eq!(proto_scalar("null", Some("whatever")), "string");
    }

    #[test]
    fn package_name_from_title() {
        assert_eq!(package_name("My Cool API"), "mycoolapi");
        assert_eq!(package_name("Swagger Petstore"), "swaggerpetstore");
        assert_eq!(package_name("single"), "single");
        assert_eq!(package_name("  padded   title  "), "paddedtitle");
    }

    #[test]
    fn service_name_from_title() {
        assert_eq!(service_name("My Cool API"), "MyCoolApiService");
        assert_eq!(service_name("Swagger Petstore"), "SwaggerPetstoreService");
        assert_eq!(service_name("uber"), "UberService");
    }

    #[test]
    fn enum_variant_names() {
        assert_eq!(to_enum_variant("Status", ""), "STATUS_EMPTY");
        assert_eq!(to_enum_variant("Status", "   "), "STATUS_EMPTY");
        assert_eq!(to_enum_variant("Status", "in progress"), "STATUS_IN_PROGRESS");
        assert_eq!(to_enum_variant("Colors", "Red & Blue"), "COLORS_RED_AND_BLUE");
        assert_eq!(to_enum_variant("Kind", "available"), "KIND_AVAILABLE");
    }

    #[test]
    fn path_method_names() {
        assert_eq!(path_method_to_name("/pets", "get"), "GetPets");
        assert_eq!(path_method_to_name("/pets", "post"), "PostPets");
        assert_eq!(
            path_method_to_name("/v1/users/{userId}", "get"),
            "GetV1UsersUserId"
        );
        assert_eq!(
            path_method_to_name("/estimates/price.json", "get"),
            "GetEstimatesPrice"
        );
        assert_eq!(
            path_method_to_name("/pet-store/orders", "delete"),
            "DeletePetStoreOrders"
        );
    }

    #[test]
    fn path_method_names_can_collide() {
        assert_eq!(
            path_method_to_name("/a-b", "get"),
            path_method_to_name("/a/b", "get")
        );
    }

    #[test]
    fn capitalize_preserves_remainder() {
        assert_eq!(capitalize("pet"), "Pet");
        assert_eq!(capitalize("orderItem"), "OrderItem");
        assert_eq!(capitalize("OrderItem"), "OrderItem");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn indent_steps() {
        assert_eq!(indent(0), "");
        assert_eq!(indent(1), "    ");
        assert_eq!(indent(3), "            ");
    }
}
