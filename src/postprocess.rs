//! Text-level passes over the assembled proto document.
//!
//! Both passes operate on rendered output text, not on the definition tree:
//! spacing normalization between adjacent message blocks, and import
//! injection for well-known protobuf types referenced in the body.

use std::sync::LazyLock;

use regex::Regex;

static MESSAGE_GAP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\}\n*message").expect("valid pattern"));

static WRAPPER_VALUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"google\.protobuf.*Value").expect("valid pattern"));

/// Normalize separation between consecutive message blocks.
///
/// Any `}` followed by zero or more newlines and a `message` keyword is
/// rewritten to `}` plus exactly one blank line, so adjacent blocks are
/// uniformly separated.
pub fn clean_spacing(proto: &str) -> String {
    MESSAGE_GAP.replace_all(proto, "}\n\nmessage").into_owned()
}

/// Inject import statements for well-known types referenced in the body.
///
/// Checks run in fixed order (`Any`, `Empty`, then the wrapper `Value`
/// types); each match inserts its import line directly after the first
/// `syntax = "proto3";`, at most once per type. Because every insertion
/// lands at the same spot, later-checked imports end up earlier in the
/// final text.
pub fn add_imports(proto: &str) -> String {
    let mut out = proto.to_string();

    if out.contains("google.protobuf.Any") {
        out = out.replacen(
            "\"proto3\";",
            "\"proto3\";\n\nimport \"google/protobuf/any.proto\";",
            1,
        );
    }
    if out.contains("google.protobuf.Empty") {
        out = out.replacen(
            "\"proto3\";",
            "\"proto3\";\n\nimport \"google/protobuf/empty.proto\";",
            1,
        );
    }
    if WRAPPER_VALUE.is_match(&out) {
        out = out.replacen(
            "\"proto3\";",
            "\"proto3\";\n\nimport \"google/protobuf/wrappers.proto\";",
            1,
        );
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_extra_blank_lines_between_messages() {
        let raw = "message A {\n}\n\n\n\nmessage B {\n}\n";
        assert_eq!(
            clean_spacing(raw),
            "message A {\n}\n\nmessage B {\n}\n"
        );
    }

    #[test]
    fn inserts_blank_line_when_messages_touch() {
        let raw = "message A {\n}message B {\n}\n";
        assert_eq!(
            clean_spacing(raw),
            "message A {\n}\n\nmessage B {\n}\n"
        );
    }

    #[test]
    fn spacing_is_idempotent() {
        let clean = "message A {\n}\n\nmessage B {\n}\n";
        assert_eq!(clean_spacing(clean), clean);
    }

    #[test]
    fn spacing_leaves_service_blocks_alone() {
        let raw = "message A {\n}\n\n\nservice S {\n}\n";
        assert_eq!(clean_spacing(raw), raw);
    }

    #[test]
    fn injects_any_import_once() {
        let proto = "syntax = \"proto3\";\n\npackage p;\n\nmessage M {\n    google.protobuf.Any a = 1;\n    google.protobuf.Any b = 2;\n}\n";
        let out = add_imports(proto);
        assert!(out.starts_with(
            "syntax = \"proto3\";\n\nimport \"google/protobuf/any.proto\";\n\npackage p;"
        ));
        assert_eq!(
            out.matches("import \"google/protobuf/any.proto\";").count(),
            1
        );
    }

    #[test]
    fn injects_empty_import() {
        let proto = "syntax = \"proto3\";\n\npackage p;\n\nservice S {\n    rpc F(google.protobuf.Empty) returns (google.protobuf.Empty);\n}\n";
        let out = add_imports(proto);
        assert!(out.contains("import \"google/protobuf/empty.proto\";"));
        assert!(!out.contains("import \"google/protobuf/any.proto\";"));
    }

    #[test]
    fn injects_wrappers_import_for_value_types() {
        let proto = "syntax = \"proto3\";\n\npackage p;\n\nmessage M {\n    google.protobuf.StringValue s = 1;\n}\n";
        let out = add_imports(proto);
        assert!(out.contains("import \"google/protobuf/wrappers.proto\";"));
    }

    #[test]
    fn later_checks_insert_closer_to_the_syntax_line() {
        let proto = "syntax = \"proto3\";\n\nmessage M {\n    google.protobuf.Any a = 1;\n}\n\nservice S {\n    rpc F(google.protobuf.Empty) returns (M);\n}\n";
        let out = add_imports(proto);
        let empty_at = out.find("empty.proto").unwrap();
        let any_at = out.find("any.proto").unwrap();
        assert!(empty_at < any_at);
    }

    #[test]
    fn no_references_means_no_imports() {
        let proto = "syntax = \"proto3\";\n\npackage p;\n\nmessage M {\n    string s = 1;\n}\n";
        assert_eq!(add_imports(proto), proto);
    }
}
