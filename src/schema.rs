//! Schema document types, loading, and enum collection.
//!
//! The input is the JSON document written by `protoc-gen-doc` with its
//! built-in `json` template (conventionally `grpc-doc.json`). Only the parts
//! consumed by enum generation are modelled: files, their enums, and the enum
//! values. Messages, services, extensions and the scalar type table are left
//! to serde's unknown-field handling and never materialized.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Deserializer};

use crate::error::{Error, Result};
use crate::naming::uc_first;

/// The root of a `protoc-gen-doc` JSON document.
#[derive(Debug, Default, Deserialize)]
pub struct SchemaDocument {
    /// Documented `.proto` files, in the order the tool emitted them.
    #[serde(default)]
    pub files: Vec<SchemaFile>,
}

/// One documented `.proto` file.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaFile {
    /// File name relative to the proto include path (e.g., `"user/status.proto"`).
    #[serde(default)]
    pub name: String,

    /// Leading file comment.
    #[serde(default)]
    pub description: String,

    /// Proto package (e.g., `"user.v1"`).
    #[serde(default)]
    pub package: String,

    /// Whether the file declares any enums. Files with this unset are skipped
    /// even if `enums` is non-empty.
    #[serde(default)]
    pub has_enums: bool,

    #[serde(default)]
    pub has_messages: bool,

    #[serde(default)]
    pub has_services: bool,

    #[serde(default)]
    pub has_extensions: bool,

    /// Enum definitions in declaration order.
    #[serde(default)]
    pub enums: Vec<EnumDef>,
}

/// A single enum definition.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumDef {
    /// Short name (e.g., `"Status"`).
    #[serde(default)]
    pub name: String,

    /// Name including enclosing messages (e.g., `"User.Status"`).
    #[serde(default)]
    pub long_name: String,

    /// Dotted fully-qualified name including the package (e.g., `"user.v1.User.Status"`).
    pub full_name: String,

    #[serde(default)]
    pub description: String,

    /// Enum values in declaration order.
    #[serde(default)]
    pub values: Vec<EnumMember>,
}

/// One value of an enum.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct EnumMember {
    /// Constant identifier (e.g., `"ACTIVE"`).
    pub name: String,

    /// Numeric value, kept as text so the literal is copied verbatim.
    ///
    /// `protoc-gen-doc` writes this as a JSON string; a bare JSON number is
    /// accepted too and kept in its textual form.
    #[serde(deserialize_with = "number_as_text")]
    pub number: String,

    #[serde(default)]
    pub description: String,
}

fn number_as_text<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Repr::deserialize(deserializer)? {
        Repr::Text(text) => text,
        Repr::Number(number) => number.to_string(),
    })
}

impl SchemaDocument {
    /// Every enum of every file flagged `hasEnums`, in document order.
    ///
    /// No deduplication is performed: an enum declared twice is yielded twice.
    pub fn enums(&self) -> impl Iterator<Item = &EnumDef> {
        self.files
            .iter()
            .filter(|file| file.has_enums)
            .flat_map(|file| file.enums.iter())
    }
}

/// Fully-qualified names that occur more than once among the collected enums.
///
/// Names are compared after [`uc_first`], since `example.Status` and
/// `Example.Status` resolve to the same class. Sorted, each listed once, in
/// normalized form.
pub fn duplicate_full_names(document: &SchemaDocument) -> Vec<String> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for def in document.enums() {
        *counts.entry(uc_first(&def.full_name)).or_default() += 1;
    }
    counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(name, _)| name)
        .collect()
}

/// Decode a schema document from a byte stream.
///
/// Empty or truncated input is an error; a partial document is never returned.
pub fn decode<R: Read>(reader: R) -> Result<SchemaDocument> {
    let document: SchemaDocument = serde_json::from_reader(reader)?;
    Ok(document)
}

/// Load a schema document from disk.
pub fn load_document(path: &Path) -> Result<SchemaDocument> {
    let file = File::open(path).map_err(|e| Error::Open {
        path: path.to_path_buf(),
        source: e,
    })?;
    decode(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_document_json() -> &'static str {
        r#"{
            "files": [
                {
                    "name": "user/status.proto",
                    "description": "",
                    "package": "user",
                    "hasEnums": true,
                    "hasExtensions": false,
                    "hasMessages": true,
                    "hasServices": false,
                    "enums": [
                        {
                            "name": "Status",
                            "longName": "Status",
                            "fullName": "user.Status",
                            "description": "Account status.",
                            "values": [
                                {"name": "ACTIVE", "number": "1", "description": "On"},
                                {"name": "DISABLED", "number": "2", "description": "Off"}
                            ]
                        }
                    ],
                    "extensions": [],
                    "messages": [{"name": "User", "fields": []}],
                    "services": []
                },
                {
                    "name": "empty.proto",
                    "package": "empty",
                    "hasEnums": false,
                    "enums": [
                        {"name": "Ghost", "longName": "Ghost", "fullName": "empty.Ghost", "values": []}
                    ]
                }
            ],
            "scalarValueTypes": [
                {"protoType": "double", "notes": "", "phpType": "float"}
            ]
        }"#
    }

    #[test]
    fn decode_sample_document() {
        let doc = decode(sample_document_json().as_bytes()).unwrap();
        assert_eq!(doc.files.len(), 2);

        let file = &doc.files[0];
        assert_eq!(file.name, "user/status.proto");
        assert_eq!(file.package, "user");
        assert!(file.has_enums);
        assert!(file.has_messages);
        assert!(!file.has_services);

        let status = &file.enums[0];
        assert_eq!(status.full_name, "user.Status");
        assert_eq!(status.values.len(), 2);
        assert_eq!(status.values[1].name, "DISABLED");
        assert_eq!(status.values[1].number, "2");
        assert_eq!(status.values[1].description, "Off");
    }

    #[test]
    fn collector_skips_files_without_enum_flag() {
        let doc = decode(sample_document_json().as_bytes()).unwrap();
        let names: Vec<&str> = doc.enums().map(|e| e.full_name.as_str()).collect();
        assert_eq!(names, vec!["user.Status"]);
    }

    #[test]
    fn collector_preserves_order_and_duplicates() {
        let json = r#"{"files": [
            {"hasEnums": true, "enums": [
                {"fullName": "a.B"}, {"fullName": "a.A"}
            ]},
            {"hasEnums": true, "enums": [
                {"fullName": "a.B"}
            ]}
        ]}"#;
        let doc = decode(json.as_bytes()).unwrap();
        let names: Vec<&str> = doc.enums().map(|e| e.full_name.as_str()).collect();
        assert_eq!(names, vec!["a.B", "a.A", "a.B"]);
        assert_eq!(duplicate_full_names(&doc), vec!["A.B"]);
    }

    #[test]
    fn duplicates_compare_normalized_names() {
        let json = r#"{"files": [
            {"hasEnums": true, "enums": [{"fullName": "example.Status"}]},
            {"hasEnums": true, "enums": [{"fullName": "Example.Status"}, {"fullName": "example.Other"}]}
        ]}"#;
        let doc = decode(json.as_bytes()).unwrap();
        assert_eq!(duplicate_full_names(&doc), vec!["Example.Status"]);
    }

    #[test]
    fn numeric_number_kept_as_text() {
        let json = r#"{"files": [{"hasEnums": true, "enums": [
            {"fullName": "x.Y", "values": [
                {"name": "NEG", "number": -3, "description": ""},
                {"name": "BIG", "number": "0x10", "description": ""}
            ]}
        ]}]}"#;
        let doc = decode(json.as_bytes()).unwrap();
        let values = &doc.files[0].enums[0].values;
        assert_eq!(values[0].number, "-3");
        assert_eq!(values[1].number, "0x10");
    }

    #[test]
    fn empty_input_is_decode_error() {
        let err = decode(&b""[..]).unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn truncated_input_is_decode_error() {
        let json = &sample_document_json()[..40];
        let err = decode(json.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn wrong_shape_is_decode_error() {
        let err = decode(&br#"{"files": {"not": "an array"}}"#[..]).unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn missing_file_is_open_error() {
        let path = std::env::temp_dir().join("php-enum-gen-does-not-exist.json");
        let err = load_document(&path).unwrap_err();
        assert!(matches!(err, Error::Open { .. }));
        assert!(err.to_string().contains("php-enum-gen-does-not-exist.json"));
    }
}
