//! Generate PHP enum classes from `protoc-gen-doc` JSON output.
//!
//! `php-enum-gen` reads the JSON document produced by
//! [protoc-gen-doc](https://github.com/pseudomuto/protoc-gen-doc) and writes
//! one PHP class per protobuf enum. Each enum value becomes a class constant
//! plus a `__`-prefixed constant holding its description:
//!
//! ```php
//! <?php
//! namespace ProtoCenter\Example;
//!
//! class Status
//! {
//!     use \App\Enums\Enum;
//!
//!     const ACTIVE = 1, __ACTIVE = "On";
//! }
//! ```
//!
//! # Features
//!
//! - Namespaces and file paths mirror the dotted protobuf name
//! - Named-slot templating (no accidental double substitution)
//! - Descriptions escaped for PHP double-quoted strings
//! - Deterministic output: byte-identical across runs
//!
//! # Usage
//!
//! ```no_run
//! use std::path::Path;
//!
//! use php_enum_gen::config::GeneratorConfig;
//!
//! let config = GeneratorConfig::default().with_output_root("generated/");
//! let document = php_enum_gen::schema::load_document(Path::new("grpc-doc.json"))?;
//! let stats = php_enum_gen::codegen::generate(&document, &config)?;
//! eprintln!("Generated {} classes", stats.enums_generated);
//! # Ok::<(), php_enum_gen::error::Error>(())
//! ```

pub mod codegen;
pub mod config;
pub mod error;
pub mod naming;
pub mod schema;
pub mod template;
