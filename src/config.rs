//! Generator configuration.
//!
//! Everything the pipeline needs to know about where to read and where to
//! write is carried in a [`GeneratorConfig`] value passed to
//! [`crate::codegen::generate`]. The defaults reproduce the layout expected by
//! PHP projects consuming `ProtoCenter` enums.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::template::ClassTemplate;

/// Default schema document path.
pub const DEFAULT_INPUT: &str = "./grpc-doc.json";

/// Default directory generated classes are written under.
pub const DEFAULT_OUTPUT_ROOT: &str = "./src";

/// Default namespace prefix, in PHP namespace-separator notation.
pub const DEFAULT_ROOT_NAMESPACE: &str = "ProtoCenter\\";

/// Default source-file extension.
pub const DEFAULT_EXTENSION: &str = "php";

/// Default trait mixed into every generated class.
pub const DEFAULT_ENUM_TRAIT: &str = "\\App\\Enums\\Enum";

/// PHP namespace separator.
pub const NAMESPACE_SEPARATOR: char = '\\';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Path of the `protoc-gen-doc` JSON document.
    pub input: PathBuf,

    /// Directory that mirrors the namespace hierarchy below the root prefix.
    pub output_root: PathBuf,

    /// Namespace every generated class lives under (e.g., `ProtoCenter\`).
    pub root_namespace: String,

    /// File extension without the leading dot.
    pub extension: String,

    /// Fully-qualified trait used by each class for enum behaviour.
    pub enum_trait: String,

    /// Class skeleton the namespace, class name and constants are filled into.
    pub template: ClassTemplate,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output_root: PathBuf::from(DEFAULT_OUTPUT_ROOT),
            root_namespace: DEFAULT_ROOT_NAMESPACE.to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
            enum_trait: DEFAULT_ENUM_TRAIT.to_string(),
            template: ClassTemplate::default(),
        }
    }
}

impl GeneratorConfig {
    pub fn with_input(mut self, input: impl Into<PathBuf>) -> Self {
        self.input = input.into();
        self
    }

    pub fn with_output_root(mut self, output_root: impl Into<PathBuf>) -> Self {
        self.output_root = output_root.into();
        self
    }

    pub fn with_root_namespace(mut self, root_namespace: impl Into<String>) -> Self {
        self.root_namespace = root_namespace.into();
        self
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn with_enum_trait(mut self, enum_trait: impl Into<String>) -> Self {
        self.enum_trait = enum_trait.into();
        self
    }

    /// Replace the class template with one parsed from `text`.
    pub fn with_template_text(mut self, text: &str) -> Result<Self> {
        self.template = ClassTemplate::parse(text)?;
        Ok(self)
    }

    /// Absolute-or-relative location of a generated file.
    pub fn output_path(&self, relative: &Path) -> PathBuf {
        self.output_root.join(relative)
    }
}
