//! PHP class generation from a decoded schema document.
//!
//! Every enum of every file flagged `hasEnums` becomes one PHP class:
//! - the dotted full name is resolved to a namespace, class name and path
//! - each enum value becomes a value constant plus a `__`-prefixed
//!   description constant
//! - the class is written under the output root, creating directories
//!
//! The generated output is deterministic: identical input always produces
//! byte-identical files. Enums are processed in document order, so when two
//! enums resolve to the same path the later one wins.

use std::fmt::Write;
use std::path::{Path, PathBuf};

use crate::config::GeneratorConfig;
use crate::error::{Error, Result};
use crate::naming::{ResolvedIdentity, resolve};
use crate::schema::{EnumDef, EnumMember, SchemaDocument, duplicate_full_names};
use crate::template::SlotValues;

/// Statistics collected during generation for reporting.
#[derive(Debug, Default)]
pub struct GenerationStats {
    pub files_scanned: usize,
    pub files_with_enums: usize,
    pub enums_generated: usize,
    pub members_rendered: usize,
    pub duplicate_names: usize,
}

/// A class that has been written to disk.
#[derive(Debug, Clone)]
pub struct GeneratedClass {
    pub identity: ResolvedIdentity,
    pub path: PathBuf,
}

/// Generate one PHP class per collected enum.
pub fn generate(document: &SchemaDocument, config: &GeneratorConfig) -> Result<GenerationStats> {
    generate_with(document, config, |_| {})
}

/// Generate one PHP class per collected enum, reporting each written class.
///
/// `on_generated` runs right after each file is written. The first failure
/// aborts the run; classes already written stay on disk.
pub fn generate_with<F>(
    document: &SchemaDocument,
    config: &GeneratorConfig,
    mut on_generated: F,
) -> Result<GenerationStats>
where
    F: FnMut(&GeneratedClass),
{
    let mut stats = GenerationStats {
        files_scanned: document.files.len(),
        files_with_enums: document.files.iter().filter(|f| f.has_enums).count(),
        ..GenerationStats::default()
    };

    let duplicates = duplicate_full_names(document);
    if !duplicates.is_empty() {
        tracing::warn!(
            names = %duplicates.join(", "),
            "enum names declared more than once; the last declaration wins"
        );
    }
    stats.duplicate_names = duplicates.len();

    for def in document.enums() {
        let generated = emit_class(def, config)?;
        stats.enums_generated += 1;
        stats.members_rendered += def.values.len();
        on_generated(&generated);
    }

    tracing::info!(
        files = stats.files_scanned,
        enums = stats.enums_generated,
        output_root = %config.output_root.display(),
        "generation finished"
    );
    Ok(stats)
}

/// Resolve, render and write the class for a single enum.
///
/// A non-empty constant block is preceded by a blank line; an enum without
/// values leaves the class body with just the trait line.
pub fn emit_class(def: &EnumDef, config: &GeneratorConfig) -> Result<GeneratedClass> {
    let identity = resolve(&def.full_name, config)?;
    let block = render_constants(&def.values);
    let constants = if block.is_empty() {
        block
    } else {
        format!("\n{block}")
    };
    let text = config.template.render(&SlotValues {
        namespace: &identity.namespace,
        class_name: &identity.class_name,
        constants: &constants,
        enum_trait: &config.enum_trait,
    });

    let mut content = text.trim_end().to_string();
    content.push('\n');

    let path = config.output_path(&identity.relative_path);
    write_file(&path, &content)?;
    tracing::debug!(
        enum_name = %def.full_name,
        class = %identity.qualified_name,
        path = %path.display(),
        "wrote class"
    );

    Ok(GeneratedClass { identity, path })
}

// ── Constant rendering ─────────────────────────────────────────────────

/// Render the constant block for an enum's values, one line per value in
/// input order.
///
/// ```
/// use php_enum_gen::codegen::render_constants;
/// use php_enum_gen::schema::EnumMember;
///
/// let block = render_constants(&[EnumMember {
///     name: "ACTIVE".to_string(),
///     number: "1".to_string(),
///     description: "On".to_string(),
/// }]);
/// assert_eq!(block, "    const ACTIVE = 1, __ACTIVE = \"On\";");
/// ```
pub fn render_constants(values: &[EnumMember]) -> String {
    let mut out = String::new();
    for value in values {
        let name = &value.name;
        writeln!(
            out,
            "    const {name} = {}, __{name} = \"{}\";",
            value.number,
            escape_description(&value.description)
        )
        .unwrap();
    }
    out.trim_end().to_string()
}

/// Escape text for a PHP double-quoted string literal.
///
/// Backslashes, double quotes and `$` are backslash-escaped; newlines,
/// carriage returns and tabs become their escape sequences. Anything else is
/// copied verbatim.
pub fn escape_description(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '$' => out.push_str("\\$"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out
}

// ── Shared helpers ─────────────────────────────────────────────────────

/// Write content to a file, creating parent directories as needed.
fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| Error::Write {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }
    std::fs::write(path, content).map_err(|e| Error::Write {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(())
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn members() -> impl Strategy<Value = Vec<EnumMember>> {
        prop::collection::vec(
            ("[A-Z][A-Z0-9_]{0,10}", "-?[0-9]{1,5}", "[a-zA-Z0-9 .,]{0,20}").prop_map(
                |(name, number, description)| EnumMember {
                    name,
                    number,
                    description,
                },
            ),
            0..10,
        )
    }

    proptest! {
        /// Line i of the block is the rendering of member i.
        #[test]
        fn render_is_order_preserving(values in members()) {
            let block = render_constants(&values);
            let lines: Vec<&str> = if block.is_empty() { Vec::new() } else { block.lines().collect() };
            prop_assert_eq!(lines.len(), values.len());
            for (line, value) in lines.iter().zip(&values) {
                let value_const = format!("const {} = {}", value.name, value.number);
                let desc_const = format!("__{} = \"{}\"", value.name, value.description);
                prop_assert!(line.contains(&value_const));
                prop_assert!(line.contains(&desc_const));
            }
        }

        /// Rendering has no trailing whitespace.
        #[test]
        fn render_is_trimmed(values in members()) {
            let block = render_constants(&values);
            prop_assert_eq!(block.trim_end(), block.as_str());
        }
    }
}
