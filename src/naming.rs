//! Maps dotted protobuf enum names to PHP class identities.
//!
//! # Resolution rules
//!
//! | Full name | Namespace | Class | Path (under output root) |
//! |-----------|-----------|-------|--------------------------|
//! | `status` | `ProtoCenter\` | `Status` | `Status.php` |
//! | `example.Status` | `ProtoCenter\Example` | `Status` | `Example/Status.php` |
//! | `user.v1.User.State` | `ProtoCenter\User\v1\User` | `State` | `User/v1/User/State.php` |
//!
//! Only the first character of the whole name is uppercased; later segments
//! keep their case.

use std::path::{Component, Path, PathBuf};

use crate::config::{GeneratorConfig, NAMESPACE_SEPARATOR};
use crate::error::{Error, Result};

/// Namespace, class name and file location derived from one enum name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedIdentity {
    /// PHP namespace the class is declared in.
    pub namespace: String,

    /// Short class name (last segment).
    pub class_name: String,

    /// The whole normalized identity in namespace-separator form, without the
    /// root prefix (e.g., `Example\Status`).
    pub qualified_name: String,

    /// File location relative to the output root.
    pub relative_path: PathBuf,
}

/// Uppercase the first character of `s`, leaving the rest untouched.
///
/// - `"example.status"` → `"Example.status"`
/// - `"Status"` → `"Status"`
/// - `""` → `""`
pub fn uc_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

/// Resolve a dotted fully-qualified enum name into a class identity.
pub fn resolve(full_name: &str, config: &GeneratorConfig) -> Result<ResolvedIdentity> {
    if full_name.is_empty() {
        return Err(Error::InvalidName {
            name: full_name.to_string(),
            reason: "name is empty",
        });
    }

    let normalized = uc_first(full_name);
    let segments: Vec<&str> = normalized.split('.').collect();
    if segments.iter().any(|s| s.is_empty()) {
        return Err(Error::InvalidName {
            name: full_name.to_string(),
            reason: "name contains an empty segment",
        });
    }
    if !segments.iter().all(|s| is_path_component(s)) {
        return Err(Error::InvalidName {
            name: full_name.to_string(),
            reason: "segment is not a plain path component",
        });
    }

    let Some((&class_name, parents)) = segments.split_last() else {
        return Err(Error::InvalidName {
            name: full_name.to_string(),
            reason: "name has no segments",
        });
    };

    let separator = NAMESPACE_SEPARATOR.to_string();
    let namespace = if parents.is_empty() {
        config.root_namespace.clone()
    } else {
        format!("{}{}", config.root_namespace, parents.join(&separator))
    };

    let mut relative_path: PathBuf = parents.iter().collect();
    relative_path.push(format!("{class_name}.{}", config.extension));

    Ok(ResolvedIdentity {
        namespace,
        class_name: class_name.to_string(),
        qualified_name: segments.join(&separator),
        relative_path,
    })
}

/// Whether `segment` is exactly one normal path component.
fn is_path_component(segment: &str) -> bool {
    if segment.contains(['/', '\\']) {
        return false;
    }
    let mut components = Path::new(segment).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}
