//! Fact types describing trait-implementation relationships.

use rustdoc_types::ItemKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One "type implements trait" relationship discovered by upstream extraction.
///
/// String fields default to empty when absent from the input so that missing
/// fields are reported by the index builder as [`crate::BuildError::MalformedFact`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImplementorFact {
    /// Library that provides the implementation.
    #[serde(default)]
    pub implementing_library: String,
    #[serde(default)]
    pub implemented_type: ImplementedType,
    #[serde(default)]
    pub trait_name: String,
    /// Library (or library module path, e.g. `core::hash`) that defines the trait.
    #[serde(default)]
    pub trait_owner_library: String,
    /// Lifetime and type parameters in declaration order, e.g. `["'a", "T"]`.
    #[serde(default)]
    pub generic_params: Vec<String>,
}

impl ImplementorFact {
    pub fn new(
        implementing_library: impl Into<String>,
        implemented_type: ImplementedType,
        trait_name: impl Into<String>,
        trait_owner_library: impl Into<String>,
    ) -> Self {
        Self {
            implementing_library: implementing_library.into(),
            implemented_type,
            trait_name: trait_name.into(),
            trait_owner_library: trait_owner_library.into(),
            generic_params: Vec::new(),
        }
    }

    pub fn with_generic_params<I, S>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.generic_params = params.into_iter().map(Into::into).collect();
        self
    }

    /// Copy with surrounding whitespace trimmed and library paths rejoined
    /// without blank segments, so keys, titles and links agree.
    pub fn normalized(&self) -> Self {
        let ty = &self.implemented_type;
        Self {
            implementing_library: normalize_path(&self.implementing_library),
            implemented_type: ImplementedType {
                name: ty.name.trim().to_string(),
                kind: ty.kind,
                path: ty
                    .path
                    .iter()
                    .map(String::as_str)
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect(),
            },
            trait_name: self.trait_name.trim().to_string(),
            trait_owner_library: normalize_path(&self.trait_owner_library),
            generic_params: self
                .generic_params
                .iter()
                .map(|p| p.trim().to_string())
                .collect(),
        }
    }

    /// Returns the first required field that is missing or blank.
    pub fn missing_field(&self) -> Option<FactField> {
        let blank = |s: &str| s.trim().is_empty();

        if normalize_path(&self.implementing_library).is_empty() {
            Some(FactField::ImplementingLibrary)
        } else if normalize_path(&self.trait_owner_library).is_empty() {
            Some(FactField::TraitOwnerLibrary)
        } else if blank(&self.trait_name) {
            Some(FactField::TraitName)
        } else if blank(&self.implemented_type.name) {
            Some(FactField::ImplementedType)
        } else {
            None
        }
    }
}

/// The concrete type on the right-hand side of an `impl Trait for Type`.
///
/// Deserializes from either a bare type name (`"Match"`, kind `struct`) or a
/// descriptor object `{ "name": "LogLevel", "kind": "enum", "path": [] }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ImplementedTypeRepr")]
pub struct ImplementedType {
    pub name: String,
    pub kind: ItemKind,
    /// Module path inside the implementing library, without the library itself.
    pub path: Vec<String>,
}

impl ImplementedType {
    pub fn new(name: impl Into<String>, kind: ItemKind) -> Self {
        Self {
            name: name.into(),
            kind,
            path: Vec::new(),
        }
    }

    pub fn struct_named(name: impl Into<String>) -> Self {
        Self::new(name, ItemKind::Struct)
    }

    pub fn enum_named(name: impl Into<String>) -> Self {
        Self::new(name, ItemKind::Enum)
    }

    /// Places the type inside a module path, e.g. `actors::actor_ref`.
    pub fn in_module(mut self, module: &str) -> Self {
        self.path = path_segments(module).map(str::to_string).collect();
        self
    }

    /// Fully qualified path rooted at `library`, e.g. `robots::actors::actor_ref::ActorPath`.
    pub fn qualified_path(&self, library: &str) -> String {
        let mut segments = Vec::with_capacity(self.path.len() + 2);
        segments.push(library);
        segments.extend(self.path.iter().map(String::as_str));
        segments.push(&self.name);
        segments.join("::")
    }
}

impl Default for ImplementedType {
    fn default() -> Self {
        Self::new(String::new(), ItemKind::Struct)
    }
}

/// Non-blank `::` segments of a path, trimmed.
pub fn path_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split("::").map(str::trim).filter(|s| !s.is_empty())
}

fn normalize_path(path: &str) -> String {
    path_segments(path).collect::<Vec<_>>().join("::")
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ImplementedTypeRepr {
    Name(String),
    Detailed {
        #[serde(default)]
        name: String,
        #[serde(default = "default_kind")]
        kind: ItemKind,
        #[serde(default)]
        path: Vec<String>,
    },
}

const fn default_kind() -> ItemKind {
    ItemKind::Struct
}

impl From<ImplementedTypeRepr> for ImplementedType {
    fn from(repr: ImplementedTypeRepr) -> Self {
        match repr {
            ImplementedTypeRepr::Name(name) => Self::struct_named(name),
            ImplementedTypeRepr::Detailed { name, kind, path } => Self { name, kind, path },
        }
    }
}

/// Required fact fields, named as they appear in the input format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FactField {
    ImplementingLibrary,
    TraitOwnerLibrary,
    TraitName,
    ImplementedType,
}

impl FactField {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ImplementingLibrary => "implementing_library",
            Self::TraitOwnerLibrary => "trait_owner_library",
            Self::TraitName => "trait_name",
            Self::ImplementedType => "implemented_type.name",
        }
    }
}

impl fmt::Display for FactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
