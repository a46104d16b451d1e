//! The implementor index and its builder.

use crate::error::BuildError;
use crate::render::{DescriptionRenderer, RenderOptions};
use crate::types::ImplementorFact;
use serde::Serialize;
use std::collections::BTreeMap;

/// Mapping from trait-owning library to rendered implementor descriptions.
///
/// Descriptions under one key keep discovery order. Keys iterate in sorted
/// order so the serialized form is byte-stable across builds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ImplementorIndex {
    entries: BTreeMap<String, Vec<String>>,
}

impl ImplementorIndex {
    pub fn get(&self, library: &str) -> Option<&[String]> {
        self.entries.get(library).map(Vec::as_slice)
    }

    pub fn libraries(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(library, descriptions)| (library.as_str(), descriptions.as_slice()))
    }

    /// Number of libraries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total descriptions across all libraries.
    pub fn implementor_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }
}

/// Builds an [`ImplementorIndex`] from extracted facts.
pub struct IndexBuilder {
    options: RenderOptions,
}

impl IndexBuilder {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Validates every fact, then groups rendered descriptions by trait owner.
    ///
    /// Fails on the first malformed fact without producing a partial index.
    /// Duplicate facts produce duplicate descriptions.
    pub fn build(&self, facts: &[ImplementorFact]) -> Result<ImplementorIndex, BuildError> {
        for (position, fact) in facts.iter().enumerate() {
            if let Some(field) = fact.missing_field() {
                tracing::warn!(position, %field, "Rejecting malformed implementor fact");
                return Err(BuildError::MalformedFact { position, field });
            }
        }

        let renderer = DescriptionRenderer::new(&self.options);
        let mut entries: BTreeMap<String, Vec<String>> = BTreeMap::new();

        for fact in facts {
            let fact = fact.normalized();
            let description = renderer.format_description(&fact);
            entries
                .entry(fact.trait_owner_library)
                .or_default()
                .push(description);
        }

        for (library, descriptions) in &entries {
            tracing::debug!(
                library = library.as_str(),
                implementors = descriptions.len(),
                "Indexed library"
            );
        }
        tracing::info!(
            libraries = entries.len(),
            implementors = facts.len(),
            "Built implementor index"
        );

        Ok(ImplementorIndex { entries })
    }
}

impl Default for IndexBuilder {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::DescriptionStyle;
    use crate::types::{FactField, ImplementedType};
    use assert2::{check, let_assert};

    fn plain_builder() -> IndexBuilder {
        IndexBuilder::new(RenderOptions {
            style: DescriptionStyle::Plain,
            ..RenderOptions::default()
        })
    }

    fn hash_fact(lib: &str, ty: ImplementedType) -> ImplementorFact {
        ImplementorFact::new(lib, ty, "Hash", "core::hash")
    }

    #[test]
    fn empty_input_yields_empty_index() {
        let_assert!(Ok(index) = IndexBuilder::default().build(&[]));
        check!(index.is_empty());
        check!(index.implementor_count() == 0);
    }

    #[test]
    fn single_fact_yields_single_entry() {
        let facts = [hash_fact("aho_corasick", ImplementedType::struct_named("Match"))];
        let_assert!(Ok(index) = plain_builder().build(&facts));
        check!(index.len() == 1);
        check!(index.get("core::hash") == Some(&["impl Hash for Match".to_string()][..]));
    }

    #[test]
    fn descriptions_keep_input_order() {
        let facts = [
            hash_fact("aho_corasick", ImplementedType::struct_named("Match")),
            hash_fact("log", ImplementedType::enum_named("LogLevel")),
        ];
        let_assert!(Ok(index) = plain_builder().build(&facts));
        let_assert!(Some(descriptions) = index.get("core::hash"));
        check!(descriptions == ["impl Hash for Match", "impl Hash for LogLevel"]);
    }

    #[test]
    fn duplicates_are_kept() {
        let fact = hash_fact("log", ImplementedType::enum_named("LogLevel"));
        let_assert!(Ok(index) = plain_builder().build(&[fact.clone(), fact]));
        check!(index.implementor_count() == 2);
    }

    #[test]
    fn malformed_fact_reports_position_and_field() {
        let facts = [
            hash_fact("log", ImplementedType::enum_named("LogLevel")),
            ImplementorFact::new("log", ImplementedType::enum_named("LogLevelFilter"), "Hash", ""),
        ];
        let_assert!(Err(err) = plain_builder().build(&facts));
        check!(
            err == BuildError::MalformedFact {
                position: 1,
                field: FactField::TraitOwnerLibrary
            }
        );
    }

    #[test]
    fn trait_owner_key_is_trimmed() {
        let facts = [ImplementorFact::new(
            "log",
            ImplementedType::enum_named("LogLevel"),
            "Hash",
            " core :: hash ",
        )];
        let_assert!(Ok(index) = plain_builder().build(&facts));
        check!(index.libraries().collect::<Vec<_>>() == ["core::hash"]);

        let_assert!(Ok(index) = IndexBuilder::default().build(&facts));
        let_assert!(Some([description]) = index.get("core::hash"));
        check!(description.contains("title=\"trait core::hash::Hash\""));
        let trait_link = "https://doc.rust-lang.org/nightly/core/hash/trait.Hash.html";
        check!(description.contains(&format!("href=\"{}\"", trait_link)));
    }

    #[test]
    fn serializes_as_flat_object() {
        let facts = [hash_fact("aho_corasick", ImplementedType::struct_named("Match"))];
        let_assert!(Ok(index) = plain_builder().build(&facts));
        let_assert!(Ok(json) = serde_json::to_string(&index));
        check!(json == r#"{"core::hash":["impl Hash for Match"]}"#);
    }
}
