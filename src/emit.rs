//! Serialization of the index into the static data file read by the viewer.

use crate::error::Result;
use crate::index::ImplementorIndex;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::io::Write as _;
use std::path::Path;

/// On-disk format of the data file.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Registration script that hands the index to `window.register_implementors`.
    #[default]
    Js,
    Json,
}

/// Renders the complete file contents for `index`.
pub fn render_data_file(index: &ImplementorIndex, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Js => render_script(index),
        OutputFormat::Json => {
            let mut json =
                serde_json::to_string_pretty(index).context("Failed to serialize index")?;
            json.push('\n');
            Ok(json)
        }
    }
}

fn render_script(index: &ImplementorIndex) -> Result<String> {
    let mut out = String::from("(function() {var implementors = {};\n");

    for (library, descriptions) in index.iter() {
        let key = serde_json::to_string(library).context("Failed to encode library name")?;
        let _ = write!(out, "implementors[{}] = [", key);
        for description in descriptions {
            let value =
                serde_json::to_string(description).context("Failed to encode description")?;
            out.push_str(&value);
            out.push(',');
        }
        out.push_str("];\n");
    }

    out.push_str(
        "if (window.register_implementors) {\n    \
         window.register_implementors(implementors);\n\
         } else {\n    \
         window.pending_implementors = implementors;\n\
         }\n\
         })()\n",
    );
    Ok(out)
}

/// Writes `contents` to `path` atomically, creating parent directories as needed.
///
/// The data is written to a temporary file in the destination directory and then
/// renamed over the target, so readers never observe a partial file.
pub fn write_data_file(path: &Path, contents: &str) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent)
        .with_context(|| format!("Failed to create directory {}", parent.display()))?;

    let mut temp = tempfile::NamedTempFile::new_in(parent)
        .with_context(|| format!("Failed to create temporary file in {}", parent.display()))?;
    temp.write_all(contents.as_bytes())
        .context("Failed to write index data")?;
    temp.flush().context("Failed to flush index data")?;
    temp.persist(path)
        .with_context(|| format!("Failed to write index to {}", path.display()))?;

    tracing::debug!(path = %path.display(), bytes = contents.len(), "Wrote index data file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::IndexBuilder;
    use crate::types::{ImplementedType, ImplementorFact};
    use assert2::{check, let_assert};

    fn sample_index() -> ImplementorIndex {
        let facts = [
            ImplementorFact::new(
                "aho_corasick",
                ImplementedType::struct_named("Match"),
                "Hash",
                "core::hash",
            ),
            ImplementorFact::new(
                "log",
                ImplementedType::enum_named("LogLevel"),
                "Hash",
                "core::hash",
            ),
        ];
        IndexBuilder::default()
            .build(&facts)
            .expect("sample facts are well formed")
    }

    #[test]
    fn script_registers_or_stashes() {
        let_assert!(Ok(script) = render_data_file(&sample_index(), OutputFormat::Js));
        check!(script.starts_with(
            "(function() {var implementors = {};\n\
             implementors[\"core::hash\"] = [\"impl <a class=\\\"trait\\\""
        ));
        check!(script.contains(
            "if (window.register_implementors) {\n    \
             window.register_implementors(implementors);\n\
             } else {\n    \
             window.pending_implementors = implementors;\n\
             }\n\
             })()"
        ));
        check!(script.matches("implementors[").count() == 1);
    }

    #[test]
    fn script_for_empty_index_still_registers() {
        let_assert!(Ok(script) = render_data_file(&ImplementorIndex::default(), OutputFormat::Js));
        check!(!script.contains("implementors["));
        check!(script.contains("window.register_implementors(implementors);"));
    }

    #[test]
    fn json_round_trips_as_map() {
        let_assert!(Ok(json) = render_data_file(&sample_index(), OutputFormat::Json));
        let_assert!(Ok(value) = serde_json::from_str::<serde_json::Value>(&json));
        let_assert!(Some(entries) = value.get("core::hash").and_then(|v| v.as_array()));
        check!(entries.len() == 2);
    }

    #[test]
    fn write_replaces_existing_file() {
        let_assert!(Ok(dir) = tempfile::tempdir());
        let path = dir.path().join("nested/implementors.js");

        let_assert!(Ok(()) = write_data_file(&path, "first"));
        let_assert!(Ok(()) = write_data_file(&path, "second"));
        let_assert!(Ok(contents) = std::fs::read_to_string(&path));
        check!(contents == "second");

        let_assert!(Ok(entries) = std::fs::read_dir(path.parent().expect("has parent")));
        check!(entries.count() == 1);
    }
}
