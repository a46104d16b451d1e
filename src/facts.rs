//! Loading implementor facts produced by an upstream extraction stage.

use crate::error::Result;
use crate::types::ImplementorFact;
use anyhow::Context;
use std::path::Path;

/// Reads facts from a JSON array, or from JSON Lines when the extension is `jsonl`.
pub fn load_facts(path: &Path) -> Result<Vec<ImplementorFact>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read facts at {}", path.display()))?;

    let is_jsonl = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("jsonl"));

    let facts = if is_jsonl {
        parse_json_lines(&content)
            .with_context(|| format!("Failed to parse facts at {}", path.display()))?
    } else {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse facts at {}", path.display()))?
    };

    tracing::debug!(path = %path.display(), count = facts.len(), "Loaded implementor facts");
    Ok(facts)
}

/// Parses one fact per non-blank line.
pub fn parse_json_lines(content: &str) -> Result<Vec<ImplementorFact>> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            serde_json::from_str(line).with_context(|| format!("Invalid fact on line {}", i + 1))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ImplementedType;
    use assert2::{check, let_assert};

    #[test]
    fn json_lines_skip_blank_lines() {
        let content = r#"{"implementing_library": "log", "implemented_type": "LogLocation", "trait_name": "Hash", "trait_owner_library": "core::hash"}

{"implementing_library": "log", "implemented_type": {"name": "LogLevel", "kind": "enum"}, "trait_name": "Hash", "trait_owner_library": "core::hash"}
"#;
        let_assert!(Ok(facts) = parse_json_lines(content));
        check!(facts.len() == 2);
        check!(facts[1].implemented_type == ImplementedType::enum_named("LogLevel"));
    }

    #[test]
    fn json_lines_report_line_number() {
        let content = "{\"trait_name\": \"Hash\"}\nnot json\n";
        let_assert!(Err(err) = parse_json_lines(content));
        check!(err.to_string() == "Invalid fact on line 2");
    }
}
