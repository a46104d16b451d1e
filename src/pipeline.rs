//! One documentation build: facts in, data file out, index handed to the viewer.

use crate::config::Config;
use crate::emit::{render_data_file, write_data_file};
use crate::error::{RegistryError, Result};
use crate::index::{ImplementorIndex, IndexBuilder};
use crate::registry::{Delivery, Registry};
use crate::types::ImplementorFact;
use anyhow::Context;
use std::path::PathBuf;

/// Summary of a completed build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub output: PathBuf,
    pub libraries: usize,
    pub implementors: usize,
    pub delivery: Delivery,
}

/// Builds the index without writing anything.
pub fn check(facts: &[ImplementorFact], config: &Config) -> Result<ImplementorIndex> {
    let index = IndexBuilder::new(config.render_options())
        .build(facts)
        .context("Failed to build implementor index")?;
    Ok(index)
}

/// Builds the index, writes the data file, then submits the index to `registry`.
///
/// Nothing is written if the facts are malformed or the registry has already
/// received this build's index.
pub fn run_build(
    facts: &[ImplementorFact],
    config: &Config,
    registry: &mut Registry,
) -> Result<BuildReport> {
    if registry.is_submitted() {
        return Err(RegistryError::AlreadySubmitted)
            .context("Failed to register implementor index");
    }

    let index = check(facts, config)?;
    let contents = render_data_file(&index, config.format)?;
    write_data_file(&config.output, &contents)?;

    let libraries = index.len();
    let implementors = index.implementor_count();
    let delivery = registry
        .submit(index)
        .context("Failed to register implementor index")?;

    tracing::info!(
        output = %config.output.display(),
        libraries,
        implementors,
        ?delivery,
        "Build complete"
    );

    Ok(BuildReport {
        output: config.output.clone(),
        libraries,
        implementors,
        delivery,
    })
}
