use crate::config::Config;
use crate::emit::OutputFormat;
use crate::render::DescriptionStyle;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "implindex")]
#[command(about = "Build rustdoc implementor index data files", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file (defaults to ./implindex.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the index and write the data file
    Build {
        /// Facts file (JSON array, or JSON Lines with a .jsonl extension)
        facts: PathBuf,
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
        #[arg(long, value_enum)]
        style: Option<DescriptionStyle>,
    },
    /// Validate facts and print a per-library summary without writing
    Check {
        facts: PathBuf,
        #[arg(long, value_enum)]
        style: Option<DescriptionStyle>,
    },
}

impl Commands {
    pub fn facts(&self) -> &PathBuf {
        match self {
            Self::Build { facts, .. } | Self::Check { facts, .. } => facts,
        }
    }

    /// Applies command line overrides on top of file configuration.
    pub fn apply_overrides(&self, config: &mut Config) {
        match self {
            Self::Build {
                output,
                format,
                style,
                ..
            } => {
                if let Some(output) = output {
                    config.output.clone_from(output);
                }
                if let Some(format) = format {
                    config.format = *format;
                }
                if let Some(style) = style {
                    config.style = *style;
                }
            }
            Self::Check { style, .. } => {
                if let Some(style) = style {
                    config.style = *style;
                }
            }
        }
    }
}
