use anyhow::Context;
use clap::Parser;
use rustdoc_implementors::cli::{Cli, Commands};
use rustdoc_implementors::{Config, Registry, load_facts, pipeline};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    rustdoc_implementors::tracing::init(cli.verbose);

    let mut config = Config::load(cli.config.as_deref())?;
    cli.command.apply_overrides(&mut config);

    let facts = load_facts(cli.command.facts())?;

    match &cli.command {
        Commands::Build { .. } => {
            let mut registry = Registry::new();
            registry
                .attach(|index| {
                    for (library, descriptions) in index.iter() {
                        tracing::debug!(
                            library,
                            implementors = descriptions.len(),
                            "Viewer received library"
                        );
                    }
                })
                .context("Failed to start viewer")?;

            let report = pipeline::run_build(&facts, &config, &mut registry)?;
            println!(
                "Wrote {} implementors across {} libraries to {}",
                report.implementors,
                report.libraries,
                report.output.display()
            );
        }
        Commands::Check { .. } => {
            let index = pipeline::check(&facts, &config)?;
            for (library, descriptions) in index.iter() {
                println!("{}: {}", library, descriptions.len());
            }
            println!(
                "{} facts OK ({} libraries)",
                index.implementor_count(),
                index.len()
            );
        }
    }

    Ok(())
}
