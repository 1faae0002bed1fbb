mod cli;

use coursetime::probe::ffprobe_available;
use coursetime::report::{render, ProgressReportBuilder};

use anyhow::Result;
use clap::Parser;
use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "coursetime=trace,coursetime_probe=debug".to_string()
        } else {
            "coursetime=info,coursetime_probe=info".to_string()
        }
    });

    // stdout carries only the report
    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    if !ffprobe_available() {
        tracing::debug!("ffprobe not found on PATH; only the built-in container parsers will be used");
    }

    let builder = ProgressReportBuilder::from_filesystem();
    let report = builder.build(&cli.root_folder)?;

    print!("{}", render(&report)?);

    Ok(())
}
