use anyhow::{Context, Result};
use clap::Parser;
use tracefront::cli::{Cli, OutputFormat};
use tracefront::report::ConfigReport;
use tracefront::settings::FrontEndArgs;
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.debug);

    if cli.args.is_empty() {
        anyhow::bail!("Must specify front-end arguments. Usage: tracefront -- [--FLAG[=VALUE]...] PROGRAM [ARGS...]");
    }

    let args = FrontEndArgs::parse(cli.args.as_slice()).context("Failed to resolve front-end arguments")?;
    let report = ConfigReport::from_args(&args);

    match cli.format {
        OutputFormat::Text => print!("{}", report.to_text()),
        OutputFormat::Json => println!("{}", report.to_json()?),
    }

    Ok(())
}
