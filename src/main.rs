use clap::Parser;
use std::process;
use yamlvalid::{cli::Cli, config, handlers, podlint::OutputFormat};

fn main() {
    match run() {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn run() -> yamlvalid::Result<bool> {
    let cli = Cli::parse();

    // Initialize logging
    cli.init_logging();

    // Load configuration
    let config = config::load_config(cli.config.as_deref())?;

    let format = cli
        .format
        .map(OutputFormat::from)
        .unwrap_or(config.output.format);
    log::debug!("Using {:?} output", format);

    handlers::handle_validate(&cli.paths, format, &config)
}
