use std::fs;
use std::path::Path;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use locc::cli::Cli;
use locc::commands::{list_languages, run};
use locc::{EXIT_CONFIG_ERROR, EXIT_SUCCESS};

fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_env("LOCC_LOG").unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_level());

    let exit_code = match run_cli(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    };

    std::process::exit(exit_code);
}

fn run_cli(cli: &Cli) -> locc::Result<i32> {
    let options = cli.count_options();

    if cli.list_languages {
        print!("{}", list_languages(&options)?);
        return Ok(EXIT_SUCCESS);
    }

    let outcome = run(&options)?;
    let output = outcome.render(cli.format, cli.by_file)?;
    write_output(cli.output.as_deref(), &output)?;

    Ok(EXIT_SUCCESS)
}

fn write_output(path: Option<&Path>, content: &str) -> locc::Result<()> {
    match path {
        Some(path) => {
            fs::write(path, content)?;
            tracing::info!(path = %path.display(), "report written");
        }
        None => print!("{content}"),
    }
    Ok(())
}
