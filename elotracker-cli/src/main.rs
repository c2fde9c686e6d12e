//! elotracker CLI
//!
//! Batch tools that ingest FIDE and USCF rating exports into the keyed
//! member store, plus read-side lookup through replicas.

mod cli_types;
mod commands;
mod error;
mod logging;
mod settings;

use clap::Parser;

use cli_types::{Cli, Commands, ConfigAction};
use commands::config::{run_config_path, run_config_show};
use commands::events::run_uscf_events;
use commands::fide::{run_fide_history, run_fide_latest};
use commands::lookup::run_lookup;
use commands::uscf::{run_uscf_history, run_uscf_latest};
use error::CliError;
use settings::{Settings, settings_path};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            // --help and --version are not errors
            std::process::exit(if e.use_stderr() { 1 } else { 0 });
        }
    };

    if let Err(e) = logging::init(cli.verbose, cli.quiet, cli.logfile.as_deref()) {
        eprintln!("Failed to set up logging: {e}");
        std::process::exit(1);
    }

    match run(cli) {
        Ok(()) => {}
        Err(CliError::Usage(msg)) => {
            eprintln!("error: {msg}");
            std::process::exit(1);
        }
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let path = cli.config.clone().unwrap_or_else(settings_path);
    let settings = Settings::load(&path, cli.config.is_some())?.with_data_dir(cli.data_dir);

    match cli.command {
        Commands::FideLatest { periods } => run_fide_latest(&settings, periods),
        Commands::FideHistory { files } => run_fide_history(&settings, files),
        Commands::UscfLatest { periods } => run_uscf_latest(&settings, periods),
        Commands::UscfHistory { files } => run_uscf_history(&settings, files),
        Commands::UscfEvents { path } => run_uscf_events(&settings, path),
        Commands::Lookup { federation, id } => run_lookup(&settings, federation, &id),
        Commands::Config { action } => match action {
            ConfigAction::Show => run_config_show(&settings, &path),
            ConfigAction::Path => {
                run_config_path(&path);
                Ok(())
            }
        },
    }
}
