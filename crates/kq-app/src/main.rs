use std::io;
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use atty::Stream;
use clap::Parser;
use kq_config::Config;
use kq_core::{EntryStore, Format, SelectedQuiz};
use rand::SeedableRng;
use rand::rngs::StdRng;

pub mod cli;
pub mod error;
pub mod render;
pub mod session;

#[cfg(test)]
mod tests;

use self::cli::Cli;
use self::error::{AppError, EXIT_USAGE};
use self::render::TerminalRenderer;
use self::session::{KEY_HELP, run_session};

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version land here too and are not failures
            let code = if err.use_stderr() { EXIT_USAGE } else { 0 };
            let _ = err.print();
            return ExitCode::from(code);
        }
    };

    init_tracing(&cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!("exiting with code {}: {e:?}", e.exit_code());
            eprintln!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}

fn init_tracing(cli: &Cli) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(cli.log_level()));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false);

    if cli.log_json {
        builder.json().init();
    } else {
        builder.init();
    }
}

pub fn run(cli: &Cli) -> Result<(), AppError> {
    let config = cli.resolve_config()?;
    let store = load_store(cli, &config)?;

    if cli.check {
        let report = store.report();
        println!(
            "{} entries from {} file(s): {} lines, {} skipped, {} malformed",
            report.entries, report.files, report.lines, report.skipped, report.malformed
        );
        return Ok(());
    }

    let mut quiz = select_quiz(store, cli.seed, &config)?;
    let interactive = !cli.once && atty::is(Stream::Stdin);
    if interactive {
        eprintln!("{KEY_HELP}");
    }

    let mut renderer = TerminalRenderer::new(io::stdout(), config.ui.width);
    run_session(&mut quiz, io::stdin().lock(), &mut renderer, interactive)
        .map_err(AppError::Display)
}

/// Compile the format, then read every vocab file; nothing is opened if the format is malformed
pub fn load_store(cli: &Cli, config: &Config) -> Result<EntryStore, AppError> {
    let format = Format::with_capacity(&config.format.format, config.format.field_capacity)?;
    tracing::info!("Using format {format}");
    Ok(EntryStore::load_files(&cli.files, &format)?)
}

/// Seed once, then draw the quiz entry
pub fn select_quiz(
    store: EntryStore,
    seed: Option<u64>,
    config: &Config,
) -> Result<SelectedQuiz, AppError> {
    let seed = seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_nanos() as u64)
            .unwrap_or_default()
    });
    let mut rng = StdRng::seed_from_u64(seed);

    Ok(store
        .select(&mut rng)?
        .with_title(config.ui.title.clone())
        .starting_at(config.ui.initial_script))
}
