//! strand CLI - runs native operations through the status-or-value boundary.
//!
//! ```text
//! main() -> StrandConfig::load() -> init_tracing() -> Command::parse() -> execute()
//!                                                                         |
//!                                                          Output | BoundaryFailure
//! ```
//!
//! Command output goes to stdout (JSON for values, raw text for `cat`).
//! Failures go to stderr with exit status 1; usage errors exit with 2.
//! Logs never touch stdout: they go to `~/.strand/logs/strand.log`.

mod commands;

use std::{
    env,
    fs::{self, OpenOptions},
    io, iter,
    path::{Path, PathBuf},
    process::ExitCode,
    sync::Mutex,
};

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use strand_bindings::hts_verbose;
use strand_config::{ConfigError, StrandConfig};

use crate::commands::{Command, Output, USAGE};

fn init_tracing(config: Option<&StrandConfig>) {
    let fallback = config.map_or_else(
        || hts_verbose::get().level_filter().to_string(),
        |cfg| {
            cfg.log_filter()
                .unwrap_or_else(|| cfg.native_verbosity().level_filter().to_string())
        },
    );
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&fallback))
        .unwrap_or_else(|_| EnvFilter::try_new("warn").expect("warn filter is valid"));

    let (log_file, init_warnings) = open_strand_log_file();

    if let Some((log_path, file)) = log_file {
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(env_filter)
            .init();

        tracing::debug!(path = %log_path.display(), "Logging initialized");
        for warning in init_warnings {
            tracing::warn!("{warning}");
        }
        return;
    }

    // Without a log file, stay silent rather than mixing logs into command output.
    tracing_subscriber::registry().with(env_filter).init();
}

/// First log file that can be opened, plus a warning per candidate that failed.
fn open_strand_log_file() -> (Option<(PathBuf, fs::File)>, Vec<String>) {
    let mut warnings = Vec::new();
    let opened = strand_log_file_candidates()
        .into_iter()
        .find_map(|candidate| match open_append(&candidate) {
            Ok(file) => Some((candidate, file)),
            Err(e) => {
                warnings.push(format!("Failed to open log file {}: {e}", candidate.display()));
                None
            }
        });
    (opened, warnings)
}

fn open_append(path: &Path) -> io::Result<fs::File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// `logs/strand.log` beside the config file, then under `./.strand`.
fn strand_log_file_candidates() -> Vec<PathBuf> {
    let log_in = |dir: &Path| dir.join("logs").join("strand.log");
    StrandConfig::path()
        .as_deref()
        .and_then(Path::parent)
        .map(log_in)
        .into_iter()
        .chain(iter::once(log_in(Path::new(".strand"))))
        .collect()
}

fn main() -> ExitCode {
    let (config, config_error) = match StrandConfig::load() {
        Ok(config) => (config, None),
        Err(err) => (None, Some(err)),
    };
    init_tracing(config.as_ref());
    if let Some(err) = config_error.as_ref() {
        report_config_error(err);
    }

    if let Some(config) = config.as_ref() {
        hts_verbose::set(config.native_verbosity());
    }

    let args: Vec<String> = env::args().skip(1).collect();
    let command = match Command::parse(&args) {
        Ok(command) => command,
        Err(err) => {
            eprintln!("error: {err:#}\n\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    tracing::debug!(?command, "Running command");
    match command.execute() {
        Ok(Output::Json(value)) => println!("{value}"),
        Ok(Output::Text(text)) => print!("{text}"),
        Ok(Output::Nothing) => {}
        Err(err) => {
            tracing::error!(operation = %err.operation(), code = %err.code(), "{}", err.message());
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    }
    ExitCode::SUCCESS
}

fn report_config_error(err: &ConfigError) {
    tracing::warn!(path = %err.path().display(), "Ignoring config: {err}");
    eprintln!("warning: {err}; using defaults");
}
