//! Fixture generator CLI for the registration and profile form tests.
//!
//! Each subcommand writes one fixture file; `all` writes every kind with its
//! default count. Runs are reproducible when `--seed` and
//! `--reference-date` are pinned.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use camino::Utf8PathBuf;
use cap_std::ambient_authority;
use cap_std::fs::Dir;
use chrono::{Local, NaiveDate};
use clap::builder::RangedU64ValueParser;
use clap::{Args, Parser, Subcommand};
use form_fixtures::{
    DEFAULT_PASSWORD_LENGTH, FixtureGenerator, FixtureKind, GenerationError, GenerationSettings,
    WriteError, init_logging, write_batch,
};
use rand::Rng;
use thiserror::Error;
use tracing::info;

/// Largest `--count` accepted for a single fixture file.
const MAX_RECORD_COUNT: u64 = 1_000_000;

/// Largest `--password-length` accepted; matches the generator's cap.
const MAX_PASSWORD_LENGTH_ARG: u64 = 4096;

/// `form-fixtures` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "form-fixtures",
    about = "Generate JSON fixtures for the registration and profile form tests",
    version
)]
struct CliArgs {
    #[command(subcommand)]
    command: Command,
    /// RNG seed; a random seed is chosen and logged when omitted.
    #[arg(long, global = true, env = "FORM_FIXTURES_SEED")]
    seed: Option<u64>,
    /// Requested password length (values below 4 are raised to 4).
    #[arg(
        long,
        global = true,
        env = "FORM_FIXTURES_PASSWORD_LENGTH",
        default_value_t = DEFAULT_PASSWORD_LENGTH,
        value_parser = RangedU64ValueParser::<usize>::new().range(0..=MAX_PASSWORD_LENGTH_ARG)
    )]
    password_length: usize,
    /// Day that date windows are measured back from; defaults to today.
    #[arg(
        long,
        global = true,
        env = "FORM_FIXTURES_REFERENCE_DATE",
        value_name = "YYYY-MM-DD"
    )]
    reference_date: Option<NaiveDate>,
    /// Directory fixture files are written into.
    #[arg(
        long,
        global = true,
        env = "FORM_FIXTURES_OUTPUT_DIR",
        value_name = "path",
        default_value = "."
    )]
    output_dir: PathBuf,
}

#[derive(Debug, Clone, Subcommand)]
enum Command {
    /// Valid registration records.
    Registration(KindArgs),
    /// Registration credentials with malformed email addresses.
    InvalidEmail(KindArgs),
    /// Registration credentials with mismatched passwords.
    MismatchedPassword(KindArgs),
    /// Profile work experience and education records.
    Profile(KindArgs),
    /// Every fixture kind with default counts and file names.
    All,
}

#[derive(Debug, Clone, Args)]
struct KindArgs {
    /// Number of records; defaults to the kind's usual count.
    #[arg(
        long,
        value_parser = RangedU64ValueParser::<usize>::new().range(0..=MAX_RECORD_COUNT)
    )]
    count: Option<usize>,
    /// File name inside the output directory.
    #[arg(long, value_name = "file")]
    output: Option<Utf8PathBuf>,
}

/// A single fixture file to produce.
#[derive(Debug, Clone)]
struct Job {
    kind: FixtureKind,
    count: usize,
    file_name: Utf8PathBuf,
}

impl Job {
    fn with_defaults(kind: FixtureKind) -> Self {
        Self {
            kind,
            count: kind.default_count(),
            file_name: Utf8PathBuf::from(kind.default_file_name()),
        }
    }

    fn from_args(kind: FixtureKind, args: KindArgs) -> Self {
        let defaults = Self::with_defaults(kind);
        Self {
            kind,
            count: args.count.unwrap_or(defaults.count),
            file_name: args.output.unwrap_or(defaults.file_name),
        }
    }
}

#[derive(Debug, Error)]
enum CliError {
    #[error("failed to open output directory '{path}': {source}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Generation(#[from] GenerationError),
    #[error(transparent)]
    Write(#[from] WriteError),
}

fn main() -> ExitCode {
    init_logging();
    match run(CliArgs::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: CliArgs) -> Result<(), CliError> {
    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    let reference_date = args
        .reference_date
        .unwrap_or_else(|| Local::now().date_naive());
    let settings =
        GenerationSettings::new(seed, reference_date).with_password_length(args.password_length);
    info!(seed, %reference_date, "generating fixtures");

    let jobs = jobs_for(args.command);

    let dir = open_output_dir(args.output_dir)?;
    for job in jobs {
        // Each kind gets its own stream so a file does not depend on which
        // other kinds were generated before it.
        let batch = FixtureGenerator::new(settings).generate(job.kind, job.count)?;
        write_batch(&dir, &job.file_name, &batch)?;
    }
    Ok(())
}

fn jobs_for(command: Command) -> Vec<Job> {
    match command {
        Command::Registration(kind_args) => {
            vec![Job::from_args(FixtureKind::Registration, kind_args)]
        }
        Command::InvalidEmail(kind_args) => {
            vec![Job::from_args(FixtureKind::InvalidEmail, kind_args)]
        }
        Command::MismatchedPassword(kind_args) => {
            vec![Job::from_args(FixtureKind::MismatchedPassword, kind_args)]
        }
        Command::Profile(kind_args) => vec![Job::from_args(FixtureKind::Profile, kind_args)],
        Command::All => FixtureKind::ALL.into_iter().map(Job::with_defaults).collect(),
    }
}

fn open_output_dir(path: PathBuf) -> Result<Dir, CliError> {
    Dir::create_ambient_dir_all(&path, ambient_authority())
        .and_then(|()| Dir::open_ambient_dir(&path, ambient_authority()))
        .map_err(|source| CliError::OutputDir { path, source })
}
