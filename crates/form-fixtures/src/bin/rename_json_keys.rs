//! Renames keys in a single-object JSON file in place.
//!
//! Defaults rename `School Name` to `SchoolName` and `Area of Study` to
//! `SchoolAreaOfStudy`; pass `--rename FROM=TO` to choose others.

use std::io::{self, Write};
use std::process::ExitCode;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs::Dir;
use clap::Parser;
use form_fixtures::{KeyRename, RenameError, RenameOutcome, init_logging, rename_keys_in_file};
use thiserror::Error;

/// `rename-json-keys` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "rename-json-keys",
    about = "Rename keys in a JSON file holding a single object",
    version
)]
struct CliArgs {
    /// JSON file to rewrite.
    #[arg(long, value_name = "file")]
    path: Utf8PathBuf,
    /// Rename to apply, as `FROM=TO`; repeat for several.
    #[arg(long = "rename", value_name = "FROM=TO")]
    renames: Vec<KeyRename>,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("'{path}' does not name a file")]
    NotAFile { path: Utf8PathBuf },
    #[error("failed to open directory '{path}': {source}")]
    OpenDir {
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Rename(#[from] RenameError),
}

fn main() -> ExitCode {
    init_logging();
    match run(CliArgs::parse()) {
        Ok((path, outcome)) => {
            let message = format!(
                "Renamed {} of {} keys in {path}",
                outcome.applied.len(),
                outcome.applied.len() + outcome.skipped.len()
            );
            if let Err(err) = writeln!(io::stdout().lock(), "{message}") {
                drop(err);
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: CliArgs) -> Result<(Utf8PathBuf, RenameOutcome), CliError> {
    let renames = if args.renames.is_empty() {
        KeyRename::defaults()
    } else {
        args.renames
    };

    let (parent, file_name) = split_path(&args.path)?;
    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(|source| {
        CliError::OpenDir {
            path: parent.to_path_buf(),
            source,
        }
    })?;

    let outcome = rename_keys_in_file(&dir, Utf8Path::new(file_name), &renames)?;
    Ok((args.path, outcome))
}

/// Splits `path` into the directory to open and the file name inside it.
fn split_path(path: &Utf8Path) -> Result<(&Utf8Path, &str), CliError> {
    let Some(file_name) = path.file_name() else {
        return Err(CliError::NotAFile {
            path: path.to_path_buf(),
        });
    };
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    Ok((parent, file_name))
}

#[cfg(test)]
mod tests {
    //! Unit tests for argument parsing and path resolution.

    use rstest::rstest;
    use serde_json::Value;

    use super::*;

    fn parse(args: &[&str]) -> Result<CliArgs, clap::Error> {
        CliArgs::try_parse_from(std::iter::once("rename-json-keys").chain(args.iter().copied()))
    }

    #[rstest]
    #[case("data.json", ".", "data.json")]
    #[case("fixtures/data.json", "fixtures", "data.json")]
    #[case("/tmp/data.json", "/tmp", "data.json")]
    fn splits_paths_into_directory_and_file(
        #[case] path: &str,
        #[case] parent: &str,
        #[case] file_name: &str,
    ) {
        let (dir, name) = split_path(Utf8Path::new(path)).expect("path names a file");
        assert_eq!((dir.as_str(), name), (parent, file_name));
    }

    #[rstest]
    #[case("..")]
    #[case("/")]
    fn rejects_paths_without_a_file_name(#[case] path: &str) {
        let result = split_path(Utf8Path::new(path));
        assert!(matches!(result, Err(CliError::NotAFile { .. })), "{path}");
    }

    #[test]
    fn parses_repeated_renames() {
        let cli = parse(&["--path", "data.json", "--rename", "a=b", "--rename", "c=d"])
            .expect("arguments should parse");
        assert_eq!(
            cli.renames,
            [KeyRename::new("a", "b"), KeyRename::new("c", "d")]
        );
    }

    #[rstest]
    #[case(&["--rename", "a=b"])]
    #[case(&["--path", "data.json", "--rename", "missing-separator"])]
    #[case(&["--path", "data.json", "--rename", "=b"])]
    fn rejects_bad_arguments(#[case] args: &[&str]) {
        assert!(parse(args).is_err());
    }

    #[test]
    fn run_applies_default_renames() {
        let dir = std::env::temp_dir().join(format!(
            "form-fixtures-rename-cli-{}",
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).expect("create scratch dir");
        let file = dir.join("Experience_Data.json");
        std::fs::write(&file, r#"{"School Name": "Acme University", "Area of Study": "Law"}"#)
            .expect("seed file");
        let path = file.to_str().expect("temp dir is UTF-8");

        let (reported, outcome) =
            run(parse(&["--path", path]).expect("arguments should parse")).expect("run succeeds");

        assert_eq!(reported.as_str(), path);
        assert_eq!(outcome.applied, KeyRename::defaults());
        let value: Value =
            serde_json::from_str(&std::fs::read_to_string(&file).expect("read")).expect("JSON");
        assert_eq!(
            value,
            serde_json::json!({"SchoolName": "Acme University", "SchoolAreaOfStudy": "Law"})
        );
    }
}
