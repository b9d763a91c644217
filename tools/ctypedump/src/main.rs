#[cfg(unix)]
mod host;
mod report;
mod select;

use std::fs::File;
use std::io::{self, BufWriter, IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use ctype_rules::{compare, ClassTable, Mismatch};

use select::Backend;

/// Print which <ctype.h> classes hold for every byte value, one line per byte.
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Classification library that answers the predicates.
    #[arg(short, long, value_enum, default_value_t = Backend::Builtin, conflicts_with = "table")]
    ruleset: Backend,
    /// Locale to select before classifying. Without it the C locale is active.
    #[arg(short, long, value_name = "NAME", conflicts_with = "table")]
    locale: Option<String>,
    /// Replay a stored dump instead of querying a library.
    #[arg(short, long, value_name = "FILE")]
    table: Option<PathBuf>,
    /// Compare against a stored dump and list the bytes that differ.
    #[arg(short, long, value_name = "FILE", conflicts_with = "output")]
    compare: Option<PathBuf>,
    /// Write the dump to a file instead of stdout.
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

/// How a run ended, once nothing went wrong along the way.
#[derive(Debug, PartialEq, Eq)]
enum Outcome {
    Dumped,
    Compared { mismatches: usize },
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Dumped | Outcome::Compared { mismatches: 0 } => ExitCode::SUCCESS,
            Outcome::Compared { .. } => ExitCode::FAILURE,
        }
    }
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    let stdout = io::stdout();
    let color = stdout.is_terminal();
    let mut out = BufWriter::new(stdout.lock());
    let result = run(cli, &mut out, color).and_then(|outcome| {
        out.flush()?;
        Ok(outcome)
    });
    match result {
        Ok(outcome) => outcome.into(),
        Err(err) => {
            eprintln!("ctypedump: {err:#}");
            ExitCode::FAILURE
        }
    }
}

// stdout carries the dump, so logs only ever go to stderr.
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .with(env_filter)
        .init();
}

fn run(cli: Cli, stdout: &mut dyn Write, color: bool) -> Result<Outcome> {
    let rules = select::select(cli.ruleset, cli.locale.as_deref(), cli.table.as_deref())?;
    debug!(ruleset = rules.name(), "classifying");

    if let Some(path) = &cli.compare {
        let expected = select::load_table(path)?;
        let actual = ClassTable::snapshot(rules.as_ref());
        let mismatches: Vec<Mismatch> = compare(&expected, &actual).collect();
        for mismatch in &mismatches {
            warn!(
                missing = %mismatch.missing(),
                extra = %mismatch.extra(),
                "class mismatch at 0x{:02X}",
                mismatch.value
            );
        }
        info!(
            golden = %path.display(),
            ruleset = rules.name(),
            mismatches = mismatches.len(),
            "comparison finished"
        );

        report::write_mismatches(stdout, &mismatches, color)?;
        return Ok(Outcome::Compared {
            mismatches: mismatches.len(),
        });
    }

    match &cli.output {
        Some(path) => {
            debug!(path = %path.display(), "writing dump to file");
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            let mut file = BufWriter::new(file);
            report::write_dump(&mut file, rules.as_ref())?;
            file.flush()
                .with_context(|| format!("failed to write {}", path.display()))?;
        }
        None => report::write_dump(stdout, rules.as_ref())?,
    }
    Ok(Outcome::Dumped)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::process::ExitCode;

    use clap::{CommandFactory, Parser};
    use ctype_rules::{write_sweep, Latin1};

    use super::{run, Backend, Cli, Outcome};

    const C_GOLDEN: &str = include_str!("../../../ctype/tests/golden/c.txt");

    fn scratch(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join("ctypedump_tests");
        std::fs::create_dir_all(&dir).unwrap();
        dir.join(name)
    }

    fn run_args(args: &[&str]) -> (Outcome, String) {
        let cli = Cli::try_parse_from(args).unwrap();
        let mut out = Vec::new();
        let outcome = run(cli, &mut out, false).unwrap();
        (outcome, String::from_utf8(out).unwrap())
    }

    #[test]
    fn command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_to_builtin_c_locale() {
        let cli = Cli::try_parse_from(["ctypedump"]).unwrap();
        assert_eq!(cli.ruleset, Backend::Builtin);
        assert!(cli.locale.is_none());
        assert!(cli.table.is_none());
        assert!(cli.compare.is_none());
    }

    #[test]
    fn table_conflicts_with_library_choice() {
        assert!(Cli::try_parse_from(["ctypedump", "--table", "a.txt", "--ruleset", "host"]).is_err());
        assert!(Cli::try_parse_from(["ctypedump", "-t", "a.txt", "-l", "C"]).is_err());
        assert!(Cli::try_parse_from(["ctypedump", "-t", "a.txt", "-c", "b.txt"]).is_ok());
    }

    #[test]
    fn compare_conflicts_with_output() {
        assert!(Cli::try_parse_from(["ctypedump", "-c", "a.txt", "-o", "b.txt"]).is_err());
    }

    #[test]
    fn parses_host_with_locale() {
        let cli = Cli::try_parse_from(["ctypedump", "-r", "host", "-l", "en_US.UTF-8"]).unwrap();
        assert_eq!(cli.ruleset, Backend::Host);
        assert_eq!(cli.locale.as_deref(), Some("en_US.UTF-8"));
    }

    #[test]
    fn dumps_c_locale_to_stdout() {
        let (outcome, out) = run_args(&["ctypedump"]);
        assert_eq!(outcome, Outcome::Dumped);
        assert_eq!(out, C_GOLDEN);
    }

    #[test]
    fn dumps_to_output_file() {
        let path = scratch("output.txt");
        let _ = std::fs::remove_file(&path);
        let (outcome, out) = run_args(&["ctypedump", "-o", path.to_str().unwrap()]);
        assert_eq!(outcome, Outcome::Dumped);
        assert_eq!(out, "");
        assert_eq!(std::fs::read_to_string(&path).unwrap(), C_GOLDEN);
    }

    #[test]
    fn compare_against_matching_dump() {
        let golden = scratch("compare_c.txt");
        std::fs::write(&golden, C_GOLDEN).unwrap();
        let (outcome, out) = run_args(&["ctypedump", "-c", golden.to_str().unwrap()]);
        assert_eq!(outcome, Outcome::Compared { mismatches: 0 });
        assert_eq!(out, "");
    }

    #[test]
    fn compare_against_latin1_dump() {
        let mut latin1 = String::new();
        write_sweep(&mut latin1, &Latin1).unwrap();
        let golden = scratch("compare_latin1.txt");
        std::fs::write(&golden, latin1).unwrap();

        let (outcome, out) = run_args(&["ctypedump", "-c", golden.to_str().unwrap()]);
        assert_eq!(outcome, Outcome::Compared { mismatches: 128 });
        assert_eq!(out.lines().count(), 128);
        assert!(out.starts_with("0x80 -cntrl\n"));
    }

    #[test]
    fn compare_reports_missing_dump() {
        let cli = Cli::try_parse_from(["ctypedump", "-c", "/nonexistent/ctypedump.txt"]).unwrap();
        let err = run(cli, &mut Vec::new(), false).unwrap_err();
        assert!(err.to_string().starts_with("failed to read"));
    }

    #[test]
    fn outcomes_map_to_exit_codes() {
        let code = |outcome| format!("{:?}", ExitCode::from(outcome));
        assert_eq!(code(Outcome::Dumped), format!("{:?}", ExitCode::SUCCESS));
        assert_eq!(
            code(Outcome::Compared { mismatches: 0 }),
            format!("{:?}", ExitCode::SUCCESS)
        );
        assert_eq!(
            code(Outcome::Compared { mismatches: 3 }),
            format!("{:?}", ExitCode::FAILURE)
        );
    }
}
