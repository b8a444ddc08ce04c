use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use secret_core::{ShareDocument, recover_secret};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "secret-finder",
    version,
    about = "Recover a Shamir secret from a JSON share document"
)]
struct Cli {
    /// Path to the JSON share document.
    input: PathBuf,

    /// Check shares beyond the threshold against the reconstructed polynomial.
    #[arg(long)]
    cross_check: bool,

    /// Log selection and parsing details to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(
    cli: &Cli,
    out: &mut impl Write,
    err: &mut impl Write,
) -> anyhow::Result<()> {
    let file = File::open(&cli.input)
        .with_context(|| format!("reading {}", cli.input.display()))?;
    let document = ShareDocument::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing {}", cli.input.display()))?;
    debug!(
        threshold = document.threshold(),
        shares = document.shares().len(),
        "loaded share document"
    );

    let result = if cli.cross_check {
        let points = document.decode_points()?;
        document
            .recovery()?
            .with_cross_check(true)
            .reconstruct(&points)?
    } else {
        recover_secret(&document)?
    };

    for warning in result.warnings() {
        writeln!(err, "Warning: {warning}")?;
    }
    writeln!(out, "The secret constant (c) is: {}", result.secret())?;
    Ok(())
}

/// Run and report, mapping any failure to `error: ...` and exit status 1.
fn execute(cli: &Cli, out: &mut impl Write, err: &mut impl Write) -> ExitCode {
    match run(cli, out, &mut *err) {
        Ok(()) => ExitCode::SUCCESS,
        Err(failure) => {
            let _ = writeln!(err, "error: {failure:#}");
            ExitCode::FAILURE
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    execute(&cli, &mut io::stdout().lock(), &mut io::stderr().lock())
}
