//! `symnmf` command line driver.
//!
//! ```text
//! symnmf sym points.txt
//! symnmf norm points.txt --delimiter space -v
//! ```

use std::io::{self, BufWriter, IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use tracing::{error, warn};
use tracing_subscriber::{fmt, EnvFilter};

use symnmf::io::{read_points, write_matrix, Delimiter};
use symnmf::{Error, Goal, Pipeline, ZeroDegreePolicy};

/// Compute symNMF preprocessing matrices from a point file
#[derive(Parser)]
#[command(name = "symnmf")]
#[command(version)]
#[command(about = "Similarity, degree, or normalized similarity matrix of a point set")]
struct Cli {
    /// Matrix to print: sym, ddg, or norm
    goal: Goal,

    /// Point file: one point per line, comma-separated coordinates
    file: PathBuf,

    /// Column separator in the printed matrix
    #[arg(short, long, value_enum, default_value_t = DelimiterArg::Comma)]
    delimiter: DelimiterArg,

    /// Gaussian kernel bandwidth
    #[arg(long, default_value_t = 1.0)]
    sigma: f64,

    /// What to do with zero-degree vertices when normalizing
    #[arg(long, value_enum, default_value_t = ZeroDegreeArg::Error)]
    zero_degree: ZeroDegreeArg,

    /// Fill matrix rows in parallel (when built with the `parallel` feature)
    #[arg(long)]
    parallel: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
enum DelimiterArg {
    Comma,
    Space,
}

impl From<DelimiterArg> for Delimiter {
    fn from(d: DelimiterArg) -> Self {
        match d {
            DelimiterArg::Comma => Delimiter::Comma,
            DelimiterArg::Space => Delimiter::Space,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ZeroDegreeArg {
    Error,
    Zero,
}

impl From<ZeroDegreeArg> for ZeroDegreePolicy {
    fn from(z: ZeroDegreeArg) -> Self {
        match z {
            ZeroDegreeArg::Error => ZeroDegreePolicy::Error,
            ZeroDegreeArg::Zero => ZeroDegreePolicy::Zero,
        }
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            init_logging(0);
            warn!(kind = ?e.kind(), "{}", e.render().to_string().trim_end());
            eprintln!("An Error Has Occurred");
            return ExitCode::FAILURE;
        }
    };
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if e.is_ingestion() {
                warn!(goal = %cli.goal, file = %cli.file.display(), "{e}");
            } else {
                error!(goal = %cli.goal, file = %cli.file.display(), "{e}");
            }
            eprintln!("An Error Has Occurred");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr)
        .init();
}

fn run(cli: &Cli) -> symnmf::Result<()> {
    let points = read_points(&cli.file)?;
    let matrix = Pipeline::new()
        .sigma(cli.sigma)
        .zero_degree(cli.zero_degree.into())
        .parallel(cli.parallel)
        .run(cli.goal, &points)?;

    // Nothing reaches stdout unless the whole matrix was computed.
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_matrix(&mut out, &matrix, cli.delimiter.into())
        .and_then(|()| out.flush())
        .map_err(|e| Error::Io {
            path: "<stdout>".to_string(),
            message: e.to_string(),
        })
}
