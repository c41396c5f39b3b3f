use std::io::{self, BufWriter, Read, Write};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use dict_defs::{input, output, parser, CleanError, TransformStats};

/// Reads a JSON object of headword -> entry HTML on stdin and writes
/// headword -> definition texts on stdout.
#[derive(Parser)]
#[command(
    name = "dict_defs",
    version,
    about = "Extract definition text from an HTML dictionary dump (stdin JSON -> stdout JSON)"
)]
struct Cli {}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let _cli = Cli::parse();

    let t0 = Instant::now();
    let stats = run(io::stdin().lock(), io::stdout().lock())?;
    info!(
        kept = stats.kept,
        elapsed = ?t0.elapsed(),
        "done"
    );
    Ok(())
}

/// Read everything, transform, then write everything. Nothing reaches
/// `writer` unless the whole input decoded.
fn run<R: Read, W: Write>(reader: R, writer: W) -> Result<TransformStats> {
    let entries = input::read_dictionary(reader).context("reading dictionary from stdin")?;
    info!(entries = entries.len(), "dictionary loaded");

    let pb = ProgressBar::new(entries.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40} {pos}/{len} entries ({per_sec}, eta {eta})")?
            .progress_chars("=> "),
    );
    let (clean, stats) = parser::transform_with_progress(&entries, &pb);
    pb.finish_and_clear();

    let mut out = BufWriter::new(writer);
    output::write_dictionary(&mut out, &clean).context("writing cleaned dictionary")?;
    out.flush()
        .map_err(CleanError::Write)
        .context("writing cleaned dictionary")?;
    Ok(stats)
}
