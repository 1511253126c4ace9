use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use reckon::repl::{Repl, ReplConfig, DEFAULT_PRECISION};

/// reckon reads reduction expressions such as `sum:1,2,3` from standard
/// input, one per line, and prints each result as soon as its line ends.
/// Supported operators are SUM, MIN, MAX and AVG. Type QUIT to exit.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Digits printed after the decimal point.
    #[arg(short, long, default_value_t = DEFAULT_PRECISION)]
    precision: usize,

    /// Do not print the usage banner on startup.
    #[arg(long)]
    no_banner: bool,

    /// Write the session's state transitions to this file as JSON on exit.
    #[arg(long, value_name = "FILE")]
    history: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let config = ReplConfig::default()
        .precision(args.precision)
        .banner(!args.no_banner);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut repl = Repl::with_config(stdin.lock(), stdout.lock(), stderr.lock(), config);

    let outcome = repl.run().context("session aborted")?;
    log::debug!(
        "session ended with {:?} after {} result(s)",
        outcome,
        repl.session().results()
    );

    if let Some(path) = args.history {
        let file = File::create(&path)
            .with_context(|| format!("creating history file {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, repl.history())
            .with_context(|| format!("writing history to {}", path.display()))?;
        writer.flush()?;
    }

    Ok(())
}
