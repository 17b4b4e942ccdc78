//! checkout — replay a store file and report when the last register empties.
//!
//! ```text
//! checkout <store-file> [--output-dir <dir>]
//! checkout --csv <customers.csv> --registers <n> [--output-dir <dir>]
//! ```
//!
//! The store file holds the register count on its first line and one
//! `kind arrival items` customer per following line.  With an output
//! directory, `departures.csv` and `registers.csv` are written there.
//! Set `RUST_LOG=gs_sim=debug` to trace every batch.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gs_core::StoreConfig;
use gs_output::{CsvWriter, StoreOutputObserver};
use gs_schedule::{group_into_batches, load_customers_csv, load_store_file};
use gs_sim::{NoopObserver, Store, StoreBuilder};

// ── Arguments ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(version, about = "Simulate grocery checkout lines", long_about = None)]
struct Args {
    /// Store file: register count, then one `kind arrival items` line per customer.
    #[arg(required_unless_present = "csv", conflicts_with = "csv")]
    input: Option<PathBuf>,

    /// Read customers from a `kind,arrival_time,items` CSV file instead.
    #[arg(long, value_name = "CUSTOMERS_CSV", requires = "registers")]
    csv: Option<PathBuf>,

    /// Number of registers when reading `--csv` input.
    #[arg(long, requires = "csv")]
    registers: Option<usize>,

    /// Write departures.csv and registers.csv into this directory.
    #[arg(long, short)]
    output_dir: Option<PathBuf>,
}

#[derive(Debug, PartialEq)]
enum Input {
    Store(PathBuf),
    Csv { path: PathBuf, registers: usize },
}

impl Args {
    fn input(&self) -> Result<Input> {
        match (&self.input, &self.csv, self.registers) {
            (Some(path), None, _) => Ok(Input::Store(path.clone())),
            (None, Some(path), Some(registers)) => {
                Ok(Input::Csv { path: path.clone(), registers })
            }
            _ => bail!("expected a store file, or --csv together with --registers"),
        }
    }
}

fn build_store(input: &Input) -> Result<Store> {
    let store = match input {
        Input::Store(path) => {
            let parsed = load_store_file(path)
                .with_context(|| format!("reading {}", path.display()))?;
            tracing::info!(
                registers = parsed.register_count,
                customers = parsed.customers.len(),
                "loaded store file"
            );
            StoreBuilder::from_input(parsed).build()?
        }
        Input::Csv { path, registers } => {
            let customers = load_customers_csv(path)
                .with_context(|| format!("reading {}", path.display()))?;
            tracing::info!(registers, customers = customers.len(), "loaded customer CSV");
            StoreBuilder::new(StoreConfig::new(*registers))
                .batches(group_into_batches(customers))
                .build()?
        }
    };
    Ok(store)
}

fn run(store: &mut Store, output_dir: Option<&Path>) -> Result<f64> {
    let Some(dir) = output_dir else {
        return Ok(store.run_to_completion(&mut NoopObserver)?);
    };

    std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    let writer = CsvWriter::new(dir)?;
    let mut observer = StoreOutputObserver::new(writer);
    let finished = store.run_to_completion(&mut observer)?;
    if let Some(e) = observer.take_error() {
        return Err(e).context("writing simulation output");
    }
    tracing::info!(dir = %dir.display(), "wrote departures.csv and registers.csv");
    Ok(finished)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "checkout=info,gs_sim=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let mut store = build_store(&args.input()?)?;
    let finished = run(&mut store, args.output_dir.as_deref())?;

    for register in store.registers() {
        tracing::debug!("{register}");
    }
    println!("{}", finished_line(finished));
    Ok(())
}

/// Completion times always carry a fractional part, `t=20.0` rather than `t=20`.
fn finished_line(finished: f64) -> String {
    format!("Finished at: t={finished:?} minutes")
}
