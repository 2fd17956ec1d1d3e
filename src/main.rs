use std::{
    fs::File,
    io::{self, BufWriter, Read, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use hullscan::{
    closed_scan_with, is_convex_chain, is_convex_polygon, open_scan_with, Lattice, TurnFilter,
};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{info, warn, Level};

type Point = [i64; 2];

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Opt {
    /// A JSON file holding one chain `[[x, y], ...]` or a batch of chains, else reads from stdin
    file: Option<PathBuf>,

    /// Output file path (overwrites old files), else writes to stdout
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Close each chain into a polygon, repairing the seam between its last and first points
    #[arg(long)]
    closed: bool,

    /// Input winds clockwise, so keep right turns instead of left turns
    #[arg(long)]
    clockwise: bool,

    /// Keep middle points that are collinear with their neighbors
    #[arg(long)]
    keep_collinear: bool,

    /// Warn about any output that fails the convexity check
    #[arg(long)]
    check: bool,

    /// Pretty-print the output JSON
    #[arg(long)]
    pretty: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// Scan settings shared by every chain of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct Settings {
    closed: bool,
    clockwise: bool,
    keep_collinear: bool,
    check: bool,
}

impl From<&Opt> for Settings {
    fn from(opt: &Opt) -> Self {
        Self {
            closed: opt.closed,
            clockwise: opt.clockwise,
            keep_collinear: opt.keep_collinear,
            check: opt.check,
        }
    }
}

impl Settings {
    fn predicate(&self) -> TurnFilter<Lattice> {
        let filter = if self.clockwise {
            TurnFilter::clockwise(Lattice)
        } else {
            TurnFilter::counter_clockwise(Lattice)
        };
        filter.with_collinear(self.keep_collinear)
    }

    fn scan(&self, chain: Vec<Point>) -> Vec<Point> {
        let predicate = self.predicate();
        let hull = if self.closed {
            closed_scan_with(chain, &predicate)
        } else {
            open_scan_with(chain, &predicate)
        };
        if self.check {
            let convex = if self.closed {
                is_convex_polygon(&hull, &predicate)
            } else {
                is_convex_chain(&hull, &predicate)
            };
            if !convex {
                warn!(len = hull.len(), "Output failed the convexity check");
            }
        }
        hull
    }
}

/// Wire shape of both input and output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
enum Chains {
    Single(Vec<Point>),
    Batch(Vec<Vec<Point>>),
}

impl Chains {
    fn scan(self, settings: &Settings) -> Self {
        match self {
            Self::Single(chain) => Self::Single(settings.scan(chain)),
            Self::Batch(chains) => {
                info!("Scanning {} chains", chains.len());
                Self::Batch(
                    chains
                        .into_par_iter()
                        .map(|chain| settings.scan(chain))
                        .collect(),
                )
            }
        }
    }
}

fn main() -> Result<()> {
    let opt = Opt::parse();
    let level = match opt.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let input = read_input(opt.file.as_deref())?;
    let output = input.scan(&Settings::from(&opt));
    write_output(&output, opt.out.as_deref(), opt.pretty)
}

fn read_input(file: Option<&Path>) -> Result<Chains> {
    let mut bytes = vec![];
    match file {
        Some(path) => {
            File::open(path)
                .and_then(|mut f| f.read_to_end(&mut bytes))
                .with_context(|| format!("reading {}", path.display()))?;
        }
        None => {
            info!("Reading from stdin");
            io::stdin()
                .read_to_end(&mut bytes)
                .context("reading stdin")?;
        }
    }
    parse_chains(&bytes)
}

fn parse_chains(bytes: &[u8]) -> Result<Chains> {
    serde_json::from_slice(bytes)
        .context("expected a chain [[x, y], ...] or a batch of chains of integer points")
}

fn write_output(chains: &Chains, out: Option<&Path>, pretty: bool) -> Result<()> {
    let mut writer: Box<dyn Write> = match out {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("creating {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    if pretty {
        serde_json::to_writer_pretty(&mut writer, chains)?;
    } else {
        serde_json::to_writer(&mut writer, chains)?;
    }
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
