//! RecordKit Demo
//!
//! Builds a record from the command line, applies the requested mutations and
//! prints the resulting state along with the shared value seen by a second,
//! independently created record.

use anyhow::Result;
use clap::Parser;
use recordkit::{Record, logging};
use std::io::Write;
use std::process::ExitCode;
use tracing::{error, info};

#[derive(Debug, Parser)]
#[command(version, about = "Build a record and show its state")]
struct Args {
    /// Text for field `a`
    a: String,

    /// Initial value for `b`; zero when omitted
    #[arg(short, long, allow_negative_numbers = true)]
    b: Option<i32>,

    /// Value for the public field `c`
    #[arg(short, long)]
    c: Option<String>,

    /// Replace `a` after construction
    #[arg(long)]
    set_a: Option<String>,

    /// Replace `b` after construction
    #[arg(long, allow_negative_numbers = true)]
    set_b: Option<i32>,

    /// Write the shared `d` through the created record
    #[arg(short, long, allow_negative_numbers = true)]
    d: Option<i32>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(logging::LOG_ENV_VAR);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let mut record = match args.b {
        Some(b) => Record::with_b(args.a, b),
        None => Record::new(args.a),
    };
    record.c = args.c;

    if let Some(a) = args.set_a {
        record.set_a(a);
    }
    if let Some(b) = args.set_b {
        record.set_b(b);
    }
    if let Some(d) = args.d {
        record.set_d(d);
    }
    info!("Built {}", record);

    let peer = Record::new("peer");

    let mut out = std::io::stdout().lock();
    writeln!(out, "record: {}", record)?;
    writeln!(out, "shared d: {}", Record::shared_d())?;
    writeln!(out, "peer d: {}", peer.d())?;
    Ok(())
}
