//! Reads dates from standard input, one per line, and prints each in
//! `dd Mon yyyy` form. Rejected lines are reported on standard error.

use std::io::{self, BufWriter};

use anyhow::Context;
use canon_date::{logging, process_lines};
use tracing::info;

fn main() -> anyhow::Result<()> {
    logging::init().context("failed to initialize logging")?;

    let stdin = io::stdin().lock();
    let mut out = BufWriter::new(io::stdout().lock());
    let mut diag = io::stderr().lock();

    let summary =
        process_lines(stdin, &mut out, &mut diag).context("failed to process standard input")?;

    info!(
        lines = summary.lines,
        accepted = summary.accepted,
        unrecognised = summary.unrecognised,
        invalid = summary.invalid,
        "finished"
    );
    Ok(())
}
