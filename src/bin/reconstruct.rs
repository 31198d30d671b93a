//! Reconstruction Binary
//!
//! Splits a CFOP solve into named phases and prints the reconstruction.
//!
//! Options: --scramble, --solution, --time, --metric, --json, --batch

use cfop::*;

fn main() -> anyhow::Result<()> {
    log();
    analysis::CLI::run()
}
