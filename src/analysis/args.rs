#![cfg(feature = "cli")]
use crate::Seconds;
use crate::cube::Metric;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Split a CFOP solve into named phases",
    long_about = None
)]
pub struct Args {
    #[arg(
        short,
        long,
        required_unless_present = "batch",
        help = "Scramble applied to a solved cube"
    )]
    pub scramble: Option<String>,
    #[arg(
        long,
        required_unless_present = "batch",
        help = "Solution moves; brackets and // comments are ignored"
    )]
    pub solution: Option<String>,
    #[arg(short, long, help = "Solve time in seconds, for turns per second")]
    pub time: Option<Seconds>,
    #[arg(
        short,
        long,
        default_value = "htm",
        value_parser = metric,
        help = "Move count metric: htm, qtm, stm or etm"
    )]
    pub metric: Metric,
    #[arg(long, help = "Print JSON instead of text")]
    pub json: bool,
    #[arg(
        short,
        long,
        conflicts_with_all = ["scramble", "solution"],
        help = "File with one 'scramble | solution [| time]' per line"
    )]
    pub batch: Option<PathBuf>,
}

fn metric(s: &str) -> Result<Metric, String> {
    Metric::try_from(s).map_err(|e| e.to_string())
}
