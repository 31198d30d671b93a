#![cfg(feature = "cli")]
use super::args::Args;
use super::dto::ApiReconstruction;
use super::phase::Phase;
use super::reconstruction::Reconstruction;
use crate::Seconds;
use crate::cube::Metric;
use clap::Parser;
use colored::Colorize;
use std::path::Path;

/// Command-line front end: one solve from flags, or a batch file.
pub struct CLI {
    metric: Metric,
    json: bool,
}

impl CLI {
    pub fn run() -> anyhow::Result<()> {
        let args = Args::parse();
        let cli = Self {
            metric: args.metric,
            json: args.json,
        };
        match args.batch {
            Some(ref path) => cli.batch(path, args.time),
            None => cli.single(
                args.scramble.as_deref().unwrap_or_default(),
                args.solution.as_deref().unwrap_or_default(),
                args.time,
            ),
        }
    }

    fn single(&self, scramble: &str, solution: &str, time: Option<Seconds>) -> anyhow::Result<()> {
        let reconstruction = Reconstruction::try_from((scramble, solution))?;
        self.report(&reconstruction, time)
    }

    fn batch(&self, path: &Path, time: Option<Seconds>) -> anyhow::Result<()> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("read {}: {}", path.display(), e))?;
        let lines = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .filter(|line| !line.starts_with('#'))
            .collect::<Vec<&str>>();
        log::info!("analyzing {} solves from {}", lines.len(), path.display());
        let mut failures = 0;
        for (line, result) in lines.iter().zip(Reconstruction::batch(&lines)) {
            match result {
                Ok((reconstruction, own)) => self.report(&reconstruction, own.or(time))?,
                Err(e) => {
                    failures += 1;
                    log::warn!("skipping '{}': {}", line, e);
                }
            }
        }
        match failures {
            0 => Ok(()),
            n => Err(anyhow::anyhow!("{} of {} solves could not be analyzed", n, lines.len())),
        }
    }

    fn report(&self, reconstruction: &Reconstruction, time: Option<Seconds>) -> anyhow::Result<()> {
        match self.json {
            true => println!(
                "{}",
                serde_json::to_string(&ApiReconstruction::from((reconstruction, self.metric, time)))?
            ),
            false => println!("{}", self.pretty(reconstruction, time)),
        }
        Ok(())
    }

    /// Transcript with colored phase names and a move count footer.
    fn pretty(&self, reconstruction: &Reconstruction, time: Option<Seconds>) -> String {
        let mut lines = Vec::new();
        if let Some(time) = time {
            lines.push(format!("{} {}", "Time:".bold(), time));
        }
        lines.push(format!("{} {}", "Scramble:".bold(), reconstruction.scramble()));
        lines.push(String::new());
        lines.extend(reconstruction.phases().iter().map(|p| self.line(p)));
        lines.push(String::new());
        let count = reconstruction.count(self.metric);
        let speed = time
            .and_then(|t| reconstruction.tps(self.metric, t))
            .map(|tps| format!(", {:.2} TPS", tps))
            .unwrap_or_default();
        lines.push(format!("{} {}{}", count, self.metric, speed).dimmed().to_string());
        lines.join("\n")
    }

    fn line(&self, phase: &Phase) -> String {
        let label = match phase.name() {
            Some(name) => name.green(),
            None => phase.label().red(),
        };
        format!(
            "{}{}{} {}",
            phase.moves(),
            crate::PHASE_SEPARATOR.dimmed(),
            label,
            format!("({})", phase.count(self.metric)).dimmed()
        )
    }
}
