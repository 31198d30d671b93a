use super::analyzer::Analyzer;
use super::phase::Phase;
use super::progress::Progress;
use super::transition::Transition;
use crate::Count;
use crate::DEFAULT_METRIC;
use crate::Seconds;
use crate::TPS_PRECISION;
use crate::cube::Algorithm;
use crate::cube::Metric;

/// A solve cut into CFOP phases.
///
/// Built by replaying the solution move by move on top of the scramble and
/// measuring progress after each move. A phase closes on the first move that
/// lifts the level above where the phase began, so a single move that gains
/// several levels closes one multi-level phase. Moves after the last rise
/// form an unnamed trailing phase.
///
/// The concatenated phase moves always reproduce the solution exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconstruction {
    scramble: Algorithm,
    solution: Algorithm,
    phases: Vec<Phase>,
    progress: Progress,
}

impl Reconstruction {
    pub fn analyze(scramble: &Algorithm, solution: &Algorithm) -> Self {
        let mut analyzer = Analyzer::from(scramble);
        let mut start = analyzer.progress();
        let mut level = start;
        let mut pending = Algorithm::empty();
        let mut phases = Vec::new();
        log::debug!("scramble leaves the solve at {} ({})", u8::from(start), start);
        for m in solution.iter() {
            analyzer.apply(m);
            pending.push(*m);
            level = analyzer.progress();
            log::trace!("{} -> {}", m, u8::from(level));
            if level > start {
                let phase = Phase::new(
                    Transition::from((start, level)),
                    std::mem::take(&mut pending),
                );
                log::debug!("{} ({})", phase, phase.transition());
                phases.push(phase);
                start = level;
            }
        }
        if !pending.is_empty() {
            let phase = Phase::new(Transition::from((start, level)), pending);
            log::debug!("{} ({}, unfinished)", phase, phase.transition());
            phases.push(phase);
        }
        Self {
            scramble: scramble.clone(),
            solution: solution.clone(),
            phases,
            progress: level,
        }
    }

    pub fn scramble(&self) -> &Algorithm {
        &self.scramble
    }
    pub fn solution(&self) -> &Algorithm {
        &self.solution
    }
    pub fn phases(&self) -> &[Phase] {
        &self.phases
    }
    /// Level measured after the last solution move.
    pub fn progress(&self) -> Progress {
        self.progress
    }
    pub fn is_solved(&self) -> bool {
        self.progress == Progress::Solved
    }
    pub fn count(&self, metric: Metric) -> Count {
        self.solution.count(metric)
    }
    pub fn total_move_count(&self) -> Count {
        self.count(DEFAULT_METRIC)
    }
    /// Turns per second over the whole solution.
    pub fn tps(&self, metric: Metric, time: Seconds) -> Option<f32> {
        tps(self.count(metric), time)
    }

    /// One line per phase: "<moves> // <name>".
    pub fn solution_text(&self) -> String {
        self.phases
            .iter()
            .map(Phase::to_string)
            .collect::<Vec<String>>()
            .join("\n")
    }
    /// Shareable reconstruction: optional time, scramble, blank line,
    /// then the formatted solution.
    pub fn transcript(&self, time: Option<Seconds>) -> String {
        let mut lines = Vec::new();
        if let Some(time) = time {
            lines.push(format!("Time: {}", time));
        }
        lines.push(format!("Scramble: {}", self.scramble));
        lines.push(String::new());
        lines.push(self.solution_text());
        lines.join("\n")
    }

    /// Parse and analyze one batch entry: "scramble | solution [| time]".
    pub fn entry(line: &str) -> anyhow::Result<(Self, Option<Seconds>)> {
        let fields = line.split('|').map(str::trim).collect::<Vec<&str>>();
        let time = match fields.as_slice() {
            [_, _] => None,
            [_, _, time] => Some(
                time.parse::<Seconds>()
                    .map_err(|e| anyhow::anyhow!("invalid time '{}': {}", time, e))?,
            ),
            _ => return Err(anyhow::anyhow!("expected 'scramble | solution [| time]': {}", line)),
        };
        Self::try_from((fields[0], fields[1])).map(|r| (r, time))
    }
    /// Analyze many entries in parallel, preserving their order.
    #[cfg(feature = "cli")]
    pub fn batch(lines: &[&str]) -> Vec<anyhow::Result<(Self, Option<Seconds>)>> {
        use rayon::iter::IntoParallelRefIterator;
        use rayon::iter::ParallelIterator;
        lines.par_iter().map(|line| Self::entry(line)).collect()
    }
}

/// Turns per second, rounded. `None` without a positive, finite time.
pub fn tps(count: Count, time: Seconds) -> Option<f32> {
    match time.is_finite() && time > 0. {
        true => {
            let scale = 10f32.powi(TPS_PRECISION);
            Some((count as f32 / time * scale).round() / scale)
        }
        false => None,
    }
}

/// (scramble, solution) as free text
impl TryFrom<(&str, &str)> for Reconstruction {
    type Error = anyhow::Error;
    fn try_from((scramble, solution): (&str, &str)) -> Result<Self, Self::Error> {
        let scramble = Algorithm::try_from(scramble)?;
        let solution = Algorithm::try_from(solution)?;
        Ok(Self::analyze(&scramble, &solution))
    }
}

impl std::fmt::Display for Reconstruction {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.solution_text())
    }
}
