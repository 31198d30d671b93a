use super::progress::Progress;
use super::transition::Transition;
use crate::PHASE_SEPARATOR;
use crate::UNNAMED_PHASE;
use crate::cube::Algorithm;
use crate::cube::Metric;

/// A contiguous run of solution moves between two measured progress levels.
///
/// Every phase but possibly the last ends on a strict rise in progress. A
/// trailing phase holds the moves left after the last rise; its end level is
/// whatever was measured after its final move, and it carries no name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phase {
    transition: Transition,
    moves: Algorithm,
}

impl Phase {
    pub fn new(transition: Transition, moves: Algorithm) -> Self {
        Self { transition, moves }
    }
    pub fn transition(&self) -> Transition {
        self.transition
    }
    pub fn before(&self) -> Progress {
        self.transition.before()
    }
    pub fn after(&self) -> Progress {
        self.transition.after()
    }
    pub fn moves(&self) -> &Algorithm {
        &self.moves
    }
    /// True if the phase ended on a rise in progress.
    pub fn is_complete(&self) -> bool {
        self.transition.is_advance()
    }
    /// Conventional step name, if the boundary levels have one.
    pub fn name(&self) -> Option<String> {
        self.transition.name()
    }
    /// Step name, falling back to a placeholder for unnamed phases.
    pub fn label(&self) -> String {
        self.name().unwrap_or_else(|| UNNAMED_PHASE.to_string())
    }
    pub fn count(&self, metric: Metric) -> usize {
        self.moves.count(metric)
    }
}

/// "<moves> // <name>"
impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}{}", self.moves, PHASE_SEPARATOR, self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phase(before: Progress, after: Progress, moves: &str) -> Phase {
        Phase::new(
            Transition::new(before, after),
            Algorithm::try_from(moves).unwrap(),
        )
    }

    #[test]
    fn formats_like_a_reconstruction_line() {
        let phase = phase(Progress::FourthPair, Progress::CornersOriented, "R U R' U R U2 R'");
        assert!(phase.to_string() == "R U R' U R U2 R' // OLL");
    }

    #[test]
    fn unnamed_phase_uses_placeholder() {
        let phase = phase(Progress::Solved, Progress::FourthPair, "R");
        assert!(!phase.is_complete());
        assert!(phase.name().is_none());
        assert!(phase.to_string() == "R // unknown");
    }

    #[test]
    fn counts_in_metric() {
        let phase = phase(Progress::CornersOriented, Progress::Solved, "M2 U M2 U2 M2 U M2");
        assert!(phase.count(Metric::Htm) == 11);
        assert!(phase.count(Metric::Stm) == 7);
    }
}
