use super::progress::Progress;

/// Ordinals for F2L pairs, indexed by pair number minus one.
const PAIRS: [&str; 4] = ["1st", "2nd", "3rd", "4th"];

/// A jump between two progress levels, as measured at a phase's two ends.
///
/// Naming follows speedcubing convention: what the solver did between the
/// levels (cross, a pair or several, OLL, PLL, or one of the composite
/// last-layer methods that skip intermediate levels).
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Transition {
    before: Progress,
    after: Progress,
}

impl Transition {
    pub fn new(before: Progress, after: Progress) -> Self {
        Self { before, after }
    }
    pub fn before(&self) -> Progress {
        self.before
    }
    pub fn after(&self) -> Progress {
        self.after
    }
    /// True if the solve moved forward.
    pub fn is_advance(&self) -> bool {
        self.after > self.before
    }
    /// Conventional name of the step, or `None` for jumps no solve method
    /// produces (decreasing levels, or e.g. a scramble straight to OLL).
    pub fn name(&self) -> Option<String> {
        let (from, to) = (u8::from(self.before), u8::from(self.after));
        match (from, to) {
            (0, 0) => None,
            (0, 1..=5) => Some(format!("{}cross", "x".repeat(to as usize - 1))),
            (4, 7) => Some("OLS".to_string()),
            (5, 6) => Some("EOLL".to_string()),
            (5, 7) => Some("OLL".to_string()),
            (5, 8) => Some("OLLCP".to_string()),
            (5, 9..) => Some("1LLL".to_string()),
            (6, 7) => Some("OCLL".to_string()),
            (6, 8) => Some("COLL".to_string()),
            (6, 9..) => Some("ZBLL".to_string()),
            (7, 8) => Some("CPLL".to_string()),
            (7, 9..) => Some("PLL".to_string()),
            (8, 9..) => Some("EPLL".to_string()),
            (9, 10) => Some("AUF".to_string()),
            (1..=4, _) if to > from => Some(Self::pairs(from, to)),
            _ => None,
        }
    }
    /// Pairs solved between two mid-F2L levels, with the last-layer step
    /// folded into the final pair when the span reaches past F2L.
    fn pairs(from: u8, to: u8) -> String {
        let start = from as usize - 1;
        let end = (to as usize - 1).min(PAIRS.len());
        let mut name = format!("{} pair", PAIRS[start..end].join(" + "));
        match to {
            6 => name.push_str(" / EOLS"),
            7.. => name.push_str(" / OLS"),
            _ => {}
        }
        name
    }
}

impl From<(Progress, Progress)> for Transition {
    fn from((before, after): (Progress, Progress)) -> Self {
        Self::new(before, after)
    }
}

impl std::fmt::Display for Transition {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} -> {}", u8::from(self.before), u8::from(self.after))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(from: u8, to: u8) -> Option<String> {
        Transition::new(Progress::from(from), Progress::from(to)).name()
    }

    #[test]
    fn crosses() {
        assert!(name(0, 1).as_deref() == Some("cross"));
        assert!(name(0, 2).as_deref() == Some("xcross"));
        assert!(name(0, 3).as_deref() == Some("xxcross"));
        assert!(name(0, 5).as_deref() == Some("xxxxcross"));
    }

    #[test]
    fn single_pairs() {
        assert!(name(1, 2).as_deref() == Some("1st pair"));
        assert!(name(2, 3).as_deref() == Some("2nd pair"));
        assert!(name(3, 4).as_deref() == Some("3rd pair"));
        assert!(name(4, 5).as_deref() == Some("4th pair"));
    }

    #[test]
    fn multislotting() {
        assert!(name(1, 3).as_deref() == Some("1st + 2nd pair"));
        assert!(name(2, 5).as_deref() == Some("2nd + 3rd + 4th pair"));
    }

    #[test]
    fn last_slot_with_orientation() {
        assert!(name(4, 6).as_deref() == Some("4th pair / EOLS"));
        assert!(name(4, 7).as_deref() == Some("OLS"));
        assert!(name(4, 8).as_deref() == Some("4th pair / OLS"));
        assert!(name(3, 7).as_deref() == Some("3rd + 4th pair / OLS"));
        assert!(name(1, 10).as_deref() == Some("1st + 2nd + 3rd + 4th pair / OLS"));
    }

    #[test]
    fn last_layer() {
        assert!(name(5, 6).as_deref() == Some("EOLL"));
        assert!(name(5, 7).as_deref() == Some("OLL"));
        assert!(name(5, 8).as_deref() == Some("OLLCP"));
        assert!(name(5, 9).as_deref() == Some("1LLL"));
        assert!(name(5, 10).as_deref() == Some("1LLL"));
        assert!(name(6, 7).as_deref() == Some("OCLL"));
        assert!(name(6, 8).as_deref() == Some("COLL"));
        assert!(name(6, 10).as_deref() == Some("ZBLL"));
        assert!(name(7, 8).as_deref() == Some("CPLL"));
        assert!(name(7, 9).as_deref() == Some("PLL"));
        assert!(name(7, 10).as_deref() == Some("PLL"));
        assert!(name(8, 9).as_deref() == Some("EPLL"));
        assert!(name(8, 10).as_deref() == Some("EPLL"));
        assert!(name(9, 10).as_deref() == Some("AUF"));
    }

    #[test]
    fn standard_transitions_are_named() {
        for from in [0u8, 4, 5, 6, 7, 8, 9] {
            for to in from + 1..=10 {
                let named = name(from, to);
                let expected = !(from == 0 && to > 5);
                assert!(named.is_some() == expected, "{} -> {}", from, to);
                assert!(named.map_or(true, |n| !n.is_empty()));
            }
        }
    }

    #[test]
    fn gaps_are_unnamed() {
        assert!(name(0, 0).is_none());
        assert!(name(0, 6).is_none());
        assert!(name(0, 10).is_none());
        assert!(name(3, 3).is_none());
        assert!(name(5, 5).is_none());
        assert!(name(6, 2).is_none());
        assert!(name(10, 10).is_none());
    }
}
