/// How far a CFOP solve has come, as one of eleven strictly ordered levels.
///
/// Levels are cumulative: when a level is reached, every lower one holds
/// as well. The numeric value (0..=10) is what phase naming works with.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Progress {
    /// Nothing is done.
    #[default]
    Scrambled = 0,
    /// A cross is solved.
    Cross = 1,
    /// Cross plus one F2L pair.
    FirstPair = 2,
    SecondPair = 3,
    ThirdPair = 4,
    /// First two layers complete, last layer untouched.
    FourthPair = 5,
    /// Last layer edges oriented.
    EdgesOriented = 6,
    /// Last layer corners oriented (OLL done).
    CornersOriented = 7,
    /// Last layer corners permuted relative to each other.
    CornersPermuted = 8,
    /// Last layer solved up to a turn of its face.
    LastLayer = 9,
    /// The cube is solved.
    Solved = 10,
}

impl Progress {
    pub const fn all() -> [Progress; 11] {
        [
            Progress::Scrambled,
            Progress::Cross,
            Progress::FirstPair,
            Progress::SecondPair,
            Progress::ThirdPair,
            Progress::FourthPair,
            Progress::EdgesOriented,
            Progress::CornersOriented,
            Progress::CornersPermuted,
            Progress::LastLayer,
            Progress::Solved,
        ]
    }
    /// Level reached with a solved cross and `pairs` solved slots around it.
    pub fn with_pairs(pairs: usize) -> Progress {
        Progress::from(1 + pairs.min(4) as u8)
    }
    /// True once all four F2L slots are in.
    pub fn is_f2l_done(&self) -> bool {
        *self >= Progress::FourthPair
    }
}

/// u8 isomorphism
impl From<u8> for Progress {
    fn from(n: u8) -> Progress {
        match n {
            0 => Progress::Scrambled,
            1 => Progress::Cross,
            2 => Progress::FirstPair,
            3 => Progress::SecondPair,
            4 => Progress::ThirdPair,
            5 => Progress::FourthPair,
            6 => Progress::EdgesOriented,
            7 => Progress::CornersOriented,
            8 => Progress::CornersPermuted,
            9 => Progress::LastLayer,
            10 => Progress::Solved,
            _ => unreachable!("invalid progress level {}", n),
        }
    }
}
impl From<Progress> for u8 {
    fn from(p: Progress) -> u8 {
        p as u8
    }
}

impl std::fmt::Display for Progress {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Progress::Scrambled => write!(f, "scrambled"),
            Progress::Cross => write!(f, "cross"),
            Progress::FirstPair => write!(f, "1st pair"),
            Progress::SecondPair => write!(f, "2nd pair"),
            Progress::ThirdPair => write!(f, "3rd pair"),
            Progress::FourthPair => write!(f, "f2l"),
            Progress::EdgesOriented => write!(f, "ll edges oriented"),
            Progress::CornersOriented => write!(f, "ll corners oriented"),
            Progress::CornersPermuted => write!(f, "ll corners permuted"),
            Progress::LastLayer => write!(f, "ll solved"),
            Progress::Solved => write!(f, "solved"),
        }
    }
}
