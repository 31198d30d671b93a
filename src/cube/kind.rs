/// What sort of cubie a sticker belongs to.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Kind {
    Center = 1,
    Edge = 2,
    Corner = 3,
}

/// count of visible faces on the cubie
impl From<usize> for Kind {
    fn from(n: usize) -> Kind {
        match n {
            1 => Kind::Center,
            2 => Kind::Edge,
            3 => Kind::Corner,
            _ => unreachable!("no cubie shows {} faces", n),
        }
    }
}
impl From<Kind> for usize {
    fn from(k: Kind) -> usize {
        k as usize
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Kind::Center => write!(f, "center"),
            Kind::Edge => write!(f, "edge"),
            Kind::Corner => write!(f, "corner"),
        }
    }
}
