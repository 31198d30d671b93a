/// One of the three rotation axes of the cube.
///
/// Right-handed: x points at R, y at U, z at F.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Axis {
    #[default]
    X = 0,
    Y = 1,
    Z = 2,
}

impl Axis {
    pub const fn all() -> [Axis; 3] {
        [Axis::X, Axis::Y, Axis::Z]
    }
}

/// usize isomorphism, used to index coordinate triples
impl From<Axis> for usize {
    fn from(a: Axis) -> usize {
        a as usize
    }
}
impl From<usize> for Axis {
    fn from(n: usize) -> Axis {
        match n {
            0 => Axis::X,
            1 => Axis::Y,
            2 => Axis::Z,
            _ => unreachable!("invalid axis"),
        }
    }
}

/// rotation notation: x y z
impl TryFrom<char> for Axis {
    type Error = anyhow::Error;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'x' => Ok(Axis::X),
            'y' => Ok(Axis::Y),
            'z' => Ok(Axis::Z),
            _ => Err(anyhow::anyhow!("invalid axis char: {}", c)),
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
            Axis::Z => write!(f, "z"),
        }
    }
}
