use super::axis::Axis;
use super::face::Face;
use super::point::Point;

/// Middle layers, named by standard notation.
///
/// M turns like L, E like D, S like F.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Slice {
    M,
    E,
    S,
}

impl Slice {
    /// Face whose clockwise sense the slice follows.
    pub const fn face(&self) -> Face {
        match self {
            Slice::M => Face::L,
            Slice::E => Face::D,
            Slice::S => Face::F,
        }
    }
}

/// The set of cubies a move turns.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Layer {
    /// A single outer face: `R`.
    Outer(Face),
    /// An outer face with its adjacent middle layer: `Rw` or `r`.
    Wide(Face),
    /// A middle layer alone: `M`, `E`, `S`.
    Slice(Slice),
    /// The whole cube: `x`, `y`, `z`.
    Whole(Axis),
}

impl Layer {
    /// Face whose clockwise sense the layer follows.
    pub const fn face(&self) -> Face {
        match self {
            Layer::Outer(face) | Layer::Wide(face) => *face,
            Layer::Slice(slice) => slice.face(),
            Layer::Whole(Axis::X) => Face::R,
            Layer::Whole(Axis::Y) => Face::U,
            Layer::Whole(Axis::Z) => Face::F,
        }
    }
    pub const fn axis(&self) -> Axis {
        self.face().axis()
    }
    pub fn contains(&self, cubie: Point) -> bool {
        match self {
            Layer::Outer(face) => face.touches(cubie),
            Layer::Wide(face) => !face.opposite().touches(cubie),
            Layer::Slice(slice) => cubie.get(slice.face().axis()) == 0,
            Layer::Whole(_) => true,
        }
    }
}

impl From<Face> for Layer {
    fn from(face: Face) -> Layer {
        Layer::Outer(face)
    }
}

/// str isomorphism, modulo the two spellings of wide moves
impl TryFrom<&str> for Layer {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut chars = s.chars();
        let head = chars
            .next()
            .ok_or_else(|| anyhow::anyhow!("empty layer"))?;
        let wide = match chars.as_str() {
            "" => false,
            "w" => true,
            _ => return Err(anyhow::anyhow!("invalid layer: {}", s)),
        };
        match (head, wide) {
            ('M', false) => Ok(Layer::Slice(Slice::M)),
            ('E', false) => Ok(Layer::Slice(Slice::E)),
            ('S', false) => Ok(Layer::Slice(Slice::S)),
            ('x' | 'y' | 'z', false) => Axis::try_from(head).map(Layer::Whole),
            (c, false) if c.is_ascii_lowercase() => {
                Face::try_from(c.to_ascii_uppercase()).map(Layer::Wide)
            }
            (c, true) => Face::try_from(c).map(Layer::Wide),
            (c, false) => Face::try_from(c).map(Layer::Outer),
        }
        .map_err(|_| anyhow::anyhow!("invalid layer: {}", s))
    }
}

impl std::fmt::Display for Layer {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Layer::Outer(face) => write!(f, "{}", face),
            Layer::Wide(face) => write!(f, "{}w", face),
            Layer::Slice(slice) => write!(f, "{:?}", slice),
            Layer::Whole(axis) => write!(f, "{}", axis),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cubies() -> impl Iterator<Item = Point> {
        (-1..=1).flat_map(|x| (-1..=1).flat_map(move |y| (-1..=1).map(move |z| Point::new(x, y, z))))
    }

    #[test]
    fn layer_sizes() {
        let size = |layer: Layer| cubies().filter(|p| layer.contains(*p)).count();
        assert!(size(Layer::Outer(Face::R)) == 9);
        assert!(size(Layer::Wide(Face::R)) == 18);
        assert!(size(Layer::Slice(Slice::M)) == 9);
        assert!(size(Layer::Whole(Axis::Y)) == 27);
    }

    #[test]
    fn wide_spellings_agree() {
        assert!(Layer::try_from("r").unwrap() == Layer::try_from("Rw").unwrap());
        assert!(Layer::try_from("Rw").unwrap() == Layer::Wide(Face::R));
    }

    #[test]
    fn rejects_garbage() {
        assert!(Layer::try_from("Q").is_err());
        assert!(Layer::try_from("Mw").is_err());
        assert!(Layer::try_from("xw").is_err());
        assert!(Layer::try_from("Rx").is_err());
    }

    #[test]
    fn display_round_trips() {
        for s in ["R", "Uw", "M", "E", "S", "x", "y", "z"] {
            assert!(Layer::try_from(s).unwrap().to_string() == s);
        }
    }
}
