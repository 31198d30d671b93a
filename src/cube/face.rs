use super::axis::Axis;
use super::color::Color;
use super::point::Point;
use super::sticker::Sticker;

/// One of the six faces ("sides") of the cube, named by position.
///
/// The declaration order U, R, F, D, L, B is the face enumeration order:
/// when two faces tie in an analysis, the earlier one wins.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Face {
    #[default]
    U = 0,
    R = 1,
    F = 2,
    D = 3,
    L = 4,
    B = 5,
}

impl Face {
    /// All six faces in enumeration order.
    pub const fn all() -> [Face; 6] {
        [Face::U, Face::R, Face::F, Face::D, Face::L, Face::B]
    }
    pub const fn opposite(&self) -> Face {
        match self {
            Face::U => Face::D,
            Face::R => Face::L,
            Face::F => Face::B,
            Face::D => Face::U,
            Face::L => Face::R,
            Face::B => Face::F,
        }
    }
    pub const fn axis(&self) -> Axis {
        match self {
            Face::R | Face::L => Axis::X,
            Face::U | Face::D => Axis::Y,
            Face::F | Face::B => Axis::Z,
        }
    }
    /// Which end of its axis the face sits on.
    pub const fn sign(&self) -> i8 {
        match self {
            Face::U | Face::R | Face::F => 1,
            Face::D | Face::L | Face::B => -1,
        }
    }
    /// Outward unit normal.
    pub fn normal(&self) -> Point {
        Point::default().with(self.axis(), self.sign())
    }
    /// True if a cubie at `point` shows a sticker on this face.
    pub fn touches(&self, point: Point) -> bool {
        point.get(self.axis()) == self.sign()
    }
    /// The nine stickers lying on this face.
    pub fn stickers(self) -> impl Iterator<Item = Sticker> {
        let base = self as usize * 9;
        (base..base + 9).map(Sticker::from)
    }
    /// Color of this face's center on a solved cube.
    pub fn home(&self) -> Color {
        Color::from(*self)
    }
}

/// u8 isomorphism
impl From<u8> for Face {
    fn from(n: u8) -> Face {
        match n {
            0 => Face::U,
            1 => Face::R,
            2 => Face::F,
            3 => Face::D,
            4 => Face::L,
            5 => Face::B,
            _ => unreachable!("invalid face"),
        }
    }
}
impl From<Face> for u8 {
    fn from(f: Face) -> u8 {
        f as u8
    }
}

/// unit normal isomorphism
impl From<Point> for Face {
    fn from(normal: Point) -> Face {
        Face::all()
            .into_iter()
            .find(|face| face.normal() == normal)
            .expect("unit normal")
    }
}

/// char isomorphism
impl TryFrom<char> for Face {
    type Error = anyhow::Error;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'U' => Ok(Face::U),
            'R' => Ok(Face::R),
            'F' => Ok(Face::F),
            'D' => Ok(Face::D),
            'L' => Ok(Face::L),
            'B' => Ok(Face::B),
            _ => Err(anyhow::anyhow!("invalid face char: {}", c)),
        }
    }
}
impl From<Face> for char {
    fn from(f: Face) -> char {
        match f {
            Face::U => 'U',
            Face::R => 'R',
            Face::F => 'F',
            Face::D => 'D',
            Face::L => 'L',
            Face::B => 'B',
        }
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", char::from(*self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        for face in Face::all() {
            assert!(face == Face::from(u8::from(face)));
        }
    }

    #[test]
    fn bijective_normal() {
        for face in Face::all() {
            assert!(face == Face::from(face.normal()));
        }
    }

    #[test]
    fn opposite_is_involution() {
        for face in Face::all() {
            assert!(face.opposite() != face);
            assert!(face.opposite().opposite() == face);
            assert!(face.opposite().axis() == face.axis());
        }
    }

    #[test]
    fn nine_stickers_per_face() {
        for face in Face::all() {
            assert!(face.stickers().count() == 9);
            assert!(face.stickers().all(|s| s.face() == face));
        }
    }
}
