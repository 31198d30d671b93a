use super::face::Face;

/// Sticker color. The value stored for every facelet of a [`Cube`].
///
/// Colors follow the western scheme: white opposite yellow, green opposite
/// blue, red opposite orange, with white on U and green on F when solved.
///
/// [`Cube`]: super::cube::Cube
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Color {
    #[default]
    White = 0,
    Red = 1,
    Green = 2,
    Yellow = 3,
    Orange = 4,
    Blue = 5,
}

impl Color {
    pub const fn all() -> [Color; 6] {
        [
            Color::White,
            Color::Red,
            Color::Green,
            Color::Yellow,
            Color::Orange,
            Color::Blue,
        ]
    }
}

/// home face of each color on a solved cube
impl From<Face> for Color {
    fn from(f: Face) -> Color {
        match f {
            Face::U => Color::White,
            Face::R => Color::Red,
            Face::F => Color::Green,
            Face::D => Color::Yellow,
            Face::L => Color::Orange,
            Face::B => Color::Blue,
        }
    }
}
impl From<Color> for Face {
    fn from(c: Color) -> Face {
        match c {
            Color::White => Face::U,
            Color::Red => Face::R,
            Color::Green => Face::F,
            Color::Yellow => Face::D,
            Color::Orange => Face::L,
            Color::Blue => Face::B,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Color::White => write!(f, "w"),
            Color::Red => write!(f, "r"),
            Color::Green => write!(f, "g"),
            Color::Yellow => write!(f, "y"),
            Color::Orange => write!(f, "o"),
            Color::Blue => write!(f, "b"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_face() {
        for color in Color::all() {
            assert!(color == Color::from(Face::from(color)));
        }
    }

    #[test]
    fn opposite_colors_sit_on_opposite_faces() {
        assert!(Face::from(Color::White).opposite() == Face::from(Color::Yellow));
        assert!(Face::from(Color::Green).opposite() == Face::from(Color::Blue));
        assert!(Face::from(Color::Red).opposite() == Face::from(Color::Orange));
    }
}
