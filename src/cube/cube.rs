use super::algorithm::Algorithm;
use super::color::Color;
use super::face::Face;
use super::moves::Move;
use super::sticker::Sticker;

/// The full facelet state of a 3x3x3 cube: one color per sticker.
///
/// Solvedness is always judged against the centers, so whole-cube
/// rotations and slice moves never confuse "which color belongs where":
/// a sticker is solved when it matches the center currently on its face.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Cube([Color; Sticker::N]);

impl Default for Cube {
    fn default() -> Self {
        Self(std::array::from_fn(|i| Sticker::from(i).face().home()))
    }
}

impl Cube {
    pub fn solved() -> Self {
        Self::default()
    }
    pub fn color(&self, sticker: Sticker) -> Color {
        self.0[usize::from(sticker)]
    }
    pub fn center(&self, face: Face) -> Color {
        self.color(Sticker::from(face))
    }
    /// The face whose center currently shows `color`.
    pub fn locate(&self, color: Color) -> Option<Face> {
        Face::all()
            .into_iter()
            .find(|face| self.center(*face) == color)
    }

    pub fn is_sticker_solved(&self, sticker: Sticker) -> bool {
        self.color(sticker) == self.center(sticker.face())
    }
    /// Correct position and correct orientation.
    pub fn is_element_solved(&self, sticker: Sticker) -> bool {
        sticker.element().all(|s| self.is_sticker_solved(s))
    }
    /// Correct position, any orientation: the piece's colors are exactly
    /// the colors of the centers around its location.
    pub fn is_element_permuted(&self, sticker: Sticker) -> bool {
        let mut shown = sticker.element().map(|s| self.color(s)).collect::<Vec<_>>();
        let mut wanted = sticker
            .element()
            .map(|s| self.center(s.face()))
            .collect::<Vec<_>>();
        shown.sort();
        wanted.sort();
        shown == wanted
    }
    pub fn is_solved(&self) -> bool {
        Sticker::all().all(|s| self.is_sticker_solved(s))
    }

    pub fn apply(&mut self, m: &Move) {
        let layer = m.layer();
        let axis = m.axis();
        let quarters = m.quarters();
        let prev = self.0;
        for sticker in Sticker::all().filter(|s| layer.contains(s.cubie())) {
            self.0[usize::from(sticker.rotate(axis, quarters))] = prev[usize::from(sticker)];
        }
    }
    pub fn apply_all(&mut self, algorithm: &Algorithm) {
        algorithm.iter().for_each(|m| self.apply(m));
    }
    /// One clockwise quarter turn of a face.
    pub fn twist(&mut self, face: Face) {
        self.apply(&Move::from(face));
    }
}

/// solved cube with a scramble applied
impl From<&Algorithm> for Cube {
    fn from(scramble: &Algorithm) -> Self {
        let mut cube = Self::default();
        cube.apply_all(scramble);
        cube
    }
}

/// one line per face: "U: wwwwwwwww"
impl std::fmt::Display for Cube {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for face in Face::all() {
            write!(f, "{}: ", face)?;
            for sticker in face.stickers() {
                write!(f, "{}", self.color(sticker))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scrambled(s: &str) -> Cube {
        Cube::from(&Algorithm::try_from(s).unwrap())
    }

    fn order(s: &str) -> usize {
        let algorithm = Algorithm::try_from(s).unwrap();
        let mut cube = Cube::from(&algorithm);
        let mut n = 1;
        while !cube.is_solved() {
            cube.apply_all(&algorithm);
            n += 1;
        }
        n
    }

    #[test]
    fn default_is_solved() {
        assert!(Cube::default().is_solved());
        assert!(Cube::solved() == Cube::default());
    }

    #[test]
    fn every_move_has_order_dividing_four() {
        for s in ["U", "R", "F", "D", "L", "B", "Rw", "M", "E", "S", "x", "y", "z"] {
            let mut cube = Cube::default();
            let m = Move::try_from(s).unwrap();
            (0..4).for_each(|_| cube.apply(&m));
            assert!(cube == Cube::default(), "{} four times", s);
            cube.apply(&m);
            assert!(cube != Cube::default(), "{} once", s);
        }
    }

    #[test]
    fn inverse_undoes_algorithm() {
        let algorithm = Algorithm::try_from("R U F' L2 D B' M E' S2 x y' z2 r u'").unwrap();
        let mut cube = Cube::from(&algorithm);
        cube.apply_all(&algorithm.inverse());
        assert!(cube == Cube::default());
    }

    #[test]
    fn known_orders() {
        assert!(order("R U R' U'") == 6);
        assert!(order("R U R' U R U2 R'") == 6);
        assert!(order("R U R' U' R' F R2 U' R' U' R U R' F'") == 2);
        assert!(order("R U") == 105);
    }

    #[test]
    fn rotations_keep_cube_solved() {
        for s in ["x", "y2", "z'", "x y z"] {
            let cube = scrambled(s);
            assert!(cube.is_solved());
            assert!(cube != Cube::default());
        }
    }

    #[test]
    fn x_brings_front_center_up() {
        let cube = scrambled("x");
        assert!(cube.center(Face::U) == Color::Green);
        assert!(cube.locate(Color::White) == Some(Face::B));
    }

    #[test]
    fn y_brings_front_center_left() {
        let cube = scrambled("y");
        assert!(cube.center(Face::L) == Color::Green);
        assert!(cube.locate(Color::Green) == Some(Face::L));
    }

    #[test]
    fn r_lifts_front_stickers_to_top() {
        let cube = scrambled("R");
        let ur = Sticker::try_from("UR").unwrap();
        assert!(cube.color(ur) == Color::Green);
    }

    #[test]
    fn wide_move_is_face_plus_slice() {
        assert!(scrambled("r") == scrambled("R M'"));
        assert!(scrambled("u") == scrambled("U E'"));
        assert!(scrambled("f") == scrambled("F S"));
        assert!(scrambled("x") == scrambled("R M' L'"));
    }

    #[test]
    fn twist_matches_bare_face_turn() {
        let mut cube = Cube::default();
        cube.twist(Face::F);
        assert!(cube == scrambled("F"));
    }

    #[test]
    fn solved_vs_permuted() {
        let cube = scrambled("R U R' U R U2 R'");
        let corners = Face::U
            .stickers()
            .filter(Sticker::is_corner)
            .collect::<Vec<_>>();
        assert!(corners.iter().any(|s| !cube.is_element_solved(*s)));
        let edge = Sticker::try_from("DF").unwrap();
        assert!(cube.is_element_solved(edge));
        assert!(cube.is_element_permuted(edge));
    }

    #[test]
    fn twisted_corner_is_permuted_not_solved() {
        let cube = scrambled(
            "R' D' R D R' D' R D U R' D' R D R' D' R D R' D' R D R' D' R D U'",
        );
        let twisted = Face::U
            .stickers()
            .filter(Sticker::is_corner)
            .filter(|s| !cube.is_element_solved(*s))
            .collect::<Vec<_>>();
        assert!(twisted.len() == 2);
        assert!(twisted.iter().all(|s| cube.is_element_permuted(*s)));
        assert!(Face::D.stickers().all(|s| cube.is_element_solved(s)));
    }

    #[test]
    fn slice_move_is_judged_against_moved_centers() {
        let cube = scrambled("M");
        assert!(!cube.is_solved());
        let ufr = Sticker::try_from("URF").unwrap();
        assert!(!cube.is_element_solved(ufr));
        let dlf = Sticker::try_from("DFL").unwrap();
        assert!(!cube.is_element_solved(dlf));
        assert!(!cube.is_element_permuted(dlf));
    }
}
