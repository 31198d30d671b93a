use super::axis::Axis;
use super::face::Face;
use super::layer::Layer;
use super::metric::Metric;
use super::turn::Turn;
use crate::Arbitrary;

/// A single move in standard notation: which layer, and how far.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Move {
    layer: Layer,
    turn: Turn,
}

impl Move {
    pub const fn new(layer: Layer, turn: Turn) -> Self {
        Self { layer, turn }
    }
    pub fn layer(&self) -> Layer {
        self.layer
    }
    pub fn turn(&self) -> Turn {
        self.turn
    }
    pub fn axis(&self) -> Axis {
        self.layer.axis()
    }
    pub fn inverse(&self) -> Move {
        Move::new(self.layer, self.turn.inverse())
    }
    pub fn is_rotation(&self) -> bool {
        matches!(self.layer, Layer::Whole(_))
    }
    /// Clockwise quarter turns about the positive end of [`Move::axis`].
    pub fn quarters(&self) -> u8 {
        match self.layer.face().sign() {
            1 => self.turn.quarters(),
            _ => 4 - self.turn.quarters(),
        }
    }
    /// How many moves this counts as under a metric.
    pub fn cost(&self, metric: Metric) -> usize {
        let quarters = match self.turn() {
            Turn::Half => 2,
            _ => 1,
        };
        match (metric, self.layer) {
            (Metric::Etm, _) => 1,
            _ if self.is_rotation() => 0,
            (Metric::Stm, _) => 1,
            (Metric::Htm, Layer::Slice(_)) => 2,
            (Metric::Htm, _) => 1,
            (Metric::Qtm, Layer::Slice(_)) => 2 * quarters,
            (Metric::Qtm, _) => quarters,
        }
    }
}

/// a bare face name is one clockwise quarter turn of that face
impl From<Face> for Move {
    fn from(face: Face) -> Move {
        Move::new(Layer::Outer(face), Turn::Cw)
    }
}

/// str isomorphism, modulo equivalent spellings (r = Rw, R2' = R2)
impl TryFrom<&str> for Move {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let split = s
            .find(|c: char| c.is_ascii_digit() || c == '\'' || c == '’')
            .unwrap_or(s.len());
        let (layer, turn) = s.split_at(split);
        Ok(Move::new(
            Layer::try_from(layer).map_err(|e| anyhow::anyhow!("invalid move {}: {}", s, e))?,
            Turn::try_from(turn).map_err(|e| anyhow::anyhow!("invalid move {}: {}", s, e))?,
        ))
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.layer, self.turn)
    }
}

/// uniformly random outer face turn
impl Arbitrary for Move {
    fn random() -> Self {
        let face = Face::from(rand::random_range(0..6u8));
        let turn = Turn::all()[rand::random_range(0..3usize)];
        Move::new(Layer::Outer(face), turn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube::Slice;

    #[test]
    fn parses_standard_notation() {
        assert!(Move::try_from("R").unwrap() == Move::from(Face::R));
        assert!(Move::try_from("U'").unwrap() == Move::new(Layer::Outer(Face::U), Turn::Ccw));
        assert!(Move::try_from("F2").unwrap() == Move::new(Layer::Outer(Face::F), Turn::Half));
        assert!(Move::try_from("r'").unwrap() == Move::new(Layer::Wide(Face::R), Turn::Ccw));
        assert!(Move::try_from("M2").unwrap() == Move::new(Layer::Slice(Slice::M), Turn::Half));
        assert!(Move::try_from("y'").unwrap() == Move::new(Layer::Whole(Axis::Y), Turn::Ccw));
    }

    #[test]
    fn rejects_invalid_moves() {
        assert!(Move::try_from("").is_err());
        assert!(Move::try_from("Q").is_err());
        assert!(Move::try_from("R4").is_err());
        assert!(Move::try_from("2R").is_err());
    }

    #[test]
    fn display_is_canonical() {
        assert!(Move::try_from("R2'").unwrap().to_string() == "R2");
        assert!(Move::try_from("l").unwrap().to_string() == "Lw");
    }

    #[test]
    fn quarters_follow_face_orientation() {
        assert!(Move::try_from("R").unwrap().quarters() == 1);
        assert!(Move::try_from("L").unwrap().quarters() == 3);
        assert!(Move::try_from("M'").unwrap().quarters() == 1);
        assert!(Move::try_from("x").unwrap().quarters() == 1);
    }

    #[test]
    fn metric_costs() {
        let m = |s: &str| Move::try_from(s).unwrap();
        assert!(m("R2").cost(Metric::Htm) == 1);
        assert!(m("R2").cost(Metric::Qtm) == 2);
        assert!(m("M").cost(Metric::Htm) == 2);
        assert!(m("M").cost(Metric::Stm) == 1);
        assert!(m("M2").cost(Metric::Qtm) == 4);
        assert!(m("y").cost(Metric::Htm) == 0);
        assert!(m("y").cost(Metric::Etm) == 1);
    }
}
