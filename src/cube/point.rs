use super::axis::Axis;

/// Integer coordinates of a cubie, or a unit normal of a face.
///
/// Every component lies in `-1..=1`. The number of non-zero components
/// (the support) tells centers (1), edges (2) and corners (3) apart.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Point([i8; 3]);

impl Point {
    pub const fn new(x: i8, y: i8, z: i8) -> Self {
        Self([x, y, z])
    }
    pub fn get(&self, axis: Axis) -> i8 {
        self.0[usize::from(axis)]
    }
    /// Copy with one component overwritten.
    pub fn with(&self, axis: Axis, value: i8) -> Self {
        let mut coords = self.0;
        coords[usize::from(axis)] = value;
        Self(coords)
    }
    /// Number of non-zero components.
    pub fn support(&self) -> usize {
        self.0.iter().filter(|c| **c != 0).count()
    }
    /// Rotate by clockwise quarter turns, as seen looking from the positive
    /// end of `axis` toward the origin.
    pub fn rotate(&self, axis: Axis, quarters: u8) -> Self {
        (0..quarters % 4).fold(*self, |point, _| point.quarter(axis))
    }
    fn quarter(&self, axis: Axis) -> Self {
        let [x, y, z] = self.0;
        match axis {
            Axis::X => Self([x, z, -y]),
            Axis::Y => Self([-z, y, x]),
            Axis::Z => Self([y, -x, z]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_revolution_is_identity() {
        let point = Point::new(1, -1, 0);
        for axis in Axis::all() {
            assert!(point.rotate(axis, 4) == point);
        }
    }

    #[test]
    fn clockwise_about_x_lifts_front_to_top() {
        assert!(Point::new(1, 0, 1).rotate(Axis::X, 1) == Point::new(1, 1, 0));
    }

    #[test]
    fn clockwise_about_y_moves_front_to_left() {
        assert!(Point::new(0, 1, 1).rotate(Axis::Y, 1) == Point::new(-1, 1, 0));
    }

    #[test]
    fn clockwise_about_z_moves_top_to_right() {
        assert!(Point::new(0, 1, 1).rotate(Axis::Z, 1) == Point::new(1, 0, 1));
    }

    #[test]
    fn rotation_preserves_support() {
        let corner = Point::new(-1, 1, -1);
        assert!(corner.rotate(Axis::Z, 3).support() == 3);
    }
}
