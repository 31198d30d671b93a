use super::check::Check;
use super::progress::Progress;
use crate::cube::Algorithm;
use crate::cube::Color;
use crate::cube::Cube;
use crate::cube::Face;
use crate::cube::Kind;
use crate::cube::Move;
use crate::cube::Sticker;

/// The face with the most solved F2L slots around a solved cross.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Slots {
    /// `None` when no face has its cross solved.
    pub side: Option<Face>,
    /// Solved slots around that cross, 0..=4.
    pub count: usize,
}

/// One CFOP analysis session.
///
/// Owns the cube being replayed and remembers, once F2L is first seen
/// complete, which center color marks the last layer. Later rotations may
/// carry that center onto another face name; the color keeps tracking it.
/// The memory belongs to a single solution: build a fresh analyzer (or
/// [`Analyzer::reset`]) before analyzing another one.
///
/// Several predicates probe the cube by turning a face through a full
/// revolution. They need `&mut self`, leave the cube exactly as they found
/// it, and must not be interleaved with other access to the same cube.
#[derive(Debug, Clone)]
pub struct Analyzer {
    cube: Cube,
    last_layer: Option<Color>,
}

impl Analyzer {
    pub fn new(cube: Cube) -> Self {
        Self {
            cube,
            last_layer: None,
        }
    }
    pub fn cube(&self) -> &Cube {
        &self.cube
    }
    pub fn apply(&mut self, m: &Move) {
        self.cube.apply(m);
    }
    /// Forget the last-layer anchor.
    pub fn reset(&mut self) {
        self.last_layer = None;
    }

    /// Faces whose four edges are all solved. Corners are ignored.
    pub fn crosses(&self) -> Vec<Face> {
        Face::all()
            .into_iter()
            .filter(|face| {
                face.stickers()
                    .filter(Sticker::is_edge)
                    .all(|s| self.cube.is_element_solved(s))
            })
            .collect()
    }

    /// Among faces with a solved cross, the one with the most solved slots.
    /// A slot counts when both its corner and its paired edge are solved.
    /// Ties go to the earliest face in enumeration order.
    pub fn slots(&self) -> Slots {
        self.crosses()
            .into_iter()
            .map(|side| Slots {
                side: Some(side),
                count: self.count_slots(side),
            })
            .fold(Slots::default(), |best, slots| {
                match best.side.is_none() || slots.count > best.count {
                    true => slots,
                    false => best,
                }
            })
    }
    fn count_slots(&self, side: Face) -> usize {
        side.stickers()
            .filter(Sticker::is_corner)
            .filter(|corner| self.cube.is_element_solved(*corner))
            .filter_map(|corner| corner.slot())
            .filter(|edge| self.cube.is_element_solved(*edge))
            .count()
    }

    /// Verify the pieces of one kind on a face.
    pub fn check(&mut self, side: Face, kind: Kind, check: Check) -> bool {
        let stickers = side
            .stickers()
            .filter(|s| s.kind() == kind)
            .collect::<Vec<Sticker>>();
        match check {
            Check::Oriented => stickers.iter().all(|s| self.cube.is_sticker_solved(*s)),
            Check::Permuted => self.revolve(side, |cube| {
                stickers.iter().all(|s| cube.is_element_permuted(*s))
            }),
        }
    }
    pub fn are_ll_edges_oriented(&mut self, side: Face) -> bool {
        self.check(side, Kind::Edge, Check::Oriented)
    }
    pub fn are_ll_corners_oriented(&mut self, side: Face) -> bool {
        self.check(side, Kind::Corner, Check::Oriented)
    }
    pub fn are_ll_corners_permuted(&mut self, side: Face) -> bool {
        self.check(side, Kind::Corner, Check::Permuted)
    }
    /// Solved up to some turn of the last layer.
    pub fn is_ll_relatively_solved(&mut self, side: Face) -> bool {
        self.revolve(side, Cube::is_solved)
    }

    /// Turn `side` through a full revolution, a quarter at a time, and report
    /// whether `test` held after any quarter.
    ///
    /// All four quarters are always turned so the face ends where it
    /// started. Stopping at the first success would hand the caller a cube
    /// with the face left misaligned.
    fn revolve<T>(&mut self, side: Face, test: T) -> bool
    where
        T: Fn(&Cube) -> bool,
    {
        (0..4).fold(false, |held, _| {
            self.cube.twist(side);
            held || test(&self.cube)
        })
    }

    /// Current solve progress.
    ///
    /// Cumulative by construction: each level is tested only once every
    /// level below it holds.
    pub fn progress(&mut self) -> Progress {
        let slots = self.slots();
        let Some(cross) = slots.side else {
            return Progress::Scrambled;
        };
        if slots.count < 4 {
            return Progress::with_pairs(slots.count);
        }
        let ll = self.last_layer(cross);
        if !self.are_ll_edges_oriented(ll) {
            return Progress::FourthPair;
        }
        if !self.are_ll_corners_oriented(ll) {
            return Progress::EdgesOriented;
        }
        if !self.are_ll_corners_permuted(ll) {
            return Progress::CornersOriented;
        }
        if !self.is_ll_relatively_solved(ll) {
            return Progress::CornersPermuted;
        }
        if !self.cube.is_solved() {
            return Progress::LastLayer;
        }
        Progress::Solved
    }

    /// The face currently holding the last-layer center.
    ///
    /// On first call the center opposite the cross is remembered by color;
    /// every call then looks that color up among the centers.
    fn last_layer(&mut self, cross: Face) -> Face {
        let opposite = cross.opposite();
        let color = match self.last_layer {
            Some(color) => color,
            None => {
                let color = self.cube.center(opposite);
                log::debug!("last layer anchored to the {:?} center on {}", color, opposite);
                self.last_layer = Some(color);
                color
            }
        };
        self.cube.locate(color).unwrap_or(opposite)
    }
}

impl From<Cube> for Analyzer {
    fn from(cube: Cube) -> Self {
        Self::new(cube)
    }
}

/// session starting from a solved cube with the scramble applied
impl From<&Algorithm> for Analyzer {
    fn from(scramble: &Algorithm) -> Self {
        Self::new(Cube::from(scramble))
    }
}
