use super::axis::Axis;
use super::face::Face;
use super::kind::Kind;
use super::point::Point;

/// One of the 54 facelets: the face it lies on plus the cubie it belongs to.
///
/// A sticker names a location, not a colored piece of plastic. Its printed
/// identifier is the face letter followed by the cubie's other faces in face
/// enumeration order, e.g. `U`, `UF`, `URF`.
///
/// For a corner sticker, dropping the leading letter of the identifier names
/// the edge sticker that completes the same F2L slot: `DRF` pairs with `RF`.
/// [`Sticker::slot`] computes that pairing.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Sticker {
    face: Face,
    cubie: Point,
}

impl Sticker {
    pub const N: usize = 54;

    /// All stickers in index order (face by face).
    pub fn all() -> impl Iterator<Item = Sticker> {
        (0..Self::N).map(Sticker::from)
    }
    pub fn face(&self) -> Face {
        self.face
    }
    pub fn cubie(&self) -> Point {
        self.cubie
    }
    pub fn kind(&self) -> Kind {
        Kind::from(self.cubie.support())
    }
    pub fn is_center(&self) -> bool {
        self.kind() == Kind::Center
    }
    pub fn is_edge(&self) -> bool {
        self.kind() == Kind::Edge
    }
    pub fn is_corner(&self) -> bool {
        self.kind() == Kind::Corner
    }
    /// Faces of the cubie other than the one this sticker lies on,
    /// in enumeration order.
    pub fn neighbors(self) -> impl Iterator<Item = Face> {
        Face::all()
            .into_iter()
            .filter(move |f| *f != self.face)
            .filter(move |f| f.touches(self.cubie))
    }
    /// Every sticker of the same cubie (the "element"), this one included.
    pub fn element(self) -> impl Iterator<Item = Sticker> {
        Face::all()
            .into_iter()
            .filter(move |f| f.touches(self.cubie))
            .map(move |face| Sticker {
                face,
                cubie: self.cubie,
            })
    }
    /// For a corner sticker, the edge sticker forming the same F2L slot.
    pub fn slot(&self) -> Option<Sticker> {
        match self.kind() {
            Kind::Corner => self.neighbors().next().map(|face| Sticker {
                face,
                cubie: self.cubie.with(self.face.axis(), 0),
            }),
            _ => None,
        }
    }
    /// Where this location ends up after clockwise quarter turns about `axis`.
    pub fn rotate(&self, axis: Axis, quarters: u8) -> Sticker {
        Sticker {
            face: Face::from(self.face.normal().rotate(axis, quarters)),
            cubie: self.cubie.rotate(axis, quarters),
        }
    }
    /// The two axes spanning the face, in axis order.
    fn plane(face: Face) -> (Axis, Axis) {
        match face.axis() {
            Axis::X => (Axis::Y, Axis::Z),
            Axis::Y => (Axis::X, Axis::Z),
            Axis::Z => (Axis::X, Axis::Y),
        }
    }
}

/// the center sticker of a face
impl From<Face> for Sticker {
    fn from(face: Face) -> Sticker {
        Sticker {
            face,
            cubie: face.normal(),
        }
    }
}

/// usize isomorphism
/// face-major: 9 stickers per face, laid out over the face's plane
impl From<Sticker> for usize {
    fn from(s: Sticker) -> usize {
        let (a, b) = Sticker::plane(s.face);
        let a = (s.cubie.get(a) + 1) as usize;
        let b = (s.cubie.get(b) + 1) as usize;
        s.face as usize * 9 + a * 3 + b
    }
}
impl From<usize> for Sticker {
    fn from(n: usize) -> Sticker {
        assert!(n < Sticker::N, "invalid sticker index {}", n);
        let face = Face::from((n / 9) as u8);
        let (a, b) = Sticker::plane(face);
        let cubie = Point::default()
            .with(face.axis(), face.sign())
            .with(a, (n % 9 / 3) as i8 - 1)
            .with(b, (n % 3) as i8 - 1);
        Sticker { face, cubie }
    }
}

/// str isomorphism
/// leading letter is the face; the rest locate the cubie, in any order
impl TryFrom<&str> for Sticker {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let faces = s
            .chars()
            .map(Face::try_from)
            .collect::<anyhow::Result<Vec<Face>>>()?;
        let face = *faces
            .first()
            .ok_or_else(|| anyhow::anyhow!("empty sticker"))?;
        if faces.len() > 3 {
            return Err(anyhow::anyhow!("too many faces in sticker: {}", s));
        }
        let mut cubie = Point::default();
        for f in faces.iter() {
            if cubie.get(f.axis()) != 0 {
                return Err(anyhow::anyhow!("conflicting faces in sticker: {}", s));
            }
            cubie = cubie.with(f.axis(), f.sign());
        }
        Ok(Sticker { face, cubie })
    }
}

impl std::fmt::Display for Sticker {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.face)?;
        self.neighbors()
            .map(|face| write!(f, "{}", face))
            .collect::<std::fmt::Result>()
    }
}
