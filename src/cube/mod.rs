//! Facelet model of the 3x3x3 cube and its move notation.
//!
//! Geometry is expressed in integer cubie coordinates: x points at R, y at U,
//! z at F. Every move is a quarter-turn rotation of the cubies in one layer
//! about one of the three axes, so no cycle tables are written by hand.
pub mod algorithm;
pub use algorithm::*;

pub mod axis;
pub use axis::*;

pub mod color;
pub use color::*;

pub mod cube;
pub use cube::*;

pub mod face;
pub use face::*;

pub mod kind;
pub use kind::*;

pub mod layer;
pub use layer::*;

pub mod metric;
pub use metric::*;

pub mod moves;
pub use moves::*;

pub mod point;
pub use point::*;

pub mod sticker;
pub use sticker::*;

pub mod turn;
pub use turn::*;
