//! CFOP progress measurement and phase segmentation.
//!
//! An [`Analyzer`] owns the cube for one analysis and answers "how far along
//! is the solve" as a [`Progress`] level. [`Reconstruction`] replays a
//! solution through an analyzer and cuts it into named [`Phase`]s wherever
//! the level rises; [`Transition`] supplies the names.
pub mod analyzer;
pub use analyzer::*;

pub mod args;
pub use args::*;

pub mod check;
pub use check::*;

pub mod cli;
pub use cli::*;

pub mod dto;
pub use dto::*;

pub mod phase;
pub use phase::*;

pub mod progress;
pub use progress::*;

pub mod reconstruction;
pub use reconstruction::*;

pub mod transition;
pub use transition::*;
