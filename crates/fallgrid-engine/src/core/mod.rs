//! Core data structures: cells, piece geometry, the piece catalog, and the
//! board the game plays out on.

pub use self::{board::*, catalog::*, cell::*, shape::*};

pub(crate) mod board;
pub(crate) mod catalog;
pub(crate) mod cell;
pub(crate) mod shape;
