//! Animal AI: behavior descriptors and per-tick selection.

pub mod behavior;
pub mod brain;
pub mod species_behaviors;
