//! Animal simulation: growth clocks, species, AI descriptors, breeding, and
//! ECS population systems.

pub mod ai;
pub mod animal;
pub mod breeding;
pub mod calendar;
pub mod combat;
pub mod components;
pub mod gender;
pub mod growth;
pub mod population;
pub mod species;
