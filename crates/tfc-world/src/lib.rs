//! World data: the biome registry.

pub mod biome;
pub mod error;

pub use biome::{BiomeCategory, BiomeDescriptor, BiomeRegistry};
pub use error::BiomeError;
