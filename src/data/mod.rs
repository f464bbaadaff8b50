//! Serialization of configurations to and from their file formats.

pub mod render;
pub mod yaml;

pub use render::*;
pub use yaml::*;
