//! Terminal fireworks: a fixed-timestep particle show painted onto a
//! software canvas and presented with truecolor half blocks.

pub mod color;
pub mod config;
pub mod error;
pub mod fireworks;
pub mod random;
pub mod surface;
pub mod timestep;

pub use error::{Error, Result};
