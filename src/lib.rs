//! Homomorphic image transformation.
//!
//! An image is quantized against a fixed palette, packed into the slots of a
//! batched homomorphic scheme, encrypted, and an arbitrary pixel function is
//! applied under encryption as a polynomial over the plaintext field.

pub mod color;
pub mod encoder;
pub mod error;
pub mod math;
pub mod pipeline;
pub mod raster;
pub mod scheme;
pub mod slots;

pub use error::{Error, Result};
