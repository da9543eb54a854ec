//! Packing of index images into the batching slots of a ciphertext.

use crate::error::{Error, Result};
use tracing::debug;

/// Value written to every slot past the image.
pub const PADDING: u64 = 0;

/// A row-major grid of palette indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexImage {
    width: usize,
    height: usize,
    pixels: Vec<u64>,
}

impl IndexImage {
    pub fn new(width: usize, height: usize, pixels: Vec<u64>) -> Result<Self> {
        let expected = pixel_count(width, height, pixels.len())?;
        if pixels.len() != expected {
            return Err(Error::DimensionMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[u64] {
        &self.pixels
    }

    pub fn get(&self, x: usize, y: usize) -> Option<u64> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y * self.width + x])
    }
}

/// Plaintext field elements, one per slot of the scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotVector(pub Vec<u64>);

impl SlotVector {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotPacker {
    capacity: usize,
}

impl SlotPacker {
    /// `capacity` is the batch capacity reported by the scheme.
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Lays the image out row-major and pads with [`PADDING`] up to capacity.
    pub fn pack(&self, image: &IndexImage) -> Result<SlotVector> {
        let requested = image.pixels.len();
        if requested > self.capacity {
            return Err(Error::CapacityExceeded {
                requested,
                capacity: self.capacity,
            });
        }

        let mut slots = Vec::with_capacity(self.capacity);
        slots.extend_from_slice(&image.pixels);
        slots.resize(self.capacity, PADDING);
        debug!(
            pixels = requested,
            padding = self.capacity - requested,
            "packed image into slots"
        );
        Ok(SlotVector(slots))
    }

    /// Reads back the first `width * height` slots; padding is discarded.
    pub fn unpack(&self, slots: &SlotVector, width: usize, height: usize) -> Result<IndexImage> {
        let requested = pixel_count(width, height, slots.len())?;
        if requested > slots.len() {
            return Err(Error::DimensionMismatch {
                expected: requested,
                actual: slots.len(),
            });
        }
        if requested > self.capacity {
            return Err(Error::CapacityExceeded {
                requested,
                capacity: self.capacity,
            });
        }
        IndexImage::new(width, height, slots.0[..requested].to_vec())
    }
}

/// `width * height`, or `DimensionMismatch` against `available` on overflow.
fn pixel_count(width: usize, height: usize, available: usize) -> Result<usize> {
    width.checked_mul(height).ok_or(Error::DimensionMismatch {
        expected: usize::MAX,
        actual: available,
    })
}
