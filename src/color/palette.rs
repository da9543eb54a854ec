use crate::{
    error::{Error, Result},
    slots::IndexImage,
};
use image::{Rgb, RgbImage};
use rayon::prelude::*;
use std::collections::HashMap;

/// Fixed, ordered set of colours. Indices are `[0, len)`.
#[derive(Debug, Clone)]
pub struct Palette {
    colors: Vec<Rgb<u8>>,
    lookup: HashMap<[u8; 3], usize>,
}

impl Palette {
    /// Colours must be non-empty and pairwise distinct, so that
    /// index <-> colour is a bijection.
    pub fn new(colors: Vec<Rgb<u8>>) -> Result<Self> {
        if colors.is_empty() {
            return Err(Error::EmptyPalette);
        }

        let mut lookup = HashMap::with_capacity(colors.len());
        for (index, color) in colors.iter().enumerate() {
            if lookup.insert(color.0, index).is_some() {
                return Err(Error::DuplicateColor { index });
            }
        }

        Ok(Self { colors, lookup })
    }

    /// The classic 256-entry lookup table: 8 red levels, 8 green levels and
    /// 4 blue levels, blue varying fastest.
    pub fn default_lut256() -> Self {
        let mut colors = Vec::with_capacity(256);
        for r in (16u16..256).step_by(32) {
            for g in (16u16..256).step_by(32) {
                for b in (32u16..256).step_by(64) {
                    colors.push(Rgb([r as u8, g as u8, b as u8]));
                }
            }
        }
        let lookup = colors
            .iter()
            .enumerate()
            .map(|(index, color)| (color.0, index))
            .collect();
        Self { colors, lookup }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn colors(&self) -> &[Rgb<u8>] {
        &self.colors
    }

    /// Exact match when the colour is in the palette, otherwise the nearest
    /// entry by squared RGB distance. Ties go to the lowest index.
    pub fn color_to_index(&self, color: Rgb<u8>) -> u64 {
        if let Some(&index) = self.lookup.get(&color.0) {
            return index as u64;
        }

        let mut best = 0;
        let mut best_dist = u32::MAX;
        for (index, candidate) in self.colors.iter().enumerate() {
            let dist = distance(color, *candidate);
            if dist < best_dist {
                best = index;
                best_dist = dist;
            }
        }
        best as u64
    }

    pub fn index_to_color(&self, index: u64) -> Result<Rgb<u8>> {
        let bound = self.colors.len() as u64;
        if index >= bound {
            return Err(Error::OutOfRange { value: index, bound });
        }
        Ok(self.colors[index as usize])
    }

    /// Maps every pixel to its palette index.
    pub fn quantize(&self, image: &RgbImage) -> Result<IndexImage> {
        let (width, height) = image.dimensions();
        let pixels = image
            .as_raw()
            .par_chunks_exact(3)
            .map(|c| self.color_to_index(Rgb([c[0], c[1], c[2]])))
            .collect();
        IndexImage::new(width as usize, height as usize, pixels)
    }

    /// Inverse of [`Palette::quantize`]; fails on the first index the
    /// palette cannot represent.
    pub fn dequantize(&self, image: &IndexImage) -> Result<RgbImage> {
        let mut raw = Vec::with_capacity(image.pixels().len() * 3);
        for &index in image.pixels() {
            raw.extend_from_slice(&self.index_to_color(index)?.0);
        }
        let (width, height) = (image.width(), image.height());
        RgbImage::from_raw(width as u32, height as u32, raw).ok_or(Error::DimensionMismatch {
            expected: width * height * 3,
            actual: image.pixels().len() * 3,
        })
    }
}

fn distance(a: Rgb<u8>, b: Rgb<u8>) -> u32 {
    a.0.iter()
        .zip(b.0.iter())
        .map(|(&x, &y)| {
            let d = x.abs_diff(y) as u32;
            d * d
        })
        .sum()
}
