//! Turns a pixel function into the polynomial the scheme evaluates.

use crate::{
    color::{hsv_to_rgb, rgb_to_hsv, rotate_hue, Palette},
    error::{Error, Result},
    math::{PrimeField, Polynomial},
};
use image::Rgb;
use rayon::prelude::*;
use tracing::debug;

/// Coefficients computed per rayon task.
const COEFFICIENT_CHUNK: usize = 64;

/// A total map from palette indices to palette indices.
///
/// The encoder calls it on every element of the plaintext field, so it must
/// accept inputs past the palette as well.
pub trait PixelFunction: Sync {
    fn apply(&self, index: u64) -> u64;
}

impl<F> PixelFunction for F
where
    F: Fn(u64) -> u64 + Sync,
{
    fn apply(&self, index: u64) -> u64 {
        self(index)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl PixelFunction for Identity {
    fn apply(&self, index: u64) -> u64 {
        index
    }
}

/// Restricts `inner` to `[0, domain)` and maps everything above to itself.
#[derive(Debug, Clone, Copy)]
pub struct Padded<F> {
    inner: F,
    domain: u64,
}

impl<F: PixelFunction> Padded<F> {
    pub fn new(inner: F, domain: u64) -> Self {
        Self { inner, domain }
    }
}

impl<F: PixelFunction> PixelFunction for Padded<F> {
    fn apply(&self, index: u64) -> u64 {
        if index < self.domain {
            self.inner.apply(index)
        } else {
            index
        }
    }
}

/// Rotates the hue of each palette colour by a fixed number of degrees and
/// snaps the result back onto the palette.
#[derive(Debug, Clone, Copy)]
pub struct HueRotation<'a> {
    palette: &'a Palette,
    degrees: f64,
}

impl<'a> HueRotation<'a> {
    pub fn new(palette: &'a Palette, degrees: f64) -> Self {
        Self { palette, degrees }
    }
}

impl PixelFunction for HueRotation<'_> {
    fn apply(&self, index: u64) -> u64 {
        let Ok(Rgb([r, g, b])) = self.palette.index_to_color(index) else {
            return index;
        };
        let (h, s, v) = rgb_to_hsv(r, g, b);
        let (r, g, b) = hsv_to_rgb(rotate_hue(h, self.degrees), s, v);
        self.palette.color_to_index(Rgb([r, g, b]))
    }
}

/// Interpolates pixel functions over the plaintext field `Z_t`.
#[derive(Debug, Clone, Copy)]
pub struct FunctionEncoder {
    field: PrimeField,
}

impl FunctionEncoder {
    /// Fails with `NonPrimeModulus` when `t` is not prime.
    pub fn new(t: u64) -> Result<Self> {
        Ok(Self {
            field: PrimeField::new(t)?,
        })
    }

    pub fn field(&self) -> PrimeField {
        self.field
    }

    /// `f(x)` for every `x` in `[0, t)`; each output must be a field element.
    pub fn table<F: PixelFunction + ?Sized>(&self, f: &F) -> Result<Vec<u64>> {
        self.field
            .elements()
            .map(|x| self.field.element(f.apply(x)))
            .collect()
    }

    /// The unique polynomial of degree < t agreeing with `f` on all of `Z_t`,
    /// always with exactly t coefficients.
    ///
    /// Uses `1 - (X - a)^(t-1)` as the indicator of `a`, which gives
    /// `c_0 = f(0)` and `c_k = -sum_a f(a) a^(t-1-k)` for `k >= 1`.
    pub fn encode<F: PixelFunction + ?Sized>(&self, f: &F) -> Result<Polynomial> {
        self.encode_table(&self.table(f)?)
    }

    /// [`FunctionEncoder::encode`] from a precomputed table of `f(0..t)`.
    pub fn encode_table(&self, ys: &[u64]) -> Result<Polynomial> {
        let field = self.field;
        let t = field.modulus();
        if ys.len() != field.order() {
            return Err(Error::DimensionMismatch {
                expected: field.order(),
                actual: ys.len(),
            });
        }
        for &y in ys {
            field.element(y)?;
        }

        let mut coefficients = vec![0u64; field.order()];
        coefficients
            .par_chunks_mut(COEFFICIENT_CHUNK)
            .enumerate()
            .for_each(|(chunk_index, chunk)| {
                let k0 = chunk_index * COEFFICIENT_CHUNK;
                // exponents grow as k shrinks, so walk the chunk backwards
                let lowest_exponent = t - 1 - (k0 + chunk.len() - 1) as u64;
                for (a, &y) in ys.iter().enumerate() {
                    if y == 0 {
                        continue;
                    }
                    let a = a as u64;
                    let mut power = field.pow(a, lowest_exponent);
                    for (j, c) in chunk.iter_mut().enumerate().rev() {
                        if k0 + j != 0 {
                            *c = field.sub(*c, field.mul(y, power));
                        }
                        power = field.mul(power, a);
                    }
                }
            });
        coefficients[0] = ys[0];

        debug!(modulus = t, "interpolated pixel function");
        Polynomial::with_coefficients(field, coefficients)
    }
}

/// Shorthand for `FunctionEncoder::new(t)?.encode(f)`.
pub fn encode<F: PixelFunction + ?Sized>(f: &F, t: u64) -> Result<Polynomial> {
    FunctionEncoder::new(t)?.encode(f)
}
