//! quantize -> pack -> encrypt -> evaluate -> decrypt -> unpack -> dequantize

use crate::{
    color::Palette,
    encoder::{FunctionEncoder, Padded, PixelFunction},
    error::{Error, Result},
    raster,
    scheme::{BatchScheme, SchemeKeys, SchemeStage},
    slots::{IndexImage, SlotPacker},
};
use image::{imageops::FilterType, RgbImage};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy)]
pub struct PipelineOptions {
    /// Resampling filter used to fit the source into the slots.
    pub filter: FilterType,
    /// Scale the result back up to the source dimensions.
    pub restore_size: bool,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            filter: FilterType::CatmullRom,
            restore_size: false,
        }
    }
}

/// Side of the largest square image that fits in `capacity` slots.
pub fn target_dimension(capacity: usize) -> usize {
    let fits = |d: usize| d.checked_mul(d).is_some_and(|square| square <= capacity);
    let mut dim = (capacity as f64).sqrt() as usize;
    while !fits(dim) {
        dim -= 1;
    }
    while fits(dim + 1) {
        dim += 1;
    }
    dim
}

pub struct Pipeline<'a, S: BatchScheme> {
    scheme: &'a S,
    palette: &'a Palette,
    encoder: FunctionEncoder,
    packer: SlotPacker,
    options: PipelineOptions,
}

impl<'a, S: BatchScheme> Pipeline<'a, S> {
    /// Checks the scheme parameters against the palette. Nothing is
    /// encrypted if this fails.
    pub fn new(scheme: &'a S, palette: &'a Palette) -> Result<Self> {
        let encoder = FunctionEncoder::new(scheme.plaintext_modulus())?;
        let t = encoder.field().modulus();
        if palette.len() as u64 > t {
            return Err(Error::OutOfRange {
                value: palette.len() as u64,
                bound: t,
            });
        }

        Ok(Self {
            scheme,
            palette,
            encoder,
            packer: SlotPacker::new(scheme.batch_capacity()),
            options: PipelineOptions::default(),
        })
    }

    pub fn with_options(mut self, options: PipelineOptions) -> Self {
        self.options = options;
        self
    }

    pub fn dimension(&self) -> usize {
        target_dimension(self.packer.capacity())
    }

    pub fn generate_keys(&self) -> Result<SchemeKeys<S>> {
        self.scheme
            .key_gen()
            .map_err(|e| Error::scheme(SchemeStage::KeyGeneration, e))
    }

    /// Runs `f` over every pixel of `source` under encryption.
    ///
    /// The source is resampled to the largest square the scheme can carry;
    /// the result keeps that size unless `restore_size` is set.
    pub fn transform<F: PixelFunction>(
        &self,
        source: &RgbImage,
        f: &F,
        keys: &SchemeKeys<S>,
    ) -> Result<RgbImage> {
        let dim = self.dimension();
        if dim == 0 {
            return Err(Error::CapacityExceeded {
                requested: 1,
                capacity: self.packer.capacity(),
            });
        }
        let (width, height) = source.dimensions();
        if width == 0 || height == 0 {
            return Err(Error::DimensionMismatch {
                expected: dim * dim,
                actual: 0,
            });
        }
        info!(width, height, dim, "transforming image");

        let resized = raster::resize(source, dim as u32, dim as u32, self.options.filter);
        let indices = self.palette.quantize(&resized)?;
        let transformed = self.transform_indices(&indices, f, keys)?;
        let output = self.palette.dequantize(&transformed)?;

        if self.options.restore_size {
            return Ok(raster::resize(&output, width, height, self.options.filter));
        }
        Ok(output)
    }

    /// The encrypted part of [`Pipeline::transform`], on an already quantized
    /// image of any shape that fits in the slots.
    pub fn transform_indices<F: PixelFunction>(
        &self,
        image: &IndexImage,
        f: &F,
        keys: &SchemeKeys<S>,
    ) -> Result<IndexImage> {
        let domain = self.palette.len() as u64;
        if let Some(&value) = image.pixels().iter().find(|&&i| i >= domain) {
            return Err(Error::OutOfRange {
                value,
                bound: domain,
            });
        }

        // encode first so a bad function never reaches the scheme
        let padded = Padded::new(|x: u64| f.apply(x), domain);
        let table = self.encoder.table(&padded)?;
        if let Some(&value) = table[..domain as usize].iter().find(|&&y| y >= domain) {
            return Err(Error::OutOfRange {
                value,
                bound: domain,
            });
        }
        let poly = self.encoder.encode_table(&table)?;
        let slots = self.packer.pack(image)?;
        debug!(
            modulus = self.encoder.field().modulus(),
            slots = slots.len(),
            "encrypting"
        );

        let ciphertext = self
            .scheme
            .encrypt_batch(&slots, &keys.public)
            .map_err(|e| Error::scheme(SchemeStage::Encryption, e))?;
        let ciphertext = self
            .scheme
            .evaluate_polynomial(&ciphertext, &poly, &keys.eval)
            .map_err(|e| Error::scheme(SchemeStage::Evaluation, e))?;
        let decrypted = self
            .scheme
            .decrypt_batch(&ciphertext, &keys.secret)
            .map_err(|e| Error::scheme(SchemeStage::Decryption, e))?;
        debug!("decrypted");

        let output = self.packer.unpack(&decrypted, image.width(), image.height())?;
        info!(
            width = output.width(),
            height = output.height(),
            "image transformed"
        );
        Ok(output)
    }
}
