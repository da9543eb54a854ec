//! Raster image I/O on top of the `image` crate.

use crate::error::Result;
use image::{imageops, imageops::FilterType, RgbImage};
use std::path::Path;

/// Loads any supported format and drops alpha.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<RgbImage> {
    Ok(image::open(path)?.to_rgb8())
}

/// Format is picked from the file extension.
pub fn save_image<P: AsRef<Path>>(image: &RgbImage, path: P) -> Result<()> {
    image.save(path)?;
    Ok(())
}

pub fn resize(image: &RgbImage, width: u32, height: u32, filter: FilterType) -> RgbImage {
    if image.dimensions() == (width, height) {
        return image.clone();
    }
    imageops::resize(image, width, height, filter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn gradient(width: u32, height: u32) -> RgbImage {
        RgbImage::from_fn(width, height, |x, y| Rgb([(x * 4) as u8, (y * 4) as u8, 128]))
    }

    #[test]
    fn test_resize() {
        let img = gradient(50, 40);
        let small = resize(&img, 32, 32, FilterType::CatmullRom);
        assert_eq!(small.dimensions(), (32, 32));
        assert_eq!(resize(&img, 50, 40, FilterType::Nearest), img);
    }

    #[test]
    fn test_save_load() {
        let img = gradient(8, 5);
        let path = std::env::temp_dir().join(format!("he_image_raster_{}.png", std::process::id()));
        save_image(&img, &path).unwrap();
        let loaded = load_image(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(loaded, img);
    }

    #[test]
    fn test_load_missing_file() {
        assert!(load_image("/nonexistent/he_image.png").is_err());
    }
}
