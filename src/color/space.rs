//! RGB <-> HSV conversion on top of the `palette` crate.
//!
//! Hue is in degrees `[0, 360)`, saturation and value in `[0, 1]`.

use palette::{encoding, FromColor, Hsv, RgbHue, Srgb};

pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> (f64, f64, f64) {
    let rgb = Srgb::new(r, g, b).into_format::<f64>();
    let hsv = Hsv::<encoding::Srgb, f64>::from_color(rgb);
    (positive_degrees(hsv.hue), hsv.saturation, hsv.value)
}

/// Any hue is accepted and wrapped; saturation and value are clamped.
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (u8, u8, u8) {
    let hsv = Hsv::<encoding::Srgb, f64>::new(
        RgbHue::from_degrees(h),
        s.clamp(0.0, 1.0),
        v.clamp(0.0, 1.0),
    );
    let rgb = Srgb::<f64>::from_color(hsv).into_format::<u8>();
    (rgb.red, rgb.green, rgb.blue)
}

/// `(h + degrees) mod 360`, for any sign of `degrees`.
pub fn rotate_hue(h: f64, degrees: f64) -> f64 {
    positive_degrees(RgbHue::from_degrees(h) + degrees)
}

fn positive_degrees(hue: RgbHue<f64>) -> f64 {
    let h = hue.into_positive_degrees();
    // tiny negatives round up to 360.0
    if h >= 360.0 {
        0.0
    } else {
        h
    }
}
