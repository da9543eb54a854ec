pub mod palette;
pub mod space;

pub use self::{
    palette::Palette,
    space::{hsv_to_rgb, rgb_to_hsv, rotate_hue},
};
