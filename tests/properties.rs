//! Property-based tests for the encoder, packer, palette and colour model.

use he_image::{
    color::{hsv_to_rgb, rgb_to_hsv, rotate_hue, Palette},
    encoder::FunctionEncoder,
    slots::{IndexImage, SlotPacker},
    Error,
};
use image::Rgb;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    /// The encoded polynomial reproduces the function table exactly.
    #[test]
    fn prop_interpolation_257(table in prop::collection::vec(0u64..257, 257)) {
        let encoder = FunctionEncoder::new(257).unwrap();
        let poly = encoder.encode(&|x: u64| table[x as usize]).unwrap();
        prop_assert_eq!(poly.len(), 257);
        for x in 0..257u64 {
            prop_assert_eq!(poly.evaluate(x), table[x as usize]);
        }
    }

    #[test]
    fn prop_interpolation_small_primes(
        t in prop::sample::select(vec![2u64, 3, 5, 11, 13, 31, 61, 101]),
        seed in any::<u64>(),
    ) {
        let f = move |x: u64| (x.wrapping_mul(seed) ^ (seed >> 7)) % t;
        let poly = FunctionEncoder::new(t).unwrap().encode(&f).unwrap();
        for x in 0..t {
            prop_assert_eq!(poly.evaluate(x), f(x));
        }
    }
}

proptest! {
    #[test]
    fn prop_pack_unpack(width in 1usize..40, height in 1usize..40, extra in 0usize..64, seed in any::<u64>()) {
        let pixels = (0..width * height).map(|i| (i as u64 ^ seed) % 257).collect();
        let image = IndexImage::new(width, height, pixels).unwrap();
        let packer = SlotPacker::new(width * height + extra);

        let slots = packer.pack(&image).unwrap();
        prop_assert_eq!(slots.len(), width * height + extra);
        prop_assert!(slots.as_slice()[width * height..].iter().all(|&s| s == 0));
        prop_assert_eq!(packer.unpack(&slots, width, height).unwrap(), image);
    }

    #[test]
    fn prop_pack_over_capacity(width in 1usize..30, height in 1usize..30) {
        let image = IndexImage::new(width, height, vec![0; width * height]).unwrap();
        let capacity = width * height - 1;
        let result = SlotPacker::new(capacity).pack(&image);
        let is_capacity_exceeded = matches!(
            result,
            Err(Error::CapacityExceeded { requested, capacity: c }) if requested == width * height && c == capacity
        );
        prop_assert!(is_capacity_exceeded);
    }

    /// Quantization picks a colour no farther than any other palette entry.
    #[test]
    fn prop_quantizer_nearest(r: u8, g: u8, b: u8) {
        let palette = Palette::default_lut256();
        let index = palette.color_to_index(Rgb([r, g, b]));
        prop_assert!(index < 256);

        let dist = |c: Rgb<u8>| -> u32 {
            c.0.iter().zip([r, g, b]).map(|(&x, y)| (x.abs_diff(y) as u32).pow(2)).sum()
        };
        let chosen = dist(palette.index_to_color(index).unwrap());
        prop_assert!(palette.colors().iter().all(|&c| dist(c) >= chosen));
    }

    #[test]
    fn prop_hsv_round_trip(r: u8, g: u8, b: u8) {
        let (h, s, v) = rgb_to_hsv(r, g, b);
        prop_assert!((0.0..360.0).contains(&h));
        prop_assert!((0.0..=1.0).contains(&s));
        prop_assert!((0.0..=1.0).contains(&v));

        let (r2, g2, b2) = hsv_to_rgb(h, s, v);
        prop_assert!(r.abs_diff(r2) <= 1);
        prop_assert!(g.abs_diff(g2) <= 1);
        prop_assert!(b.abs_diff(b2) <= 1);
    }

    #[test]
    fn prop_rotate_hue_in_range(h in 0.0f64..360.0, degrees in -1000.0f64..1000.0) {
        let rotated = rotate_hue(h, degrees);
        prop_assert!((0.0..360.0).contains(&rotated));
    }
}
