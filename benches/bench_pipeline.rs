use criterion::{criterion_group, criterion_main, Criterion};
use he_image::{
    color::Palette,
    encoder::HueRotation,
    pipeline::Pipeline,
    scheme::{ClearScheme, DEMO_PARAMS},
    slots::{IndexImage, SlotPacker},
};
use image::{Rgb, RgbImage};
use rand::Rng;

fn random_image(width: u32, height: u32) -> RgbImage {
    let mut rng = rand::thread_rng();
    RgbImage::from_fn(width, height, |_, _| Rgb([rng.gen(), rng.gen(), rng.gen()]))
}

pub fn bench_slots(c: &mut Criterion) {
    let packer = SlotPacker::new(DEMO_PARAMS.batch_capacity);
    let image = IndexImage::new(32, 32, (0..1024).map(|i| i % 256).collect()).unwrap();
    let slots = packer.pack(&image).unwrap();

    let mut group = c.benchmark_group("Slots 32x32");
    group.bench_function("Pack", |b| b.iter(|| packer.pack(&image)));
    group.bench_function("Unpack", |b| b.iter(|| packer.unpack(&slots, 32, 32)));
    group.finish();
}

pub fn bench_transform(c: &mut Criterion) {
    let palette = Palette::default_lut256();
    let scheme = ClearScheme::new(DEMO_PARAMS).unwrap();
    let pipeline = Pipeline::new(&scheme, &palette).unwrap();
    let keys = pipeline.generate_keys().unwrap();
    let rotate = HueRotation::new(&palette, 30.0);
    let source = random_image(256, 256);

    let mut group = c.benchmark_group("Pipeline");
    group.bench_function("Quantize 256x256", |b| b.iter(|| palette.quantize(&source)));
    group.bench_function("HueRotation 256x256", |b| {
        b.iter(|| pipeline.transform(&source, &rotate, &keys))
    });
    group.finish();
}

criterion_group! {
    name = pipeline;
    config = Criterion::default().sample_size(20);
    targets = bench_slots, bench_transform
}

criterion_main!(pipeline);
