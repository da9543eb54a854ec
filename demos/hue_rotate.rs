use he_image::{
    color::Palette,
    encoder::HueRotation,
    pipeline::{Pipeline, PipelineOptions},
    raster,
    scheme::{BatchScheme, ClearScheme, DEMO_PARAMS},
};
use std::{env, time::Instant};
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_DEGREES: f64 = 30.0;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = env::args().collect::<Vec<String>>();
    if args.len() < 3 || args.len() > 4 {
        println!("Usage:");
        println!("hue_rotate: <input> <output> [degrees]");
        return Ok(());
    }
    let degrees = match args.get(3) {
        Some(arg) => arg.trim().parse::<f64>()?,
        None => DEFAULT_DEGREES,
    };

    let source = raster::load_image(args[1].trim())?;

    let start = Instant::now();
    let scheme = ClearScheme::new(DEMO_PARAMS)?;
    info!(
        modulus = scheme.plaintext_modulus(),
        slots = scheme.batch_capacity(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "scheme ready"
    );

    let palette = Palette::default_lut256();
    let pipeline = Pipeline::new(&scheme, &palette)?.with_options(PipelineOptions {
        restore_size: true,
        ..PipelineOptions::default()
    });

    let start = Instant::now();
    let keys = pipeline.generate_keys()?;
    info!(elapsed_ms = start.elapsed().as_millis() as u64, "keys generated");

    let start = Instant::now();
    let output = pipeline.transform(&source, &HueRotation::new(&palette, degrees), &keys)?;
    info!(elapsed_ms = start.elapsed().as_millis() as u64, degrees, "hue rotated");

    raster::save_image(&output, args[2].trim())?;
    Ok(())
}
