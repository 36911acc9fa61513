use std::path::PathBuf;

use anyhow::{bail, Context};
use bayer_dng_rs::dng::{save_dng, CfaPattern, DngOptions, Raster};
use bayer_dng_rs::logger;

use tracing::{error, info};

const USAGE: &str = "usage: bayer_dng_rs <input.raw> <output.dng> <width> <height> <8|16> [camera] [pattern]";

struct Args {
    input: PathBuf,
    output: PathBuf,
    width: usize,
    height: usize,
    bits: u32,
    options: DngOptions,
}

fn parse_args() -> anyhow::Result<Args> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 5 {
        bail!(USAGE);
    }

    let mut options = DngOptions::builder();
    if let Some(camera) = args.get(5) {
        options = options.camera(camera.as_str());
    }
    if let Some(pattern) = args.get(6) {
        options = options.cfa_pattern(pattern.parse::<CfaPattern>()?);
    }

    Ok(Args {
        input: PathBuf::from(&args[0]),
        output: PathBuf::from(&args[1]),
        width: args[2].parse().context("invalid width")?,
        height: args[3].parse().context("invalid height")?,
        bits: args[4].parse().context("invalid bit depth")?,
        options: options.build(),
    })
}

fn run(args: &Args) -> anyhow::Result<()> {
    let data = std::fs::read(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;

    let raster = match args.bits {
        8 => Raster::mono8(&data, args.width, args.height),
        16 => Raster::mono16(&data, args.width, args.height),
        other => bail!("unsupported bit depth {other}, expected 8 or 16"),
    };

    save_dng(&raster, &args.output, &args.options)?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    logger::init()?;

    let args = parse_args()?;
    info!(
        "Converting {} ({}x{}, {}-bit, {}) to {}",
        args.input.display(),
        args.width,
        args.height,
        args.bits,
        args.options.cfa_pattern,
        args.output.display()
    );

    match run(&args) {
        Ok(()) => info!("Conversion successful!"),
        Err(e) => {
            error!("Conversion failed: {:#}", e);
            return Err(e);
        }
    }

    Ok(())
}
