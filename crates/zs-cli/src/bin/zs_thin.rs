use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;
use flexi_logger::Logger;
use image::{GrayImage, RgbImage};
use log::info;
use serde::Serialize;
use zs_core::{Image, Pixel};
use zs_thin::{ThinConfig, ThinStats, count_foreground, thin_with_stats};

#[derive(Parser, Debug)]
#[command(name = "zs_thin")]
#[command(about = "Reduce foreground regions of an image to one-pixel-wide skeletons")]
struct Cli {
    /// Source image; decoded as 8-bit grayscale unless --color is given.
    input: PathBuf,

    /// Where to write the skeleton. Without it only statistics are reported.
    output: Option<PathBuf>,

    /// Grayscale background value.
    #[arg(long, default_value_t = 0, conflicts_with = "invert")]
    background: u8,

    /// Treat white as background (dark strokes on a light page).
    #[arg(long)]
    invert: bool,

    /// Thin the RGB image; a pixel is background only if all channels match.
    #[arg(long)]
    color: bool,

    /// RGB background as `R,G,B`, used with --color.
    #[arg(long, value_parser = parse_rgb, default_value = "0,0,0", conflicts_with = "invert")]
    background_rgb: [u8; 3],

    /// Write a JSON summary of the run to this path.
    #[arg(long)]
    meta: Option<PathBuf>,

    /// Log level when RUST_LOG is unset.
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[derive(Debug, Clone, Serialize)]
struct MetaThinning {
    input: String,
    output: Option<String>,
    mode: &'static str,
    width: usize,
    height: usize,
    background: Vec<u8>,
    passes: usize,
    edge_peel_passes: usize,
    removed: usize,
    remaining: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let _logger = Logger::try_with_env_or_str(&cli.log_level)
        .context("parsing log specification")?
        .log_to_stderr()
        .start()
        .context("starting logger")?;

    ensure_file_exists(&cli.input, "input")?;

    let meta = if cli.color {
        let bg = if cli.invert { [255; 3] } else { cli.background_rgb };
        let img = load_input_rgb(&cli.input)?;
        let (skeleton, stats) = run_thinning(&cli, &img, bg);
        if let Some(out) = &cli.output {
            save_rgb_image(out, &skeleton)?;
        }
        let remaining = count_foreground(&skeleton.as_view(), bg);
        meta_for(&cli, "rgb", &img, bg.to_vec(), stats, remaining)
    } else {
        let bg = if cli.invert { 255 } else { cli.background };
        let img = load_input_u8(&cli.input)?;
        let (skeleton, stats) = run_thinning(&cli, &img, bg);
        if let Some(out) = &cli.output {
            save_u8_image(out, &skeleton)?;
        }
        let remaining = count_foreground(&skeleton.as_view(), bg);
        meta_for(&cli, "gray", &img, vec![bg], stats, remaining)
    };

    if let Some(path) = &cli.meta {
        write_json(path, &meta)?;
        info!("summary written to {}", path.display());
    }

    Ok(())
}

fn run_thinning<T: Pixel>(cli: &Cli, img: &Image<T>, background: T) -> (Image<T>, ThinStats) {
    info!(
        "thinning {} ({}x{}, background {:?})",
        cli.input.display(),
        img.width(),
        img.height(),
        background
    );

    let cfg = ThinConfig::with_background(background);
    let (skeleton, stats) = thin_with_stats(&img.as_view(), &cfg);
    info!(
        "{} passes ({} edge peeling), removed {} pixels",
        stats.passes, stats.edge_peel_passes, stats.removed
    );
    (skeleton, stats)
}

fn meta_for<T>(
    cli: &Cli,
    mode: &'static str,
    img: &Image<T>,
    background: Vec<u8>,
    stats: ThinStats,
    remaining: usize,
) -> MetaThinning {
    MetaThinning {
        input: cli.input.display().to_string(),
        output: cli.output.as_ref().map(|p| p.display().to_string()),
        mode,
        width: img.width(),
        height: img.height(),
        background,
        passes: stats.passes,
        edge_peel_passes: stats.edge_peel_passes,
        removed: stats.removed,
        remaining,
    }
}

fn parse_rgb(s: &str) -> Result<[u8; 3], String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    let [r, g, b] = parts.as_slice() else {
        return Err(format!("expected R,G,B, got '{s}'"));
    };

    let channel = |v: &str| {
        v.parse::<u8>()
            .map_err(|e| format!("invalid channel '{v}' in '{s}': {e}"))
    };
    Ok([channel(r)?, channel(g)?, channel(b)?])
}

fn load_input_u8(path: &Path) -> Result<Image<u8>> {
    let dyn_img =
        image::open(path).with_context(|| format!("opening input image {}", path.display()))?;
    let luma = dyn_img.to_luma8();
    let (w, h) = luma.dimensions();

    Image::from_vec(w as usize, h as usize, luma.into_raw())
        .with_context(|| format!("constructing grayscale grid from {}", path.display()))
}

fn load_input_rgb(path: &Path) -> Result<Image<[u8; 3]>> {
    let dyn_img =
        image::open(path).with_context(|| format!("opening input image {}", path.display()))?;
    let rgb = dyn_img.to_rgb8();
    let (w, h) = rgb.dimensions();
    let data = rgb
        .as_raw()
        .chunks_exact(3)
        .map(|px| [px[0], px[1], px[2]])
        .collect();

    Image::from_vec(w as usize, h as usize, data)
        .with_context(|| format!("constructing rgb grid from {}", path.display()))
}

fn save_u8_image(path: &Path, img: &Image<u8>) -> Result<()> {
    ensure_parent_dir(path)?;
    let gray = GrayImage::from_raw(img.width() as u32, img.height() as u32, img.data().to_vec())
        .context("constructing GrayImage from raw bytes")?;
    gray.save(path)
        .with_context(|| format!("saving image {}", path.display()))?;
    info!("skeleton written to {}", path.display());
    Ok(())
}

fn save_rgb_image(path: &Path, img: &Image<[u8; 3]>) -> Result<()> {
    ensure_parent_dir(path)?;
    let raw = img.data().iter().flatten().copied().collect();
    let rgb = RgbImage::from_raw(img.width() as u32, img.height() as u32, raw)
        .context("constructing RgbImage from raw bytes")?;
    rgb.save(path)
        .with_context(|| format!("saving image {}", path.display()))?;
    info!("skeleton written to {}", path.display());
    Ok(())
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating output directory {}", parent.display()))?;
    }
    Ok(())
}

fn write_json(path: &Path, value: &impl Serialize) -> Result<()> {
    ensure_parent_dir(path)?;
    let bytes = serde_json::to_vec_pretty(value).context("serializing json")?;
    fs::write(path, bytes).with_context(|| format!("writing json {}", path.display()))
}

fn ensure_file_exists(path: &Path, what: &str) -> Result<()> {
    if !path.exists() {
        bail!("{} file does not exist: {}", what, path.display());
    }
    if !path.is_file() {
        bail!("{} path is not a file: {}", what, path.display());
    }
    Ok(())
}
