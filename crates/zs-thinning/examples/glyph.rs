//! Example: skeleton of a synthetic glyph, printed as ASCII.
//!
//! Draws a thick letter-like shape (a ring with a vertical stem), thins it and
//! prints input and skeleton side by side together with pass statistics.
//!
//! Run from the workspace root:
//!   cargo run -p zs-thinning --example glyph -- --help
//!   cargo run -p zs-thinning --example glyph -- --size 31 --stroke 5

use anyhow::{Result, bail};
use clap::Parser;
use zs_thinning::{Image, ThinConfig, count_foreground, thin_with_stats};

#[derive(Parser, Debug)]
#[command(about = "Thin a synthetic glyph and print it as ASCII")]
struct Args {
    /// Glyph height in pixels; the width is derived from it.
    #[arg(long, default_value_t = 21)]
    size: usize,

    /// Stroke thickness in pixels.
    #[arg(long, default_value_t = 4)]
    stroke: usize,
}

fn draw_glyph(size: usize, stroke: usize) -> Image<u8> {
    let width = size + size / 2;
    let mut img = Image::new_fill(width, size, 0u8);

    let c = (size as f32 - 1.0) / 2.0;
    let outer = c - 1.0;
    let inner = (outer - stroke as f32).max(0.0);
    let stem_x = (2.0 * c) as usize;

    let mut view = img.as_view_mut();
    for y in 0..size {
        for x in 0..width {
            let (dx, dy) = (x as f32 - c, y as f32 - c);
            let r = (dx * dx + dy * dy).sqrt();
            let in_ring = r <= outer && r > inner;
            let in_stem = x >= stem_x && x < stem_x + stroke && y > 0 && y + 1 < size;
            if (in_ring || in_stem)
                && let Some(px) = view.get_mut(x, y)
            {
                *px = 255;
            }
        }
    }
    img
}

fn main() -> Result<()> {
    let args = Args::parse();
    if args.size < 5 {
        bail!("--size must be at least 5, got {}", args.size);
    }
    if args.stroke == 0 || args.stroke * 2 >= args.size {
        bail!("--stroke must be in 1..{}, got {}", args.size / 2, args.stroke);
    }

    let glyph = draw_glyph(args.size, args.stroke);
    let (skeleton, stats) = thin_with_stats(&glyph.as_view(), &ThinConfig::default());

    let (src, dst) = (glyph.as_view(), skeleton.as_view());
    for y in 0..glyph.height() {
        let left: String = src.row(y).iter().map(|&v| if v > 0 { '#' } else { '.' }).collect();
        let right: String = dst.row(y).iter().map(|&v| if v > 0 { '#' } else { '.' }).collect();
        println!("{left}   {right}");
    }

    println!();
    println!(
        "passes: {} ({} edge peeling), removed {} of {} pixels, {} remain",
        stats.passes,
        stats.edge_peel_passes,
        stats.removed,
        count_foreground(&src, 0),
        count_foreground(&dst, 0)
    );

    Ok(())
}
