use log::{debug, trace};
use zs_core::{Error, Image, ImageView, ImageViewMut, Pixel, pad_constant};

use crate::lut::Stage;
use crate::pass::sweep;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThinConfig<T> {
    /// Value treated as empty. Every other value is foreground.
    pub background: T,
}

impl<T> ThinConfig<T> {
    pub fn with_background(background: T) -> Self {
        Self { background }
    }
}

impl<T: Pixel> Default for ThinConfig<T> {
    fn default() -> Self {
        Self {
            background: T::ZERO,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThinStats {
    /// Total passes over both stages. Always even and at least 4.
    pub passes: usize,
    /// Passes that belonged to the edge-peeling stage.
    pub edge_peel_passes: usize,
    /// Foreground pixels removed over all passes.
    pub removed: usize,
}

/// Two padded buffers that swap the source and destination roles each pass.
struct PingPong<T> {
    buffers: [Image<T>; 2],
    front: usize,
}

impl<T: Pixel> PingPong<T> {
    fn new(padded: Image<T>) -> Self {
        let back = padded.clone();
        Self {
            buffers: [padded, back],
            front: 0,
        }
    }

    fn step(&mut self, stage: Stage, pass: usize, background: T) -> usize {
        let [a, b] = &mut self.buffers;
        let (src, dst) = if self.front == 0 { (a, b) } else { (b, a) };
        let removed = sweep(&src.as_view(), &mut dst.as_view_mut(), stage, pass, background);
        self.front ^= 1;
        removed
    }

    fn front(&self) -> &Image<T> {
        &self.buffers[self.front]
    }
}

/// Thins `src` and returns the skeleton together with pass statistics.
pub fn thin_with_stats<T: Pixel>(
    src: &ImageView<'_, T>,
    cfg: &ThinConfig<T>,
) -> (Image<T>, ThinStats) {
    let background = cfg.background;
    let mut buffers = PingPong::new(pad_constant(src, 1, background));
    let mut stats = ThinStats::default();

    for stage in Stage::ALL {
        let first_pass = stats.passes;
        let mut stage_removed = 0usize;

        loop {
            let mut removed = buffers.step(stage, stats.passes, background);
            stats.passes += 1;
            removed += buffers.step(stage, stats.passes, background);
            stats.passes += 1;

            trace!(
                "{stage:?} passes {}..{}: removed {removed}",
                stats.passes - 2,
                stats.passes
            );
            stage_removed += removed;
            if removed == 0 {
                break;
            }
        }

        if stage == Stage::EdgePeel {
            stats.edge_peel_passes = stats.passes;
        }
        stats.removed += stage_removed;
        debug!(
            "{stage:?} converged after {} passes, removed {stage_removed} pixels",
            stats.passes - first_pass
        );
    }

    let skeleton = crop_interior(buffers.front(), src.width(), src.height(), background);
    (skeleton, stats)
}

/// Thins `src` into `dst`, replacing `dst` with an image of `src`'s shape.
/// Returns the number of passes.
pub fn thin<T: Pixel>(src: &ImageView<'_, T>, dst: &mut Image<T>, cfg: &ThinConfig<T>) -> usize {
    let (skeleton, stats) = thin_with_stats(src, cfg);
    *dst = skeleton;
    stats.passes
}

/// Thins `src` into an existing view of the same shape.
///
/// Fails with [`Error::DimensionMismatch`] before doing any work when the
/// shapes differ.
pub fn thin_into<T: Pixel>(
    src: &ImageView<'_, T>,
    dst: &mut ImageViewMut<'_, T>,
    cfg: &ThinConfig<T>,
) -> Result<usize, Error> {
    if src.dims() != dst.dims() {
        return Err(Error::DimensionMismatch {
            expected: src.dims(),
            actual: dst.dims(),
        });
    }

    let (skeleton, stats) = thin_with_stats(src, cfg);
    dst.copy_from(&skeleton.as_view())?;
    Ok(stats.passes)
}

/// Overwrites `img` with its own skeleton. Returns the number of passes.
pub fn thin_in_place<T: Pixel>(img: &mut ImageViewMut<'_, T>, cfg: &ThinConfig<T>) -> usize {
    let (skeleton, stats) = thin_with_stats(&img.as_view(), cfg);
    for (y, row) in skeleton.as_view().iter_rows().enumerate() {
        img.row_mut(y).copy_from_slice(row);
    }
    stats.passes
}

/// Skeleton of `src` against the zero background.
pub fn skeletonize<T: Pixel>(src: &ImageView<'_, T>) -> Image<T> {
    thin_with_stats(src, &ThinConfig::default()).0
}

pub fn count_foreground<T: Pixel>(img: &ImageView<'_, T>, background: T) -> usize {
    img.iter_rows()
        .map(|row| row.iter().filter(|&&v| v != background).count())
        .sum()
}

fn crop_interior<T: Pixel>(padded: &Image<T>, width: usize, height: usize, fill: T) -> Image<T> {
    let mut out = Image::new_fill(width, height, fill);
    let padded = padded.as_view();
    let data = out.data_mut();
    for y in 0..height {
        data[y * width..(y + 1) * width].copy_from_slice(&padded.row(y + 1)[1..=width]);
    }
    out
}
