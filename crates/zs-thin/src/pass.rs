use zs_core::{Error, ImageView, ImageViewMut, Pixel};

use crate::lut::{Stage, pass_mask, removal_flags};
use crate::neighborhood::NeighborWindow;

/// Runs one thinning sweep from `src` into `dst` and returns how many
/// foreground pixels it removed.
///
/// Both grids are expected to carry a one-cell `background` ring: only the
/// interior `1..width-1` x `1..height-1` is inspected. `dst` is overwritten
/// entirely, so removed pixels and the ring come out as `background`.
/// Grids without an interior (width or height below 3) yield an all
/// background `dst` and a count of zero.
pub fn thin_pass<T: Pixel>(
    src: &ImageView<'_, T>,
    dst: &mut ImageViewMut<'_, T>,
    stage: Stage,
    pass: usize,
    background: T,
) -> Result<usize, Error> {
    if src.dims() != dst.dims() {
        return Err(Error::DimensionMismatch {
            expected: src.dims(),
            actual: dst.dims(),
        });
    }

    Ok(sweep(src, dst, stage, pass, background))
}

/// [`thin_pass`] without the shape check. Callers guarantee equal dims.
pub(crate) fn sweep<T: Pixel>(
    src: &ImageView<'_, T>,
    dst: &mut ImageViewMut<'_, T>,
    stage: Stage,
    pass: usize,
    background: T,
) -> usize {
    debug_assert_eq!(src.dims(), dst.dims());

    dst.fill(background);

    let (width, height) = src.dims();
    if width < 3 || height < 3 {
        return 0;
    }

    let mask = pass_mask(pass);
    let occupied = |v: &T| *v != background;

    let mut removed = 0usize;
    for cy in 1..height - 1 {
        let top = src.row(cy - 1);
        let mid = src.row(cy);
        let bottom = src.row(cy + 1);
        let out = dst.row_mut(cy);

        let mut window = NeighborWindow::begin(
            [occupied(&top[0]), occupied(&top[1])],
            [occupied(&mid[0]), occupied(&mid[1])],
            [occupied(&bottom[0]), occupied(&bottom[1])],
        );

        for cx in 1..width - 1 {
            let nx = cx + 1;
            window.slide(occupied(&top[nx]), occupied(&mid[nx]), occupied(&bottom[nx]));

            let center = mid[cx];
            if !occupied(&center) {
                continue;
            }

            if removal_flags(stage, window.key()) & mask != 0 {
                removed += 1;
            } else {
                out[cx] = center;
            }
            window.mark_center();
        }
    }

    removed
}
