use crate::image::{Image, ImageView};

/// Copies `src` into a new image surrounded by `border` cells of `value` on
/// every edge. The result is `(width + 2 * border, height + 2 * border)`.
///
/// Panics if the padded size overflows `usize`.
pub fn pad_constant<T: Copy>(src: &ImageView<'_, T>, border: usize, value: T) -> Image<T> {
    let width = src.width() + 2 * border;
    let height = src.height() + 2 * border;
    let mut out = Image::new_fill(width, height, value);

    let data = out.data_mut();
    for (y, row) in src.iter_rows().enumerate() {
        let start = (y + border) * width + border;
        data[start..start + row.len()].copy_from_slice(row);
    }

    out
}
