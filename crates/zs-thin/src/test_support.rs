//! ASCII fixtures: `#` is 255, anything else is 0.

use zs_core::Image;

pub(crate) fn ascii(rows: &[&str]) -> Image<u8> {
    let height = rows.len();
    let width = rows.first().map_or(0, |r| r.len());
    let mut data = Vec::with_capacity(width * height);
    for row in rows {
        assert_eq!(row.len(), width, "ragged fixture");
        data.extend(row.bytes().map(|b| if b == b'#' { 255u8 } else { 0 }));
    }
    Image::from_vec(width, height, data).expect("fixture dimensions")
}

pub(crate) fn render(img: &Image<u8>) -> Vec<String> {
    img.as_view()
        .iter_rows()
        .map(|row| row.iter().map(|&v| if v == 0 { '.' } else { '#' }).collect())
        .collect()
}
