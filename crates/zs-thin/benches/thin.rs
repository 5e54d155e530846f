use criterion::{Criterion, black_box, criterion_group, criterion_main};
use zs_core::Image;
use zs_thin::{ThinConfig, thin_with_stats};

/// Filled discs and bars on a 512x512 canvas.
fn synthetic_blobs(width: usize, height: usize) -> Image<u8> {
    let mut data = vec![0u8; width * height];
    for y in 0..height {
        for x in 0..width {
            let (cx, cy) = ((x % 128) as isize - 64, (y % 128) as isize - 64);
            let in_disc = cx * cx + cy * cy < 40 * 40;
            let in_bar = (y % 64) < 9 && x > 16 && x < width - 16;
            if in_disc || in_bar {
                data[y * width + x] = 255;
            }
        }
    }
    Image::from_vec(width, height, data).expect("valid image")
}

fn bench_thin_u8(c: &mut Criterion) {
    let img = synthetic_blobs(512, 512);
    let view = img.as_view();
    let cfg = ThinConfig::default();

    c.bench_function("zs_thin_u8_512x512_blobs", |b| {
        b.iter(|| {
            let (out, stats) = thin_with_stats(black_box(&view), &cfg);
            black_box((out, stats.passes));
        });
    });
}

fn bench_thin_rgb(c: &mut Criterion) {
    let gray = synthetic_blobs(512, 512);
    let data = gray.data().iter().map(|&v| [v, v / 2, 0]).collect();
    let img = Image::from_vec(512, 512, data).expect("valid image");
    let view = img.as_view();
    let cfg = ThinConfig::default();

    c.bench_function("zs_thin_rgb_512x512_blobs", |b| {
        b.iter(|| {
            let (out, stats) = thin_with_stats(black_box(&view), &cfg);
            black_box((out, stats.passes));
        });
    });
}

criterion_group!(benches, bench_thin_u8, bench_thin_rgb);
criterion_main!(benches);
