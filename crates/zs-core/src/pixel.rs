use core::fmt::Debug;

/// Grid element usable by the thinning and padding routines.
///
/// The only predicate ever applied to a pixel is `==` against a configured
/// background value. Arrays compare elementwise, so `[u8; 3]` behaves as an
/// RGB pixel that is background only when all three channels match.
///
/// Floating-point pixels follow IEEE equality: a `NaN` sample never equals the
/// background and is treated as foreground.
pub trait Pixel: Copy + PartialEq + Debug {
    /// Default background value.
    const ZERO: Self;
}

macro_rules! impl_scalar_pixel {
    ($($ty:ty => $zero:expr),* $(,)?) => {
        $(
            impl Pixel for $ty {
                const ZERO: Self = $zero;
            }
        )*
    };
}

impl_scalar_pixel! {
    i8 => 0,
    u8 => 0,
    i16 => 0,
    u16 => 0,
    i32 => 0,
    u32 => 0,
    i64 => 0,
    u64 => 0,
    f32 => 0.0,
    f64 => 0.0,
}

impl<T: Pixel, const N: usize> Pixel for [T; N] {
    const ZERO: Self = [T::ZERO; N];
}
