//! Foundational grid primitives for `zs-thinning`.
//!
//! ## Images and Views
//! [`Image`] owns a contiguous buffer. [`ImageView`] and [`ImageViewMut`]
//! borrow a rectangle of some buffer and use element stride (not byte
//! stride): `stride` is the distance, in elements, between adjacent row
//! starts and may be greater than `width`. Subviews of a padded buffer are
//! therefore just views with a wider stride.
//!
//! ## Pixels
//! Every algorithm in the workspace is generic over a [`Pixel`]: a `Copy`
//! value compared with `==`. Multi-channel pixels are fixed-size arrays and
//! compare elementwise.
//!
//! ## Padding
//! [`pad_constant`] surrounds an image with a ring of a constant value so
//! neighborhood reads near the edge need no bounds checks.

mod error;
mod image;
mod pad;
mod pixel;

pub use error::Error;
pub use image::{Image, ImageView, ImageViewMut};
pub use pad::pad_constant;
pub use pixel::Pixel;
