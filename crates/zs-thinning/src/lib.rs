//! Umbrella crate for the `zs-thinning` workspace.
//!
//! Re-exports the grid primitives of `zs-core` and the thinning engine of
//! `zs-thin`, so most callers need a single dependency:
//!
//! ```
//! use zs_thinning::{Image, ThinConfig, thin_with_stats};
//!
//! let img = Image::new_fill(5, 5, 255u8);
//! let (skeleton, stats) = thin_with_stats(&img.as_view(), &ThinConfig::default());
//! assert_eq!(skeleton.dims(), (5, 5));
//! assert_eq!(stats.passes % 2, 0);
//! ```

pub use zs_core::*;
pub use zs_thin::*;
