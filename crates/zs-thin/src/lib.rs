//! Zhang-Suen thinning for generic pixel grids.
//!
//! Foreground regions (every pixel not equal to the configured background)
//! are peeled down to a one-pixel-wide skeleton that keeps connectivity,
//! loops and branch points. The decision for each pixel is a single lookup
//! in a 256-entry table keyed by its 3x3 neighborhood.
//!
//! Execution model:
//! - The source is copied into a buffer with a one-cell background ring, so
//!   neighborhood reads never leave the buffer.
//! - Two equally sized buffers alternate as source and destination of each
//!   sweep. A sweep never writes the buffer it reads.
//! - Stage 0 repeats pass pairs until a pair removes nothing, then stage 1
//!   clears stuck pixels the same way. The pass counter runs across both
//!   stages, so a call performs at least four passes.
//!
//! Retained pixels keep their exact input value; background never turns into
//! foreground.

pub mod lut;
pub mod neighborhood;
mod pass;
#[cfg(test)]
mod test_support;
mod thinning;

pub use lut::Stage;
pub use neighborhood::{NeighborWindow, neighborhood_index};
pub use pass::thin_pass;
pub use thinning::{
    ThinConfig, ThinStats, count_foreground, skeletonize, thin, thin_in_place, thin_into,
    thin_with_stats,
};
