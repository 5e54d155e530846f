//! Removal decisions for every 3x3 neighborhood.
//!
//! There is one 256-entry table per stage, indexed by the 8 neighbor bits of
//! [`crate::neighborhood`] (the center bit is not part of the key). An entry
//! of `1` deletes the center on the first pass of a pair, `2` on the second
//! pass, and `3` on either. First passes peel right and bottom edges, second
//! passes peel left and top edges.
//!
//! The entries follow ImageJ's `BinaryProcessor` skeletonize tables and are
//! tied to the bit layout in `neighborhood`: moving any neighbor bit
//! invalidates them.

/// Thinning stage; each stage runs pass pairs until a pair removes nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Stage 0: peel object edges.
    EdgePeel,
    /// Stage 1: remove pixels stage 0 leaves stuck on otherwise thin lines.
    StuckPixels,
}

impl Stage {
    pub const ALL: [Stage; 2] = [Stage::EdgePeel, Stage::StuckPixels];

    pub fn index(self) -> usize {
        match self {
            Self::EdgePeel => 0,
            Self::StuckPixels => 1,
        }
    }
}

pub const REMOVE_FIRST_PASS: u8 = 0x01;
pub const REMOVE_SECOND_PASS: u8 = 0x02;

#[rustfmt::skip]
const REMOVE_FLAGS: [[u8; 256]; 2] = [
    [
        0,0,0,0,0,0,1,3,0,0,3,1,1,0,1,3,0,0,0,0,0,0,0,0,0,0,2,0,3,0,3,3,
        0,0,0,0,0,0,0,0,3,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,2,0,0,0,3,0,2,2,
        0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
        2,0,0,0,0,0,0,0,2,0,0,0,2,0,0,0,3,0,0,0,0,0,0,0,3,0,0,0,3,0,2,0,
        0,0,3,1,0,0,1,3,0,0,0,0,0,0,0,1,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,1,
        3,1,0,0,0,0,0,0,0,0,0,0,0,0,0,0,2,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
        2,3,1,3,0,0,1,3,0,0,0,0,0,0,0,1,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
        2,3,0,1,0,0,0,1,0,0,0,0,0,0,0,0,3,3,0,1,0,0,0,0,2,2,0,0,2,0,0,0,
    ],
    [
        0,0,0,1,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,2,0,2,2,0,0,0,0,
        0,0,0,0,0,0,0,0,0,0,0,0,0,0,2,0,2,0,0,0,0,0,0,0,0,0,2,0,0,0,0,0,
        0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
        0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
        0,1,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,2,0,0,0,0,0,
        0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,2,0,0,0,0,0,0,0,
        0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
        0,0,1,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    ],
];

pub fn removal_flags(stage: Stage, key: u8) -> u8 {
    REMOVE_FLAGS[stage.index()][key as usize]
}

/// Flag bit tested on a given 0-origin pass number.
pub fn pass_mask(pass: usize) -> u8 {
    if pass & 1 == 0 {
        REMOVE_FIRST_PASS
    } else {
        REMOVE_SECOND_PASS
    }
}

pub fn removes(stage: Stage, key: u8, pass: usize) -> bool {
    removal_flags(stage, key) & pass_mask(pass) != 0
}
