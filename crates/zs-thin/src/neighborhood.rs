//! Packed 3x3 neighborhood keys.
//!
//! Neighbor names and their bits:
//!
//! ```text
//!   p1 | p2 | p3        0x01 | 0x02  | 0x04
//!  ----+----+----      ------+-------+------
//!   p4 | p5 | p6        0x80 | 0x100 | 0x08
//!  ----+----+----      ------+-------+------
//!   p7 | p8 | p9        0x40 | 0x20  | 0x10
//! ```
//!
//! The low 8 bits are the lookup key. `p5` sits in bit 8 so that, one slide
//! later, it lands on `p4` with the same shift that moves `p2` onto `p1`.

use zs_core::{ImageView, Pixel};

pub const P1: u16 = 0x01;
pub const P2: u16 = 0x02;
pub const P3: u16 = 0x04;
pub const P6: u16 = 0x08;
pub const P9: u16 = 0x10;
pub const P8: u16 = 0x20;
pub const P7: u16 = 0x40;
pub const P4: u16 = 0x80;
pub const P5: u16 = 0x100;

/// Bits that shift right by one on a slide: `p2 -> p1`, `p3 -> p2`, `p5 -> p4`.
const SHIFT_RIGHT: u16 = P2 | P3 | P5;
/// Bits that shift left by one on a slide: `p9 -> p8`, `p8 -> p7`.
const SHIFT_LEFT: u16 = P8 | P9;

/// Sliding 3x3 window for a left-to-right scan of one row.
///
/// `p6` is dropped on a slide; the caller re-adds `p5` with
/// [`NeighborWindow::mark_center`] once the new center has been inspected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NeighborWindow {
    bits: u16,
}

impl NeighborWindow {
    /// Window positioned one column left of the first center, built from the
    /// two leftmost columns as `[column 0, column 1]` occupancy per row.
    pub fn begin(top: [bool; 2], mid: [bool; 2], bottom: [bool; 2]) -> Self {
        let mut bits = 0;
        if top[0] {
            bits |= P2;
        }
        if top[1] {
            bits |= P3;
        }
        if mid[0] {
            bits |= P5;
        }
        if mid[1] {
            bits |= P6;
        }
        if bottom[0] {
            bits |= P8;
        }
        if bottom[1] {
            bits |= P9;
        }
        Self { bits }
    }

    /// Moves the window one column right and reads the new right column.
    pub fn slide(&mut self, top_right: bool, mid_right: bool, bottom_right: bool) {
        let mut bits = ((self.bits & SHIFT_RIGHT) >> 1) | ((self.bits & SHIFT_LEFT) << 1);
        if top_right {
            bits |= P3;
        }
        if mid_right {
            bits |= P6;
        }
        if bottom_right {
            bits |= P9;
        }
        self.bits = bits;
    }

    /// Records that the current center is foreground.
    pub fn mark_center(&mut self) {
        self.bits |= P5;
    }

    pub fn key(&self) -> u8 {
        (self.bits & 0xff) as u8
    }

    pub fn bits(&self) -> u16 {
        self.bits
    }
}

/// Key of the neighborhood centered at `(x, y)`, computed from all eight
/// reads. Cells outside `img` count as background.
pub fn neighborhood_index<T: Pixel>(
    img: &ImageView<'_, T>,
    x: usize,
    y: usize,
    background: T,
) -> u8 {
    const OFFSETS: [(isize, isize, u16); 8] = [
        (-1, -1, P1),
        (0, -1, P2),
        (1, -1, P3),
        (1, 0, P6),
        (1, 1, P9),
        (0, 1, P8),
        (-1, 1, P7),
        (-1, 0, P4),
    ];

    let mut bits = 0u16;
    for (dx, dy, bit) in OFFSETS {
        let (Some(nx), Some(ny)) = (x.checked_add_signed(dx), y.checked_add_signed(dy)) else {
            continue;
        };
        if img.get(nx, ny).is_some_and(|&v| v != background) {
            bits |= bit;
        }
    }
    bits as u8
}
