use std::ops::Deref;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::trace;

use super::error::{QRError, QRResult};
use super::metadata::Color;
use crate::builder::QR;

#[derive(Debug, PartialEq, Eq, Copy, Clone, PartialOrd, Ord)]
pub struct MaskPattern(u8);

impl MaskPattern {
    pub fn new(pattern: u8) -> QRResult<Self> {
        if pattern >= 8 {
            return Err(QRError::InvalidMaskingPattern);
        }
        Ok(Self(pattern))
    }

    pub fn all() -> impl Iterator<Item = Self> {
        (0..8).map(Self)
    }
}

impl Deref for MaskPattern {
    type Target = u8;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

mod mask_functions {
    pub fn checkerboard(r: i32, c: i32) -> bool {
        (r + c) & 1 == 0
    }

    pub fn horizontal_lines(r: i32, _: i32) -> bool {
        r & 1 == 0
    }

    pub fn vertical_lines(_: i32, c: i32) -> bool {
        c % 3 == 0
    }

    pub fn diagonal_lines(r: i32, c: i32) -> bool {
        (r + c) % 3 == 0
    }

    pub fn large_checkerboard(r: i32, c: i32) -> bool {
        ((r >> 1) + (c / 3)) & 1 == 0
    }

    pub fn fields(r: i32, c: i32) -> bool {
        ((r * c) & 1) + ((r * c) % 3) == 0
    }

    pub fn diamonds(r: i32, c: i32) -> bool {
        (((r * c) & 1) + ((r * c) % 3)) & 1 == 0
    }

    pub fn meadow(r: i32, c: i32) -> bool {
        (((r + c) & 1) + ((r * c) % 3)) & 1 == 0
    }
}

impl MaskPattern {
    pub fn mask_function(self) -> fn(i32, i32) -> bool {
        match *self {
            0b000 => mask_functions::checkerboard,
            0b001 => mask_functions::horizontal_lines,
            0b010 => mask_functions::vertical_lines,
            0b011 => mask_functions::diagonal_lines,
            0b100 => mask_functions::large_checkerboard,
            0b101 => mask_functions::fields,
            0b110 => mask_functions::diamonds,
            0b111 => mask_functions::meadow,
            _ => unreachable!("Mask pattern is validated on construction"),
        }
    }
}

// Mask selection
//------------------------------------------------------------------------------

/// Scores a trial symbol per mask pattern and returns the pattern with the
/// lowest penalty. Ties go to the lower pattern index.
pub fn select_best_mask<F>(trial: F) -> MaskPattern
where
    F: Fn(MaskPattern) -> QR + Sync,
{
    let score = |m: MaskPattern| {
        let pen = compute_total_penalty(&trial(m));
        trace!(mask = *m, penalty = pen, "Scored mask trial");
        (pen, m)
    };

    #[cfg(feature = "parallel")]
    let best = MaskPattern::all().collect::<Vec<_>>().into_par_iter().map(score).min();

    #[cfg(not(feature = "parallel"))]
    let best = MaskPattern::all().map(score).min();

    best.map_or(MaskPattern(0), |(_, m)| m)
}

pub fn compute_total_penalty(qr: &QR) -> u32 {
    let adj_pen = compute_adjacent_penalty(qr);
    let blk_pen = compute_block_penalty(qr);
    let fp_pen_h = compute_finder_pattern_penalty(qr, true);
    let fp_pen_v = compute_finder_pattern_penalty(qr, false);
    let bal_pen = compute_balance_penalty(qr);
    adj_pen + blk_pen + fp_pen_h + fp_pen_v + bal_pen
}

// Counts same colored modules in the 8-neighbourhood of every module
fn compute_adjacent_penalty(qr: &QR) -> u32 {
    let mut pen = 0;
    let w = qr.width() as i16;
    for r in 0..w {
        for c in 0..w {
            let clr = *qr.get(r, c);
            let mut same = 0;
            for dr in -1..=1 {
                for dc in -1..=1 {
                    let (nr, nc) = (r + dr, c + dc);
                    if (dr == 0 && dc == 0) || nr < 0 || nr >= w || nc < 0 || nc >= w {
                        continue;
                    }
                    if *qr.get(nr, nc) == clr {
                        same += 1;
                    }
                }
            }
            if same > 5 {
                pen += 3 + same - 5;
            }
        }
    }
    pen
}

fn compute_block_penalty(qr: &QR) -> u32 {
    let mut pen = 0;
    let w = qr.width() as i16;
    for r in 0..w - 1 {
        for c in 0..w - 1 {
            let clr = *qr.get(r, c);
            if clr == *qr.get(r + 1, c) && clr == *qr.get(r, c + 1) && clr == *qr.get(r + 1, c + 1)
            {
                pen += 3;
            }
        }
    }
    pen
}

fn compute_finder_pattern_penalty(qr: &QR, is_hor: bool) -> u32 {
    static PATTERN: [Color; 7] = [
        Color::Dark,
        Color::Light,
        Color::Dark,
        Color::Dark,
        Color::Dark,
        Color::Light,
        Color::Dark,
    ];

    let mut pen = 0;
    let w = qr.width() as i16;
    for i in 0..w {
        let get = |j: i16| if is_hor { *qr.get(i, j) } else { *qr.get(j, i) };
        for j in 0..w - 6 {
            if (j..j + 7).map(get).eq(PATTERN.iter().copied()) {
                pen += 40;
            }
        }
    }
    pen
}

// Ratio is taken over light modules
fn compute_balance_penalty(qr: &QR) -> u32 {
    let w = qr.width();
    let tot = w * w;
    let light_cnt = tot - qr.count_dark_modules();
    let ratio = (light_cnt * 100 / tot) as i64;
    ((ratio - 50).unsigned_abs() / 5 * 10) as u32
}
