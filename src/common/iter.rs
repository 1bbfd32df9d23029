use super::metadata::Version;

// Iterator for placing data in encoding region of QR
//------------------------------------------------------------------------------

/// Zigzag walk over every module, starting at the bottom right corner. Column
/// pairs are swept right to left, alternating upward and downward, with the
/// vertical timing column skipped. Within a pair the right module comes first.
#[derive(Debug, Clone)]
pub struct EncRegionIter {
    r: i16,
    c: i16,
    // 0 for the right module of the pair, 1 for the left
    offset: i16,
    step: i16,
    width: i16,
}

impl EncRegionIter {
    pub const fn new(version: Version) -> Self {
        let w = version.width() as i16;
        Self { r: w - 1, c: w - 1, offset: 0, step: -1, width: w }
    }
}

impl Iterator for EncRegionIter {
    type Item = (i16, i16);

    fn next(&mut self) -> Option<Self::Item> {
        if self.c < 1 {
            return None;
        }

        let res = (self.r, self.c - self.offset);
        if self.offset == 0 {
            self.offset = 1;
            return Some(res);
        }

        self.offset = 0;
        let next_r = self.r + self.step;
        if (0..self.width).contains(&next_r) {
            self.r = next_r;
        } else {
            self.step = -self.step;
            self.c -= 2;
            if self.c == VERT_TIMING_COL {
                self.c -= 1;
            }
        }
        Some(res)
    }
}

const VERT_TIMING_COL: i16 = 6;
