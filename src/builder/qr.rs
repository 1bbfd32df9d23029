use std::ops::Deref;

use image::{GrayImage, Luma};

use crate::common::bit_utils::BitStream;
use crate::common::error::{QRError, QRResult};
use crate::common::iter::EncRegionIter;
use crate::common::mask::MaskPattern;
use crate::common::metadata::{
    format_info, Color, ECLevel, Metadata, Version, FORMAT_INFO_BIT_LEN, VERSION_INFO_BIT_LEN,
};

/// Cell of the symbol under construction. `Empty` marks a module no stage
/// has decided yet; every other variant records the stage that set it.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Module {
    Empty,
    Func(Color),
    Version(Color),
    Format(Color),
    Data(Color),
}

impl Deref for Module {
    type Target = Color;
    fn deref(&self) -> &Self::Target {
        match self {
            Module::Empty => &Color::Light,
            Module::Func(c) => c,
            Module::Version(c) => c,
            Module::Format(c) => c,
            Module::Data(c) => c,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QR {
    grid: Vec<Module>,
    w: usize,
    ver: Version,
    ecl: ECLevel,
    mask: Option<MaskPattern>,
}

// QR type for builder
//------------------------------------------------------------------------------

impl QR {
    pub(crate) fn new(ver: Version, ecl: ECLevel) -> Self {
        let w = ver.width();
        Self { grid: vec![Module::Empty; w * w], w, ver, ecl, mask: None }
    }

    /// Side length in modules.
    pub fn size(&self) -> usize {
        self.w
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn version(&self) -> Version {
        self.ver
    }

    pub fn ec_level(&self) -> ECLevel {
        self.ecl
    }

    pub fn mask(&self) -> Option<MaskPattern> {
        self.mask
    }

    pub fn metadata(&self) -> Metadata {
        Metadata::new(self.ver, self.ecl, self.mask)
    }

    pub fn count_dark_modules(&self) -> usize {
        self.grid.iter().filter(|&m| matches!(**m, Color::Dark)).count()
    }

    pub fn is_dark(&self, r: usize, c: usize) -> QRResult<bool> {
        if r >= self.w || c >= self.w {
            return Err(QRError::OutOfBounds);
        }
        Ok(*self.grid[r * self.w + c] == Color::Dark)
    }

    #[cfg(test)]
    pub fn to_debug_str(&self) -> String {
        let w = self.w as i16;
        let mut res = String::with_capacity((w * (w + 1)) as usize);
        res.push('\n');
        for i in 0..w {
            for j in 0..w {
                let c = match self.get(i, j) {
                    Module::Empty => '.',
                    Module::Func(Color::Dark) => 'f',
                    Module::Func(Color::Light) => 'F',
                    Module::Version(Color::Dark) => 'v',
                    Module::Version(Color::Light) => 'V',
                    Module::Format(Color::Dark) => 'm',
                    Module::Format(Color::Light) => 'M',
                    Module::Data(Color::Dark) => 'd',
                    Module::Data(Color::Light) => 'D',
                };
                res.push(c);
            }
            res.push('\n');
        }
        res
    }

    fn coord_to_index(&self, r: i16, c: i16) -> usize {
        let w = self.w as i16;
        debug_assert!(-w <= r && r < w, "row should be greater than or equal to w");
        debug_assert!(-w <= c && c < w, "column should be greater than or equal to w");

        let r = if r < 0 { r + w } else { r };
        let c = if c < 0 { c + w } else { c };
        (r * w + c) as _
    }

    pub fn get(&self, r: i16, c: i16) -> Module {
        self.grid[self.coord_to_index(r, c)]
    }

    pub fn get_mut(&mut self, r: i16, c: i16) -> &mut Module {
        let index = self.coord_to_index(r, c);
        &mut self.grid[index]
    }

    pub fn set(&mut self, r: i16, c: i16, module: Module) {
        *self.get_mut(r, c) = module;
    }

    fn set_if_empty(&mut self, r: i16, c: i16, module: Module) {
        let m = self.get_mut(r, c);
        if *m == Module::Empty {
            *m = module;
        }
    }
}


// Finder pattern
//------------------------------------------------------------------------------

impl QR {
    fn draw_finder_patterns(&mut self) {
        self.draw_finder_pattern_at(3, 3);
        self.draw_finder_pattern_at(3, -4);
        self.draw_finder_pattern_at(-4, 3);
    }

    // Separator ring is only drawn on the sides facing the symbol interior
    fn draw_finder_pattern_at(&mut self, r: i16, c: i16) {
        let (dr_top, dr_bottom) = if r > 0 { (-3, 4) } else { (-4, 3) };
        let (dc_left, dc_right) = if c > 0 { (-3, 4) } else { (-4, 3) };
        for i in dr_top..=dr_bottom {
            for j in dc_left..=dc_right {
                self.set(
                    r + i,
                    c + j,
                    match (i, j) {
                        (4 | -4, _) | (_, 4 | -4) => Module::Func(Color::Light),
                        (3 | -3, _) | (_, 3 | -3) => Module::Func(Color::Dark),
                        (2 | -2, _) | (_, 2 | -2) => Module::Func(Color::Light),
                        _ => Module::Func(Color::Dark),
                    },
                );
            }
        }
    }
}


// Alignment pattern
//------------------------------------------------------------------------------

impl QR {
    fn draw_alignment_patterns(&mut self) {
        let poses = self.ver.alignment_pattern();
        for &r in poses {
            for &c in poses {
                self.draw_alignment_pattern_at(r, c)
            }
        }
    }

    // Skipped when the center already belongs to a finder pattern
    fn draw_alignment_pattern_at(&mut self, r: i16, c: i16) {
        if self.get(r, c) != Module::Empty {
            return;
        }
        for i in -2..=2 {
            for j in -2..=2 {
                self.set(
                    r + i,
                    c + j,
                    match (i, j) {
                        (-2 | 2, _) | (_, -2 | 2) | (0, 0) => Module::Func(Color::Dark),
                        _ => Module::Func(Color::Light),
                    },
                )
            }
        }
    }
}


// Timing pattern
//------------------------------------------------------------------------------

impl QR {
    fn draw_timing_pattern(&mut self) {
        let w = self.w as i16;
        for i in 8..w - 8 {
            let m = Module::Func(Color::from(i & 1 == 0));
            self.set_if_empty(6, i, m);
            self.set_if_empty(i, 6, m);
        }
    }
}


// All function patterns
//------------------------------------------------------------------------------

impl QR {
    pub(crate) fn draw_all_function_patterns(&mut self) {
        self.draw_finder_patterns();
        self.draw_alignment_patterns();
        self.draw_timing_pattern();
    }
}


// Format & version info
//------------------------------------------------------------------------------

impl QR {
    /// Writes both copies of the 15 bit format info, bit `i` being
    /// `(info >> i) & 1`, followed by the fixed module above the bottom left
    /// finder.
    fn draw_format_info(&mut self, info: u32, fixed: Color) {
        let w = self.w as i16;
        for i in 0..FORMAT_INFO_BIT_LEN as i16 {
            let m = Module::Format(Color::from((info >> i) & 1 == 1));
            let r = match i {
                0..=5 => i,
                6..=7 => i + 1,
                _ => w - 15 + i,
            };
            self.set(r, 8, m);
            let c = match i {
                0..=7 => w - 1 - i,
                8 => 7,
                _ => 14 - i,
            };
            self.set(8, c, m);
        }
        self.set(w - 8, 8, Module::Format(fixed));
    }

    fn draw_version_info(&mut self, info: u32) {
        if *self.ver < 7 {
            return;
        }
        let w = self.w as i16;
        for i in 0..VERSION_INFO_BIT_LEN as i16 {
            let m = Module::Version(Color::from((info >> i) & 1 == 1));
            let (a, b) = (i / 3, w - 11 + i % 3);
            self.set(a, b, m);
            self.set(b, a, m);
        }
    }
}

#[cfg(test)]
mod qr_information_tests {
    use crate::builder::QR;
    use crate::common::mask::MaskPattern;
    use crate::common::metadata::{format_info, Color, ECLevel, Version};

    #[test]
    fn test_version_info_1() {
        let mut qr = QR::new(Version::new(1).unwrap(), ECLevel::L);
        qr.draw_version_info(0x3ffff);
        assert!(qr.to_debug_str().chars().all(|c| c == '.' || c == '\n'));
    }

    #[test]
    fn test_version_info_7() {
        let mut qr = QR::new(Version::new(7).unwrap(), ECLevel::L);
        qr.draw_version_info(qr.ver.info());
        assert_eq!(
            qr.to_debug_str(),
            "\n\
             ..................................VVv........\n\
             ..................................VvV........\n\
             ..................................VvV........\n\
             ..................................Vvv........\n\
             ..................................vvv........\n\
             ..................................VVV........\n\
             .............................................\n\
             .............................................\n\
             .............................................\n\
             .............................................\n\
             .............................................\n\
             .............................................\n\
             .............................................\n\
             .............................................\n\
             .............................................\n\
             .............................................\n\
             .............................................\n\
             .............................................\n\
             .............................................\n\
             .............................................\n\
             .............................................\n\
             .............................................\n\
             .............................................\n\
             .............................................\n\
             .............................................\n\
             .............................................\n\
             .............................................\n\
             .............................................\n\
             .............................................\n\
             .............................................\n\
             .............................................\n\
             .............................................\n\
             .............................................\n\
             .............................................\n\
             VVVVvV.......................................\n\
             VvvvvV.......................................\n\
             vVVvvV.......................................\n\
             .............................................\n\
             .............................................\n\
             .............................................\n\
             .............................................\n\
             .............................................\n\
             .............................................\n\
             .............................................\n\
             .............................................\n"
        );
    }

    #[test]
    fn test_format_area() {
        let mut qr = QR::new(Version::new(1).unwrap(), ECLevel::L);
        qr.draw_format_info((1 << 15) - 1, Color::Dark);
        assert_eq!(
            qr.to_debug_str(),
            "\n\
             ........m............\n\
             ........m............\n\
             ........m............\n\
             ........m............\n\
             ........m............\n\
             ........m............\n\
             .....................\n\
             ........m............\n\
             mmmmmm.mm....mmmmmmmm\n\
             .....................\n\
             .....................\n\
             .....................\n\
             .....................\n\
             ........m............\n\
             ........m............\n\
             ........m............\n\
             ........m............\n\
             ........m............\n\
             ........m............\n\
             ........m............\n\
             ........m............\n"
        );
    }

    #[test]
    fn test_format_info_copies_agree() {
        let mut qr = QR::new(Version::new(2).unwrap(), ECLevel::Q);
        let info = format_info(ECLevel::Q, MaskPattern::new(3).unwrap());
        qr.draw_format_info(info, Color::Dark);
        let w = qr.w as i16;

        let vert = [0, 1, 2, 3, 4, 5, 7, 8, w - 7, w - 6, w - 5, w - 4, w - 3, w - 2, w - 1];
        let hor = [w - 1, w - 2, w - 3, w - 4, w - 5, w - 6, w - 7, w - 8, 7, 5, 4, 3, 2, 1, 0];
        let read = |coords: &mut dyn Iterator<Item = (i16, i16)>| {
            coords
                .enumerate()
                .fold(0u32, |acc, (i, (r, c))| acc | ((*qr.get(r, c) == Color::Dark) as u32) << i)
        };
        assert_eq!(read(&mut vert.iter().map(|&r| (r, 8))), info);
        assert_eq!(read(&mut hor.iter().map(|&c| (8, c))), info);
        assert_eq!(*qr.get(w - 8, 8), Color::Dark);
    }

    #[test]
    fn test_all_function_patterns_and_qr_info() {
        let mut qr = QR::new(Version::new(7).unwrap(), ECLevel::L);
        qr.draw_all_function_patterns();
        qr.draw_version_info(qr.ver.info());
        qr.draw_format_info((1 << 15) - 1, Color::Dark);
        assert_eq!(
            qr.to_debug_str(),
            "\n\
             fffffffFm.........................VVvFfffffff\n\
             fFFFFFfFm.........................VvVFfFFFFFf\n\
             fFfffFfFm.........................VvVFfFfffFf\n\
             fFfffFfFm.........................VvvFfFfffFf\n\
             fFfffFfFm...........fffff.........vvvFfFfffFf\n\
             fFFFFFfFm...........fFFFf.........VVVFfFFFFFf\n\
             fffffffFfFfFfFfFfFfFfFfFfFfFfFfFfFfFfFfffffff\n\
             FFFFFFFFm...........fFFFf............FFFFFFFF\n\
             mmmmmmfmm...........fffff............mmmmmmmm\n\
             ......F......................................\n\
             ......f......................................\n\
             ......F......................................\n\
             ......f......................................\n\
             ......F......................................\n\
             ......f......................................\n\
             ......F......................................\n\
             ......f......................................\n\
             ......F......................................\n\
             ......f......................................\n\
             ......F......................................\n\
             ....fffff...........fffff...........fffff....\n\
             ....fFFFf...........fFFFf...........fFFFf....\n\
             ....fFfFf...........fFfFf...........fFfFf....\n\
             ....fFFFf...........fFFFf...........fFFFf....\n\
             ....fffff...........fffff...........fffff....\n\
             ......F......................................\n\
             ......f......................................\n\
             ......F......................................\n\
             ......f......................................\n\
             ......F......................................\n\
             ......f......................................\n\
             ......F......................................\n\
             ......f......................................\n\
             ......F......................................\n\
             VVVVvVf......................................\n\
             VvvvvVF......................................\n\
             vVVvvVf.............fffff...........fffff....\n\
             FFFFFFFFm...........fFFFf...........fFFFf....\n\
             fffffffFm...........fFfFf...........fFfFf....\n\
             fFFFFFfFm...........fFFFf...........fFFFf....\n\
             fFfffFfFm...........fffff...........fffff....\n\
             fFfffFfFm....................................\n\
             fFfffFfFm....................................\n\
             fFFFFFfFm....................................\n\
             fffffffFm....................................\n"
        );
    }
}

// Encoding region
//------------------------------------------------------------------------------

impl QR {
    /// Unmasked symbol: function patterns, light format and version areas
    /// and the codeword stream in zigzag order.
    pub(crate) fn with_payload(ver: Version, ecl: ECLevel, codewords: &[u8]) -> Self {
        let mut qr = Self::new(ver, ecl);
        qr.draw_all_function_patterns();
        qr.draw_format_info(0, Color::Light);
        qr.draw_version_info(0);
        qr.draw_payload(BitStream::from(codewords));

        debug_assert!(!qr.grid.contains(&Module::Empty), "Empty module found after payload");
        qr
    }

    // Modules left over once the stream runs out stay light
    fn draw_payload(&mut self, mut payload: BitStream) {
        for (r, c) in EncRegionIter::new(self.ver) {
            if self.get(r, c) == Module::Empty {
                let bit = payload.take_bit().unwrap_or(false);
                self.set(r, c, Module::Data(Color::from(bit)));
            }
        }
    }

    /// Flips data modules selected by `pattern` and writes format and version
    /// info. Trial symbols keep every info module light.
    pub(crate) fn apply_mask(&mut self, pattern: MaskPattern, trial: bool) {
        let mask_fn = pattern.mask_function();
        let w = self.w as i16;
        for r in 0..w {
            for c in 0..w {
                if let Module::Data(clr) = self.get(r, c) {
                    if mask_fn(r as i32, c as i32) {
                        self.set(r, c, Module::Data(!clr));
                    }
                }
            }
        }

        if trial {
            self.draw_format_info(0, Color::Light);
            self.draw_version_info(0);
        } else {
            self.draw_format_info(format_info(self.ecl, pattern), Color::Dark);
            self.draw_version_info(self.ver.info());
            self.mask = Some(pattern);
        }
    }
}


// Render
//------------------------------------------------------------------------------

impl QR {
    pub fn to_image(&self, module_sz: u32) -> GrayImage {
        let qz_sz = QUIET_ZONE_WIDTH as u32 * module_sz;
        let qr_sz = self.w as u32 * module_sz;
        let total_sz = qz_sz + qr_sz + qz_sz;

        GrayImage::from_fn(total_sz, total_sz, |x, y| {
            if x < qz_sz || x >= qz_sz + qr_sz || y < qz_sz || y >= qz_sz + qr_sz {
                return Luma([255]);
            }
            let r = ((y - qz_sz) / module_sz) as i16;
            let c = ((x - qz_sz) / module_sz) as i16;
            Luma([self.get(r, c).select(0, 255)])
        })
    }

    pub fn to_str(&self, module_sz: usize) -> String {
        let qz_sz = QUIET_ZONE_WIDTH * module_sz;
        let qr_sz = self.w * module_sz;
        let total_sz = qz_sz + qr_sz + qz_sz;

        let mut canvas = String::with_capacity(total_sz * (total_sz + 1) * 3);
        for i in 0..total_sz {
            for j in 0..total_sz {
                if i < qz_sz || i >= qz_sz + qr_sz || j < qz_sz || j >= qz_sz + qr_sz {
                    canvas.push('█');
                    continue;
                }
                let r = ((i - qz_sz) / module_sz) as i16;
                let c = ((j - qz_sz) / module_sz) as i16;
                canvas.push(self.get(r, c).select(' ', '█'));
            }
            canvas.push('\n');
        }

        canvas
    }
}


// Global constants
//------------------------------------------------------------------------------

const QUIET_ZONE_WIDTH: usize = 4;
