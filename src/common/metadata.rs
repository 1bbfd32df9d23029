use std::fmt::{Display, Error, Formatter};
use std::ops::{Deref, Not};

use super::codec::Mode;
use super::ec::block_groups;
use super::error::{QRError, QRResult};
use super::mask::MaskPattern;

// Metadata
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct Metadata {
    pub version: Version,
    pub ec_level: ECLevel,
    pub mask: Option<MaskPattern>,
}

impl Metadata {
    pub fn new(version: Version, ec_level: ECLevel, mask: Option<MaskPattern>) -> Self {
        Self { version, ec_level, mask }
    }
}

impl Display for Metadata {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "{{ Version: {}, Ec level: {:?}, Mask: ", *self.version, self.ec_level)?;
        match self.mask {
            Some(m) => write!(f, "{} }}", *m),
            None => write!(f, "None }}"),
        }
    }
}

// Version
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone, PartialOrd, Ord)]
pub struct Version(usize);

impl Version {
    pub const MIN: Self = Self(1);
    pub const MAX: Self = Self(40);

    pub fn new(version: usize) -> QRResult<Self> {
        if !(*Self::MIN..=*Self::MAX).contains(&version) {
            return Err(QRError::InvalidVersion);
        }
        Ok(Self(version))
    }

    pub fn iter() -> impl Iterator<Item = Self> {
        (*Self::MIN..=*Self::MAX).map(Self)
    }

    pub const fn width(self) -> usize {
        self.0 * 4 + 17
    }

    pub fn alignment_pattern(self) -> &'static [i16] {
        ALIGNMENT_PATTERN_POSITIONS[self.0 - 1]
    }

    pub fn total_codewords(self) -> usize {
        block_groups(self.0, ECLevel::L).map_or(0, |g| g.iter().map(|(n, t, _)| n * t).sum())
    }

    pub fn data_codewords(self, ecl: ECLevel) -> usize {
        block_groups(self.0, ecl).map_or(0, |g| g.iter().map(|(n, _, d)| n * d).sum())
    }

    pub fn data_bit_capacity(self, ecl: ECLevel) -> usize {
        self.data_codewords(ecl) << 3
    }

    pub fn char_cnt_bits(self, mode: Mode) -> usize {
        match mode {
            Mode::Byte => match self.0 {
                1..=9 => 8,
                _ => 16,
            },
            Mode::Terminator => 0,
        }
    }

    pub fn mode_bits(self) -> usize {
        4
    }

    /// Version number protected by the (18, 6) BCH code.
    pub fn info(self) -> u32 {
        let data = (self.0 as u32) << 12;
        data | bch_remainder(data, VERSION_INFO_GENERATOR)
    }
}

impl Deref for Version {
    type Target = usize;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

// Error correction level
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone, PartialOrd, Ord)]
pub enum ECLevel {
    L = 0,
    M = 1,
    Q = 2,
    H = 3,
}

impl ECLevel {
    /// Two bit field embedded in format info.
    pub fn format_bits(self) -> u32 {
        match self {
            Self::L => 0b01,
            Self::M => 0b00,
            Self::Q => 0b11,
            Self::H => 0b10,
        }
    }

    pub(crate) fn table_index(self) -> usize {
        self as usize
    }
}

// Color
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Color {
    Dark,
    Light,
}

impl Color {
    pub fn select<T>(&self, dark: T, light: T) -> T {
        match self {
            Self::Dark => dark,
            Self::Light => light,
        }
    }
}

impl From<bool> for Color {
    fn from(dark: bool) -> Self {
        if dark {
            Self::Dark
        } else {
            Self::Light
        }
    }
}

impl Not for Color {
    type Output = Self;
    fn not(self) -> Self::Output {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

// Format & version info
//------------------------------------------------------------------------------

/// Level and mask protected by the (15, 5) BCH code and XORed with the
/// format mask.
pub fn format_info(ecl: ECLevel, mask: MaskPattern) -> u32 {
    let data = ((ecl.format_bits() << 3) | *mask as u32) << 10;
    (data | bch_remainder(data, FORMAT_INFO_GENERATOR)) ^ FORMAT_INFO_MASK
}

pub fn version_info(ver: Version) -> u32 {
    ver.info()
}

fn bch_digit(data: u32) -> u32 {
    u32::BITS - data.leading_zeros()
}

fn bch_remainder(data: u32, gen: u32) -> u32 {
    let gen_digit = bch_digit(gen);
    let mut rem = data;
    while bch_digit(rem) >= gen_digit {
        rem ^= gen << (bch_digit(rem) - gen_digit);
    }
    rem
}


// Global constants
//------------------------------------------------------------------------------

pub const FORMAT_INFO_BIT_LEN: usize = 15;

pub const VERSION_INFO_BIT_LEN: usize = 18;

// x^10 + x^8 + x^5 + x^4 + x^2 + x + 1
const FORMAT_INFO_GENERATOR: u32 = 0b101_0011_0111;

// x^12 + x^11 + x^10 + x^9 + x^8 + x^5 + x^2 + 1
const VERSION_INFO_GENERATOR: u32 = 0b1_1111_0010_0101;

const FORMAT_INFO_MASK: u32 = 0b101_0100_0001_0010;

static ALIGNMENT_PATTERN_POSITIONS: [&[i16]; 40] = [
    &[],
    &[6, 18],
    &[6, 22],
    &[6, 26],
    &[6, 30],
    &[6, 34],
    &[6, 22, 38],
    &[6, 24, 42],
    &[6, 26, 46],
    &[6, 28, 50],
    &[6, 30, 54],
    &[6, 32, 58],
    &[6, 34, 62],
    &[6, 26, 46, 66],
    &[6, 26, 48, 70],
    &[6, 26, 50, 74],
    &[6, 30, 54, 78],
    &[6, 30, 56, 82],
    &[6, 30, 58, 86],
    &[6, 34, 62, 90],
    &[6, 28, 50, 72, 94],
    &[6, 26, 50, 74, 98],
    &[6, 30, 54, 78, 102],
    &[6, 28, 54, 80, 106],
    &[6, 32, 58, 84, 110],
    &[6, 30, 58, 86, 114],
    &[6, 34, 62, 90, 118],
    &[6, 26, 50, 74, 98, 122],
    &[6, 30, 54, 78, 102, 126],
    &[6, 26, 52, 78, 104, 130],
    &[6, 30, 56, 82, 108, 134],
    &[6, 34, 60, 86, 112, 138],
    &[6, 30, 58, 86, 114, 142],
    &[6, 34, 62, 90, 118, 146],
    &[6, 30, 54, 78, 102, 126, 150],
    &[6, 24, 50, 76, 102, 128, 154],
    &[6, 28, 54, 80, 106, 132, 158],
    &[6, 32, 58, 84, 110, 136, 162],
    &[6, 26, 54, 82, 110, 138, 166],
    &[6, 30, 58, 86, 114, 142, 170],
];
