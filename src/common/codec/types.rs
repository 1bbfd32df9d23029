use std::borrow::Cow;

use encoding_rs::Encoding;

use crate::common::bit_utils::BitStream;
use crate::common::error::{QRError, QRResult};
use crate::common::metadata::Version;

// Mode
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Mode {
    Byte = 0b0100,
    Terminator = 0b0000,
}

impl Mode {
    pub fn indicator(self) -> u8 {
        self as u8
    }

    pub fn encoded_len(self, len: usize) -> usize {
        match self {
            Self::Byte => len * 8,
            Self::Terminator => 0,
        }
    }
}

// Segment
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Segment<'a> {
    mode: Mode,
    data: Cow<'a, [u8]>,
}

impl<'a> Segment<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { mode: Mode::Byte, data: Cow::Borrowed(data) }
    }

    /// Transcodes `text` into the byte representation of `encoding`.
    pub fn from_text(text: &'a str, encoding: &'static Encoding) -> QRResult<Self> {
        let (data, _, had_errors) = encoding.encode(text);
        if had_errors {
            return Err(QRError::InvalidChar);
        }
        Ok(Self { mode: Mode::Byte, data })
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Size of mode indicator, character count and payload for `ver`.
    pub fn bit_len(&self, ver: Version) -> usize {
        ver.mode_bits() + ver.char_cnt_bits(self.mode) + self.mode.encoded_len(self.len())
    }

    pub fn push_to(&self, bs: &mut BitStream, ver: Version) {
        let len_bits = ver.char_cnt_bits(self.mode);
        debug_assert!(
            self.len() < 1 << len_bits,
            "Segment length {} overflows {len_bits} bit character count",
            self.len()
        );

        bs.push_bits(self.mode.indicator(), ver.mode_bits());
        bs.push_bits(self.len(), len_bits);
        bs.extend(&self.data);
    }
}

impl<'a> From<&'a [u8]> for Segment<'a> {
    fn from(data: &'a [u8]) -> Self {
        Self::new(data)
    }
}

impl<'a> From<&'a str> for Segment<'a> {
    fn from(text: &'a str) -> Self {
        Self::new(text.as_bytes())
    }
}
