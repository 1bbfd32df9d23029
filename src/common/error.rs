use std::fmt::{Debug, Display, Error, Formatter};

// Error
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum QRError {
    // Caller input
    CapacityExceeded,
    InvalidVersion,
    InvalidMaskingPattern,
    InvalidChar,

    // Internal invariants
    LogOfZero,
    EncodingOverflow,

    // Symbol queries
    OutOfBounds,
}

impl Display for QRError {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        let msg = match *self {
            Self::CapacityExceeded => "Data exceeds symbol capacity",
            Self::InvalidVersion => "Invalid version",
            Self::InvalidMaskingPattern => "Invalid masking pattern",
            Self::InvalidChar => "Character not representable in the requested encoding",

            Self::LogOfZero => "Logarithm of zero is undefined in GF(256)",
            Self::EncodingOverflow => "Encoded data overflows the data codewords",

            Self::OutOfBounds => "Module coordinates out of bounds",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for QRError {}

pub type QRResult<T> = Result<T, QRError>;
