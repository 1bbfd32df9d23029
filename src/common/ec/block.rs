use super::poly::Polynomial;
use crate::common::error::QRResult;

// Reed-Solomon block
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Block {
    // Data codewords followed by ecc
    data: Vec<u8>,
    // Data length
    dlen: usize,
}

impl Block {
    /// Appends `ec_len` error correction codewords, computed as the remainder
    /// of `data * x^ec_len` divided by `gen`.
    pub fn new(raw: &[u8], ec_len: usize, gen: &Polynomial) -> QRResult<Self> {
        debug_assert_eq!(gen.len(), ec_len + 1, "Generator degree differs from ecc length");

        let dlen = raw.len();
        let rem = Polynomial::new(raw, ec_len).rem(gen)?;

        // Remainder drops leading zeros, so it is right aligned into the ecc region
        let mut data = Vec::with_capacity(dlen + ec_len);
        data.extend_from_slice(raw);
        data.resize(dlen + ec_len - rem.len(), 0);
        data.extend_from_slice(rem.coeffs());
        Ok(Self { data, dlen })
    }

    pub fn ec_len(&self) -> usize {
        self.data.len() - self.dlen
    }

    pub fn data_len(&self) -> usize {
        self.dlen
    }

    pub fn data(&self) -> &[u8] {
        &self.data[..self.dlen]
    }

    pub fn ecc(&self) -> &[u8] {
        &self.data[self.dlen..]
    }
}
