use std::ops::Index;

use super::galois::{exp, log, mul};
use crate::common::error::{QRError, QRResult};

// Polynomial over GF(256), highest degree first
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Polynomial {
    coeffs: Vec<u8>,
}

impl Polynomial {
    /// Builds `coeffs * x^shift` with leading zero coefficients stripped.
    pub fn new(coeffs: &[u8], shift: usize) -> Self {
        let offset = coeffs.iter().position(|&c| c != 0).unwrap_or(coeffs.len());
        let mut res = Vec::with_capacity(coeffs.len() - offset + shift);
        res.extend_from_slice(&coeffs[offset..]);
        res.resize(coeffs.len() - offset + shift, 0);
        Self { coeffs: res }
    }

    /// Product of `(x - α^i)` for `i` in `0..ec_len`.
    pub fn generator(ec_len: usize) -> Self {
        (0..ec_len).fold(Self::new(&[1], 0), |acc, i| {
            acc.multiply(&Self::new(&[1, exp(i as i32)], 0))
        })
    }

    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    pub fn coeffs(&self) -> &[u8] {
        &self.coeffs
    }

    pub fn multiply(&self, other: &Self) -> Self {
        if self.is_empty() || other.is_empty() {
            return Self { coeffs: Vec::new() };
        }
        let mut res = vec![0u8; self.len() + other.len() - 1];
        for (i, &a) in self.coeffs.iter().enumerate() {
            for (j, &b) in other.coeffs.iter().enumerate() {
                res[i + j] ^= mul(a, b);
            }
        }
        Self::new(&res, 0)
    }

    /// Remainder of long division by `divisor`. A dividend shorter than the
    /// divisor is returned unchanged.
    pub fn rem(&self, divisor: &Self) -> QRResult<Self> {
        if divisor.is_empty() {
            return Err(QRError::LogOfZero);
        }
        let div_lead = log(divisor[0])? as i32;

        let mut num = self.coeffs.clone();
        while num.len() >= divisor.len() {
            // Only an all zero dividend carries leading zeros
            if num[0] != 0 {
                let ratio = log(num[0])? as i32 - div_lead;
                for (n, &d) in num.iter_mut().zip(divisor.coeffs.iter()) {
                    if d != 0 {
                        *n ^= exp(log(d)? as i32 + ratio);
                    }
                }
            }
            let offset = num.iter().position(|&c| c != 0).unwrap_or(num.len());
            num.drain(..offset);
        }
        Ok(Self { coeffs: num })
    }
}

impl Index<usize> for Polynomial {
    type Output = u8;
    fn index(&self, index: usize) -> &Self::Output {
        &self.coeffs[index]
    }
}
