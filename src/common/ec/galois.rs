use crate::common::error::{QRError, QRResult};

// GF(256) arithmetic over x^8 + x^4 + x^3 + x^2 + 1
//------------------------------------------------------------------------------

// Order of the multiplicative group
const GROUP_ORDER: i32 = 255;

const EXP: [u8; 256] = build_exp_table();

pub static EXP_TABLE: [u8; 256] = EXP;

pub static LOG_TABLE: [u8; 256] = build_log_table(&EXP);

const fn build_exp_table() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 8 {
        table[i] = 1 << i;
        i += 1;
    }
    while i < 256 {
        table[i] = table[i - 4] ^ table[i - 5] ^ table[i - 6] ^ table[i - 8];
        i += 1;
    }
    table
}

const fn build_log_table(exp: &[u8; 256]) -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 255 {
        table[exp[i] as usize] = i as u8;
        i += 1;
    }
    table
}

/// Field element for exponent `n`. Negative and oversized exponents wrap
/// modulo the group order.
pub fn exp(n: i32) -> u8 {
    EXP_TABLE[n.rem_euclid(GROUP_ORDER) as usize]
}

/// Discrete logarithm of a nonzero element.
pub fn log(x: u8) -> QRResult<u8> {
    if x == 0 {
        return Err(QRError::LogOfZero);
    }
    Ok(LOG_TABLE[x as usize])
}

pub fn mul(a: u8, b: u8) -> u8 {
    if a == 0 || b == 0 {
        return 0;
    }
    exp(LOG_TABLE[a as usize] as i32 + LOG_TABLE[b as usize] as i32)
}
