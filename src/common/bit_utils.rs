use std::mem;

use num_traits::PrimInt;

// Bit stream
//------------------------------------------------------------------------------

/// Append-only bit sequence, most significant bit first within each byte.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitStream {
    data: Vec<u8>,
    // Bit length
    len: usize,
    // Pointer to take bits
    cursor: usize,
}

impl BitStream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(bit_capacity: usize) -> Self {
        Self { data: Vec::with_capacity((bit_capacity + 7) >> 3), len: 0, cursor: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    pub fn get(&self, index: usize) -> Option<bool> {
        if index >= self.len {
            return None;
        }
        Some((self.data[index >> 3] << (index & 7)) & 0b10000000 != 0)
    }
}

impl From<&[u8]> for BitStream {
    fn from(inp: &[u8]) -> Self {
        Self { data: inp.to_vec(), len: inp.len() << 3, cursor: 0 }
    }
}

// Push bits for bit stream
//------------------------------------------------------------------------------

impl BitStream {
    /// Appends the low `size` bits of `bits`, most significant first.
    pub fn push_bits<T>(&mut self, bits: T, size: usize)
    where
        T: PrimInt,
    {
        let max_bits = mem::size_of::<T>() * 8;
        debug_assert!(size <= max_bits, "Bit count {size} exceeds width of type {max_bits}");

        for i in (0..size).rev() {
            self.push((bits >> i) & T::one() == T::one());
        }
    }

    pub fn push(&mut self, bit: bool) {
        let pos = self.len >> 3;
        if pos == self.data.len() {
            self.data.push(0);
        }
        if bit {
            self.data[pos] |= 0b10000000 >> (self.len & 7);
        }
        self.len += 1;
    }

    pub fn extend(&mut self, arr: &[u8]) {
        if self.len & 7 == 0 {
            self.data.extend_from_slice(arr);
            self.len += arr.len() << 3;
        } else {
            arr.iter().for_each(|&b| self.push_bits(b, 8));
        }
    }
}


// Take bits for bit stream
//------------------------------------------------------------------------------

impl BitStream {
    pub fn take_bit(&mut self) -> Option<bool> {
        let bit = self.get(self.cursor)?;
        self.cursor += 1;
        Some(bit)
    }
}

impl Iterator for BitStream {
    type Item = bool;
    fn next(&mut self) -> Option<Self::Item> {
        self.take_bit()
    }
}
