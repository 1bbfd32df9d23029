mod block;
mod galois;
mod poly;
mod rs_blocks;

pub use block::*;
pub use poly::*;
pub(crate) use rs_blocks::block_groups;
pub use rs_blocks::{rs_blocks, RSBlockSpec};

use tracing::debug;

use super::bit_utils::BitStream;
use super::codec::Mode;
use super::error::{QRError, QRResult};
use super::metadata::{ECLevel, Version};

// Error correction encoder
//------------------------------------------------------------------------------

const PAD_BYTES: [u8; 2] = [0b1110_1100, 0b0001_0001];

/// Completes the data bit stream with terminator and padding, splits it into
/// Reed-Solomon blocks and returns the interleaved codeword sequence of length
/// `ver.total_codewords()`.
pub fn encode_codewords(mut bs: BitStream, ver: Version, ecl: ECLevel) -> QRResult<Vec<u8>> {
    let bcap = ver.data_bit_capacity(ecl);
    if bs.len() > bcap {
        return Err(QRError::EncodingOverflow);
    }

    if bs.len() + 4 <= bcap {
        bs.push_bits(Mode::Terminator.indicator(), 4);
    }
    let rem = bs.len() & 7;
    if rem != 0 {
        bs.push_bits(0u8, 8 - rem);
    }

    let data_len = bs.len() >> 3;
    let dcap = ver.data_codewords(ecl);
    let mut data = bs.into_bytes();
    data.extend(PAD_BYTES.iter().cycle().take(dcap - data_len));
    debug!(data_len, pad_len = dcap - data_len, "Padded data codewords");

    let blocks = blockify(&data, ver, ecl)?;
    let mut res = Vec::with_capacity(ver.total_codewords());
    interleave(blocks.iter().map(Block::data), &mut res);
    interleave(blocks.iter().map(Block::ecc), &mut res);
    debug_assert_eq!(res.len(), ver.total_codewords(), "Codeword count mismatch");
    Ok(res)
}

/// Splits padded data codewords into blocks in table order and attaches ecc.
pub fn blockify(data: &[u8], ver: Version, ecl: ECLevel) -> QRResult<Vec<Block>> {
    let specs = rs_blocks(ver, ecl)?;
    debug_assert_eq!(
        data.len(),
        specs.iter().map(|s| s.data).sum::<usize>(),
        "Data len doesn't match total size of blocks"
    );

    let ec_len = specs.first().map_or(0, RSBlockSpec::ec_len);
    let gen = Polynomial::generator(ec_len);

    let mut blocks = Vec::with_capacity(specs.len());
    let mut offset = 0;
    for spec in specs {
        debug_assert_eq!(spec.ec_len(), ec_len, "Non uniform ecc length");
        let block = Block::new(&data[offset..offset + spec.data], ec_len, &gen)?;
        debug_assert_eq!((block.data_len(), block.ec_len()), (spec.data, ec_len));
        blocks.push(block);
        offset += spec.data;
    }
    Ok(blocks)
}

/// Takes the i-th element of every slice in turn, skipping slices that have
/// already run out.
pub fn interleave<'a, T, I>(slices: I, res: &mut Vec<T>)
where
    T: Copy + 'a,
    I: Iterator<Item = &'a [T]> + Clone,
{
    let max_len = slices.clone().map(<[T]>::len).max().unwrap_or(0);
    for i in 0..max_len {
        res.extend(slices.clone().filter_map(|s| s.get(i)));
    }
}
