use tracing::debug;

use super::Segment;
use crate::common::bit_utils::BitStream;
use crate::common::error::{QRError, QRResult};
use crate::common::metadata::{ECLevel, Version};

// Encoder
//------------------------------------------------------------------------------

/// Packs the segments into the smallest version that holds them.
pub fn encode(segs: &[Segment], ecl: ECLevel) -> QRResult<(BitStream, Version)> {
    let ver = find_min_version(segs, ecl)?;
    debug!(version = *ver, "Selected smallest fitting version");
    let bs = encode_with_version(segs, ver, ecl)?;
    Ok((bs, ver))
}

pub fn encode_with_version(segs: &[Segment], ver: Version, ecl: ECLevel) -> QRResult<BitStream> {
    let bcap = ver.data_bit_capacity(ecl);
    let sz = encoded_len(segs, ver);
    if sz > bcap {
        return Err(QRError::CapacityExceeded);
    }

    let mut bs = BitStream::with_capacity(bcap);
    for seg in segs {
        seg.push_to(&mut bs, ver);
    }
    debug_assert_eq!(bs.len(), sz, "Encoded length differs from estimate");
    Ok(bs)
}

fn find_min_version(segs: &[Segment], ecl: ECLevel) -> QRResult<Version> {
    Version::iter()
        .find(|&ver| encoded_len(segs, ver) <= ver.data_bit_capacity(ecl))
        .ok_or(QRError::CapacityExceeded)
}

fn encoded_len(segs: &[Segment], ver: Version) -> usize {
    segs.iter().map(|s| s.bit_len(ver)).sum()
}
