mod qr;

pub use qr::{Module, QR};

use tracing::debug;

use crate::common::{
    codec::{encode as encode_segments, encode_with_version, Segment},
    ec::encode_codewords,
    error::QRResult,
    mask::{select_best_mask, MaskPattern},
    metadata::{ECLevel, Version},
};

pub struct QRBuilder<'a> {
    segments: Vec<Segment<'a>>,
    version: Option<Version>,
    ec_level: ECLevel,
    mask: Option<MaskPattern>,
}

impl<'a> QRBuilder<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self::with_segments(vec![Segment::new(data)])
    }

    pub fn with_segments(segments: Vec<Segment<'a>>) -> Self {
        Self { segments, version: None, ec_level: ECLevel::M, mask: None }
    }

    pub fn segment(&mut self, segment: Segment<'a>) -> &mut Self {
        self.segments.push(segment);
        self
    }

    pub fn version(&mut self, version: Version) -> &mut Self {
        self.version = Some(version);
        self
    }

    pub fn unset_version(&mut self) -> &mut Self {
        self.version = None;
        self
    }

    pub fn ec_level(&mut self, ec_level: ECLevel) -> &mut Self {
        self.ec_level = ec_level;
        self
    }

    pub fn mask(&mut self, mask: MaskPattern) -> &mut Self {
        self.mask = Some(mask);
        self
    }

    pub fn metadata(&self) -> String {
        let ver = self.version.map_or("None".to_string(), |v| (*v).to_string());
        let mask = self.mask.map_or("None".to_string(), |m| (*m).to_string());
        format!(
            "{{ Segments: {}, Version: {ver}, Ec level: {:?}, Mask: {mask} }}",
            self.segments.len(),
            self.ec_level
        )
    }
}


impl QRBuilder<'_> {
    pub fn build(&self) -> QRResult<QR> {
        debug!(config = %self.metadata(), "Generating QR");

        // Encode data optimally
        let (encoded, version) = match self.version {
            Some(v) => (encode_with_version(&self.segments, v, self.ec_level)?, v),
            None => encode_segments(&self.segments, self.ec_level)?,
        };
        debug!(version = *version, bits = encoded.len(), "Encoded segments");

        let codewords = encode_codewords(encoded, version, self.ec_level)?;
        debug!(codewords = codewords.len(), "Constructed payload with ecc & interleaving");

        let mut qr = QR::with_payload(version, self.ec_level, &codewords);

        let mask = match self.mask {
            Some(m) => m,
            None => select_best_mask(|m| {
                let mut trial = qr.clone();
                trial.apply_mask(m, true);
                trial
            }),
        };
        qr.apply_mask(mask, false);

        debug!(metadata = %qr.metadata(), dark = qr.count_dark_modules(), "QR generated");
        Ok(qr)
    }
}

/// Encodes `segments` as consecutive byte mode segments. A `version` of
/// `None` or `Some(0)` selects the smallest version that fits.
pub fn encode(segments: &[&[u8]], ec_level: ECLevel, version: Option<usize>) -> QRResult<QR> {
    let segs = segments.iter().map(|&s| Segment::new(s)).collect();
    let mut builder = QRBuilder::with_segments(segs);
    builder.ec_level(ec_level);
    match version {
        None | Some(0) => builder.unset_version(),
        Some(v) => builder.version(Version::new(v)?),
    };
    builder.build()
}
