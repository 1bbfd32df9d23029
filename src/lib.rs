//! # qrmint
//!
//! A Rust library for generating byte mode QR code symbols with Reed-Solomon error correction.
//!
//! ## Features
//!
//! - **Byte Mode Segments**: Raw bytes or text transcoded through any `encoding_rs` encoding
//! - **Automatic Version Selection**: Smallest of versions 1-40 that fits the payload
//! - **Reed-Solomon Error Correction**: Configurable levels (L, M, Q, H) with block interleaving
//! - **Penalty Based Masking**: All 8 mask patterns scored, lowest penalty wins
//! - **Rendering**: Grayscale images and terminal strings with a quiet zone
//!
//! ## Quick Start
//!
//! ### Simple QR Code Generation
//!
//! ```rust
//! use qrmint::QRBuilder;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Simplest usage - provide only data, all other settings are automatically chosen
//! let qr = QRBuilder::new(b"Hello, World!").build()?;
//!
//! assert_eq!(qr.size(), 21);
//! let img = qr.to_image(4); // 4x scale factor
//! # Ok(())
//! # }
//! ```
//!
//! ### Full Configuration
//!
//! ```rust
//! use qrmint::{ECLevel, MaskPattern, QRBuilder, Segment, Version};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let qr = QRBuilder::with_segments(vec![
//!     Segment::from_text("Grüße, ", encoding_rs::WINDOWS_1252)?,
//!     Segment::new(b"world"),
//! ])
//! .version(Version::new(2)?) // Optional, defaults to the smallest version that fits
//! .ec_level(ECLevel::Q) // Optional, defaults to ECLevel::M
//! .mask(MaskPattern::new(3)?) // Optional, defaults to the lowest penalty mask
//! .build()?;
//!
//! println!("{}", qr.metadata());
//! println!("{}", qr.to_str(1));
//! # Ok(())
//! # }
//! ```
//!
//! ### Functional Entry Point
//!
//! ```rust
//! use qrmint::{encode, ECLevel};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Version None or Some(0) selects the smallest version that fits
//! let qr = encode(&[b"HELLO".as_slice()], ECLevel::M, None)?;
//! assert!(qr.is_dark(0, 0)?);
//! # Ok(())
//! # }
//! ```
//!
//! ## QR Code Components
//!
//! ### Versions
//! - Versions 1-40, with sizes from 21x21 to 177x177 modules
//!
//! ### Error Correction Levels
//! - **L (Low)**: ~7% error correction
//! - **M (Medium)**: ~15% error correction
//! - **Q (Quartile)**: ~25% error correction
//! - **H (High)**: ~30% error correction
//!
//! ## Cargo Features
//!
//! - `parallel`: scores the 8 mask trials on the `rayon` thread pool

#![allow(clippy::items_after_test_module)]

pub mod builder;
pub(crate) mod common;

pub use builder::{encode, QRBuilder, QR};
pub use common::codec::{Mode, Segment};
pub use common::error::{QRError, QRResult};
pub use common::mask::MaskPattern;
pub use common::metadata::{format_info, version_info, Color, ECLevel, Metadata, Version};
