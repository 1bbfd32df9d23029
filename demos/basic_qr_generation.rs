use std::error::Error;

use qrmint::{encode, ECLevel, QRBuilder, Segment};

fn main() -> Result<(), Box<dyn Error>> {
    // Simplest usage - provide only data, all other settings are automatically chosen
    let qr = QRBuilder::new(b"Hello, World!").build()?;

    // Convert to image and save
    let img = qr.to_image(4); // 4x scale factor
    img.save("simple_qr.png")?;
    println!("Simple QR code saved to: simple_qr.png");
    println!("QR metadata: {}", qr.metadata());

    // Text transcoded to Shift_JIS, split across two segments
    let qr = QRBuilder::with_segments(vec![
        Segment::from_text("こんにちは ", encoding_rs::SHIFT_JIS)?,
        Segment::new(b"qrmint"),
    ])
    .ec_level(ECLevel::H)
    .build()?;
    println!("{}", qr.to_str(1));

    // Functional entry point with a pinned version
    let qr = encode(&[b"HELLO".as_slice()], ECLevel::M, Some(3))?;
    println!("{} modules per side", qr.size());

    Ok(())
}
