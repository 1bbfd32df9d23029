#[cfg(test)]
mod qr_proptests {

    use prop::string::string_regex;
    use proptest::prelude::*;

    use qrmint::*;

    pub fn ec_level_strategy() -> BoxedStrategy<ECLevel> {
        prop_oneof![Just(ECLevel::L), Just(ECLevel::M), Just(ECLevel::Q), Just(ECLevel::H)].boxed()
    }

    pub fn max_bytes(ecl: ECLevel) -> usize {
        match ecl {
            ECLevel::L => 2953,
            ECLevel::M => 2331,
            ECLevel::Q => 1663,
            ECLevel::H => 1273,
        }
    }

    pub fn bytes_strategy(max_sz: usize) -> impl Strategy<Value = (ECLevel, Vec<u8>)> {
        ec_level_strategy().prop_flat_map(move |ecl| {
            prop::collection::vec(any::<u8>(), 0..=max_sz.min(max_bytes(ecl)))
                .prop_map(move |data| (ecl, data))
        })
    }

    pub fn text_strategy() -> impl Strategy<Value = (ECLevel, String)> {
        ec_level_strategy().prop_flat_map(|ecl| {
            let pattern = format!(r"[0-9A-Za-z $%*+\-./:]{{1,{}}}", max_bytes(ecl));
            string_regex(&pattern).unwrap().prop_map(move |data| (ecl, data))
        })
    }

    proptest! {
        #[test]
        fn proptest_deterministic((ecl, data) in bytes_strategy(300)) {
            let a = encode(&[data.as_slice()], ecl, None).unwrap();
            let b = encode(&[data.as_slice()], ecl, None).unwrap();
            prop_assert_eq!(a.mask(), b.mask());
            prop_assert_eq!(a, b);
        }

        #[test]
        fn proptest_all_modules_resolved((ecl, data) in bytes_strategy(300)) {
            let qr = encode(&[data.as_slice()], ecl, None).unwrap();
            let w = qr.size();
            prop_assert_eq!(w, qr.version().width());
            let dark = (0..w)
                .flat_map(|r| (0..w).map(move |c| (r, c)))
                .filter(|&(r, c)| qr.is_dark(r, c).unwrap())
                .count();
            prop_assert_eq!(dark, qr.count_dark_modules());
            prop_assert!(qr.is_dark(w, 0).is_err());
        }

        #[test]
        fn proptest_version_fits((ecl, data) in bytes_strategy(3000)) {
            let qr = encode(&[data.as_slice()], ecl, None).unwrap();
            let ver = qr.version();
            let cnt_bits = if *ver < 10 { 8 } else { 16 };
            prop_assert!(4 + cnt_bits + data.len() * 8 <= ver.data_bit_capacity(ecl));
        }

        #[test]
        #[ignore]
        fn proptest_scan(params in text_strategy()) {
            let (ecl, data) = params;

            let qr = QRBuilder::new(data.as_bytes()).ec_level(ecl).build().unwrap();

            let gray = qr.to_image(3);
            let mut img = rqrr::PreparedImage::prepare_from_greyscale(
                gray.width() as usize,
                gray.height() as usize,
                |x, y| gray.get_pixel(x as u32, y as u32).0[0],
            );
            let grids = img.detect_grids();
            let (_meta, decoded) = grids[0].decode().expect("Failed to read QR");

            prop_assert_eq!(data, decoded);
        }
    }
}

#[cfg(test)]
mod qr_tests {
    use test_case::test_case;

    use qrmint::{encode, ECLevel, QRBuilder, QRError, Segment, Version, QR};

    fn scan(qr: &QR) -> (usize, String) {
        let gray = qr.to_image(4);
        let mut img = rqrr::PreparedImage::prepare_from_greyscale(
            gray.width() as usize,
            gray.height() as usize,
            |x, y| gray.get_pixel(x as u32, y as u32).0[0],
        );
        let grids = img.detect_grids();
        assert_eq!(grids.len(), 1);
        let (meta, content) = grids[0].decode().expect("Failed to read QR");
        (meta.version.0, content)
    }

    fn assert_finder_at(qr: &QR, r0: usize, c0: usize) {
        for i in 0..7 {
            for j in 0..7 {
                let ring = (i as i32 - 3).abs().max((j as i32 - 3).abs());
                assert_eq!(qr.is_dark(r0 + i, c0 + j), Ok(ring != 2), "Finder at ({r0}, {c0})");
            }
        }
    }

    #[test]
    fn test_hello_m() {
        let qr = encode(&[b"HELLO".as_slice()], ECLevel::M, None).unwrap();
        assert_eq!(*qr.version(), 1);
        assert_eq!(qr.size(), 21);

        let n = qr.size();
        assert_finder_at(&qr, 0, 0);
        assert_finder_at(&qr, 0, n - 7);
        assert_finder_at(&qr, n - 7, 0);
        assert_eq!(qr.is_dark(n - 8, 8), Ok(true));
        assert_eq!(scan(&qr), (1, "HELLO".to_string()));
    }

    #[test]
    fn test_empty_segment_list() {
        let qr = encode(&[], ECLevel::H, None).unwrap();
        assert_eq!(*qr.version(), 1);
        assert_eq!(scan(&qr), (1, String::new()));
    }

    #[test]
    fn test_capacity_exceeded() {
        let data = vec![b'a'; 2954];
        assert_eq!(encode(&[data.as_slice()], ECLevel::L, None), Err(QRError::CapacityExceeded));
        let split = [&data[..1500], &data[1500..]];
        assert_eq!(encode(&split, ECLevel::L, None), Err(QRError::CapacityExceeded));
    }

    #[test]
    fn test_max_capacity() {
        let data = vec![b'a'; 2953];
        let qr = encode(&[data.as_slice()], ECLevel::L, None).unwrap();
        assert_eq!(*qr.version(), 40);
        assert_eq!(qr.size(), 177);
    }

    #[test]
    fn test_is_dark_out_of_bounds() {
        let qr = encode(&[b"bounds".as_slice()], ECLevel::L, None).unwrap();
        assert_eq!(qr.is_dark(21, 0), Err(QRError::OutOfBounds));
        assert_eq!(qr.is_dark(0, 21), Err(QRError::OutOfBounds));
        assert!(qr.is_dark(20, 20).is_ok());
    }

    #[test]
    fn test_multiple_segments() {
        let segs = vec![
            Segment::from("Grüße ".as_bytes()),
            Segment::from_text("aus Köln", encoding_rs::UTF_8).unwrap(),
        ];
        let qr = QRBuilder::with_segments(segs).ec_level(ECLevel::Q).build().unwrap();
        assert_eq!(scan(&qr).1, "Grüße aus Köln");
    }

    #[test_case("Hello, world!🌎".to_string(), 1, ECLevel::L; "test_qr_1")]
    #[test_case("TEST".to_string(), 1, ECLevel::M; "test_qr_2")]
    #[test_case("12345".to_string(), 1, ECLevel::Q; "test_qr_3")]
    #[test_case("OK".to_string(), 1, ECLevel::H; "test_qr_4")]
    #[test_case("B3@j🎮#Z%8v🍣K!🔑3zC^8📖&r💾F9*🔐b6🌼".repeat(3), 7, ECLevel::L; "test_qr_5")]
    #[test_case("A11111111111111".repeat(8), 7, ECLevel::M; "test_qr_6")]
    #[test_case("aAAAAAA1111111111111AAAAAAa".repeat(3), 7, ECLevel::Q; "test_qr_7")]
    #[test_case("1234567890".repeat(6), 7, ECLevel::H; "test_qr_8")]
    #[test_case("B3@j🎮#Z%8v🍣K!🔑3zC^8📖&r💾F9*🔐b6🌼".repeat(5), 10, ECLevel::L; "test_qr_9")]
    #[test_case("A11111111111111".repeat(14), 10, ECLevel::M; "test_qr_10")]
    #[test_case("aAAAAAAAAA1111111111111111AAAAAAAAAAa".repeat(4), 10, ECLevel::Q; "test_qr_11")]
    #[test_case("1234567890".repeat(11), 10, ECLevel::H; "test_qr_12")]
    #[test_case("1234567890".repeat(100), 27, ECLevel::L; "test_qr_13")]
    #[test_case("A111111111111111".repeat(60), 27, ECLevel::M; "test_qr_14")]
    #[test_case("1234567890".repeat(250), 40, ECLevel::L; "test_qr_15")]
    #[test_case("1234567890".repeat(120), 40, ECLevel::H; "test_qr_16")]
    fn test_qr(data: String, version: usize, ecl: ECLevel) {
        let qr = encode(&[data.as_bytes()], ecl, Some(version)).unwrap();
        assert_eq!(*qr.version(), version);
        assert_eq!(scan(&qr), (version, data));
    }

    #[test_case(ECLevel::L)]
    #[test_case(ECLevel::M)]
    #[test_case(ECLevel::Q)]
    #[test_case(ECLevel::H)]
    fn test_every_version_scans(ecl: ECLevel) {
        for ver in Version::iter() {
            let qr = QRBuilder::new(b"qrmint").version(ver).ec_level(ecl).build().unwrap();
            assert_eq!(scan(&qr), (*ver, "qrmint".to_string()), "Version {}", *ver);
        }
    }
}
