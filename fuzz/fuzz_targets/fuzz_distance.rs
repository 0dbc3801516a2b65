#![no_main]

use distcode::{decode_distance, encode_distance, Distance, DistanceCodec, DistanceFormat};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }
    let raw = u32::from_le_bytes([data[0], data[1], data[2], data[3]]);

    // Any nonzero u32 must survive encode -> decode
    if let Some(dist) = Distance::new(raw) {
        let code = encode_distance(dist);
        assert!(code.extra_bits <= 30);
        assert!(code.extra_value >> code.extra_bits == 0, "extra value overflow");
        assert_eq!(decode_distance(code.symbol, code.extra_value), Ok(dist), "Round-trip mismatch");
    }

    // Range-checked codec must agree with the free functions or reject
    let codec = DistanceCodec::new(DistanceFormat::Deflate);
    match codec.encode(raw) {
        Ok(code) => assert_eq!(codec.decode(code.symbol, code.extra_value), Ok(raw)),
        Err(_) => assert!(raw == 0 || raw > DistanceFormat::Deflate.max_distance()),
    }
});
