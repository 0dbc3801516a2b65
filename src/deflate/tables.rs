use super::distance::DistanceCode;

/// Largest back-reference distance in classic DEFLATE (32 KiB window)
pub const DEFLATE_MAX_DISTANCE: u32 = 32768;

/// Largest back-reference distance in Deflate64 (64 KiB window)
pub const DEFLATE64_MAX_DISTANCE: u32 = 65536;

/// Number of distance symbols used by classic DEFLATE
pub const DEFLATE_NUM_DISTANCE_SYMBOLS: usize = 30;

/// Number of distance symbols used by Deflate64
pub const DEFLATE64_NUM_DISTANCE_SYMBOLS: usize = 32;

/// Distance codes 0-29: base distance and extra bits (RFC 1951 section 3.2.5)
pub const DISTANCE_TABLE: [(u16, u8); DEFLATE_NUM_DISTANCE_SYMBOLS] = [
    // (base_distance, extra_bits)
    (1, 0),      // 0
    (2, 0),      // 1
    (3, 0),      // 2
    (4, 0),      // 3
    (5, 1),      // 4
    (7, 1),      // 5
    (9, 2),      // 6
    (13, 2),     // 7
    (17, 3),     // 8
    (25, 3),     // 9
    (33, 4),     // 10
    (49, 4),     // 11
    (65, 5),     // 12
    (97, 5),     // 13
    (129, 6),    // 14
    (193, 6),    // 15
    (257, 7),    // 16
    (385, 7),    // 17
    (513, 8),    // 18
    (769, 8),    // 19
    (1025, 9),   // 20
    (1537, 9),   // 21
    (2049, 10),  // 22
    (3073, 10),  // 23
    (4097, 11),  // 24
    (6145, 11),  // 25
    (8193, 12),  // 26
    (12289, 12), // 27
    (16385, 13), // 28
    (24577, 13), // 29
];

/// Find the distance code by scanning [`DISTANCE_TABLE`].
///
/// Only covers classic DEFLATE distances (1-32768). Slower than
/// [`encode_distance`](super::distance::encode_distance); kept as an
/// independent reference for it.
pub fn scan_distance_table(distance: u32) -> Option<DistanceCode> {
    if !(1..=DEFLATE_MAX_DISTANCE).contains(&distance) {
        return None;
    }

    for (symbol, &(base, extra_bits)) in DISTANCE_TABLE.iter().enumerate() {
        let base = base as u32;
        let max_dist = base + (1 << extra_bits) - 1;

        if distance >= base && distance <= max_dist {
            return Some(DistanceCode {
                symbol: symbol as u16,
                extra_bits,
                extra_value: distance - base,
            });
        }
    }
    None
}
