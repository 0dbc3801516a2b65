//! Closed-form DEFLATE distance codes.
//!
//! Distances 1-4 map to symbols 0-3 with no extra bits. Beyond that, each
//! power-of-two range of `dist - 1` is split into two symbols; the bit below
//! the leading one picks the half and the remaining low bits are sent as
//! extra bits. RFC 1951 stops at symbol 29 (distance 32768), but the same
//! scheme extends to symbol 63 for the full `u32` range.

use std::fmt;
use std::num::NonZeroU32;

use crate::bits::bit_length;
use crate::error::{Error, Result};

/// Largest symbol reachable by a `u32` distance.
pub const MAX_DISTANCE_SYMBOL: u16 = 63;

/// A match distance: how many bytes back the copy starts. Always at least 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Distance(NonZeroU32);

impl Distance {
    pub const MIN: Self = Self(NonZeroU32::MIN);
    pub const MAX: Self = Self(NonZeroU32::MAX);

    /// Returns `None` for 0
    pub const fn new(distance: u32) -> Option<Self> {
        match NonZeroU32::new(distance) {
            Some(d) => Some(Self(d)),
            None => None,
        }
    }

    pub const fn get(self) -> u32 {
        self.0.get()
    }
}

impl From<NonZeroU32> for Distance {
    fn from(distance: NonZeroU32) -> Self {
        Self(distance)
    }
}

impl TryFrom<u32> for Distance {
    type Error = Error;

    fn try_from(distance: u32) -> Result<Self> {
        Self::new(distance).ok_or(Error::ZeroDistance)
    }
}

impl From<Distance> for u32 {
    fn from(distance: Distance) -> Self {
        distance.get()
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A distance split into its Huffman symbol and raw extra bits
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DistanceCode {
    /// Distance symbol (0-29 for DEFLATE)
    pub symbol: u16,
    /// Number of extra bits following the symbol
    pub extra_bits: u8,
    /// Offset within the symbol's bucket, `< 2^extra_bits`
    pub extra_value: u32,
}

impl DistanceCode {
    /// Reconstruct the distance this code was produced from.
    ///
    /// Rejects the symbol if `extra_bits` is not the width it carries.
    pub fn decode(&self) -> Result<Distance> {
        if symbol_extra_bits(self.symbol) != Some(self.extra_bits) {
            return Err(Error::InvalidDistanceSymbol(self.symbol));
        }
        decode_distance(self.symbol, self.extra_value)
    }
}

/// Classify a distance into `(symbol, extra_bits, extra_value)`.
pub const fn encode_distance(distance: Distance) -> DistanceCode {
    let dist = distance.get();
    if dist < 5 {
        return DistanceCode { symbol: (dist - 1) as u16, extra_bits: 0, extra_value: 0 };
    }

    // dist >= 5, so dist - 1 >= 4 and l >= 2
    let l = bit_length(dist - 1) - 1;
    let half = ((dist - 1) >> (l - 1)) & 1;
    let extra_bits = l - 1;
    let extra_value = (dist - (1 + (1 << l))) & ((1 << extra_bits) - 1);

    DistanceCode { symbol: (l * 2 + half) as u16, extra_bits: extra_bits as u8, extra_value }
}

/// Distance symbol for `distance`
#[inline]
pub const fn distance_symbol(distance: Distance) -> u16 {
    encode_distance(distance).symbol
}

/// Number of extra bits sent after the symbol for `distance`
#[inline]
pub const fn extra_bit_count(distance: Distance) -> u8 {
    let dist = distance.get();
    if dist < 5 {
        0
    } else {
        (bit_length(dist - 1) - 2) as u8
    }
}

/// Extra-bit payload for `distance`
#[inline]
pub const fn extra_bit_value(distance: Distance) -> u32 {
    encode_distance(distance).extra_value
}

/// Number of extra bits carried by `symbol`, or `None` past symbol 63
pub const fn symbol_extra_bits(symbol: u16) -> Option<u8> {
    match symbol {
        0..=3 => Some(0),
        4..=MAX_DISTANCE_SYMBOL => Some((symbol / 2 - 1) as u8),
        _ => None,
    }
}

/// Smallest distance coded by `symbol`, or `None` past symbol 63
pub const fn symbol_base(symbol: u16) -> Option<u32> {
    match symbol {
        0..=3 => Some(symbol as u32 + 1),
        4..=MAX_DISTANCE_SYMBOL => {
            let l = (symbol / 2) as u32;
            let half = (symbol % 2) as u32;
            Some(1 + (1 << l) + (half << (l - 1)))
        }
        _ => None,
    }
}

/// Rebuild a distance from its symbol and extra-bit payload.
///
/// The top bucket (symbol 63) is one short of full: its last slot would be
/// 2^32, which does not fit in a `u32`.
pub fn decode_distance(symbol: u16, extra_value: u32) -> Result<Distance> {
    let (Some(base), Some(extra_bits)) = (symbol_base(symbol), symbol_extra_bits(symbol)) else {
        return Err(Error::InvalidDistanceSymbol(symbol));
    };

    let out_of_range = Error::ExtraValueOutOfRange { symbol, value: extra_value, extra_bits };
    if extra_value >> extra_bits != 0 {
        return Err(out_of_range);
    }

    base.checked_add(extra_value).and_then(Distance::new).ok_or(out_of_range)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(x: u32) -> Distance {
        Distance::new(x).unwrap()
    }

    #[test]
    fn test_distance_zero_rejected() {
        assert_eq!(Distance::new(0), None);
        assert_eq!(Distance::try_from(0u32), Err(Error::ZeroDistance));
        assert_eq!(Distance::try_from(7u32).map(u32::from), Ok(7));
    }

    #[test]
    fn test_encode_first_twenty() {
        // (symbol, extra_bits, extra_value) for distances 1..=20
        let expected: [(u16, u8, u32); 20] = [
            (0, 0, 0),
            (1, 0, 0),
            (2, 0, 0),
            (3, 0, 0),
            (4, 1, 0),
            (4, 1, 1),
            (5, 1, 0),
            (5, 1, 1),
            (6, 2, 0),
            (6, 2, 1),
            (6, 2, 2),
            (6, 2, 3),
            (7, 2, 0),
            (7, 2, 1),
            (7, 2, 2),
            (7, 2, 3),
            (8, 3, 0),
            (8, 3, 1),
            (8, 3, 2),
            (8, 3, 3),
        ];
        for (i, &(symbol, extra_bits, extra_value)) in expected.iter().enumerate() {
            let dist = d(i as u32 + 1);
            assert_eq!(
                encode_distance(dist),
                DistanceCode { symbol, extra_bits, extra_value },
                "Wrong code for distance {}",
                dist
            );
            assert_eq!(distance_symbol(dist), symbol);
            assert_eq!(extra_bit_count(dist), extra_bits);
            assert_eq!(extra_bit_value(dist), extra_value);
        }
    }

    #[test]
    fn test_encode_bucket_edges() {
        let cases: [(u32, u16, u8, u32); 6] = [
            (16384, 27, 12, 4095),
            (16385, 28, 13, 0),
            (24577, 29, 13, 0),
            (32768, 29, 13, 8191),
            (32769, 30, 14, 0),
            (65536, 31, 14, 16383),
        ];
        for (dist, symbol, extra_bits, extra_value) in cases {
            assert_eq!(
                encode_distance(d(dist)),
                DistanceCode { symbol, extra_bits, extra_value },
                "Wrong code for distance {}",
                dist
            );
        }
    }

    #[test]
    fn test_encode_u32_max() {
        let code = encode_distance(Distance::MAX);
        assert_eq!(code.symbol, MAX_DISTANCE_SYMBOL);
        assert_eq!(code.extra_bits, 30);
        assert_eq!(code.extra_value, (1 << 30) - 2);
        assert_eq!(code.decode(), Ok(Distance::MAX));
    }

    #[test]
    fn test_symbol_rows() {
        assert_eq!(symbol_base(0), Some(1));
        assert_eq!(symbol_base(3), Some(4));
        assert_eq!(symbol_base(4), Some(5));
        assert_eq!(symbol_base(5), Some(7));
        assert_eq!(symbol_base(29), Some(24577));
        assert_eq!(symbol_base(63), Some(3 << 30 | 1));
        assert_eq!(symbol_base(64), None);

        assert_eq!(symbol_extra_bits(3), Some(0));
        assert_eq!(symbol_extra_bits(4), Some(1));
        assert_eq!(symbol_extra_bits(29), Some(13));
        assert_eq!(symbol_extra_bits(63), Some(30));
        assert_eq!(symbol_extra_bits(64), None);
    }

    #[test]
    fn test_decode_distance() {
        assert_eq!(decode_distance(0, 0), Ok(d(1)));
        assert_eq!(decode_distance(4, 0), Ok(d(5)));
        assert_eq!(decode_distance(4, 1), Ok(d(6)));
        assert_eq!(decode_distance(29, 0x1FFF), Ok(d(32768)));
    }

    #[test]
    fn test_decode_rejects_bad_input() {
        assert_eq!(decode_distance(64, 0), Err(Error::InvalidDistanceSymbol(64)));
        assert_eq!(
            decode_distance(4, 2),
            Err(Error::ExtraValueOutOfRange { symbol: 4, value: 2, extra_bits: 1 })
        );
        assert_eq!(
            decode_distance(0, 1),
            Err(Error::ExtraValueOutOfRange { symbol: 0, value: 1, extra_bits: 0 })
        );
        // Last slot of symbol 63 would be 2^32
        assert_eq!(
            decode_distance(63, (1 << 30) - 1),
            Err(Error::ExtraValueOutOfRange { symbol: 63, value: (1 << 30) - 1, extra_bits: 30 })
        );
    }

    #[test]
    fn test_code_decode_checks_extra_bits() {
        let code = DistanceCode { symbol: 6, extra_bits: 3, extra_value: 0 };
        assert_eq!(code.decode(), Err(Error::InvalidDistanceSymbol(6)));
    }

    #[test]
    fn test_distance_roundtrip() {
        for dist in 1..=32768u32 {
            let code = encode_distance(d(dist));
            assert_eq!(code.decode(), Ok(d(dist)), "Roundtrip failed for distance {}", dist);
        }
    }

    #[test]
    fn test_extra_bit_count_matches_encode() {
        for shift in 0..32 {
            let p = 1u32 << shift;
            for dist in [p, p + 1, p | (p >> 1), p + (p - 1)] {
                let dist = d(dist);
                assert_eq!(extra_bit_count(dist), encode_distance(dist).extra_bits);
            }
        }
    }
}
