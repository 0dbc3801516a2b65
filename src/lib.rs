pub mod bits;
pub mod deflate;
pub mod error;

pub use deflate::distance::{
    decode_distance, distance_symbol, encode_distance, extra_bit_count, extra_bit_value,
    symbol_base, symbol_extra_bits, Distance, DistanceCode, MAX_DISTANCE_SYMBOL,
};
pub use deflate::stats::DistanceStats;
pub use error::{Error, Result};

use deflate::tables::{
    DEFLATE64_MAX_DISTANCE, DEFLATE64_NUM_DISTANCE_SYMBOLS, DEFLATE_MAX_DISTANCE,
    DEFLATE_NUM_DISTANCE_SYMBOLS,
};

/// Supported distance range (window size) of the stream being coded
///
/// - `Deflate`: RFC 1951, distances 1-32768, symbols 0-29
/// - `Deflate64`: distances 1-65536, symbols 0-31
/// - `Extended`: any `u32` distance, symbols 0-63
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum DistanceFormat {
    #[default]
    Deflate,
    Deflate64,
    Extended,
}

impl DistanceFormat {
    /// Largest distance this format can express
    pub fn max_distance(&self) -> u32 {
        match self {
            Self::Deflate => DEFLATE_MAX_DISTANCE,
            Self::Deflate64 => DEFLATE64_MAX_DISTANCE,
            Self::Extended => u32::MAX,
        }
    }

    /// Size of the distance alphabet
    pub fn num_symbols(&self) -> usize {
        match self {
            Self::Deflate => DEFLATE_NUM_DISTANCE_SYMBOLS,
            Self::Deflate64 => DEFLATE64_NUM_DISTANCE_SYMBOLS,
            Self::Extended => MAX_DISTANCE_SYMBOL as usize + 1,
        }
    }

    /// Largest number of extra bits any symbol of this format carries
    pub fn max_extra_bits(&self) -> u8 {
        symbol_extra_bits((self.num_symbols() - 1) as u16).unwrap_or(0)
    }
}

/// Range-checked distance coding for one [`DistanceFormat`]
///
/// The free functions ([`encode_distance`] and friends) take a [`Distance`]
/// and cannot fail. This wrapper accepts raw integers, as read from a match
/// finder or a bitstream, and rejects anything outside the format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DistanceCodec {
    format: DistanceFormat,
}

impl DistanceCodec {
    pub fn new(format: DistanceFormat) -> Self {
        Self { format }
    }

    pub fn format(&self) -> DistanceFormat {
        self.format
    }

    /// Validate a raw distance against this format
    pub fn distance(&self, distance: u32) -> Result<Distance> {
        let checked = Distance::try_from(distance)?;
        let max = self.format.max_distance();
        if distance > max {
            return Err(Error::DistanceOutOfRange { distance, max });
        }
        Ok(checked)
    }

    /// Encode a raw distance to `(symbol, extra_bits, extra_value)`
    pub fn encode(&self, distance: u32) -> Result<DistanceCode> {
        self.distance(distance).map(encode_distance)
    }

    /// Decode a symbol and its extra-bit payload back to a distance
    pub fn decode(&self, symbol: u16, extra_value: u32) -> Result<u32> {
        if symbol as usize >= self.format.num_symbols() {
            return Err(Error::InvalidDistanceSymbol(symbol));
        }
        let distance = decode_distance(symbol, extra_value)?.get();

        // Symbol 29 of Deflate and 31 of Deflate64 end exactly at the window size
        debug_assert!(distance <= self.format.max_distance());
        Ok(distance)
    }

    /// Encode a batch of raw distances, failing on the first invalid one
    pub fn encode_all(&self, distances: &[u32]) -> Result<Vec<DistanceCode>> {
        distances.iter().map(|&d| self.encode(d)).collect()
    }

    /// Accumulate symbol statistics for a batch of raw distances
    pub fn stats(&self, distances: &[u32]) -> Result<DistanceStats> {
        let mut stats = DistanceStats::new();
        for &d in distances {
            stats.count(self.distance(d)?);
        }
        Ok(stats)
    }
}
