use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // Distance domain errors
    #[error("Distance must be at least 1, got 0")]
    ZeroDistance,

    #[error("Distance {distance} exceeds maximum {max} for this format")]
    DistanceOutOfRange { distance: u32, max: u32 },

    // Inverse mapping errors
    #[error("Invalid distance symbol: {0}")]
    InvalidDistanceSymbol(u16),

    #[error("Extra value {value} does not fit in {extra_bits} extra bits of distance symbol {symbol}")]
    ExtraValueOutOfRange { symbol: u16, value: u32, extra_bits: u8 },
}

pub type Result<T> = std::result::Result<T, Error>;
