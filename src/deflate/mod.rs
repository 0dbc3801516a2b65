pub mod distance;
pub mod stats;
pub mod tables;

pub use distance::{
    decode_distance, distance_symbol, encode_distance, extra_bit_count, extra_bit_value,
    symbol_base, symbol_extra_bits, Distance, DistanceCode,
};
pub use stats::DistanceStats;
