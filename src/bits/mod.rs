pub mod log2;

pub use log2::{bit_length, bit_length_portable, floor_log2, floor_log2_portable};
