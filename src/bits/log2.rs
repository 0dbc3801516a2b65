use std::num::NonZeroU32;

/// Number of significant bits in `x` (0 for 0).
#[inline]
pub const fn bit_length(x: u32) -> u32 {
    u32::BITS - x.leading_zeros()
}

/// Position of the highest set bit of `x`, i.e. `floor(log2(x))`.
///
/// Defined over the whole `u32` range; the `NonZeroU32` input rules out the
/// `leading_zeros(0) == 32` case.
#[inline]
pub const fn floor_log2(x: NonZeroU32) -> u32 {
    bit_length(x.get()) - 1
}

/// Shift-loop equivalent of [`bit_length`] that does not rely on a
/// leading-zero-count instruction.
pub const fn bit_length_portable(x: u32) -> u32 {
    let mut v = x;
    let mut n = 0;
    while v != 0 {
        v >>= 1;
        n += 1;
    }
    n
}

/// Shift-loop equivalent of [`floor_log2`].
pub const fn floor_log2_portable(x: NonZeroU32) -> u32 {
    bit_length_portable(x.get()) - 1
}
