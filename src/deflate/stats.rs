use super::distance::{encode_distance, Distance, MAX_DISTANCE_SYMBOL};

/// Number of slots in the symbol histogram (covers every `u32` distance)
pub const NUM_SYMBOL_SLOTS: usize = MAX_DISTANCE_SYMBOL as usize + 1;

/// Distance symbol frequencies and extra-bit cost over a set of matches
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DistanceStats {
    /// Frequencies for distance symbols (0-63)
    pub symbol_freq: [u32; NUM_SYMBOL_SLOTS],
    /// Sum of extra bits over every counted distance
    pub extra_bits_total: u64,
    /// Number of distances counted
    pub count: u64,
}

impl DistanceStats {
    pub fn new() -> Self {
        Self { symbol_freq: [0; NUM_SYMBOL_SLOTS], extra_bits_total: 0, count: 0 }
    }

    /// Count a single distance
    #[inline]
    pub fn count(&mut self, distance: Distance) {
        let code = encode_distance(distance);
        self.symbol_freq[code.symbol as usize] += 1;
        self.extra_bits_total += code.extra_bits as u64;
        self.count += 1;
    }

    /// Count every distance in `distances`
    pub fn count_all(&mut self, distances: &[Distance]) {
        for &distance in distances {
            self.count(distance);
        }
    }

    /// Fold another set of counts into this one
    pub fn merge(&mut self, other: &DistanceStats) {
        for (mine, theirs) in self.symbol_freq.iter_mut().zip(other.symbol_freq.iter()) {
            *mine += theirs;
        }
        self.extra_bits_total += other.extra_bits_total;
        self.count += other.count;
    }

    /// Get the number of distance codes needed (HDIST + 1)
    pub fn num_distance_codes(&self) -> usize {
        // Find last non-zero frequency, minimum 1
        let last = self.symbol_freq.iter().rposition(|&f| f > 0).unwrap_or(0);
        last + 1
    }
}

impl Default for DistanceStats {
    fn default() -> Self {
        Self::new()
    }
}
