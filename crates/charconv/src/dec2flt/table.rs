//! The power-of-five mantissa table behind the Eisel-Lemire fast path (§4.8).
//!
//! Generated the same way `charconv-core`'s Dragonbox caches are
//! (`charconv_core::cache::pow5_mantissa_128`): a compile-time, auditable computation
//! rather than a literal table transcribed from the reference implementation.

use charconv_core::cache::pow5_mantissa_128;

/// Smallest decimal exponent this table covers.
pub const SMALLEST_POWER_OF_FIVE: i32 = -342;
/// Largest decimal exponent this table covers.
pub const LARGEST_POWER_OF_FIVE: i32 = 308;

const TABLE_LEN: usize = (LARGEST_POWER_OF_FIVE - SMALLEST_POWER_OF_FIVE + 1) as usize;

/// `POWER_OF_FIVE_128[q - SMALLEST_POWER_OF_FIVE]` is the ceiling-rounded 128-bit
/// mantissa of `5^q`, as `(low, high)` 64-bit halves.
pub static POWER_OF_FIVE_128: [(u64, u64); TABLE_LEN] = {
    let mut table = [(0u64, 0u64); TABLE_LEN];
    let mut i = 0;
    while i < TABLE_LEN {
        let q = SMALLEST_POWER_OF_FIVE + i as i32;
        let (hi, lo) = pow5_mantissa_128(q);
        table[i] = (lo, hi);
        i += 1;
    }
    table
};
