// ============================================================================
// Integer Square Root
// floor(sqrt(m)) over unsigned 256-bit and 128-bit integers
// ============================================================================

use ethnum::U256;

/// Floor of the square root of `m`.
///
/// Newton's method seeded with `2^ceil(bits/2)`, which is never below the
/// true root. From there the iterates decrease monotonically, so the loop
/// stops at the first step that fails to decrease. The seed is at most
/// 2^128, which keeps `x + m / x` below 2^129.
///
/// Returns `r` with `r * r <= m < (r + 1) * (r + 1)`.
pub fn isqrt(m: U256) -> U256 {
    if m < U256::new(2) {
        return m;
    }

    let bits = 256 - m.leading_zeros();
    let mut x = U256::ONE << ((bits + 1) / 2);
    loop {
        let y = (x + m / x) >> 1;
        if y >= x {
            return x;
        }
        x = y;
    }
}

/// Floor of the square root of a `u128`.
#[inline]
pub fn isqrt_u128(m: u128) -> u128 {
    // Root of a u128 always fits in 64 bits
    isqrt(U256::new(m)).as_u128()
}
