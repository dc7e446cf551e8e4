// ============================================================================
// Fixed-Point Square Root
// The shared kernel behind both the raw and the typed call surfaces
// ============================================================================

use super::isqrt::isqrt;
use crate::numeric::constants::{SQRT_MAX_INPUT, UNIT};
use crate::numeric::{NumericError, NumericResult};
use ethnum::I256;

/// Square root of a raw SD59x18 encoding, truncated to the ulp below.
///
/// For an encoding `x = a × 10^18`, `sqrt(a) × 10^18 = sqrt(x × 10^18)`, so
/// the result is the integer square root of `x × 10^18`, computed in U256.
///
/// Checks run in order: zero, sign, then range. The range check is on the
/// input so the rescaled operand never leaves U256.
///
/// # Errors
/// - `NegativeInput` if `x < 0`
/// - `Overflow` if `x > SQRT_MAX_INPUT`
pub fn sqrt(x: I256) -> NumericResult<I256> {
    if x == I256::ZERO {
        return Ok(I256::ZERO);
    }

    if x.is_negative() {
        tracing::trace!(input = %x, "sqrt rejected negative input");
        return Err(NumericError::NegativeInput);
    }

    if x > SQRT_MAX_INPUT {
        tracing::trace!(input = %x, "sqrt rejected input above SQRT_MAX_INPUT");
        return Err(NumericError::Overflow);
    }

    // SQRT_MAX_INPUT × 10^18 < 2^256, and its root < 2^128
    let scaled = x.unsigned_abs() * UNIT.unsigned_abs();
    Ok(isqrt(scaled).as_i256())
}
