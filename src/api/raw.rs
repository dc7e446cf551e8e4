// ============================================================================
// Raw Call Surface
// SD59x18 operations on bare I256 encodings
// ============================================================================

use crate::interfaces::FixedPointMath;
use crate::math;
use crate::numeric::NumericResult;
use ethnum::I256;

/// Square root of a raw encoding.
///
/// # Example
/// ```
/// use sd59x18::api::raw;
/// use sd59x18::numeric::constants::UNIT;
/// use ethnum::I256;
///
/// let four = I256::new(4) * UNIT;
/// assert_eq!(raw::sqrt(four), Ok(I256::new(2) * UNIT));
/// ```
#[inline]
pub fn sqrt(x: I256) -> NumericResult<I256> {
    math::sqrt(x)
}

/// Call surface taking and returning raw `I256` encodings.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawSd59x18;

impl FixedPointMath for RawSd59x18 {
    type Value = I256;

    #[inline]
    fn sqrt(&self, x: I256) -> NumericResult<I256> {
        sqrt(x)
    }

    fn name(&self) -> &'static str {
        "raw"
    }
}
