// ============================================================================
// Typed Call Surface
// SD59x18 operations on the SD59x18 wrapper type
// ============================================================================

use crate::interfaces::FixedPointMath;
use crate::numeric::{NumericResult, SD59x18};

/// Square root of a typed value. Same kernel as [`crate::api::raw::sqrt`].
#[inline]
pub fn sqrt(x: SD59x18) -> NumericResult<SD59x18> {
    x.sqrt()
}

/// Call surface taking and returning [`SD59x18`] values.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypedSd59x18;

impl FixedPointMath for TypedSd59x18 {
    type Value = SD59x18;

    #[inline]
    fn sqrt(&self, x: SD59x18) -> NumericResult<SD59x18> {
        sqrt(x)
    }

    fn name(&self) -> &'static str {
        "typed"
    }
}
