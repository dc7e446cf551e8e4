// ============================================================================
// Surface Equivalence
// Runs one input through two call surfaces and compares the encodings
// ============================================================================

use super::{RawSd59x18, TypedSd59x18};
use crate::interfaces::FixedPointMath;
use crate::numeric::NumericResult;
use ethnum::I256;
use std::fmt;

/// Two surfaces returned different outcomes for the same input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Divergence {
    pub input: I256,
    pub left_surface: &'static str,
    pub left: NumericResult<I256>,
    pub right_surface: &'static str,
    pub right: NumericResult<I256>,
}

impl fmt::Display for Divergence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "sqrt({}) diverged: {} returned {:?}, {} returned {:?}",
            self.input, self.left_surface, self.left, self.right_surface, self.right
        )
    }
}

impl std::error::Error for Divergence {}

/// Compare `sqrt` across two surfaces.
///
/// Returns the shared outcome (value or error kind) when both agree
/// bit-for-bit, otherwise the [`Divergence`].
pub fn compare_sqrt<A, B>(left: &A, right: &B, x: I256) -> Result<NumericResult<I256>, Divergence>
where
    A: FixedPointMath,
    B: FixedPointMath,
{
    let l = left.sqrt_encoded(x);
    let r = right.sqrt_encoded(x);

    if l == r {
        return Ok(l);
    }

    tracing::error!(
        input = %x,
        left = left.name(),
        right = right.name(),
        "sqrt surfaces diverged"
    );
    Err(Divergence {
        input: x,
        left_surface: left.name(),
        left: l,
        right_surface: right.name(),
        right: r,
    })
}

/// Compare the raw and typed surfaces on one input.
pub fn check_sqrt(x: I256) -> Result<NumericResult<I256>, Divergence> {
    compare_sqrt(&RawSd59x18, &TypedSd59x18, x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::constants::{
        E, MAX_SD59x18, MAX_WHOLE_SD59x18, MIN_SD59x18, PI, SQRT_MAX_INPUT, UNIT,
    };
    use crate::numeric::NumericError;
    use proptest::prelude::*;

    // Surface that rounds up instead of truncating
    struct CeilMath;

    impl FixedPointMath for CeilMath {
        type Value = I256;

        fn sqrt(&self, x: I256) -> NumericResult<I256> {
            crate::math::sqrt(x).map(|r| r + I256::ONE)
        }

        fn name(&self) -> &'static str {
            "ceil"
        }
    }

    #[test]
    fn test_fixtures_agree() {
        let fixtures = [
            I256::ZERO,
            I256::ONE,
            UNIT,
            E,
            PI,
            SQRT_MAX_INPUT,
            SQRT_MAX_INPUT + I256::ONE,
            MAX_WHOLE_SD59x18,
            MAX_SD59x18,
            -UNIT,
            MIN_SD59x18,
        ];
        for x in fixtures {
            assert!(check_sqrt(x).is_ok(), "surfaces diverged on {x}");
        }
    }

    #[test]
    fn test_agreement_returns_shared_outcome() {
        assert_eq!(check_sqrt(I256::new(4) * UNIT), Ok(Ok(I256::new(2) * UNIT)));
        assert_eq!(check_sqrt(-UNIT), Ok(Err(NumericError::NegativeInput)));
        assert_eq!(check_sqrt(MAX_SD59x18), Ok(Err(NumericError::Overflow)));
    }

    #[test]
    fn test_divergence_is_reported() {
        let x = I256::new(4) * UNIT;
        let divergence = compare_sqrt(&RawSd59x18, &CeilMath, x).unwrap_err();
        assert_eq!(divergence.input, x);
        assert_eq!(divergence.left, Ok(I256::new(2) * UNIT));
        assert_eq!(divergence.right, Ok(I256::new(2) * UNIT + I256::ONE));
        assert_eq!(divergence.right_surface, "ceil");
        assert!(divergence.to_string().starts_with("sqrt(4000000000000000000) diverged"));

        // Error outcomes still agree
        assert_eq!(
            compare_sqrt(&RawSd59x18, &CeilMath, -UNIT),
            Ok(Err(NumericError::NegativeInput))
        );
    }

    proptest! {
        #[test]
        fn prop_surfaces_agree(hi in any::<i128>(), lo in any::<i128>()) {
            prop_assert!(check_sqrt(I256::from_words(hi, lo)).is_ok());
        }
    }
}
