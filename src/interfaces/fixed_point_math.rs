// ============================================================================
// Fixed-Point Math Interface
// Defines the contract every SD59x18 call surface implements
// ============================================================================

use crate::numeric::NumericResult;
use ethnum::I256;

/// Strategy interface for an SD59x18 call surface.
///
/// A surface picks the type its callers see (`Value`) and nothing else:
/// every implementation must forward to the shared kernel in
/// [`crate::math`], so two surfaces given the same encoding return the same
/// encoding or the same error kind.
pub trait FixedPointMath: Send + Sync {
    /// The type accepted and returned at the call site
    type Value: Copy + From<I256> + Into<I256>;

    /// Square root, truncated to the ulp below
    ///
    /// # Errors
    /// `NegativeInput` for `x < 0`, `Overflow` above the sqrt boundary
    fn sqrt(&self, x: Self::Value) -> NumericResult<Self::Value>;

    /// Get the surface name for logging
    fn name(&self) -> &'static str;

    /// Run [`FixedPointMath::sqrt`] on a raw encoding
    fn sqrt_encoded(&self, x: I256) -> NumericResult<I256> {
        self.sqrt(Self::Value::from(x)).map(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::NumericError;

    // Mock surface that answers with its input
    struct EchoMath;

    impl FixedPointMath for EchoMath {
        type Value = I256;

        fn sqrt(&self, x: I256) -> NumericResult<I256> {
            if x.is_negative() {
                Err(NumericError::NegativeInput)
            } else {
                Ok(x)
            }
        }

        fn name(&self) -> &'static str {
            "echo"
        }
    }

    #[test]
    fn test_sqrt_encoded_forwards() {
        let math = EchoMath;
        assert_eq!(math.sqrt_encoded(I256::new(9)), Ok(I256::new(9)));
        assert_eq!(
            math.sqrt_encoded(I256::new(-9)),
            Err(NumericError::NegativeInput)
        );
        assert_eq!(math.name(), "echo");
    }
}
