// ============================================================================
// SD59x18 Library
// Signed 59.18-decimal fixed-point arithmetic with an overflow-checked sqrt
// ============================================================================

//! # SD59x18
//!
//! Signed fixed-point decimals with 59 integer and 18 fractional digits,
//! stored as `value × 10^18` in a 256-bit signed integer.
//!
//! ## Features
//!
//! - **Exact integer-domain square root**, truncated to the ulp below
//! - **Eager range checks**: out-of-range inputs fail before any arithmetic
//! - **Two call surfaces** (raw `I256` and typed [`numeric::SD59x18`]) over
//!   one shared kernel, bit-identical by construction
//! - **Exact conversions** from decimal strings and `rust_decimal::Decimal`
//!
//! ## Example
//!
//! ```rust
//! use sd59x18::prelude::*;
//!
//! let two: SD59x18 = "2".parse().unwrap();
//! let root = two.sqrt().unwrap();
//! assert_eq!(root.to_string(), "1.414213562373095048");
//!
//! // Raw surface, same kernel
//! assert_eq!(raw::sqrt(two.raw()), Ok(root.raw()));
//!
//! // Errors are matched by kind
//! match SD59x18::MAX.sqrt() {
//!     Err(NumericError::Overflow) => {},
//!     other => panic!("unexpected {other:?}"),
//! }
//! ```

pub mod api;
pub mod interfaces;
pub mod math;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::api::{check_sqrt, compare_sqrt, raw, typed, Divergence};
    pub use crate::api::{RawSd59x18, TypedSd59x18};
    pub use crate::interfaces::FixedPointMath;
    pub use crate::numeric::constants::{
        E, MAX_SD59x18, MAX_WHOLE_SD59x18, MIN_SD59x18, MIN_WHOLE_SD59x18, PI, SQRT_MAX_INPUT,
        UNIT,
    };
    pub use crate::numeric::{NumericError, NumericResult, SD59x18};
    pub use ethnum::I256;
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;

    fn sd(s: &str) -> SD59x18 {
        s.parse().unwrap()
    }

    /// Both surfaces, asserting they agree, returning the typed outcome.
    fn sqrt_both(x: SD59x18) -> NumericResult<SD59x18> {
        let typed = TypedSd59x18.sqrt(x);
        let raw = RawSd59x18.sqrt(x.raw());
        assert_eq!(typed.map(SD59x18::raw), raw, "surfaces diverged on {x}");
        typed
    }

    #[test]
    fn test_sqrt_of_zero() {
        assert_eq!(sqrt_both(SD59x18::ZERO), Ok(SD59x18::ZERO));
    }

    #[test]
    fn test_sqrt_of_negative() {
        assert_eq!(sqrt_both(sd("-1")), Err(NumericError::NegativeInput));
        assert_eq!(sqrt_both(-SD59x18::ULP), Err(NumericError::NegativeInput));
        assert_eq!(sqrt_both(SD59x18::MIN), Err(NumericError::NegativeInput));
    }

    #[test]
    fn test_sqrt_above_boundary() {
        let just_above = SD59x18::SQRT_MAX_INPUT + SD59x18::ULP;
        for x in [just_above, SD59x18::MAX_WHOLE, SD59x18::MAX] {
            assert_eq!(sqrt_both(x), Err(NumericError::Overflow), "sqrt({x})");
        }
    }

    #[test]
    fn test_sqrt_at_boundary() {
        let boundary = sd("57896044618658097711785492504343953926634.992332820282019729");
        assert_eq!(boundary, SD59x18::SQRT_MAX_INPUT);
        assert_eq!(
            sqrt_both(boundary),
            Ok(sd("240615969168004511545.033772477625056927"))
        );
    }

    #[test]
    fn test_sqrt_fixtures() {
        let cases = [
            ("1e-18", "0.000000001"),
            ("1e-15", "0.000000031622776601"),
            ("1", "1"),
            ("2", "1.414213562373095048"),
            ("2.718281828459045235", "1.648721270700128146"),
            ("3", "1.732050807568877293"),
            ("3.141592653589793238", "1.772453850905516027"),
            ("4", "2"),
            ("16", "4"),
            ("1e17", "316227766.016837933199889354"),
            ("1e18", "1000000000"),
            (
                "12489131238983290393813.123784889921092801",
                "111754781727.598977910452220959",
            ),
            (
                "1889920002192904839344128288891377.732371920009212883",
                "43473210166640613.973238162807779776",
            ),
            ("1e40", "100000000000000000000"),
            ("5e40", "223606797749978969640.917366873127623544"),
            (
                "57896044618658097711785492504343953926634.992332820282019728",
                "240615969168004511545.033772477625056927",
            ),
        ];

        for (input, expected) in cases {
            assert_eq!(sqrt_both(sd(input)), Ok(sd(expected)), "sqrt({input})");
        }
    }

    #[test]
    fn test_named_constants_as_inputs() {
        assert_eq!(SD59x18::E, sd("2.718281828459045235"));
        assert_eq!(SD59x18::PI, sd("3.141592653589793238"));
        assert_eq!(SD59x18::E.raw(), E);
        assert_eq!(SD59x18::MAX_WHOLE.raw(), MAX_WHOLE_SD59x18);
    }

    #[test]
    fn test_concurrent_calls_are_deterministic() {
        let inputs: Vec<SD59x18> = ["2", "3.141592653589793238", "1e40", "-1"]
            .iter()
            .map(|s| sd(s))
            .chain([SD59x18::SQRT_MAX_INPUT, SD59x18::MAX])
            .collect();
        let expected: Vec<_> = inputs.iter().map(|x| x.sqrt()).collect();

        crossbeam::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    let inputs = &inputs;
                    scope.spawn(move |_| {
                        (0..100)
                            .flat_map(|_| inputs.iter().map(|x| x.sqrt()))
                            .collect::<Vec<_>>()
                    })
                })
                .collect();

            for handle in handles {
                let results = handle.join().unwrap();
                for chunk in results.chunks(inputs.len()) {
                    assert_eq!(chunk, expected.as_slice());
                }
            }
        })
        .unwrap();
    }
}
