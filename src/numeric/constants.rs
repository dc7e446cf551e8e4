// ============================================================================
// SD59x18 Constants
// Raw encodings of the range bounds and named values
// ============================================================================
//
// Every constant is the scaled encoding (`value × 10^18`) as an I256.
// Values wider than i128 are spelled as (high, low) 128-bit words.

use ethnum::I256;

/// Number of fractional decimal digits.
pub const DECIMALS: u32 = 18;

/// The scale factor, 10^18. Also the encoding of `1`.
pub const UNIT: I256 = I256::new(10i128.pow(DECIMALS));

/// Encoding of `0`.
pub const ZERO: I256 = I256::ZERO;

/// Euler's number, 2.718281828459045235.
pub const E: I256 = I256::new(2_718281828459045235);

/// Pi, 3.141592653589793238.
pub const PI: I256 = I256::new(3_141592653589793238);

/// 57896044618658097711785492504343953926634992332820282019728.792003956564819967
#[allow(non_upper_case_globals)]
pub const MAX_SD59x18: I256 = I256::MAX;

/// -57896044618658097711785492504343953926634992332820282019728.792003956564819968
#[allow(non_upper_case_globals)]
pub const MIN_SD59x18: I256 = I256::MIN;

/// 57896044618658097711785492504343953926634992332820282019728.000000000000000000
#[allow(non_upper_case_globals)]
pub const MAX_WHOLE_SD59x18: I256 = I256::from_words(
    170_141_183_460_469_231_731_687_303_715_884_105_727,
    -792_003_956_564_819_968,
);

/// -57896044618658097711785492504343953926634992332820282019728.000000000000000000
#[allow(non_upper_case_globals)]
pub const MIN_WHOLE_SD59x18: I256 = I256::from_words(
    -170_141_183_460_469_231_731_687_303_715_884_105_728,
    792_003_956_564_819_968,
);

/// Largest input accepted by sqrt:
/// 57896044618658097711785492504343953926634.992332820282019729
///
/// `SQRT_MAX_INPUT × 10^18` stays below 2^256, so the rescaled operand is
/// always representable as a U256.
pub const SQRT_MAX_INPUT: I256 = I256::from_words(
    170_141_183_460_469_231_731,
    -106_405_031_686_338_756_506_406_054_623_759_102_063,
);
