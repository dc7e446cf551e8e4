// ============================================================================
// SD59x18 Value Type
// Signed 59.18-decimal fixed-point number over a 256-bit integer
// ============================================================================

use super::constants::{self, DECIMALS, UNIT};
use super::errors::{NumericError, NumericResult};
use ethnum::{I256, U256};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Neg, Sub};

/// Signed fixed-point decimal with 18 fractional digits.
///
/// Internally stores `value × 10^18` as an `I256`. Every `I256` is a valid
/// encoding, so the wrapper only exists to keep fixed-point values from
/// being mixed with plain integers at call sites.
///
/// # Value Range
/// - Minimum: -57896044618658097711785492504343953926634992332820282019728.792003956564819968
/// - Maximum: +57896044618658097711785492504343953926634992332820282019728.792003956564819967
/// - Precision: 0.000000000000000001 (one ulp)
///
/// # Example
/// ```
/// use sd59x18::numeric::SD59x18;
///
/// let x: SD59x18 = "2".parse().unwrap();
/// assert_eq!(x.sqrt().unwrap().to_string(), "1.414213562373095048");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
#[allow(non_camel_case_types)]
pub struct SD59x18(I256);

const TEN: U256 = U256::new(10);

impl SD59x18 {
    /// The scale factor (10^18)
    pub const SCALE: I256 = UNIT;

    /// Zero value
    pub const ZERO: Self = Self(constants::ZERO);

    /// One (1.0)
    pub const ONE: Self = Self(UNIT);

    /// Maximum representable value
    pub const MAX: Self = Self(constants::MAX_SD59x18);

    /// Minimum representable value
    pub const MIN: Self = Self(constants::MIN_SD59x18);

    /// Largest value without a fractional component
    pub const MAX_WHOLE: Self = Self(constants::MAX_WHOLE_SD59x18);

    /// Smallest value without a fractional component
    pub const MIN_WHOLE: Self = Self(constants::MIN_WHOLE_SD59x18);

    /// Euler's number
    pub const E: Self = Self(constants::E);

    /// Pi
    pub const PI: Self = Self(constants::PI);

    /// Largest input accepted by [`SD59x18::sqrt`]
    pub const SQRT_MAX_INPUT: Self = Self(constants::SQRT_MAX_INPUT);

    /// Unit of least precision (10^-18)
    pub const ULP: Self = Self(I256::ONE);

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from raw internal representation.
    #[inline]
    pub const fn from_raw(raw: I256) -> Self {
        Self(raw)
    }

    /// Create from an integer value.
    ///
    /// Any i128 scaled by 10^18 fits the range, so this cannot fail.
    #[inline]
    pub fn from_integer(value: i128) -> Self {
        Self(I256::new(value) * UNIT)
    }

    /// Create from a 256-bit integer value.
    ///
    /// # Errors
    /// Returns `Overflow` or `Underflow` if the value is out of range.
    pub fn try_from_integer(value: I256) -> NumericResult<Self> {
        value.checked_mul(UNIT).map(Self).ok_or(if value.is_negative() {
            NumericError::Underflow
        } else {
            NumericError::Overflow
        })
    }

    /// Create from integer and fractional parts.
    ///
    /// # Arguments
    /// - `integer`: The integer part (can be negative)
    /// - `fraction`: The fractional digits as a count of ulps (must be < 10^18)
    ///
    /// The sign of `integer` carries over to the fraction.
    #[inline]
    pub fn from_parts(integer: i128, fraction: u64) -> NumericResult<Self> {
        let fraction = I256::from(fraction);
        if fraction >= UNIT {
            return Err(NumericError::InvalidInput);
        }

        let int_scaled = I256::new(integer) * UNIT;
        let frac_signed = if integer < 0 { -fraction } else { fraction };

        Ok(Self(int_scaled + frac_signed))
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Get the raw internal value (scaled).
    #[inline]
    pub const fn raw(self) -> I256 {
        self.0
    }

    /// Get the integer part (truncated toward zero).
    #[inline]
    pub fn integer_part(self) -> I256 {
        self.0 / UNIT
    }

    /// Get the fractional part as a positive count of ulps.
    #[inline]
    pub fn fractional_part(self) -> u64 {
        (self.0 % UNIT).unsigned_abs().as_u64()
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.0 == I256::ZERO
    }

    #[inline]
    pub fn is_positive(self) -> bool {
        self.0 > I256::ZERO
    }

    #[inline]
    pub fn is_negative(self) -> bool {
        self.0 < I256::ZERO
    }

    /// Get absolute value.
    ///
    /// # Errors
    /// Returns `Overflow` for `MIN`, whose magnitude is one past `MAX`.
    #[inline]
    pub fn abs(self) -> NumericResult<Self> {
        if self.is_negative() {
            self.checked_neg()
        } else {
            Ok(self)
        }
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Checked addition.
    ///
    /// # Errors
    /// Returns `Overflow` or `Underflow` if the result is out of range.
    #[inline]
    pub fn checked_add(self, rhs: Self) -> NumericResult<Self> {
        self.0.checked_add(rhs.0).map(Self).ok_or_else(|| {
            if rhs.0 > I256::ZERO {
                NumericError::Overflow
            } else {
                NumericError::Underflow
            }
        })
    }

    /// Checked subtraction.
    ///
    /// # Errors
    /// Returns `Overflow` or `Underflow` if the result is out of range.
    #[inline]
    pub fn checked_sub(self, rhs: Self) -> NumericResult<Self> {
        self.0.checked_sub(rhs.0).map(Self).ok_or_else(|| {
            if rhs.0 < I256::ZERO {
                NumericError::Overflow
            } else {
                NumericError::Underflow
            }
        })
    }

    /// Checked negation. Fails only for `MIN`.
    #[inline]
    pub fn checked_neg(self) -> NumericResult<Self> {
        self.0.checked_neg().map(Self).ok_or(NumericError::Overflow)
    }

    /// Square root, truncated to the nearest ulp below.
    ///
    /// # Errors
    /// - `NegativeInput` if `self < 0`
    /// - `Overflow` if `self > SQRT_MAX_INPUT`
    #[inline]
    pub fn sqrt(self) -> NumericResult<Self> {
        crate::math::sqrt(self.0).map(Self)
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Returns the minimum of two values.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self(self.0.min(other.0))
    }

    /// Returns the maximum of two values.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self(self.0.max(other.0))
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for SD59x18 {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl PartialOrd for SD59x18 {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SD59x18 {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl From<I256> for SD59x18 {
    #[inline]
    fn from(raw: I256) -> Self {
        Self(raw)
    }
}

impl From<SD59x18> for I256 {
    #[inline]
    fn from(value: SD59x18) -> Self {
        value.0
    }
}

impl From<i64> for SD59x18 {
    #[inline]
    fn from(value: i64) -> Self {
        Self::from_integer(value.into())
    }
}

impl From<i128> for SD59x18 {
    #[inline]
    fn from(value: i128) -> Self {
        Self::from_integer(value)
    }
}

// Panics on overflow (MIN only) - use checked_neg in production
impl Neg for SD59x18 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        self.checked_neg().expect("SD59x18 negation overflow")
    }
}

// Infallible Add/Sub for ergonomics (panics on overflow - use checked_* in production)
impl Add for SD59x18 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(rhs).expect("SD59x18 addition overflow")
    }
}

impl Sub for SD59x18 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.checked_sub(rhs).expect("SD59x18 subtraction overflow")
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for SD59x18 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SD59x18({}, raw={})", self, self.0)
    }
}

impl fmt::Display for SD59x18 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let int_part = self.integer_part();
        let frac_part = self.fractional_part();

        if self.is_negative() && int_part == I256::ZERO {
            // Handle -0.xxx case
            write!(f, "-0.{:0>width$}", frac_part, width = DECIMALS as usize)
        } else {
            write!(
                f,
                "{}.{:0>width$}",
                int_part,
                frac_part,
                width = DECIMALS as usize
            )
        }
    }
}

// ============================================================================
// Conversion from rust_decimal (for API boundaries)
// ============================================================================

impl SD59x18 {
    /// Convert from rust_decimal::Decimal.
    ///
    /// Exact: a decimal with more than 18 significant fractional digits is
    /// rejected rather than rounded.
    ///
    /// # Errors
    /// - `PrecisionLoss` if significant digits would be lost
    pub fn from_decimal(d: rust_decimal::Decimal) -> NumericResult<Self> {
        let mantissa = I256::new(d.mantissa());
        let scale = d.scale();

        if scale <= DECIMALS {
            let multiplier = I256::new(10i128.pow(DECIMALS - scale));
            return Ok(Self(mantissa * multiplier));
        }

        // rust_decimal scales top out at 28, so the divisor fits an i128
        let divisor = I256::new(10i128.pow(scale - DECIMALS));
        if mantissa % divisor != I256::ZERO {
            return Err(NumericError::PrecisionLoss);
        }
        Ok(Self(mantissa / divisor))
    }

    /// Convert to rust_decimal::Decimal.
    ///
    /// Trailing fractional zeros are dropped until the value fits the
    /// 96-bit mantissa.
    ///
    /// # Errors
    /// - `PrecisionLoss` if the significant digits do not fit the mantissa
    /// - `Overflow` if the integer part alone does not fit
    pub fn to_decimal(self) -> NumericResult<rust_decimal::Decimal> {
        let ten = I256::new(10);
        let i128_range = I256::new(i128::MIN)..=I256::new(i128::MAX);
        let mut mantissa = self.0;
        let mut scale = DECIMALS;

        loop {
            if i128_range.contains(&mantissa) {
                if let Ok(d) =
                    rust_decimal::Decimal::try_from_i128_with_scale(mantissa.as_i128(), scale)
                {
                    return Ok(d);
                }
            }
            if scale == 0 {
                return Err(NumericError::Overflow);
            }
            if mantissa % ten != I256::ZERO {
                return Err(NumericError::PrecisionLoss);
            }
            mantissa /= ten;
            scale -= 1;
        }
    }
}

// ============================================================================
// String Parsing
// ============================================================================

/// Digit count of `MAX`; any longer integer is out of range.
const MAX_DIGITS: i64 = 77;

/// Accumulate validated ASCII digits.
fn push_digits(digits: &str) -> Option<U256> {
    digits.bytes().try_fold(U256::ZERO, |acc, b| {
        acc.checked_mul(TEN)?.checked_add(U256::from(b - b'0'))
    })
}

/// Parse the exponent after `e`.
///
/// Exponents beyond i64 saturate, leaving the range and precision checks to
/// pick the error kind.
fn parse_exponent(s: &str) -> NumericResult<i64> {
    let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(NumericError::InvalidInput);
    }
    let saturated = if s.starts_with('-') { i64::MIN } else { i64::MAX };
    Ok(s.parse().unwrap_or(saturated))
}

impl std::str::FromStr for SD59x18 {
    type Err = NumericError;

    /// Parse from a decimal string, optionally in scientific notation.
    ///
    /// # Examples
    /// - "123" -> 123.000000000000000000
    /// - "-0.001" -> -0.001000000000000000
    /// - "1e-18" -> 0.000000000000000001
    /// - "5e40" -> 50000000000000000000000000000000000000000.000000000000000000
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(NumericError::InvalidInput);
        }

        // Check for sign
        let (is_negative, s) = if let Some(rest) = s.strip_prefix('-') {
            (true, rest)
        } else {
            (false, s.strip_prefix('+').unwrap_or(s))
        };

        // Split off exponent
        let (mantissa_str, exponent) = match s.find(['e', 'E']) {
            Some(pos) => (&s[..pos], parse_exponent(&s[pos + 1..])?),
            None => (s, 0),
        };

        // Split on decimal point
        let (int_str, frac_str) = match mantissa_str.find('.') {
            Some(pos) => (&mantissa_str[..pos], &mantissa_str[pos + 1..]),
            None => (mantissa_str, ""),
        };
        if int_str.is_empty() && frac_str.is_empty() {
            return Err(NumericError::InvalidInput);
        }
        if !int_str.bytes().chain(frac_str.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(NumericError::InvalidInput);
        }

        let overflow = if is_negative {
            NumericError::Underflow
        } else {
            NumericError::Overflow
        };

        // Significant digits only; trailing zeros move into the shift
        let digits = format!("{int_str}{frac_str}");
        let digits = digits.trim_start_matches('0');
        let significant = digits.trim_end_matches('0');
        if significant.is_empty() {
            return Ok(Self::ZERO);
        }
        let trailing_zeros = (digits.len() - significant.len()) as i64;

        // Decimal shift that turns `significant` into the scaled encoding
        let shift = i64::from(DECIMALS)
            .saturating_add(exponent)
            .saturating_sub(frac_str.len() as i64)
            .saturating_add(trailing_zeros);
        if shift < 0 {
            // Last significant digit is nonzero, so it falls below one ulp
            return Err(NumericError::PrecisionLoss);
        }
        if (significant.len() as i64).saturating_add(shift) > MAX_DIGITS {
            return Err(overflow);
        }

        let mut magnitude = push_digits(significant).ok_or(overflow)?;
        for _ in 0..shift {
            magnitude = magnitude.checked_mul(TEN).ok_or(overflow)?;
        }

        // |MIN| is one past MAX
        let limit = if is_negative {
            constants::MAX_SD59x18.as_u256() + U256::ONE
        } else {
            constants::MAX_SD59x18.as_u256()
        };
        if magnitude > limit {
            return Err(overflow);
        }

        let raw = magnitude.as_i256();
        Ok(Self(if is_negative { raw.wrapping_neg() } else { raw }))
    }
}

// ============================================================================
// Serde (canonical decimal string)
// ============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for SD59x18 {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for SD59x18 {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Tests
// ============================================================================
