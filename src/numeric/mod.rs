// ============================================================================
// Numeric Module
// SD59x18 representation: constants, value type and error kinds
// ============================================================================
//
// This module provides:
// - constants: raw I256 encodings (UNIT, MAX_SD59x18, E, PI, ...)
// - SD59x18: the typed wrapper around a raw encoding
// - NumericError: error kinds for operations and conversions
//
// Design principles:
// - No floating-point operations
// - All arithmetic returns Result (no panics)
// - Encoding is value × 10^18 in a 256-bit signed integer

pub mod constants;
mod errors;
mod sd59x18;

pub use errors::{NumericError, NumericResult};
pub use sd59x18::SD59x18;
