// ============================================================================
// Math Module
// Integer-domain kernels shared by every call surface
// ============================================================================
//
// - isqrt: floor square root over unsigned integers (no scaling, no signs)
// - sqrt: SD59x18 square root over raw encodings
//
// All functions are pure: no global state, no allocation.

mod isqrt;
mod sqrt;

pub use isqrt::{isqrt, isqrt_u128};
pub use sqrt::sqrt;
