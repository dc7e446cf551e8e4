// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod fixed_point_math;

pub use fixed_point_math::FixedPointMath;
