// ============================================================================
// API Module
// The raw and typed call surfaces over the shared math kernel
// ============================================================================

pub mod equivalence;
pub mod raw;
pub mod typed;

pub use equivalence::{check_sqrt, compare_sqrt, Divergence};
pub use raw::RawSd59x18;
pub use typed::TypedSd59x18;
