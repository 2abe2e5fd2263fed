//! The ten-sided die.
//!
//! Every check in the system rolls exactly one d10. The roll itself is the
//! only nondeterminism in the engine, and it stays at the caller's edge:
//! [`crate::resolution::resolve`] takes the rolled face as a plain value,
//! so callers that want reproducibility seed the RNG and callers that want
//! exhaustive tests just enumerate faces.

use rand::Rng;
use rand::rngs::StdRng;

/// Number of faces on the check die.
pub const D10_SIDES: u8 = 10;

/// Roll the d10: uniform over 1-10, each face at 10%.
pub fn roll_d10(rng: &mut StdRng) -> u8 {
    rng.random_range(1..=D10_SIDES)
}
