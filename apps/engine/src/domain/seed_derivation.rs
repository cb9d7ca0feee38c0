//! RNG seed derivation for deterministic quiz attempts.
//!
//! A session draws one base seed from entropy at creation; every shuffle
//! after that derives from it, so the whole session is replayable from a
//! single number.

/// Derive the shuffle seed for one attempt within a session.
///
/// Same session seed + attempt number always produces the same shuffle.
/// Wrapping arithmetic keeps the derivation total over the full u64 range.
pub fn derive_attempt_seed(session_seed: u64, attempt_no: u32) -> u64 {
    session_seed
        .wrapping_add(u64::from(attempt_no).wrapping_mul(1_000_000))
        .wrapping_add(1)
}
