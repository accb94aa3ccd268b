//! Fixed-point-free random pairing over a set of opaque ids.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::errors::domain::{DomainError, ValidationKind};

/// Retry budget for rejection sampling. A uniform random permutation of
/// n >= 3 elements is fixed-point-free with probability close to 1/e, and
/// exactly 0.5 for n == 2, so 100 attempts leave a failure probability of
/// at most 0.5^100.
pub const MAX_ATTEMPTS: usize = 100;

/// Build a derangement of `ids`: a pairing `(santa, recipient)` where the
/// recipients are a permutation of `ids` and nobody is paired with
/// themselves.
///
/// Rejection sampling: shuffle uniformly, accept the first permutation with
/// no fixed point. Exact and unbiased over all derangements; the RNG is
/// injected so callers decide between entropy and a seeded stream.
///
/// Fewer than two ids admit no derangement; that and an exhausted attempt
/// budget both report `ValidationKind::DrawUnsatisfiable`.
pub fn build_derangement<T, R>(ids: &[T], rng: &mut R) -> Result<Vec<(T, T)>, DomainError>
where
    T: Copy + PartialEq,
    R: Rng + ?Sized,
{
    if ids.len() < 2 {
        return Err(DomainError::validation(
            ValidationKind::DrawUnsatisfiable,
            format!("a derangement needs at least 2 ids, got {}", ids.len()),
        ));
    }

    let mut shuffled: Vec<T> = ids.to_vec();
    for _ in 0..MAX_ATTEMPTS {
        shuffled.shuffle(rng);
        if ids.iter().zip(shuffled.iter()).all(|(a, b)| a != b) {
            return Ok(ids.iter().copied().zip(shuffled.iter().copied()).collect());
        }
    }

    Err(DomainError::validation(
        ValidationKind::DrawUnsatisfiable,
        format!("no fixed-point-free permutation within {MAX_ATTEMPTS} attempts"),
    ))
}
