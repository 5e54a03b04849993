//! Trial-division primality test.
//!
//! Generic over the integer type so fixed-width values stay on the fast path
//! while address digits wider than a `u64` are tested as [`BigUint`](num_bigint::BigUint).

use std::ops::Rem;

use num_traits::{One, Zero};

/// Returns `true` when no integer in `[2, n - 1]` divides `n`.
///
/// `0` and `1` have no candidate divisors and are therefore reported as prime.
/// Callers that need the textbook definition must exclude them themselves.
pub fn is_prime<N>(n: N) -> bool
where
    N: Zero + One + PartialOrd,
    for<'a> &'a N: Rem<&'a N, Output = N>,
{
    let mut divisor = N::one() + N::one();
    while divisor < n {
        if (&n % &divisor).is_zero() {
            return false;
        }
        divisor = divisor + N::one();
    }
    true
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
