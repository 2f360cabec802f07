//! Deterministic Context RNG
//!
//! Every prediction draws its random magnitudes from a generator seeded by the
//! mutation's identity, so identical queries always produce identical reports
//! while distinct queries get independent streams.
//!
//! Seed derivation: join the context values with `||`, SHA-256 the string,
//! reduce the digest modulo 2^32.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use sha2::{Digest, Sha256};
use std::fmt::Display;

/// Generator type handed to the factor calculators
pub type ContextRng = ChaCha8Rng;

const SEPARATOR: &str = "||";

/// Derive the 32-bit seed for an ordered tuple of context values
///
/// The digest is read as a big-endian integer, so `digest mod 2^32` is its
/// last four bytes.
pub fn context_seed(parts: &[&dyn Display]) -> u32 {
    let key = parts
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(SEPARATOR);

    let digest = Sha256::digest(key.as_bytes());
    let tail: [u8; 4] = [digest[28], digest[29], digest[30], digest[31]];
    u32::from_be_bytes(tail)
}

/// Fresh generator for a context tuple
pub fn rng_for(parts: &[&dyn Display]) -> ContextRng {
    ChaCha8Rng::seed_from_u64(u64::from(context_seed(parts)))
}

/// Uniform draw from `[low, high)`
pub fn draw<R: Rng + ?Sized>(rng: &mut R, low: f64, high: f64) -> f64 {
    rng.gen_range(low..high)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_context_same_stream() {
        let mut a = rng_for(&[&"EGFR", &"RPQSPVGTGSY", &3, &'A']);
        let mut b = rng_for(&[&"EGFR", &"RPQSPVGTGSY", &3, &'A']);

        for _ in 0..16 {
            assert_eq!(draw(&mut a, 0.0, 100.0), draw(&mut b, 0.0, 100.0));
        }
    }

    #[test]
    fn test_distinct_contexts_diverge() {
        let seed_a = context_seed(&[&"EGFR", &"RPQSPVGTGSY", &3, &'A']);
        let seed_b = context_seed(&[&"EGFR", &"RPQSPVGTGSY", &3, &'G']);
        let seed_c = context_seed(&[&"SRC", &"RPQSPVGTGSY", &3, &'A']);

        assert_ne!(seed_a, seed_b);
        assert_ne!(seed_a, seed_c);
    }

    #[test]
    fn test_separator_matters() {
        // "ab" + "c" must not collide with "a" + "bc"
        assert_ne!(context_seed(&[&"ab", &"c"]), context_seed(&[&"a", &"bc"]));
    }

    #[test]
    fn test_seed_is_digest_tail() {
        let digest = Sha256::digest("x||1".as_bytes());
        let expected = u32::from_be_bytes([digest[28], digest[29], digest[30], digest[31]]);
        assert_eq!(context_seed(&[&"x", &1]), expected);
    }

    #[test]
    fn test_draw_stays_in_range() {
        let mut rng = rng_for(&[&"range"]);
        for _ in 0..1000 {
            let v = draw(&mut rng, -30.0, -10.0);
            assert!((-30.0..-10.0).contains(&v));
        }
    }
}
