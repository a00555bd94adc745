//! Fault injection for codec conformance tests.
//!
//! Corrupts codewords at random distinct positions with nonzero XOR deltas and records which
//! positions were declared as erasures and which were left for the decoder to find.

use rand::rngs::StdRng;
use rand::seq::index::sample;
use rand::{Rng, SeedableRng};
use tracing::trace;

/// Positions touched by one injection. Both lists are ascending.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FaultPattern {
    /// Corrupted positions the decoder is not told about.
    pub errors: Vec<usize>,
    /// Corrupted positions passed to the decoder as erasures.
    pub erasures: Vec<usize>,
}

impl FaultPattern {
    /// Every corrupted position, ascending.
    pub fn all(&self) -> Vec<usize> {
        let mut all: Vec<usize> = self.errors.iter().chain(&self.erasures).copied().collect();
        all.sort_unstable();
        all
    }

    /// Parity symbols consumed: two per error, one per erasure.
    pub fn cost(&self) -> usize {
        2 * self.errors.len() + self.erasures.len()
    }
}

/// Seeded source of corruptions.
#[derive(Debug)]
pub struct FaultInjector {
    rng: StdRng,
}

impl FaultInjector {
    pub fn seeded(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }

    /// Corrupt `errors + erasures` distinct positions of `codeword`.
    ///
    /// Panics if the codeword is shorter than the number of requested faults.
    pub fn inject(
        &mut self,
        codeword: &[u8],
        errors: usize,
        erasures: usize,
    ) -> (Vec<u8>, FaultPattern) {
        let positions = sample(&mut self.rng, codeword.len(), errors + erasures).into_vec();
        let mut received = codeword.to_vec();
        for &p in &positions {
            received[p] ^= self.rng.gen_range(1..=255u8);
        }

        let mut erased = positions[..erasures].to_vec();
        let mut unknown = positions[erasures..].to_vec();
        erased.sort_unstable();
        unknown.sort_unstable();
        trace!(errors = ?unknown, erasures = ?erased, "injected faults");
        (received, FaultPattern { errors: unknown, erasures: erased })
    }
}

/// XOR every position in `positions` with `delta`.
pub fn corrupt(codeword: &[u8], positions: &[usize], delta: u8) -> Vec<u8> {
    let mut out = codeword.to_vec();
    for &p in positions {
        out[p] ^= delta;
    }
    out
}
