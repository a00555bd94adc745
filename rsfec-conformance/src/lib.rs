//! Conformance helpers shared by the rsfec integration tests.

pub mod fault_injector;

pub use fault_injector::{corrupt, FaultInjector, FaultPattern};

/// Deterministic message of `len` bytes that varies with `seed`.
pub fn sample_message(len: usize, seed: u8) -> Vec<u8> {
    (0..len).map(|i| (i as u8).wrapping_mul(37).wrapping_add(seed)).collect()
}
