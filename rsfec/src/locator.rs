#![forbid(unsafe_code)]

//! Syndromes, error/erasure locator and root search.
//!
//! A fault at codeword index `idx` of an `n`-symbol codeword sits on the `x^(n-1-idx)` term, so
//! its locator value is `X = α^(n-1-idx)` and the locator polynomial has a root at `X^-1`.

use tracing::trace;

use crate::error::{CodecError, CodecResult};
use crate::gf;
use crate::poly::Poly;

/// `S_i = r(α^i)` for `i` in `0..nsym`, lowest index first.
#[must_use]
pub fn syndromes(received: &[u8], nsym: usize) -> Vec<u8> {
    let r = Poly::from_slice(received);
    (0..nsym).map(|i| r.eval(gf::exp(i as i64))).collect()
}

/// A codeword is error-free iff every syndrome is zero.
pub fn is_clean(syndromes: &[u8]) -> bool {
    syndromes.iter().all(|&s| s == 0)
}

/// `S(x) = Σ S_i x^i` in highest-degree-first order.
pub fn syndrome_poly(syndromes: &[u8]) -> Poly {
    Poly::new(syndromes.iter().rev().copied().collect())
}

/// Locator value `X = α^(n-1-idx)` of codeword index `idx`. Only meaningful for `idx < n`;
/// larger indices wrap onto negative powers of α instead of underflowing.
pub(crate) fn locator_value(idx: usize, n: usize) -> u8 {
    gf::exp(n as i64 - 1 - idx as i64)
}

/// `Γ(x) = Π (1 + X_j x)` over the erasure positions. `1` when there are none.
pub fn erasure_locator(positions: &[usize], n: usize) -> Poly {
    positions.iter().fold(Poly::one(), |acc, &idx| {
        acc.multiply(&Poly::new(vec![locator_value(idx, n), 1]))
    })
}

/// Erasure-aware Berlekamp–Massey, one syndrome per [`step`](Self::step).
///
/// Seeded with the erasure locator and starting `e` syndromes in, so known erasures count as
/// already-located faults and only `nsym - e` syndromes are spent discovering errors. With no
/// erasures the seed is `1` and this is the classical algorithm.
#[derive(Debug, Clone)]
pub struct LocatorSolver<'a> {
    syndromes: &'a [u8],
    erasures: usize,
    /// Current connection polynomial Λ.
    locator: Poly,
    /// Last Λ before a length change, normalized by its discrepancy and shifted by x once per
    /// step.
    previous: Poly,
    /// Linear complexity L of `locator`.
    length: usize,
    step: usize,
}

impl<'a> LocatorSolver<'a> {
    /// `seed` must be the erasure locator of `erasures` positions.
    pub fn new(syndromes: &'a [u8], seed: Poly, erasures: usize) -> Self {
        Self {
            syndromes,
            erasures,
            previous: seed.clone(),
            locator: seed,
            length: erasures,
            step: 0,
        }
    }

    pub fn locator(&self) -> &Poly {
        &self.locator
    }

    /// Linear complexity so far.
    pub fn length(&self) -> usize {
        self.length
    }

    pub fn is_done(&self) -> bool {
        self.erasures + self.step >= self.syndromes.len()
    }

    /// Index of the syndrome consumed by the next step.
    fn syndrome_index(&self) -> usize {
        self.erasures + self.step
    }

    /// `Δ = Σ Λ_j S_(k-j)` for the next syndrome index `k`.
    pub fn discrepancy(&self) -> u8 {
        let k = self.syndrome_index();
        (0..=self.locator.degree().min(k)).fold(0u8, |acc, j| {
            acc ^ gf::mul(self.locator.coefficient(j), self.syndromes[k - j])
        })
    }

    /// Consume one syndrome. No-op once every syndrome has been used.
    pub fn step(&mut self) -> CodecResult<()> {
        if self.is_done() {
            return Ok(());
        }
        let k = self.syndrome_index();
        let delta = self.discrepancy();
        self.previous = self.previous.shift(1);

        if delta != 0 {
            let correction = self.previous.scale(delta);
            if 2 * self.length <= k + self.erasures {
                let normalized = self.locator.scale(gf::inverse(delta)?);
                self.locator = self.locator.add(&correction);
                self.previous = normalized;
                self.length = k + 1 + self.erasures - self.length;
            } else {
                self.locator = self.locator.add(&correction);
            }
        }
        trace!(k, delta, length = self.length, locator = ?self.locator, "locator step");
        self.step += 1;
        Ok(())
    }

    /// Run the remaining steps and return the trimmed locator.
    ///
    /// Fails with [`CodecError::TooManyErrors`] when the locator implies more faults than the
    /// parity budget allows (`2·errors + erasures > nsym`) or has fewer roots than erasures.
    pub fn solve(mut self) -> CodecResult<Poly> {
        while !self.is_done() {
            self.step()?;
        }
        let nsym = self.syndromes.len();
        let locator = self.locator.trim();
        let degree = locator.degree();
        if degree < self.erasures || (degree - self.erasures) * 2 + self.erasures > nsym {
            return Err(CodecError::TooManyErrors {
                degree,
                erasures: self.erasures,
                nsym,
            });
        }
        Ok(locator)
    }
}

/// Codeword indices whose locator value is a root of `locator`, ascending.
///
/// Brute-force search over all `n` positions. Fails with
/// [`CodecError::UncorrectableCodeword`] unless exactly `degree` roots are found.
pub fn find_roots(locator: &Poly, n: usize) -> CodecResult<Vec<usize>> {
    let expected = locator.degree();
    let mut positions: Vec<usize> = (0..n)
        .filter(|&p| locator.eval(gf::exp(-(p as i64))) == 0)
        .map(|p| n - 1 - p)
        .collect();
    positions.sort_unstable();
    if positions.len() != expected {
        return Err(CodecError::UncorrectableCodeword {
            expected,
            found: positions.len(),
        });
    }
    Ok(positions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::{encode_systematic, generator_poly};

    fn codeword(nsym: usize) -> Vec<u8> {
        encode_systematic(b"locator tests", &generator_poly(nsym)).unwrap()
    }

    #[test]
    fn locator_values_run_from_last_index() {
        assert_eq!(locator_value(9, 10), 1);
        assert_eq!(locator_value(0, 10), gf::exp(9));
        assert_eq!(locator_value(10, 5), gf::exp(-6));
    }

    #[test]
    fn clean_codeword_has_zero_syndromes() {
        let cw = codeword(6);
        assert!(is_clean(&syndromes(&cw, 6)));
    }

    #[test]
    fn single_error_syndromes_are_geometric() {
        let mut cw = codeword(6);
        let n = cw.len();
        cw[3] ^= 0x5a;
        let s = syndromes(&cw, 6);
        let x = locator_value(3, n);
        for i in 0..6 {
            assert_eq!(s[i], gf::mul(0x5a, gf::pow(x, i as i64).unwrap()));
        }
    }

    #[test]
    fn solver_finds_single_error_locator() {
        let mut cw = codeword(4);
        let n = cw.len();
        cw[7] ^= 0x11;
        let s = syndromes(&cw, 4);
        let locator = LocatorSolver::new(&s, Poly::one(), 0).solve().unwrap();
        assert_eq!(locator.coeffs(), &[locator_value(7, n), 1]);
        assert_eq!(find_roots(&locator, n).unwrap(), vec![7]);
    }

    #[test]
    fn erasure_seed_is_kept_when_only_erasures() {
        let mut cw = codeword(4);
        let n = cw.len();
        cw[0] ^= 0x01;
        cw[9] ^= 0x80;
        let s = syndromes(&cw, 4);
        let seed = erasure_locator(&[0, 9], n);
        let locator = LocatorSolver::new(&s, seed.clone(), 2).solve().unwrap();
        assert_eq!(locator, seed);
        assert_eq!(find_roots(&locator, n).unwrap(), vec![0, 9]);
    }

    #[test]
    fn solver_combines_erasures_and_errors() {
        let mut cw = codeword(6);
        let n = cw.len();
        cw[2] ^= 0x33; // erasure
        cw[5] ^= 0x44; // erasure
        cw[11] ^= 0x55; // unknown
        let s = syndromes(&cw, 6);
        let solver = LocatorSolver::new(&s, erasure_locator(&[2, 5], n), 2);
        let locator = solver.solve().unwrap();
        assert_eq!(locator.degree(), 3);
        assert_eq!(find_roots(&locator, n).unwrap(), vec![2, 5, 11]);
    }

    #[test]
    fn stepping_is_bounded_by_syndromes() {
        let s = [1u8, 2, 3, 4];
        let mut solver = LocatorSolver::new(&s, erasure_locator(&[1], 10), 1);
        let mut steps = 0;
        while !solver.is_done() {
            solver.step().unwrap();
            steps += 1;
        }
        assert_eq!(steps, 3);
        solver.step().unwrap();
        assert!(solver.is_done());
    }

    #[test]
    fn root_count_mismatch_is_uncorrectable() {
        // X = α^200 lies outside a 10-symbol codeword.
        let locator = Poly::new(vec![gf::exp(200), 1]);
        assert_eq!(
            find_roots(&locator, 10),
            Err(CodecError::UncorrectableCodeword { expected: 1, found: 0 })
        );
    }
}
