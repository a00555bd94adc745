#![forbid(unsafe_code)]

//! Polynomials over GF(2^8).
//!
//! Coefficients are stored highest degree first, so `[1, 0, 3]` is `x^2 + 3`. Leading zeros are
//! kept unless [`Poly::trim`] is called; callers that care about the true degree trim first.

use std::fmt;

use crate::error::{CodecError, CodecResult};
use crate::gf;

#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Poly {
    coeffs: Vec<u8>,
}

impl Poly {
    pub fn new(coeffs: Vec<u8>) -> Self {
        Self { coeffs }
    }

    pub fn from_slice(coeffs: &[u8]) -> Self {
        Self { coeffs: coeffs.to_vec() }
    }

    /// The constant polynomial `1`.
    pub fn one() -> Self {
        Self { coeffs: vec![1] }
    }

    /// The constant polynomial `0`.
    pub fn zero() -> Self {
        Self { coeffs: vec![0] }
    }

    /// `coef · x^degree`.
    pub fn monomial(degree: usize, coef: u8) -> Self {
        let mut coeffs = vec![0u8; degree + 1];
        coeffs[0] = coef;
        Self { coeffs }
    }

    pub fn coeffs(&self) -> &[u8] {
        &self.coeffs
    }

    pub fn into_coeffs(self) -> Vec<u8> {
        self.coeffs
    }

    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Nominal degree, `len - 1`. Includes any leading zeros.
    pub fn degree(&self) -> usize {
        self.coeffs.len().saturating_sub(1)
    }

    /// Coefficient of `x^power`, zero beyond the stored length.
    pub fn coefficient(&self, power: usize) -> u8 {
        if power < self.coeffs.len() {
            self.coeffs[self.coeffs.len() - 1 - power]
        } else {
            0
        }
    }

    pub fn is_zero(&self) -> bool {
        self.coeffs.iter().all(|&c| c == 0)
    }

    /// Drop leading zero coefficients, keeping at least one term.
    pub fn trim(mut self) -> Self {
        let first = self
            .coeffs
            .iter()
            .position(|&c| c != 0)
            .unwrap_or_else(|| self.coeffs.len().saturating_sub(1));
        self.coeffs.drain(..first);
        if self.coeffs.is_empty() {
            self.coeffs.push(0);
        }
        self
    }

    /// Sum of two polynomials, aligned on the constant term.
    pub fn add(&self, other: &Poly) -> Poly {
        let len = self.len().max(other.len());
        let mut out = vec![0u8; len];
        for (i, &c) in self.coeffs.iter().enumerate() {
            out[i + len - self.len()] = c;
        }
        for (i, &c) in other.coeffs.iter().enumerate() {
            out[i + len - other.len()] ^= c;
        }
        Poly::new(out)
    }

    pub fn multiply(&self, other: &Poly) -> Poly {
        if self.is_empty() || other.is_empty() {
            return Poly::default();
        }
        let mut out = vec![0u8; self.len() + other.len() - 1];
        for (j, &q) in other.coeffs.iter().enumerate() {
            if q == 0 {
                continue;
            }
            for (i, &p) in self.coeffs.iter().enumerate() {
                out[i + j] ^= gf::mul(p, q);
            }
        }
        Poly::new(out)
    }

    pub fn scale(&self, c: u8) -> Poly {
        Poly::new(self.coeffs.iter().map(|&p| gf::mul(p, c)).collect())
    }

    /// Multiply by `x^n`.
    pub fn shift(&self, n: usize) -> Poly {
        let mut coeffs = Vec::with_capacity(self.len() + n);
        coeffs.extend_from_slice(&self.coeffs);
        coeffs.resize(self.len() + n, 0);
        Poly::new(coeffs)
    }

    /// Horner evaluation. The empty polynomial evaluates to zero.
    pub fn eval(&self, x: u8) -> u8 {
        self.coeffs.iter().fold(0u8, |acc, &c| gf::mul(acc, x) ^ c)
    }

    /// Long division returning `(quotient, remainder)`.
    ///
    /// The remainder always has `divisor.len() - 1` coefficients. A divisor that is empty or
    /// whose leading coefficient is zero fails with [`CodecError::MalformedDivisor`].
    pub fn divide(&self, divisor: &Poly) -> CodecResult<(Poly, Poly)> {
        let lead = match divisor.coeffs.first() {
            Some(&c) if c != 0 => c,
            _ => return Err(CodecError::MalformedDivisor),
        };
        let rem_len = divisor.len() - 1;

        if self.len() < divisor.len() {
            let mut rem = vec![0u8; rem_len - self.len()];
            rem.extend_from_slice(&self.coeffs);
            return Ok((Poly::zero(), Poly::new(rem)));
        }

        let mut out = self.coeffs.clone();
        let steps = self.len() - rem_len;
        for i in 0..steps {
            let coef = gf::div(out[i], lead).map_err(|_| CodecError::MalformedDivisor)?;
            out[i] = coef;
            if coef == 0 {
                continue;
            }
            for (j, &d) in divisor.coeffs.iter().enumerate().skip(1) {
                if d != 0 {
                    out[i + j] ^= gf::mul(d, coef);
                }
            }
        }
        let remainder = out.split_off(steps);
        Ok((Poly::new(out), Poly::new(remainder)))
    }

    /// Formal derivative. In characteristic 2 the even-power terms vanish, leaving
    /// `Σ a_j x^(j-1)` over odd `j`.
    pub fn derivative(&self) -> Poly {
        let degree = self.degree();
        if degree == 0 {
            return Poly::zero();
        }
        let coeffs = (0..degree)
            .rev()
            .map(|m| if (m + 1) % 2 == 1 { self.coefficient(m + 1) } else { 0 })
            .collect();
        Poly::new(coeffs)
    }
}

impl fmt::Debug for Poly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Poly[")?;
        for (i, c) in self.coeffs.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{c:02x}")?;
        }
        write!(f, "]")
    }
}

impl From<Vec<u8>> for Poly {
    fn from(coeffs: Vec<u8>) -> Self {
        Poly::new(coeffs)
    }
}
