#![forbid(unsafe_code)]

//! Error evaluator and Forney magnitudes.

use crate::error::{CodecError, CodecResult};
use crate::gf;
use crate::locator::{locator_value, syndrome_poly};
use crate::poly::Poly;

/// `Ω(x) = S(x)·Λ(x) mod x^nsym`, the key-equation evaluator.
pub fn error_evaluator(syndromes: &[u8], locator: &Poly) -> CodecResult<Poly> {
    let nsym = syndromes.len();
    let product = syndrome_poly(syndromes).multiply(locator);
    let (_, remainder) = product.divide(&Poly::monomial(nsym, 1))?;
    Ok(remainder)
}

/// Magnitude `e = X·Ω(X⁻¹) / Λ'(X⁻¹)` at each position.
///
/// A vanishing derivative means the locator has a repeated root, which no valid
/// correction produces; it is reported as [`CodecError::CorrectionFailed`].
pub fn magnitudes(
    syndromes: &[u8],
    locator: &Poly,
    positions: &[usize],
    n: usize,
) -> CodecResult<Vec<u8>> {
    let evaluator = error_evaluator(syndromes, locator)?;
    let derivative = locator.derivative();

    positions
        .iter()
        .map(|&idx| {
            let x = locator_value(idx, n);
            let x_inv = gf::inverse(x)?;
            let denom = derivative.eval(x_inv);
            if denom == 0 {
                return Err(CodecError::CorrectionFailed);
            }
            gf::div(gf::mul(x, evaluator.eval(x_inv)), denom)
        })
        .collect()
}

/// Apply the magnitudes for `positions` to a copy of `received`.
///
/// Returns the patched codeword and the positions whose symbol actually changed, ascending.
pub fn correct(
    received: &[u8],
    syndromes: &[u8],
    locator: &Poly,
    positions: &[usize],
) -> CodecResult<(Vec<u8>, Vec<usize>)> {
    let n = received.len();
    let values = magnitudes(syndromes, locator, positions, n)?;
    let mut codeword = received.to_vec();
    let mut changed = Vec::with_capacity(positions.len());
    for (&idx, &e) in positions.iter().zip(&values) {
        if e != 0 {
            codeword[idx] ^= e;
            changed.push(idx);
        }
    }
    Ok((codeword, changed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::{encode_systematic, generator_poly};
    use crate::locator::{erasure_locator, find_roots, is_clean, syndromes};

    #[test]
    fn evaluator_of_single_error_is_its_magnitude() {
        let cw = encode_systematic(b"forney", &generator_poly(4)).unwrap();
        let n = cw.len();
        let mut rx = cw.clone();
        rx[2] ^= 0xc3;
        let s = syndromes(&rx, 4);
        let locator = erasure_locator(&[2], n);
        let omega = error_evaluator(&s, &locator).unwrap();
        assert_eq!(omega.coefficient(0), 0xc3);
        assert!(omega.coeffs()[..omega.len() - 1].iter().all(|&c| c == 0));
    }

    #[test]
    fn known_positions_are_repaired() {
        let cw = encode_systematic(b"magnitude check", &generator_poly(8)).unwrap();
        let n = cw.len();
        let mut rx = cw.clone();
        for (idx, delta) in [(0usize, 0x01u8), (4, 0xfe), (9, 0x3c), (n - 1, 0x77)] {
            rx[idx] ^= delta;
        }
        let s = syndromes(&rx, 8);
        let locator = erasure_locator(&[0, 4, 9, n - 1], n);
        let positions = find_roots(&locator, n).unwrap();
        let (fixed, changed) = correct(&rx, &s, &locator, &positions).unwrap();
        assert_eq!(fixed, cw);
        assert_eq!(changed, vec![0, 4, 9, n - 1]);
        assert!(is_clean(&syndromes(&fixed, 8)));
    }

    #[test]
    fn intact_erasure_is_not_reported() {
        let cw = encode_systematic(b"intact", &generator_poly(4)).unwrap();
        let n = cw.len();
        let mut rx = cw.clone();
        rx[1] ^= 0x42;
        let s = syndromes(&rx, 4);
        let locator = erasure_locator(&[1, 3], n);
        let positions = find_roots(&locator, n).unwrap();
        let (fixed, changed) = correct(&rx, &s, &locator, &positions).unwrap();
        assert_eq!(fixed, cw);
        assert_eq!(changed, vec![1]);
    }
}
