#![forbid(unsafe_code)]

//! Generator polynomial and systematic encoding.

use crate::error::CodecResult;
use crate::gf;
use crate::poly::Poly;

/// `g(x) = (x - α^0)(x - α^1)…(x - α^(nsym-1))`, monic of degree `nsym`.
#[must_use]
pub fn generator_poly(nsym: usize) -> Poly {
    (0..nsym).fold(Poly::one(), |g, i| {
        g.multiply(&Poly::new(vec![1, gf::exp(i as i64)]))
    })
}

/// Parity symbols for `message`: the remainder of `message · x^nsym` divided by `generator`.
///
/// The quotient is discarded; the dividend's message part is never written back, so the
/// message itself appears unchanged in the codeword.
pub fn parity(message: &[u8], generator: &Poly) -> CodecResult<Vec<u8>> {
    let nsym = generator.degree();
    let padded = Poly::from_slice(message).shift(nsym);
    let (_, remainder) = padded.divide(generator)?;
    Ok(remainder.into_coeffs())
}

/// `message ‖ parity`.
pub fn encode_systematic(message: &[u8], generator: &Poly) -> CodecResult<Vec<u8>> {
    let parity = parity(message, generator)?;
    let mut codeword = Vec::with_capacity(message.len() + parity.len());
    codeword.extend_from_slice(message);
    codeword.extend_from_slice(&parity);
    Ok(codeword)
}
