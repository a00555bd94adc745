#![forbid(unsafe_code)]

//! GF(2^8) arithmetic with primitive polynomial x^8 + x^4 + x^3 + x^2 + 1 (0x11d) and
//! generator element 2.
//!
//! Log/antilog tables are built on first use and never mutated afterwards. The antilog table
//! is doubled so that `log a + log b` indexes it without a modulo.

use once_cell::sync::Lazy;

use crate::error::{CodecError, CodecResult};

/// Primitive polynomial defining the field, including the x^8 term.
pub const PRIMITIVE_POLY: u16 = 0x11d;

/// Generator element α.
pub const GENERATOR: u8 = 2;

/// Number of nonzero field elements (order of α).
pub const MULTIPLICATIVE_ORDER: usize = 255;

struct Tables {
    log: [u8; 256],
    antilog: [u8; 512],
}

static TABLES: Lazy<Tables> = Lazy::new(|| {
    let mut log = [0u8; 256];
    let mut antilog = [0u8; 512];

    let mut x: u8 = 1;
    for i in 0..MULTIPLICATIVE_ORDER {
        antilog[i] = x;
        antilog[i + MULTIPLICATIVE_ORDER] = x;
        log[x as usize] = i as u8;
        x = mul_no_lut(x, GENERATOR);
    }
    // Entries 510 and 511 are only reached by `log a + log b` when both logs are 255, which
    // never happens; keep them consistent anyway.
    antilog[2 * MULTIPLICATIVE_ORDER] = antilog[0];
    antilog[2 * MULTIPLICATIVE_ORDER + 1] = antilog[1];

    Tables { log, antilog }
});

/// Carry-less multiply reduced by [`PRIMITIVE_POLY`], without tables.
pub fn mul_no_lut(a: u8, b: u8) -> u8 {
    let mut a = a as u16;
    let mut b = b;
    let mut product: u16 = 0;
    while b != 0 {
        if b & 1 != 0 {
            product ^= a;
        }
        b >>= 1;
        a <<= 1;
        if a & 0x100 != 0 {
            a ^= PRIMITIVE_POLY;
        }
    }
    product as u8
}

/// Addition and subtraction are both XOR.
#[inline]
pub fn add(a: u8, b: u8) -> u8 {
    a ^ b
}

#[inline]
pub fn mul(a: u8, b: u8) -> u8 {
    if a == 0 || b == 0 {
        return 0;
    }
    let t = &*TABLES;
    t.antilog[t.log[a as usize] as usize + t.log[b as usize] as usize]
}

#[inline]
pub fn div(a: u8, b: u8) -> CodecResult<u8> {
    if b == 0 {
        return Err(CodecError::DivisionByZero);
    }
    if a == 0 {
        return Ok(0);
    }
    let t = &*TABLES;
    let idx = t.log[a as usize] as usize + MULTIPLICATIVE_ORDER - t.log[b as usize] as usize;
    Ok(t.antilog[idx])
}

#[inline]
pub fn inverse(a: u8) -> CodecResult<u8> {
    if a == 0 {
        return Err(CodecError::NoInverse);
    }
    let t = &*TABLES;
    Ok(t.antilog[MULTIPLICATIVE_ORDER - t.log[a as usize] as usize])
}

/// `a^n`. Negative exponents invert first, so `0^n` with `n < 0` fails with `NoInverse`.
pub fn pow(a: u8, n: i64) -> CodecResult<u8> {
    if a == 0 {
        return match n {
            0 => Ok(1),
            n if n > 0 => Ok(0),
            _ => Err(CodecError::NoInverse),
        };
    }
    let t = &*TABLES;
    let order = MULTIPLICATIVE_ORDER as i64;
    let e = (t.log[a as usize] as i64 * n.rem_euclid(order)) % order;
    Ok(t.antilog[e as usize])
}

/// α^n for any integer `n`.
#[inline]
pub fn exp(n: i64) -> u8 {
    TABLES.antilog[n.rem_euclid(MULTIPLICATIVE_ORDER as i64) as usize]
}

/// Discrete logarithm base α; zero has none.
#[inline]
pub fn log(a: u8) -> CodecResult<u8> {
    if a == 0 {
        return Err(CodecError::NoInverse);
    }
    Ok(TABLES.log[a as usize])
}
