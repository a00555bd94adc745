#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Reed-Solomon error and erasure correction over GF(2^8).
//!
//! Codewords are systematic: the message bytes followed by `nsym` parity bytes. A codeword can
//! be at most 255 bytes. Decoding repairs any combination of `t` unknown errors and `e` known
//! erasures with `2t + e <= nsym`.
//!
//! ```rust
//! use rsfec::Codec;
//! let codec = Codec::new(4).expect("valid nsym");
//! let mut codeword = codec.encode(b"HELLO").expect("encode");
//! codeword[1] ^= 0x20;
//! let fixed = codec.decode(&codeword, &[]).expect("decode");
//! assert_eq!(fixed.message, b"HELLO");
//! assert_eq!(fixed.positions, vec![1]);
//! ```

pub mod codec;
pub mod corrector;
pub mod encoder;
pub mod error;
pub mod gf;
pub mod locator;
pub mod poly;

pub use codec::{Codec, Correction};
pub use error::{CodecError, CodecResult};
pub use poly::Poly;
pub use rsfec_core::{CodecConfig, MAX_CODEWORD_LEN};
