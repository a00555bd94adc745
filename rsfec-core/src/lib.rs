#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod logging;

pub use config::{CodecConfig, MAX_CODEWORD_LEN};
pub use error::{RsfecError, RsfecResult};
