#![forbid(unsafe_code)]

//! Codec facade: parameter validation and the encode/decode pipeline.

use rsfec_core::{CodecConfig, MAX_CODEWORD_LEN};
use tracing::{debug, trace};

use crate::corrector;
use crate::encoder::{encode_systematic, generator_poly, parity};
use crate::error::{CodecError, CodecResult};
use crate::locator::{self, LocatorSolver};
use crate::poly::Poly;

/// Outcome of a successful decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Correction {
    /// Recovered message, the first `n - nsym` codeword symbols.
    pub message: Vec<u8>,
    /// Corrected codeword including repaired parity.
    pub codeword: Vec<u8>,
    /// Codeword indices whose symbol was changed, ascending.
    pub positions: Vec<usize>,
}

impl Correction {
    pub fn corrected_count(&self) -> usize {
        self.positions.len()
    }
}

/// Reed-Solomon codec with a fixed number of parity symbols.
///
/// Holds only `nsym` and its generator polynomial, so a single instance can be shared across
/// threads and used concurrently.
#[derive(Debug, Clone)]
pub struct Codec {
    nsym: usize,
    generator: Poly,
}

impl Codec {
    /// Codec with `nsym` parity symbols. `nsym` must be even and in `2..=254`.
    pub fn new(nsym: usize) -> CodecResult<Self> {
        Self::with_parity_rule(nsym, true)
    }

    /// Build from configuration, honouring `require_even_nsym`.
    pub fn from_config(cfg: &CodecConfig) -> CodecResult<Self> {
        Self::with_parity_rule(cfg.nsym, cfg.require_even_nsym)
    }

    fn with_parity_rule(nsym: usize, require_even: bool) -> CodecResult<Self> {
        if nsym == 0 || nsym >= MAX_CODEWORD_LEN {
            return Err(CodecError::InvalidParameters(format!(
                "nsym must be in 1..={}, got {nsym}",
                MAX_CODEWORD_LEN - 1
            )));
        }
        if require_even && nsym % 2 != 0 {
            return Err(CodecError::InvalidParameters(format!("nsym must be even, got {nsym}")));
        }
        Ok(Self { nsym, generator: generator_poly(nsym) })
    }

    pub fn nsym(&self) -> usize {
        self.nsym
    }

    pub fn generator(&self) -> &Poly {
        &self.generator
    }

    #[must_use]
    pub fn max_message_len(&self) -> usize {
        MAX_CODEWORD_LEN - self.nsym
    }

    /// Unknown-location errors still correctable alongside `erasures` known ones, or `None` if
    /// the erasures alone exceed the parity budget.
    pub fn max_errors(&self, erasures: usize) -> Option<usize> {
        self.nsym.checked_sub(erasures).map(|left| left / 2)
    }

    fn check_message(&self, message: &[u8]) -> CodecResult<()> {
        if message.is_empty() {
            return Err(CodecError::InvalidParameters("message is empty".into()));
        }
        if message.len() > self.max_message_len() {
            return Err(CodecError::InvalidParameters(format!(
                "message of {} bytes exceeds {} with nsym={}",
                message.len(),
                self.max_message_len(),
                self.nsym
            )));
        }
        Ok(())
    }

    fn check_codeword(&self, codeword: &[u8]) -> CodecResult<()> {
        if codeword.len() <= self.nsym || codeword.len() > MAX_CODEWORD_LEN {
            return Err(CodecError::InvalidParameters(format!(
                "codeword length {} must be in {}..={} for nsym={}",
                codeword.len(),
                self.nsym + 1,
                MAX_CODEWORD_LEN,
                self.nsym
            )));
        }
        Ok(())
    }

    /// Systematic codeword `message ‖ parity`.
    pub fn encode(&self, message: &[u8]) -> CodecResult<Vec<u8>> {
        self.check_message(message)?;
        let codeword = encode_systematic(message, &self.generator)?;
        trace!(k = message.len(), nsym = self.nsym, "encoded");
        Ok(codeword)
    }

    /// Only the `nsym` parity symbols for `message`.
    pub fn parity(&self, message: &[u8]) -> CodecResult<Vec<u8>> {
        self.check_message(message)?;
        parity(message, &self.generator)
    }

    /// Whether `codeword` is a valid codeword (all syndromes zero), without correcting it.
    pub fn check(&self, codeword: &[u8]) -> CodecResult<bool> {
        self.check_codeword(codeword)?;
        Ok(locator::is_clean(&locator::syndromes(codeword, self.nsym)))
    }

    /// Correct errors and the given erasures, returning the message and what was changed.
    ///
    /// Erasure positions may be given in any order but must be distinct and inside the
    /// codeword. Succeeds whenever `2·errors + erasures <= nsym`.
    pub fn decode(&self, received: &[u8], erasures: &[usize]) -> CodecResult<Correction> {
        self.decode_inner(received, erasures, false)
    }

    /// Correct only the given erasures, treating any other fault as a failure. Allows
    /// `nsym` erasures without spending syndromes on error search.
    pub fn decode_erasures_only(
        &self,
        received: &[u8],
        erasures: &[usize],
    ) -> CodecResult<Correction> {
        self.decode_inner(received, erasures, true)
    }

    fn decode_inner(
        &self,
        received: &[u8],
        erasures: &[usize],
        erasures_only: bool,
    ) -> CodecResult<Correction> {
        self.check_codeword(received)?;
        let n = received.len();
        let k = n - self.nsym;
        let erasures = normalize_erasures(erasures, n)?;
        if erasures.len() > self.nsym {
            return Err(CodecError::TooManyErrors {
                degree: erasures.len(),
                erasures: erasures.len(),
                nsym: self.nsym,
            });
        }

        let synd = locator::syndromes(received, self.nsym);
        trace!(syndromes = ?synd, "computed syndromes");
        if locator::is_clean(&synd) {
            debug!(n, "codeword clean");
            return Ok(Correction {
                message: received[..k].to_vec(),
                codeword: received.to_vec(),
                positions: Vec::new(),
            });
        }

        let result = self.correct(received, &synd, &erasures, erasures_only);
        match &result {
            Ok(c) => debug!(n, erasures = erasures.len(), corrected = c.corrected_count(), "decoded"),
            Err(e) => debug!(n, erasures = erasures.len(), error = %e, "decode failed"),
        }
        result
    }

    fn correct(
        &self,
        received: &[u8],
        synd: &[u8],
        erasures: &[usize],
        erasures_only: bool,
    ) -> CodecResult<Correction> {
        let n = received.len();
        let seed = locator::erasure_locator(erasures, n);
        let errata_locator = if erasures_only {
            seed
        } else {
            LocatorSolver::new(synd, seed, erasures.len()).solve()?
        };
        let roots = locator::find_roots(&errata_locator, n)?;
        let (codeword, positions) = corrector::correct(received, synd, &errata_locator, &roots)?;

        // Root search and Forney can agree on a wrong answer past the correction bound.
        if !locator::is_clean(&locator::syndromes(&codeword, self.nsym)) {
            return Err(CodecError::CorrectionFailed);
        }

        Ok(Correction {
            message: codeword[..n - self.nsym].to_vec(),
            codeword,
            positions,
        })
    }
}

/// Sorted copy of `erasures`, rejecting duplicates and out-of-range indices.
fn normalize_erasures(erasures: &[usize], n: usize) -> CodecResult<Vec<usize>> {
    let mut sorted = erasures.to_vec();
    sorted.sort_unstable();
    if let Some(&last) = sorted.last() {
        if last >= n {
            return Err(CodecError::InvalidParameters(format!(
                "erasure position {last} outside codeword of length {n}"
            )));
        }
    }
    if let Some(w) = sorted.windows(2).find(|w| w[0] == w[1]) {
        return Err(CodecError::InvalidParameters(format!(
            "duplicate erasure position {}",
            w[0]
        )));
    }
    Ok(sorted)
}
