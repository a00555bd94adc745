#![forbid(unsafe_code)]

//! Codec configuration handling. Parses a TOML file into a strongly-typed structure shared by
//! the codec and its callers.

use serde::Deserialize;
use std::{fs, path::Path};

use crate::RsfecError;

/// Longest codeword representable with 8-bit symbols.
pub const MAX_CODEWORD_LEN: usize = 255;

/// Environment variable naming the configuration file read by [`CodecConfig::load_or_default`].
pub const CONFIG_ENV: &str = "RSFEC_CONFIG";

const DEFAULT_CONFIG_PATH: &str = "rsfec.toml";

/// Configuration of a Reed-Solomon codec instance.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Number of parity symbols appended to every message.
    #[serde(default = "default_nsym")]
    pub nsym: usize,

    /// Only accept an even number of parity symbols. Disabling this admits any
    /// `1..=254` parity count.
    pub require_even_nsym: bool,

    /// Logging verbosity (`error`, `warn`, `info`, `debug`, `trace`).
    pub log_level: Option<String>,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            nsym: default_nsym(),
            require_even_nsym: true,
            log_level: Some("info".to_string()),
        }
    }
}

fn default_nsym() -> usize {
    10
}

impl CodecConfig {
    /// Build a configuration with the given parity count and defaults elsewhere.
    pub fn with_nsym(nsym: usize) -> Self {
        Self { nsym, ..Self::default() }
    }

    /// Parse and validate a configuration from TOML text.
    pub fn from_toml_str(data: &str) -> crate::RsfecResult<Self> {
        let cfg = toml::from_str::<CodecConfig>(data).map_err(RsfecError::ConfigParse)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load a configuration file from the given path.
    pub fn from_file<P: AsRef<Path>>(path: P) -> crate::RsfecResult<Self> {
        let data = fs::read_to_string(&path).map_err(RsfecError::from)?;
        Self::from_toml_str(&data)
    }

    /// Read a codec configuration from `path`; shorthand for [`CodecConfig::from_file`].
    pub fn load<P: AsRef<Path>>(path: P) -> crate::RsfecResult<Self> {
        Self::from_file(path)
    }

    /// Load the file named by `RSFEC_CONFIG` (or `rsfec.toml`), falling back to defaults when
    /// it is missing or unreadable.
    pub fn load_or_default() -> Self {
        let path = std::env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.into());
        match Self::from_file(&path) {
            Ok(cfg) => cfg,
            Err(e) => {
                tracing::debug!(path = %path, error = %e, "using default codec config");
                Self::default()
            }
        }
    }

    /// Check that `nsym` leaves room for at least one message symbol and obeys the parity rule.
    pub fn validate(&self) -> crate::RsfecResult<()> {
        if self.nsym == 0 || self.nsym >= MAX_CODEWORD_LEN {
            return Err(RsfecError::InvalidConfig(format!(
                "nsym must be in 1..={}, got {}",
                MAX_CODEWORD_LEN - 1,
                self.nsym
            )));
        }
        if self.require_even_nsym && self.nsym % 2 != 0 {
            return Err(RsfecError::InvalidConfig(format!(
                "nsym must be even, got {}",
                self.nsym
            )));
        }
        Ok(())
    }

    /// Largest message accepted by a codec built from this configuration.
    pub fn max_message_len(&self) -> usize {
        MAX_CODEWORD_LEN.saturating_sub(self.nsym)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_fill_missing_fields() {
        let cfg = CodecConfig::from_toml_str("log_level = \"debug\"").expect("parse");
        assert_eq!(cfg.nsym, 10);
        assert!(cfg.require_even_nsym);
        assert_eq!(cfg.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn odd_nsym_rejected_unless_relaxed() {
        assert!(matches!(
            CodecConfig::from_toml_str("nsym = 5"),
            Err(RsfecError::InvalidConfig(_))
        ));
        let cfg = CodecConfig::from_toml_str("nsym = 5\nrequire_even_nsym = false").expect("parse");
        assert_eq!(cfg.nsym, 5);
    }

    #[test]
    fn nsym_bounds() {
        for bad in [0usize, 255, 300] {
            let cfg = CodecConfig { nsym: bad, require_even_nsym: false, log_level: None };
            assert!(cfg.validate().is_err(), "nsym={bad} should be rejected");
        }
        assert!(CodecConfig::with_nsym(254).validate().is_ok());
        assert_eq!(CodecConfig::with_nsym(254).max_message_len(), 1);
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        assert!(matches!(
            CodecConfig::from_toml_str("nsym = \"many\""),
            Err(RsfecError::ConfigParse(_))
        ));
    }

    #[test]
    fn from_file_reads_toml() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        writeln!(file, "nsym = 32").expect("write");
        let cfg = CodecConfig::from_file(file.path()).expect("load");
        assert_eq!(cfg.nsym, 32);
        assert_eq!(cfg.max_message_len(), 223);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = CodecConfig::load("/definitely/not/here/rsfec.toml").unwrap_err();
        assert!(matches!(err, RsfecError::Io(_)));
    }
}
