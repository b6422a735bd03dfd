//! Configuration for hasher and comparator construction.
//!
//! Configuration only selects construction-time knobs — encoding mode,
//! fingerprint algorithm, bit-counting strategy. Instances built from a
//! config stay immutable for their lifetime.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::distance::BitCounter;
use crate::encoding::Mode;
use crate::error::{CoreError, CoreResult};

/// Fingerprint algorithm selector.
///
/// Concrete implementations live in the backend crate; this enum is the
/// configuration-level name for them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Gradient (difference) hash over row-adjacent pixel pairs.
    #[default]
    Gradient,
    /// Mean hash: each sample compared against the global mean.
    Mean,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Gradient => write!(f, "gradient"),
            Algorithm::Mean => write!(f, "mean"),
        }
    }
}

/// Construction-time configuration for hashing and comparison.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashConfig {
    /// Encoding mode for produced hashes.
    #[serde(default)]
    pub mode: Mode,
    /// Fingerprint algorithm to build.
    #[serde(default)]
    pub algorithm: Algorithm,
    /// Bit-counting strategy for the distance engine.
    #[serde(default)]
    pub bit_counter: BitCounter,
}

impl HashConfig {
    /// Load configuration from files and environment.
    ///
    /// Sources are layered in order:
    /// 1. `config/default.toml` (base settings)
    /// 2. `config/{IMGPRINT_ENV}.toml` (environment-specific)
    /// 3. Environment variables with `IMGPRINT_` prefix
    pub fn load() -> CoreResult<Self> {
        let env = std::env::var("IMGPRINT_ENV").unwrap_or_else(|_| "development".to_string());

        let builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", env)).required(false))
            .add_source(config::Environment::with_prefix("IMGPRINT").separator("__"));

        let config: HashConfig = builder.build()?.try_deserialize()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CoreError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        toml::from_str(&content)
            .map_err(|e| CoreError::Config(format!("failed to parse {}: {}", path.display(), e)))
    }
}
