use anyhow::{Context, bail};
use bridge::Precision;
use std::env::{self, VarError};

pub use common::Environment;

#[derive(Debug, Clone, PartialEq)]
pub struct DetectionConfig {
    pub environment: Environment,
    pub precision: Precision,
}

impl DetectionConfig {
    /// Load configuration from environment variables with sensible defaults
    pub fn from_env() -> anyhow::Result<Self> {
        let environment = Environment::from_env();

        let precision = match env::var("DETECTION_PRECISION") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("Invalid DETECTION_PRECISION '{raw}'"))?,
            Err(VarError::NotPresent) => Precision::default(),
            Err(VarError::NotUnicode(raw)) => {
                bail!("Invalid DETECTION_PRECISION {raw:?}: not valid UTF-8")
            }
        };

        Ok(Self {
            environment,
            precision,
        })
    }
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            environment: Environment::Development,
            precision: Precision::Float,
        }
    }
}
