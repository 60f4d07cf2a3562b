// SPDX-License-Identifier: MIT

//! Simulation parameter files.
//!
//! Parameters live in a flat TOML table. Every key is optional and falls
//! back to the default; unknown keys are rejected so typos surface early.
//!
//! ```toml
//! alpha = 1.1
//! beta = 0.4
//! gamma = 0.4
//! delta = 0.1
//! prey_initial = 10.0
//! predator_initial = 5.0
//! steps = 200
//! dt = 0.05
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::lotka_volterra::SimulationParams;

/// Failure to obtain simulation parameters from a file or string.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid simulation parameters: {0}")]
    Parse(#[from] toml::de::Error),
}

impl SimulationParams {
    /// Parse parameters from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML, wrongly typed
    /// values or unknown keys.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Read parameters from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read and
    /// [`ConfigError::Parse`] if its contents are invalid.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        let params = Self::from_toml_str(&text)?;
        debug!(path = %path.display(), ?params, "loaded simulation parameters");
        Ok(params)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn empty_text_gives_defaults() {
        assert_eq!(SimulationParams::from_toml_str("").unwrap(), SimulationParams::default());
    }

    #[test]
    fn partial_table_overrides_some_fields() {
        let params = SimulationParams::from_toml_str("alpha = 2.5\nsteps = 10\n").unwrap();
        assert_eq!(
            params,
            SimulationParams { alpha: 2.5, steps: 10, ..SimulationParams::default() }
        );
    }

    #[test]
    fn full_table() {
        let text = r"
            alpha = 1.0
            beta = 0.0
            gamma = 0.0
            delta = 0.0
            prey_initial = 10.0
            predator_initial = 5.0
            steps = 5
            dt = 0.1
        ";
        let params = SimulationParams::from_toml_str(text).unwrap();
        assert_eq!(params.steps, 5);
        assert_eq!(params.dt, 0.1);
        assert_eq!(params.beta, 0.0);
    }

    #[test]
    fn unknown_key_is_rejected() {
        let err = SimulationParams::from_toml_str("alhpa = 1.0").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)), "{err}");
    }

    #[test]
    fn wrong_type_is_rejected() {
        assert!(SimulationParams::from_toml_str("steps = -1").is_err());
        assert!(SimulationParams::from_toml_str("dt = \"fast\"").is_err());
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "gamma = 0.7").unwrap();
        let params = SimulationParams::load(file.path()).unwrap();
        assert_eq!(params.gamma, 0.7);
        assert_eq!(params.alpha, SimulationParams::default().alpha);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = SimulationParams::load("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/definitely/not/here.toml"), "{err}");
    }

    #[test]
    fn serialized_params_load_back() {
        let original = SimulationParams { steps: 42, dt: 0.25, ..SimulationParams::default() };
        let text = toml::to_string(&original).unwrap();
        assert_eq!(SimulationParams::from_toml_str(&text).unwrap(), original);
    }
}
