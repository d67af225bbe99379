//! Configuration management for colony parameters.
//!
//! Strongly-typed structures mapping to an optional `config.toml`. Values
//! are resolved in this order:
//!
//! 1. Default values (hardcoded in `Default` impls)
//! 2. The TOML file given on the command line (overrides defaults)
//! 3. Command-line flags (override the file)
//!
//! ## Example `config.toml`
//!
//! ```toml
//! [colony]
//! ants_per_gen = 20
//! generations = 1000
//! q = 1600.0
//! evaporation = 0.1
//! seed = 42
//! rng_mode = "per_ant"
//! parallel = true
//!
//! [output]
//! route_path = "solution.txt"
//! log_level = "info"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// How ants obtain their random streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RngMode {
    /// Each ant gets its own stream derived from (seed, generation, ant).
    /// Results do not depend on whether ants run in parallel.
    #[default]
    PerAnt,
    /// One stream shared by every ant in spawn order. Always sequential.
    Shared,
}

/// Hyperparameters of the search.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ColonyConfig {
    pub ants_per_gen: usize,
    pub generations: usize,
    /// Total pheromone a single route deposits.
    pub q: f64,
    /// Fraction of every cell's pheromone removed each generation.
    pub evaporation: f64,
    /// Master seed. `None` draws one from entropy at startup.
    pub seed: Option<u64>,
    pub rng_mode: RngMode,
    pub parallel: bool,
    /// Moves + backtracks allowed per ant. `None` uses `2 * width * length`.
    pub step_budget: Option<usize>,
}

impl Default for ColonyConfig {
    fn default() -> Self {
        Self {
            ants_per_gen: 20,
            generations: 100,
            q: 1600.0,
            evaporation: 0.1,
            seed: None,
            rng_mode: RngMode::PerAnt,
            parallel: true,
            step_budget: None,
        }
    }
}

impl ColonyConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.ants_per_gen > 0, "Ants per generation must be positive");
        anyhow::ensure!(self.generations > 0, "Generations must be positive");
        anyhow::ensure!(
            self.q.is_finite() && self.q > 0.0,
            "Q must be a positive finite number"
        );
        anyhow::ensure!(
            (0.0..=1.0).contains(&self.evaporation),
            "Evaporation must be in [0.0, 1.0]"
        );
        if let Some(budget) = self.step_budget {
            anyhow::ensure!(budget > 0, "Step budget must be positive");
        }
        Ok(())
    }

    /// True when ants can be spread over the rayon pool.
    #[must_use]
    pub fn runs_parallel(&self) -> bool {
        self.parallel && self.rng_mode == RngMode::PerAnt
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Where the best route is written in the plain text format.
    pub route_path: String,
    /// Optional JSON run report.
    pub report_path: Option<String>,
    /// Default tracing level when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            route_path: "solution.txt".to_string(),
            report_path: None,
            log_level: "info".to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct AppConfig {
    pub colony: ColonyConfig,
    pub output: OutputConfig,
}

impl AppConfig {
    /// Validates all configuration parameters.
    ///
    /// Returns `Err` describing the first invalid value.
    pub fn validate(&self) -> anyhow::Result<()> {
        self.colony.validate()?;
        anyhow::ensure!(
            !self.output.route_path.trim().is_empty(),
            "Route output path must not be empty"
        );
        anyhow::ensure!(
            matches!(
                self.output.log_level.to_lowercase().as_str(),
                "trace" | "debug" | "info" | "warn" | "error"
            ),
            "Unknown log level '{}'",
            self.output.log_level
        );
        Ok(())
    }

    /// Parses and validates a TOML document.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from `path`, falling back to defaults if the file
    /// does not exist. A file that exists but fails to parse is an error.
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
            .map_err(|e| anyhow::anyhow!("Invalid config {}: {e}", path.display()))
    }

    /// Stable hash of the parameters that influence the search result.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(format!("{:?}", self.colony).as_bytes());
        hex::encode(hasher.finalize())
    }
}
