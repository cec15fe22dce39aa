//! Graph construction settings.
//!
//! Values are layered with `figment`, later layers winning:
//!
//! 1. built-in defaults
//! 2. an optional TOML file
//! 3. `TRELLIS_`-prefixed environment variables (`TRELLIS_REPRESENTATION=matrix`)
//!
//! ```toml
//! representation = "matrix"
//! undirected = true
//! max_matrix_nodes = 2048   # optional; unlimited when absent
//! ```

use std::path::Path;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::graph::{AnyGraph, Representation};
use crate::node::NodeId;

/// Prefix of the environment variables read by [`GraphConfig::load`].
pub const ENV_PREFIX: &str = "TRELLIS_";

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A provider failed or a value has the wrong type.
    #[error("Failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    /// Values parsed but are not usable.
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Load(Box::new(err))
    }
}

/// How graphs are built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Storage representation.
    pub representation: Representation,
    /// Whether edges are symmetric.
    pub undirected: bool,
    /// Largest node count accepted for the O(V²) matrix representation.
    /// `None` leaves the size bounded by memory only.
    pub max_matrix_nodes: Option<usize>,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            representation: Representation::List,
            undirected: false,
            max_matrix_nodes: None,
        }
    }
}

impl GraphConfig {
    /// Loads defaults, then `path` if it exists, then the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a value cannot be parsed or fails validation.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let config: Self = Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()?;
        config.validate()?;

        tracing::info!(
            path = %path.display(),
            representation = ?config.representation,
            undirected = config.undirected,
            "graph configuration loaded"
        );
        Ok(config)
    }

    /// Parses a TOML document on top of the defaults. The environment is
    /// not consulted.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is malformed or fails validation.
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        let config: Self = Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::string(toml))
            .extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values that deserialize fine but make no sense.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] describing the first bad value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_matrix_nodes == Some(0) {
            return Err(ConfigError::Invalid(
                "max_matrix_nodes must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Builds an empty graph over `nodes` with the configured shape.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if a matrix would exceed a
    /// configured `max_matrix_nodes`.
    pub fn build<W: Clone>(&self, nodes: Vec<NodeId>) -> Result<AnyGraph<W>, ConfigError> {
        if let Some(limit) = self.max_matrix_nodes {
            if self.representation == Representation::Matrix && nodes.len() > limit {
                return Err(ConfigError::Invalid(format!(
                    "{} nodes exceed max_matrix_nodes ({limit})",
                    nodes.len()
                )));
            }
        }
        Ok(AnyGraph::with_representation(
            self.representation,
            nodes,
            self.undirected,
        ))
    }
}

impl From<ConfigError> for crate::Error {
    fn from(err: ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}
