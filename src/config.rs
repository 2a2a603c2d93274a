//! # Connector Configuration
//!
//! Everything the checkpoint store and batch emitter need at construction
//! time: application and stream names, the durable checkpoint backend, and
//! the blob store destination.
//!
//! Configuration can be built three ways:
//!
//! - [`ConnectorConfig::default`] for local development and tests
//! - [`ConnectorConfig::from_env`] for `CONNECTOR_*` overrides on top of defaults
//! - [`ConnectorConfig::load`] for a layered TOML file plus `CONNECTOR__*` variables
//!
//! ```rust,no_run
//! use connector_core::config::ConnectorConfig;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ConnectorConfig::load(Some("config/connector.toml"))?;
//! println!("checkpointing {} for {}", config.stream_name, config.application_name);
//! # Ok(())
//! # }
//! ```

use crate::error::{ConnectorError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Root configuration for one application consuming one stream
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ConnectorConfig {
    /// Consumer application name, first segment of every checkpoint key
    pub application_name: String,

    /// Name of the stream being consumed
    pub stream_name: String,

    /// Durable checkpoint backend
    pub checkpoint: CheckpointConfig,

    /// Batch emission destination
    pub emitter: EmitterConfig,
}

/// Durable checkpoint backend configuration
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct CheckpointConfig {
    pub backend: CheckpointBackend,
    pub redis: RedisConfig,
}

/// Which key-value service holds checkpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckpointBackend {
    #[default]
    Memory,
    Redis,
}

impl FromStr for CheckpointBackend {
    type Err = ConnectorError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "redis" => Ok(Self::Redis),
            other => Err(ConnectorError::Configuration(format!(
                "Unknown checkpoint backend: {other}"
            ))),
        }
    }
}

/// Redis connection settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RedisConfig {
    pub url: String,
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            url: "redis://localhost:6379".to_string(),
        }
    }
}

/// Blob store destination for emitted batches
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct EmitterConfig {
    /// Bucket (or container) receiving batch objects
    pub bucket: String,

    pub backend: BlobBackend,

    /// Parent directory of the bucket when using the filesystem backend
    pub root_dir: PathBuf,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            bucket: "connector-batches".to_string(),
            backend: BlobBackend::default(),
            root_dir: PathBuf::from("data"),
        }
    }
}

/// Which object store receives emitted batches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BlobBackend {
    #[default]
    Memory,
    Filesystem,
}

impl FromStr for BlobBackend {
    type Err = ConnectorError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "filesystem" | "fs" => Ok(Self::Filesystem),
            other => Err(ConnectorError::Configuration(format!(
                "Unknown blob backend: {other}"
            ))),
        }
    }
}

impl Default for ConnectorConfig {
    fn default() -> Self {
        Self {
            application_name: "connector".to_string(),
            stream_name: "stream".to_string(),
            checkpoint: CheckpointConfig::default(),
            emitter: EmitterConfig::default(),
        }
    }
}

impl ConnectorConfig {
    /// Defaults overridden by `CONNECTOR_*` environment variables
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(app) = std::env::var("CONNECTOR_APPLICATION_NAME") {
            config.application_name = app;
        }

        if let Ok(stream) = std::env::var("CONNECTOR_STREAM_NAME") {
            config.stream_name = stream;
        }

        if let Ok(backend) = std::env::var("CONNECTOR_CHECKPOINT_BACKEND") {
            config.checkpoint.backend = backend.parse()?;
        }

        if let Ok(url) = std::env::var("CONNECTOR_REDIS_URL") {
            config.checkpoint.redis.url = url;
        }

        if let Ok(bucket) = std::env::var("CONNECTOR_BUCKET") {
            config.emitter.bucket = bucket;
        }

        if let Ok(backend) = std::env::var("CONNECTOR_BLOB_BACKEND") {
            config.emitter.backend = backend.parse()?;
        }

        if let Ok(root) = std::env::var("CONNECTOR_BLOB_ROOT") {
            config.emitter.root_dir = PathBuf::from(root);
        }

        config.validate()?;
        Ok(config)
    }

    /// Layered load: defaults, then an optional TOML file, then
    /// `CONNECTOR__*` environment variables (`__` separates nested keys,
    /// e.g. `CONNECTOR__CHECKPOINT__REDIS__URL`)
    pub fn load<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        let defaults = config::Config::try_from(&Self::default())
            .map_err(|e| ConnectorError::Configuration(format!("Invalid defaults: {e}")))?;

        let mut builder = config::Config::builder().add_source(defaults);

        if let Some(path) = path {
            builder = builder.add_source(
                config::File::from(path.as_ref())
                    .format(config::FileFormat::Toml)
                    .required(false),
            );
        }

        let config: Self = builder
            .add_source(
                config::Environment::with_prefix("CONNECTOR")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()
            .and_then(|c| c.try_deserialize::<Self>())
            .map_err(|e| ConnectorError::Configuration(format!("Failed to load config: {e}")))?;

        config.validate()?;
        Ok(config)
    }

    /// Reject configuration that would produce malformed keys or paths
    pub fn validate(&self) -> Result<()> {
        if self.application_name.trim().is_empty() {
            return Err(ConnectorError::Configuration(
                "application_name must not be empty".to_string(),
            ));
        }
        if self.stream_name.trim().is_empty() {
            return Err(ConnectorError::Configuration(
                "stream_name must not be empty".to_string(),
            ));
        }
        if self.emitter.bucket.trim().is_empty() {
            return Err(ConnectorError::Configuration(
                "emitter.bucket must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        let config = ConnectorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.checkpoint.backend, CheckpointBackend::Memory);
        assert_eq!(config.emitter.backend, BlobBackend::Memory);
        assert_eq!(config.checkpoint.redis.url, "redis://localhost:6379");
    }

    #[test]
    fn test_empty_application_name_rejected() {
        let config = ConnectorConfig {
            application_name: "  ".to_string(),
            ..ConnectorConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConnectorError::Configuration(_))
        ));
    }

    #[test]
    fn test_empty_bucket_rejected() {
        let mut config = ConnectorConfig::default();
        config.emitter.bucket = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_backend_parsing() {
        assert_eq!(
            "Redis".parse::<CheckpointBackend>().unwrap(),
            CheckpointBackend::Redis
        );
        assert_eq!("fs".parse::<BlobBackend>().unwrap(), BlobBackend::Filesystem);
        assert!("dynamo".parse::<CheckpointBackend>().is_err());
    }

    #[test]
    fn test_load_from_toml_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
application_name = "clickstream-archiver"
stream_name = "clicks"

[checkpoint]
backend = "redis"

[checkpoint.redis]
url = "redis://cache:6379"

[emitter]
bucket = "click-archive"
backend = "filesystem"
root_dir = "/var/lib/archive"
"#
        )
        .unwrap();

        let config = ConnectorConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.application_name, "clickstream-archiver");
        assert_eq!(config.stream_name, "clicks");
        assert_eq!(config.checkpoint.backend, CheckpointBackend::Redis);
        assert_eq!(config.checkpoint.redis.url, "redis://cache:6379");
        assert_eq!(config.emitter.bucket, "click-archive");
        assert_eq!(config.emitter.backend, BlobBackend::Filesystem);
        assert_eq!(config.emitter.root_dir, PathBuf::from("/var/lib/archive"));
    }

    #[test]
    fn test_load_partial_file_keeps_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, r#"stream_name = "orders""#).unwrap();

        let config = ConnectorConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.stream_name, "orders");
        assert_eq!(config.application_name, "connector");
        assert_eq!(config.emitter, EmitterConfig::default());
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let config = ConnectorConfig::load(Some("does/not/exist.toml")).unwrap();
        assert_eq!(config.application_name, "connector");
    }
}
