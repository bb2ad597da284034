//! Configuration for the Vermeer content studio.
//!
//! Sources, later overriding earlier:
//! 1. Bundled defaults (`vermeer.toml` shipped with this crate)
//! 2. `~/.config/vermeer/vermeer.toml`
//! 3. `./vermeer.toml`
//!
//! The API credential itself is never stored in a file; only the name of the
//! environment variable that holds it.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use vermeer_error::{ConfigError, VermeerError, VermeerResult};

const DEFAULT_CONFIG: &str = include_str!("../vermeer.toml");

/// Connection settings for the hosted service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GeminiSettings {
    /// REST API root, without trailing slash
    pub base_url: String,
    /// Environment variable holding the API key
    pub api_key_env: String,
}

/// Model used by each studio component.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ModelSettings {
    /// Chat relay model
    pub chat: String,
    /// Command router model
    pub router: String,
    /// Visual concept model
    pub concepts: String,
    /// Image model
    pub images: String,
}

/// Top-level Vermeer configuration.
///
/// # Example
///
/// ```no_run
/// use vermeer_config::VermeerConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = VermeerConfig::load()?;
/// println!("Chat model: {}", config.models.chat);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct VermeerConfig {
    /// Service connection
    pub gemini: GeminiSettings,
    /// Per-component models
    pub models: ModelSettings,
}

impl Default for VermeerConfig {
    /// The bundled defaults alone.
    fn default() -> Self {
        Self {
            gemini: GeminiSettings {
                base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
                api_key_env: "GEMINI_API_KEY".to_string(),
            },
            models: ModelSettings {
                chat: "gemini-2.5-flash".to_string(),
                router: "gemini-2.5-flash".to_string(),
                concepts: "gemini-2.5-flash".to_string(),
                images: "imagen-4.0-generate-001".to_string(),
            },
        }
    }
}

impl VermeerConfig {
    /// Load bundled defaults overridden by one explicit file.
    ///
    /// The file may set any subset of keys.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> VermeerResult<Self> {
        debug!("Loading configuration from file");
        let origin = path.as_ref().display().to_string();

        Self::build(
            Config::builder()
                .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
                .add_source(File::from(path.as_ref()).required(true)),
        )
        .map_err(|e| with_origin(e, origin))
    }

    /// Load configuration with precedence: current dir > home dir > bundled defaults.
    ///
    /// Missing user files are skipped silently.
    #[instrument]
    pub fn load() -> VermeerResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/vermeer/vermeer.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("vermeer").required(false));

        Self::build(builder)
    }

    fn build(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> VermeerResult<Self> {
        let config: Self = builder
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build configuration: {}", e)))?
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> VermeerResult<()> {
        let fields = [
            ("gemini.base_url", &self.gemini.base_url),
            ("gemini.api_key_env", &self.gemini.api_key_env),
            ("models.chat", &self.models.chat),
            ("models.router", &self.models.router),
            ("models.concepts", &self.models.concepts),
            ("models.images", &self.models.images),
        ];

        match fields.iter().find(|(_, value)| value.trim().is_empty()) {
            Some((name, _)) => Err(ConfigError::new(format!("{} must not be empty", name)).into()),
            None => Ok(()),
        }
    }

    /// Read the API key from the configured environment variable.
    ///
    /// Returns `None` when the variable is unset or blank.
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.gemini.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }
}

fn with_origin(err: VermeerError, origin: String) -> VermeerError {
    match err.kind() {
        vermeer_error::VermeerErrorKind::Config(config_err) => {
            config_err.clone().with_origin(origin).into()
        }
        _ => err,
    }
}
