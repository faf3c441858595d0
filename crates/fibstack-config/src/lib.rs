//! Configuration management for fibstack.
//!
//! Values are layered, later sources winning:
//!
//! 1. built-in defaults ([`Config::default`])
//! 2. a TOML file, either given explicitly or found at
//!    [`default_config_path`]
//! 3. `FIBSTACK_`-prefixed environment variables, with `__` between the
//!    section and the key (`FIBSTACK_RUN__N=25`,
//!    `FIBSTACK_RUN__METHODS=naive,stack`)
//!
//! Command-line flags are applied on top by the CLI.

use fibonacci_rs::Method;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "FIBSTACK";

const MAX_PRECISION: usize = 9;

/// Errors raised while loading or checking configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Failed to render configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub run: RunConfig,
    pub output: OutputConfig,
}

/// What to compute and how often.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Fibonacci index passed to every method.
    pub n: u64,
    pub methods: Vec<Method>,
    /// Timed repetitions per method.
    pub runs: u32,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            n: 30,
            methods: Method::ALL.to_vec(),
            runs: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Decimal places for millisecond timings.
    pub precision: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            precision: 2,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(ConfigError::Invalid(format!(
                "unknown output format '{}' (expected 'text' or 'json')",
                other
            ))),
        }
    }
}

impl Config {
    /// Loads configuration from defaults, a file and the environment.
    ///
    /// An explicit `path` must exist. Without one, the file at
    /// [`default_config_path`] is used when present.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => Some((expand_path(path), true)),
            None => default_config_path().map(|path| (path, false)),
        };

        let mut builder =
            config::Config::builder().add_source(config::Config::try_from(&Config::default())?);

        if let Some((file, required)) = file {
            builder = builder.add_source(
                config::File::from(file)
                    .format(config::FileFormat::Toml)
                    .required(required),
            );
        }

        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("run.methods")
                .try_parsing(true),
        );

        let config: Config = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.run.methods.is_empty() {
            return Err(ConfigError::Invalid(
                "run.methods must name at least one method".to_string(),
            ));
        }
        if self.run.runs == 0 {
            return Err(ConfigError::Invalid("run.runs must be at least 1".to_string()));
        }
        if self.output.precision > MAX_PRECISION {
            return Err(ConfigError::Invalid(format!(
                "output.precision must be at most {}, got {}",
                MAX_PRECISION, self.output.precision
            )));
        }
        Ok(())
    }

    /// Renders the configuration in the same TOML shape it is read from.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// `<config dir>/fibstack/config.toml`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("fibstack").join("config.toml"))
}

/// Expands a leading `~` to the home directory.
pub fn expand_path(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    PathBuf::from(shellexpand::tilde(raw.as_ref()).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.run.n, 30);
        assert_eq!(config.run.methods, vec![Method::Naive, Method::Stack]);
        assert_eq!(config.run.runs, 1);
        assert_eq!(config.output.format, OutputFormat::Text);
        assert_eq!(config.output.precision, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_load_file_overrides_defaults() {
        let file = write_config(
            r#"
[run]
n = 12
methods = ["stack"]

[output]
format = "json"
"#,
        );

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.run.n, 12);
        assert_eq!(config.run.methods, vec![Method::Stack]);
        // Untouched keys keep their defaults.
        assert_eq!(config.run.runs, 1);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.output.precision, 2);
    }

    #[test]
    #[serial]
    fn test_env_overrides_file() {
        let file = write_config("[run]\nn = 12\nruns = 2\n");
        std::env::set_var("FIBSTACK_RUN__N", "7");
        std::env::set_var("FIBSTACK_RUN__METHODS", "naive");

        let result = Config::load(Some(file.path()));

        std::env::remove_var("FIBSTACK_RUN__N");
        std::env::remove_var("FIBSTACK_RUN__METHODS");

        let config = result.unwrap();
        assert_eq!(config.run.n, 7);
        assert_eq!(config.run.methods, vec![Method::Naive]);
        assert_eq!(config.run.runs, 2);
    }

    #[test]
    #[serial]
    fn test_env_method_list() {
        let file = write_config("");
        std::env::set_var("FIBSTACK_RUN__METHODS", "stack,naive");

        let result = Config::load(Some(file.path()));

        std::env::remove_var("FIBSTACK_RUN__METHODS");

        assert_eq!(result.unwrap().run.methods, vec![Method::Stack, Method::Naive]);
    }

    #[test]
    #[serial]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(matches!(
            Config::load(Some(missing.as_path())),
            Err(ConfigError::Load(_))
        ));
    }

    #[test]
    #[serial]
    fn test_load_rejects_invalid_values() {
        let file = write_config("[run]\nruns = 0\n");
        let err = Config::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        assert!(err.to_string().contains("run.runs"));
    }

    #[test]
    fn test_validate() {
        let mut config = Config::default();
        config.run.methods.clear();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.output.precision = 10;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.output.precision = 9;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_to_toml_reads_back() {
        let mut config = Config::default();
        config.run.n = 21;
        config.output.format = OutputFormat::Json;

        let rendered = config.to_toml().unwrap();
        assert!(rendered.contains("[run]"));
        assert!(rendered.contains("n = 21"));

        let parsed: Config = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!("yaml".parse::<OutputFormat>().is_err());
        assert_eq!(serde_json::to_string(&OutputFormat::Json).unwrap(), r#""json""#);
    }

    #[test]
    fn test_expand_path_leaves_plain_paths() {
        let path = Path::new("/tmp/fibstack.toml");
        assert_eq!(expand_path(path), PathBuf::from("/tmp/fibstack.toml"));
    }

    #[test]
    fn test_expand_path_tilde() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_path(Path::new("~/fib.toml")), home.join("fib.toml"));
        }
    }
}
