mod args;
mod error;
mod export;
mod log;

pub use args::Args;
pub use error::ConfigError;
pub use export::ExportConfig;
pub use log::LogConfig;

use serde::Deserialize;
use std::path::Path;

const ENV_PREFIX: &str = "SETL_";

#[derive(Debug, Clone, Default)]
pub struct EtlConfig {
    pub export: ExportConfig,

    pub log: LogConfig,
}

/// Flat view of the `SETL_*` environment, which envy can populate directly.
#[derive(Debug, Deserialize)]
struct EnvVars {
    #[serde(default = "log::default_level")]
    log_level: String,
    #[serde(default = "log::default_json")]
    log_json: bool,
    #[serde(default = "log::default_strip_ansi")]
    log_strip_ansi: bool,
    #[serde(default = "log::default_write")]
    log_write: bool,
    #[serde(default = "log::default_write_path")]
    log_write_path: String,
    #[serde(default = "log::default_write_max_file_size")]
    log_write_max_file_size: u64,
    #[serde(default = "log::default_write_max_files")]
    log_write_max_files: usize,
    #[serde(default = "export::default_strict")]
    export_strict: bool,
    #[serde(default = "export::default_include_failed")]
    export_include_failed: bool,
}

impl From<EnvVars> for EtlConfig {
    fn from(vars: EnvVars) -> Self {
        Self {
            export: ExportConfig {
                strict: vars.export_strict,
                include_failed: vars.export_include_failed,
            },
            log: LogConfig {
                level: vars.log_level,
                json: vars.log_json,
                strip_ansi: vars.log_strip_ansi,
                write: vars.log_write,
                write_path: vars.log_write_path,
                write_max_file_size: vars.log_write_max_file_size,
                write_max_files: vars.log_write_max_files,
            },
        }
    }
}

impl EtlConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let vars = envy::prefixed(ENV_PREFIX).from_env::<EnvVars>()?;
        Self::from_vars(vars)
    }

    /// Build the configuration from explicit `(KEY, value)` pairs instead of
    /// the process environment.
    pub fn from_pairs<I>(pairs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let vars = envy::prefixed(ENV_PREFIX).from_iter::<_, EnvVars>(pairs)?;
        Self::from_vars(vars)
    }

    fn from_vars(vars: EnvVars) -> Result<Self, ConfigError> {
        let config = Self::from(vars);
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.export.validate()?;
        self.log.validate()?;
        Ok(())
    }
}

/// Load variables from an env file into the process environment.
///
/// Returns `Ok(false)` when the file does not exist, which is not an error:
/// the configuration then comes from the ambient environment alone.
pub fn load_env_file(path: impl AsRef<Path>) -> Result<bool, ConfigError> {
    let path = path.as_ref();
    match dotenv::from_path(path) {
        Ok(()) => Ok(true),
        Err(dotenv::Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(source) => Err(ConfigError::EnvFileError {
            path: path.display().to_string(),
            source,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_default_config() {
        let config = EtlConfig::default();
        assert_eq!(config.log.level, "info");
        assert!(!config.export.strict);
        assert!(config.export.include_failed);
    }

    #[test]
    fn test_from_pairs_uses_defaults() {
        let config = EtlConfig::from_pairs(Vec::new()).unwrap();
        assert_eq!(config.log.level, "info");
        assert_eq!(config.log.write_max_files, 5);
        assert!(config.export.include_failed);
    }

    #[test]
    fn test_from_pairs_overrides() {
        let config = EtlConfig::from_pairs(pairs(&[
            ("SETL_LOG_LEVEL", "debug"),
            ("SETL_LOG_JSON", "true"),
            ("SETL_EXPORT_STRICT", "true"),
            ("SETL_EXPORT_INCLUDE_FAILED", "false"),
            ("OTHER_VAR", "ignored"),
        ]))
        .unwrap();
        assert_eq!(config.log.level, "debug");
        assert!(config.log.json);
        assert!(config.export.strict);
        assert!(!config.export.include_failed);
    }

    #[test]
    fn test_from_pairs_rejects_invalid_level() {
        let result = EtlConfig::from_pairs(pairs(&[("SETL_LOG_LEVEL", "verbose")]));
        assert!(matches!(result, Err(ConfigError::ValidateError(_))));
    }

    #[test]
    fn test_from_pairs_rejects_malformed_bool() {
        let result = EtlConfig::from_pairs(pairs(&[("SETL_EXPORT_STRICT", "maybe")]));
        assert!(matches!(result, Err(ConfigError::EnvError(_))));
    }

    #[test]
    fn test_load_missing_env_file() {
        let loaded = load_env_file("/nonexistent/path/.env.missing").unwrap();
        assert!(!loaded);
    }

    #[test]
    #[serial]
    fn test_load_env_file_then_from_env() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "SETL_LOG_LEVEL=warn").unwrap();
        writeln!(file, "SETL_EXPORT_STRICT=true").unwrap();

        assert!(load_env_file(file.path()).unwrap());
        let config = EtlConfig::from_env().unwrap();
        assert_eq!(config.log.level, "warn");
        assert!(config.export.strict);

        unsafe {
            std::env::remove_var("SETL_LOG_LEVEL");
            std::env::remove_var("SETL_EXPORT_STRICT");
        }
    }
}
