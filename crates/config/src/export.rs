use crate::ConfigError;

#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Abort the export on the first operation that fails to transform
    ///
    /// Env: SETL_EXPORT_STRICT
    /// Default: false (the failing operation is logged and skipped)
    pub strict: bool,

    /// Export operations that belong to failed transactions
    ///
    /// Env: SETL_EXPORT_INCLUDE_FAILED
    /// Default: true
    pub include_failed: bool,
}

pub(crate) fn default_strict() -> bool {
    false
}

pub(crate) fn default_include_failed() -> bool {
    true
}

impl ExportConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        Ok(())
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            strict: default_strict(),
            include_failed: default_include_failed(),
        }
    }
}
