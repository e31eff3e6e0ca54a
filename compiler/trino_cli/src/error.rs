//! CLI error type.

use trino_diagnostic::UnknownErrorCode;

/// Everything that stops `trino-type` before or while it runs.
///
/// Problems inside descriptors are not errors here; they are diagnostics.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("unknown option `{0}`")]
    UnknownOption(String),

    #[error("invalid value `{value}` for `{flag}`: {reason}")]
    InvalidValue {
        flag: &'static str,
        value: String,
        reason: String,
    },

    #[error("`--explain` needs a code, as in `--explain=E0002`")]
    MissingExplainCode,

    #[error(transparent)]
    UnknownCode(#[from] UnknownErrorCode),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to write JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Whether the command line itself was wrong.
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            CliError::UnknownOption(_) | CliError::InvalidValue { .. } | CliError::MissingExplainCode
        )
    }

    /// Process exit status: 2 for usage errors, 1 otherwise.
    pub fn exit_code(&self) -> u8 {
        if self.is_usage() {
            2
        } else {
            1
        }
    }
}
