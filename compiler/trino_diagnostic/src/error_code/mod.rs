//! Error codes for descriptor diagnostics.
//!
//! Each code is a unique identifier (`E0002`) used for `--explain` lookups.
//! `E` codes mean the result tree lost information (an `Unknown` node or a
//! dropped part); `W` codes mean the tree is complete but the input had
//! something the parser ignored.

use std::fmt;

use crate::Severity;

/// Error codes for all descriptor diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorCode {
    /// No type name at the start of the descriptor
    E0001,
    /// Type name is not a known scalar or structural type
    E0002,
    /// Arguments inside the parentheses do not fit the type
    E0003,
    /// Text after a complete type was ignored
    W0001,
}

/// Taxonomy of descriptor problems.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorKind {
    /// The descriptor does not start with an identifier.
    Syntax,
    /// The identifier is neither structural nor registered.
    UnrecognizedIdentifier,
    /// The parenthesized options are missing, mis-sized, or not numbers.
    MalformedOptions,
    /// Input continued after a complete type.
    TrailingText,
}

/// Returned when a string is not a known [`ErrorCode`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown diagnostic code `{0}`")]
pub struct UnknownErrorCode(pub String);

impl ErrorCode {
    /// All variants, for exhaustive testing and `--explain` listings.
    pub const ALL: &[ErrorCode] = &[
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E0003,
        ErrorCode::W0001,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::W0001 => "W0001",
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ErrorCode::E0001 => ErrorKind::Syntax,
            ErrorCode::E0002 => ErrorKind::UnrecognizedIdentifier,
            ErrorCode::E0003 => ErrorKind::MalformedOptions,
            ErrorCode::W0001 => ErrorKind::TrailingText,
        }
    }

    /// One-line summary, also used as the default diagnostic message.
    pub fn summary(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "could not parse type name",
            ErrorCode::E0002 => "did not recognize type",
            ErrorCode::E0003 => "malformed type arguments",
            ErrorCode::W0001 => "unexpected text after type",
        }
    }

    /// Severity diagnostics with this code are created with.
    pub fn default_severity(&self) -> Severity {
        if self.is_warning() {
            Severity::Warning
        } else {
            Severity::Error
        }
    }

    /// Check if this is a warning code (Wxxx range).
    pub fn is_warning(&self) -> bool {
        matches!(self, ErrorCode::W0001)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse a code string like `"E0002"`. Case-insensitive.
impl std::str::FromStr for ErrorCode {
    type Err = UnknownErrorCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .iter()
            .find(|code| code.as_str().eq_ignore_ascii_case(trimmed))
            .copied()
            .ok_or_else(|| UnknownErrorCode(trimmed.to_owned()))
    }
}
