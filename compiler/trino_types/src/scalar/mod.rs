//! Scalar leaves of the type tree.
//!
//! A [`ScalarKind`] names one of the primitive catalog types. A
//! [`ScalarType`] pairs a kind with its numeric parameters (`decimal(20,3)`)
//! and, for temporal kinds, a timezone flag.

use std::fmt;
use std::str::FromStr;

use smallvec::SmallVec;

/// Numeric parameters of a scalar. Two inline slots cover `decimal(p,s)`.
pub type ScalarArgs = SmallVec<[u32; 2]>;

/// Canonical scalar kind.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
#[repr(u8)]
pub enum ScalarKind {
    Boolean,
    /// 8-bit signed integer.
    TinyInt,
    /// 16-bit signed integer.
    SmallInt,
    /// 32-bit signed integer.
    Integer,
    /// 64-bit signed integer.
    BigInt,
    /// 32-bit IEEE 754 float.
    Real,
    /// 64-bit IEEE 754 float.
    Double,
    /// Fixed precision decimal, `decimal(precision, scale)`.
    Decimal,
    /// Variable length text, optionally bounded.
    Varchar,
    /// Fixed length text.
    Char,
    /// Variable length binary.
    Varbinary,
    Json,
    Date,
    /// Time of day. Carries a timezone flag.
    Time,
    /// Date and time. Carries a timezone flag.
    Timestamp,
}

/// Coarse grouping of scalar kinds, for consumers that map onto a smaller
/// type system.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeFamily {
    Boolean,
    Integer,
    Floating,
    Decimal,
    Character,
    Binary,
    Json,
    Temporal,
}

impl ScalarKind {
    /// Every kind, in declaration order.
    pub const ALL: &'static [ScalarKind] = &[
        ScalarKind::Boolean,
        ScalarKind::TinyInt,
        ScalarKind::SmallInt,
        ScalarKind::Integer,
        ScalarKind::BigInt,
        ScalarKind::Real,
        ScalarKind::Double,
        ScalarKind::Decimal,
        ScalarKind::Varchar,
        ScalarKind::Char,
        ScalarKind::Varbinary,
        ScalarKind::Json,
        ScalarKind::Date,
        ScalarKind::Time,
        ScalarKind::Timestamp,
    ];

    /// Canonical lowercase name.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::TinyInt => "tinyint",
            Self::SmallInt => "smallint",
            Self::Integer => "integer",
            Self::BigInt => "bigint",
            Self::Real => "real",
            Self::Double => "double",
            Self::Decimal => "decimal",
            Self::Varchar => "varchar",
            Self::Char => "char",
            Self::Varbinary => "varbinary",
            Self::Json => "json",
            Self::Date => "date",
            Self::Time => "time",
            Self::Timestamp => "timestamp",
        }
    }

    /// Look up a kind by its canonical name. Exact match; callers lowercase.
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "boolean" => Self::Boolean,
            "tinyint" => Self::TinyInt,
            "smallint" => Self::SmallInt,
            "integer" => Self::Integer,
            "bigint" => Self::BigInt,
            "real" => Self::Real,
            "double" => Self::Double,
            "decimal" => Self::Decimal,
            "varchar" => Self::Varchar,
            "char" => Self::Char,
            "varbinary" => Self::Varbinary,
            "json" => Self::Json,
            "date" => Self::Date,
            "time" => Self::Time,
            "timestamp" => Self::Timestamp,
            _ => return None,
        })
    }

    /// Whether scalars of this kind carry a timezone flag.
    #[inline]
    pub const fn has_timezone(self) -> bool {
        matches!(self, Self::Time | Self::Timestamp)
    }

    #[inline]
    pub const fn family(self) -> TypeFamily {
        match self {
            Self::Boolean => TypeFamily::Boolean,
            Self::TinyInt | Self::SmallInt | Self::Integer | Self::BigInt => TypeFamily::Integer,
            Self::Real | Self::Double => TypeFamily::Floating,
            Self::Decimal => TypeFamily::Decimal,
            Self::Varchar | Self::Char => TypeFamily::Character,
            Self::Varbinary => TypeFamily::Binary,
            Self::Json => TypeFamily::Json,
            Self::Date | Self::Time | Self::Timestamp => TypeFamily::Temporal,
        }
    }

    /// Storage width in bits for fixed-width numeric kinds.
    #[inline]
    pub const fn bit_width(self) -> Option<u8> {
        match self {
            Self::TinyInt => Some(8),
            Self::SmallInt => Some(16),
            Self::Integer | Self::Real => Some(32),
            Self::BigInt | Self::Double => Some(64),
            _ => None,
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScalarKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(&s.trim().to_lowercase())
            .ok_or_else(|| format!("`{s}` is not a scalar type name"))
    }
}

// Compile-time size assertion: ScalarKind must be exactly 1 byte
const _: () = assert!(std::mem::size_of::<ScalarKind>() == 1);

/// A scalar leaf: kind, parameters, and timezone flag.
///
/// `timezone` is `Some` exactly when [`ScalarKind::has_timezone`] holds.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScalarType {
    pub kind: ScalarKind,
    pub args: ScalarArgs,
    pub timezone: Option<bool>,
}

impl ScalarType {
    /// A scalar with no parameters. Temporal kinds start without a timezone.
    pub fn new(kind: ScalarKind) -> Self {
        ScalarType {
            kind,
            args: SmallVec::new(),
            timezone: kind.has_timezone().then_some(false),
        }
    }

    #[must_use]
    pub fn with_args(mut self, args: impl IntoIterator<Item = u32>) -> Self {
        self.args = args.into_iter().collect();
        self
    }

    /// Set the timezone flag. Ignored for kinds without one.
    #[must_use]
    pub fn with_timezone(mut self, timezone: bool) -> Self {
        if self.kind.has_timezone() {
            self.timezone = Some(timezone);
        }
        self
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.kind.as_str()
    }

    /// True for `time with time zone` and `timestamp with time zone`.
    #[inline]
    pub fn is_zoned(&self) -> bool {
        self.timezone == Some(true)
    }
}

impl From<ScalarKind> for ScalarType {
    fn from(kind: ScalarKind) -> Self {
        ScalarType::new(kind)
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind.as_str())?;
        if let Some((first, rest)) = self.args.split_first() {
            write!(f, "({first}")?;
            for arg in rest {
                write!(f, ",{arg}")?;
            }
            f.write_str(")")?;
        }
        if self.is_zoned() {
            f.write_str(" with time zone")?;
        }
        Ok(())
    }
}
