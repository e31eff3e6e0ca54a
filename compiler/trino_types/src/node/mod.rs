//! The type tree.

use std::fmt;
use std::num::NonZeroU32;

use crate::{RowFields, ScalarKind, ScalarType};

/// A parsed type descriptor.
///
/// Nested arrays never appear as a chain of `Array` nodes: the
/// constructors fold `array(array(T))` into one node with `dimensions = 2`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum TypeNode {
    Scalar(ScalarType),
    Array {
        element: Box<TypeNode>,
        dimensions: NonZeroU32,
    },
    Map {
        key: Box<TypeNode>,
        value: Box<TypeNode>,
    },
    Row(RowFields),
    /// Text that could not be classified, kept verbatim (lowercased).
    Unknown(String),
}

impl TypeNode {
    /// A parameterless scalar.
    pub fn scalar(kind: ScalarKind) -> Self {
        TypeNode::Scalar(ScalarType::new(kind))
    }

    /// `dimensions` levels of array around `element`. Folds into `element`
    /// when it is already an array; zero is treated as one.
    pub fn array(element: TypeNode, dimensions: u32) -> Self {
        let dimensions = NonZeroU32::new(dimensions).unwrap_or(NonZeroU32::MIN);
        match element {
            TypeNode::Array {
                element,
                dimensions: inner,
            } => TypeNode::Array {
                element,
                dimensions: inner.saturating_add(dimensions.get()),
            },
            element => TypeNode::Array {
                element: Box::new(element),
                dimensions,
            },
        }
    }

    /// One level of array around `element`.
    pub fn array_of(element: TypeNode) -> Self {
        Self::array(element, 1)
    }

    pub fn map(key: TypeNode, value: TypeNode) -> Self {
        TypeNode::Map {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    pub fn row<N: Into<String>>(fields: impl IntoIterator<Item = (N, TypeNode)>) -> Self {
        TypeNode::Row(fields.into_iter().collect())
    }

    pub fn unknown(raw: impl Into<String>) -> Self {
        TypeNode::Unknown(raw.into())
    }

    #[inline]
    pub fn is_unknown(&self) -> bool {
        matches!(self, TypeNode::Unknown(_))
    }

    pub fn as_scalar(&self) -> Option<&ScalarType> {
        match self {
            TypeNode::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }

    /// Whether any node in the tree is `Unknown`.
    pub fn contains_unknown(&self) -> bool {
        match self {
            TypeNode::Scalar(_) => false,
            TypeNode::Unknown(_) => true,
            TypeNode::Array { element, .. } => element.contains_unknown(),
            TypeNode::Map { key, value } => key.contains_unknown() || value.contains_unknown(),
            TypeNode::Row(fields) => fields.iter().any(|field| field.ty.contains_unknown()),
        }
    }

    /// Nesting depth. Leaves are 1; an array counts once however many
    /// dimensions it has.
    pub fn depth(&self) -> usize {
        match self {
            TypeNode::Scalar(_) | TypeNode::Unknown(_) => 1,
            TypeNode::Array { element, .. } => 1 + element.depth(),
            TypeNode::Map { key, value } => 1 + key.depth().max(value.depth()),
            TypeNode::Row(fields) => {
                1 + fields
                    .iter()
                    .map(|field| field.ty.depth())
                    .max()
                    .unwrap_or(0)
            }
        }
    }
}

impl From<ScalarType> for TypeNode {
    fn from(scalar: ScalarType) -> Self {
        TypeNode::Scalar(scalar)
    }
}

impl From<ScalarKind> for TypeNode {
    fn from(kind: ScalarKind) -> Self {
        TypeNode::scalar(kind)
    }
}

/// Canonical descriptor text. Reparsing it yields an equal tree when the
/// tree has no `Unknown` nodes and no empty rows.
impl fmt::Display for TypeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeNode::Scalar(scalar) => scalar.fmt(f),
            TypeNode::Array {
                element,
                dimensions,
            } => {
                for _ in 0..dimensions.get() {
                    f.write_str("array(")?;
                }
                element.fmt(f)?;
                for _ in 0..dimensions.get() {
                    f.write_str(")")?;
                }
                Ok(())
            }
            TypeNode::Map { key, value } => write!(f, "map({key}, {value})"),
            TypeNode::Row(fields) => {
                f.write_str("row(")?;
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{} {}", field.name, field.ty)?;
                }
                f.write_str(")")
            }
            TypeNode::Unknown(raw) => f.write_str(raw),
        }
    }
}

#[cfg(test)]
mod tests;
