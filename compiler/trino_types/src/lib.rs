//! Type tree for catalog type descriptors.
//!
//! A descriptor such as `array(row(a integer, b varchar(10)))` parses into a
//! [`TypeNode`] tree:
//! - [`ScalarType`] leaves identified by a canonical [`ScalarKind`]
//! - `Array` nodes with collapsed dimensions (`array(array(T))` is one node)
//! - `Map` and `Row` composites
//! - `Unknown` leaves for text that could not be classified
//!
//! The [`Registry`] maps lowercase scalar names onto kinds. Trees are plain
//! owned values: cloneable, comparable, hashable, and (with the `serde`
//! feature) serializable.

mod node;
mod registry;
mod row;
mod scalar;

pub use node::TypeNode;
pub use registry::Registry;
pub use row::{RowField, RowFields};
pub use scalar::{ScalarArgs, ScalarKind, ScalarType, TypeFamily};
