//! Named fields of a `row(...)` type.
//!
//! Field order follows first appearance. Re-inserting an existing name
//! replaces its type in place, so `row(a integer, a varchar)` has one field
//! `a` of type `varchar` at position 0.

use std::borrow::Cow;
use std::hash::{Hash, Hasher};

use rustc_hash::FxHashMap;

use crate::TypeNode;

/// One field of a row.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RowField {
    /// Name as written, including any surrounding quotes.
    pub name: String,
    pub ty: TypeNode,
}

impl RowField {
    pub fn new(name: impl Into<String>, ty: TypeNode) -> Self {
        RowField {
            name: name.into(),
            ty,
        }
    }

    /// The name without surrounding double quotes, with escaped quotes
    /// (`""` or `\"`) resolved. Unquoted names are returned as-is.
    pub fn unquoted_name(&self) -> Cow<'_, str> {
        let inner = self
            .name
            .strip_prefix('"')
            .and_then(|rest| rest.strip_suffix('"'));
        match inner {
            Some(inner) if inner.contains('"') => {
                Cow::Owned(inner.replace("\"\"", "\"").replace("\\\"", "\""))
            }
            Some(inner) => Cow::Borrowed(inner),
            None => Cow::Borrowed(&self.name),
        }
    }
}

/// Ordered, name-unique row fields.
#[derive(Clone, Debug, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "Vec<RowField>", into = "Vec<RowField>")
)]
pub struct RowFields {
    fields: Vec<RowField>,
    /// Name to position in `fields`.
    index: FxHashMap<String, usize>,
}

impl RowFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field, or replace the type of an existing field with the
    /// same name. Returns the replaced type.
    pub fn insert(&mut self, name: impl Into<String>, ty: TypeNode) -> Option<TypeNode> {
        let name = name.into();
        if let Some(&pos) = self.index.get(&name) {
            return Some(std::mem::replace(&mut self.fields[pos].ty, ty));
        }
        self.index.insert(name.clone(), self.fields.len());
        self.fields.push(RowField { name, ty });
        None
    }

    /// Look up a field type by its name as written.
    pub fn get(&self, name: &str) -> Option<&TypeNode> {
        self.index.get(name).map(|&pos| &self.fields[pos].ty)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RowField> {
        self.fields.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|field| field.name.as_str())
    }

    pub fn as_slice(&self) -> &[RowField] {
        &self.fields
    }
}

// Equality and hashing ignore the index; it is derived from `fields`.

impl PartialEq for RowFields {
    fn eq(&self, other: &Self) -> bool {
        self.fields == other.fields
    }
}

impl Eq for RowFields {}

impl Hash for RowFields {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.fields.hash(state);
    }
}

impl<'a> IntoIterator for &'a RowFields {
    type Item = &'a RowField;
    type IntoIter = std::slice::Iter<'a, RowField>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

impl<N: Into<String>> FromIterator<(N, TypeNode)> for RowFields {
    fn from_iter<I: IntoIterator<Item = (N, TypeNode)>>(iter: I) -> Self {
        let mut fields = RowFields::new();
        for (name, ty) in iter {
            fields.insert(name, ty);
        }
        fields
    }
}

impl From<Vec<RowField>> for RowFields {
    fn from(fields: Vec<RowField>) -> Self {
        fields.into_iter().map(|f| (f.name, f.ty)).collect()
    }
}

impl From<RowFields> for Vec<RowField> {
    fn from(fields: RowFields) -> Self {
        fields.fields
    }
}
