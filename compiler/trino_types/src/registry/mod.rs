//! Scalar name registry.
//!
//! Maps lowercase type names onto [`ScalarKind`]s. The built-in table covers
//! the fifteen canonical names; callers that read catalogs with their own
//! spellings (`int`, `string`) register aliases on a private registry before
//! parsing. A registry is only mutable through `&mut`, so it cannot change
//! while a parse holds it.

use std::sync::OnceLock;

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::ScalarKind;

/// Lowercase name to scalar kind.
#[derive(Clone, Debug)]
pub struct Registry {
    entries: FxHashMap<Box<str>, ScalarKind>,
}

impl Registry {
    /// The built-in name table.
    pub const BUILTIN: &'static [(&'static str, ScalarKind)] = &[
        ("boolean", ScalarKind::Boolean),
        ("tinyint", ScalarKind::TinyInt),
        ("smallint", ScalarKind::SmallInt),
        ("integer", ScalarKind::Integer),
        ("bigint", ScalarKind::BigInt),
        ("real", ScalarKind::Real),
        ("double", ScalarKind::Double),
        ("decimal", ScalarKind::Decimal),
        ("varchar", ScalarKind::Varchar),
        ("char", ScalarKind::Char),
        ("varbinary", ScalarKind::Varbinary),
        ("json", ScalarKind::Json),
        ("date", ScalarKind::Date),
        ("time", ScalarKind::Time),
        ("timestamp", ScalarKind::Timestamp),
    ];

    /// Catalog types that exist but have no scalar mapping here.
    pub const KNOWN_UNSUPPORTED: &'static [&'static str] = &[
        "interval",
        "ipaddress",
        "uuid",
        "hyperloglog",
        "p4hyperloglog",
        "qdigest",
        "tdigest",
    ];

    /// A registry holding the built-in table.
    pub fn new() -> Self {
        Registry {
            entries: Self::BUILTIN
                .iter()
                .map(|&(name, kind)| (Box::from(name), kind))
                .collect(),
        }
    }

    /// A registry with no names at all.
    pub fn empty() -> Self {
        Registry {
            entries: FxHashMap::default(),
        }
    }

    /// Shared built-in registry.
    pub fn builtin() -> &'static Registry {
        static BUILTIN: OnceLock<Registry> = OnceLock::new();
        BUILTIN.get_or_init(Registry::new)
    }

    /// Register `name` (lowercased) as `kind`. Returns the kind it previously
    /// mapped to, if any.
    pub fn register(&mut self, name: &str, kind: ScalarKind) -> Option<ScalarKind> {
        let name = name.trim().to_lowercase();
        debug!(name = %name, kind = %kind, "registering scalar name");
        self.entries.insert(name.into_boxed_str(), kind)
    }

    /// Case-insensitive lookup.
    pub fn lookup(&self, name: &str) -> Option<ScalarKind> {
        if let Some(&kind) = self.entries.get(name) {
            return Some(kind);
        }
        if name.bytes().any(|b| b.is_ascii_uppercase()) || !name.is_ascii() {
            return self.entries.get(name.to_lowercase().as_str()).copied();
        }
        None
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// Whether `name` is a catalog type known to have no mapping.
    pub fn is_known_unsupported(name: &str) -> bool {
        Self::KNOWN_UNSUPPORTED
            .iter()
            .any(|known| known.eq_ignore_ascii_case(name))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(AsRef::as_ref).collect();
        names.sort_unstable();
        names
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
