//! Property keys for records: string-like and symbolic kinds
//!
//! A record's own keys are a mix of two kinds:
//! - `PropertyKey::Str` - ordinary string keys
//! - `PropertyKey::Symbol` - opaque symbolic keys allocated by a
//!   [`SymbolRegistry`], either interned by name (shared) or unique
//!   (never equal to any other symbol, even with the same description)
//!
//! Enumeration order throughout the crate is: string-like keys in
//! insertion order, then symbolic keys in insertion order.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique symbol identifier, scoped to the registry that allocated it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SymbolId(pub u32);

/// A property key: either a string or a symbol.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyKey {
    /// String key.
    Str(String),
    /// Symbol key (references a [`SymbolRegistry`]).
    Symbol(SymbolId),
}

impl PropertyKey {
    /// Is this a string-like key?
    pub fn is_str(&self) -> bool {
        matches!(self, Self::Str(_))
    }

    /// Is this a symbolic key?
    pub fn is_symbol(&self) -> bool {
        matches!(self, Self::Symbol(_))
    }
}

impl fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => write!(f, "{s}"),
            Self::Symbol(id) => write!(f, "Symbol({})", id.0),
        }
    }
}

impl From<&str> for PropertyKey {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for PropertyKey {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<SymbolId> for PropertyKey {
    fn from(id: SymbolId) -> Self {
        Self::Symbol(id)
    }
}

/// Allocates symbolic keys.
///
/// Two allocation modes:
/// - [`interned`](Self::interned) - registry-wide symbols looked up by
///   name; asking for the same name twice returns the same id
/// - [`unique`](Self::unique) - a fresh symbol every call; the
///   description is retained for diagnostics only and two unique
///   symbols with equal descriptions are still distinct keys
#[derive(Debug, Clone, Default)]
pub struct SymbolRegistry {
    /// Description per allocated symbol, indexed by `SymbolId`.
    descriptions: Vec<String>,
    /// Name-to-id table for interned symbols.
    interned: IndexMap<String, SymbolId>,
}

impl SymbolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up or allocate the interned symbol for `name`.
    pub fn interned(&mut self, name: &str) -> SymbolId {
        if let Some(id) = self.interned.get(name) {
            return *id;
        }
        let id = self.allocate(name);
        self.interned.insert(name.to_string(), id);
        id
    }

    /// Allocate a fresh symbol that compares unequal to every other
    /// symbol, including interned ones and other uniques sharing the
    /// same description.
    pub fn unique(&mut self, description: &str) -> SymbolId {
        self.allocate(description)
    }

    /// Description the symbol was allocated with, if it came from this
    /// registry.
    pub fn description(&self, id: SymbolId) -> Option<&str> {
        self.descriptions.get(id.0 as usize).map(String::as_str)
    }

    fn allocate(&mut self, description: &str) -> SymbolId {
        let id = SymbolId(self.descriptions.len() as u32);
        self.descriptions.push(description.to_string());
        id
    }
}
