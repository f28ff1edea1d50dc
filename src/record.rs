//! Records: insertion-ordered own-property maps
//!
//! A [`Record`] maps [`PropertyKey`]s to [`PropertyDescriptor`]s and
//! remembers insertion order, which drives own-key enumeration:
//! string-like keys first (insertion order), then symbolic keys
//! (insertion order).

use indexmap::IndexMap;

use crate::key::PropertyKey;
use crate::value::Value;

/// Property metadata: a value plus attribute flags.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyDescriptor {
    pub value: Value,
    pub writable: bool,
    pub enumerable: bool,
    pub configurable: bool,
}

impl PropertyDescriptor {
    /// Data descriptor with literal-assignment flags (all true).
    pub fn data(value: Value) -> Self {
        Self {
            value,
            writable: true,
            enumerable: true,
            configurable: true,
        }
    }

    /// Value-only descriptor with definition-primitive default flags
    /// (all false), matching what a bare `{ value }` definition
    /// produces.
    pub fn value_only(value: Value) -> Self {
        Self {
            value,
            writable: false,
            enumerable: false,
            configurable: false,
        }
    }
}

/// An unordered key-value mapping whose own keys keep insertion order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    properties: IndexMap<PropertyKey, PropertyDescriptor>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Literal-style assignment: stores `value` under `key` with
    /// all-true attribute flags.
    pub fn insert(&mut self, key: impl Into<PropertyKey>, value: Value) {
        self.properties
            .insert(key.into(), PropertyDescriptor::data(value));
    }

    /// Define or update a property from a full descriptor.
    ///
    /// Returns `false` without changing anything when the key already
    /// exists as non-configurable.
    pub fn define_own_property(&mut self, key: PropertyKey, desc: PropertyDescriptor) -> bool {
        if let Some(current) = self.properties.get(&key) {
            if !current.configurable {
                return false;
            }
        }
        self.properties.insert(key, desc);
        true
    }

    /// Own-property value, if present.
    pub fn get_own(&self, key: &PropertyKey) -> Option<&Value> {
        self.properties.get(key).map(|desc| &desc.value)
    }

    /// Own-property descriptor, if present.
    pub fn get_own_descriptor(&self, key: &PropertyKey) -> Option<&PropertyDescriptor> {
        self.properties.get(key)
    }

    /// Explicit own-property existence check.
    pub fn has_own(&self, key: &PropertyKey) -> bool {
        self.properties.contains_key(key)
    }

    /// Remove an own property, preserving the insertion order of the
    /// remaining keys.
    ///
    /// Returns `false` if the property exists but is non-configurable;
    /// deleting an absent key is vacuously `true`.
    pub fn delete(&mut self, key: &PropertyKey) -> bool {
        match self.properties.get(key) {
            Some(desc) if !desc.configurable => false,
            Some(_) => {
                self.properties.shift_remove(key);
                true
            }
            None => true,
        }
    }

    /// String-like own keys in insertion order.
    pub fn string_keys(&self) -> Vec<PropertyKey> {
        self.properties
            .keys()
            .filter(|k| k.is_str())
            .cloned()
            .collect()
    }

    /// Symbolic own keys in insertion order.
    pub fn symbol_keys(&self) -> Vec<PropertyKey> {
        self.properties
            .keys()
            .filter(|k| k.is_symbol())
            .cloned()
            .collect()
    }

    /// All own keys: string-like keys in insertion order, then
    /// symbolic keys in insertion order.
    pub fn own_keys(&self) -> Vec<PropertyKey> {
        let mut keys = self.string_keys();
        keys.extend(self.symbol_keys());
        keys
    }
}
