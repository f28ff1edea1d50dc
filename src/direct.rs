//! Direct-path operations: conventional operator semantics
//!
//! These mirror plain object-operator syntax: property access that
//! silently degrades to `Undefined`, a delete operator, a membership
//! operator, and per-kind key enumeration that requires two calls to
//! cover both key kinds. The reflective counterparts with stricter
//! failure behavior live in [`crate::reflect`].

use crate::key::PropertyKey;
use crate::record::{PropertyDescriptor, Record};
use crate::value::Value;

/// Property access on any target.
///
/// Never fails: a missing key or a non-record target (e.g. a bare
/// number) reads as `Undefined`. Contrast with
/// [`Reflect::get`](crate::reflect::Reflect::get), which refuses
/// non-record targets.
pub fn get(target: &Value, key: &PropertyKey) -> Value {
    match target {
        Value::Record(rec) => rec.get_own(key).cloned().unwrap_or(Value::Undefined),
        _ => Value::Undefined,
    }
}

/// Membership operator: does `record` have `key`?
pub fn has(record: &Record, key: &PropertyKey) -> bool {
    record.has_own(key)
}

/// Delete operator.
///
/// Known to be the slow path for key removal; prefer
/// [`Reflect::delete_property`](crate::reflect::Reflect::delete_property)
/// when possible. The observable outcome is identical.
pub fn delete(record: &mut Record, key: &PropertyKey) -> bool {
    record.delete(key)
}

/// Direct property-definition primitive.
pub fn define_property(record: &mut Record, key: PropertyKey, desc: PropertyDescriptor) -> bool {
    record.define_own_property(key, desc)
}

/// String-like own keys in insertion order. Covering every own key on
/// the direct path takes this call plus [`symbol_keys`], concatenated
/// by the caller.
pub fn string_keys(record: &Record) -> Vec<PropertyKey> {
    record.string_keys()
}

/// Symbolic own keys in insertion order.
pub fn symbol_keys(record: &Record) -> Vec<PropertyKey> {
    record.symbol_keys()
}
