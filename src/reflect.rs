//! Reflective operations: fixed primitives with strict validation
//!
//! The `Reflect` namespace mirrors each direct-path operation as an
//! ordinary function with two differences in contract:
//!
//! - every primitive validates its target kind and fails with
//!   `ObjectError::TypeMismatch` instead of degrading silently
//! - invocation goes straight to the callable's body, so a per-instance
//!   override of the direct apply slot cannot intercept it

use crate::callable::Callable;
use crate::error::ObjectError;
use crate::key::PropertyKey;
use crate::record::{PropertyDescriptor, Record};
use crate::value::Value;

/// Namespace struct for the reflective primitives.
pub struct Reflect;

impl Reflect {
    /// Invoke `callable` with an explicit receiver and argument list.
    ///
    /// Bypasses the instance's invoker slot entirely: an overridden
    /// direct apply path has no effect here.
    pub fn apply(
        callable: &Callable,
        receiver: &Record,
        args: &[Value],
    ) -> Result<Value, ObjectError> {
        (callable.body())(receiver, args)
    }

    /// Read `key` off `target`.
    ///
    /// A missing key on a record reads as `Undefined`; a non-record
    /// target is a `TypeMismatch`, unlike the silent direct path.
    pub fn get(target: &Value, key: &PropertyKey) -> Result<Value, ObjectError> {
        let rec = target.as_record()?;
        Ok(rec.get_own(key).cloned().unwrap_or(Value::Undefined))
    }

    /// Does `target` have `key`?
    pub fn has(target: &Value, key: &PropertyKey) -> Result<bool, ObjectError> {
        Ok(target.as_record()?.has_own(key))
    }

    /// Remove `key` from `target`, preserving remaining key order.
    pub fn delete_property(target: &mut Value, key: &PropertyKey) -> Result<bool, ObjectError> {
        Ok(target.as_record_mut()?.delete(key))
    }

    /// Define or update a property on `target` from a descriptor.
    /// Produces a property equivalent to the direct definition
    /// primitive's.
    pub fn define_property(
        target: &mut Value,
        key: PropertyKey,
        desc: PropertyDescriptor,
    ) -> Result<bool, ObjectError> {
        Ok(target.as_record_mut()?.define_own_property(key, desc))
    }

    /// Every own key in one call: string-like keys in insertion order,
    /// then symbolic keys in insertion order. The direct path needs
    /// two separate enumerations to cover the same set.
    pub fn own_keys(target: &Value) -> Result<Vec<PropertyKey>, ObjectError> {
        Ok(target.as_record()?.own_keys())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::callable::Invoker;
    use crate::key::SymbolRegistry;

    fn add_body(receiver: &Record, args: &[Value]) -> Result<Value, ObjectError> {
        let a = receiver
            .get_own(&"arg1".into())
            .unwrap_or(&Value::Undefined)
            .as_int()?;
        let b = receiver
            .get_own(&"arg2".into())
            .unwrap_or(&Value::Undefined)
            .as_int()?;
        let extra = args.first().unwrap_or(&Value::Undefined).as_int()?;
        Ok(Value::Int(a + b + extra))
    }

    #[test]
    fn test_apply_ignores_overridden_slot() {
        let mut add = Callable::new("add", add_body);
        add.override_apply(Invoker::Fails("Erro no apply no myObject".to_string()));

        let mut receiver = Record::new();
        receiver.insert("arg1", Value::Int(10));
        receiver.insert("arg2", Value::Int(20));

        // Direct path fails, reflective path still computes the sum.
        assert!(add.apply(&receiver, &[Value::Int(100)]).is_err());
        let result = Reflect::apply(&add, &receiver, &[Value::Int(100)]).unwrap();
        assert_eq!(result, Value::Int(130));
    }

    #[test]
    fn test_get_on_primitive_is_type_mismatch() {
        let err = Reflect::get(&Value::Int(1), &"username".into()).unwrap_err();
        assert_eq!(
            err,
            ObjectError::TypeMismatch {
                expected: "record",
                actual: "number",
            }
        );
    }

    #[test]
    fn test_get_missing_key_is_undefined() {
        let target = Value::Record(Record::new());
        assert_eq!(Reflect::get(&target, &"user".into()).unwrap(), Value::Undefined);
    }

    #[test]
    fn test_has_agrees_with_direct() {
        let mut rec = Record::new();
        rec.insert("user", Value::str("samuel"));
        let target = Value::Record(rec);

        for key in [PropertyKey::from("user"), PropertyKey::from("age")] {
            let direct = crate::direct::has(target.as_record().unwrap(), &key);
            let reflective = Reflect::has(&target, &key).unwrap();
            assert_eq!(direct, reflective);
        }
    }

    #[test]
    fn test_delete_property() {
        let mut rec = Record::new();
        rec.insert("user", Value::str("Samuel Santos"));
        let mut target = Value::Record(rec);

        assert!(Reflect::delete_property(&mut target, &"user".into()).unwrap());
        assert!(!Reflect::has(&target, &"user".into()).unwrap());
        assert!(Reflect::delete_property(&mut Value::Int(1), &"user".into()).is_err());
    }

    #[test]
    fn test_define_property_equivalent_to_direct() {
        let mut target = Value::Record(Record::new());
        Reflect::define_property(
            &mut target,
            "withReflection".into(),
            PropertyDescriptor::value_only(Value::str("Hello World")),
        )
        .unwrap();

        let direct_rec = target.as_record_mut().unwrap();
        crate::direct::define_property(
            direct_rec,
            "withObject".into(),
            PropertyDescriptor::value_only(Value::str("Hey there")),
        );

        let rec = target.as_record().unwrap();
        let via_reflection = rec.get_own_descriptor(&"withReflection".into()).unwrap();
        let via_object = rec.get_own_descriptor(&"withObject".into()).unwrap();
        assert_eq!(via_reflection.writable, via_object.writable);
        assert_eq!(via_reflection.enumerable, via_object.enumerable);
        assert_eq!(via_reflection.configurable, via_object.configurable);
    }

    #[test]
    fn test_own_keys_single_call_matches_two_direct_calls() {
        let mut registry = SymbolRegistry::new();
        let password = registry.interned("password");
        let user = registry.unique("user");

        let mut rec = Record::new();
        rec.insert("id", Value::Int(1));
        rec.insert(password, Value::Int(123));
        rec.insert(user, Value::str("samuelramos"));
        let target = Value::Record(rec);

        let reflective = Reflect::own_keys(&target).unwrap();
        assert_eq!(
            reflective,
            vec![
                PropertyKey::from("id"),
                PropertyKey::from(password),
                PropertyKey::from(user),
            ]
        );

        let rec = target.as_record().unwrap();
        let mut direct = crate::direct::string_keys(rec);
        direct.extend(crate::direct::symbol_keys(rec));
        assert_eq!(direct, reflective);
    }

    #[test]
    fn test_own_keys_on_primitive_is_type_mismatch() {
        assert!(Reflect::own_keys(&Value::str("nope")).is_err());
    }
}
