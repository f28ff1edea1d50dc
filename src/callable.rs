//! Callables with a per-instance, overridable invocation slot
//!
//! A [`Callable`] is a named operation bound to a receiver record at
//! invocation time. The *direct* invocation path ([`Callable::apply`])
//! dispatches through a per-instance [`Invoker`] slot, which can be
//! swapped out to a variant that always fails - mirroring how an
//! apply-like property on the callable itself can be overwritten.
//! The reflective path ([`crate::reflect::Reflect::apply`]) calls the
//! underlying body and never consults the slot.

use crate::error::ObjectError;
use crate::record::Record;
use crate::value::Value;

/// Body of a callable: receives the bound receiver and the argument
/// list.
pub type BodyFn = fn(&Record, &[Value]) -> Result<Value, ObjectError>;

/// Polymorphic invocation slot for the direct path.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Invoker {
    /// Dispatch to the callable's body.
    #[default]
    Default,
    /// Fail every invocation with `ObjectError::Invocation` carrying
    /// this message.
    Fails(String),
}

/// A named operation bindable to an arbitrary receiver record.
#[derive(Debug, Clone, PartialEq)]
pub struct Callable {
    name: String,
    body: BodyFn,
    invoker: Invoker,
}

impl Callable {
    pub fn new(name: &str, body: BodyFn) -> Self {
        Self {
            name: name.to_string(),
            body,
            invoker: Invoker::Default,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Direct invocation: bind `receiver`, pass `args`, dispatch
    /// through the instance's invoker slot.
    pub fn apply(&self, receiver: &Record, args: &[Value]) -> Result<Value, ObjectError> {
        match &self.invoker {
            Invoker::Default => (self.body)(receiver, args),
            Invoker::Fails(message) => Err(ObjectError::Invocation(message.clone())),
        }
    }

    /// Replace this instance's invoker slot. Only this instance is
    /// affected; clones taken earlier keep their own slot.
    pub fn override_apply(&mut self, invoker: Invoker) {
        self.invoker = invoker;
    }

    /// The body, independent of the invoker slot. Used by the
    /// reflective invocation path.
    pub(crate) fn body(&self) -> BodyFn {
        self.body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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

    fn receiver(arg1: i64, arg2: i64) -> Record {
        let mut rec = Record::new();
        rec.insert("arg1", Value::Int(arg1));
        rec.insert("arg2", Value::Int(arg2));
        rec
    }

    #[test]
    fn test_apply_binds_receiver_and_args() {
        let add = Callable::new("add", add_body);
        let result = add.apply(&receiver(10, 20), &[Value::Int(100)]).unwrap();
        assert_eq!(result, Value::Int(130));
    }

    #[test]
    fn test_apply_for_various_receivers() {
        let add = Callable::new("add", add_body);
        for (a, b, extra) in [(0, 0, 0), (1, 2, 3), (-5, 5, 100), (40, -10, 70)] {
            let result = add.apply(&receiver(a, b), &[Value::Int(extra)]).unwrap();
            assert_eq!(result, Value::Int(a + b + extra));
        }
    }

    #[test]
    fn test_overridden_apply_always_fails() {
        let mut add = Callable::new("add", add_body);
        add.override_apply(Invoker::Fails("Erro no apply no myObject".to_string()));

        let err = add.apply(&Record::new(), &[]).unwrap_err();
        assert_eq!(
            err,
            ObjectError::Invocation("Erro no apply no myObject".to_string())
        );

        // Arguments are irrelevant once the slot is overridden.
        let err = add
            .apply(&receiver(10, 20), &[Value::Int(100)])
            .unwrap_err();
        assert!(matches!(err, ObjectError::Invocation(_)));
    }

    #[test]
    fn test_override_is_per_instance() {
        let original = Callable::new("add", add_body);
        let mut overridden = original.clone();
        overridden.override_apply(Invoker::Fails("boom".to_string()));

        assert!(overridden.apply(&receiver(1, 2), &[Value::Int(3)]).is_err());
        assert_eq!(
            original.apply(&receiver(1, 2), &[Value::Int(3)]).unwrap(),
            Value::Int(6)
        );
    }

    #[test]
    fn test_apply_rejects_non_numeric_receiver() {
        let add = Callable::new("add", add_body);
        let mut rec = Record::new();
        rec.insert("arg1", Value::str("ten"));
        rec.insert("arg2", Value::Int(20));
        assert!(matches!(
            add.apply(&rec, &[Value::Int(100)]),
            Err(ObjectError::TypeMismatch { .. })
        ));
    }
}
