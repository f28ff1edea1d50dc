//! Demonstration runner: the ordered check suite
//!
//! Eight checks, each contrasting a direct-path operation with its
//! reflective counterpart on fresh data. Execution is fail-fast: the
//! first failed expectation aborts the run and reports which check
//! broke and what was expected vs observed. There is no isolation or
//! retry; a failure means a demonstrated contract was violated.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

use crate::callable::{Callable, Invoker};
use crate::direct;
use crate::error::ObjectError;
use crate::key::{PropertyKey, SymbolRegistry};
use crate::record::{PropertyDescriptor, Record};
use crate::reflect::Reflect;
use crate::value::Value;

/// Error type for a single check body.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CheckError {
    /// An expectation did not hold.
    #[error("expected {expected}, got {actual}")]
    AssertionMismatch { expected: String, actual: String },
    /// An object operation failed where the check expected success.
    #[error(transparent)]
    Object(#[from] ObjectError),
}

/// A failed run: the offending check plus the underlying mismatch.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("check '{name}' failed: {source}")]
pub struct CheckFailure {
    pub name: &'static str,
    #[source]
    pub source: CheckError,
}

/// One entry in the suite.
pub struct Check {
    pub name: &'static str,
    run: fn() -> Result<(), CheckError>,
}

/// Result row for a completed check, reportable as JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckOutcome {
    pub name: &'static str,
    pub passed: bool,
}

/// The full suite in execution order.
pub fn all_checks() -> Vec<Check> {
    vec![
        Check { name: "apply-binding", run: check_apply_binding },
        Check { name: "apply-override", run: check_apply_override },
        Check { name: "reflect-apply", run: check_reflect_apply },
        Check { name: "define-property", run: check_define_property },
        Check { name: "delete-property", run: check_delete_property },
        Check { name: "get-primitive", run: check_get_primitive },
        Check { name: "has", run: check_has },
        Check { name: "own-keys", run: check_own_keys },
    ]
}

/// Run every check in order, stopping at the first failure.
pub fn run_all() -> Result<Vec<CheckOutcome>, CheckFailure> {
    let mut outcomes = Vec::new();
    for check in all_checks() {
        (check.run)().map_err(|source| CheckFailure {
            name: check.name,
            source,
        })?;
        outcomes.push(CheckOutcome {
            name: check.name,
            passed: true,
        });
    }
    Ok(outcomes)
}

fn expect_eq<T>(actual: T, expected: T) -> Result<(), CheckError>
where
    T: PartialEq + fmt::Debug,
{
    if actual == expected {
        Ok(())
    } else {
        Err(CheckError::AssertionMismatch {
            expected: format!("{expected:?}"),
            actual: format!("{actual:?}"),
        })
    }
}

// -- shared fixtures --------------------------------------------------------

/// `add(extra) -> receiver.arg1 + receiver.arg2 + extra`
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

fn with_object_body(_receiver: &Record, _args: &[Value]) -> Result<Value, ObjectError> {
    Ok(Value::str("Hey there"))
}

fn with_reflection_body(_receiver: &Record, _args: &[Value]) -> Result<Value, ObjectError> {
    Ok(Value::str("Hello World"))
}

/// Receiver `{arg1, arg2}`.
fn args_receiver(arg1: i64, arg2: i64) -> Record {
    let mut rec = Record::new();
    rec.insert("arg1", Value::Int(arg1));
    rec.insert("arg2", Value::Int(arg2));
    rec
}

// -- checks -----------------------------------------------------------------

/// Direct apply binds an explicit receiver and argument list.
fn check_apply_binding() -> Result<(), CheckError> {
    let add = Callable::new("add", add_body);
    let result = add.apply(&args_receiver(10, 20), &[Value::Int(100)])?;
    expect_eq(result, Value::Int(130))
}

/// The direct apply path is a per-instance slot and can be overridden
/// to always fail.
fn check_apply_override() -> Result<(), CheckError> {
    let mut add = Callable::new("add", add_body);
    add.override_apply(Invoker::Fails("Erro no apply no myObject".to_string()));

    let result = add.apply(&Record::new(), &[]);
    expect_eq(
        result,
        Err(ObjectError::Invocation("Erro no apply no myObject".to_string())),
    )
}

/// Reflective apply ignores the overridden slot and still reaches the
/// original body.
fn check_reflect_apply() -> Result<(), CheckError> {
    let mut add = Callable::new("add", add_body);
    add.override_apply(Invoker::Fails("Erro no apply no myObject".to_string()));

    let result = Reflect::apply(&add, &args_receiver(10, 20), &[Value::Int(100)])?;
    expect_eq(result, Value::Int(130))
}

/// The direct and reflective definition primitives produce equivalent,
/// readable properties on the same target.
fn check_define_property() -> Result<(), CheckError> {
    let mut target = Value::Record(Record::new());

    direct::define_property(
        target.as_record_mut()?,
        "withObject".into(),
        PropertyDescriptor::value_only(Value::Callable(Callable::new(
            "withObject",
            with_object_body,
        ))),
    );
    Reflect::define_property(
        &mut target,
        "withReflection".into(),
        PropertyDescriptor::value_only(Value::Callable(Callable::new(
            "withReflection",
            with_reflection_body,
        ))),
    )?;

    let via_object = direct::get(&target, &"withObject".into());
    let result = via_object.as_callable()?.apply(&Record::new(), &[])?;
    expect_eq(result, Value::str("Hey there"))?;

    let via_reflection = Reflect::get(&target, &"withReflection".into())?;
    let result = via_reflection.as_callable()?.apply(&Record::new(), &[])?;
    expect_eq(result, Value::str("Hello World"))
}

/// Deleting an own key via either primitive leaves it reading as
/// absent and failing the own-property check.
fn check_delete_property() -> Result<(), CheckError> {
    let mut with_delete = Record::new();
    with_delete.insert("user", Value::str("Samuel Ramos"));
    direct::delete(&mut with_delete, &"user".into());

    expect_eq(
        direct::get(&Value::Record(with_delete.clone()), &"user".into()).is_truthy(),
        false,
    )?;
    expect_eq(with_delete.has_own(&"user".into()), false)?;

    let mut with_reflection = Record::new();
    with_reflection.insert("user", Value::str("Samuel Santos"));
    let mut target = Value::Record(with_reflection);
    Reflect::delete_property(&mut target, &"user".into())?;

    expect_eq(target.as_record()?.has_own(&"user".into()), false)?;
    expect_eq(direct::get(&target, &"user".into()).is_truthy(), false)
}

/// Direct get on a bare number reads as undefined; reflective get on
/// the same target refuses with a type mismatch.
fn check_get_primitive() -> Result<(), CheckError> {
    let target = Value::Int(1);

    expect_eq(direct::get(&target, &"username".into()), Value::Undefined)?;
    expect_eq(
        Reflect::get(&target, &"username".into()),
        Err(ObjectError::TypeMismatch {
            expected: "record",
            actual: "number",
        }),
    )
}

/// Direct and reflective membership tests agree on positive and
/// negative cases.
fn check_has() -> Result<(), CheckError> {
    let mut with_user = Record::new();
    with_user.insert("user", Value::str("samuel"));
    let mut with_age = Record::new();
    with_age.insert("age", Value::Int(24));

    expect_eq(direct::has(&with_user, &"user".into()), true)?;
    expect_eq(direct::has(&with_age, &"user".into()), false)?;

    let with_user = Value::Record(with_user);
    let with_age = Value::Record(with_age);
    expect_eq(Reflect::has(&with_user, &"user".into())?, true)?;
    expect_eq(Reflect::has(&with_age, &"user".into())?, false)
}

/// Reflective enumeration covers both key kinds in one call; the
/// direct path needs two calls concatenated in the same order.
fn check_own_keys() -> Result<(), CheckError> {
    let mut registry = SymbolRegistry::new();
    let password = registry.interned("password");
    let user = registry.unique("user");

    let mut database_user = Record::new();
    database_user.insert("id", Value::Int(1));
    database_user.insert(password, Value::Int(123));
    database_user.insert(user, Value::str("samuelramos"));
    let target = Value::Record(database_user);

    let expected = vec![
        PropertyKey::from("id"),
        PropertyKey::from(password),
        PropertyKey::from(user),
    ];

    let rec = target.as_record()?;
    let mut object_keys = direct::string_keys(rec);
    object_keys.extend(direct::symbol_keys(rec));
    expect_eq(object_keys, expected.clone())?;

    expect_eq(Reflect::own_keys(&target)?, expected)
}
