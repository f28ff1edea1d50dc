//! Objlens - Direct vs reflective object operation semantics
//!
//! This library provides functionality to:
//! - Model records with string-like and symbolic property keys
//! - Perform object operations on two paths: direct (operator-style,
//!   silently degrading, per-instance overridable) and reflective
//!   (fixed primitives with strict target validation)
//! - Run an ordered, fail-fast check suite demonstrating where the
//!   two paths agree and where they diverge by contract

pub mod callable;
pub mod checks;
pub mod cli;
pub mod direct;
pub mod error;
pub mod key;
pub mod record;
pub mod reflect;
pub mod value;
