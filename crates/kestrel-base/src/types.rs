//! Ownership and scalar aliases shared across engine crates.
//!
//! Aliases, not wrappers: they document intent at API boundaries and keep
//! the ownership vocabulary in one place, nothing more.

use std::sync::{Arc, Weak};

/// Single-owner heap allocation.
pub type Scoped<T> = Box<T>;

/// Thread-safe shared ownership.
pub type Shared<T> = Arc<T>;

/// Non-owning observer of a [`Shared`] value.
pub type SharedWeak<T> = Weak<T>;

/// Canonical engine scalar. Width is a project-wide policy, not a
/// per-call-site choice.
pub type Real = f32;

/// Raw byte in blob and stream signatures.
pub type Byte = u8;

#[inline]
pub fn scoped<T>(value: T) -> Scoped<T> {
    Box::new(value)
}

#[inline]
pub fn shared<T>(value: T) -> Shared<T> {
    Arc::new(value)
}
