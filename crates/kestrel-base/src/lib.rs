//! Kestrel engine foundation layer.
//!
//! The leaf crate every other engine crate sits on: platform and build
//! identity, fatal invariant checks, bitmask flag algebra, ownership
//! aliases and console logging. No runtime state lives here.

#![forbid(unsafe_op_in_unsafe_fn)]

pub mod fatal;
pub mod flags;
pub mod logging;
pub mod platform;
pub mod types;
pub mod version;

pub use fatal::{report_fatal, CallSite, FatalReport};
pub use flags::{bitflags, clear_flag, set_flag, test_flag, Flags};
pub use platform::{
    BuildProfile, Platform, CURRENT_PLATFORM, CURRENT_PROFILE, DEBUG_BUILD,
};
pub use types::{scoped, shared, Byte, Real, Scoped, Shared, SharedWeak};
