//! Validator combinators
//!
//! Combinators build a validator out of smaller ones. The NTP source check
//! is the canonical use: an IP address *or* a hostname.

pub mod or;

pub use or::{Or, or};
