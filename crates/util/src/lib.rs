//! jsonfeed-util - Shared value types for the jsonfeed crates.
//!
//! The main export is [`Optional`], a tri-state container that keeps
//! "absent", "null" and "present" apart across a JSON round-trip.

pub mod optional;

// Re-exports for convenience
pub use optional::{OptBool, OptInt, OptString, Optional};
