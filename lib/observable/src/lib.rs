//! This crate implements a compile-time observer composition primitive. An
//! [`Observable`] attaches a fixed, heterogeneous, ordered sequence of observer
//! components to a subject and dispatches typed event notifications to every one
//! of them, synchronously and in a fixed order. All wiring is resolved at
//! compile time: there is no runtime polymorphism, no heap allocation, and no
//! type erasure, so composing cross-cutting reactions into an object costs
//! nothing over calling the reactions by hand.
//!
//! Observer sequences are ordinary tuples. Their arity and per-slot types are
//! frozen when the sequence is built and only slot values may change, so
//! out-of-range slot access is a compile error rather than a runtime condition.
//! Dispatch visits slots from the last one down to slot 0 and aborts on the
//! first failure, relaying it unchanged to the caller.

#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unsafe_code)]
#![warn(unused_import_braces)]
#![warn(unused_qualifications)]

pub mod list;
pub mod notify;
pub mod observable;

mod macros;

pub use list::*;
pub use notify::*;
pub use observable::*;
