//! Shared prelude of the Vigil workspace. Keeps the common vocabulary of all
//! crates in one place, so every module can start with a single glob import.

pub use core::any::type_name;
pub use core::fmt::Debug;
pub use derive_more::*;
pub use failure::Fail;
pub use shrinkwraprs::Shrinkwrap;
pub use std::cell::RefCell;
pub use std::convert::Infallible;
pub use std::fmt::Display;
pub use std::marker::PhantomData;
pub use std::ops::Deref;
pub use std::ops::DerefMut;
pub use std::rc::Rc;

/// Shorthand for `Default::default()`.
pub fn default<T: Default>() -> T {
    Default::default()
}
