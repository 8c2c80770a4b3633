#![warn(clippy::pedantic)]
#![warn(missing_docs)]
#![warn(unreachable_pub)]
#![cfg_attr(feature = "_doc", doc = include_str!("../README.md"))]
//!
//! # Threading Notes
//!
//! Everything in this crate is single-threaded and built on [`Rc`](`std::rc::Rc`).  
//! None of the types are [`Send`] or [`Sync`], so cross-thread use is rejected at compile time.

#[macro_use]
mod macros;

mod error;
pub use error::{Expired, InvalidArgument};

mod identifier;
pub use identifier::Identifier;

pub mod lifetime;
pub use lifetime::{Lifetime, LifetimeObserver};

mod slot;
pub use slot::{Slot, SlotFn};

mod signal;
pub use signal::Signal;
