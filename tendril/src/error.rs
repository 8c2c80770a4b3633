use thiserror::Error;

use crate::Identifier;

/// An argument didn't satisfy the callee's preconditions.
///
/// The operation that returned this had no effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[non_exhaustive]
pub enum InvalidArgument {
	/// A [`LifetimeObserver`](`crate::LifetimeObserver`) can't observe an empty handle.
	#[error("can't observe an empty handle")]
	EmptyHandle,
	/// A [`Slot`](`crate::Slot`) must be initialised with a function.
	#[error("slot must be initialised with a valid function")]
	EmptyFunction,
	/// [`Slot::untrack`](`crate::Slot::untrack`) found no matching observer.
	#[error("the untrack target is not tracked by this slot")]
	NotTracked,
	/// No slot with this [`Identifier`] is connected to the signal.
	#[error("no connected slot matches {0:?}")]
	UnknownIdentifier(Identifier),
}

/// Returned when calling a [`Slot`](`crate::Slot`) directly after one of its tracked lifetimes ended.
///
/// [`Signal::emit`](`crate::Signal::emit`) skips such slots instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("a lifetime tracked by this slot has expired")]
pub struct Expired;
