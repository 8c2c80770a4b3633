//! [`Lifetime`] markers and their read-only [`LifetimeObserver`]s.
//!
//! A [`Lifetime`] is usually stored as field of an object that [`Slot`](`crate::Slot`)s depend on.
//! Dropping that object expires each [`LifetimeObserver`] created through [`Lifetime::track`],
//! which in turn deactivates every [`Slot`](`crate::Slot`) that tracks one of them.
//!
//! # Cloning
//!
//! **[`Clone`] does not share tracking.** Each clone of a [`Lifetime`] starts a new, independent lifetime,
//! so observers created from the original don't follow the clone.
//! [`Clone::clone_from`] likewise *replaces* the target's lifetime with a new one, expiring its observers.
//!
//! Moving a [`Lifetime`] keeps its observers attached, as the marker itself moves along.

use std::{
	fmt::{self, Debug, Formatter},
	rc::{Rc, Weak},
};

use crate::InvalidArgument;

/// Type-erasure helper. Observers only care about the allocation, never the value.
trait Erased {}
impl<T: ?Sized> Erased for T {}

/// Marks the existence of its owner towards any number of [`LifetimeObserver`]s.
///
/// See the [module documentation](`self`) for the unusual [`Clone`] semantics.
pub struct Lifetime {
	life: Rc<()>,
}

impl Lifetime {
	/// Starts a new lifetime to track.
	#[must_use]
	pub fn new() -> Self {
		Self { life: Rc::new(()) }
	}

	/// Ends the current lifetime and starts a new one in its place.
	///
	/// All [`LifetimeObserver`]s created from `self` so far expire.
	pub fn renew(&mut self) {
		self.life = Rc::new(());
	}

	/// Creates a [`LifetimeObserver`] that expires when `self` is dropped or [renewed](`Lifetime::renew`).
	///
	/// The observer stays valid (but expired) after that.
	#[must_use]
	pub fn track(&self) -> LifetimeObserver {
		LifetimeObserver::new(&self.life)
	}
}

impl Default for Lifetime {
	fn default() -> Self {
		Self::new()
	}
}

/// Creates an **independent** [`Lifetime`]. Existing observers don't track the clone.
impl Clone for Lifetime {
	fn clone(&self) -> Self {
		Self::new()
	}

	/// Same as [`Lifetime::renew`]. Existing observers of `self` expire.
	fn clone_from(&mut self, _source: &Self) {
		self.renew();
	}
}

impl Debug for Lifetime {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_struct("Lifetime")
			.field("id", &Rc::as_ptr(&self.life))
			.finish()
	}
}

/// A read-only view of a [`Lifetime`] (or of any [`Rc`] allocation).
///
/// An observer can't extend or end the lifetime it observes. It only reports whether that lifetime is over.
/// Once expired, it stays expired.
#[derive(Clone)]
pub struct LifetimeObserver {
	handle: Weak<dyn Erased>,
}

impl LifetimeObserver {
	/// Observes the allocation managed by `target`.
	///
	/// The observer expires once the last strong reference to it is dropped.
	#[must_use]
	pub fn new<T: 'static>(target: &Rc<T>) -> Self {
		let handle: Weak<T> = Rc::downgrade(target);
		Self { handle }
	}

	/// Checks whether the observed lifetime has ended.
	#[must_use]
	pub fn is_expired(&self) -> bool {
		self.handle.strong_count() == 0
	}

	/// An identity associated with the observed lifetime.
	///
	/// This is stable and non-zero while the lifetime lasts, and `0` after it expires.
	/// Check [`.is_expired()`](`LifetimeObserver::is_expired`) first where that distinction matters,
	/// as all expired observers share this value.
	#[must_use]
	pub fn id(&self) -> usize {
		if self.is_expired() {
			0
		} else {
			self.handle.as_ptr().cast::<()>().addr()
		}
	}
}

impl Debug for LifetimeObserver {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_struct("LifetimeObserver")
			.field("id", &self.id())
			.field("expired", &self.is_expired())
			.finish()
	}
}

impl From<&Lifetime> for LifetimeObserver {
	fn from(lifetime: &Lifetime) -> Self {
		lifetime.track()
	}
}

impl From<&LifetimeObserver> for LifetimeObserver {
	fn from(observer: &LifetimeObserver) -> Self {
		observer.clone()
	}
}

impl<T: 'static> From<&Rc<T>> for LifetimeObserver {
	fn from(target: &Rc<T>) -> Self {
		Self::new(target)
	}
}

/// Fails with [`InvalidArgument::EmptyHandle`] iff `handle` can't be upgraded,
/// i.e. if it's [empty](`Weak::new`) or its allocation was already dropped.
impl<T: 'static> TryFrom<Weak<T>> for LifetimeObserver {
	type Error = InvalidArgument;

	fn try_from(handle: Weak<T>) -> Result<Self, Self::Error> {
		if handle.strong_count() == 0 {
			return Err(InvalidArgument::EmptyHandle);
		}
		Ok(Self { handle })
	}
}
