use std::{
	fmt::{self, Debug, Formatter},
	rc::Rc,
};

use tap::Tap;

use crate::{Expired, InvalidArgument, LifetimeObserver};

/// Type of the functions stored in [`Slot`]s. Dynamic dispatch.
///
/// Functions with several parameters take them as one tuple.
pub type SlotFn<'a, A, R> = dyn 'a + Fn(A) -> R;

/// A function that deactivates itself once any of the lifetimes it tracks ends.
///
/// A [`Slot`] without tracked lifetimes never expires.
///
/// Calling a [`Slot`] directly through [`.call(…)`](`Slot::call`) fails with [`Expired`] after expiry,
/// while [`Signal::emit`](`crate::Signal::emit`) silently skips expired [`Slot`]s.
pub struct Slot<'a, A, R = ()> {
	function: Rc<SlotFn<'a, A, R>>,
	observers: Vec<LifetimeObserver>,
}

impl<'a, A, R> Slot<'a, A, R> {
	/// Creates a new [`Slot`] calling `f` that doesn't track anything yet.
	pub fn new(f: impl 'a + Fn(A) -> R) -> Self {
		Self::from_shared(Rc::new(f))
	}

	/// Creates a new [`Slot`] calling `f`, which must be present.
	///
	/// # Errors
	///
	/// [`InvalidArgument::EmptyFunction`] iff `f` is [`None`].
	pub fn try_new(f: Option<impl 'a + Fn(A) -> R>) -> Result<Self, InvalidArgument> {
		f.map(Self::new).ok_or(InvalidArgument::EmptyFunction)
	}

	/// Creates a new [`Slot`] sharing `function` with its other owners.
	pub fn from_shared(function: Rc<SlotFn<'a, A, R>>) -> Self {
		Self {
			function,
			observers: Vec::new(),
		}
	}

	/// Tracks another lifetime. This [`Slot`] expires when *any* of the tracked lifetimes end.
	///
	/// `target` may be a [`LifetimeObserver`], a [`&Lifetime`](`crate::Lifetime`) or any [`&Rc<T>`](`Rc`).
	/// Tracking the same lifetime more than once is allowed and not checked.
	pub fn track(&mut self, target: impl Into<LifetimeObserver>) -> &mut Self {
		self.observers.push(target.into());
		self
	}

	/// By-value version of [`.track(…)`](`Slot::track`), for building [`Slot`]s inline.
	#[must_use]
	pub fn tracking(self, target: impl Into<LifetimeObserver>) -> Self {
		self.tap_mut(|slot| {
			slot.track(target);
		})
	}

	/// Stops tracking the first tracked lifetime whose [`id`](`LifetimeObserver::id`) matches `target`'s.
	///
	/// Since all expired observers share an `id` of `0`, untrack lifetimes **before** they end.
	///
	/// # Errors
	///
	/// [`InvalidArgument::NotTracked`] iff no tracked lifetime matches. `self` is unchanged in that case.
	pub fn untrack(&mut self, target: impl Into<LifetimeObserver>) -> Result<&mut Self, InvalidArgument> {
		let id = target.into().id();
		let index = self
			.observers
			.iter()
			.position(|observer| observer.id() == id)
			.ok_or(InvalidArgument::NotTracked)?;
		self.observers.remove(index);
		Ok(self)
	}

	/// Calls the function, unless this [`Slot`] has expired.
	///
	/// # Errors
	///
	/// [`Expired`] iff any tracked lifetime has ended. The function isn't called in that case.
	pub fn call(&self, args: A) -> Result<R, Expired> {
		if self.is_expired() {
			return Err(Expired);
		}
		Ok((self.function)(args))
	}

	/// Checks whether any of the tracked lifetimes has ended.
	///
	/// `false` if nothing is tracked.
	#[must_use]
	pub fn is_expired(&self) -> bool {
		self.observers.iter().any(LifetimeObserver::is_expired)
	}

	/// The wrapped function. Calling it directly bypasses the expiry check.
	#[must_use]
	pub fn function(&self) -> &Rc<SlotFn<'a, A, R>> {
		&self.function
	}

	/// The tracked lifetimes, in the order they were added.
	#[must_use]
	pub fn observers(&self) -> &[LifetimeObserver] {
		&self.observers
	}
}

/// Clones share the function and track the same lifetimes as the original.
impl<A, R> Clone for Slot<'_, A, R> {
	fn clone(&self) -> Self {
		Self {
			function: Rc::clone(&self.function),
			observers: self.observers.clone(),
		}
	}
}

impl<A, R> Debug for Slot<'_, A, R> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_struct("Slot")
			.field("observers", &self.observers)
			.finish_non_exhaustive()
	}
}

/// Fails with [`InvalidArgument::EmptyFunction`] for [`None`].
impl<'a, A, R> TryFrom<Option<Rc<SlotFn<'a, A, R>>>> for Slot<'a, A, R> {
	type Error = InvalidArgument;

	fn try_from(function: Option<Rc<SlotFn<'a, A, R>>>) -> Result<Self, Self::Error> {
		function
			.map(Self::from_shared)
			.ok_or(InvalidArgument::EmptyFunction)
	}
}
