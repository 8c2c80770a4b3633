use std::fmt::{self, Debug, Formatter};

use crate::{Identifier, InvalidArgument, Slot};

/// An ordered list of [`Slot`]s that are called together when the [`Signal`] is [emitted](`Signal::emit`).
///
/// `A` is the argument type (use a tuple for several arguments), `R` the result type of each [`Slot`].
///
/// # Re-entrancy
///
/// [`.connect(…)`](`Signal::connect`) and [`.disconnect(…)`](`Signal::disconnect`) require exclusive access,
/// so slots can't change the [`Signal`] that is calling them.
/// Emitting through a shared reference from within a slot is fine.
///
/// Slots may end lifetimes tracked by slots that run after them during the same emission.
/// Expiry is checked right before each call, so those are skipped.
pub struct Signal<'a, A, R = ()> {
	slots: Vec<(Identifier, Slot<'a, A, R>)>,
}

impl<'a, A, R> Signal<'a, A, R> {
	/// Creates a new [`Signal`] without connected [`Slot`]s.
	#[must_use]
	pub const fn new() -> Self {
		Self { slots: Vec::new() }
	}

	/// Appends `slot`, to be called whenever `self` is emitted.
	///
	/// The returned [`Identifier`] is one past that of the most recently connected slot still present,
	/// or [zero](`Identifier::new`) if there is none.
	/// This means [`Identifier`]s are reused once a [`Signal`] runs empty.
	pub fn connect(&mut self, slot: Slot<'a, A, R>) -> Identifier {
		let id = self
			.slots
			.last()
			.map_or_else(Identifier::new, |(last, _)| Identifier::next(*last));
		self.slots.push((id, slot));
		trace!(?id, slot_count = self.slots.len(), "Connected slot.");
		id
	}

	/// Shorthand for <code>.[connect](`Signal::connect`)([Slot::new](`Slot::new`)(f))</code>.
	pub fn connect_fn(&mut self, f: impl 'a + Fn(A) -> R) -> Identifier {
		self.connect(Slot::new(f))
	}

	/// Removes the [`Slot`] connected as `id` and hands it back.
	///
	/// # Errors
	///
	/// [`InvalidArgument::UnknownIdentifier`] iff no [`Slot`] is connected as `id`.
	pub fn disconnect(&mut self, id: Identifier) -> Result<Slot<'a, A, R>, InvalidArgument> {
		let index = self
			.slots
			.iter()
			.position(|(candidate, _)| *candidate == id)
			.ok_or(InvalidArgument::UnknownIdentifier(id))?;
		let (_, slot) = self.slots.remove(index);
		trace!(?id, slot_count = self.slots.len(), "Disconnected slot.");
		Ok(slot)
	}

	/// Calls each unexpired [`Slot`] in connection order.
	///
	/// Returns the result of the last [`Slot`] that was unexpired when emission started,
	/// or [`None`] if there is no such [`Slot`] or it expired before its turn.
	/// Results of earlier [`Slot`]s are discarded.
	///
	/// Unlike [`Slot::call`], this never fails due to expiry. Expired [`Slot`]s are skipped.
	#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
	pub fn emit(&self, args: A) -> Option<R>
	where
		A: Clone,
	{
		let last = self.slots.iter().rposition(|(_, slot)| !slot.is_expired())?;
		let (earlier, rest) = self.slots.split_at(last);

		for (id, slot) in earlier {
			if slot.is_expired() {
				trace!(?id, "Skipped expired slot.");
				continue;
			}
			(slot.function())(args.clone());
		}

		let (id, slot) = &rest[0];
		if slot.is_expired() {
			trace!(?id, "Skipped expired slot.");
			return None;
		}
		Some((slot.function())(args))
	}

	/// The number of connected [`Slot`]s, including expired ones.
	#[must_use]
	pub fn slot_count(&self) -> usize {
		self.slots.len()
	}

	/// Checks whether no [`Slot`]s are connected.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.slots.is_empty()
	}
}

impl<A: Clone> Signal<'_, A> {
	/// Calls each unexpired [`Slot`] in connection order, for side effects only.
	pub fn broadcast(&self, args: A) {
		let _: Option<()> = self.emit(args);
	}
}

impl<A, R> Default for Signal<'_, A, R> {
	fn default() -> Self {
		Self::new()
	}
}

/// The clone has the same [`Slot`]s connected, with the same [`Identifier`]s.
impl<A, R> Clone for Signal<'_, A, R> {
	fn clone(&self) -> Self {
		Self {
			slots: self.slots.clone(),
		}
	}
}

impl<A, R> Debug for Signal<'_, A, R> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_struct("Signal")
			.field("slots", &self.slots)
			.finish()
	}
}
