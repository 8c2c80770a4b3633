/// Refers to one [`Slot`](`crate::Slot`) connected to one specific [`Signal`](`crate::Signal`).
///
/// [`Identifier`]s are only meaningful towards the [`Signal`](`crate::Signal`) that issued them,
/// and only unique among the slots connected to it *at the same time*.
/// The [`Default`] value (zero) is an ordinary identifier: It's the first one any [`Signal`](`crate::Signal`) hands out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Identifier(u32);

impl Identifier {
	/// The initial value.
	#[must_use]
	pub const fn new() -> Self {
		Self(0)
	}

	/// The value following `x`. Wraps around on overflow.
	#[must_use = "Pure function."]
	pub const fn next(x: Self) -> Self {
		Self(x.0.wrapping_add(1))
	}
}
