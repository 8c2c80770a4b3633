use std::{cell::RefCell, collections::VecDeque, fmt::Debug};

/// Records side effects so tests can check which slots ran, and in what order.
pub struct Validator<T>(RefCell<VecDeque<T>>);

impl<T> Validator<T> {
	pub const fn new() -> Self {
		Self(RefCell::new(VecDeque::new()))
	}

	pub fn push(&self, value: T) {
		self.0.borrow_mut().push_back(value);
	}

	#[track_caller]
	pub fn expect(&self, expected: impl IntoIterator<Item = T>)
	where
		T: Debug + Eq,
	{
		let mut binding = self.0.borrow_mut();
		let mut a = binding.drain(..);
		let mut b = expected.into_iter();
		loop {
			match (a.next(), b.next()) {
				(None, None) => break,
				(a, b) => assert_eq!(a, b),
			}
		}
	}
}
