/// Forwards to [`tracing::trace!`] iff the `tracing` feature is enabled.
macro_rules! trace {
	($($tt:tt)*) => {
		#[cfg(feature = "tracing")]
		::tracing::trace!($($tt)*);
	};
}
