/*!
# Optscan: Diagnostic Sinks.
*/

use crate::OptError;



/// # Diagnostic Sink.
///
/// When diagnostics are enabled, [`OptScan`](crate::OptScan) hands every
/// illegal option and missing value to one of these as it is encountered.
///
/// This is purely a side channel. The outcome returned by
/// [`OptScan::next_option`](crate::OptScan::next_option) is what callers
/// should actually act on.
///
/// Any `FnMut(&OptError)` closure is a sink, which makes capturing output
/// in tests trivial:
///
/// ```
/// use optscan::{OptScan, Outcome, ScanConfig};
/// use std::{cell::RefCell, rc::Rc};
///
/// let log = Rc::new(RefCell::new(Vec::new()));
/// let log2 = Rc::clone(&log);
/// let mut scan = OptScan::new(ScanConfig::args(["-y"], "hx"))
///     .unwrap()
///     .with_sink(move |e: &optscan::OptError| log2.borrow_mut().push(e.to_string()));
///
/// assert_eq!(scan.next_option(), Outcome::Illegal('y'));
/// assert_eq!(log.borrow().as_slice(), ["illegal option: y"]);
/// ```
pub trait Diagnostics {
	/// # Report.
	fn report(&mut self, err: &OptError);
}

impl<F: FnMut(&OptError)> Diagnostics for F {
	#[inline]
	fn report(&mut self, err: &OptError) { self(err); }
}



#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
/// # Standard Error Sink.
///
/// Print each problem as a single line to STDERR. This is the default.
pub struct Stderr;

impl Diagnostics for Stderr {
	#[inline]
	fn report(&mut self, err: &OptError) { eprintln!("{err}"); }
}



#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
/// # Tracing Sink.
///
/// Emit each problem as a `tracing` warning instead, for apps that already
/// have a subscriber wired up.
pub struct Tracing;

impl Diagnostics for Tracing {
	#[inline]
	fn report(&mut self, err: &OptError) {
		tracing::warn!(option = %err.option(), "{err}");
	}
}



#[cfg(test)]
mod test {
	use super::*;
	use crate::{
		OptScan,
		Outcome,
		ScanConfig,
	};

	#[test]
	fn t_sinks() {
		// The stock sinks just need to not blow up.
		let err = OptError::Unknown('y');
		Stderr.report(&err);
		Tracing.report(&err);

		// The default sink, then the tracing sink, each wired into a scan.
		let mut scan = OptScan::new(ScanConfig::args(["-y", "-a"], "a:"))
			.expect("In-memory scanners can't fail.");
		assert_eq!(scan.next_option(), Outcome::Illegal('y'));

		let mut scan = scan.with_sink(Tracing);
		assert_eq!(scan.next_option(), Outcome::Illegal('a'));
		assert_eq!(scan.last_error(), Some(OptError::MissingValue('a')));

		// Closures work too.
		let mut seen = Vec::new();
		let mut sink = |e: &OptError| seen.push(e.option());
		sink.report(&err);
		sink.report(&OptError::MissingValue('a'));
		assert_eq!(seen, ['y', 'a']);
	}
}
