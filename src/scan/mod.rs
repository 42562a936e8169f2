/*!
# Optscan: Scanner.

This module contains [`OptScan`], a getopt-style scanner for single-character
options.
*/

mod error;
mod sink;
mod source;
mod spec;

pub use error::{
	OptError,
	OptScanError,
};
pub use sink::{
	Diagnostics,
	Stderr,
	Tracing,
};
pub use source::{
	ARG_FILE_SENTINEL,
	ScanConfig,
	Source,
};
pub use spec::OptSpec;
use std::{
	fmt,
	iter::FusedIterator,
};



/// # Short Option Scanner.
///
/// `OptScan` walks an argument list exactly once, from the front, handing back
/// one option per call to [`OptScan::next_option`] until it runs out of
/// options, after which everything left over is available via
/// [`OptScan::remaining`].
///
/// The rules are deliberately old-school:
/// * Options are single characters declared in an [`OptSpec`], like `"a:hx"`;
/// * Options may be clustered, so `-hx` is the same as `-h -x`;
/// * A value-taking option uses the rest of its token (`-ablurp`) or, failing that, the entire next token (`-a blurp`);
/// * A lone `-` or `--` ends the options and is itself discarded;
/// * The first token that doesn't start with a dash also ends the options, but is kept;
///
/// That last point is worth repeating: once a positional argument is seen,
/// _everything_ after it is positional too, dashes or no. There is no
/// reordering.
///
/// Problems — unknown options and missing values — don't stop the scan.
/// The call that hits one returns [`Outcome::Illegal`], the problem is passed
/// to the diagnostic sink (if enabled), and the next call carries on.
///
/// If the first argument starts with an `@`, the rest of it is taken as a
/// file path and the arguments are read from that file instead, one per
/// line. See [`Source`] for details.
///
/// ## Examples
///
/// ```
/// use optscan::{OptScan, Outcome, ScanConfig};
///
/// let mut scan = OptScan::new(
///     ScanConfig::args(["-xa", "blurp", "-h", "--", "file3"], "a:hx")
/// ).unwrap();
///
/// let mut x = false;
/// let mut h = false;
/// let mut a = None;
/// loop {
///     match scan.next_option() {
///         Outcome::Opt('a') => { a = scan.value().map(String::from); },
///         Outcome::Opt('h') => { h = true; },
///         Outcome::Opt('x') => { x = true; },
///         Outcome::Opt(_) => unreachable!(),
///         Outcome::Illegal(c) => panic!("Wrong option: {c}"),
///         Outcome::End => break,
///     }
/// }
///
/// assert!(x);
/// assert!(h);
/// assert_eq!(a.as_deref(), Some("blurp"));
/// assert_eq!(scan.remaining(), ["file3"]);
/// ```
///
/// `OptScan` is also an [`Iterator`] over [`Argument`]s, which may be more
/// convenient:
///
/// ```
/// use optscan::{Argument, OptScan, ScanConfig};
///
/// let mut scan = OptScan::new(
///     ScanConfig::args(["-hx", "file1", "file2"], "a:hx")
/// ).unwrap();
///
/// let opts: Vec<Argument> = scan.by_ref().collect();
/// assert_eq!(opts, [Argument::Key('h'), Argument::Key('x')]);
/// assert_eq!(scan.remaining(), ["file1", "file2"]);
/// ```
pub struct OptScan {
	/// # Arguments.
	argv: Vec<String>,

	/// # Option Spec.
	spec: OptSpec,

	/// # Current Token Index.
	idx: usize,

	/// # Byte Offset Within the Current Token.
	///
	/// Zero means we aren't in the middle of a cluster.
	pos: usize,

	/// # Captured Value.
	value: Option<String>,

	/// # Offending Character.
	offending: Option<char>,

	/// # Last Problem.
	error: Option<OptError>,

	/// # Options Finished?
	done: bool,

	/// # Report Problems?
	diagnostics: bool,

	/// # Diagnostic Sink.
	sink: Box<dyn Diagnostics>,
}

impl fmt::Debug for OptScan {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("OptScan")
			.field("argv", &self.argv)
			.field("spec", &self.spec)
			.field("idx", &self.idx)
			.field("pos", &self.pos)
			.field("value", &self.value)
			.field("offending", &self.offending)
			.field("error", &self.error)
			.field("done", &self.done)
			.field("diagnostics", &self.diagnostics)
			.finish_non_exhaustive()
	}
}

impl TryFrom<ScanConfig> for OptScan {
	type Error = OptScanError;

	#[inline]
	fn try_from(src: ScanConfig) -> Result<Self, Self::Error> { Self::new(src) }
}

impl OptScan {
	/// # New.
	///
	/// Build a scanner from a [`ScanConfig`], reading the argument file if
	/// one was named.
	///
	/// ## Errors
	///
	/// This will return an error if an argument file was named but could not
	/// be read.
	pub fn new(config: ScanConfig) -> Result<Self, OptScanError> {
		let (source, spec, diagnostics) = config.into_parts();
		let argv = source.resolve()?;
		Ok(Self {
			argv,
			spec: OptSpec::from(spec.as_str()),
			idx: 0,
			pos: 0,
			value: None,
			offending: None,
			error: None,
			done: false,
			diagnostics,
			sink: Box::new(Stderr),
		})
	}

	#[must_use]
	/// # With Diagnostic Sink.
	///
	/// Send problem reports somewhere other than STDERR. This has no effect
	/// if diagnostics were disabled in the [`ScanConfig`].
	pub fn with_sink<D: Diagnostics + 'static>(mut self, sink: D) -> Self {
		self.sink = Box::new(sink);
		self
	}
}

impl OptScan {
	#[must_use]
	/// # Arguments.
	///
	/// Return the full (effective) argument list, including anything already
	/// scanned.
	pub fn args(&self) -> &[String] { &self.argv }

	#[must_use]
	/// # Last Problem.
	///
	/// Return the problem encountered by the most recent call to
	/// [`OptScan::next_option`], if any. This is how an unknown option can be
	/// told apart from a missing value.
	pub const fn last_error(&self) -> Option<OptError> { self.error }

	#[must_use]
	/// # Offending Character.
	///
	/// Return the character behind the most recent [`Outcome::Illegal`], or
	/// `None` if there hasn't been one yet.
	pub const fn offending(&self) -> Option<char> { self.offending }

	#[must_use]
	/// # Remaining Arguments.
	///
	/// Return every argument from the current position onward. This is meant
	/// to be called once the options have been exhausted, at which point it
	/// holds the positional arguments.
	pub fn remaining(&self) -> &[String] {
		self.argv.get(self.idx..).unwrap_or(&[])
	}

	#[must_use]
	/// # Into Remaining Arguments.
	///
	/// Consume the scanner, returning an owned copy of
	/// [`OptScan::remaining`].
	pub fn into_remaining(mut self) -> Vec<String> {
		let idx = self.idx.min(self.argv.len());
		self.argv.split_off(idx)
	}

	#[must_use]
	/// # Spec.
	pub const fn spec(&self) -> &OptSpec { &self.spec }

	#[must_use]
	/// # Captured Value.
	///
	/// Return the value captured by the most recent call to
	/// [`OptScan::next_option`], if any.
	pub fn value(&self) -> Option<&str> { self.value.as_deref() }
}

impl OptScan {
	/// # Next Option.
	///
	/// Advance the scan and return what was found. Once this returns
	/// [`Outcome::End`], it will keep returning it.
	pub fn next_option(&mut self) -> Outcome {
		if self.done { return Outcome::End; }

		// At the start of a token, make sure it's an option cluster.
		if self.pos == 0 {
			match self.argv.get(self.idx).map(String::as_str) {
				Some("-" | "--") => {
					self.idx += 1;
					return self.finish();
				},
				Some(s) if s.starts_with('-') => { self.pos = 1; },
				_ => return self.finish(),
			}
		}

		let Some(token) = self.argv.get(self.idx) else { return self.finish(); };
		let Some(c) = token.get(self.pos..).and_then(|s| s.chars().next()) else {
			return self.finish();
		};
		let next = self.pos + c.len_utf8();
		let last = token.len() <= next;

		match self.spec.get(c) {
			// It takes a value.
			Some(true) => {
				// The rest of the token.
				if ! last {
					self.value = Some(token[next..].to_owned());
					self.idx += 1;
				}
				// The next token.
				else if let Some(v) = self.argv.get(self.idx + 1) {
					self.value = Some(v.clone());
					self.idx += 2;
				}
				// Nothing!
				else {
					self.idx += 1;
					self.pos = 0;
					self.value = None;
					return self.illegal(OptError::MissingValue(c));
				}

				self.pos = 0;
				self.error = None;
				Outcome::Opt(c)
			},

			// It's a flag.
			Some(false) => {
				self.advance(last, next);
				self.value = None;
				self.error = None;
				Outcome::Opt(c)
			},

			// It's unknown.
			None => {
				self.advance(last, next);
				self.value = None;
				self.illegal(OptError::Unknown(c))
			},
		}
	}

	/// # Advance Within Cluster.
	///
	/// Move to the next character, or the next token if this one is used up.
	fn advance(&mut self, last: bool, next: usize) {
		if last {
			self.idx += 1;
			self.pos = 0;
		}
		else { self.pos = next; }
	}

	/// # Finish.
	fn finish(&mut self) -> Outcome {
		self.done = true;
		self.pos = 0;
		self.value = None;
		self.error = None;
		tracing::trace!(remaining = self.remaining().len(), "end of options");
		Outcome::End
	}

	/// # Illegal.
	fn illegal(&mut self, err: OptError) -> Outcome {
		if self.diagnostics { self.sink.report(&err); }
		let c = err.option();
		self.offending = Some(c);
		self.error = Some(err);
		Outcome::Illegal(c)
	}
}

impl Iterator for OptScan {
	type Item = Argument;

	fn next(&mut self) -> Option<Self::Item> {
		match self.next_option() {
			Outcome::Opt(c) => Some(match self.value.clone() {
				Some(v) => Argument::KeyWithValue(c, v),
				None => Argument::Key(c),
			}),
			Outcome::Illegal(c) => Some(Argument::Illegal(
				self.error.unwrap_or(OptError::Unknown(c))
			)),
			Outcome::End => None,
		}
	}
}

impl FusedIterator for OptScan {}



#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
/// # Scan Outcome.
///
/// This is the return type for [`OptScan::next_option`].
pub enum Outcome {
	/// # Recognized Option.
	///
	/// If the option takes a value, it is available from
	/// [`OptScan::value`].
	Opt(char),

	/// # Unknown Option or Missing Value.
	///
	/// The character is also available from [`OptScan::offending`], and the
	/// specific problem from [`OptScan::last_error`].
	Illegal(char),

	/// # End of Options.
	///
	/// Whatever's left is available from [`OptScan::remaining`].
	End,
}



#[derive(Debug, Clone, Eq, PartialEq)]
/// # Parsed Argument.
///
/// This is the return type for the [`OptScan`] iterator, which ends when the
/// options do.
pub enum Argument {
	/// # Boolean Option.
	Key(char),

	/// # Option and Value.
	KeyWithValue(char, String),

	/// # Problem.
	Illegal(OptError),
}



/// # CLI Option Scanner.
///
/// Return an [`OptScan`] seeded with the process arguments (skipping the
/// command path), reporting problems to STDERR.
///
/// ## Examples
///
/// ```no_run
/// use optscan::Outcome;
///
/// let mut scan = optscan::args("a:hx").unwrap();
/// while let Some(c) = match scan.next_option() {
///     Outcome::Opt(c) => Some(c),
///     Outcome::Illegal(_) => std::process::exit(1),
///     Outcome::End => None,
/// } {
///     println!("-{c}");
/// }
///
/// for path in scan.remaining() {
///     println!("{path}");
/// }
/// ```
///
/// ## Errors
///
/// This will return an error if the first argument named an `@file` that
/// could not be read.
pub fn args(spec: &str) -> Result<OptScan, OptScanError> {
	OptScan::new(ScanConfig::env(spec))
}
