/*!
# Optscan: Argument Sources.
*/

use crate::OptScanError;
use std::{
	fs,
	path::{
		Path,
		PathBuf,
	},
};



/// # Argument File Sentinel.
///
/// A first argument starting with this character names a file to read the
/// real arguments from.
pub const ARG_FILE_SENTINEL: char = '@';



#[derive(Debug, Clone, Eq, PartialEq)]
/// # Argument Source.
pub enum Source {
	/// # In-Memory Arguments.
	///
	/// These are used as-are unless the first one begins with `@`, in which
	/// case the remainder of that argument is treated as a file path and
	/// loaded as if [`Source::File`] had been given instead.
	Args(Vec<String>),

	/// # Argument File.
	///
	/// Plain text, one argument per line. Nothing is quoted, escaped, or
	/// skipped; blank lines are (blank) arguments too.
	File(PathBuf),
}

impl Source {
	/// # Resolve.
	///
	/// Return the effective argument list, reading the file if there is one.
	pub(super) fn resolve(self) -> Result<Vec<String>, OptScanError> {
		match self {
			Self::Args(args) => match args.first().and_then(|a| a.strip_prefix(ARG_FILE_SENTINEL)) {
				Some(path) => read_arg_file(Path::new(path)),
				None => Ok(args),
			},
			Self::File(path) => read_arg_file(&path),
		}
	}
}



#[derive(Debug, Clone, Eq, PartialEq)]
/// # Scanner Configuration.
///
/// This holds everything needed to build an [`OptScan`](crate::OptScan):
/// where the arguments come from, the option spec, and whether or not
/// problems should be reported to the diagnostic sink.
///
/// ## Examples
///
/// ```
/// use optscan::{OptScan, ScanConfig};
///
/// // From a list.
/// let scan = OptScan::new(ScanConfig::args(["-hx", "file1"], "a:hx"));
/// assert!(scan.is_ok());
///
/// // From a file that doesn't exist.
/// let scan = OptScan::new(ScanConfig::file("/no/such/args.txt", "a:hx"));
/// assert!(scan.is_err());
///
/// // Quietly.
/// let config = ScanConfig::args(["-y"], "a:hx").with_diagnostics(false);
/// assert!(! config.diagnostics());
/// ```
pub struct ScanConfig {
	/// # Argument Source.
	source: Source,

	/// # Option Spec.
	spec: String,

	/// # Report Problems?
	diagnostics: bool,
}

impl ScanConfig {
	#[must_use]
	/// # New.
	pub fn new<S: Into<String>>(source: Source, spec: S) -> Self {
		Self {
			source,
			spec: spec.into(),
			diagnostics: true,
		}
	}

	#[must_use]
	/// # From Arguments.
	pub fn args<I, S, T>(args: I, spec: T) -> Self
	where
		I: IntoIterator<Item=S>,
		S: Into<String>,
		T: Into<String>,
	{
		Self::new(Source::Args(args.into_iter().map(Into::into).collect()), spec)
	}

	#[must_use]
	/// # From Environment.
	///
	/// Use the process arguments, skipping the first (command path) entry.
	/// Arguments that aren't valid UTF-8 are converted lossily.
	pub fn env<T: Into<String>>(spec: T) -> Self {
		Self::args(
			std::env::args_os().skip(1).map(|a| a.to_string_lossy().into_owned()),
			spec,
		)
	}

	#[must_use]
	/// # From File.
	pub fn file<P: Into<PathBuf>, T: Into<String>>(path: P, spec: T) -> Self {
		Self::new(Source::File(path.into()), spec)
	}

	#[must_use]
	/// # With Diagnostics.
	///
	/// Enable or disable problem reporting. It is enabled by default.
	pub fn with_diagnostics(mut self, diagnostics: bool) -> Self {
		self.diagnostics = diagnostics;
		self
	}
}

impl ScanConfig {
	#[must_use]
	/// # Diagnostics Enabled?
	pub const fn diagnostics(&self) -> bool { self.diagnostics }

	#[must_use]
	/// # Source.
	pub const fn source(&self) -> &Source { &self.source }

	#[must_use]
	/// # Spec.
	pub fn spec(&self) -> &str { &self.spec }

	/// # Into Parts.
	pub(super) fn into_parts(self) -> (Source, String, bool) {
		(self.source, self.spec, self.diagnostics)
	}
}



/// # Read Argument File.
///
/// Invalid UTF-8 is converted lossily; only real I/O failures are errors.
fn read_arg_file(path: &Path) -> Result<Vec<String>, OptScanError> {
	let raw = fs::read(path).map_err(|source| OptScanError::ArgFile {
		path: path.to_path_buf(),
		source,
	})?;

	let out = split_lines(&String::from_utf8_lossy(&raw));
	tracing::debug!(path = %path.display(), args = out.len(), "loaded argument file");
	Ok(out)
}

/// # Split Lines.
///
/// Lines end with `\n`, `\r\n`, or a lone `\r`. A trailing terminator does
/// not start an extra (empty) line.
fn split_lines(mut raw: &str) -> Vec<String> {
	let mut out = Vec::new();
	while ! raw.is_empty() {
		let Some(idx) = raw.find(|c: char| c == '\n' || c == '\r') else {
			out.push(raw.to_owned());
			break;
		};
		out.push(raw[..idx].to_owned());
		let skip = if raw[idx..].starts_with("\r\n") { 2 } else { 1 };
		raw = &raw[idx + skip..];
	}
	out
}



#[cfg(test)]
mod test {
	use super::*;
	use std::io::Write;

	/// # Temporary Argument File.
	fn arg_file<B: AsRef<[u8]>>(raw: B) -> tempfile::NamedTempFile {
		let mut file = tempfile::NamedTempFile::new().expect("Unable to create temp file.");
		file.write_all(raw.as_ref()).expect("Unable to write temp file.");
		file.flush().expect("Unable to flush temp file.");
		file
	}

	#[test]
	fn t_resolve_args() {
		let args = vec!["-h".to_owned(), "@nope".to_owned()];
		assert_eq!(Source::Args(args.clone()).resolve().unwrap(), args);

		// An empty first argument is just an argument.
		let args = vec![String::new(), "@nope".to_owned()];
		assert_eq!(Source::Args(args.clone()).resolve().unwrap(), args);

		assert!(Source::Args(Vec::new()).resolve().unwrap().is_empty());
	}

	#[test]
	fn t_resolve_file() {
		let file = arg_file("foo\n-h\n");
		let expected = vec!["foo".to_owned(), "-h".to_owned()];

		// Directly.
		assert_eq!(Source::File(file.path().to_path_buf()).resolve().unwrap(), expected);

		// By sentinel; everything after the first argument is ignored.
		let sentinel = format!("@{}", file.path().display());
		assert_eq!(
			Source::Args(vec![sentinel, "ignored".to_owned()]).resolve().unwrap(),
			expected,
		);
	}

	#[test]
	fn t_resolve_file_lines() {
		// Blank lines count, CRLF is fine, and nothing is trimmed.
		let file = arg_file("a\r\n\n b \n\nlast");
		assert_eq!(
			Source::File(file.path().to_path_buf()).resolve().unwrap(),
			["a", "", " b ", "", "last"],
		);

		let file = arg_file("");
		assert!(Source::File(file.path().to_path_buf()).resolve().unwrap().is_empty());
	}

	#[test]
	fn t_resolve_file_lossy() {
		let file = arg_file(b"-h\ncaf\xe9\n");
		assert_eq!(
			Source::File(file.path().to_path_buf()).resolve().unwrap(),
			["-h", "caf\u{fffd}"],
		);
	}

	#[test]
	fn t_split_lines() {
		for (raw, expected) in [
			("", &[][..]),
			("\n", &[""][..]),
			("-h\rfoo\n", &["-h", "foo"][..]),
			("a\r\rb", &["a", "", "b"][..]),
			("a\r\n\r\nb\r", &["a", "", "b"][..]),
			("a\n\n", &["a", ""][..]),
		] {
			assert_eq!(split_lines(raw), expected, "Bug: wrong lines for {raw:?}.");
		}
	}

	#[test]
	fn t_resolve_file_missing() {
		let dir = tempfile::tempdir().expect("Unable to create temp dir.");
		let path = dir.path().join("missing.txt");
		match Source::Args(vec![format!("@{}", path.display())]).resolve() {
			Err(OptScanError::ArgFile { path: p, .. }) => assert_eq!(p, path),
			Ok(_) => panic!("Bug: a missing argument file should fail."),
		}

		// A bare sentinel names the empty path, which can't be read either.
		assert!(Source::Args(vec!["@".to_owned()]).resolve().is_err());
	}

	#[test]
	fn t_config() {
		let config = ScanConfig::args(["-a"], "a:");
		assert!(config.diagnostics());
		assert_eq!(config.spec(), "a:");
		assert_eq!(config.source(), &Source::Args(vec!["-a".to_owned()]));

		let config = ScanConfig::file("args.txt", "h").with_diagnostics(false);
		assert!(! config.diagnostics());
		assert_eq!(config.source(), &Source::File(PathBuf::from("args.txt")));
	}
}
