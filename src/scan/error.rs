/*!
# Optscan: Errors.
*/

use std::{
	error::Error,
	fmt,
	io,
	path::{
		Path,
		PathBuf,
	},
};



#[derive(Debug)]
/// # Construction Error.
///
/// This is the only error that can keep an [`OptScan`](crate::OptScan) from
/// being created: the argument file — named directly or via a leading
/// `@path` — could not be read.
pub enum OptScanError {
	/// # Unreadable Argument File.
	ArgFile {
		/// # File Path.
		path: PathBuf,

		/// # Underlying Error.
		source: io::Error,
	},
}

impl Error for OptScanError {
	fn source(&self) -> Option<&(dyn Error + 'static)> {
		match self {
			Self::ArgFile { source, .. } => Some(source),
		}
	}
}

impl fmt::Display for OptScanError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::ArgFile { path, source } => write!(
				f,
				"Unable to read argument file {}: {source}",
				path.display(),
			),
		}
	}
}

impl OptScanError {
	#[must_use]
	/// # As String Slice.
	pub const fn as_str(&self) -> &'static str {
		match self {
			Self::ArgFile { .. } => "Unreadable argument file.",
		}
	}

	#[must_use]
	/// # Path.
	///
	/// Return the offending file path.
	pub fn path(&self) -> &Path {
		match self {
			Self::ArgFile { path, .. } => path,
		}
	}
}



#[derive(Debug, Clone, Copy, Eq, PartialEq)]
/// # Option Error.
///
/// These are the per-option problems that can turn up mid-scan. They never
/// stop the scan; the call that hit one returns
/// [`Outcome::Illegal`](crate::Outcome::Illegal) and the next call picks up
/// where it left off.
pub enum OptError {
	/// # Option Not In Spec.
	Unknown(char),

	/// # Option Value Missing.
	MissingValue(char),
}

impl Error for OptError {}

impl fmt::Display for OptError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Unknown(c) => write!(f, "illegal option: {c}"),
			Self::MissingValue(c) => write!(f, "option {c} requires an argument"),
		}
	}
}

impl OptError {
	#[must_use]
	/// # As String Slice.
	pub const fn as_str(&self) -> &'static str {
		match self {
			Self::Unknown(_) => "Illegal option.",
			Self::MissingValue(_) => "Option requires an argument.",
		}
	}

	#[must_use]
	/// # Option Character.
	pub const fn option(&self) -> char {
		match self { Self::Unknown(c) | Self::MissingValue(c) => *c }
	}
}



#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn t_opt_error_display() {
		assert_eq!(OptError::Unknown('y').to_string(), "illegal option: y");
		assert_eq!(
			OptError::MissingValue('a').to_string(),
			"option a requires an argument",
		);
		assert_eq!(OptError::Unknown('y').option(), 'y');
		assert_eq!(OptError::MissingValue('a').option(), 'a');
	}

	#[test]
	fn t_arg_file_error() {
		let err = OptScanError::ArgFile {
			path: PathBuf::from("/nope/args.txt"),
			source: io::Error::new(io::ErrorKind::NotFound, "not found"),
		};
		assert_eq!(err.path(), Path::new("/nope/args.txt"));
		assert!(err.source().is_some(), "The io::Error should be exposed.");
		assert!(
			err.to_string().starts_with("Unable to read argument file /nope/args.txt"),
			"Unexpected message: {err}",
		);
	}
}
