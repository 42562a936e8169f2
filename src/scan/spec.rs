/*!
# Optscan: Option Specification.
*/

use std::{
	collections::BTreeMap,
	convert::Infallible,
	str::FromStr,
};



#[derive(Debug, Clone, Default, Eq, PartialEq)]
/// # Option Specification.
///
/// This is the parsed form of a getopt-style spec string like `"a:hx"`: each
/// character is a recognized option, and a character immediately followed by
/// a colon requires a value.
///
/// Spec strings are not validated, but the edge cases are settled as
/// follows:
/// * If a letter appears more than once, its _first_ appearance decides whether or not it takes a value;
/// * A colon that does not directly follow an option letter is ignored (`":a"`, `"a::"`, `"a:b:"`);
/// * A colon is never itself an option;
///
/// ## Examples
///
/// ```
/// use optscan::OptSpec;
///
/// let spec = OptSpec::from("a:hx");
/// assert_eq!(spec.get('a'), Some(true));  // Requires a value.
/// assert_eq!(spec.get('h'), Some(false)); // Boolean flag.
/// assert_eq!(spec.get('y'), None);        // Unknown.
/// ```
pub struct OptSpec(BTreeMap<char, bool>);

impl From<&str> for OptSpec {
	fn from(src: &str) -> Self {
		let mut out = BTreeMap::new();
		let mut chars = src.chars().peekable();
		while let Some(c) = chars.next() {
			if c == ':' { continue; }
			let value = chars.peek() == Some(&':');
			out.entry(c).or_insert(value);
		}
		Self(out)
	}
}

impl FromStr for OptSpec {
	type Err = Infallible;

	#[inline]
	fn from_str(src: &str) -> Result<Self, Self::Err> { Ok(Self::from(src)) }
}

impl OptSpec {
	#[must_use]
	/// # Get Option.
	///
	/// Return `Some(true)` if `c` is an option requiring a value,
	/// `Some(false)` if it is a boolean flag, or `None` if it is not an
	/// option at all.
	pub fn get(&self, c: char) -> Option<bool> { self.0.get(&c).copied() }

	#[must_use]
	/// # Is Empty?
	pub fn is_empty(&self) -> bool { self.0.is_empty() }

	#[must_use]
	/// # Length.
	///
	/// Return the number of distinct options.
	pub fn len(&self) -> usize { self.0.len() }
}



#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn t_spec() {
		let spec = OptSpec::from("a:hx");
		assert_eq!(spec.len(), 3);
		assert_eq!(spec.get('a'), Some(true));
		assert_eq!(spec.get('h'), Some(false));
		assert_eq!(spec.get('x'), Some(false));
		assert_eq!(spec.get(':'), None);
		assert_eq!(spec.get('y'), None);

		let spec: OptSpec = "".parse().unwrap();
		assert!(spec.is_empty());
	}

	#[test]
	fn t_spec_colons() {
		for (raw, a, b) in [
			(":a", Some(false), None),
			("a::", Some(true), None),
			("a:b:", Some(true), Some(true)),
			("a:::b", Some(true), Some(false)),
			("::", None, None),
		] {
			let spec = OptSpec::from(raw);
			assert_eq!(spec.get('a'), a, "Bug: wrong -a for {raw:?}.");
			assert_eq!(spec.get('b'), b, "Bug: wrong -b for {raw:?}.");
			assert_eq!(spec.get(':'), None, "Bug: colon is an option for {raw:?}.");
		}
	}

	#[test]
	fn t_spec_first_wins() {
		let spec = OptSpec::from("ab:a:");
		assert_eq!(spec.get('a'), Some(false));
		assert_eq!(spec.get('b'), Some(true));

		let spec = OptSpec::from("a:a");
		assert_eq!(spec.get('a'), Some(true));
		assert_eq!(spec.len(), 1);
	}

	#[test]
	fn t_spec_unicode() {
		let spec = OptSpec::from("ö:ß");
		assert_eq!(spec.get('ö'), Some(true));
		assert_eq!(spec.get('ß'), Some(false));
	}
}
