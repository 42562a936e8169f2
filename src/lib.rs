/*!
# Optscan

This crate provides [`OptScan`], a tiny getopt-style scanner for
single-character CLI options, for apps that want `-hx`, `-a value`, and
`-avalue` without signing up for a full-service parser like
[clap](https://crates.io/crates/clap).

Options are declared with a classic spec string — `"a:hx"` means `-a` takes
a value while `-h` and `-x` are boolean flags — and handed back one at a
time until the first positional argument (or a `-`/`--` terminator), after
which the leftovers are yours to do with as you please.

As a bonus, if the first argument looks like `@path`, the real arguments are
read from that file instead, one per line.

Unknown options and missing values never abort the scan. They are returned
as [`Outcome::Illegal`] so you can decide what to do about them, and are also
reported to a pluggable [`Diagnostics`] sink (STDERR by default).



## Example

```
use optscan::{OptScan, Outcome, ScanConfig};

#[derive(Debug, Clone, Default)]
/// # Configuration.
struct Settings {
    archive: Option<String>,
    help: bool,
    extract: bool,
    files: Vec<String>,
}

let mut scan = OptScan::new(
    ScanConfig::args(["-xa", "blurp", "-h", "--", "file3"], "a:hx")
).unwrap(); // An error will only occur if an @file can't be read.

// Loop and handle!
let mut settings = Settings::default();
loop {
    match scan.next_option() {
        Outcome::Opt('a') => {
            settings.archive = scan.value().map(String::from);
        },
        Outcome::Opt('h') => { settings.help = true; },
        Outcome::Opt('x') => { settings.extract = true; },

        // The problem has already been printed to STDERR.
        Outcome::Opt(_) | Outcome::Illegal(_) => return,

        Outcome::End => break,
    }
}

// Everything else is positional.
settings.files.extend_from_slice(scan.remaining());

assert_eq!(settings.archive.as_deref(), Some("blurp"));
assert!(settings.help);
assert!(settings.extract);
assert_eq!(settings.files, ["file3"]);
```
*/

#![forbid(unsafe_code)]

#![deny(
	clippy::allow_attributes_without_reason,
	clippy::correctness,
	unreachable_pub,
)]

#![warn(
	clippy::complexity,
	clippy::nursery,
	clippy::pedantic,
	clippy::perf,
	clippy::style,

	clippy::allow_attributes,
	clippy::clone_on_ref_ptr,
	clippy::format_push_string,
	clippy::get_unwrap,
	clippy::impl_trait_in_params,
	clippy::missing_assert_message,
	clippy::missing_docs_in_private_items,
	clippy::needless_raw_strings,
	clippy::panic_in_result_fn,
	clippy::pub_without_shorthand,
	clippy::rest_pat_in_fully_bound_structs,
	clippy::semicolon_inside_block,
	clippy::str_to_string,
	clippy::string_to_string,
	clippy::todo,
	clippy::undocumented_unsafe_blocks,
	clippy::unneeded_field_pattern,
	clippy::unseparated_literal_suffix,
	clippy::unwrap_in_result,

	macro_use_extern_crate,
	missing_copy_implementations,
	missing_docs,
	non_ascii_idents,
	trivial_casts,
	trivial_numeric_casts,
	unused_crate_dependencies,
	unused_extern_crates,
	unused_import_braces,
)]



mod scan;
pub use scan::{
	args,
	ARG_FILE_SENTINEL,
	Argument,
	Diagnostics,
	OptError,
	OptScan,
	OptScanError,
	OptSpec,
	Outcome,
	ScanConfig,
	Source,
	Stderr,
	Tracing,
};
