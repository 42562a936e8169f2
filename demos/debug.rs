/*!
# Optscan: Debug

This example scans the arguments fed to it against the spec `a:hvx` and
displays the results, e.g. `cargo run --example debug -- -vxa out file1`.
*/

use optscan::Argument;

fn main() {
	let mut scan = match optscan::args("a:hvx") {
		Ok(scan) => scan,
		Err(e) => {
			eprintln!("\x1b[1;91mError:\x1b[0m {e}");
			std::process::exit(1);
		},
	};

	for arg in scan.by_ref() {
		match arg {
			Argument::Key(c) => println!("\x1b[2mFlag:\x1b[0m   -{c}"),
			Argument::KeyWithValue(c, v) => println!("\x1b[2mOption:\x1b[0m -{c} {v:?}"),
			Argument::Illegal(e) => println!("\x1b[91mIllegal:\x1b[0m {}", e.as_str()),
		}
	}

	println!("\x1b[2m-----\x1b[0m");
	for v in scan.remaining() {
		println!("{v:?}");
	}
}
