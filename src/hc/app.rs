// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: hashcalc
// File: app.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2026 Volker Schwaberow

use crate::hc::hash::hash_file;
use crate::hc::registry::MAX_HEX_SIZE;
use clap::{crate_name, value_parser, Arg, Command};
use colored::*;
use std::ffi::OsString;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

fn build_cli() -> Command {
	Command::new(crate_name!())
		.disable_help_flag(true)
		.disable_version_flag(true)
		.arg(
			Arg::new("algorithm")
				.required(true)
				.allow_hyphen_values(true)
				.value_parser(value_parser!(OsString)),
		)
		.arg(
			Arg::new("file")
				.required(true)
				.allow_hyphen_values(true)
				.value_parser(value_parser!(PathBuf)),
		)
}

/// Usage line for stderr, styled only when stderr is a terminal.
pub fn usage(program: &str) -> String {
	usage_line(program, io::stderr().is_terminal())
}

pub fn usage_line(program: &str, styled: bool) -> String {
	let label = if styled {
		"usage:".bold().to_string()
	} else {
		"usage:".to_string()
	};
	format!("{} {} <algo> <file>", label, program)
}

/// Runs the command line against the process arguments and returns the
/// exit status.
pub fn run() -> i32 {
	run_from(std::env::args_os())
}

pub fn run_from<I, T>(args: I) -> i32
where
	I: IntoIterator<Item = T>,
	T: Into<OsString>,
{
	let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
	let program = args
		.first()
		.map(|arg| arg.to_string_lossy().into_owned())
		.unwrap_or_else(|| crate_name!().to_string());

	let matches = match build_cli().try_get_matches_from(&args) {
		Ok(matches) => matches,
		Err(_) => {
			eprintln!("{}", usage(&program));
			return EXIT_FAILURE;
		}
	};
	let (Some(algorithm), Some(file)) = (
		matches.get_one::<OsString>("algorithm"),
		matches.get_one::<PathBuf>("file"),
	) else {
		eprintln!("{}", usage(&program));
		return EXIT_FAILURE;
	};

	// a name that is not UTF-8 cannot match any registered algorithm
	let Some(algorithm) = algorithm.to_str() else {
		return EXIT_FAILURE;
	};
	let mut out = [0u8; MAX_HEX_SIZE];
	let Ok(len) = hash_file(algorithm, file, &mut out) else {
		return EXIT_FAILURE;
	};
	let Ok(hex) = std::str::from_utf8(&out[..len]) else {
		return EXIT_FAILURE;
	};
	let mut stdout = io::stdout().lock();
	if writeln!(stdout, "{}", hex).is_err() {
		return EXIT_FAILURE;
	}
	EXIT_SUCCESS
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn wrong_argument_counts_fail() {
		assert_eq!(run_from(["hash_calc"]), EXIT_FAILURE);
		assert_eq!(run_from(["hash_calc", "md5"]), EXIT_FAILURE);
		assert_eq!(
			run_from(["hash_calc", "md5", "a.txt", "extra"]),
			EXIT_FAILURE
		);
	}

	#[test]
	fn help_flag_is_treated_as_an_argument() {
		assert_eq!(run_from(["hash_calc", "--help"]), EXIT_FAILURE);
		assert_eq!(run_from(["hash_calc", "-V"]), EXIT_FAILURE);
	}

	#[test]
	fn usage_names_both_positionals() {
		assert_eq!(
			usage_line("hash_calc", false),
			"usage: hash_calc <algo> <file>"
		);
	}

	#[test]
	fn unstyled_usage_never_carries_escapes() {
		colored::control::set_override(true);
		let plain = usage_line("hash_calc", false);
		let styled = usage_line("hash_calc", true);
		colored::control::unset_override();
		assert!(!plain.contains('\x1b'));
		assert!(styled.contains('\x1b'));
		assert!(styled.ends_with("hash_calc <algo> <file>"));
	}

	#[cfg(unix)]
	#[test]
	fn non_utf8_algorithm_fails_like_an_unknown_one() {
		use std::os::unix::ffi::OsStringExt;
		let file = tempfile::NamedTempFile::new().unwrap();
		assert_eq!(
			run_from([
				OsString::from("hash_calc"),
				OsString::from_vec(vec![b's', b'h', b'a', 0xff]),
				file.path().as_os_str().to_os_string(),
			]),
			EXIT_FAILURE
		);
	}

	#[test]
	fn valid_invocation_succeeds() {
		let file = tempfile::NamedTempFile::new().unwrap();
		let path = file.path().to_path_buf();
		assert_eq!(
			run_from([
				OsString::from("hash_calc"),
				OsString::from("sha256"),
				path.into_os_string(),
			]),
			EXIT_SUCCESS
		);
	}
}
