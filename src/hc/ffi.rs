// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: hashcalc
// File: ffi.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2026 Volker Schwaberow

//! C ABI entry point for hosts that embed the digest computer.
//!
//! ```c
//! int hash_file(const char *algo, const char *path, char *out, size_t out_len);
//! ```
//!
//! Returns 0 and writes a NUL-terminated lowercase hex digest into `out`,
//! or returns 1 and leaves `out` untouched.

use crate::hc::error::{HashError, HashErrorKind, STATUS_SUCCESS};
use crate::hc::hash::FileDigester;
use std::ffi::{c_char, c_int, CStr};
use std::path::PathBuf;

/// # Safety
///
/// `algo` and `path` must each be null or point to a NUL-terminated
/// string. `out` must be null or valid for writes of `out_len` bytes.
#[no_mangle]
pub unsafe extern "C" fn hash_file(
	algo: *const c_char,
	path: *const c_char,
	out: *mut c_char,
	out_len: usize,
) -> c_int {
	match hash_file_raw(algo, path, out, out_len) {
		Ok(_) => STATUS_SUCCESS,
		Err(err) => err.status(),
	}
}

unsafe fn hash_file_raw(
	algo: *const c_char,
	path: *const c_char,
	out: *mut c_char,
	out_len: usize,
) -> Result<usize, HashError> {
	let algorithm = algorithm_from_ptr(algo)?;
	let digester = FileDigester::new(algorithm)?;
	let path = path_from_ptr(path)?;
	let digest = digester.digest_file(&path)?;
	if out.is_null() || out_len == 0 {
		return Err(HashError::buffer_too_small(
			digest.len() * 2 + 1,
			0,
		));
	}
	let out = std::slice::from_raw_parts_mut(out.cast::<u8>(), out_len);
	crate::hc::hash::write_hex(&digest, out)
}

unsafe fn algorithm_from_ptr<'a>(
	ptr: *const c_char,
) -> Result<&'a str, HashError> {
	if ptr.is_null() {
		return Err(HashError::new(
			HashErrorKind::UnknownAlgorithm,
			"algorithm name is null",
		));
	}
	let raw = CStr::from_ptr(ptr);
	raw.to_str().map_err(|_| {
		HashError::unknown_algorithm(&raw.to_string_lossy())
	})
}

unsafe fn path_from_ptr(ptr: *const c_char) -> Result<PathBuf, HashError> {
	if ptr.is_null() {
		return Err(HashError::new(
			HashErrorKind::FileOpen,
			"file path is null",
		));
	}
	let bytes = CStr::from_ptr(ptr).to_bytes();
	#[cfg(unix)]
	{
		use std::os::unix::ffi::OsStrExt;
		Ok(PathBuf::from(std::ffi::OsStr::from_bytes(bytes)))
	}
	#[cfg(not(unix))]
	{
		std::str::from_utf8(bytes).map(PathBuf::from).map_err(|_| {
			HashError::new(
				HashErrorKind::FileOpen,
				"file path is not valid UTF-8",
			)
		})
	}
}
