// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: hashcalc
// File: error.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2026 Volker Schwaberow

//! Error type shared by the digest computer, the registry and the C entry
//! point.

use std::borrow::Cow;
use std::io;
use std::path::Path;

/// Status returned across the C boundary when a digest was written.
pub const STATUS_SUCCESS: i32 = 0;
/// Status returned across the C boundary for every failure kind.
pub const STATUS_FAILURE: i32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashErrorKind {
	UnknownAlgorithm,
	FileOpen,
	FileRead,
	BufferTooSmall,
}

#[derive(Debug)]
pub struct HashError {
	kind: HashErrorKind,
	message: Cow<'static, str>,
	source: Option<io::Error>,
}

impl HashError {
	pub fn new(
		kind: HashErrorKind,
		message: impl Into<Cow<'static, str>>,
	) -> Self {
		Self {
			kind,
			message: message.into(),
			source: None,
		}
	}

	fn with_source(mut self, source: io::Error) -> Self {
		self.source = Some(source);
		self
	}

	pub fn unknown_algorithm(name: &str) -> Self {
		Self::new(
			HashErrorKind::UnknownAlgorithm,
			format!("unknown digest algorithm `{}`", name),
		)
	}

	pub fn file_open(path: &Path, source: io::Error) -> Self {
		Self::new(
			HashErrorKind::FileOpen,
			format!("cannot open `{}`: {}", path.display(), source),
		)
		.with_source(source)
	}

	pub fn file_read(path: &Path, source: io::Error) -> Self {
		Self::new(
			HashErrorKind::FileRead,
			format!("cannot read `{}`: {}", path.display(), source),
		)
		.with_source(source)
	}

	pub fn buffer_too_small(required: usize, capacity: usize) -> Self {
		Self::new(
			HashErrorKind::BufferTooSmall,
			format!(
				"output buffer holds {} bytes, {} required",
				capacity, required
			),
		)
	}

	pub fn kind(&self) -> HashErrorKind {
		self.kind
	}

	pub fn message(&self) -> &str {
		self.message.as_ref()
	}

	/// Integer status for callers that only distinguish success from
	/// failure.
	pub fn status(&self) -> i32 {
		STATUS_FAILURE
	}
}

impl std::fmt::Display for HashError {
	fn fmt(
		&self,
		f: &mut std::fmt::Formatter<'_>,
	) -> std::fmt::Result {
		write!(f, "{}", self.message)
	}
}

impl std::error::Error for HashError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		self.source
			.as_ref()
			.map(|err| err as &(dyn std::error::Error + 'static))
	}
}
