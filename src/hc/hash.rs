// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: hashcalc
// File: hash.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2026 Volker Schwaberow

use crate::hc::error::{HashError, HashErrorKind};
use crate::hc::registry::{self, DigestAlgorithm};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Bytes handed to the digest context per read.
pub const DEFAULT_CHUNK_SIZE: usize = 4096;

#[derive(Clone, Debug)]
pub struct DigestConfig {
	/// Read size in bytes. Zero is treated as one.
	pub chunk_size: usize,
}

impl Default for DigestConfig {
	fn default() -> Self {
		DigestConfig {
			chunk_size: DEFAULT_CHUNK_SIZE,
		}
	}
}

/// A resolved digest algorithm plus the read settings used to stream
/// files through it. Every call works on its own digest context.
#[derive(Clone, Debug)]
pub struct FileDigester {
	algorithm: &'static DigestAlgorithm,
	config: DigestConfig,
}

impl FileDigester {
	pub fn new(algorithm: &str) -> Result<Self, HashError> {
		Self::with_config(algorithm, DigestConfig::default())
	}

	pub fn with_config(
		algorithm: &str,
		config: DigestConfig,
	) -> Result<Self, HashError> {
		registry::initialize();
		Ok(Self {
			algorithm: registry::resolve(algorithm)?,
			config,
		})
	}

	pub fn algorithm(&self) -> &'static DigestAlgorithm {
		self.algorithm
	}

	pub fn config(&self) -> &DigestConfig {
		&self.config
	}

	pub fn digest_bytes(&self, data: &[u8]) -> Vec<u8> {
		let mut context = self.algorithm.new_context();
		context.update(data);
		context.finalize().into_vec()
	}

	pub fn hex_digest_bytes(&self, data: &[u8]) -> String {
		hex::encode(self.digest_bytes(data))
	}

	pub fn digest_file(
		&self,
		path: impl AsRef<Path>,
	) -> Result<Vec<u8>, HashError> {
		let path = path.as_ref();
		let mut file = open_for_digest(path)?;
		let mut context = self.algorithm.new_context();
		let mut buffer = vec![0; self.config.chunk_size.max(1)];
		loop {
			let count = match file.read(&mut buffer) {
				Ok(0) => break,
				Ok(count) => count,
				Err(err) if err.kind() == io::ErrorKind::Interrupted => {
					continue
				}
				Err(err) => return Err(HashError::file_read(path, err)),
			};
			context.update(&buffer[..count]);
		}
		Ok(context.finalize().into_vec())
	}

	pub fn hex_digest_file(
		&self,
		path: impl AsRef<Path>,
	) -> Result<String, HashError> {
		Ok(hex::encode(self.digest_file(path)?))
	}

	/// Writes the NUL-terminated lowercase hex digest of `path` into
	/// `out` and returns the hex length. `out` is left untouched on
	/// failure.
	pub fn hash_file_into(
		&self,
		path: impl AsRef<Path>,
		out: &mut [u8],
	) -> Result<usize, HashError> {
		let digest = self.digest_file(path)?;
		write_hex(&digest, out)
	}
}

fn open_for_digest(path: &Path) -> Result<File, HashError> {
	let file =
		File::open(path).map_err(|err| HashError::file_open(path, err))?;
	let metadata =
		file.metadata().map_err(|err| HashError::file_open(path, err))?;
	if metadata.is_dir() {
		return Err(HashError::new(
			HashErrorKind::FileOpen,
			format!("cannot open `{}`: is a directory", path.display()),
		));
	}
	Ok(file)
}

/// Encodes `digest` as lowercase hex followed by a NUL byte. The capacity
/// check runs before anything is written.
pub fn write_hex(digest: &[u8], out: &mut [u8]) -> Result<usize, HashError> {
	let hex_len = digest.len() * 2;
	if out.len() < hex_len + 1 {
		return Err(HashError::buffer_too_small(hex_len + 1, out.len()));
	}
	hex::encode_to_slice(digest, &mut out[..hex_len])
		.map_err(|_| HashError::buffer_too_small(hex_len + 1, out.len()))?;
	out[hex_len] = 0;
	Ok(hex_len)
}

/// Hashes `path` with the algorithm named `algorithm` and writes the
/// NUL-terminated hex digest into `out`.
pub fn hash_file(
	algorithm: &str,
	path: impl AsRef<Path>,
	out: &mut [u8],
) -> Result<usize, HashError> {
	FileDigester::new(algorithm)?.hash_file_into(path, out)
}

pub fn hex_digest_file(
	algorithm: &str,
	path: impl AsRef<Path>,
) -> Result<String, HashError> {
	FileDigester::new(algorithm)?.hex_digest_file(path)
}
