// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: hashcalc
// File: lib.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2026 Volker Schwaberow

pub mod hc {
	pub mod app;
	pub mod error;
	pub mod ffi;
	pub mod hash;
	pub mod registry;
}

pub use hc::error::{HashError, HashErrorKind};
pub use hc::hash::{
	hash_file, hex_digest_file, DigestConfig, FileDigester,
};
pub use hc::registry::{MAX_DIGEST_SIZE, MAX_HEX_SIZE};
