// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: hashcalc
// File: registry.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2026 Volker Schwaberow

//! Catalog of digest algorithms addressable by name, plus the process-wide
//! lookup table built from it on first use.

use super::error::HashError;
use digest::DynDigest;
use skein::{consts::U32, Skein1024, Skein256, Skein512};
use std::collections::HashMap;
use std::sync::OnceLock;

/// Largest digest produced by any registered algorithm, in bytes.
pub const MAX_DIGEST_SIZE: usize = 64;

/// Buffer size that fits the hex form of any registered digest plus the
/// NUL terminator.
pub const MAX_HEX_SIZE: usize = MAX_DIGEST_SIZE * 2 + 1;

pub type DigestFactory = fn() -> Box<dyn DynDigest>;

#[derive(Clone, Copy, Debug)]
pub struct AlgorithmMetadata {
	pub identifier: &'static str,
	pub display_name: &'static str,
	pub aliases: &'static [&'static str],
	pub legacy: bool,
}

impl AlgorithmMetadata {
	pub const fn new(
		identifier: &'static str,
		display_name: &'static str,
		aliases: &'static [&'static str],
		legacy: bool,
	) -> Self {
		Self {
			identifier,
			display_name,
			aliases,
			legacy,
		}
	}

	pub const fn legacy(
		identifier: &'static str,
		display_name: &'static str,
		aliases: &'static [&'static str],
	) -> Self {
		Self::new(identifier, display_name, aliases, true)
	}

	pub const fn current(
		identifier: &'static str,
		display_name: &'static str,
		aliases: &'static [&'static str],
	) -> Self {
		Self::new(identifier, display_name, aliases, false)
	}

	pub fn is_legacy(&self) -> bool {
		self.legacy
	}

	/// Every name this algorithm answers to, canonical identifier first.
	pub fn names(&self) -> impl Iterator<Item = &'static str> {
		std::iter::once(self.identifier)
			.chain(self.aliases.iter().copied())
	}
}

#[derive(Clone, Copy)]
pub struct DigestAlgorithm {
	pub metadata: AlgorithmMetadata,
	pub factory: DigestFactory,
}

impl DigestAlgorithm {
	pub const fn new(
		metadata: AlgorithmMetadata,
		factory: DigestFactory,
	) -> Self {
		Self { metadata, factory }
	}

	pub fn identifier(&self) -> &'static str {
		self.metadata.identifier
	}

	/// Fresh digest context, owned by the caller.
	pub fn new_context(&self) -> Box<dyn DynDigest> {
		(self.factory)()
	}

	pub fn output_size(&self) -> usize {
		self.new_context().output_size()
	}
}

impl std::fmt::Debug for DigestAlgorithm {
	fn fmt(
		&self,
		f: &mut std::fmt::Formatter<'_>,
	) -> std::fmt::Result {
		f.debug_struct("DigestAlgorithm")
			.field("metadata", &self.metadata)
			.finish_non_exhaustive()
	}
}

impl std::fmt::Display for DigestAlgorithm {
	fn fmt(
		&self,
		f: &mut std::fmt::Formatter<'_>,
	) -> std::fmt::Result {
		write!(f, "{}", self.metadata.display_name)?;
		if self.metadata.is_legacy() {
			write!(f, " (legacy)")?;
		}
		Ok(())
	}
}

fn boxed<D>() -> Box<dyn DynDigest>
where
	D: DynDigest + Default + 'static,
{
	Box::new(D::default())
}

macro_rules! catalog {
	($($status:ident $id:literal $name:literal [$($alias:literal),*] => $digest:ty),+ $(,)?) => {
		&[
			$(
				DigestAlgorithm::new(
					AlgorithmMetadata::$status($id, $name, &[$($alias),*]),
					boxed::<$digest>,
				),
			)+
		]
	};
}

pub fn catalog() -> &'static [DigestAlgorithm] {
	const ALGORITHMS: &[DigestAlgorithm] = catalog!(
		legacy "md2" "MD2" [] => md2::Md2,
		legacy "md4" "MD4" [] => md4::Md4,
		legacy "md5" "MD5" [] => md5::Md5,
		legacy "sha1" "SHA-1" ["sha-1"] => sha1::Sha1,
		current "sha224" "SHA-224" ["sha2-224", "sha-224"] => sha2::Sha224,
		current "sha256" "SHA-256" ["sha2-256", "sha-256"] => sha2::Sha256,
		current "sha384" "SHA-384" ["sha2-384", "sha-384"] => sha2::Sha384,
		current "sha512" "SHA-512" ["sha2-512", "sha-512"] => sha2::Sha512,
		current "sha512-224" "SHA-512/224" ["sha2-512/224", "sha-512/224"] => sha2::Sha512_224,
		current "sha512-256" "SHA-512/256" ["sha2-512/256", "sha-512/256"] => sha2::Sha512_256,
		current "sha3-224" "SHA3-224" [] => sha3::Sha3_224,
		current "sha3-256" "SHA3-256" [] => sha3::Sha3_256,
		current "sha3-384" "SHA3-384" [] => sha3::Sha3_384,
		current "sha3-512" "SHA3-512" [] => sha3::Sha3_512,
		current "blake2b512" "BLAKE2b-512" ["blake2b", "blake2b-512"] => blake2::Blake2b512,
		current "blake2s256" "BLAKE2s-256" ["blake2s", "blake2s-256"] => blake2::Blake2s256,
		current "blake3" "BLAKE3" [] => blake3::Hasher,
		current "ripemd160" "RIPEMD-160" ["ripemd", "rmd160", "ripemd-160"] => ripemd::Ripemd160,
		current "ripemd320" "RIPEMD-320" [] => ripemd::Ripemd320,
		current "sm3" "SM3" [] => sm3::Sm3,
		current "whirlpool" "Whirlpool" [] => whirlpool::Whirlpool,
		current "streebog256" "Streebog-256" ["md_gost12_256"] => streebog::Streebog256,
		current "streebog512" "Streebog-512" ["md_gost12_512"] => streebog::Streebog512,
		legacy "gost94" "GOST R 34.11-94 (test parameters)" [] => gost94::Gost94Test,
		legacy "gost94-cryptopro" "GOST R 34.11-94 (CryptoPro parameters)" ["md_gost94"] => gost94::Gost94CryptoPro,
		legacy "gost94ua" "GOST 34.311-95" [] => gost94::Gost94UA,
		current "groestl256" "Groestl-256" ["groestl"] => groestl::Groestl256,
		current "jh224" "JH-224" [] => jh::Jh224,
		current "jh256" "JH-256" [] => jh::Jh256,
		current "jh384" "JH-384" [] => jh::Jh384,
		current "jh512" "JH-512" [] => jh::Jh512,
		current "shabal192" "Shabal-192" [] => shabal::Shabal192,
		current "shabal224" "Shabal-224" [] => shabal::Shabal224,
		current "shabal256" "Shabal-256" [] => shabal::Shabal256,
		current "shabal384" "Shabal-384" [] => shabal::Shabal384,
		current "shabal512" "Shabal-512" [] => shabal::Shabal512,
		current "skein256" "Skein-256" [] => Skein256<U32>,
		current "skein512" "Skein-512" [] => Skein512<U32>,
		current "skein1024" "Skein-1024" [] => Skein1024<U32>,
		legacy "tiger" "Tiger" [] => tiger::Tiger,
		current "fsb160" "FSB-160" [] => fsb::Fsb160,
		current "fsb224" "FSB-224" [] => fsb::Fsb224,
		current "fsb256" "FSB-256" [] => fsb::Fsb256,
		current "fsb384" "FSB-384" [] => fsb::Fsb384,
		current "fsb512" "FSB-512" [] => fsb::Fsb512,
		current "belthash" "BelT hash" ["belt-hash"] => belt_hash::BeltHash,
	);
	ALGORITHMS
}

static REGISTRY: OnceLock<HashMap<String, &'static DigestAlgorithm>> =
	OnceLock::new();

fn registry() -> &'static HashMap<String, &'static DigestAlgorithm> {
	REGISTRY.get_or_init(|| {
		let mut names = HashMap::new();
		for algorithm in catalog() {
			for name in algorithm.metadata.names() {
				names.insert(normalize(name), algorithm);
			}
		}
		names
	})
}

/// Builds the name table if no caller has done so yet. Safe to call any
/// number of times from any thread.
pub fn initialize() {
	registry();
}

/// Lookup key for a name: ASCII lowercase with `_` read as `-`.
pub fn normalize(name: &str) -> String {
	name.chars()
		.map(|c| match c {
			'_' => '-',
			other => other.to_ascii_lowercase(),
		})
		.collect()
}

pub fn lookup(name: &str) -> Option<&'static DigestAlgorithm> {
	registry().get(&normalize(name)).copied()
}

pub fn resolve(
	name: &str,
) -> Result<&'static DigestAlgorithm, HashError> {
	lookup(name).ok_or_else(|| HashError::unknown_algorithm(name))
}

pub fn is_supported(name: &str) -> bool {
	lookup(name).is_some()
}

pub fn algorithms() -> impl Iterator<Item = &'static DigestAlgorithm> {
	catalog().iter()
}

pub fn identifiers() -> Vec<&'static str> {
	algorithms().map(DigestAlgorithm::identifier).collect()
}
