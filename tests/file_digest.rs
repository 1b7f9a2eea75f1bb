// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: hashcalc

use hashcalc::hc::hash::{
	hash_file, hex_digest_file, DigestConfig, FileDigester,
};
use hashcalc::hc::registry::{self, MAX_HEX_SIZE};
use hashcalc::HashErrorKind;
use std::io::Write;
use tempfile::NamedTempFile;

fn fixture(contents: &[u8]) -> NamedTempFile {
	let mut file = NamedTempFile::new().expect("create fixture");
	file.write_all(contents).expect("write fixture");
	file
}

#[test]
fn md5_of_abc_matches_reference() {
	let file = fixture(b"abc");
	let mut out = [0u8; MAX_HEX_SIZE];
	let len = hash_file("md5", file.path(), &mut out).unwrap();
	assert_eq!(len, 32);
	assert_eq!(&out[..len], b"900150983cd24fb0d6963f7d28e17f72");
	assert_eq!(out[len], 0);
}

#[test]
fn empty_file_hashes_to_zero_length_digest() {
	let file = fixture(b"");
	assert_eq!(
		hex_digest_file("sha256", file.path()).unwrap(),
		"e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
	);
	assert_eq!(
		hex_digest_file("md5", file.path()).unwrap(),
		"d41d8cd98f00b204e9800998ecf8427e"
	);
}

#[test]
fn repeated_runs_are_deterministic() {
	let file = fixture(b"determinism check\n");
	for algorithm in registry::identifiers() {
		let first = hex_digest_file(algorithm, file.path()).unwrap();
		let second = hex_digest_file(algorithm, file.path()).unwrap();
		assert_eq!(first, second, "{}", algorithm);
		let size = registry::lookup(algorithm).unwrap().output_size();
		assert_eq!(first.len(), size * 2, "{}", algorithm);
	}
}

#[test]
fn final_partial_chunk_is_included() {
	let data = vec![b'x'; 4096 * 3 + 17];
	let file = fixture(&data);
	let digester = FileDigester::new("sha1").unwrap();
	assert_eq!(
		digester.hex_digest_file(file.path()).unwrap(),
		digester.hex_digest_bytes(&data)
	);

	let exact = vec![b'y'; 4096 * 2];
	let file = fixture(&exact);
	let digester = FileDigester::with_config(
		"blake3",
		DigestConfig { chunk_size: 4096 },
	)
	.unwrap();
	assert_eq!(
		digester.digest_file(file.path()).unwrap(),
		digester.digest_bytes(&exact)
	);
}

#[test]
fn unknown_algorithm_produces_no_output() {
	let file = fixture(b"abc");
	let mut out = [0u8; MAX_HEX_SIZE];
	let err = hash_file("notarealalgo", file.path(), &mut out).unwrap_err();
	assert_eq!(err.kind(), HashErrorKind::UnknownAlgorithm);
	assert!(out.iter().all(|b| *b == 0));
}

#[test]
fn missing_file_produces_no_output() {
	let dir = tempfile::tempdir().unwrap();
	let missing = dir.path().join("absent.bin");
	let mut out = [0u8; MAX_HEX_SIZE];
	let err = hash_file("sha256", &missing, &mut out).unwrap_err();
	assert_eq!(err.kind(), HashErrorKind::FileOpen);
	assert!(std::error::Error::source(&err).is_some());
	assert!(out.iter().all(|b| *b == 0));
}

#[test]
fn directory_is_an_open_failure() {
	let dir = tempfile::tempdir().unwrap();
	let mut out = [0u8; MAX_HEX_SIZE];
	let err = hash_file("md5", dir.path(), &mut out).unwrap_err();
	assert_eq!(err.kind(), HashErrorKind::FileOpen);
}

#[test]
fn undersized_buffer_is_rejected_untouched() {
	let file = fixture(b"abc");
	// sha256 needs 64 hex characters plus the terminator
	let mut out = [b'#'; 64];
	let err = hash_file("sha256", file.path(), &mut out).unwrap_err();
	assert_eq!(err.kind(), HashErrorKind::BufferTooSmall);
	assert!(out.iter().all(|b| *b == b'#'));

	let mut empty: [u8; 0] = [];
	let err = hash_file("sha256", file.path(), &mut empty).unwrap_err();
	assert_eq!(err.kind(), HashErrorKind::BufferTooSmall);

	let mut exact = [b'#'; 65];
	assert_eq!(hash_file("sha256", file.path(), &mut exact).unwrap(), 64);
	assert_eq!(exact[64], 0);
}
