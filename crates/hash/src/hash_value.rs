// Copyright 2025 Irreducible Inc.

use std::{fmt, str::FromStr};

use sha256sum_utils::ensure;

use crate::{
	consts::{State, DIGEST_SIZE},
	error::HexError,
};

/// A SHA-256 digest.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Sha256Hash([u8; DIGEST_SIZE]);

impl Sha256Hash {
	/// Serializes a final state, each word most-significant byte first.
	pub fn from_state(state: State) -> Self {
		let mut bytes = [0u8; DIGEST_SIZE];
		for (chunk, word) in bytes.chunks_exact_mut(4).zip(state) {
			chunk.copy_from_slice(&word.to_be_bytes());
		}
		Self(bytes)
	}

	pub fn as_bytes(&self) -> &[u8; DIGEST_SIZE] {
		&self.0
	}

	pub fn into_bytes(self) -> [u8; DIGEST_SIZE] {
		self.0
	}

	/// Lowercase hex encoding, two digits per byte and no separators.
	pub fn to_hex(&self) -> String {
		hex::encode(self.0)
	}

	/// Parses a 64-digit hex string. Both cases are accepted.
	pub fn from_hex(s: &str) -> Result<Self, HexError> {
		let invalid_length = HexError::InvalidLength {
			expected: 2 * DIGEST_SIZE,
			actual: s.len(),
		};
		ensure!(s.len() == 2 * DIGEST_SIZE, invalid_length);

		let mut bytes = [0u8; DIGEST_SIZE];
		hex::decode_to_slice(s, &mut bytes).map_err(|err| match err {
			hex::FromHexError::InvalidHexCharacter { c, index } => HexError::InvalidCharacter {
				index,
				character: c,
			},
			// Odd or mismatched length; unreachable after the check above.
			_ => invalid_length,
		})?;
		Ok(Self(bytes))
	}
}

impl From<[u8; DIGEST_SIZE]> for Sha256Hash {
	fn from(bytes: [u8; DIGEST_SIZE]) -> Self {
		Self(bytes)
	}
}

impl From<Sha256Hash> for [u8; DIGEST_SIZE] {
	fn from(hash: Sha256Hash) -> Self {
		hash.0
	}
}

impl AsRef<[u8]> for Sha256Hash {
	fn as_ref(&self) -> &[u8] {
		&self.0
	}
}

impl FromStr for Sha256Hash {
	type Err = HexError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::from_hex(s)
	}
}

impl fmt::LowerHex for Sha256Hash {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.to_hex())
	}
}

impl fmt::Display for Sha256Hash {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::LowerHex::fmt(self, f)
	}
}

impl fmt::Debug for Sha256Hash {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Sha256Hash({})", self.to_hex())
	}
}
