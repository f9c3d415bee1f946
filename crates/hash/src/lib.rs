// Copyright 2025 Irreducible Inc.

//! SHA-256 (FIPS 180-4) over in-memory buffers, byte streams and files.
//!
//! All three drivers split their input into complete 64-byte blocks, feed them to
//! [`compress256`], and hand the trailing bytes to the shared [`finalize`] step, so they agree
//! byte for byte on the same content.

pub mod compression;
pub mod consts;
pub mod drivers;
pub mod error;
pub mod finalize;
pub mod hash_value;

pub use compression::compress256;
pub use consts::{Block, State, BLOCK_SIZE, DIGEST_SIZE};
pub use drivers::{
	digest, digest_file, digest_file_with_capacity, digest_path, digest_path_with_capacity,
	digest_reader, FILE_BUFFER_SIZE,
};
pub use error::{DigestError, HexError};
pub use finalize::finalize;
pub use hash_value::Sha256Hash;
