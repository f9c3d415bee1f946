// Copyright 2025 Irreducible Inc.

use std::{
	fs::File,
	io::{BufReader, ErrorKind, Read},
	path::Path,
};

use tracing::{instrument, trace};

use crate::{
	compression::compress256,
	consts::{Block, BLOCK_SIZE, IV},
	error::DigestError,
	finalize::finalize,
	Sha256Hash,
};

/// Read buffer capacity used by the file drivers.
pub const FILE_BUFFER_SIZE: usize = 64 * 1024;

/// Hashes an in-memory buffer.
#[instrument(skip_all, level = "debug", fields(len = data.as_ref().len()))]
pub fn digest(data: impl AsRef<[u8]>) -> Sha256Hash {
	let data = data.as_ref();
	let mut state = IV;

	let mut remainder = data;
	while let Some((block, rest)) = remainder.split_first_chunk::<BLOCK_SIZE>() {
		compress256(&mut state, block);
		remainder = rest;
	}
	finalize(&mut state, remainder, data.len() as u64);

	Sha256Hash::from_state(state)
}

/// Hashes a byte stream, consuming it until `read` reports end of input.
///
/// Short reads are not treated as end of input: every block is filled completely before it is
/// compressed. A read error aborts the computation.
#[instrument(skip_all, level = "debug")]
pub fn digest_reader<R: Read>(reader: R) -> Result<Sha256Hash, DigestError> {
	let mut blocks = BlockReader::new(reader);
	let mut state = IV;

	loop {
		let filled = blocks.fill()?;
		if filled < BLOCK_SIZE {
			finalize(&mut state, &blocks.block[..filled], blocks.consumed);
			break;
		}
		compress256(&mut state, &blocks.block);
	}

	trace!(consumed = blocks.consumed, "stream exhausted");
	Ok(Sha256Hash::from_state(state))
}

/// Hashes a file from its current position to end of file.
pub fn digest_file(file: &mut File) -> Result<Sha256Hash, DigestError> {
	digest_file_with_capacity(file, FILE_BUFFER_SIZE)
}

/// Like [`digest_file`] with an explicit read buffer capacity.
#[instrument(skip(file), level = "debug")]
pub fn digest_file_with_capacity(
	file: &mut File,
	capacity: usize,
) -> Result<Sha256Hash, DigestError> {
	digest_reader(BufReader::with_capacity(capacity, file))
}

/// Opens `path` and hashes its whole content.
pub fn digest_path(path: impl AsRef<Path>) -> Result<Sha256Hash, DigestError> {
	digest_path_with_capacity(path, FILE_BUFFER_SIZE)
}

/// Like [`digest_path`] with an explicit read buffer capacity.
///
/// An open failure is reported before any byte is hashed.
pub fn digest_path_with_capacity(
	path: impl AsRef<Path>,
	capacity: usize,
) -> Result<Sha256Hash, DigestError> {
	let path = path.as_ref();
	let mut file = File::open(path).map_err(|source| DigestError::Open {
		path: path.to_path_buf(),
		source,
	})?;
	digest_file_with_capacity(&mut file, capacity)
}

/// Splits a byte stream into complete blocks, tracking how many bytes were consumed.
struct BlockReader<R> {
	reader: R,
	block: Block,
	consumed: u64,
}

impl<R: Read> BlockReader<R> {
	fn new(reader: R) -> Self {
		Self {
			reader,
			block: [0u8; BLOCK_SIZE],
			consumed: 0,
		}
	}

	/// Reads into the block until it is full or the stream ends. Returns the number of valid
	/// bytes, which is less than [`BLOCK_SIZE`] only at end of input.
	fn fill(&mut self) -> Result<usize, DigestError> {
		let mut filled = 0;
		while filled < BLOCK_SIZE {
			match self.reader.read(&mut self.block[filled..]) {
				Ok(0) => break,
				Ok(n) => {
					filled += n;
					self.consumed += n as u64;
				}
				Err(err) if err.kind() == ErrorKind::Interrupted => continue,
				Err(source) => {
					return Err(DigestError::Read {
						consumed: self.consumed,
						source,
					})
				}
			}
		}
		Ok(filled)
	}
}
