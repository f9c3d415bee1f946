// Copyright 2025 Irreducible Inc.

use std::{io, path::PathBuf};

/// Failure of a digest driver. The input source is the only thing that can fail.
#[derive(Debug, thiserror::Error)]
pub enum DigestError {
	#[error("'{}' could not be opened: {source}", .path.display())]
	Open { path: PathBuf, source: io::Error },
	#[error("read failed after {consumed} bytes: {source}")]
	Read { consumed: u64, source: io::Error },
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum HexError {
	#[error("expected {expected} hex digits, got {actual}")]
	InvalidLength { expected: usize, actual: usize },
	#[error("invalid hex character {character:?} at index {index}")]
	InvalidCharacter { index: usize, character: char },
}
