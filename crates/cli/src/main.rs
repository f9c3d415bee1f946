// Copyright 2025 Irreducible Inc.

use std::{
	io::{self, BufReader, Read, Write},
	path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::{value_parser, Parser};
use sha256sum_hash::{digest_path_with_capacity, digest_reader, Sha256Hash, FILE_BUFFER_SIZE};
use sha256sum_utils::tracing::init_tracing;
use tracing::debug;

/// Print the SHA-256 digest of a file or of standard input.
#[derive(Debug, Parser)]
#[command(name = "sha256sum", version)]
struct Args {
	/// File to hash. Standard input is read when absent or `-`.
	file: Option<PathBuf>,
	/// Capacity of the read buffer in bytes.
	#[arg(long, default_value_t = FILE_BUFFER_SIZE as u32, value_parser = value_parser!(u32).range(64..))]
	buffer_size: u32,
	/// Append the input name after the digest, as `<digest>  <name>`.
	#[arg(long)]
	with_name: bool,
}

impl Args {
	/// The file to open, or `None` for standard input.
	fn path(&self) -> Option<&Path> {
		self.file.as_deref().filter(|path| *path != Path::new("-"))
	}
}

fn hash_input(args: &Args, stdin: impl Read) -> Result<Sha256Hash> {
	let capacity = args.buffer_size as usize;
	let hash = match args.path() {
		Some(path) => digest_path_with_capacity(path, capacity)?,
		None => digest_reader(BufReader::with_capacity(capacity, stdin))
			.context("failed to read standard input")?,
	};
	Ok(hash)
}

fn run(args: &Args, stdin: impl Read, out: &mut impl Write) -> Result<()> {
	let hash = hash_input(args, stdin)?;
	debug!(%hash, file = ?args.path(), "digest computed");

	if args.with_name {
		let name = args
			.path()
			.map_or_else(|| "-".to_string(), |path| path.display().to_string());
		writeln!(out, "{hash}  {name}")?;
	} else {
		writeln!(out, "{hash}")?;
	}
	Ok(())
}

fn main() -> Result<()> {
	init_tracing();

	let args = Args::parse();
	run(&args, io::stdin().lock(), &mut io::stdout().lock())
}

#[cfg(test)]
mod tests {
	use std::io::Cursor;

	use sha256sum_hash::DigestError;

	use super::*;

	fn run_with(argv: &[&str], stdin: &[u8]) -> Result<String> {
		let args = Args::try_parse_from(std::iter::once("sha256sum").chain(argv.iter().copied()))?;
		let mut out = Vec::new();
		run(&args, Cursor::new(stdin), &mut out)?;
		Ok(String::from_utf8(out)?)
	}

	#[test]
	fn test_stdin() {
		assert_eq!(
			run_with(&[], b"hello\n").unwrap(),
			"5891b5b522d5df086d0ff0b110fbd9d21bb4fc7163af34d08286a2e846f6be03\n"
		);
		assert_eq!(
			run_with(&["-", "--with-name"], b"hello").unwrap(),
			"2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824  -\n"
		);
	}

	#[test]
	fn test_file() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		file.write_all(b"hello").unwrap();
		let path = file.path().to_str().unwrap();
		assert_eq!(
			run_with(&[path, "--buffer-size", "64"], b"ignored").unwrap(),
			"2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824\n"
		);
		assert_eq!(
			run_with(&[path, "--with-name"], b"").unwrap(),
			format!("2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824  {path}\n")
		);
	}

	#[test]
	fn test_missing_file() {
		let err = run_with(&["/no/such/file"], b"").unwrap_err();
		assert!(matches!(err.downcast_ref::<DigestError>(), Some(DigestError::Open { .. })));
		assert!(err.to_string().starts_with("'/no/such/file' could not be opened"));
	}

	#[test]
	fn test_buffer_size_lower_bound() {
		assert!(Args::try_parse_from(["sha256sum", "--buffer-size", "63"]).is_err());
	}
}
