// Copyright 2025 Irreducible Inc.

use crate::{
	compression::compress256,
	consts::{State, BLOCK_SIZE, LENGTH_OFFSET, MARKER},
};

/// Pads the trailing bytes of a message and compresses the final block(s).
///
/// `remainder` holds the bytes that have not been compressed yet and `total_len` is the number
/// of bytes in the whole message, including those already folded into `state`. Drivers pass
/// fewer than [`BLOCK_SIZE`] bytes; complete blocks at the front of a longer remainder are
/// compressed first, so a full remainder takes the two-block path instead of overflowing.
pub fn finalize(state: &mut State, remainder: &[u8], total_len: u64) {
	debug_assert!(total_len >= remainder.len() as u64);

	let mut block = [0u8; BLOCK_SIZE];

	let mut chunks = remainder.chunks_exact(BLOCK_SIZE);
	for chunk in &mut chunks {
		block.copy_from_slice(chunk);
		compress256(state, &block);
	}

	let tail = chunks.remainder();
	block = [0u8; BLOCK_SIZE];
	block[..tail.len()].copy_from_slice(tail);
	block[tail.len()] = MARKER;

	// No room left for the length field; it moves to an extra all-zero block.
	if tail.len() + 1 > LENGTH_OFFSET {
		compress256(state, &block);
		block = [0u8; BLOCK_SIZE];
	}

	let bit_len = total_len.wrapping_mul(8);
	block[LENGTH_OFFSET..].copy_from_slice(&bit_len.to_be_bytes());
	compress256(state, &block);
}

#[cfg(test)]
mod tests {
	use hex_literal::hex;

	use super::*;
	use crate::{consts::IV, Sha256Hash};

	fn finalize_fresh(message: &[u8]) -> [u8; 32] {
		let mut state = IV;
		finalize(&mut state, message, message.len() as u64);
		Sha256Hash::from_state(state).into_bytes()
	}

	#[test]
	fn test_empty_message() {
		assert_eq!(
			finalize_fresh(b""),
			hex!("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855")
		);
	}

	#[test]
	fn test_one_block_path() {
		// 55 bytes + marker ends exactly at the length field.
		assert_eq!(
			finalize_fresh(&[b'a'; 55]),
			hex!("9f4390f8d30c2dd92ec9f095b65e2b9ae9b0a925a5258e241c9f1e910f734318")
		);
	}

	#[test]
	fn test_two_block_path() {
		assert_eq!(
			finalize_fresh(&[b'a'; 56]),
			hex!("b35439a4ac6f0948b6d6f9e3c6af0f5f590ce20f1bde7090ef7970686ec6738a")
		);
		assert_eq!(
			finalize_fresh(&[b'a'; 63]),
			hex!("7d3e74a05d7db15bce4ad9ec0658ea98e3f06eeecf16b4c6fff2da457ddc2f34")
		);
	}

	#[test]
	fn test_full_remainder_does_not_overflow() {
		assert_eq!(
			finalize_fresh(&[b'a'; 64]),
			hex!("ffe054fe7ae0cb6dc65c3af9b61d5209f439851db43d0ba5997337df154668eb")
		);
		assert_eq!(
			finalize_fresh(&[b'a'; 65]),
			hex!("635361c48bb9eab14198e76ea8ab7f1a41685d6ad62aa9146d301d4f17eb0ae0")
		);
	}

	#[test]
	fn test_length_counts_already_compressed_bytes() {
		let message: Vec<u8> = (0..64).collect();
		let mut block = [0u8; BLOCK_SIZE];
		block.copy_from_slice(&message);

		let mut state = IV;
		compress256(&mut state, &block);
		finalize(&mut state, &[], 64);
		assert_eq!(
			Sha256Hash::from_state(state).into_bytes(),
			hex!("fdeab9acf3710362bd2658cdc9a29e8f9c757fcf9811603a8c447cd1d9151108")
		);
	}
}
