// Copyright 2024-2025 Irreducible Inc.

use crate::consts::{Block, State, K};

#[inline(always)]
fn sigma0(x: u32) -> u32 {
	x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

#[inline(always)]
fn sigma1(x: u32) -> u32 {
	x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}

#[inline(always)]
fn big_sigma0(x: u32) -> u32 {
	x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
}

#[inline(always)]
fn big_sigma1(x: u32) -> u32 {
	x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
}

#[inline(always)]
fn ch(x: u32, y: u32, z: u32) -> u32 {
	(x & y) ^ (!x & z)
}

#[inline(always)]
fn maj(x: u32, y: u32, z: u32) -> u32 {
	(x & y) ^ (x & z) ^ (y & z)
}

/// Expands one block into the 64-word message schedule.
fn schedule(block: &Block) -> [u32; 64] {
	let mut w = [0u32; 64];
	for (word, chunk) in w.iter_mut().zip(block.chunks_exact(4)) {
		*word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
	}
	for i in 16..64 {
		w[i] = sigma1(w[i - 2])
			.wrapping_add(w[i - 7])
			.wrapping_add(sigma0(w[i - 15]))
			.wrapping_add(w[i - 16]);
	}
	w
}

/// The SHA-256 compression function.
///
/// Mixes one 64-byte block into the running state. The block is read as sixteen big-endian
/// words; all additions are modulo 2^32.
pub fn compress256(state: &mut State, block: &Block) {
	let w = schedule(block);

	let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;

	for (&k, &w) in K.iter().zip(w.iter()) {
		let t1 = h
			.wrapping_add(big_sigma1(e))
			.wrapping_add(ch(e, f, g))
			.wrapping_add(k)
			.wrapping_add(w);
		let t2 = big_sigma0(a).wrapping_add(maj(a, b, c));

		h = g;
		g = f;
		f = e;
		e = d.wrapping_add(t1);
		d = c;
		c = b;
		b = a;
		a = t1.wrapping_add(t2);
	}

	for (s, v) in state.iter_mut().zip([a, b, c, d, e, f, g, h]) {
		*s = s.wrapping_add(v);
	}
}
