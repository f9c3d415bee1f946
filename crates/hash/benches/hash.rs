// Copyright 2024-2025 Irreducible Inc.

use std::io::Cursor;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use rand::{thread_rng, RngCore};
use sha256sum_hash::{compress256, digest, digest_reader, Block, BLOCK_SIZE};
use sha2::Digest;

fn bench_compress(c: &mut Criterion) {
	let mut group = c.benchmark_group("SHA-256 compression");

	let mut block: Block = [0u8; BLOCK_SIZE];
	thread_rng().fill_bytes(&mut block);
	let mut state = [0u32; 8];

	group.throughput(Throughput::Bytes(BLOCK_SIZE as u64));
	group.bench_function("compress256", |bench| bench.iter(|| compress256(&mut state, &block)));

	group.finish()
}

fn bench_digest(c: &mut Criterion) {
	let mut group = c.benchmark_group("SHA-256");

	let mut rng = thread_rng();

	const N: usize = 1 << 16;
	let mut data = vec![0u8; N];
	rng.fill_bytes(&mut data);

	group.throughput(Throughput::Bytes(N as u64));
	group.bench_function("buffer", |bench| bench.iter(|| digest(&data)));
	group.bench_function("stream", |bench| {
		bench.iter(|| digest_reader(Cursor::new(&data)).expect("in-memory reads never fail"))
	});
	group.bench_function("SHA-256-RustCrypto", |bench| bench.iter(|| sha2::Sha256::digest(&data)));

	group.finish()
}

criterion_group!(hash, bench_compress, bench_digest);
criterion_main!(hash);
