use criterion::{black_box, criterion_group, criterion_main, Criterion};
use morse_trie::{Alphabet, MorseTrie};

fn bench_seed(c: &mut Criterion) {
    let alphabet = Alphabet::standard();
    c.bench_function("seed_standard", |b| {
        b.iter(|| MorseTrie::with_alphabet(black_box(&alphabet)))
    });
}

fn bench_decode(c: &mut Criterion) {
    let trie = MorseTrie::standard();
    let message = trie.encode("the quick brown fox jumps over the lazy dog 0123456789");

    c.bench_function("decode_pangram", |b| {
        b.iter(|| trie.decode(black_box(&message)))
    });
    c.bench_function("encode_pangram", |b| {
        b.iter(|| trie.encode(black_box("the quick brown fox jumps over the lazy dog")))
    });
}

criterion_group!(benches, bench_seed, bench_decode);
criterion_main!(benches);
