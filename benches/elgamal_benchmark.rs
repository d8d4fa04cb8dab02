use criterion::{Criterion, criterion_group, criterion_main};
use ec_elgamal::{BigInt, BigUint, ElGamal, KeyPair};
use std::hint::black_box;

fn bench_scalar_mul(c: &mut Criterion) {
    let scheme = ElGamal::secp256k1();
    let curve = scheme.curve();
    let k = BigUint::parse_bytes(
        b"C0FFEE0123456789ABCDEF0123456789ABCDEF0123456789ABCDEF0123456789",
        16,
    )
    .unwrap();
    c.bench_function("scalar_mul_256", |b| {
        b.iter(|| curve.mul_generator(black_box(&k)))
    });
}

fn bench_encrypt_decrypt(c: &mut Criterion) {
    let scheme = ElGamal::secp256k1();
    let keys = KeyPair::from_private(scheme.curve(), BigUint::from(12345u32)).unwrap();
    let m = BigInt::from(7);
    let nonce = BigUint::from(0xDEAD_BEEF_u64);

    c.bench_function("encrypt", |b| {
        b.iter(|| scheme.encrypt_with_nonce(keys.public_key(), black_box(&m), &nonce))
    });

    let ct = scheme
        .encrypt_with_nonce(keys.public_key(), &m, &nonce)
        .unwrap();
    c.bench_function("decrypt", |b| {
        b.iter(|| scheme.decrypt(black_box(&ct), keys.private_key()))
    });
}

criterion_group!(benches, bench_scalar_mul, bench_encrypt_decrypt);
criterion_main!(benches);
