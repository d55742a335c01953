use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use gitoid::{GitOid, HashAlgorithm, ObjectType};

fn from_bytes(c: &mut Criterion) {
    let data = vec![0x5Au8; 64 * 1024];

    let mut group = c.benchmark_group("gitoid_from_bytes");
    group.throughput(Throughput::Bytes(data.len() as u64));

    for algo in HashAlgorithm::ALL {
        group.bench_function(format!("{algo}_64kib"), |b| {
            b.iter(|| GitOid::new_from_bytes(black_box(algo), ObjectType::Blob, black_box(&data)))
        });
    }

    group.finish();
}

fn url_codec(c: &mut Criterion) {
    let id = GitOid::new_from_str(HashAlgorithm::Sha256, ObjectType::Blob, "hello world");
    let url = id.url();

    let mut group = c.benchmark_group("url");

    group.bench_function("format_sha256", |b| b.iter(|| black_box(&id).url()));

    group.bench_function("parse_sha256", |b| {
        b.iter(|| GitOid::from_url(black_box(&url)).unwrap())
    });

    group.finish();
}

criterion_group!(benches, from_bytes, url_codec);
criterion_main!(benches);
