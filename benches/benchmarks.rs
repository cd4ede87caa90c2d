use criterion::{black_box, criterion_group, criterion_main, Criterion};

use bwt_rust::index::{fm, ranked, registry, rotation};

fn make_reference(len: usize) -> Vec<u8> {
    let bases = [b'A', b'C', b'G', b'T'];
    let mut seq = Vec::with_capacity(len);
    let mut x: u32 = 42;
    for _ in 0..len {
        x = x.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        seq.push(bases[(x >> 16) as usize % 4]);
    }
    seq
}

// 旋转矩阵是 O(m²) 内存的朴素构建，基准规模刻意偏小
fn bench_build_matrix(c: &mut Criterion) {
    let reference = make_reference(1_000);

    c.bench_function("build_matrix_1k", |b| {
        b.iter(|| {
            black_box(rotation::build_matrix(black_box(&reference)));
        })
    });
}

fn bench_ranked_l(c: &mut Criterion) {
    let reference = make_reference(1_000);
    let reg = registry::Registry::build(&reference);

    c.bench_function("ranked_l_1k", |b| {
        b.iter(|| {
            black_box(ranked::build_ranked_l(black_box(&reference), black_box(&reg)));
        })
    });
}

fn bench_backward_search(c: &mut Criterion) {
    let reference = make_reference(1_000);
    let index = fm::BwtIndex::build(&reference).expect("bench reference is sentinel-free");
    let pattern = reference[100..120].to_vec();

    c.bench_function("backward_search_20bp", |b| {
        b.iter(|| {
            black_box(index.find_all(black_box(&pattern)).unwrap());
        })
    });
}

fn bench_invert(c: &mut Criterion) {
    let reference = make_reference(500);
    let index = fm::BwtIndex::build(&reference).expect("bench reference is sentinel-free");

    c.bench_function("invert_500bp", |b| {
        b.iter(|| {
            black_box(index.invert());
        })
    });
}

criterion_group!(
    benches,
    bench_build_matrix,
    bench_ranked_l,
    bench_backward_search,
    bench_invert
);
criterion_main!(benches);
