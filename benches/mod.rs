use criterion::{criterion_group, criterion_main};

mod readline;

criterion_group!(benches, readline::bench_read_line);
criterion_main!(benches);
