// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use criterion::{criterion_group, criterion_main, Criterion};
use segmented_id::{IdGenerator, IdProperties};

fn bench_next_id(c: &mut Criterion) {
    // Large delta: effectively every call takes the local fast path.
    let gen = IdGenerator::builder()
        .application_name("bench")
        .register("x", IdProperties::new(1_000_000))
        .finalize()
        .expect("could not build IdGenerator");
    c.bench_function("bench_next_id_fast_path", |b| {
        b.iter(|| gen.next_id("x"));
    });
}

fn bench_next_id_refill_heavy(c: &mut Criterion) {
    // delta = 1 forces an allocation round trip on every call.
    let gen = IdGenerator::builder()
        .application_name("bench")
        .register("x", IdProperties::new(1))
        .finalize()
        .expect("could not build IdGenerator");
    c.bench_function("bench_next_id_refill_heavy", |b| {
        b.iter(|| gen.next_id("x"));
    });
}

criterion_group!(segmented_id_perf, bench_next_id, bench_next_id_refill_heavy);
criterion_main!(segmented_id_perf);
