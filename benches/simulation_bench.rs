//! Performance benchmarks

use busy_beaver::driver::scan_range;
use busy_beaver::*;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn benchmark_simulation(c: &mut Criterion) {
    let champion: MachineDescriptor = "1RB1LB_1LA0LC_1RZ1LD_1RD0RA"
        .parse()
        .expect("valid machine text");
    let runaway: MachineDescriptor = "1RB1LA_1LA1RB".parse().expect("valid machine text");

    c.bench_function("run_bb4_champion", |b| {
        b.iter(|| run(black_box(&champion), black_box(1_000)));
    });

    c.bench_function("run_non_halting_t=100000", |b| {
        b.iter(|| run(black_box(&runaway), black_box(100_000)));
    });
}

fn benchmark_enumeration(c: &mut Criterion) {
    let space = SearchSpace::new(4).expect("4-state space fits");

    c.bench_function("decode_4_state_x1000", |b| {
        b.iter(|| {
            for index in 0..1_000u64 {
                black_box(space.descriptor(black_box(index * 25_600_000)).ok());
            }
        });
    });

    let two = SearchSpace::new(2).expect("2-state space fits");
    c.bench_function("scan_2_state_bound_100", |b| {
        b.iter(|| scan_range(&two, two.full_range(), black_box(100)));
    });
}

criterion_group!(benches, benchmark_simulation, benchmark_enumeration);
criterion_main!(benches);
