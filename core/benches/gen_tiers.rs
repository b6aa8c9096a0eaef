use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use sapper_core::*;
use std::hint::black_box;

const TIERS: [(&str, GameConfig); 3] = [
    ("beginner", GameConfig::BEGINNER),
    ("intermediate", GameConfig::INTERMEDIATE),
    ("expert", GameConfig::EXPERT),
];

fn generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for (name, config) in TIERS {
        let center = (config.width() / 2, config.height() / 2);
        group.bench_with_input(BenchmarkId::from_parameter(name), &config, |b, &config| {
            let mut generator = RandomMinefieldGenerator::new(0x5eed);
            b.iter(|| generator.generate(black_box(config), Some(center)))
        });
    }
    group.finish();
}

fn flood_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("flood_fill");
    for (name, config) in TIERS {
        let center = (config.width() / 2, config.height() / 2);
        let board = RandomMinefieldGenerator::new(0x5eed)
            .generate(config, Some(center))
            .expect("classic tiers always fit a safe zone");
        group.bench_with_input(BenchmarkId::from_parameter(name), &board, |b, board| {
            b.iter(|| {
                let mut board = board.clone();
                reveal(&mut board, black_box(center))
            })
        });
    }

    let open = Board::from_mine_coords((255, 255), &[]).expect("empty board is valid");
    group.bench_function("open_255x255", |b| {
        b.iter(|| {
            let mut board = open.clone();
            reveal(&mut board, black_box((0, 0)))
        })
    });
    group.finish();
}

criterion_group!(benches, generate, flood_fill);
criterion_main!(benches);
