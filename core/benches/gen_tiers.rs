use criterion::{Criterion, criterion_group, criterion_main};
use mineboard_core::*;
use std::hint::black_box;

fn center(config: GameConfig) -> Coord2 {
    (config.size.0 / 2, config.size.1 / 2)
}

fn bench_gen_tiers(c: &mut Criterion) {
    let mut group = c.benchmark_group("gen_tiers");

    for (name, config) in [
        ("easy", GameConfig::EASY),
        ("normal", GameConfig::NORMAL),
        ("hard", GameConfig::HARD),
    ] {
        group.bench_function(format!("{name}/deal"), |b| {
            let mut seed = 0u64;
            b.iter(|| {
                seed += 1;
                black_box(Game::new(config, seed).unwrap())
            })
        });

        group.bench_function(format!("{name}/first_click"), |b| {
            let mut seed = 0u64;
            b.iter(|| {
                seed += 1;
                let mut game = Game::new(config, seed).unwrap();
                black_box(game.reveal(center(config)).unwrap())
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_gen_tiers);
criterion_main!(benches);
