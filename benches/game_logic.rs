use criterion::{black_box, criterion_group, criterion_main, Criterion};

use blockfall::core::Board;
use blockfall::engine::{check_collision, GameEngine};
use blockfall::types::{Intent, PieceKind, Rotation};

fn bench_tick(c: &mut Criterion) {
    let mut engine = GameEngine::new(12345);
    engine.tick(0.0);

    c.bench_function("engine_tick_16ms", |b| {
        b.iter(|| {
            engine.tick(black_box(0.016));
        })
    });
}

fn bench_soft_drop(c: &mut Criterion) {
    let mut engine = GameEngine::new(12345);
    engine.tick(0.0);

    c.bench_function("soft_drop_intent", |b| {
        b.iter(|| {
            engine.apply_intent(Intent::SoftDrop);
            engine.tick(black_box(0.016));
        })
    });
}

fn bench_remove_rows(c: &mut Criterion) {
    c.bench_function("remove_4_rows", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for y in 16..20 {
                for x in 0..10 {
                    board.set(x, y, Some(PieceKind::I));
                }
            }
            let rows = board.full_rows();
            board.remove_rows(&rows);
        })
    });
}

fn bench_collision(c: &mut Criterion) {
    let board = Board::new();

    c.bench_function("check_collision", |b| {
        b.iter(|| {
            check_collision(
                black_box(&board),
                PieceKind::T,
                Rotation::East,
                black_box(4),
                black_box(10),
            )
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let mut engine = GameEngine::new(12345);
    engine.tick(0.0);
    let mut snapshot = blockfall::engine::EngineSnapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            engine.snapshot_into(black_box(&mut snapshot));
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_soft_drop,
    bench_remove_rows,
    bench_collision,
    bench_snapshot
);
criterion_main!(benches);
