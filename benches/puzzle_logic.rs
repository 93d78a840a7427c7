use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_fifteen::core::{is_solved, plan_slide, scramble, Grid, PuzzleSnapshot, SimpleRng};
use tui_fifteen::engine::PuzzleSession;
use tui_fifteen::types::{Direction, SCRAMBLE_MOVES};

fn bench_tick(c: &mut Criterion) {
    let mut session = PuzzleSession::new(12345);
    session.handle_scramble();

    c.bench_function("session_tick_16ms", |b| {
        b.iter(|| {
            // Keep a slide in flight so the tick path stays hot.
            if session.can_accept_move() {
                for dir in Direction::ALL {
                    if session.handle_direction(dir) {
                        break;
                    }
                }
            }
            session.tick(black_box(16));
            session.take_last_event();
        })
    });
}

fn bench_scramble(c: &mut Criterion) {
    c.bench_function("scramble_150_moves", |b| {
        let mut grid = Grid::new(4);
        let mut rng = SimpleRng::new(12345);
        b.iter(|| {
            scramble(&mut grid, &mut rng, black_box(SCRAMBLE_MOVES));
        })
    });
}

fn bench_plan_slide(c: &mut Criterion) {
    let grid = Grid::new(4);

    c.bench_function("plan_slide", |b| {
        b.iter(|| {
            black_box(plan_slide(&grid, black_box(Direction::Down)));
        })
    });
}

fn bench_is_solved(c: &mut Criterion) {
    let mut grid = Grid::new(4);
    let mut rng = SimpleRng::new(12345);
    scramble(&mut grid, &mut rng, SCRAMBLE_MOVES);

    c.bench_function("is_solved", |b| {
        b.iter(|| {
            black_box(is_solved(black_box(&grid)));
        })
    });
}

fn bench_snapshot_into(c: &mut Criterion) {
    let mut session = PuzzleSession::new(12345);
    session.handle_scramble();
    let mut snap = PuzzleSnapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            session.snapshot_into(black_box(&mut snap));
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_scramble,
    bench_plan_slide,
    bench_is_solved,
    bench_snapshot_into
);
criterion_main!(benches);
