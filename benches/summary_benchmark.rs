use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use scoreboard::domain::{InMemoryScoreboard, Scoreboard};

fn populated_board(size: u32) -> InMemoryScoreboard {
    let mut board = InMemoryScoreboard::new();
    for i in 0..size {
        let id = board
            .start_match(&format!("Home {}", i), &format!("Away {}", i))
            .unwrap();
        board
            .update_score(id, i64::from(i % 7), i64::from(i % 5))
            .unwrap();
    }
    board
}

fn summary_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Scoreboard Summary");

    for size in [10, 100, 1000] {
        let board = populated_board(size);
        group.bench_function(format!("summary of {} matches", size), |b| {
            b.iter(|| black_box(board.summary()));
        });
    }

    group.finish();
}

fn churn_benchmark(c: &mut Criterion) {
    let master = populated_board(100);

    c.bench_function("start + update + finish on 100 matches", |b| {
        b.iter_batched(
            || master.clone(),
            |mut board| {
                let id = board.start_match("Spain", "Brazil").unwrap();
                board.update_score(black_box(id), 1, 0).unwrap();
                board.finish_match(id);
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, summary_benchmark, churn_benchmark);
criterion_main!(benches);
