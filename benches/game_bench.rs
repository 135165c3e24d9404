//! Benchmark for a scoring game driven by the State monad.
//!
//! Compares the get/put style, the modify style and a plain fold over the
//! same letter sequence.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use statecraft::effect::{State, get, gets, modify, put};
use std::hint::black_box;

#[derive(Clone, Copy)]
struct Game {
    on: bool,
    score: i32,
}

const START: Game = Game {
    on: false,
    score: 0,
};

fn apply_rule(letter: char, game: Game) -> Game {
    match letter {
        'a' if game.on => Game {
            score: game.score + 1,
            ..game
        },
        'b' if game.on => Game {
            score: game.score - 1,
            ..game
        },
        'c' => Game {
            on: !game.on,
            ..game
        },
        _ => game,
    }
}

fn play_with_get_put(sequence: &'static str) -> State<Game, i32> {
    let mut letters = sequence.chars();
    match letters.next() {
        None => gets(|game: &Game| game.score),
        Some(letter) => {
            let rest = letters.as_str();
            get().bind(move |game: Game| {
                put(apply_rule(letter, game)).bind(move |()| play_with_get_put(rest))
            })
        }
    }
}

fn play_with_modify(sequence: &'static str) -> State<Game, i32> {
    let mut letters = sequence.chars();
    match letters.next() {
        None => gets(|game: &Game| game.score),
        Some(letter) => {
            let rest = letters.as_str();
            modify(move |game: Game| apply_rule(letter, game))
                .bind(move |()| play_with_modify(rest))
        }
    }
}

fn benchmark_game(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("game");

    for sequence in ["abcaaacbbcabbab", "cabababababababababababababababc"] {
        group.bench_with_input(
            BenchmarkId::new("get_put", sequence.len()),
            &sequence,
            |bencher, &sequence| {
                bencher.iter(|| black_box(play_with_get_put(sequence).eval_state(START)));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("modify", sequence.len()),
            &sequence,
            |bencher, &sequence| {
                bencher.iter(|| black_box(play_with_modify(sequence).eval_state(START)));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("fold", sequence.len()),
            &sequence,
            |bencher, &sequence| {
                bencher.iter(|| {
                    black_box(
                        sequence
                            .chars()
                            .fold(START, |game, letter| apply_rule(letter, game))
                            .score,
                    )
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, benchmark_game);

criterion_main!(benches);
