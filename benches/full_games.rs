use frame_scoring::{Bowling, Side, Tennis};

criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .sample_size(50);
    targets =
        scoring_perfect_game,
        scoring_sample_game,
        scoring_straight_sets,
        scoring_marathon_final_set,
        cloning_tennis_prototype,
}

const SAMPLE_GAME: [u32; 19] = [1, 4, 4, 5, 6, 4, 5, 5, 10, 0, 1, 7, 3, 6, 4, 10, 2, 8, 6];

fn play_games(tennis: &mut Tennis, winner: Side, games: usize) {
    for _ in 0..games * 4 {
        tennis.play(winner);
    }
}

fn scoring_perfect_game(c: &mut criterion::Criterion) {
    c.bench_function("score a perfect bowling game", |b| {
        b.iter(|| {
            let mut game = Bowling::default();
            for _ in 0..12 {
                game.play(10);
            }
            game.total_score()
        })
    });
}

fn scoring_sample_game(c: &mut criterion::Criterion) {
    c.bench_function("score a bowling game with every frame kind", |b| {
        b.iter(|| {
            let mut game = Bowling::default();
            for pins in SAMPLE_GAME {
                game.play(pins);
            }
            game.accumulated_frame_scores()
        })
    });
}

fn scoring_straight_sets(c: &mut criterion::Criterion) {
    c.bench_function("score a straight-sets tennis match", |b| {
        b.iter(|| {
            let mut tennis = Tennis::default();
            play_games(&mut tennis, Side::First, 18);
            tennis.set_scores()
        })
    });
}

fn scoring_marathon_final_set(c: &mut criterion::Criterion) {
    c.bench_function("score a 70-68 deciding set", |b| {
        b.iter(|| {
            let mut tennis = Tennis::default();
            for winner in [Side::First, Side::Second, Side::First, Side::Second] {
                play_games(&mut tennis, winner, 6);
            }
            for _ in 0..68 {
                play_games(&mut tennis, Side::First, 1);
                play_games(&mut tennis, Side::Second, 1);
            }
            play_games(&mut tennis, Side::First, 2);
            tennis.match_score()
        })
    });
}

fn cloning_tennis_prototype(c: &mut criterion::Criterion) {
    let tennis = Tennis::default();
    c.bench_function("instantiate the tennis prototype", |b| {
        b.iter(|| tennis.tree().instantiate(0))
    });
}
