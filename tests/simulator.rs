//! Simulation and output integration tests.

use busdriver::{
    DEFAULT_GAMES, Deck, GameOptions, MissPolicy, OutputError, ResultSet, ResultsFile,
    RoundOrder, Simulator, play_game, save_results, write_results,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[test]
fn fixed_seed_reproduces_results() {
    let simulator = Simulator::new(2024).with_games(5_000);
    let first = simulator.run();
    let second = simulator.run();
    assert_eq!(first.len(), 5_000);
    assert_eq!(first, second);
    assert_ne!(first, Simulator::new(2025).with_games(5_000).run());
}

#[test]
fn single_game_matches_a_manual_run() {
    let results = Simulator::new(17).with_games(1).run();

    let mut rng = ChaCha8Rng::seed_from_u64(17);
    let mut deck = Deck::shuffled(&mut rng);
    let drinks = play_game(&mut deck, &mut rng);

    assert_eq!(results.drinks(), &[drinks]);
}

#[test]
fn single_game_drink_count_is_pinned_for_a_seed() {
    let results = Simulator::new(17).with_games(1).run();
    assert_eq!(results.drinks(), &[27]);
}

#[test]
fn games_share_one_stream_in_order() {
    let results = Simulator::new(8).with_games(20).run();

    let mut rng = ChaCha8Rng::seed_from_u64(8);
    let manual: Vec<u32> = (0..20)
        .map(|_| {
            let mut deck = Deck::shuffled(&mut rng);
            play_game(&mut deck, &mut rng)
        })
        .collect();

    assert_eq!(results.drinks(), manual.as_slice());
}

#[test]
fn mean_drinks_sit_in_a_plausible_band() {
    let restart = Simulator::new(1)
        .with_games(20_000)
        .run()
        .summary()
        .unwrap();
    assert!(
        (14.0..16.5).contains(&restart.mean),
        "restart mean {}",
        restart.mean
    );
    assert!(restart.max <= 32);

    let retry = Simulator::new(1)
        .with_games(20_000)
        .with_options(GameOptions::default().with_miss_policy(MissPolicy::Retry))
        .run()
        .summary()
        .unwrap();
    assert!((6.5..8.5).contains(&retry.mean), "retry mean {}", retry.mean);
}

#[test]
fn round_order_changes_the_stream() {
    let suit_first = Simulator::new(4).with_games(500).run();
    let color_first = Simulator::new(4)
        .with_games(500)
        .with_options(GameOptions::default().with_order(RoundOrder::ColorFirst))
        .run();
    assert_eq!(suit_first.len(), color_first.len());
    assert_ne!(suit_first, color_first);
}

#[test]
fn summary_counts_every_game() {
    let results = ResultSet::from(vec![3, 0, 3, 5]);
    let summary = results.summary().unwrap();
    assert_eq!(summary.games, 4);
    assert_eq!(summary.min, 0);
    assert_eq!(summary.max, 5);
    assert!((summary.mean - 2.75).abs() < f64::EPSILON);
    assert_eq!(summary.histogram.get(&3), Some(&2));
    assert_eq!(summary.histogram.values().sum::<usize>(), 4);
}

#[test]
fn writer_emits_one_line_per_game() {
    let results = Simulator::new(9).with_games(1_000).run();
    let mut buffer = Vec::new();
    write_results(&mut buffer, &results).unwrap();

    let text = String::from_utf8(buffer).unwrap();
    let parsed: Vec<u32> = text.lines().map(|line| line.parse().unwrap()).collect();
    assert_eq!(parsed.len(), 1_000);
    assert_eq!(parsed.as_slice(), results.drinks());
    assert!(text.ends_with('\n'));
}

#[test]
fn default_trial_count_writes_a_million_lines() {
    let results = Simulator::new(12).run();
    assert_eq!(results.len(), DEFAULT_GAMES);

    let mut buffer = Vec::new();
    write_results(&mut buffer, &results).unwrap();
    let text = String::from_utf8(buffer).unwrap();
    let mut lines = 0;
    for line in text.lines() {
        assert!(line.parse::<u32>().is_ok(), "bad line {line:?}");
        lines += 1;
    }
    assert_eq!(lines, DEFAULT_GAMES);
}

#[test]
fn results_file_exists_before_writing() {
    let path = std::env::temp_dir().join(format!("busdriver-early-{}.txt", std::process::id()));
    let file = ResultsFile::create(&path).unwrap();
    assert_eq!(file.path(), path.as_path());
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "");

    file.write(&ResultSet::from(vec![4, 2])).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(text, "4\n2\n");
}

#[test]
fn results_file_rejects_a_missing_directory() {
    let path = std::env::temp_dir()
        .join("busdriver-missing-dir")
        .join("results.txt");
    let err = ResultsFile::create(&path).unwrap_err();
    assert!(matches!(err, OutputError::Create { .. }));
}

#[test]
fn save_results_writes_the_file() {
    let path = std::env::temp_dir().join(format!("busdriver-{}.txt", std::process::id()));
    let results = ResultSet::from(vec![1, 0, 12]);
    save_results(&path, &results).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(text, "1\n0\n12\n");
}

#[test]
fn unwritable_destination_is_reported() {
    let path = std::env::temp_dir()
        .join("busdriver-missing-dir")
        .join("nested")
        .join("results.txt");
    let err = save_results(&path, &ResultSet::from(vec![1])).unwrap_err();
    assert!(matches!(err, OutputError::Create { .. }));
    assert!(err.to_string().contains("results.txt"));
}

#[cfg(feature = "parallel")]
mod parallel {
    use super::*;

    #[test]
    fn parallel_runs_are_deterministic() {
        let simulator = Simulator::new(77).with_games(10_000);
        let first = simulator.run_parallel();
        assert_eq!(first.len(), 10_000);
        assert_eq!(first, simulator.run_parallel());
    }

    #[test]
    fn parallel_results_ignore_thread_count() {
        let simulator = Simulator::new(5).with_games(9_000);
        let run_on = |threads| {
            rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .unwrap()
                .install(|| simulator.run_parallel())
        };
        assert_eq!(run_on(1), run_on(4));
    }

    #[test]
    fn parallel_progress_is_strictly_increasing() {
        use std::sync::Mutex;

        let seen = Mutex::new(Vec::new());
        let results = rayon::ThreadPoolBuilder::new()
            .num_threads(8)
            .build()
            .unwrap()
            .install(|| {
                Simulator::new(6)
                    .with_games(100_000)
                    .run_parallel_with_progress(|pct| seen.lock().unwrap().push(pct))
            });
        assert_eq!(results.len(), 100_000);
        let seen = seen.into_inner().unwrap();
        assert!(seen.windows(2).all(|w| w[0] < w[1]), "out of order: {seen:?}");
        assert_eq!(seen.last(), Some(&100));
    }
}
