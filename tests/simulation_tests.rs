//! Simulation harness tests.

use beauty_contest::{
    GameError, GameRng, PlayerName, RandomStrategy, RuleConfig, ScriptedStrategy, Simulation,
    SimulationConfig, Submission, TargetChaser,
};

fn name(s: &str) -> PlayerName {
    PlayerName::parse(s).unwrap()
}

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn random_table(seats: usize) -> Simulation {
    (0..seats).fold(Simulation::new(SimulationConfig::new()), |sim, i| {
        sim.with_seat(format!("bot{i}"), RandomStrategy::default())
    })
}

/// Test that the same seed replays the same game.
#[test]
fn test_same_seed_same_game() {
    init_logging();
    let sim = random_table(5);

    let first = sim.run(&mut GameRng::new(1234)).unwrap();
    let second = sim.run(&mut GameRng::new(1234)).unwrap();

    assert_eq!(first.winner, second.winner);
    assert_eq!(first.rounds_played, second.rounds_played);
    assert_eq!(first.elimination_order, second.elimination_order);
    assert_eq!(first.final_scores, second.final_scores);
}

/// Test a scripted duel: 100 always beats 0.
#[test]
fn test_scripted_duel() {
    let sim = Simulation::new(SimulationConfig::new())
        .with_seat("low", ScriptedStrategy::constant(0))
        .with_seat("high", ScriptedStrategy::constant(100));

    let report = sim.run(&mut GameRng::new(0)).unwrap();

    assert!(report.finished);
    assert_eq!(report.winner, Some(name("high")));
    assert_eq!(report.rounds_played, 10);
    assert_eq!(report.elimination_order, vec![name("low")]);
    assert_eq!(report.final_scores, vec![(name("low"), -10), (name("high"), 0)]);
}

/// Test that the round cap abandons a stalemate.
#[test]
fn test_round_cap() {
    // Everyone on 0 with four players: all tie at distance 0 forever
    let sim = (0..4).fold(
        Simulation::new(SimulationConfig::new().with_max_rounds(25)),
        |sim, i| sim.with_seat(format!("p{i}"), ScriptedStrategy::constant(0)),
    );

    let report = sim.run(&mut GameRng::new(0)).unwrap();

    assert!(!report.finished);
    assert_eq!(report.rounds_played, 25);
    assert_eq!(report.winner, None);
    assert!(report.final_scores.iter().all(|(_, score)| *score == 0));
}

/// Test that a script playing two jokers is rejected by the controller.
#[test]
fn test_second_joker_aborts_run() {
    let sim = Simulation::new(SimulationConfig::new())
        .with_seat("cheat", ScriptedStrategy::new(vec![Submission::Joker]))
        .with_seat("a", ScriptedStrategy::constant(10))
        .with_seat("b", ScriptedStrategy::constant(90));

    let err = sim.run(&mut GameRng::new(0)).unwrap_err();
    assert_eq!(err, GameError::JokerAlreadyUsed(name("cheat")));
}

/// Test that too few seats fail at start.
#[test]
fn test_too_few_seats() {
    let sim = random_table(1);
    assert!(matches!(
        sim.run(&mut GameRng::new(0)),
        Err(GameError::NotEnoughPlayers { .. })
    ));
}

/// Test aggregate statistics over many games.
#[test]
fn test_run_many() {
    init_logging();
    let sim = Simulation::new(SimulationConfig::new().with_rules(RuleConfig::new().with_elimination_floor(-5)))
        .with_seat("chaser", TargetChaser::default())
        .with_seat("r1", RandomStrategy::default())
        .with_seat("r2", RandomStrategy::default())
        .with_seat("r3", RandomStrategy::new(0.0));

    let summary = sim.run_many(99, 20).unwrap();
    assert_eq!(summary.games, 20);

    let decided: usize = summary.wins.values().sum();
    assert_eq!(decided + summary.no_survivor + summary.unfinished, 20);
    assert!(summary.average_rounds() >= 1.0);

    let again = sim.run_many(99, 20).unwrap();
    assert_eq!(again.wins, summary.wins);
    assert_eq!(again.total_rounds, summary.total_rounds);
}
