//! Tests for computer-versus-computer duels.

use noughts_engine::Difficulty;
use noughts_terminal::run_duel;

#[test]
fn test_hard_mirror_is_all_draws() {
    let report = run_duel(Difficulty::Hard, Difficulty::Hard, 4, Some(1)).unwrap();
    assert_eq!(report.draws, 4);
    assert_eq!(report.x_wins + report.o_wins, 0);
}

#[test]
fn test_hard_never_loses_to_easy() {
    let report = run_duel(Difficulty::Hard, Difficulty::Easy, 30, Some(21)).unwrap();
    assert_eq!(report.o_wins, 0);
    assert_eq!(report.x_wins + report.draws, 30);
}

#[test]
fn test_same_seed_same_report() {
    let first = run_duel(Difficulty::Medium, Difficulty::Easy, 20, Some(5)).unwrap();
    let second = run_duel(Difficulty::Medium, Difficulty::Easy, 20, Some(5)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_report_json() {
    let report = run_duel(Difficulty::Hard, Difficulty::Hard, 2, Some(0)).unwrap();
    let json = serde_json::to_value(report).unwrap();
    assert_eq!(json["x"], "hard");
    assert_eq!(json["o"], "hard");
    assert_eq!(json["draws"], 2);
}
