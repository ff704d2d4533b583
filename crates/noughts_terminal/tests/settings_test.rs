//! Tests for loading settings files.

use noughts_engine::{Difficulty, Mark};
use noughts_terminal::{ColorMode, FirstPlayer, PlayArgs, Settings};
use std::io::Write;

#[test]
fn test_load_full_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
human_mark = "O"
difficulty = "easy"
first_player = "computer"
color = "never"
setup_prompts = false
seed = 12
"#
    )
    .unwrap();

    let settings = Settings::load(Some(file.path())).unwrap();
    assert_eq!(*settings.human_mark(), Mark::O);
    assert_eq!(*settings.difficulty(), Difficulty::Easy);
    assert_eq!(*settings.first_player(), FirstPlayer::Computer);
    assert_eq!(*settings.color(), ColorMode::Never);
    assert!(!*settings.setup_prompts());
    assert_eq!(*settings.seed(), Some(12));
}

#[test]
fn test_command_line_beats_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "difficulty = \"easy\"\nhuman_mark = \"O\"").unwrap();

    let args = PlayArgs {
        difficulty: Some(Difficulty::Hard),
        ..PlayArgs::default()
    };
    let settings = args.apply(Settings::from_file(file.path()).unwrap());
    assert_eq!(*settings.difficulty(), Difficulty::Hard);
    assert_eq!(*settings.human_mark(), Mark::O);
}

#[test]
fn test_missing_explicit_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Settings::load(Some(dir.path().join("absent.toml").as_path())).unwrap_err();
    assert!(err.message.contains("Failed to read"));
}

#[test]
fn test_invalid_value_is_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "difficulty = \"impossible\"").unwrap();
    let err = Settings::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse"));
    assert!(err.to_string().starts_with("Config error"));
}

#[test]
fn test_file_accepts_cli_spellings() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "human_mark = \"o\"\ndifficulty = \"2\"").unwrap();

    let settings = Settings::from_file(file.path()).unwrap();
    assert_eq!(*settings.human_mark(), Mark::O);
    assert_eq!(*settings.difficulty(), Difficulty::Hard);
}

#[test]
fn test_file_accepts_capitalized_difficulty() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "difficulty = \"Medium\"\nhuman_mark = \"x\"").unwrap();

    let settings = Settings::from_file(file.path()).unwrap();
    assert_eq!(*settings.difficulty(), Difficulty::Medium);
    assert_eq!(*settings.human_mark(), Mark::X);
}
