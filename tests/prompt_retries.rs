// tests/prompt_retries.rs
use std::fs;
use std::io::Cursor;
use wordstats_core::prompt::{ask_existing_path, FILE_PROMPT};
use wordstats_core::StatsError;

#[test]
fn later_attempt_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    let real = dir.path().join("book.txt");
    fs::write(&real, "words").unwrap();

    let answers = format!("nope.txt\n{}\n", real.display());
    let mut out = Vec::new();
    let path = ask_existing_path(&mut Cursor::new(answers), &mut out, FILE_PROMPT, 3).unwrap();

    assert_eq!(path, real);
    let shown = String::from_utf8(out).unwrap();
    assert_eq!(shown.matches(FILE_PROMPT).count(), 2);
    assert_eq!(shown.matches("This file does not exist...").count(), 1);
}

#[test]
fn gives_up_after_retries_plus_one() {
    let answers = "a\nb\nc\nd\nnever-read\n";
    let mut out = Vec::new();
    let err = ask_existing_path(&mut Cursor::new(answers), &mut out, FILE_PROMPT, 3).unwrap_err();

    assert!(matches!(err, StatsError::AttemptsExhausted { attempts: 4 }), "{err:?}");
    let shown = String::from_utf8(out).unwrap();
    assert_eq!(shown.matches(FILE_PROMPT).count(), 4);
    assert_eq!(shown.matches("This file does not exist...").count(), 3);
    assert_eq!(shown.matches("\t\tOne more try").count(), 1);
}

#[test]
fn input_ending_early_is_a_prompt_error() {
    let err = ask_existing_path(&mut Cursor::new("a\n"), &mut Vec::new(), FILE_PROMPT, 3).unwrap_err();
    assert!(matches!(err, StatsError::Prompt(_)), "{err:?}");
}

#[test]
fn file_name_with_surrounding_spaces_is_found() {
    let dir = tempfile::tempdir().unwrap();
    let real = dir.path().join(" draft notes.txt ");
    fs::write(&real, "words").unwrap();

    let answers = format!("{}\n", real.display());
    let path = ask_existing_path(&mut Cursor::new(answers), &mut Vec::new(), FILE_PROMPT, 3).unwrap();
    assert_eq!(path, real);
}
