// tests/counting.rs
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs;
use wordstats_core::core::counter::count_words;
use wordstats_core::{Settings, StatsError, WordStats};

const PIECES: &[&str] = &[
    "The", "cat", "SAT.", "--", "42", "don't", "(dog)", "naïve", "Ünïcode!", "...", "x1y", "a:b",
];

fn random_text(rng: &mut StdRng) -> String {
    let mut text = String::new();
    for _ in 0..rng.gen_range(0..40) {
        text.push_str(PIECES[rng.gen_range(0..PIECES.len())]);
        text.push_str([" ", "  ", "\t", "\n", "\r\n"][rng.gen_range(0..5)]);
    }
    text
}

#[test]
fn example_sentence() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("in.txt");
    fs::write(&path, "The cat sat. The dog sat!\n").unwrap();

    let stats = WordStats::from_file(&path, Settings::default()).unwrap();
    let table = stats.table();
    assert_eq!(table.len(), 4);
    assert_eq!(table.get("the"), Some(2));
    assert_eq!(table.get("sat"), Some(2));
    assert_eq!(table.get("cat"), Some(1));
    assert_eq!(table.get("dog"), Some(1));

    let top: Vec<_> = stats.top_words(2).into_iter().map(|(w, _)| w).collect();
    assert!(top.contains(&"the") && top.contains(&"sat"), "{top:?}");
}

#[test]
fn total_matches_token_count() {
    let dir = tempfile::tempdir().unwrap();
    let mut rng = StdRng::seed_from_u64(2016);
    for i in 0..50 {
        let text = random_text(&mut rng);
        let path = dir.path().join(format!("sample{i}.txt"));
        fs::write(&path, &text).unwrap();

        let table = count_words(&path).unwrap();
        assert_eq!(table.total(), text.split_whitespace().count() as u64, "{text:?}");
    }
}

#[test]
fn counting_twice_gives_the_same_table() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("in.txt");
    let mut rng = StdRng::seed_from_u64(9);
    fs::write(&path, random_text(&mut rng)).unwrap();

    assert_eq!(count_words(&path).unwrap(), count_words(&path).unwrap());
}

#[test]
fn invalid_utf8_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("latin1.txt");
    fs::write(&path, b"caf\xe9 au lait\n").unwrap();

    let err = count_words(&path).unwrap_err();
    assert!(matches!(err, StatsError::Encoding { line: 1, .. }), "{err:?}");
}

#[test]
fn report_on_empty_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.txt");
    fs::write(&path, "").unwrap();

    let stats = WordStats::from_file(&path, Settings::default()).unwrap();
    assert!(matches!(stats.report(), Err(StatsError::EmptyInput(_))));
}
