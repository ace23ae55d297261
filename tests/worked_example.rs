use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use wordle_inference::core::{Pattern, PreconditionError, Status, Word, WordSet};
use wordle_inference::feedback::{compute_char_status, compute_status, compute_statuses};
use wordle_inference::inference::{
    find_guesses_multiple, find_potential_answers, find_potential_guesses_single,
    is_potential_multiple,
};
use wordle_inference::scoring::{find_answers_and_scores, information_score};

const EXAMPLE_WORDS: [&str; 7] = ["later", "liter", "tower", "lower", "power", "round", "tiger"];

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn word(text: &str) -> Word {
    Word::new(text).unwrap()
}

fn status(text: &str) -> Pattern {
    Pattern::parse(text).unwrap()
}

fn texts(words: &[Word]) -> Vec<&str> {
    words.iter().map(Word::text).collect()
}

fn example_history() -> ([Word; 4], [Pattern; 4]) {
    (
        ["tower", "lower", "power", "round"].map(word),
        ["?NNYY", "YNNYY", "NNNYY", "?NNNN"].map(status),
    )
}

/// Random words over a small alphabet so duplicate letters are common
fn random_words(rng: &mut StdRng, count: usize, len: usize) -> Vec<Word> {
    const ALPHABET: &[u8] = b"abcde";
    (0..count)
        .map(|_| {
            let text: String = (0..len)
                .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
                .collect();
            word(&text)
        })
        .collect()
}

#[test]
fn teach_adieu() {
    init_tracing();
    assert_eq!(
        compute_status(&word("teach"), &word("adieu")).unwrap().statuses(),
        &[
            Status::WrongPosition,
            Status::Incorrect,
            Status::Incorrect,
            Status::WrongPosition,
            Status::Incorrect,
        ]
    );
}

#[test]
fn hello_duplicate_letters() {
    let hoops = compute_status(&word("hello"), &word("hoops")).unwrap();
    assert_eq!(hoops.statuses()[1], Status::WrongPosition);
    assert_eq!(hoops.statuses()[2], Status::WrongPosition);

    let keeps = compute_status(&word("hello"), &word("keeps")).unwrap();
    assert_eq!(keeps.statuses()[2], Status::Incorrect);
}

#[test]
fn potential_answers_and_scores() {
    init_tracing();
    let word_set = WordSet::from_strs(EXAMPLE_WORDS).unwrap();
    let (guesses, statuses) = example_history();

    let answers = find_potential_answers(&word_set, &guesses, &statuses).unwrap();
    assert_eq!(texts(&answers), ["later", "liter"]);

    let scores = find_answers_and_scores(&word_set, &guesses, &statuses).unwrap();
    let entries: Vec<(&str, f64)> = scores.iter().map(|(w, &s)| (w.text(), s)).collect();
    assert_eq!(entries, [("later", 4.5), ("liter", 4.5)]);
}

#[test]
fn reverse_engineered_guesses() {
    init_tracing();
    let word_set = WordSet::from_strs(EXAMPLE_WORDS).unwrap();
    let statuses = [status("?NNYY"), status("YNNYY")];

    let histories = find_guesses_multiple(&word_set, &word("later"), &statuses).unwrap();
    let histories: Vec<Vec<&str>> = histories.iter().map(|h| texts(h)).collect();
    assert_eq!(histories, [["tiger", "lower"], ["tower", "lower"]]);
}

#[test]
fn violations_are_distinguishable() {
    let word_set = WordSet::from_strs(EXAMPLE_WORDS).unwrap();

    assert_eq!(
        find_potential_guesses_single(&word_set, &word("adieu"), &status("NNNNN")),
        Err(PreconditionError::NotInWordSet("adieu".to_string()))
    );
    assert_eq!(
        find_answers_and_scores(&word_set, &[word("tower")], &[status("YYYYN")]),
        Err(PreconditionError::NoPotentialAnswers)
    );
    assert_eq!(
        Pattern::parse("YYGYY"),
        Err(PreconditionError::InvalidStatus("YYGYY".to_string()))
    );
}

#[test]
fn self_comparison_is_exact_for_random_words() {
    let mut rng = StdRng::seed_from_u64(7);
    for len in 1..=8 {
        for w in random_words(&mut rng, 20, len) {
            for i in 0..len {
                assert_eq!(compute_char_status(&w, &w, i).unwrap(), Status::Correct);
            }
        }
    }
}

#[test]
fn information_score_bounds_for_random_words() {
    let mut rng = StdRng::seed_from_u64(11);
    let words = random_words(&mut rng, 60, 5);

    for answer in &words {
        for guess in &words {
            let score = information_score(answer, guess).unwrap();
            assert!((0.0..=5.0).contains(&score));
            assert_eq!((score - 5.0).abs() < 1e-9, answer == guess);
        }
    }
}

#[test]
fn true_answer_is_always_a_potential_answer() {
    let mut rng = StdRng::seed_from_u64(23);
    let words = random_words(&mut rng, 80, 5);
    let word_set = WordSet::new(words.clone()).unwrap();

    for answer in words.iter().take(10) {
        let guesses: Vec<Word> = (0..3)
            .map(|_| words[rng.random_range(0..words.len())].clone())
            .collect();
        let statuses = compute_statuses(answer, &guesses).unwrap();

        assert!(is_potential_multiple(answer, &guesses, &statuses).unwrap());

        let answers = find_potential_answers(&word_set, &guesses, &statuses).unwrap();
        assert!(answers.contains(answer));
        assert!(answers.windows(2).all(|pair| pair[0] < pair[1]));

        for (guess, status) in guesses.iter().zip(&statuses) {
            let candidates = find_potential_guesses_single(&word_set, answer, status).unwrap();
            assert!(candidates.contains(guess));
            assert!(candidates.windows(2).all(|pair| pair[0] < pair[1]));
        }
    }
}
