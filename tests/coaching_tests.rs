use wordle_coach::Error;
use wordle_coach::commands::coach;
use wordle_coach::core::{Pattern, Word};
use wordle_coach::solver::{
    Solver, Verdict, filter_candidates, realized_information, score, solve,
};
use wordle_coach::wordlists::default_dictionary;

fn word(w: &str) -> Word {
    Word::new(w).unwrap()
}

fn words(list: &[&str]) -> Vec<Word> {
    list.iter().map(|w| word(w)).collect()
}

#[test]
fn test_turn_by_turn_scoring() {
    let dictionary = words(&["lager", "later", "layer", "liner", "loser", "lower", "eaten"]);
    let secret = word("lower");

    let solution = solve(&dictionary, &[]).unwrap();
    let guess = word("eaten");
    let pattern = Pattern::calculate(&guess, &secret);
    let remaining = filter_candidates(&solution.candidates, &guess, &pattern).unwrap();
    let realized = realized_information(solution.candidates.len(), remaining.len()).unwrap();

    let result = score(&guess, &solution.table, &solution.best_guess, realized).unwrap();

    assert!(result.in_table);
    assert_eq!(result.best_bits, solution.best_bits());
    assert!(result.percentile > 0.0 && result.percentile <= 100.0);
}

#[test]
fn test_off_table_percentile_counts_the_inserted_value() {
    let dictionary = words(&["slate", "crony"]);
    let solution = solve(&dictionary, &[]).unwrap();

    // Both candidates score 1 bit; the off-table guess gained nothing
    let result = score(&word("zzzzz"), &solution.table, &solution.best_guess, 0.0).unwrap();

    assert!(!result.in_table);
    // Sorted: 1, 1, 0 -> rank 2 of 3
    assert!((result.percentile - 100.0 / 3.0).abs() < 1e-9);
}

#[test]
fn test_full_coached_game() {
    let dictionary = default_dictionary();
    let solver = Solver::new(&dictionary);

    let result = coach(&solver, word("lower"), &words(&["crane", "lever", "lower"])).unwrap();

    assert!(result.solved);
    assert_eq!(result.turns.last().unwrap().verdict, Verdict::Solved);
    assert_eq!(result.turns[0].candidates_before, dictionary.len());
    for pair in result.turns.windows(2) {
        assert_eq!(pair[0].candidates_after, pair[1].candidates_before);
    }
    assert_eq!(result.solver_game.secret, word("lower"));
}

#[test]
fn test_guess_pool_game() {
    let dictionary = words(&["bight", "fight", "light", "might", "night", "sight"]);
    let pool = words(&["flamb", "snobs"]);
    let solver = Solver::new(&dictionary).with_guess_pool(&pool);

    let result = coach(&solver, word("night"), &words(&["flamb", "night"])).unwrap();

    assert!(result.solved);
    // The pool word was never a candidate: it is scored by the bits it gained
    let first = result.turns[0];
    assert!(!first.score.in_table);
    assert_eq!((first.candidates_before, first.candidates_after), (6, 2));
    assert!((first.score.reported_bits - 3_f64.log2()).abs() < 1e-12);
    assert!(first.verdict.is_eliminated());
    assert_ne!(first.verdict, Verdict::Optimal);
}

#[test]
fn test_secret_must_be_in_dictionary() {
    let dictionary = words(&["slate", "crony"]);
    let solver = Solver::new(&dictionary);

    assert!(matches!(
        coach(&solver, word("crane"), &words(&["slate"])),
        Err(Error::UnknownWord(_))
    ));
}
