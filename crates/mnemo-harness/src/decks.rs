//! Fixed deck builders for scenario tests.

use mnemo_core::Token;

/// The ten-card deck used across scenario tests:
/// `[A, B, A, C, D, B, C, D, E, E]`.
///
/// Pairs sit at (0,2), (1,5), (3,6), (4,7), (8,9), giving quick access to a
/// match, a mismatch, and a final-pair win.
pub fn scenario_deck() -> Vec<Token> {
    ["A", "B", "A", "C", "D", "B", "C", "D", "E", "E"].into_iter().map(Token::from).collect()
}

/// `pairs` faces laid out adjacently: `f1, f1, f2, f2, …`.
pub fn sequential_deck(pairs: usize) -> Vec<Token> {
    (1..=pairs).flat_map(|i| {
        let token = Token::new(format!("f{i}"));
        [token.clone(), token]
    }).collect()
}

/// `pairs` faces laid out in two runs: `f1 … fn, f1 … fn`; card `i` pairs
/// with card `i + pairs`.
pub fn interleaved_deck(pairs: usize) -> Vec<Token> {
    let run: Vec<Token> = (1..=pairs).map(|i| Token::new(format!("f{i}"))).collect();
    let mut deck = run.clone();
    deck.extend(run);
    deck
}
