//! Text renderer for the terminal presenter.
//!
//! Pure string building: the interactive loop in `main` decides when to
//! print. Cells are fixed-width so every row lines up regardless of face
//! name length.

use mnemo_core::{CardState, CardView, Mode, Outcome, SessionView};

/// Face-name column width; `char_20` is the widest stock face.
const FACE_WIDTH: usize = 7;

/// Grid columns per mode; rows always come out full.
pub const fn columns_for(mode: Mode) -> usize {
    match mode {
        Mode::Easy | Mode::Medium | Mode::Expert => 5,
        Mode::Hard => 6,
    }
}

/// Render the board as fixed-width rows.
pub fn board_to_string(cards: &[CardView], mode: Mode) -> String {
    let columns = columns_for(mode);
    let mut out = String::new();

    for row in cards.chunks(columns) {
        for card in row {
            out.push_str(&cell(card));
            out.push(' ');
        }
        // Drop the trailing cell separator.
        if out.ends_with(' ') {
            out.pop();
        }
        out.push('\n');
    }

    out
}

/// One fixed-width cell: `[ 3 ·······]` hidden, `[ 3 char_12]` revealed,
/// `( 3 char_12)` matched.
fn cell(card: &CardView) -> String {
    let face = card.token.as_ref().map_or_else(
        || "·".repeat(FACE_WIDTH),
        |token| format!("{:<width$}", token.as_str(), width = FACE_WIDTH),
    );

    match card.state {
        CardState::Matched => format!("({:>2} {face})", card.index),
        CardState::Hidden | CardState::Revealed => format!("[{:>2} {face}]", card.index),
    }
}

/// One-line session status.
pub fn status_line(view: &SessionView) -> String {
    match view.outcome {
        Outcome::InProgress => {
            let lock = if view.locked { "  [locked]" } else { "" };
            format!(
                "mode: {}  time: {}s  pairs: {}/{}{}",
                view.mode, view.time_remaining, view.matched_pairs, view.pair_count, lock
            )
        },
        Outcome::Won => format!(
            "you won! all {} pairs matched with {}s to spare",
            view.pair_count, view.time_remaining
        ),
        Outcome::Lost => format!(
            "time's up: {}/{} pairs matched. type `new {}` to try again",
            view.matched_pairs, view.pair_count, view.mode
        ),
    }
}
