//! Text rendering of the board and game status.

use toetictac_rules::{Board, CELL_COUNT, GameState, Player, SIDE};

/// Renders the board, one row per line.
///
/// Cells use [`Board::symbol`]. Highlighted cells are wrapped in brackets.
pub fn render_board(board: &Board, highlights: Option<&[bool; CELL_COUNT]>) -> String {
    let rows: Vec<String> = (0..SIDE)
        .map(|row| {
            (0..SIDE)
                .map(|col| {
                    let index = row * SIDE + col;
                    let symbol = board.symbol(index).unwrap_or_default();
                    if highlights.is_some_and(|h| h[index]) {
                        format!("[{}]", symbol)
                    } else {
                        format!(" {} ", symbol)
                    }
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();
    rows.join("\n---+---+---\n")
}

/// One-line status for the game.
pub fn status_line(state: GameState, victor: Option<Player>, turn: Option<Player>) -> String {
    match (state, victor, turn) {
        (GameState::Active, _, Some(turn)) => format!("{}, player {} to move", state.label(), turn),
        (GameState::Victory, Some(victor), _) => format!("{}: player {} wins", state.label(), victor),
        _ => state.label().to_string(),
    }
}
