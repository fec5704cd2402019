//! Behavior of the grid engine across both variants.

use std::time::{Duration, Instant};
use toetictac_rules::{
    Cooldowns, GameState, GridConfig, GridEngine, GridEvent, MoveError, MoveOutcome, NeverBusy,
    Player, Variant,
};

const A: Option<Player> = Some(Player::A);
const B: Option<Player> = Some(Player::B);

fn recording(variant: Variant) -> GridEngine<NeverBusy, Vec<GridEvent>> {
    GridEngine::new(&GridConfig::new(variant), NeverBusy, Vec::new())
}

fn play(engine: &mut GridEngine<NeverBusy, Vec<GridEvent>>, moves: &[usize]) {
    for &index in moves {
        let outcome = engine.report_move(index);
        assert!(outcome.is_applied(), "move {index} rejected: {outcome}");
    }
}

// ─────────────────────────────────────────────────────────────
//  Classic
// ─────────────────────────────────────────────────────────────

#[test]
fn test_classic_row_victory() {
    let mut engine = recording(Variant::Classic);
    play(&mut engine, &[0, 3, 1, 4, 2]);

    assert_eq!(engine.state(), GameState::Victory);
    assert_eq!(engine.victor(), Some(Player::A));
    let cells = engine.board().cells();
    assert!(cells[..3].iter().all(|c| !c.is_disabled()));
    assert!(cells[3..].iter().all(|c| c.is_disabled()));
}

#[test]
fn test_classic_victory_emits_disabled_cells() {
    let mut engine = recording(Variant::Classic);
    play(&mut engine, &[0, 3, 1, 4]);
    engine.observer_mut().clear();

    engine.report_move(2);
    let disabled: Vec<usize> = engine
        .observer()
        .iter()
        .filter_map(|e| match e {
            GridEvent::CellChanged {
                index,
                disabled: true,
                ..
            } => Some(*index),
            _ => None,
        })
        .collect();
    assert_eq!(disabled, vec![3, 4, 5, 6, 7, 8]);
}

#[test]
fn test_classic_draw() {
    let mut engine = recording(Variant::Classic);
    play(&mut engine, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    assert_eq!(engine.state(), GameState::Draw);
    assert_eq!(engine.victor(), None);
    assert_eq!(engine.board().owners(), [A, B, A, A, B, B, B, A, A]);
    assert!(engine.board().cells().iter().all(|c| !c.is_disabled()));
}

#[test]
fn test_classic_occupied_cell() {
    let mut engine = recording(Variant::Classic);
    play(&mut engine, &[4]);
    assert_eq!(
        engine.report_move(4),
        MoveOutcome::Rejected(MoveError::CellOccupied(4))
    );
    assert_eq!(engine.turn(), Player::B);
}

#[test]
fn test_classic_busy_target_only() {
    let busy = |index: usize| index == 0;
    let mut engine = GridEngine::new(&GridConfig::new(Variant::Classic), busy, ());
    assert_eq!(
        engine.report_move(0),
        MoveOutcome::Rejected(MoveError::CellBusy(0))
    );
    assert!(engine.report_move(1).is_applied());
}

// ─────────────────────────────────────────────────────────────
//  Mutation
// ─────────────────────────────────────────────────────────────

#[test]
fn test_mutation_center_on_empty_board() {
    let mut engine = recording(Variant::Mutation);
    play(&mut engine, &[4]);

    assert_eq!(engine.board().owner(4), Some(Player::A));
    assert_eq!(
        engine.board().cells().iter().filter(|c| !c.is_empty()).count(),
        1
    );
    assert_eq!(engine.last_move(), Some(4));
    assert_eq!(engine.turn(), Player::B);
}

#[test]
fn test_mutation_anti_repetition() {
    let mut engine = recording(Variant::Mutation);
    play(&mut engine, &[4]);
    let before = engine.board().clone();
    engine.observer_mut().clear();

    assert_eq!(
        engine.report_move(4),
        MoveOutcome::Rejected(MoveError::RepeatedMove(4))
    );
    assert_eq!(engine.board(), &before);
    assert_eq!(engine.turn(), Player::B);
    assert!(engine.observer().is_empty());
}

#[test]
fn test_mutation_flips_orthogonal_neighbor_only() {
    let mut engine = recording(Variant::Mutation);
    // A takes 0, B takes 1 and flips 0 to B.
    play(&mut engine, &[0, 1]);
    assert_eq!(engine.board().owner(0), Some(Player::B));
    assert_eq!(engine.board().owner(1), Some(Player::B));

    play(&mut engine, &[4]);
    assert_eq!(engine.board().owner(1), Some(Player::A));
    assert_eq!(engine.board().owner(4), Some(Player::A));
    assert_eq!(engine.board().owner(0), Some(Player::B));
    for diagonal in [2, 6, 8] {
        assert_eq!(engine.board().owner(diagonal), None);
    }
}

#[test]
fn test_mutation_cannot_play_own_cell() {
    let mut engine = recording(Variant::Mutation);
    play(&mut engine, &[0, 8]);
    assert_eq!(
        engine.report_move(0),
        MoveOutcome::Rejected(MoveError::OwnCell {
            index: 0,
            player: Player::A
        })
    );
}

#[test]
fn test_mutation_can_retake_opponent_cell() {
    let mut engine = recording(Variant::Mutation);
    play(&mut engine, &[0, 8, 4]);
    assert_eq!(engine.board().owner(8), Some(Player::B));
    play(&mut engine, &[0]);
    assert_eq!(engine.board().owner(0), Some(Player::B));
}

#[test]
fn test_mutation_flip_hands_opponent_the_win() {
    let mut engine = recording(Variant::Mutation);
    // B's move on 3 flips 0 back to A, completing A's top row.
    play(&mut engine, &[0, 1, 2, 3]);

    assert_eq!(engine.state(), GameState::Victory);
    assert_eq!(engine.victor(), Some(Player::A));
    assert_eq!(engine.board().owners()[..4], [A, A, A, B]);
}

#[test]
fn test_mutation_double_completion_is_draw() {
    let mut engine = recording(Variant::Mutation);
    play(&mut engine, &[0, 1, 2, 4, 6, 7, 3]);

    assert_eq!(engine.state(), GameState::Draw);
    assert_eq!(engine.victor(), None);
    assert_eq!(
        engine.board().owners(),
        [A, B, A, A, B, None, A, B, None]
    );
    let disabled: Vec<usize> = (0..9)
        .filter(|&i| engine.board().cells()[i].is_disabled())
        .collect();
    assert_eq!(disabled, vec![2, 5, 8]);
}

#[test]
fn test_mutation_full_board_draw() {
    let mut engine = recording(Variant::Mutation);
    play(&mut engine, &[0, 1, 3, 4, 8, 7, 5, 6, 2]);

    assert_eq!(engine.state(), GameState::Draw);
    assert!(engine.board().is_full());
    assert!(engine.board().cells().iter().all(|c| !c.is_disabled()));
}

#[test]
fn test_mutation_busy_cell_locks_every_index() {
    let start = Instant::now();
    let mut cooldowns = Cooldowns::starting_at(start, Duration::from_millis(250));
    cooldowns.start(6);
    let mut engine = GridEngine::new(&GridConfig::new(Variant::Mutation), cooldowns, Vec::new());
    engine.observer_mut().clear();

    for index in 0..9 {
        assert_eq!(
            engine.report_move(index),
            MoveOutcome::Rejected(MoveError::BoardBusy)
        );
    }
    assert!(engine.valid_moves().is_empty());
    assert!(engine.observer().is_empty());

    engine.busy_mut().advance_by(Duration::from_millis(250));
    assert!(engine.report_move(6).is_applied());
}

#[test]
fn test_mutation_highlights_after_move() {
    let mut engine = recording(Variant::Mutation);
    play(&mut engine, &[0, 8]);
    engine.observer_mut().clear();
    play(&mut engine, &[4]);

    // B to move: B owns 8, 4 was just played.
    let expected = [false, false, false, false, true, false, false, false, true];
    assert_eq!(engine.highlights(), Some(expected));

    let emitted: Vec<(usize, bool)> = engine
        .observer()
        .iter()
        .filter_map(|e| match e {
            GridEvent::HighlightChanged { index, emphasized } => Some((*index, *emphasized)),
            _ => None,
        })
        .collect();
    assert_eq!(emitted.len(), 9);
    for (index, emphasized) in emitted {
        assert_eq!(emphasized, expected[index]);
    }
}

#[test]
fn test_mutation_highlights_clear_when_game_ends() {
    let mut engine = recording(Variant::Mutation);
    play(&mut engine, &[0, 1, 2, 3]);
    assert_eq!(engine.highlights(), Some([false; 9]));
}

// ─────────────────────────────────────────────────────────────
//  Shared guarantees
// ─────────────────────────────────────────────────────────────

#[test]
fn test_rejection_is_idempotent() {
    for variant in [Variant::Classic, Variant::Mutation] {
        let mut engine = recording(variant);
        play(&mut engine, &[4]);
        let board = engine.board().clone();
        engine.observer_mut().clear();

        let first = engine.report_move(4);
        let second = engine.report_move(4);
        assert!(!first.is_applied());
        assert_eq!(first, second);
        assert_eq!(engine.board(), &board);
        assert_eq!(engine.turn(), Player::B);
        assert!(engine.observer().is_empty());
    }
}

#[test]
fn test_terminal_state_is_frozen() {
    for (variant, moves) in [
        (Variant::Classic, vec![0, 3, 1, 4, 2]),
        (Variant::Mutation, vec![0, 1, 2, 3]),
    ] {
        let mut engine = recording(variant);
        play(&mut engine, &moves);
        assert!(engine.state().is_terminal());

        let board = engine.board().clone();
        let turn = engine.turn();
        let victor = engine.victor();
        engine.observer_mut().clear();

        for index in 0..12 {
            assert!(!engine.report_move(index).is_applied());
        }
        assert_eq!(engine.board(), &board);
        assert_eq!(engine.turn(), turn);
        assert_eq!(engine.victor(), victor);
        assert!(engine.observer().is_empty());
    }
}

#[test]
fn test_inactive_engine_ignores_moves() {
    let config = GridConfig::new(Variant::Mutation).with_cell_count(8);
    let mut engine = GridEngine::new(&config, NeverBusy, Vec::new());
    assert_eq!(engine.state(), GameState::Inactive);
    assert!(engine.observer().is_empty());
    for index in 0..9 {
        assert_eq!(
            engine.report_move(index),
            MoveOutcome::Rejected(MoveError::NotActive(GameState::Inactive))
        );
    }
}

#[test]
fn test_state_change_event_carries_victor() {
    let mut engine = recording(Variant::Classic);
    play(&mut engine, &[3, 0, 4, 1, 8, 2]);
    assert_eq!(engine.victor(), Some(Player::B));
    assert!(engine.observer().contains(&GridEvent::GameStateChanged {
        state: GameState::Victory,
        victor: Some(Player::B),
    }));
}
