use nijinarabe_core::{AdvanceError, GamePhase, GameState, SPECTRUM, SPECTRUM_LEN, MAX_LEVEL};

/// Selection-sort the board through the public reorder operation: for each
/// slot, find the color that belongs there and pull it into place.
fn solve_by_reorder(state: &mut GameState) {
    for target in 0..SPECTRUM_LEN {
        let want = SPECTRUM[target];
        let at = state
            .puzzle()
            .slots()
            .iter()
            .position(|slot| *slot == want)
            .unwrap();
        state.reorder(at, target).unwrap();
    }
    assert!(state.puzzle().is_solved());
}

#[test]
fn fresh_game_starts_unsolved_at_level_one() {
    let state = GameState::new(99);
    assert_eq!(state.level(), 1);
    assert_eq!(state.phase(), GamePhase::Playing);
    assert!(!state.puzzle().is_solved());
    assert!(!state.can_advance());
}

#[test]
fn success_advances_with_a_fresh_scramble() {
    let mut state = GameState::new(5);
    solve_by_reorder(&mut state);
    let report = state.check();
    assert!(report.solved);
    assert_eq!(state.phase(), GamePhase::Checked { solved: true });
    assert!(state.can_advance());

    state.next_level(6).unwrap();
    assert_eq!(state.level(), 2);
    assert_eq!(state.phase(), GamePhase::Playing);
    assert!(!state.puzzle().is_solved());
}

#[test]
fn advance_requires_a_checked_success() {
    let mut state = GameState::new(21);
    assert_eq!(state.next_level(22), Err(AdvanceError::NotChecked));

    let report = state.check();
    assert!(!report.solved, "a scramble is never pre-solved");
    assert_eq!(state.next_level(23), Err(AdvanceError::NotSolved));
    assert_eq!(state.level(), 1);
}

#[test]
fn final_level_success_cannot_advance() {
    let mut state = GameState::new(1);
    for nonce in 2..=MAX_LEVEL {
        solve_by_reorder(&mut state);
        state.check();
        state.next_level(nonce).unwrap();
    }
    assert_eq!(state.level(), MAX_LEVEL);
    assert!(!state.completed());

    solve_by_reorder(&mut state);
    state.check();
    assert!(state.completed());
    assert!(!state.can_advance());
    assert_eq!(state.next_level(77), Err(AdvanceError::AtMaxLevel));
    assert_eq!(state.level(), MAX_LEVEL);
}

#[test]
fn play_again_reshuffles_and_clears_the_result() {
    let mut state = GameState::new(31);
    state.check();
    assert!(matches!(state.phase(), GamePhase::Checked { .. }));

    state.play_again(32);
    assert_eq!(state.level(), 1);
    assert_eq!(state.phase(), GamePhase::Playing);
    assert!(!state.puzzle().is_solved());
}

#[test]
fn play_again_after_final_success_stays_on_the_final_level() {
    let mut state = GameState::new(8);
    for nonce in 9..=(8 + MAX_LEVEL - 1) {
        solve_by_reorder(&mut state);
        state.check();
        state.next_level(nonce).unwrap();
    }
    solve_by_reorder(&mut state);
    state.check();
    assert!(state.completed());

    state.play_again(51);
    assert_eq!(state.level(), MAX_LEVEL);
    assert_eq!(state.phase(), GamePhase::Playing);
    assert!(!state.puzzle().is_solved());
}
