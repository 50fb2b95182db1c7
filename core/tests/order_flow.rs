use nijinarabe_core::{check_order, shuffle_seed, Color, Puzzle, SlotError, SPECTRUM, SPECTRUM_LEN, SPECTRUM_SEED};

fn assert_permutation(puzzle: &Puzzle) {
    for color in SPECTRUM {
        let count = puzzle.slots().iter().filter(|slot| **slot == color).count();
        assert_eq!(count, 1, "{color} appears {count} times");
    }
}

#[test]
fn scramble_is_a_permutation_and_never_solved() {
    for nonce in 0..512u32 {
        let seed = shuffle_seed(SPECTRUM_SEED, nonce, 1);
        let puzzle = Puzzle::scrambled(seed);
        assert_permutation(&puzzle);
        assert!(!puzzle.is_solved(), "nonce {nonce} produced a solved board");
    }
}

#[test]
fn scramble_is_deterministic_per_seed() {
    let seed = shuffle_seed(SPECTRUM_SEED, 42, 3);
    assert_eq!(Puzzle::scrambled(seed), Puzzle::scrambled(seed));
}

#[test]
fn reorder_moves_forward_and_back() {
    // [R,O,Y,...], move slot 0 to slot 2: [O,Y,R,...]
    let mut puzzle = Puzzle::solved();
    puzzle.reorder(0, 2).unwrap();
    assert_eq!(
        &puzzle.slots()[..3],
        &[Color::Orange, Color::Yellow, Color::Red]
    );
    // inverse move restores the original order
    puzzle.reorder(2, 0).unwrap();
    assert!(puzzle.is_solved());
}

#[test]
fn reorder_preserves_the_color_multiset() {
    let seed = shuffle_seed(SPECTRUM_SEED, 7, 2);
    let mut puzzle = Puzzle::scrambled(seed);
    for (src, dst) in [(0, 6), (6, 0), (3, 3), (5, 1), (2, 4)] {
        puzzle.reorder(src, dst).unwrap();
        assert_permutation(&puzzle);
    }
}

#[test]
fn reorder_same_slot_is_identity() {
    let seed = shuffle_seed(SPECTRUM_SEED, 11, 1);
    let mut puzzle = Puzzle::scrambled(seed);
    let before = puzzle;
    puzzle.reorder(4, 4).unwrap();
    assert_eq!(puzzle, before);
}

#[test]
fn reorder_rejects_out_of_range_without_touching_the_board() {
    let seed = shuffle_seed(SPECTRUM_SEED, 13, 1);
    let mut puzzle = Puzzle::scrambled(seed);
    let before = puzzle;
    assert_eq!(
        puzzle.reorder(SPECTRUM_LEN, 0),
        Err(SlotError::OutOfRange { index: SPECTRUM_LEN })
    );
    assert_eq!(
        puzzle.reorder(0, 12),
        Err(SlotError::OutOfRange { index: 12 })
    );
    assert_eq!(puzzle, before);
}

#[test]
fn validator_accepts_spectral_order() {
    let report = check_order(&Puzzle::solved());
    assert!(report.solved);
    assert_eq!(report.placements, [true; SPECTRUM_LEN]);
}

#[test]
fn validator_flags_swapped_head() {
    // [O,R,Y,G,B,I,V]
    let mut puzzle = Puzzle::solved();
    puzzle.reorder(0, 1).unwrap();
    let report = check_order(&puzzle);
    assert!(!report.solved);
    assert_eq!(
        report.placements,
        [false, false, true, true, true, true, true]
    );
}
