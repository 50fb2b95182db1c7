pub mod codec;
pub mod color;
pub mod game;
pub mod puzzle;

pub use codec::{decode, encode};
pub use color::{
    color_by_label, color_by_slug, color_entry, Color, ColorEntry, COLOR_CATALOG, SPECTRUM,
    SPECTRUM_LEN,
};
pub use game::{AdvanceError, GamePhase, GameState, FIRST_LEVEL, MAX_LEVEL};
pub use puzzle::{
    check_order, rand_range, rand_unit, shuffle_seed, splitmix32, OrderReport, Puzzle, SlotError,
    SPECTRUM_SEED,
};
