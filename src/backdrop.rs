use nijinarabe_core::{rand_range, rand_unit, Color, SPECTRUM, SPECTRUM_LEN};

pub(crate) const BACKDROP_SEED: u32 = 0xBD_50F7;
pub(crate) const BACKDROP_CIRCLE_COUNT: usize = 16;
pub(crate) const CONFETTI_PIECE_COUNT: usize = 80;

const CIRCLE_SIZE_MIN: f32 = 60.0;
const CIRCLE_SIZE_MAX: f32 = 220.0;
const CIRCLE_OPACITY_MIN: f32 = 0.25;
const CIRCLE_OPACITY_MAX: f32 = 0.6;
const CIRCLE_DRIFT_MIN_S: f32 = 14.0;
const CIRCLE_DRIFT_MAX_S: f32 = 32.0;

const CONFETTI_SIZE_MIN: f32 = 5.0;
const CONFETTI_SIZE_MAX: f32 = 20.0;
const CONFETTI_FALL_MIN_S: f32 = 4.0;
const CONFETTI_FALL_MAX_S: f32 = 7.0;
const CONFETTI_DELAY_MAX_S: f32 = 2.0;

/// Blurred drifting circle behind the page content. Purely decorative:
/// derived from a fixed seed, reads nothing from the game.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct BackdropCircle {
    pub(crate) color: Color,
    pub(crate) left_pct: f32,
    pub(crate) top_pct: f32,
    pub(crate) size_px: f32,
    pub(crate) opacity: f32,
    pub(crate) drift_s: f32,
    pub(crate) delay_s: f32,
}

pub(crate) fn backdrop_circles(seed: u32) -> Vec<BackdropCircle> {
    let mut circles = Vec::with_capacity(BACKDROP_CIRCLE_COUNT);
    for id in 0..BACKDROP_CIRCLE_COUNT {
        let salt = (id as u32) << 3;
        let color = SPECTRUM[pick_index(seed, salt, SPECTRUM_LEN)];
        circles.push(BackdropCircle {
            color,
            left_pct: rand_range(seed, salt + 1, 0.0, 100.0),
            top_pct: rand_range(seed, salt + 2, 0.0, 100.0),
            size_px: rand_range(seed, salt + 3, CIRCLE_SIZE_MIN, CIRCLE_SIZE_MAX),
            opacity: rand_range(seed, salt + 4, CIRCLE_OPACITY_MIN, CIRCLE_OPACITY_MAX),
            drift_s: rand_range(seed, salt + 5, CIRCLE_DRIFT_MIN_S, CIRCLE_DRIFT_MAX_S),
            delay_s: rand_range(seed, salt + 6, 0.0, CIRCLE_DRIFT_MAX_S * 0.5),
        });
    }
    circles
}

/// Falling confetti piece for the success burst.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct ConfettiPiece {
    pub(crate) color: Color,
    pub(crate) left_pct: f32,
    pub(crate) size_px: f32,
    pub(crate) round: bool,
    pub(crate) fall_s: f32,
    pub(crate) delay_s: f32,
}

pub(crate) fn confetti_burst(seed: u32) -> Vec<ConfettiPiece> {
    let mut pieces = Vec::with_capacity(CONFETTI_PIECE_COUNT);
    for id in 0..CONFETTI_PIECE_COUNT {
        let salt = 0xC0FE + ((id as u32) << 3);
        let color = SPECTRUM[pick_index(seed, salt, SPECTRUM_LEN)];
        pieces.push(ConfettiPiece {
            color,
            left_pct: rand_range(seed, salt + 1, 0.0, 100.0),
            size_px: rand_range(seed, salt + 2, CONFETTI_SIZE_MIN, CONFETTI_SIZE_MAX),
            round: rand_unit(seed, salt + 3) > 0.5,
            fall_s: rand_range(seed, salt + 4, CONFETTI_FALL_MIN_S, CONFETTI_FALL_MAX_S),
            delay_s: rand_range(seed, salt + 5, 0.0, CONFETTI_DELAY_MAX_S),
        });
    }
    pieces
}

fn pick_index(seed: u32, salt: u32, len: usize) -> usize {
    let index = (rand_unit(seed, salt) * len as f32) as usize;
    index.min(len.saturating_sub(1))
}
