//! Error type for the number engine.

use thiserror::Error;

use super::{RoundId, StoreError, MAX_NUMBER, MIN_DRAW_MAX, MIN_NUMBER, NUMBER_COUNT};

#[derive(Debug, Error)]
pub enum LotteryError {
    /// Input did not reduce to exactly six distinct numbers.
    #[error(
        "lottery numbers must be {expected} distinct values, got {supplied} numbers with {distinct} distinct",
        expected = NUMBER_COUNT
    )]
    DuplicateOrWrongCount { supplied: usize, distinct: usize },

    /// Every random draw collided with an existing ticket for the round.
    #[error("failed to generate unique lottery numbers for round {round_id} after {attempts} attempts")]
    RandomGenerationExhausted { round_id: RoundId, attempts: u32 },

    /// The draw upper bound cannot produce a full ticket within the ticket range.
    #[error(
        "invalid draw range {min}..={max}: upper bound must be between {low} and {high}",
        min = MIN_NUMBER,
        low = MIN_DRAW_MAX,
        high = MAX_NUMBER
    )]
    InvalidDrawRange { max: i32 },

    /// A canonical number string could not be decoded.
    #[error("malformed lottery numbers: {0}")]
    MalformedNumbers(String),

    #[error(transparent)]
    Storage(#[from] StoreError),
}
