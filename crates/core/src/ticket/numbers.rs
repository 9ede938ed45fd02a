//! Number set validation and the canonical string form.
//!
//! The canonical form is the storage and comparison key for a ticket: the
//! numbers sorted ascending, each zero-padded to two digits, joined by `/`.

use std::collections::HashSet;

use rand::Rng;

use super::LotteryError;

/// Numbers on one ticket.
pub const NUMBER_COUNT: usize = 6;

/// Smallest number on a ticket.
pub const MIN_NUMBER: i32 = 1;

/// Largest number on a ticket.
pub const MAX_NUMBER: i32 = 45;

/// Smallest draw upper bound that still holds a full ticket.
pub const MIN_DRAW_MAX: i32 = MIN_NUMBER + NUMBER_COUNT as i32 - 1;

const SEPARATOR: char = '/';

/// Check that `numbers` holds exactly [`NUMBER_COUNT`] distinct values.
///
/// Values are not range-checked.
pub fn validate(numbers: &[i32]) -> Result<(), LotteryError> {
    let distinct = numbers.iter().collect::<HashSet<_>>().len();
    if numbers.len() != NUMBER_COUNT || distinct != NUMBER_COUNT {
        return Err(LotteryError::DuplicateOrWrongCount {
            supplied: numbers.len(),
            distinct,
        });
    }
    Ok(())
}

/// Render numbers in canonical form, e.g. `[45, 3, 22, 8, 1, 31]` becomes
/// `01/03/08/22/31/45`.
///
/// Callers must run [`validate`] first.
pub fn canonical_form(numbers: &[i32]) -> String {
    debug_assert!(!numbers.is_empty(), "lottery numbers should not be empty");
    debug_assert_eq!(
        numbers.len(),
        NUMBER_COUNT,
        "lottery numbers should be fixed {}",
        NUMBER_COUNT
    );

    let mut sorted = numbers.to_vec();
    sorted.sort_unstable();
    sorted
        .iter()
        .map(|n| format!("{:02}", n))
        .collect::<Vec<_>>()
        .join(&SEPARATOR.to_string())
}

/// Parse a canonical string back into its numbers.
pub fn parse_canonical(canonical: &str) -> Result<Vec<i32>, LotteryError> {
    let numbers = canonical
        .split(SEPARATOR)
        .map(|part| part.parse::<i32>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| LotteryError::MalformedNumbers(format!("{}: {}", canonical, e)))?;

    if numbers.len() != NUMBER_COUNT {
        return Err(LotteryError::MalformedNumbers(format!(
            "{}: expected {} numbers, found {}",
            canonical,
            NUMBER_COUNT,
            numbers.len()
        )));
    }

    Ok(numbers)
}

/// Draw [`NUMBER_COUNT`] distinct numbers uniformly from `MIN_NUMBER..=max`.
///
/// Duplicate draws are rejected and redrawn. Numbers are returned in the
/// order they were first drawn. `max` must lie in
/// `MIN_DRAW_MAX..=MAX_NUMBER`, otherwise no draw is made.
pub fn draw_distinct<R: Rng + ?Sized>(rng: &mut R, max: i32) -> Result<Vec<i32>, LotteryError> {
    if !(MIN_DRAW_MAX..=MAX_NUMBER).contains(&max) {
        return Err(LotteryError::InvalidDrawRange { max });
    }

    let mut drawn = Vec::with_capacity(NUMBER_COUNT);
    while drawn.len() < NUMBER_COUNT {
        let number = rng.gen_range(MIN_NUMBER..=max);
        if !drawn.contains(&number) {
            drawn.push(number);
        }
    }
    Ok(drawn)
}
