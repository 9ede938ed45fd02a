//! Core ticket data types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::numbers::parse_canonical;
use super::LotteryError;

/// Opaque identifier of a lottery round.
pub type RoundId = i64;

/// A persisted lottery ticket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    /// Store-assigned identifier (UUID v4).
    pub id: String,
    /// Round the ticket belongs to.
    pub round_id: RoundId,
    /// Canonical number string, e.g. `02/07/15/23/31/45`.
    pub numbers: String,
    /// When the store accepted the ticket.
    pub created_at: DateTime<Utc>,
}

impl Ticket {
    /// Decode the canonical number string back into ascending numbers.
    pub fn lottery_numbers(&self) -> Result<Vec<i32>, LotteryError> {
        parse_canonical(&self.numbers)
    }
}

/// Request to persist a new ticket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTicketRequest {
    /// Round the ticket is registered for.
    pub round_id: RoundId,
    /// Canonical number string.
    pub numbers: String,
}

/// Outcome of enrolling a ticket for a round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrollmentResult {
    pub lottery_round_id: RoundId,
    pub lottery_numbers: Vec<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticket_lottery_numbers() {
        let ticket = Ticket {
            id: "t-1".to_string(),
            round_id: 7,
            numbers: "02/07/15/23/31/45".to_string(),
            created_at: Utc::now(),
        };
        assert_eq!(ticket.lottery_numbers().unwrap(), vec![2, 7, 15, 23, 31, 45]);
    }

    #[test]
    fn test_ticket_with_corrupt_numbers() {
        let ticket = Ticket {
            id: "t-2".to_string(),
            round_id: 7,
            numbers: "02/07/xx".to_string(),
            created_at: Utc::now(),
        };
        assert!(matches!(
            ticket.lottery_numbers(),
            Err(LotteryError::MalformedNumbers(_))
        ));
    }

    #[test]
    fn test_enrollment_result_serialization() {
        let result = EnrollmentResult {
            lottery_round_id: 12,
            lottery_numbers: vec![5, 1, 44, 9, 30, 17],
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["lottery_round_id"], 12);
        assert_eq!(json["lottery_numbers"][2], 44);
    }
}
