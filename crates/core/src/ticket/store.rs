//! Ticket storage trait and types.

use std::fmt;

use crate::ticket::{CreateTicketRequest, RoundId, Ticket};

/// Error type for ticket storage operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Database error.
    Database(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Database(msg) => write!(f, "Database error: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

/// Filter for querying tickets.
#[derive(Debug, Clone, Default)]
pub struct TicketFilter {
    /// Filter by round.
    pub round_id: Option<RoundId>,
    /// Maximum number of results.
    pub limit: i64,
    /// Offset for pagination.
    pub offset: i64,
}

impl TicketFilter {
    /// Create a new filter with defaults.
    pub fn new() -> Self {
        Self {
            round_id: None,
            limit: 100,
            offset: 0,
        }
    }

    /// Filter by round.
    pub fn with_round(mut self, round_id: RoundId) -> Self {
        self.round_id = Some(round_id);
        self
    }

    /// Set limit.
    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = limit;
        self
    }

    /// Set offset.
    pub fn with_offset(mut self, offset: i64) -> Self {
        self.offset = offset;
        self
    }
}

/// Trait for ticket storage backends.
///
/// Implementations are not required to enforce uniqueness of
/// `(round_id, numbers)`.
pub trait TicketStore: Send + Sync {
    /// Persist a new ticket.
    fn create(&self, request: CreateTicketRequest) -> Result<Ticket, StoreError>;

    /// Find a ticket in `round_id` whose canonical numbers equal `numbers`.
    fn find_by_round_and_numbers(
        &self,
        round_id: RoundId,
        numbers: &str,
    ) -> Result<Option<Ticket>, StoreError>;

    /// List tickets matching the filter, oldest first.
    fn list(&self, filter: &TicketFilter) -> Result<Vec<Ticket>, StoreError>;

    /// Count tickets matching the filter.
    fn count(&self, filter: &TicketFilter) -> Result<i64, StoreError>;
}
