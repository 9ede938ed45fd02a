//! Mock ticket store for testing.

use std::sync::{Mutex, MutexGuard};

use chrono::Utc;

use crate::ticket::{CreateTicketRequest, RoundId, StoreError, Ticket, TicketFilter, TicketStore};

#[derive(Debug, Default)]
struct Inner {
    tickets: Vec<Ticket>,
    lookups: Vec<(RoundId, String)>,
    forced_collisions: u32,
    failure: Option<String>,
    next_id: u64,
}

/// In-memory implementation of the TicketStore trait.
///
/// Provides controllable behavior for testing:
/// - Keep saved tickets in memory
/// - Record every duplicate lookup for assertions
/// - Report collisions for the next N lookups regardless of contents
/// - Fail every operation with a storage error
///
/// # Example
///
/// ```rust,ignore
/// use lotto_core::testing::MockTicketStore;
///
/// let store = Arc::new(MockTicketStore::new());
/// store.collide_next(3);
///
/// let engine = TicketNumberEngine::new(store.clone());
/// engine.generate_random_numbers(1, &mut rng)?;
/// assert_eq!(store.lookups().len(), 4);
/// ```
#[derive(Debug, Default)]
pub struct MockTicketStore {
    inner: Mutex<Inner>,
}

impl MockTicketStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn inner(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Report the next `count` lookups as collisions.
    pub fn collide_next(&self, count: u32) {
        self.inner().forced_collisions = count;
    }

    /// Make every subsequent operation fail with a database error.
    pub fn fail_with(&self, message: impl Into<String>) {
        self.inner().failure = Some(message.into());
    }

    /// Clear a failure set by [`fail_with`](Self::fail_with).
    pub fn recover(&self) {
        self.inner().failure = None;
    }

    /// All tickets saved so far, in insertion order.
    pub fn saved(&self) -> Vec<Ticket> {
        self.inner().tickets.clone()
    }

    /// All `(round_id, numbers)` lookups made so far.
    pub fn lookups(&self) -> Vec<(RoundId, String)> {
        self.inner().lookups.clone()
    }

    fn check_failure(inner: &Inner) -> Result<(), StoreError> {
        match &inner.failure {
            Some(message) => Err(StoreError::Database(message.clone())),
            None => Ok(()),
        }
    }

    fn matching<'a>(inner: &'a Inner, filter: &'a TicketFilter) -> impl Iterator<Item = &'a Ticket> {
        inner
            .tickets
            .iter()
            .filter(move |t| filter.round_id.map_or(true, |round_id| t.round_id == round_id))
    }
}

impl TicketStore for MockTicketStore {
    fn create(&self, request: CreateTicketRequest) -> Result<Ticket, StoreError> {
        let mut inner = self.inner();
        Self::check_failure(&inner)?;

        inner.next_id += 1;
        let ticket = Ticket {
            id: format!("mock-{}", inner.next_id),
            round_id: request.round_id,
            numbers: request.numbers,
            created_at: Utc::now(),
        };
        inner.tickets.push(ticket.clone());
        Ok(ticket)
    }

    fn find_by_round_and_numbers(
        &self,
        round_id: RoundId,
        numbers: &str,
    ) -> Result<Option<Ticket>, StoreError> {
        let mut inner = self.inner();
        Self::check_failure(&inner)?;

        inner.lookups.push((round_id, numbers.to_string()));

        if inner.forced_collisions > 0 {
            inner.forced_collisions -= 1;
            return Ok(Some(Ticket {
                id: "mock-collision".to_string(),
                round_id,
                numbers: numbers.to_string(),
                created_at: Utc::now(),
            }));
        }

        Ok(inner
            .tickets
            .iter()
            .find(|t| t.round_id == round_id && t.numbers == numbers)
            .cloned())
    }

    fn list(&self, filter: &TicketFilter) -> Result<Vec<Ticket>, StoreError> {
        let inner = self.inner();
        Self::check_failure(&inner)?;

        Ok(Self::matching(&inner, filter)
            .skip(filter.offset.max(0) as usize)
            .take(filter.limit.max(0) as usize)
            .cloned()
            .collect())
    }

    fn count(&self, filter: &TicketFilter) -> Result<i64, StoreError> {
        let inner = self.inner();
        Self::check_failure(&inner)?;

        Ok(Self::matching(&inner, filter).count() as i64)
    }
}
