//! Ticket number engine: registration and collision-free random generation.

use std::sync::Arc;

use rand::Rng;
use tracing::{debug, info, warn};

use super::numbers::{canonical_form, draw_distinct, validate};
use super::{CreateTicketRequest, EnrollmentResult, LotteryError, RoundId, TicketStore};
use crate::config::{validate_lottery_config, ConfigError, LotteryConfig};
use crate::metrics;

/// Validates, canonicalizes and generates lottery number sets.
///
/// The engine holds no mutable state. All persistence goes through the
/// injected [`TicketStore`], and randomness comes from the caller's RNG.
pub struct TicketNumberEngine {
    store: Arc<dyn TicketStore>,
    config: LotteryConfig,
}

impl TicketNumberEngine {
    /// Create an engine with the default lottery configuration.
    pub fn new(store: Arc<dyn TicketStore>) -> Self {
        Self {
            store,
            config: LotteryConfig::default(),
        }
    }

    /// Create an engine with a custom lottery configuration.
    ///
    /// Fails when the retry budget is zero or the draw range cannot hold a
    /// full ticket within the ticket range.
    pub fn with_config(
        store: Arc<dyn TicketStore>,
        config: LotteryConfig,
    ) -> Result<Self, ConfigError> {
        validate_lottery_config(&config)?;
        Ok(Self { store, config })
    }

    pub fn config(&self) -> &LotteryConfig {
        &self.config
    }

    /// Register a ticket with caller-chosen numbers for `round_id`.
    ///
    /// The numbers must be exactly six distinct values; they are stored in
    /// canonical form. Nothing is written when validation fails.
    pub fn register(&self, round_id: RoundId, numbers: &[i32]) -> Result<(), LotteryError> {
        if let Err(e) = validate(numbers) {
            metrics::REGISTRATIONS_REJECTED.inc();
            debug!(round_id, ?numbers, "Rejected ticket registration: {}", e);
            return Err(e);
        }

        let ticket = self.store.create(CreateTicketRequest {
            round_id,
            numbers: canonical_form(numbers),
        })?;

        metrics::TICKETS_REGISTERED.inc();
        info!(
            round_id,
            ticket_id = %ticket.id,
            numbers = %ticket.numbers,
            "Registered lottery ticket"
        );

        Ok(())
    }

    /// Generate six random numbers that no stored ticket of `round_id` holds.
    ///
    /// Makes at most `retry_budget` draws and fails with
    /// [`LotteryError::RandomGenerationExhausted`] only when every one of them
    /// collides. The numbers come back in draw order; nothing is persisted.
    pub fn generate_random_numbers<R: Rng + ?Sized>(
        &self,
        round_id: RoundId,
        rng: &mut R,
    ) -> Result<Vec<i32>, LotteryError> {
        let budget = self.config.retry_budget;

        for attempt in 1..=budget {
            let numbers = draw_distinct(rng, self.config.max_drawn_number)?;
            metrics::RANDOM_DRAWS.inc();

            validate(&numbers)?;
            let canonical = canonical_form(&numbers);

            match self.store.find_by_round_and_numbers(round_id, &canonical)? {
                None => {
                    debug!(round_id, attempt, numbers = %canonical, "Generated unique numbers");
                    return Ok(numbers);
                }
                Some(existing) => {
                    metrics::DRAW_COLLISIONS.inc();
                    debug!(
                        round_id,
                        attempt,
                        numbers = %canonical,
                        existing_ticket = %existing.id,
                        "Random draw collided with existing ticket"
                    );
                }
            }
        }

        metrics::GENERATION_EXHAUSTED.inc();
        warn!(
            round_id,
            attempts = budget,
            "Random number generation exhausted its retry budget"
        );
        Err(LotteryError::RandomGenerationExhausted {
            round_id,
            attempts: budget,
        })
    }

    /// Generate unique numbers for `round_id` and register them.
    ///
    /// Not atomic: a concurrent registration of the same numbers between the
    /// lookup and the write is not detected.
    pub fn enroll_random<R: Rng + ?Sized>(
        &self,
        round_id: RoundId,
        rng: &mut R,
    ) -> Result<EnrollmentResult, LotteryError> {
        let numbers = self.generate_random_numbers(round_id, rng)?;
        self.register(round_id, &numbers)?;
        Ok(EnrollmentResult {
            lottery_round_id: round_id,
            lottery_numbers: numbers,
        })
    }
}
