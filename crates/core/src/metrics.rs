//! Prometheus metrics for the number engine.

use once_cell::sync::Lazy;
use prometheus::{IntCounter, Opts};

fn counter(name: &str, help: &str) -> IntCounter {
    IntCounter::with_opts(Opts::new(name, help)).expect("metric name and help are static and valid")
}

// =============================================================================
// Registration
// =============================================================================

/// Tickets persisted through the engine.
pub static TICKETS_REGISTERED: Lazy<IntCounter> =
    Lazy::new(|| counter("lotto_tickets_registered_total", "Total tickets registered"));

/// Registrations rejected by number validation.
pub static REGISTRATIONS_REJECTED: Lazy<IntCounter> = Lazy::new(|| {
    counter(
        "lotto_registrations_rejected_total",
        "Registrations rejected for duplicate or wrong count numbers",
    )
});

// =============================================================================
// Random generation
// =============================================================================

/// Candidate number sets drawn.
pub static RANDOM_DRAWS: Lazy<IntCounter> =
    Lazy::new(|| counter("lotto_random_draws_total", "Total random candidate draws"));

/// Draws that matched an existing ticket of the round.
pub static DRAW_COLLISIONS: Lazy<IntCounter> = Lazy::new(|| {
    counter(
        "lotto_draw_collisions_total",
        "Random draws that collided with a stored ticket",
    )
});

/// Generations that ran out of attempts.
pub static GENERATION_EXHAUSTED: Lazy<IntCounter> = Lazy::new(|| {
    counter(
        "lotto_generation_exhausted_total",
        "Random generations that exhausted the retry budget",
    )
});

// =============================================================================
// Helper functions
// =============================================================================

/// Get all core metrics for registration in a registry.
pub fn all_metrics() -> Vec<Box<dyn prometheus::core::Collector>> {
    vec![
        Box::new(TICKETS_REGISTERED.clone()),
        Box::new(REGISTRATIONS_REJECTED.clone()),
        Box::new(RANDOM_DRAWS.clone()),
        Box::new(DRAW_COLLISIONS.clone()),
        Box::new(GENERATION_EXHAUSTED.clone()),
    ]
}
