//! Lottery tickets: number validation, canonical form, storage and the
//! number engine.

mod engine;
mod error;
mod numbers;
mod sqlite_store;
mod store;
mod types;

pub use engine::TicketNumberEngine;
pub use error::LotteryError;
pub use numbers::{
    canonical_form, draw_distinct, parse_canonical, validate, MAX_NUMBER, MIN_DRAW_MAX,
    MIN_NUMBER, NUMBER_COUNT,
};
pub use sqlite_store::SqliteTicketStore;
pub use store::{StoreError, TicketFilter, TicketStore};
pub use types::{CreateTicketRequest, EnrollmentResult, RoundId, Ticket};
