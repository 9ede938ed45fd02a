//! Ticket API handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::error;
use lotto_core::{EnrollmentResult, LotteryError, RoundId, Ticket, TicketFilter};

use crate::state::AppState;

/// Maximum allowed limit for ticket queries
const MAX_LIMIT: i64 = 1000;

/// Default limit for ticket queries
const DEFAULT_LIMIT: i64 = 100;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for registering a ticket
#[derive(Debug, Deserialize)]
pub struct RegisterTicketBody {
    /// Player-chosen numbers, in any order
    pub numbers: Vec<i32>,
}

/// Query parameters for listing tickets
#[derive(Debug, Deserialize)]
pub struct ListTicketsParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Generated numbers that were not persisted
#[derive(Debug, Serialize)]
pub struct RandomNumbersResponse {
    pub round_id: RoundId,
    pub numbers: Vec<i32>,
}

/// Response for ticket listings
#[derive(Debug, Serialize)]
pub struct TicketResponse {
    pub id: String,
    pub round_id: RoundId,
    pub numbers: String,
    pub created_at: String,
}

impl From<Ticket> for TicketResponse {
    fn from(ticket: Ticket) -> Self {
        Self {
            id: ticket.id,
            round_id: ticket.round_id,
            numbers: ticket.numbers,
            created_at: ticket.created_at.to_rfc3339(),
        }
    }
}

/// Response for listing tickets
#[derive(Debug, Serialize)]
pub struct ListTicketsResponse {
    pub tickets: Vec<TicketResponse>,
    pub total: i64,
    pub limit: i64,
    pub offset: i64,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct TicketErrorResponse {
    pub error: String,
}

type ApiError = (StatusCode, Json<TicketErrorResponse>);

fn error_response(err: LotteryError) -> ApiError {
    let status = match &err {
        LotteryError::DuplicateOrWrongCount { .. } => StatusCode::BAD_REQUEST,
        LotteryError::RandomGenerationExhausted { .. } => StatusCode::CONFLICT,
        LotteryError::Storage(_) => {
            error!("Ticket operation failed: {}", err);
            StatusCode::INTERNAL_SERVER_ERROR
        }
        // Unreachable from these handlers: the engine rejects bad draw ranges
        // when built, and no handler decodes stored numbers. Listed to keep the
        // match exhaustive.
        LotteryError::InvalidDrawRange { .. } | LotteryError::MalformedNumbers(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (
        status,
        Json(TicketErrorResponse {
            error: err.to_string(),
        }),
    )
}

// ============================================================================
// Handlers
// ============================================================================

/// Register a ticket with caller-chosen numbers
pub async fn register_ticket(
    State(state): State<Arc<AppState>>,
    Path(round_id): Path<RoundId>,
    Json(body): Json<RegisterTicketBody>,
) -> Result<(StatusCode, Json<EnrollmentResult>), ApiError> {
    state
        .engine()
        .register(round_id, &body.numbers)
        .map_err(error_response)?;

    Ok((
        StatusCode::CREATED,
        Json(EnrollmentResult {
            lottery_round_id: round_id,
            lottery_numbers: body.numbers,
        }),
    ))
}

/// Generate unique random numbers and register them as a ticket
pub async fn enroll_random_ticket(
    State(state): State<Arc<AppState>>,
    Path(round_id): Path<RoundId>,
) -> Result<(StatusCode, Json<EnrollmentResult>), ApiError> {
    let result = state
        .engine()
        .enroll_random(round_id, &mut rand::thread_rng())
        .map_err(error_response)?;

    Ok((StatusCode::CREATED, Json(result)))
}

/// Generate unique random numbers without registering them
pub async fn generate_random_numbers(
    State(state): State<Arc<AppState>>,
    Path(round_id): Path<RoundId>,
) -> Result<Json<RandomNumbersResponse>, ApiError> {
    let numbers = state
        .engine()
        .generate_random_numbers(round_id, &mut rand::thread_rng())
        .map_err(error_response)?;

    Ok(Json(RandomNumbersResponse { round_id, numbers }))
}

/// List tickets registered for a round
pub async fn list_tickets(
    State(state): State<Arc<AppState>>,
    Path(round_id): Path<RoundId>,
    Query(params): Query<ListTicketsParams>,
) -> Result<Json<ListTicketsResponse>, ApiError> {
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
    let offset = params.offset.unwrap_or(0).max(0);

    let filter = TicketFilter::new()
        .with_round(round_id)
        .with_limit(limit)
        .with_offset(offset);

    let store = state.ticket_store();
    let tickets = store
        .list(&filter)
        .map_err(|e| error_response(e.into()))?;
    let total = store
        .count(&filter)
        .map_err(|e| error_response(e.into()))?;

    Ok(Json(ListTicketsResponse {
        tickets: tickets.into_iter().map(TicketResponse::from).collect(),
        total,
        limit,
        offset,
    }))
}
