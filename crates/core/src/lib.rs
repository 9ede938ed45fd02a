pub mod config;
pub mod metrics;
pub mod testing;
pub mod ticket;

pub use config::{
    load_config, load_config_from_str, validate_config, validate_lottery_config, Config,
    ConfigError, DatabaseConfig, LotteryConfig, SanitizedConfig, ServerConfig,
};
pub use ticket::{
    canonical_form, parse_canonical, CreateTicketRequest, EnrollmentResult, LotteryError,
    RoundId, SqliteTicketStore, StoreError, Ticket, TicketFilter, TicketNumberEngine,
    TicketStore, MAX_NUMBER, MIN_NUMBER, NUMBER_COUNT,
};
