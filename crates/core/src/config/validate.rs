use super::{
    types::{Config, LotteryConfig},
    ConfigError,
};
use crate::ticket::{MAX_NUMBER, MIN_DRAW_MAX};

/// Validate configuration
/// Currently validates:
/// - Server port is not 0
/// - Retry budget allows at least one draw
/// - Draw range can hold a full ticket and stays within the ticket range
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    validate_lottery_config(&config.lottery)
}

/// Validate the `[lottery]` section on its own.
///
/// The number engine runs this on construction, so an engine never holds a
/// draw range it cannot draw from.
pub fn validate_lottery_config(lottery: &LotteryConfig) -> Result<(), ConfigError> {
    if lottery.retry_budget == 0 {
        return Err(ConfigError::ValidationError(
            "lottery.retry_budget must be at least 1".to_string(),
        ));
    }

    let max = lottery.max_drawn_number;
    if !(MIN_DRAW_MAX..=MAX_NUMBER).contains(&max) {
        return Err(ConfigError::ValidationError(format!(
            "lottery.max_drawn_number must be between {} and {}, got {}",
            MIN_DRAW_MAX, MAX_NUMBER, max
        )));
    }

    Ok(())
}
