use super::{types::Config, ConfigError};

/// Longest simulated delay accepted for a single stage.
const MAX_STAGE_DELAY_MS: u64 = 60 * 60 * 1000;

/// Validate configuration
/// Currently validates:
/// - Server port is not 0
/// - No kitchen stage delay exceeds one hour
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    let kitchen = &config.kitchen;
    for (name, value) in [
        ("kitchen.acknowledge_delay_ms", kitchen.acknowledge_delay_ms),
        ("kitchen.prep_delay_ms", kitchen.prep_delay_ms),
        ("kitchen.fry_delay_ms", kitchen.fry_delay_ms),
    ] {
        if value > MAX_STAGE_DELAY_MS {
            return Err(ConfigError::ValidationError(format!(
                "{} cannot exceed {} ms",
                name, MAX_STAGE_DELAY_MS
            )));
        }
    }

    Ok(())
}
