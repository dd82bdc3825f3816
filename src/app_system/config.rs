use super::SystemError;

pub const BUFFER_SIZE_VAR: &str = "PAGA_ORDERS_BUFFER_SIZE";
pub const LOG_FILTER_VAR: &str = "PAGA_ORDERS_LOG";

/// Runtime settings for the order system.
#[derive(Debug, Clone, PartialEq)]
pub struct SystemConfig {
    /// Mailbox capacity of every resource actor.
    pub buffer_size: usize,
    /// Default tracing filter when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            buffer_size: 32,
            log_filter: "info".to_string(),
        }
    }
}

impl SystemConfig {
    pub fn from_env() -> Result<Self, SystemError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key/value source, falling back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SystemError> {
        let mut config = Self::default();

        if let Some(raw) = lookup(BUFFER_SIZE_VAR) {
            let invalid = |reason: &str| SystemError::Config {
                key: BUFFER_SIZE_VAR.to_string(),
                reason: format!("{reason}: {raw:?}"),
            };
            let size: usize = raw.trim().parse().map_err(|_| invalid("not a number"))?;
            if size == 0 {
                return Err(invalid("must be greater than zero"));
            }
            config.buffer_size = size;
        }

        if let Some(filter) = lookup(LOG_FILTER_VAR) {
            config.log_filter = filter;
        }

        Ok(config)
    }
}
