use std::env;
use std::str::FromStr;

use tracing::warn;

use crate::orders::pricing::MAX_UNITS_PER_LINE;
use crate::orders::TransitionPolicy;

pub const CHANNEL_CAPACITY_VAR: &str = "ORDER_DESK_CHANNEL_CAPACITY";
pub const MAX_UNITS_VAR: &str = "ORDER_DESK_MAX_UNITS_PER_LINE";
pub const TRANSITIONS_VAR: &str = "ORDER_DESK_TRANSITIONS";

/// Runtime knobs for the store service.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreConfig {
    /// Inbox size; senders wait once this many requests are queued.
    pub channel_capacity: usize,
    pub max_units_per_line: u32,
    pub transitions: TransitionPolicy,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            channel_capacity: 32,
            max_units_per_line: MAX_UNITS_PER_LINE,
            transitions: TransitionPolicy::AnyToAny,
        }
    }
}

impl StoreConfig {
    /// Defaults overridden by `ORDER_DESK_*` environment variables. Values
    /// that fail to parse are logged and ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            channel_capacity: read::<usize, _>(&lookup, CHANNEL_CAPACITY_VAR)
                .filter(|capacity| *capacity > 0)
                .unwrap_or(defaults.channel_capacity),
            max_units_per_line: read::<u32, _>(&lookup, MAX_UNITS_VAR).unwrap_or(defaults.max_units_per_line),
            transitions: read::<TransitionPolicy, _>(&lookup, TRANSITIONS_VAR).unwrap_or(defaults.transitions),
        }
    }
}

fn read<T, F>(lookup: &F, key: &str) -> Option<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw = lookup(key)?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(key, value = %raw, error = %e, "Ignoring invalid config value");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn missing_values_fall_back_to_defaults() {
        assert_eq!(StoreConfig::from_lookup(lookup(&[])), StoreConfig::default());
    }

    #[test]
    fn values_are_read_from_the_environment() {
        let config = StoreConfig::from_lookup(lookup(&[
            (CHANNEL_CAPACITY_VAR, "8"),
            (MAX_UNITS_VAR, "4"),
            (TRANSITIONS_VAR, "forward"),
        ]));
        assert_eq!(config.channel_capacity, 8);
        assert_eq!(config.max_units_per_line, 4);
        assert_eq!(config.transitions, TransitionPolicy::ForwardOnly);
    }

    #[test]
    fn invalid_values_are_ignored() {
        let config = StoreConfig::from_lookup(lookup(&[(CHANNEL_CAPACITY_VAR, "0"), (MAX_UNITS_VAR, "lots")]));
        assert_eq!(config, StoreConfig::default());
    }
}
