//! Shared configuration helpers.
//!
//! Every service reads its settings from the environment, trying a
//! service-specific key before falling back to a shared one.

use std::env;
use std::str::FromStr;

/// Return the first of `keys` that is set in the environment.
pub fn env_var(keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| env::var(key).ok())
}

/// Parse the first set key, falling back to `default` when unset or unparsable.
pub fn env_parse<T: FromStr>(keys: &[&str], default: T) -> T {
    env_var(keys)
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}

/// Read a boolean flag from the environment.
pub fn env_flag(keys: &[&str], default: bool) -> bool {
    env_var(keys)
        .and_then(|value| parse_flag(&value))
        .unwrap_or(default)
}

/// Parse the usual spellings of a boolean flag.
pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
