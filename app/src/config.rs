//! Configuration management for the ticket gate.
//!
//! Loads configuration from environment variables with sensible defaults.
//! An unset variable falls back to its default; a set but unparseable one is
//! an error.

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use thiserror::Error;
use ticket_gate_core::{Money, PriceTable, PurchaseLimits, ReservationPolicy};

/// Configuration errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable was set to a value that does not parse
    #[error("Invalid value for {name}: {value:?} ({reason})")]
    InvalidValue {
        /// Variable name
        name: &'static str,
        /// Raw value
        value: String,
        /// Parse failure
        reason: String,
    },
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Unit price per ticket type
    pub prices: PriceTable,
    /// Per-purchase limits
    pub limits: PurchaseLimits,
    /// Seat reservation call policy
    pub reservation_policy: ReservationPolicy,
    /// Log filter (`RUST_LOG` syntax)
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prices: PriceTable::default(),
            limits: PurchaseLimits::default(),
            reservation_policy: ReservationPolicy::default(),
            log_level: "info,ticket_gate=debug,ticket_gate_core=debug".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns error if a variable is set but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to its value.
    ///
    /// # Errors
    ///
    /// Returns error if a variable is set but malformed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            prices: PriceTable::new(
                Money::new(parse_or(&lookup, "TICKET_PRICE_ADULT", defaults.prices.adult.units())?),
                Money::new(parse_or(&lookup, "TICKET_PRICE_CHILD", defaults.prices.child.units())?),
                Money::new(parse_or(&lookup, "TICKET_PRICE_INFANT", defaults.prices.infant.units())?),
            ),
            limits: PurchaseLimits {
                max_tickets_per_purchase: parse_or(
                    &lookup,
                    "TICKET_MAX_PER_PURCHASE",
                    defaults.limits.max_tickets_per_purchase,
                )?,
            },
            reservation_policy: parse_or(
                &lookup,
                "TICKET_RESERVATION_POLICY",
                defaults.reservation_policy,
            )?,
            log_level: lookup("RUST_LOG").unwrap_or(defaults.log_level),
        })
    }
}

fn parse_or<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name) {
        None => Ok(default),
        Some(value) => {
            let parsed = value.trim().parse::<T>();
            parsed.map_err(|e| ConfigError::InvalidValue {
                name,
                reason: e.to_string(),
                value,
            })
        }
    }
}
