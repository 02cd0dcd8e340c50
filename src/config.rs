//! Service configuration loaded from the environment

use std::{env, fmt::Display, str::FromStr};

use anyhow::{ensure, Context};
use rust_decimal::Decimal;
use tracing::info;

use crate::pricing::calculators::DEFAULT_VAT_PERCENT;
use crate::pricing::currency::Currency;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Currency for pricing requests that do not name one
    pub default_currency: String,
    /// VAT percent for pricing requests that do not name one
    pub default_vat_percent: Decimal,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            default_currency: "USD".to_string(),
            default_vat_percent: DEFAULT_VAT_PERCENT,
        }
    }
}

impl Config {
    /// Load from process environment variables (call `dotenvy::dotenv` first).
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load using `lookup` to resolve each variable.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host: String = load(&lookup, "HOST", "0.0.0.0")?;
        let port: u16 = load(&lookup, "PORT", "8080")?;
        let currency: Currency = load(&lookup, "DEFAULT_CURRENCY", "USD")?;
        let default_vat_percent: Decimal = load(&lookup, "DEFAULT_VAT_PERCENT", "15")?;

        ensure!(
            default_vat_percent >= Decimal::ZERO && default_vat_percent <= Decimal::ONE_HUNDRED,
            "DEFAULT_VAT_PERCENT must be between 0 and 100, got {}",
            default_vat_percent
        );

        Ok(Self {
            host,
            port,
            default_currency: currency.code().to_string(),
            default_vat_percent,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn load<F, T>(lookup: &F, key: &str, default: &str) -> anyhow::Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    let raw = lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    raw.parse::<T>()
        .map_err(|e| anyhow::anyhow!("{e}"))
        .with_context(|| format!("Invalid {key} value: {raw:?}"))
}
