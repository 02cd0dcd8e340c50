//! Money formatting keyed by ISO 4217 currency code.
//!
//! Output follows en-US conventions: symbol prefix where one is customary,
//! otherwise the code and a non-breaking space; comma thousands separators;
//! the currency's own number of minor digits.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;

use super::calculators::round_money;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CurrencyError {
    #[error("Invalid currency code: {0:?}")]
    InvalidCode(String),
}

/// A validated currency code with its display conventions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Currency {
    code: String,
    symbol: Option<&'static str>,
    minor_units: u32,
}

// (code, symbol, minor units); codes not listed use the code as prefix and 2 digits
const KNOWN_CURRENCIES: &[(&str, Option<&str>, u32)] = &[
    ("USD", Some("$"), 2),
    ("EUR", Some("€"), 2),
    ("GBP", Some("£"), 2),
    ("JPY", Some("¥"), 0),
    ("CNY", Some("CN¥"), 2),
    ("INR", Some("₹"), 2),
    ("KRW", Some("₩"), 0),
    ("CAD", Some("CA$"), 2),
    ("AUD", Some("A$"), 2),
    ("NZD", Some("NZ$"), 2),
    ("MXN", Some("MX$"), 2),
    ("BRL", Some("R$"), 2),
    ("HKD", Some("HK$"), 2),
    ("ILS", Some("₪"), 2),
    ("VND", Some("₫"), 0),
    ("BHD", None, 3),
    ("JOD", None, 3),
    ("KWD", None, 3),
    ("OMR", None, 3),
    ("TND", None, 3),
    ("CLP", None, 0),
    ("ISK", None, 0),
    ("UGX", None, 0),
];

impl Currency {
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn minor_units(&self) -> u32 {
        self.minor_units
    }

    /// Format an amount, rounding half away from zero to the minor unit.
    pub fn format(&self, amount: Decimal) -> String {
        let mut rounded = round_money(amount.abs(), self.minor_units);
        rounded.rescale(self.minor_units);
        let digits = rounded.to_string();

        let (whole, fraction) = match digits.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (digits.as_str(), None),
        };

        let mut out = String::with_capacity(digits.len() + 8);
        if amount.is_sign_negative() && !rounded.is_zero() {
            out.push('-');
        }
        match self.symbol {
            Some(symbol) => out.push_str(symbol),
            None => {
                out.push_str(&self.code);
                out.push('\u{a0}');
            }
        }
        out.push_str(&group_thousands(whole));
        if let Some(fraction) = fraction {
            out.push('.');
            out.push_str(fraction);
        }
        out
    }
}

impl FromStr for Currency {
    type Err = CurrencyError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        let trimmed = code.trim();
        if trimmed.len() != 3 || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(CurrencyError::InvalidCode(code.to_string()));
        }
        let code = trimmed.to_ascii_uppercase();

        let (symbol, minor_units) = KNOWN_CURRENCIES
            .iter()
            .find(|(known, _, _)| *known == code)
            .map(|(_, symbol, minor)| (*symbol, *minor))
            .unwrap_or((None, 2));

        Ok(Self {
            code,
            symbol,
            minor_units,
        })
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

/// Format `amount` in the currency named by `code`.
pub fn format_currency(amount: Decimal, code: &str) -> Result<String, CurrencyError> {
    Ok(code.parse::<Currency>()?.format(amount))
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
