//! Euro amounts held as integer cents so ledger totals stay exact.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

use super::entity::{DomainError, DomainResult};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cents(pub i64);

impl Cents {
    pub const ZERO: Cents = Cents(0);

    pub const fn from_euros(euros: i64, cents: i64) -> Self {
        Cents(euros * 100 + cents)
    }

    pub fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Parse user input such as `12`, `12.5`, `12,50` or `€ 3,20`.
    ///
    /// At most two decimals; negative and zero amounts are rejected.
    pub fn parse(input: &str) -> DomainResult<Self> {
        let cleaned: String = input
            .trim()
            .trim_start_matches('€')
            .trim_end_matches('€')
            .trim()
            .replace(',', ".");
        if cleaned.is_empty() {
            return Err(DomainError::InvalidInput("empty amount".to_string()));
        }

        let (whole, frac) = match cleaned.split_once('.') {
            Some((w, f)) => (w, f),
            None => (cleaned.as_str(), ""),
        };
        if frac.len() > 2 || !whole.chars().all(|c| c.is_ascii_digit()) || !frac.chars().all(|c| c.is_ascii_digit()) {
            return Err(DomainError::InvalidInput(format!("not an amount: {}", input)));
        }

        let euros: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| DomainError::InvalidInput(format!("amount too large: {}", input)))?
        };
        let cents: i64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>().unwrap_or(0) * 10,
            _ => frac.parse().unwrap_or(0),
        };

        let total = euros
            .checked_mul(100)
            .and_then(|v| v.checked_add(cents))
            .ok_or_else(|| DomainError::InvalidInput(format!("amount too large: {}", input)))?;
        if total <= 0 {
            return Err(DomainError::InvalidInput("amount must be positive".to_string()));
        }
        Ok(Cents(total))
    }
}

impl fmt::Display for Cents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.abs();
        write!(f, "{}€{}.{:02}", sign, abs / 100, abs % 100)
    }
}

impl Add for Cents {
    type Output = Cents;
    fn add(self, rhs: Cents) -> Cents {
        Cents(self.0 + rhs.0)
    }
}

impl Sub for Cents {
    type Output = Cents;
    fn sub(self, rhs: Cents) -> Cents {
        Cents(self.0 - rhs.0)
    }
}

impl Sum for Cents {
    fn sum<I: Iterator<Item = Cents>>(iter: I) -> Cents {
        iter.fold(Cents::ZERO, |acc, c| acc + c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_comma_and_dot() {
        assert_eq!(Cents::parse("12,50").unwrap(), Cents(1250));
        assert_eq!(Cents::parse("12.5").unwrap(), Cents(1250));
        assert_eq!(Cents::parse("3").unwrap(), Cents(300));
        assert_eq!(Cents::parse(" €4,05 ").unwrap(), Cents(405));
        assert_eq!(Cents::parse(",75").unwrap(), Cents(75));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Cents::parse("").is_err());
        assert!(Cents::parse("abc").is_err());
        assert!(Cents::parse("1.234").is_err());
        assert!(Cents::parse("-3").is_err());
        assert!(Cents::parse("0,00").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Cents(450).to_string(), "€4.50");
        assert_eq!(Cents(1030).to_string(), "€10.30");
        assert_eq!(Cents(-5).to_string(), "-€0.05");
    }
}
