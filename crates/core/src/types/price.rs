//! Currency-agnostic price representation using decimal arithmetic.
//!
//! Prices carry no currency code: the storefront renders everything in a
//! single currency and the state core never rounds. Rounding and symbol
//! placement are presentation concerns handled by [`format_price`].

use std::iter::Sum;
use std::ops::{Add, Mul};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A non-negative price in the currency's standard unit.
///
/// Arithmetic is plain decimal multiplication and summation; no rounding is
/// applied at this layer.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// A zero price.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Get the underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl From<u64> for Price {
    fn from(whole_units: u64) -> Self {
        Self(Decimal::from(whole_units))
    }
}

impl Mul<u32> for Price {
    type Output = Self;

    fn mul(self, quantity: u32) -> Self {
        Self(self.0 * Decimal::from(quantity))
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

/// Format a price for display: western digits grouped by thousands, at most
/// two fraction digits, followed by the dirham label. A missing price renders
/// as the Arabic zero.
#[must_use]
pub fn format_price(price: Option<Price>) -> String {
    let Some(price) = price else {
        return "٠".to_owned();
    };

    let amount = price.amount().round_dp(2).normalize();
    let rendered = amount.to_string();
    let (int_part, frac_part) = rendered
        .split_once('.')
        .map_or((rendered.as_str(), None), |(i, f)| (i, Some(f)));

    let mut formatted = group_thousands(int_part);
    if let Some(frac) = frac_part {
        formatted.push('.');
        formatted.push_str(frac);
    }

    format!("{formatted} درهم")
}

/// Insert a comma between every group of three digits, counting from the
/// right.
fn group_thousands(number: &str) -> String {
    let (sign, digits) = number
        .strip_prefix('-')
        .map_or(("", number), |rest| ("-", rest));
    let len = digits.chars().count();
    let mut out = String::with_capacity(number.len() + len / 3);
    out.push_str(sign);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
