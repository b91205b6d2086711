use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};
use std::str::FromStr;

use crate::utils::error::DrillError;

/// Currency amount stored as a whole number of hundredths, so sums and
/// comparisons stay exact. Serialized as a decimal string ("1234.50").
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    pub fn cents(&self) -> i64 {
        self.0
    }

    /// Amount as currency units, for display-side averages only.
    pub fn as_units_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl Mul<u32> for Money {
    type Output = Money;

    fn mul(self, rhs: u32) -> Money {
        Money(self.0 * rhs as i64)
    }
}

impl FromStr for Money {
    type Err = DrillError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| DrillError::InvalidConfigValueError {
            field: "amount".to_string(),
            value: s.to_string(),
            reason: reason.to_string(),
        };

        let (negative, rest) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };

        let (units_part, cents_part) = match rest.split_once('.') {
            Some((u, c)) => (u, c),
            None => (rest, ""),
        };

        if units_part.is_empty() || !units_part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid("expected a decimal amount like 1234.50"));
        }
        if cents_part.len() > 2 || !cents_part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid("at most two fractional digits are supported"));
        }

        let units: i64 = units_part
            .parse()
            .map_err(|_| invalid("amount is out of range"))?;
        let mut cents: i64 = if cents_part.is_empty() {
            0
        } else {
            cents_part.parse().map_err(|_| invalid("amount is out of range"))?
        };
        if cents_part.len() == 1 {
            cents *= 10;
        }

        let total = units
            .checked_mul(100)
            .and_then(|u| u.checked_add(cents))
            .ok_or_else(|| invalid("amount is out of range"))?;

        Ok(Money(if negative { -total } else { total }))
    }
}

impl TryFrom<String> for Money {
    type Error = DrillError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Money> for String {
    fn from(value: Money) -> String {
        value.to_string()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub date: NaiveDate,
    pub total: Money,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub company_name: String,
    pub city: String,
    pub country: String,
    pub postal_code: Option<String>,
    pub region: Option<String>,
    pub phone: String,
    pub orders: Vec<Order>,
}

impl Customer {
    pub fn orders_total(&self) -> Money {
        self.orders.iter().map(|o| o.total).sum()
    }

    pub fn first_order_date(&self) -> Option<NaiveDate> {
        self.orders.iter().map(|o| o.date).min()
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {}, {} | postal: {} | region: {} | phone: {} | orders: {}",
            self.id,
            self.company_name,
            self.city,
            self.country,
            self.postal_code.as_deref().unwrap_or("-"),
            self.region.as_deref().unwrap_or("-"),
            self.phone,
            self.orders.len(),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub category: String,
    pub unit_price: Money,
    pub units_in_stock: u32,
}

impl Product {
    /// Value of the stock on hand, the inner ordering key of the
    /// category/availability drill.
    pub fn stock_value(&self) -> Money {
        self.unit_price * self.units_in_stock
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) | price: {} | in stock: {}",
            self.name, self.category, self.unit_price, self.units_in_stock
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Supplier {
    pub name: String,
    pub city: String,
    pub country: String,
}

impl fmt::Display for Supplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {}, {}", self.name, self.city, self.country)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_parse_whole_and_fractional() {
        assert_eq!("1234".parse::<Money>().unwrap(), Money::from_cents(123_400));
        assert_eq!("1234.5".parse::<Money>().unwrap(), Money::from_cents(123_450));
        assert_eq!("1234.56".parse::<Money>().unwrap(), Money::from_cents(123_456));
        assert_eq!("0.07".parse::<Money>().unwrap(), Money::from_cents(7));
        assert_eq!("-3.50".parse::<Money>().unwrap(), Money::from_cents(-350));
    }

    #[test]
    fn test_money_parse_rejects_malformed() {
        assert!("".parse::<Money>().is_err());
        assert!(".".parse::<Money>().is_err());
        assert!(".50".parse::<Money>().is_err());
        assert!("12.345".parse::<Money>().is_err());
        assert!("12,50".parse::<Money>().is_err());
        assert!("abc".parse::<Money>().is_err());
    }

    #[test]
    fn test_money_display_round_trip() {
        for text in ["0.00", "15.00", "45.00", "4107.60", "-3.50"] {
            let amount: Money = text.parse().unwrap();
            assert_eq!(amount.to_string(), text);
        }
    }

    #[test]
    fn test_money_sum_is_exact() {
        let totals = vec![
            Money::from_cents(10_000),
            Money::from_cents(25_000),
            Money::from_cents(5_000),
        ];
        let sum: Money = totals.into_iter().sum();
        assert_eq!(sum, Money::from_cents(40_000));
        assert!(sum > "300".parse::<Money>().unwrap());
    }

    #[test]
    fn test_stock_value_multiplies_exactly() {
        let product = Product {
            name: "Chai".to_string(),
            category: "Beverages".to_string(),
            unit_price: "18.50".parse().unwrap(),
            units_in_stock: 39,
        };
        assert_eq!(product.stock_value(), Money::from_cents(72_150));
    }

    #[test]
    fn test_customer_orders_total_empty_is_zero() {
        let customer = Customer {
            id: "NOORD".to_string(),
            company_name: "No Orders Ltd".to_string(),
            city: "Oslo".to_string(),
            country: "Norway".to_string(),
            postal_code: None,
            region: None,
            phone: "(47) 22 12 34".to_string(),
            orders: vec![],
        };
        assert_eq!(customer.orders_total(), Money::ZERO);
        assert_eq!(customer.first_order_date(), None);
    }
}
