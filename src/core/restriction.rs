use serde::Serialize;
use std::fmt;

use crate::domain::model::{Customer, Money, Product};

/// Elements of `values` strictly below `limit`, original order preserved.
pub fn numbers_below(values: &[i32], limit: i32) -> Vec<i32> {
    values.iter().copied().filter(|n| *n < limit).collect()
}

pub fn products_in_stock(products: &[Product]) -> Vec<&Product> {
    products.iter().filter(|p| p.units_in_stock > 0).collect()
}

/// Case-sensitive, exact city equality.
pub fn customers_in_city<'a>(customers: &'a [Customer], city: &str) -> Vec<&'a Customer> {
    customers.iter().filter(|c| c.city == city).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerSpend {
    pub customer_id: String,
    pub orders_total: Money,
}

impl fmt::Display for CustomerSpend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | orders total: {}", self.customer_id, self.orders_total)
    }
}

/// Customers whose order-total sum strictly exceeds `threshold`, paired with
/// the computed sum. A customer with no orders sums to zero.
pub fn big_spenders(customers: &[Customer], threshold: Money) -> Vec<CustomerSpend> {
    customers
        .iter()
        .map(|c| (c, c.orders_total()))
        .filter(|(_, total)| *total > threshold)
        .map(|(c, total)| CustomerSpend {
            customer_id: c.id.clone(),
            orders_total: total,
        })
        .collect()
}

/// Customers with at least one order strictly above `threshold`.
pub fn customers_with_order_above(customers: &[Customer], threshold: Money) -> Vec<&Customer> {
    customers
        .iter()
        .filter(|c| c.orders.iter().any(|o| o.total > threshold))
        .collect()
}

/// Customers whose contact data looks off: postal code missing or containing
/// a non-digit, region missing or empty, or phone without a leading "(".
/// The predicates combine with inclusive OR.
pub fn customers_with_suspect_contact(customers: &[Customer]) -> Vec<&Customer> {
    customers
        .iter()
        .filter(|c| {
            let postal_missing = c.postal_code.is_none();
            let postal_non_digit = c
                .postal_code
                .as_ref()
                .is_some_and(|p| p.chars().any(|ch| !ch.is_ascii_digit()));
            let region_blank = c.region.as_deref().map_or(true, str::is_empty);
            let phone_no_code = !c.phone.starts_with('(');

            postal_missing || postal_non_digit || region_blank || phone_no_code
        })
        .collect()
}
