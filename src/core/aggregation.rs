use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

use crate::domain::model::{Customer, Money};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CityStats {
    pub city: String,
    pub avg_orders_total: f64,
    pub avg_order_count: f64,
}

impl fmt::Display for CityStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | avg orders total: {:.2} | avg order count: {:.2}",
            self.city, self.avg_orders_total, self.avg_order_count
        )
    }
}

/// Per-city averages across customers: the mean of each customer's order
/// total sum and the mean of each customer's order count. Sums stay in exact
/// cents until the single final division. Cities come out in ascending name
/// order.
pub fn city_order_stats(customers: &[Customer]) -> Vec<CityStats> {
    let mut by_city: BTreeMap<&str, Vec<&Customer>> = BTreeMap::new();
    for customer in customers {
        by_city.entry(&customer.city).or_default().push(customer);
    }

    by_city
        .into_iter()
        .map(|(city, members)| {
            let total: Money = members.iter().map(|c| c.orders_total()).sum();
            let order_count: usize = members.iter().map(|c| c.orders.len()).sum();
            let n = members.len() as f64;

            CityStats {
                city: city.to_string(),
                avg_orders_total: total.as_units_f64() / n,
                avg_order_count: order_count as f64 / n,
            }
        })
        .collect()
}
