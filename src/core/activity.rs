use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

use crate::domain::model::Customer;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthActivity {
    pub month: u32,
    pub avg_orders_per_customer: f64,
}

impl fmt::Display for MonthActivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "month {:02} | avg orders per customer: {:.2}", self.month, self.avg_orders_per_customer)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearActivity {
    pub year: i32,
    pub avg_orders_per_customer: f64,
}

impl fmt::Display for YearActivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "year {} | avg orders per customer: {:.2}", self.year, self.avg_orders_per_customer)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearMonthActivity {
    pub year: i32,
    pub month: u32,
    pub avg_orders_per_customer: f64,
}

impl fmt::Display for YearMonthActivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{:02} | avg orders per customer: {:.2}",
            self.year, self.month, self.avg_orders_per_customer
        )
    }
}

/// Two-phase activity aggregation. Phase one counts orders per
/// (customer, period); phase two averages those counts per period across the
/// customers active in it. The phases must stay separate: the result is the
/// average order count per active customer, not total orders divided by all
/// customers. Results come out in ascending period order.
fn per_period_average<K: Ord>(
    customers: &[Customer],
    period: impl Fn(NaiveDate) -> K,
) -> Vec<(K, f64)> {
    let mut per_customer: BTreeMap<(K, &str), u64> = BTreeMap::new();
    for customer in customers {
        for order in &customer.orders {
            *per_customer
                .entry((period(order.date), customer.id.as_str()))
                .or_insert(0) += 1;
        }
    }

    let mut by_period: BTreeMap<K, (u64, u64)> = BTreeMap::new();
    for ((key, _), count) in per_customer {
        let (orders, active_customers) = by_period.entry(key).or_insert((0, 0));
        *orders += count;
        *active_customers += 1;
    }

    by_period
        .into_iter()
        .map(|(key, (orders, active_customers))| {
            (key, orders as f64 / active_customers as f64)
        })
        .collect()
}

/// Average order count per active customer for each calendar month,
/// aggregated across years.
pub fn activity_by_month(customers: &[Customer]) -> Vec<MonthActivity> {
    per_period_average(customers, |d| d.month())
        .into_iter()
        .map(|(month, avg)| MonthActivity {
            month,
            avg_orders_per_customer: avg,
        })
        .collect()
}

pub fn activity_by_year(customers: &[Customer]) -> Vec<YearActivity> {
    per_period_average(customers, |d| d.year())
        .into_iter()
        .map(|(year, avg)| YearActivity {
            year,
            avg_orders_per_customer: avg,
        })
        .collect()
}

pub fn activity_by_year_month(customers: &[Customer]) -> Vec<YearMonthActivity> {
    per_period_average(customers, |d| (d.year(), d.month()))
        .into_iter()
        .map(|((year, month), avg)| YearMonthActivity {
            year,
            month,
            avg_orders_per_customer: avg,
        })
        .collect()
}
