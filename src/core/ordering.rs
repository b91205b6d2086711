use chrono::Datelike;
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

use crate::domain::model::{Customer, Money};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FirstOrder {
    pub customer_id: String,
    pub year: i32,
    pub month: u32,
}

impl fmt::Display for FirstOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | first order: {}-{:02}", self.customer_id, self.year, self.month)
    }
}

/// Year and month of each customer's earliest order. Customers without
/// orders are excluded, not nulled.
pub fn first_order_periods(customers: &[Customer]) -> Vec<FirstOrder> {
    customers
        .iter()
        .filter_map(|c| {
            c.first_order_date().map(|date| FirstOrder {
                customer_id: c.id.clone(),
                year: date.year(),
                month: date.month(),
            })
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedCustomer {
    pub company_name: String,
    pub year: i32,
    pub month: u32,
    pub orders_total: Money,
}

impl fmt::Display for RankedCustomer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{:02} | {} | orders total: {}",
            self.year, self.month, self.company_name, self.orders_total
        )
    }
}

/// First-order period plus order sum, ranked ascending by year, then month,
/// then descending by order sum, then ascending by company name. The sort is
/// stable, so rows equal on all four keys keep their input order.
pub fn first_order_ranking(customers: &[Customer]) -> Vec<RankedCustomer> {
    let mut ranked: Vec<RankedCustomer> = customers
        .iter()
        .filter_map(|c| {
            c.first_order_date().map(|date| RankedCustomer {
                company_name: c.company_name.clone(),
                year: date.year(),
                month: date.month(),
                orders_total: c.orders_total(),
            })
        })
        .collect();

    ranked.sort_by(compare_ranked);
    ranked
}

fn compare_ranked(a: &RankedCustomer, b: &RankedCustomer) -> Ordering {
    a.year
        .cmp(&b.year)
        .then_with(|| a.month.cmp(&b.month))
        .then_with(|| b.orders_total.cmp(&a.orders_total))
        .then_with(|| a.company_name.cmp(&b.company_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Order;
    use chrono::NaiveDate;

    fn customer(id: &str, name: &str, orders: &[(i32, u32, u32, i64)]) -> Customer {
        Customer {
            id: id.to_string(),
            company_name: name.to_string(),
            city: "London".to_string(),
            country: "UK".to_string(),
            postal_code: Some("12345".to_string()),
            region: Some("South".to_string()),
            phone: "(71) 555-0199".to_string(),
            orders: orders
                .iter()
                .map(|(y, m, d, cents)| Order {
                    date: NaiveDate::from_ymd_opt(*y, *m, *d).unwrap(),
                    total: Money::from_cents(*cents),
                })
                .collect(),
        }
    }

    #[test]
    fn test_first_order_uses_minimum_date_not_insertion_order() {
        // Orders arrive unsorted; the earliest date wins.
        let customers = vec![customer(
            "A",
            "Alpha",
            &[(1997, 6, 1, 1000), (1996, 9, 15, 2000), (1998, 1, 2, 500)],
        )];
        let result = first_order_periods(&customers);
        assert_eq!(result.len(), 1);
        assert_eq!((result[0].year, result[0].month), (1996, 9));
    }

    #[test]
    fn test_first_order_excludes_customers_without_orders() {
        let customers = vec![customer("A", "Alpha", &[]), customer("B", "Beta", &[(1997, 3, 4, 100)])];
        let result = first_order_periods(&customers);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].customer_id, "B");
    }

    #[test]
    fn test_ranking_key_chain() {
        let customers = vec![
            customer("D", "Delta", &[(1997, 3, 1, 5_000)]),
            customer("A", "Alpha", &[(1996, 9, 1, 1_000)]),
            // Same period as Delta, larger sum: must come first within 1997-03.
            customer("C", "Charlie", &[(1997, 3, 9, 9_000)]),
            // Same period and sum as Delta: name breaks the tie.
            customer("B", "Bravo", &[(1997, 3, 20, 5_000)]),
        ];

        let result = first_order_ranking(&customers);
        let names: Vec<&str> = result.iter().map(|r| r.company_name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "Charlie", "Bravo", "Delta"]);
    }

    #[test]
    fn test_ranking_pairwise_invariant() {
        let customers = vec![
            customer("A", "Alpha", &[(1997, 1, 1, 100), (1997, 2, 1, 300)]),
            customer("B", "Beta", &[(1996, 12, 1, 700)]),
            customer("C", "Gamma", &[(1997, 1, 5, 900)]),
            customer("D", "Delta", &[(1997, 1, 9, 400)]),
        ];

        let result = first_order_ranking(&customers);
        for pair in result.windows(2) {
            let (r1, r2) = (&pair[0], &pair[1]);
            assert!((r1.year, r1.month) <= (r2.year, r2.month));
            if (r1.year, r1.month) == (r2.year, r2.month) {
                assert!(r1.orders_total >= r2.orders_total);
            }
        }
    }
}
