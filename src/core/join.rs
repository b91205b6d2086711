use itertools::Itertools;
use serde::Serialize;
use std::fmt;

use crate::domain::model::{Customer, Supplier};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerSupplierMatch {
    pub customer_id: String,
    pub company_name: String,
    pub country: String,
    pub city: String,
    pub supplier_name: String,
    pub supplier_country: String,
    pub supplier_city: String,
}

impl fmt::Display for CustomerSupplierMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} ({}, {}) <-> {} ({}, {})",
            self.customer_id,
            self.company_name,
            self.city,
            self.country,
            self.supplier_name,
            self.supplier_city,
            self.supplier_country,
        )
    }
}

/// Inner equi-join of customers and suppliers on the composite
/// (country, city) key. Every matching pair produces one row; nothing is
/// deduplicated, and unmatched rows on either side contribute nothing.
pub fn customers_with_local_suppliers(
    customers: &[Customer],
    suppliers: &[Supplier],
) -> Vec<CustomerSupplierMatch> {
    customers
        .iter()
        .cartesian_product(suppliers.iter())
        .filter(|(c, s)| c.country == s.country && c.city == s.city)
        .map(|(c, s)| CustomerSupplierMatch {
            customer_id: c.id.clone(),
            company_name: c.company_name.clone(),
            country: c.country.clone(),
            city: c.city.clone(),
            supplier_name: s.name.clone(),
            supplier_country: s.country.clone(),
            supplier_city: s.city.clone(),
        })
        .collect()
}
