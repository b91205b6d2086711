use itertools::Itertools;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

use crate::domain::model::{Money, Product};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AvailabilityGroup {
    pub in_stock: bool,
    pub products: Vec<Product>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryGroup {
    pub category: String,
    pub by_availability: Vec<AvailabilityGroup>,
}

/// Products grouped by category, split by stock availability within each
/// category, innermost products ordered ascending by stock value
/// (unit price x units in stock). Categories come out in ascending name
/// order; within a category the in-stock group precedes the out-of-stock
/// one, and empty sub-groups are omitted.
pub fn products_by_category_and_stock(products: &[Product]) -> Vec<CategoryGroup> {
    let mut by_category: BTreeMap<&str, Vec<&Product>> = BTreeMap::new();
    for product in products {
        by_category.entry(&product.category).or_default().push(product);
    }

    by_category
        .into_iter()
        .map(|(category, members)| {
            let by_availability = [true, false]
                .into_iter()
                .filter_map(|in_stock| {
                    let members: Vec<Product> = members
                        .iter()
                        .copied()
                        .filter(|p| (p.units_in_stock > 0) == in_stock)
                        .sorted_by_key(|p| p.stock_value())
                        .cloned()
                        .collect();
                    (!members.is_empty()).then_some(AvailabilityGroup {
                        in_stock,
                        products: members,
                    })
                })
                .collect();

            CategoryGroup {
                category: category.to_string(),
                by_availability,
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum PriceBand {
    Expensive,
    Normal,
    Cheap,
}

impl PriceBand {
    /// Band boundaries: strictly above 45.00 is Expensive, strictly above
    /// 15.00 is Normal, everything else (15.00 itself included) is Cheap.
    pub fn classify(price: Money) -> PriceBand {
        if price > Money::from_cents(4_500) {
            PriceBand::Expensive
        } else if price > Money::from_cents(1_500) {
            PriceBand::Normal
        } else {
            PriceBand::Cheap
        }
    }
}

impl fmt::Display for PriceBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PriceBand::Expensive => "Expensive",
            PriceBand::Normal => "Normal",
            PriceBand::Cheap => "Cheap",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceBandGroup {
    pub band: PriceBand,
    pub products: Vec<Product>,
}

/// Products grouped into the three price bands. Bands come out in
/// Expensive, Normal, Cheap order; empty bands are omitted; members keep
/// dataset order.
pub fn products_by_price_band(products: &[Product]) -> Vec<PriceBandGroup> {
    let mut by_band: BTreeMap<PriceBand, Vec<Product>> = BTreeMap::new();
    for product in products {
        by_band
            .entry(PriceBand::classify(product.unit_price))
            .or_default()
            .push(product.clone());
    }

    by_band
        .into_iter()
        .map(|(band, products)| PriceBandGroup { band, products })
        .collect()
}
