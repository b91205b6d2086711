use serde::Serialize;
use std::fmt;

use crate::core::{activity, aggregation, grouping, join, ordering, restriction};
use crate::domain::model::Money;
use crate::domain::ports::{DatasetProvider, RenderSink};
use crate::utils::error::{DrillError, Result};

/// Registry of drill names and their one-line descriptions, in run order.
pub const DRILLS: &[(&str, &str)] = &[
    ("numbers-below", "Numbers from the sample array below the limit"),
    ("in-stock", "Products with units in stock"),
    ("city-filter", "Customers living in the configured city"),
    ("big-spenders", "Customers whose order totals exceed the spend threshold"),
    ("supplier-join", "Customers and suppliers sharing country and city"),
    ("any-large-order", "Customers with at least one order above the order threshold"),
    ("first-order", "Year and month of each customer's first order"),
    ("first-order-ranked", "First-order periods ranked by year, month, total and name"),
    ("suspect-contact", "Customers with incomplete or unusual contact data"),
    ("category-stock", "Products by category, stock availability and stock value"),
    ("price-bands", "Products classified as Expensive, Normal or Cheap"),
    ("city-stats", "Average order totals and counts per city"),
    ("activity-by-month", "Average orders per active customer, by calendar month"),
    ("activity-by-year", "Average orders per active customer, by year"),
    ("activity-by-year-month", "Average orders per active customer, by year and month"),
];

pub fn drill_names() -> Vec<&'static str> {
    DRILLS.iter().map(|(name, _)| *name).collect()
}

/// Scalar parameters consumed by the parameterized drills.
#[derive(Debug, Clone)]
pub struct DrillParams {
    pub numbers: Vec<i32>,
    pub array_limit: i32,
    pub city: String,
    pub spend_threshold: Money,
    pub order_threshold: Money,
}

impl Default for DrillParams {
    fn default() -> Self {
        DrillParams {
            numbers: vec![5, 4, 1, 3, 9, 8, 6, 7, 2, 0],
            array_limit: 5,
            city: "London".to_string(),
            spend_threshold: Money::from_cents(410_760),
            order_threshold: Money::from_cents(100_000),
        }
    }
}

/// Executes drills against a dataset and writes each result item to the
/// render sink, either via Display or as one JSON object per line.
pub struct DrillRunner<D: DatasetProvider, S: RenderSink> {
    dataset: D,
    sink: S,
    params: DrillParams,
    json: bool,
}

impl<D: DatasetProvider, S: RenderSink> DrillRunner<D, S> {
    pub fn new(dataset: D, sink: S, params: DrillParams) -> Self {
        Self {
            dataset,
            sink,
            params,
            json: false,
        }
    }

    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    /// Hands the sink back, so tests can inspect captured output.
    pub fn into_sink(self) -> S {
        self.sink
    }

    pub fn run_all(&mut self) -> Result<()> {
        tracing::info!("Running {} drills", DRILLS.len());
        for (name, _) in DRILLS {
            self.run(name)?;
        }
        Ok(())
    }

    pub fn run(&mut self, name: &str) -> Result<()> {
        let (_, description) = DRILLS
            .iter()
            .find(|(n, _)| *n == name)
            .ok_or_else(|| DrillError::UnknownDrillError {
                name: name.to_string(),
            })?;

        tracing::debug!("Running drill: {}", name);
        self.sink.header(description);

        match name {
            "numbers-below" => {
                let result = restriction::numbers_below(&self.params.numbers, self.params.array_limit);
                emit_items(&mut self.sink, self.json, &result)?;
            }
            "in-stock" => {
                let result = restriction::products_in_stock(self.dataset.products());
                emit_items(&mut self.sink, self.json, &result)?;
            }
            "city-filter" => {
                let result = restriction::customers_in_city(self.dataset.customers(), &self.params.city);
                emit_items(&mut self.sink, self.json, &result)?;
            }
            "big-spenders" => {
                let result =
                    restriction::big_spenders(self.dataset.customers(), self.params.spend_threshold);
                emit_items(&mut self.sink, self.json, &result)?;
            }
            "supplier-join" => {
                let result = join::customers_with_local_suppliers(
                    self.dataset.customers(),
                    self.dataset.suppliers(),
                );
                emit_items(&mut self.sink, self.json, &result)?;
            }
            "any-large-order" => {
                let result = restriction::customers_with_order_above(
                    self.dataset.customers(),
                    self.params.order_threshold,
                );
                emit_items(&mut self.sink, self.json, &result)?;
            }
            "first-order" => {
                let result = ordering::first_order_periods(self.dataset.customers());
                emit_items(&mut self.sink, self.json, &result)?;
            }
            "first-order-ranked" => {
                let result = ordering::first_order_ranking(self.dataset.customers());
                emit_items(&mut self.sink, self.json, &result)?;
            }
            "suspect-contact" => {
                let result = restriction::customers_with_suspect_contact(self.dataset.customers());
                emit_items(&mut self.sink, self.json, &result)?;
            }
            "category-stock" => {
                let groups = grouping::products_by_category_and_stock(self.dataset.products());
                if self.json {
                    tracing::debug!("Rendering {} result items", groups.len());
                    for group in &groups {
                        self.sink.line(&serde_json::to_string(group)?);
                    }
                } else {
                    for group in &groups {
                        self.sink.line(&format!("category: {}", group.category));
                        for availability in &group.by_availability {
                            let label = if availability.in_stock {
                                "in stock"
                            } else {
                                "out of stock"
                            };
                            self.sink.line(&format!("  {}:", label));
                            for product in &availability.products {
                                self.sink.line(&format!("    {}", product));
                            }
                        }
                    }
                }
            }
            "price-bands" => {
                let groups = grouping::products_by_price_band(self.dataset.products());
                if self.json {
                    tracing::debug!("Rendering {} result items", groups.len());
                    for group in &groups {
                        self.sink.line(&serde_json::to_string(group)?);
                    }
                } else {
                    for group in &groups {
                        self.sink.line(&format!("band: {}", group.band));
                        for product in &group.products {
                            self.sink
                                .line(&format!("  {} - price: {}", product.name, product.unit_price));
                        }
                    }
                }
            }
            "city-stats" => {
                let result = aggregation::city_order_stats(self.dataset.customers());
                emit_items(&mut self.sink, self.json, &result)?;
            }
            "activity-by-month" => {
                let result = activity::activity_by_month(self.dataset.customers());
                emit_items(&mut self.sink, self.json, &result)?;
            }
            "activity-by-year" => {
                let result = activity::activity_by_year(self.dataset.customers());
                emit_items(&mut self.sink, self.json, &result)?;
            }
            "activity-by-year-month" => {
                let result = activity::activity_by_year_month(self.dataset.customers());
                emit_items(&mut self.sink, self.json, &result)?;
            }
            _ => {
                return Err(DrillError::UnknownDrillError {
                    name: name.to_string(),
                })
            }
        }

        Ok(())
    }
}

/// Free function rather than a method: result items may borrow from the
/// runner's dataset while the sink is written to.
fn emit_items<S: RenderSink, T: fmt::Display + Serialize>(
    sink: &mut S,
    json: bool,
    items: &[T],
) -> Result<()> {
    tracing::debug!("Rendering {} result items", items.len());
    for item in items {
        if json {
            sink.line(&serde_json::to_string(item)?);
        } else {
            sink.line(&item.to_string());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Customer, Order, Product, Supplier};
    use crate::utils::render::BufferSink;
    use chrono::NaiveDate;

    struct TestData {
        customers: Vec<Customer>,
        products: Vec<Product>,
        suppliers: Vec<Supplier>,
    }

    impl DatasetProvider for TestData {
        fn customers(&self) -> &[Customer] {
            &self.customers
        }

        fn products(&self) -> &[Product] {
            &self.products
        }

        fn suppliers(&self) -> &[Supplier] {
            &self.suppliers
        }
    }

    fn small_dataset() -> TestData {
        TestData {
            customers: vec![Customer {
                id: "LONCO".to_string(),
                company_name: "London Commodities".to_string(),
                city: "London".to_string(),
                country: "UK".to_string(),
                postal_code: Some("12345".to_string()),
                region: None,
                phone: "(71) 555-0199".to_string(),
                orders: vec![Order {
                    date: NaiveDate::from_ymd_opt(1997, 3, 4).unwrap(),
                    total: Money::from_cents(500_000),
                }],
            }],
            products: vec![Product {
                name: "Chai".to_string(),
                category: "Beverages".to_string(),
                unit_price: Money::from_cents(1_800),
                units_in_stock: 39,
            }],
            suppliers: vec![Supplier {
                name: "Exotic Liquids".to_string(),
                city: "London".to_string(),
                country: "UK".to_string(),
            }],
        }
    }

    #[test]
    fn test_unknown_drill_is_rejected() {
        let mut runner = DrillRunner::new(small_dataset(), BufferSink::new(), DrillParams::default());
        let err = runner.run("bogus").unwrap_err();
        assert!(matches!(err, DrillError::UnknownDrillError { name } if name == "bogus"));
    }

    #[test]
    fn test_run_all_renders_every_section() {
        let mut runner = DrillRunner::new(small_dataset(), BufferSink::new(), DrillParams::default());
        runner.run_all().unwrap();

        let sink = runner.into_sink();
        let headers: Vec<&String> = sink
            .lines()
            .iter()
            .filter(|l| l.starts_with("== "))
            .collect();
        assert_eq!(headers.len(), DRILLS.len());
    }

    #[test]
    fn test_single_drill_renders_result_lines() {
        let mut runner = DrillRunner::new(small_dataset(), BufferSink::new(), DrillParams::default());
        runner.run("supplier-join").unwrap();

        let sink = runner.into_sink();
        assert_eq!(sink.lines().len(), 2);
        assert!(sink.lines()[1].contains("Exotic Liquids"));
    }

    #[test]
    fn test_json_mode_emits_parseable_lines() {
        let mut runner = DrillRunner::new(small_dataset(), BufferSink::new(), DrillParams::default())
            .with_json(true);
        runner.run("big-spenders").unwrap();

        let sink = runner.into_sink();
        let payload: serde_json::Value = serde_json::from_str(&sink.lines()[1]).unwrap();
        assert_eq!(payload["customer_id"], "LONCO");
        assert_eq!(payload["orders_total"], "5000.00");
    }

    #[test]
    fn test_drill_names_match_registry() {
        let names = drill_names();
        assert_eq!(names.len(), DRILLS.len());
        assert!(names.contains(&"activity-by-year-month"));
    }
}
