use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::domain::model::{Customer, Money, Order, Product, Supplier};
use crate::domain::ports::DatasetProvider;
use crate::utils::error::{DrillError, Result};

/// The static in-memory dataset. Built once, read by every drill, never
/// mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    pub customers: Vec<Customer>,
    pub products: Vec<Product>,
    pub suppliers: Vec<Supplier>,
}

impl DatasetProvider for Dataset {
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

impl Dataset {
    /// Loads a dataset from a JSON file and validates it once. Drills assume
    /// a valid dataset and never re-check.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let dataset: Dataset = serde_json::from_str(content)?;
        dataset.validate()?;
        Ok(dataset)
    }

    fn validate(&self) -> Result<()> {
        for customer in &self.customers {
            if customer.id.trim().is_empty() {
                return Err(DrillError::DatasetError {
                    message: format!(
                        "customer {:?} has an empty identifier",
                        customer.company_name
                    ),
                });
            }
            for order in &customer.orders {
                if order.total < Money::ZERO {
                    return Err(DrillError::DatasetError {
                        message: format!(
                            "customer {} has a negative order total: {}",
                            customer.id, order.total
                        ),
                    });
                }
            }
        }
        for product in &self.products {
            if product.name.trim().is_empty() {
                return Err(DrillError::DatasetError {
                    message: format!("product in category {:?} has an empty name", product.category),
                });
            }
        }
        Ok(())
    }

    /// The embedded sample dataset: a handful of customers across several
    /// countries with order histories, products spanning categories and
    /// price bands, and suppliers overlapping some customer cities.
    pub fn sample() -> Dataset {
        Dataset {
            customers: vec![
                customer(
                    "ALFKI",
                    "Alfreds Futterkiste",
                    "Berlin",
                    "Germany",
                    Some("12209"),
                    None,
                    "030-0074321",
                    &[
                        (1997, 8, 25, 81_450),
                        (1997, 10, 3, 87_800),
                        (1998, 1, 15, 93_350),
                    ],
                ),
                customer(
                    "BONAP",
                    "Bon app'",
                    "Marseille",
                    "France",
                    Some("13008"),
                    None,
                    "91.24.45.40",
                    &[
                        (1996, 10, 16, 47_120),
                        (1996, 11, 14, 42_430),
                        (1997, 4, 7, 192_500),
                        (1998, 3, 16, 18_040),
                    ],
                ),
                customer(
                    "AROUT",
                    "Around the Horn",
                    "London",
                    "UK",
                    Some("WA1 1DP"),
                    None,
                    "(171) 555-7788",
                    &[
                        (1996, 11, 26, 110_120),
                        (1997, 4, 22, 201_860),
                        (1998, 2, 10, 154_960),
                    ],
                ),
                customer(
                    "BSBEV",
                    "B's Beverages",
                    "London",
                    "UK",
                    Some("EC2 5NT"),
                    None,
                    "(171) 555-1212",
                    &[(1997, 2, 26, 8_900), (1997, 8, 11, 47_975)],
                ),
                customer(
                    "LAZYK",
                    "Lazy K Kountry Store",
                    "Walla Walla",
                    "USA",
                    Some("99362"),
                    Some("WA"),
                    "(509) 555-7969",
                    &[(1997, 5, 22, 35_700)],
                ),
                customer(
                    "OLDWO",
                    "Old World Delicatessen",
                    "Anchorage",
                    "USA",
                    Some("99508"),
                    Some("AK"),
                    "(907) 555-7584",
                    &[
                        (1996, 12, 23, 137_600),
                        (1997, 3, 4, 212_292),
                        (1997, 3, 28, 36_000),
                        (1998, 4, 20, 105_060),
                    ],
                ),
                customer(
                    "SPECD",
                    "Spécialités du monde",
                    "Paris",
                    "France",
                    Some("75012"),
                    None,
                    "(1) 42.34.22.66",
                    &[(1997, 6, 11, 58_200), (1997, 9, 1, 53_860)],
                ),
                customer(
                    "NORTS",
                    "North/South",
                    "London",
                    "UK",
                    Some("SW7 1RZ"),
                    None,
                    "(171) 555-7733",
                    &[],
                ),
            ],
            products: vec![
                product("Chai", "Beverages", 1_800, 39),
                product("Chang", "Beverages", 1_900, 17),
                product("Chartreuse verte", "Beverages", 1_800, 0),
                product("Côte de Blaye", "Beverages", 26_350, 17),
                product("Aniseed Syrup", "Condiments", 1_000, 13),
                product("Genen Shouyu", "Condiments", 1_500, 39),
                product("Vegie-spread", "Condiments", 4_390, 24),
                product("Carnarvon Tigers", "Seafood", 6_250, 42),
                product("Ikura", "Seafood", 3_100, 31),
                product("Konbu", "Seafood", 600, 24),
                product("Alice Mutton", "Meat/Poultry", 3_900, 0),
                product("Mishi Kobe Niku", "Meat/Poultry", 9_700, 29),
            ],
            suppliers: vec![
                supplier("Exotic Liquids", "London", "UK"),
                supplier("Aux joyeux ecclésiastiques", "Paris", "France"),
                supplier("Plutzer Lebensmittelgroßmärkte AG", "Berlin", "Germany"),
                supplier("New Orleans Cajun Delights", "New Orleans", "USA"),
                supplier("Tokyo Traders", "Tokyo", "Japan"),
            ],
        }
    }
}

fn customer(
    id: &str,
    company_name: &str,
    city: &str,
    country: &str,
    postal_code: Option<&str>,
    region: Option<&str>,
    phone: &str,
    orders: &[(i32, u32, u32, i64)],
) -> Customer {
    Customer {
        id: id.to_string(),
        company_name: company_name.to_string(),
        city: city.to_string(),
        country: country.to_string(),
        postal_code: postal_code.map(str::to_string),
        region: region.map(str::to_string),
        phone: phone.to_string(),
        orders: orders
            .iter()
            .map(|(year, month, day, cents)| Order {
                date: date(*year, *month, *day),
                total: Money::from_cents(*cents),
            })
            .collect(),
    }
}

fn product(name: &str, category: &str, price_cents: i64, stock: u32) -> Product {
    Product {
        name: name.to_string(),
        category: category.to_string(),
        unit_price: Money::from_cents(price_cents),
        units_in_stock: stock,
    }
}

fn supplier(name: &str, city: &str, country: &str) -> Supplier {
    Supplier {
        name: name.to_string(),
        city: city.to_string(),
        country: country.to_string(),
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("sample dates are valid")
}
