pub mod activity;
pub mod aggregation;
pub mod drill;
pub mod grouping;
pub mod join;
pub mod ordering;
pub mod restriction;

pub use crate::domain::model::{Customer, Money, Order, Product, Supplier};
pub use crate::domain::ports::{DatasetProvider, RenderSink};
pub use crate::utils::error::Result;
