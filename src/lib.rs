pub mod config;
pub mod core;
pub mod dataset;
pub mod domain;
pub mod utils;

pub use config::CliConfig;
pub use core::drill::{drill_names, DrillParams, DrillRunner, DRILLS};
pub use dataset::Dataset;
pub use domain::model::{Customer, Money, Order, Product, Supplier};
pub use domain::ports::{DatasetProvider, RenderSink};
pub use utils::error::{DrillError, Result};
