//! Seed data generation for the catering platform.
//!
//! This crate populates the platform's PostgreSQL schema with synthetic but
//! plausible data: user accounts, the menu catalog, orders with invoices,
//! kitchen and delivery records, meal plans, and customer feedback. It is
//! meant for development and testing environments.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use seed_data::prelude::*;
//!
//! let pool = db::connect(&DbConfig::from_env()).await?;
//! let mut rng = StdRng::seed_from_u64(42);
//!
//! let result = ScenarioBuilder::comprehensive()
//!     .with_customers(100)
//!     .with_orders(500)
//!     .build(&pool, &mut rng)
//!     .await?;
//! ```
//!
//! Steps run sequentially in foreign-key dependency order; every id a row
//! references was returned by an earlier insert in the same run.

pub mod builders;
pub mod config;
pub mod db;
pub mod generators;
pub mod models;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::builders::{ScenarioBuilder, ScenarioResult};
    pub use crate::config::{DbConfig, SeedConfig};
    pub use crate::db::{SeedError, Seeder};
    pub use crate::generators::{
        AddressGenerator, CatalogGenerator, CustomerGenerator, FeedbackGenerator,
        LogisticsGenerator, MenuGenerator, OrderGenerator, StaffGenerator, UserGenerator,
    };
    pub use crate::models::{
        ComplaintStatus, DeliveryStatus, FulfillmentStatus, InvoiceStatus, MealType, MeasureUnit,
        OrderStatus, PaymentMethod,
    };
}
