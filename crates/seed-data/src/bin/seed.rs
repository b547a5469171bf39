//! Default seed script - fills every table with a comprehensive data set
//!
//! Run with:
//! ```
//! cargo run -p seed-data --bin seed
//! ```

use rand::SeedableRng;
use rand::rngs::StdRng;
use seed_data::builders::ScenarioBuilder;
use seed_data::config::{DbConfig, SeedConfig};
use seed_data::db;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = SeedConfig::default();
    let pool = db::connect(&DbConfig::from_env()).await?;

    tracing::info!("Connected to database");

    // Reproducible data
    let mut rng = StdRng::seed_from_u64(config.rng_seed);

    let result = ScenarioBuilder::comprehensive()
        .with_config(config)
        .build(&pool, &mut rng)
        .await?;

    // Summary output
    tracing::info!("Seed completed!");
    tracing::info!("  Users: {}", result.user_ids.len());
    tracing::info!("  Customers: {}", result.customer_ids.len());
    tracing::info!("  Addresses: {}", result.address_ids.len());
    tracing::info!("  Courses: {}", result.course_ids.len());
    tracing::info!("  Ingredients: {}", result.ingredient_ids.len());
    tracing::info!("  Orders: {}", result.order_ids.len());
    tracing::info!("  Order items: {}", result.order_item_ids.len());
    tracing::info!("  Invoices: {}", result.invoice_ids.len());
    tracing::info!("  Fulfillments: {}", result.fulfillment_ids.len());
    tracing::info!("  Deliveries: {}", result.delivery_ids.len());
    tracing::info!("  Meal plans: {}", result.meal_plan_ids.len());
    tracing::info!("  Daily menus: {}", result.daily_menu_ids.len());
    tracing::info!("  Complaints: {}", result.complaint_ids.len());
    tracing::info!("  Opinions: {}", result.opinion_ids.len());

    Ok(())
}
