//! Configuration types for seeding runs.

use serde::{Deserialize, Serialize};
use sqlx::postgres::PgConnectOptions;

/// Database connection settings, read from the environment.
///
/// `DATABASE_URL` takes precedence when set; otherwise the connection is
/// assembled from the individual `DB_*` variables with local-development
/// defaults.
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub database: String,
    pub user: String,
    pub password: String,
}

impl DbConfig {
    /// Reads connection settings from the environment.
    pub fn from_env() -> Self {
        let var = |key: &str, default: &str| {
            std::env::var(key).unwrap_or_else(|_| default.to_string())
        };

        Self {
            url: std::env::var("DATABASE_URL").ok(),
            host: var("DB_HOST", "localhost"),
            port: var("DB_PORT", "5432").parse().unwrap_or(5432),
            database: var("DB_NAME", "catering"),
            user: var("DB_USER", "catering_user"),
            password: var("DB_PASSWORD", "catering_password"),
        }
    }

    /// Builds connect options, preferring the full URL when present.
    pub fn connect_options(&self) -> Result<PgConnectOptions, sqlx::Error> {
        if let Some(url) = &self.url {
            return url.parse();
        }

        Ok(PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .database(&self.database)
            .username(&self.user)
            .password(&self.password))
    }
}

/// Row counts and knobs for a full seeding run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Number of customer accounts to create.
    pub customer_count: usize,
    /// Number of cook accounts to create.
    pub cook_count: usize,
    /// Number of courier accounts to create.
    pub courier_count: usize,
    /// Number of dietician accounts to create.
    pub dietician_count: usize,
    /// Number of administrator accounts to create.
    pub administrator_count: usize,

    /// Number of courses in the menu catalog.
    pub course_count: usize,
    /// Number of ingredients in the catalog.
    pub ingredient_count: usize,

    /// Number of orders to place.
    pub order_count: usize,
    /// Number of meal plans assigned by dieticians.
    pub meal_plan_count: usize,
    /// Number of consecutive daily menus (one per day, counting back from today).
    pub daily_menu_days: usize,

    /// Addresses assigned to each customer (min, max).
    pub addresses_per_customer: (usize, usize),

    /// Batch size for bulk insert statements.
    pub batch_size: usize,
    /// Seed for the run's random number generator.
    pub rng_seed: u64,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            customer_count: 50,
            cook_count: 8,
            courier_count: 10,
            dietician_count: 4,
            administrator_count: 2,
            course_count: 100,
            ingredient_count: 150,
            order_count: 200,
            meal_plan_count: 20,
            daily_menu_days: 30,
            addresses_per_customer: (1, 3),
            batch_size: 100,
            rng_seed: 42,
        }
    }
}

impl SeedConfig {
    /// Total user rows across all roles.
    pub fn user_count(&self) -> usize {
        self.customer_count
            + self.cook_count
            + self.courier_count
            + self.dietician_count
            + self.administrator_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_count_sums_roles() {
        let config = SeedConfig {
            customer_count: 10,
            cook_count: 2,
            courier_count: 3,
            dietician_count: 1,
            administrator_count: 1,
            ..Default::default()
        };
        assert_eq!(config.user_count(), 17);
    }

    #[test]
    fn test_connect_options_from_components() {
        let config = DbConfig {
            url: None,
            host: "db.internal".into(),
            port: 5433,
            database: "catering".into(),
            user: "seed".into(),
            password: "secret".into(),
        };
        let options = config.connect_options().unwrap();
        assert_eq!(options.get_host(), "db.internal");
        assert_eq!(options.get_port(), 5433);
    }
}
