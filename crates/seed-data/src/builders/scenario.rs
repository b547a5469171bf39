//! Fluent builder running a full seeding scenario.

use std::collections::HashMap;

use rand::Rng;
use rust_decimal::Decimal;
use sqlx::PgPool;
use time::OffsetDateTime;

use crate::config::SeedConfig;
use crate::db::{SeedError, Seeder};
use crate::generators::{
    AddressGenerator, CatalogGenerator, CustomerGenerator, FeedbackGenerator, LogisticsGenerator,
    MenuGenerator, OrderGenerator, StaffGenerator, UserGenerator, bind_items,
    customer_address_pairs,
};

/// Result of a full seeding run: the ids every step inserted, plus row
/// counts for the pure join tables.
#[derive(Debug, Default)]
pub struct ScenarioResult {
    pub user_ids: Vec<i64>,
    pub address_ids: Vec<i64>,
    pub customer_ids: Vec<i64>,
    pub course_ids: Vec<i64>,
    pub ingredient_ids: Vec<i64>,
    pub allergen_ids: Vec<i64>,
    pub category_ids: Vec<i64>,
    pub courier_type_ids: Vec<i64>,
    pub specialty_ids: Vec<i64>,
    pub cook_ids: Vec<i64>,
    pub courier_ids: Vec<i64>,
    pub dietician_ids: Vec<i64>,
    pub administrator_ids: Vec<i64>,
    pub order_ids: Vec<i64>,
    pub order_item_ids: Vec<i64>,
    pub invoice_ids: Vec<i64>,
    pub fulfillment_ids: Vec<i64>,
    pub delivery_ids: Vec<i64>,
    pub meal_plan_ids: Vec<i64>,
    pub meal_plan_day_ids: Vec<i64>,
    pub meal_plan_item_ids: Vec<i64>,
    pub daily_menu_ids: Vec<i64>,
    pub daily_menu_item_ids: Vec<i64>,
    pub complaint_ids: Vec<i64>,
    pub opinion_ids: Vec<i64>,

    pub customer_address_count: u64,
    pub course_ingredient_count: u64,
    pub allergen_ingredient_count: u64,
    pub course_category_count: u64,
    pub cook_specialty_count: u64,
}

/// Builder for a complete seeding scenario.
///
/// Steps run in dependency order: every foreign key a generated row carries
/// comes from the ids an earlier step returned.
///
/// # Example
///
/// ```rust,ignore
/// let result = ScenarioBuilder::comprehensive()
///     .with_customers(100)
///     .with_orders(500)
///     .build(&pool, &mut rng)
///     .await?;
/// ```
pub struct ScenarioBuilder {
    config: SeedConfig,
    truncate_first: bool,
    generate_meal_plans: bool,
    generate_feedback: bool,
}

impl Default for ScenarioBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ScenarioBuilder {
    /// Creates a new scenario builder with default settings.
    pub fn new() -> Self {
        Self {
            config: SeedConfig::default(),
            truncate_first: true,
            generate_meal_plans: true,
            generate_feedback: true,
        }
    }

    /// Creates a builder covering every entity with the default counts.
    pub fn comprehensive() -> Self {
        Self::new()
    }

    /// Replaces the whole seed configuration.
    pub fn with_config(mut self, config: SeedConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the number of customers.
    pub fn with_customers(mut self, count: usize) -> Self {
        self.config.customer_count = count;
        self
    }

    /// Sets the number of courses in the catalog.
    pub fn with_courses(mut self, count: usize) -> Self {
        self.config.course_count = count;
        self
    }

    /// Sets the number of ingredients in the catalog.
    pub fn with_ingredients(mut self, count: usize) -> Self {
        self.config.ingredient_count = count;
        self
    }

    /// Sets the number of orders to place.
    pub fn with_orders(mut self, count: usize) -> Self {
        self.config.order_count = count;
        self
    }

    /// Sets the number of meal plans.
    pub fn with_meal_plan_count(mut self, count: usize) -> Self {
        self.config.meal_plan_count = count;
        self
    }

    /// Sets how many consecutive daily menus to create.
    pub fn with_daily_menu_days(mut self, days: usize) -> Self {
        self.config.daily_menu_days = days;
        self
    }

    /// Enables or disables the meal plan and daily menu steps.
    pub fn with_meal_plans(mut self, enabled: bool) -> Self {
        self.generate_meal_plans = enabled;
        self
    }

    /// Enables or disables the complaint and opinion steps.
    pub fn with_feedback(mut self, enabled: bool) -> Self {
        self.generate_feedback = enabled;
        self
    }

    /// Enables or disables truncating all tables before seeding.
    pub fn with_truncate(mut self, enabled: bool) -> Self {
        self.truncate_first = enabled;
        self
    }

    /// Runs the scenario against the database.
    pub async fn build(
        &self,
        pool: &PgPool,
        rng: &mut impl Rng,
    ) -> Result<ScenarioResult, SeedError> {
        let config = &self.config;
        let base_time = OffsetDateTime::now_utc();
        let seeder = Seeder::new(pool.clone()).with_batch_size(config.batch_size);

        let mut result = ScenarioResult::default();

        if self.truncate_first {
            seeder.truncate_all().await?;
        }

        // User accounts for every role, then split the returned ids so each
        // role seeder gets its own slice.
        let mut user_gen = UserGenerator::new();
        let users = user_gen.generate_batch(config.user_count(), base_time, rng);
        result.user_ids = seeder.seed_users(&users).await?;

        let mut offset = 0;
        let customer_user_ids = take_role(&result.user_ids, &mut offset, config.customer_count);
        let cook_user_ids = take_role(&result.user_ids, &mut offset, config.cook_count);
        let courier_user_ids = take_role(&result.user_ids, &mut offset, config.courier_count);
        let dietician_user_ids = take_role(&result.user_ids, &mut offset, config.dietician_count);
        let administrator_user_ids =
            take_role(&result.user_ids, &mut offset, config.administrator_count);

        // Addresses, then customers referencing both
        let address_gen = AddressGenerator::new();
        let addresses = address_gen.generate_batch(config.customer_count * 2, base_time, rng);
        result.address_ids = seeder.seed_addresses(&addresses).await?;

        let customer_gen = CustomerGenerator {
            addresses_per_customer: config.addresses_per_customer,
            ..Default::default()
        };
        let customers = customer_gen.generate_batch(&customer_user_ids, &result.address_ids, rng);
        result.customer_ids = seeder.seed_customers(&customers).await?;
        result.customer_address_count = seeder
            .seed_customer_addresses(&customer_address_pairs(&result.customer_ids, &customers))
            .await?;

        // Menu catalog
        let catalog_gen = CatalogGenerator::new();
        let categories = catalog_gen.generate_categories(rng);
        result.category_ids = seeder.seed_categories(&categories).await?;

        let allergens = catalog_gen.generate_allergens(rng);
        result.allergen_ids = seeder.seed_allergens(&allergens).await?;

        let courses = catalog_gen.generate_courses(config.course_count, base_time, rng);
        result.course_ids = seeder.seed_courses(&courses).await?;

        let ingredients = catalog_gen.generate_ingredients(config.ingredient_count, rng);
        result.ingredient_ids = seeder.seed_ingredients(&ingredients).await?;

        result.course_ingredient_count = seeder
            .seed_course_ingredients(&catalog_gen.course_ingredient_pairs(
                &result.course_ids,
                &result.ingredient_ids,
                rng,
            ))
            .await?;
        result.allergen_ingredient_count = seeder
            .seed_allergen_ingredients(&catalog_gen.allergen_ingredient_pairs(
                &result.allergen_ids,
                &result.ingredient_ids,
                rng,
            ))
            .await?;
        result.course_category_count = seeder
            .seed_course_categories(&catalog_gen.course_category_pairs(
                &result.course_ids,
                &result.category_ids,
                rng,
            ))
            .await?;

        // Staff
        let mut staff_gen = StaffGenerator::new();
        let courier_types = staff_gen.generate_courier_types(rng);
        result.courier_type_ids = seeder.seed_courier_types(&courier_types).await?;

        let specialties = staff_gen.generate_specialties(rng);
        result.specialty_ids = seeder.seed_specialties(&specialties).await?;

        let cooks = staff_gen.generate_cooks(&cook_user_ids, base_time, rng);
        result.cook_ids = seeder.seed_cooks(&cooks).await?;
        result.cook_specialty_count = seeder
            .seed_cook_specialties(&staff_gen.cook_specialty_pairs(
                &result.cook_ids,
                &result.specialty_ids,
                rng,
            ))
            .await?;

        let couriers = staff_gen.generate_couriers(
            &courier_user_ids,
            &result.courier_type_ids,
            base_time,
            rng,
        );
        result.courier_ids = seeder.seed_couriers(&couriers).await?;

        let dieticians = staff_gen.generate_dieticians(&dietician_user_ids, base_time, rng);
        result.dietician_ids = seeder.seed_dieticians(&dieticians).await?;

        let administrators =
            staff_gen.generate_administrators(&administrator_user_ids, base_time, rng);
        result.administrator_ids = seeder.seed_administrators(&administrators).await?;

        // Orders, their items, and invoices
        let mut order_gen = OrderGenerator::new();
        let orders = if config.order_count > 0 && !result.customer_ids.is_empty() {
            let course_prices: Vec<(i64, Decimal)> = result
                .course_ids
                .iter()
                .zip(courses.iter())
                .map(|(&id, course)| (id, course.price))
                .collect();

            order_gen.generate_batch(
                config.order_count,
                &result.customer_ids,
                &course_prices,
                &result.address_ids,
                base_time,
                rng,
            )
        } else {
            Vec::new()
        };
        result.order_ids = seeder.seed_orders(&orders).await?;

        let items = bind_items(&orders, &result.order_ids);
        result.order_item_ids = seeder.seed_order_items(&items).await?;

        let buyer_names: HashMap<i64, String> = result
            .customer_ids
            .iter()
            .zip(users.iter())
            .map(|(&customer_id, user)| (customer_id, format!("{} {}", user.name, user.surname)))
            .collect();
        let invoices = order_gen.generate_invoices(&orders, &result.order_ids, &buyer_names, rng);
        result.invoice_ids = seeder.seed_invoices(&invoices).await?;

        // Kitchen and delivery records
        let logistics_gen = LogisticsGenerator::new();
        if !result.cook_ids.is_empty() {
            let fulfillments = logistics_gen.generate_fulfillments(
                &result.order_item_ids,
                &result.cook_ids,
                base_time,
                rng,
            );
            result.fulfillment_ids = seeder.seed_fulfillments(&fulfillments).await?;
        }
        if !result.courier_ids.is_empty() {
            let deliveries = logistics_gen.generate_deliveries(
                &result.order_ids,
                &result.courier_ids,
                base_time,
                rng,
            );
            result.delivery_ids = seeder.seed_deliveries(&deliveries).await?;
        }

        // Meal plans and daily menus
        if self.generate_meal_plans {
            let menu_gen = MenuGenerator::new();

            if !result.dietician_ids.is_empty() && !result.customer_ids.is_empty() {
                let meal_plans = menu_gen.generate_meal_plans(
                    config.meal_plan_count,
                    &result.dietician_ids,
                    &result.customer_ids,
                    base_time,
                    rng,
                );
                result.meal_plan_ids = seeder.seed_meal_plans(&meal_plans).await?;

                let days = menu_gen.generate_plan_days(&result.meal_plan_ids, rng);
                result.meal_plan_day_ids = seeder.seed_meal_plan_days(&days).await?;

                let plan_items = menu_gen.generate_plan_items(
                    &result.meal_plan_day_ids,
                    &result.course_ids,
                    rng,
                );
                result.meal_plan_item_ids = seeder.seed_meal_plan_items(&plan_items).await?;
            }

            let menus = menu_gen.generate_daily_menus(config.daily_menu_days, base_time, rng);
            result.daily_menu_ids = seeder.seed_daily_menus(&menus).await?;

            let menu_items =
                menu_gen.generate_menu_items(&result.daily_menu_ids, &result.course_ids, rng);
            result.daily_menu_item_ids = seeder.seed_daily_menu_items(&menu_items).await?;
        }

        // Complaints and opinions
        if self.generate_feedback {
            let feedback_gen = FeedbackGenerator::new();

            let customer_by_order: Vec<i64> = orders.iter().map(|o| o.customer_id).collect();
            let complaints = feedback_gen.generate_complaints(
                &result.order_ids,
                &customer_by_order,
                &result.course_ids,
                base_time,
                rng,
            );
            result.complaint_ids = seeder.seed_complaints(&complaints).await?;

            let opinions = feedback_gen.generate_opinions(
                &result.course_ids,
                &result.customer_ids,
                base_time,
                rng,
            );
            result.opinion_ids = seeder.seed_opinions(&opinions).await?;
        }

        Ok(result)
    }
}

/// Takes the next `count` ids for a role, advancing the offset.
fn take_role(user_ids: &[i64], offset: &mut usize, count: usize) -> Vec<i64> {
    let slice = user_ids[*offset..*offset + count].to_vec();
    *offset += count;
    slice
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_role_splits_without_overlap() {
        let ids: Vec<i64> = (1..=10).collect();
        let mut offset = 0;

        let first = take_role(&ids, &mut offset, 4);
        let second = take_role(&ids, &mut offset, 6);

        assert_eq!(first, vec![1, 2, 3, 4]);
        assert_eq!(second, vec![5, 6, 7, 8, 9, 10]);
        assert_eq!(offset, 10);
    }

    #[test]
    fn test_builder_setters_update_config() {
        let builder = ScenarioBuilder::comprehensive()
            .with_customers(5)
            .with_courses(7)
            .with_orders(11)
            .with_feedback(false);

        assert_eq!(builder.config.customer_count, 5);
        assert_eq!(builder.config.course_count, 7);
        assert_eq!(builder.config.order_count, 11);
        assert!(!builder.generate_feedback);
    }
}
