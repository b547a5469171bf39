//! Database seeding utilities.
//!
//! Every seeding method runs inside its own transaction: the rows are
//! bulk-inserted in batches, and any database error aborts the transaction
//! (rolled back on drop) and propagates to the caller. There is no retry
//! and no partial success.

use sqlx::{PgPool, Postgres, QueryBuilder, Transaction};
use thiserror::Error;
use tracing::info;

use crate::generators::{
    GeneratedAddress, GeneratedAdministrator, GeneratedAllergen, GeneratedCategory,
    GeneratedComplaint, GeneratedCook, GeneratedCourier, GeneratedCourierType, GeneratedCourse,
    GeneratedCustomer, GeneratedDailyMenu, GeneratedDailyMenuItem, GeneratedDelivery,
    GeneratedDietician, GeneratedFulfillment, GeneratedIngredient, GeneratedInvoice,
    GeneratedMealPlan, GeneratedMealPlanDay, GeneratedMealPlanItem, GeneratedOpinion,
    GeneratedOrder, GeneratedOrderItem, GeneratedSpecialty, GeneratedUser,
};

/// All seeded tables, children before the tables they reference.
const TABLES: [&str; 30] = [
    "opinion",
    "complaint",
    "daily_menu_item",
    "daily_menu",
    "meal_plan_item",
    "meal_plan_day",
    "meal_plan",
    "delivery",
    "fulfillment",
    "invoice",
    "order_item",
    "orders",
    "cook_specialty",
    "cook",
    "courier",
    "dietician",
    "administrator",
    "specialty",
    "courier_type",
    "course_category",
    "allergen_ingredient",
    "course_ingredient",
    "category",
    "allergen",
    "ingredient",
    "course",
    "customer_address",
    "customer",
    "address",
    "users",
];

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Database seeder for inserting generated rows in bulk.
pub struct Seeder {
    pool: PgPool,
    batch_size: usize,
}

impl Seeder {
    /// Creates a new seeder with the given database pool.
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            batch_size: 100,
        }
    }

    /// Sets the batch size for bulk insert statements.
    pub fn with_batch_size(mut self, size: usize) -> Self {
        self.batch_size = size;
        self
    }

    /// Truncates every seeded table, restarting identity sequences.
    pub async fn truncate_all(&self) -> Result<(), SeedError> {
        info!("Truncating {} tables...", TABLES.len());

        let mut tx = self.pool.begin().await?;
        for table in TABLES {
            sqlx::query(&format!(
                "TRUNCATE TABLE {table} RESTART IDENTITY CASCADE"
            ))
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;

        info!("All tables truncated");
        Ok(())
    }

    /// Selects the most recently assigned ids when an insert did not report
    /// them directly, restoring insertion order.
    async fn last_inserted_ids(
        tx: &mut Transaction<'_, Postgres>,
        table: &str,
        count: usize,
    ) -> Result<Vec<i64>, SeedError> {
        let sql = format!("SELECT id FROM {table} ORDER BY id DESC LIMIT {count}");
        let mut ids: Vec<i64> = sqlx::query_scalar(&sql).fetch_all(&mut **tx).await?;
        ids.reverse();
        Ok(ids)
    }

    /// Seeds user accounts, returning their assigned ids.
    pub async fn seed_users(&self, users: &[GeneratedUser]) -> Result<Vec<i64>, SeedError> {
        info!("Seeding {} users...", users.len());
        if users.is_empty() {
            return Ok(Vec::new());
        }

        let mut tx = self.pool.begin().await?;
        let mut ids = Vec::with_capacity(users.len());

        for chunk in users.chunks(self.batch_size) {
            let mut qb: QueryBuilder<Postgres> = QueryBuilder::new(
                "INSERT INTO users (login, email, password_hash, name, surname, \
                 phone_number, date_created, date_removed, last_login) ",
            );
            qb.push_values(chunk, |mut b, user| {
                b.push_bind(&user.login)
                    .push_bind(&user.email)
                    .push_bind(&user.password_hash)
                    .push_bind(&user.name)
                    .push_bind(&user.surname)
                    .push_bind(&user.phone_number)
                    .push_bind(user.date_created)
                    .push_bind(user.date_removed)
                    .push_bind(user.last_login);
            });
            qb.push(" RETURNING id");
            ids.extend(qb.build_query_scalar::<i64>().fetch_all(&mut *tx).await?);
        }

        if ids.len() != users.len() {
            ids = Self::last_inserted_ids(&mut tx, "users", users.len()).await?;
        }
        tx.commit().await?;

        info!("Seeded {} users", ids.len());
        Ok(ids)
    }

    /// Seeds addresses, returning their assigned ids.
    pub async fn seed_addresses(
        &self,
        addresses: &[GeneratedAddress],
    ) -> Result<Vec<i64>, SeedError> {
        info!("Seeding {} addresses...", addresses.len());
        if addresses.is_empty() {
            return Ok(Vec::new());
        }

        let mut tx = self.pool.begin().await?;
        let mut ids = Vec::with_capacity(addresses.len());

        for chunk in addresses.chunks(self.batch_size) {
            let mut qb: QueryBuilder<Postgres> = QueryBuilder::new(
                "INSERT INTO address (country, region, postal_code, city, street_name, \
                 street_number, apartment, created_at, deleted_at) ",
            );
            qb.push_values(chunk, |mut b, address| {
                b.push_bind(&address.country)
                    .push_bind(&address.region)
                    .push_bind(&address.postal_code)
                    .push_bind(&address.city)
                    .push_bind(&address.street_name)
                    .push_bind(&address.street_number)
                    .push_bind(&address.apartment)
                    .push_bind(address.created_at)
                    .push_bind(address.deleted_at);
            });
            qb.push(" RETURNING id");
            ids.extend(qb.build_query_scalar::<i64>().fetch_all(&mut *tx).await?);
        }

        if ids.len() != addresses.len() {
            ids = Self::last_inserted_ids(&mut tx, "address", addresses.len()).await?;
        }
        tx.commit().await?;

        info!("Seeded {} addresses", ids.len());
        Ok(ids)
    }

    /// Seeds customers, returning their assigned ids.
    pub async fn seed_customers(
        &self,
        customers: &[GeneratedCustomer],
    ) -> Result<Vec<i64>, SeedError> {
        info!("Seeding {} customers...", customers.len());
        if customers.is_empty() {
            return Ok(Vec::new());
        }

        let mut tx = self.pool.begin().await?;
        let mut ids = Vec::with_capacity(customers.len());

        for chunk in customers.chunks(self.batch_size) {
            let mut qb: QueryBuilder<Postgres> =
                QueryBuilder::new("INSERT INTO customer (user_id, default_address_id) ");
            qb.push_values(chunk, |mut b, customer| {
                b.push_bind(customer.user_id)
                    .push_bind(customer.default_address_id);
            });
            qb.push(" RETURNING id");
            ids.extend(qb.build_query_scalar::<i64>().fetch_all(&mut *tx).await?);
        }

        if ids.len() != customers.len() {
            ids = Self::last_inserted_ids(&mut tx, "customer", customers.len()).await?;
        }
        tx.commit().await?;

        info!("Seeded {} customers", ids.len());
        Ok(ids)
    }

    /// Seeds customer-address links, returning the inserted row count.
    pub async fn seed_customer_addresses(&self, pairs: &[(i64, i64)]) -> Result<u64, SeedError> {
        info!("Seeding {} customer-address links...", pairs.len());
        if pairs.is_empty() {
            return Ok(0);
        }

        let mut tx = self.pool.begin().await?;
        let mut inserted = 0;

        for chunk in pairs.chunks(self.batch_size) {
            let mut qb: QueryBuilder<Postgres> =
                QueryBuilder::new("INSERT INTO customer_address (customer_id, address_id) ");
            qb.push_values(chunk, |mut b, &(customer_id, address_id)| {
                b.push_bind(customer_id).push_bind(address_id);
            });
            inserted += qb.build().execute(&mut *tx).await?.rows_affected();
        }
        tx.commit().await?;

        Ok(inserted)
    }

    /// Seeds courses, returning their assigned ids.
    pub async fn seed_courses(&self, courses: &[GeneratedCourse]) -> Result<Vec<i64>, SeedError> {
        info!("Seeding {} courses...", courses.len());
        if courses.is_empty() {
            return Ok(Vec::new());
        }

        let mut tx = self.pool.begin().await?;
        let mut ids = Vec::with_capacity(courses.len());

        for chunk in courses.chunks(self.batch_size) {
            let mut qb: QueryBuilder<Postgres> = QueryBuilder::new(
                "INSERT INTO course (name, description, price, protein_100g, calories_100g, \
                 carbohydrates_100g, fat_100g, created_at, updated_at) ",
            );
            qb.push_values(chunk, |mut b, course| {
                b.push_bind(&course.name)
                    .push_bind(&course.description)
                    .push_bind(course.price)
                    .push_bind(course.protein_100g)
                    .push_bind(course.calories_100g)
                    .push_bind(course.carbohydrates_100g)
                    .push_bind(course.fat_100g)
                    .push_bind(course.created_at)
                    .push_bind(course.updated_at);
            });
            qb.push(" RETURNING id");
            ids.extend(qb.build_query_scalar::<i64>().fetch_all(&mut *tx).await?);
        }

        if ids.len() != courses.len() {
            ids = Self::last_inserted_ids(&mut tx, "course", courses.len()).await?;
        }
        tx.commit().await?;

        info!("Seeded {} courses", ids.len());
        Ok(ids)
    }

    /// Seeds ingredients, returning their assigned ids.
    pub async fn seed_ingredients(
        &self,
        ingredients: &[GeneratedIngredient],
    ) -> Result<Vec<i64>, SeedError> {
        info!("Seeding {} ingredients...", ingredients.len());
        if ingredients.is_empty() {
            return Ok(Vec::new());
        }

        let mut tx = self.pool.begin().await?;
        let mut ids = Vec::with_capacity(ingredients.len());

        for chunk in ingredients.chunks(self.batch_size) {
            let mut qb: QueryBuilder<Postgres> = QueryBuilder::new(
                "INSERT INTO ingredient (name, description, calories_100g, unit_of_measure, \
                 protein_100g, fat_100g, carbohydrates_100g) ",
            );
            qb.push_values(chunk, |mut b, ingredient| {
                b.push_bind(&ingredient.name)
                    .push_bind(&ingredient.description)
                    .push_bind(ingredient.calories_100g)
                    .push_bind(ingredient.unit_of_measure.as_str())
                    .push_bind(ingredient.protein_100g)
                    .push_bind(ingredient.fat_100g)
                    .push_bind(ingredient.carbohydrates_100g);
            });
            qb.push(" RETURNING id");
            ids.extend(qb.build_query_scalar::<i64>().fetch_all(&mut *tx).await?);
        }

        if ids.len() != ingredients.len() {
            ids = Self::last_inserted_ids(&mut tx, "ingredient", ingredients.len()).await?;
        }
        tx.commit().await?;

        info!("Seeded {} ingredients", ids.len());
        Ok(ids)
    }

    /// Seeds allergens, returning their assigned ids.
    pub async fn seed_allergens(
        &self,
        allergens: &[GeneratedAllergen],
    ) -> Result<Vec<i64>, SeedError> {
        info!("Seeding {} allergens...", allergens.len());
        if allergens.is_empty() {
            return Ok(Vec::new());
        }

        let mut tx = self.pool.begin().await?;
        let mut ids = Vec::with_capacity(allergens.len());

        for chunk in allergens.chunks(self.batch_size) {
            let mut qb: QueryBuilder<Postgres> =
                QueryBuilder::new("INSERT INTO allergen (name, description) ");
            qb.push_values(chunk, |mut b, allergen| {
                b.push_bind(&allergen.name).push_bind(&allergen.description);
            });
            qb.push(" RETURNING id");
            ids.extend(qb.build_query_scalar::<i64>().fetch_all(&mut *tx).await?);
        }

        if ids.len() != allergens.len() {
            ids = Self::last_inserted_ids(&mut tx, "allergen", allergens.len()).await?;
        }
        tx.commit().await?;

        Ok(ids)
    }

    /// Seeds categories, returning their assigned ids.
    pub async fn seed_categories(
        &self,
        categories: &[GeneratedCategory],
    ) -> Result<Vec<i64>, SeedError> {
        info!("Seeding {} categories...", categories.len());
        if categories.is_empty() {
            return Ok(Vec::new());
        }

        let mut tx = self.pool.begin().await?;
        let mut ids = Vec::with_capacity(categories.len());

        for chunk in categories.chunks(self.batch_size) {
            let mut qb: QueryBuilder<Postgres> =
                QueryBuilder::new("INSERT INTO category (name, description) ");
            qb.push_values(chunk, |mut b, category| {
                b.push_bind(&category.name).push_bind(&category.description);
            });
            qb.push(" RETURNING id");
            ids.extend(qb.build_query_scalar::<i64>().fetch_all(&mut *tx).await?);
        }

        if ids.len() != categories.len() {
            ids = Self::last_inserted_ids(&mut tx, "category", categories.len()).await?;
        }
        tx.commit().await?;

        Ok(ids)
    }

    /// Seeds course-ingredient links, returning the inserted row count.
    pub async fn seed_course_ingredients(&self, pairs: &[(i64, i64)]) -> Result<u64, SeedError> {
        info!("Seeding {} course-ingredient links...", pairs.len());
        if pairs.is_empty() {
            return Ok(0);
        }

        let mut tx = self.pool.begin().await?;
        let mut inserted = 0;

        for chunk in pairs.chunks(self.batch_size) {
            let mut qb: QueryBuilder<Postgres> =
                QueryBuilder::new("INSERT INTO course_ingredient (course_id, ingredient_id) ");
            qb.push_values(chunk, |mut b, &(course_id, ingredient_id)| {
                b.push_bind(course_id).push_bind(ingredient_id);
            });
            inserted += qb.build().execute(&mut *tx).await?.rows_affected();
        }
        tx.commit().await?;

        Ok(inserted)
    }

    /// Seeds allergen-ingredient links, returning the inserted row count.
    pub async fn seed_allergen_ingredients(
        &self,
        pairs: &[(i64, i64)],
    ) -> Result<u64, SeedError> {
        info!("Seeding {} allergen-ingredient links...", pairs.len());
        if pairs.is_empty() {
            return Ok(0);
        }

        let mut tx = self.pool.begin().await?;
        let mut inserted = 0;

        for chunk in pairs.chunks(self.batch_size) {
            let mut qb: QueryBuilder<Postgres> =
                QueryBuilder::new("INSERT INTO allergen_ingredient (allergen_id, ingredient_id) ");
            qb.push_values(chunk, |mut b, &(allergen_id, ingredient_id)| {
                b.push_bind(allergen_id).push_bind(ingredient_id);
            });
            inserted += qb.build().execute(&mut *tx).await?.rows_affected();
        }
        tx.commit().await?;

        Ok(inserted)
    }

    /// Seeds course-category links, returning the inserted row count.
    pub async fn seed_course_categories(&self, pairs: &[(i64, i64)]) -> Result<u64, SeedError> {
        info!("Seeding {} course-category links...", pairs.len());
        if pairs.is_empty() {
            return Ok(0);
        }

        let mut tx = self.pool.begin().await?;
        let mut inserted = 0;

        for chunk in pairs.chunks(self.batch_size) {
            let mut qb: QueryBuilder<Postgres> =
                QueryBuilder::new("INSERT INTO course_category (course_id, category_id) ");
            qb.push_values(chunk, |mut b, &(course_id, category_id)| {
                b.push_bind(course_id).push_bind(category_id);
            });
            inserted += qb.build().execute(&mut *tx).await?.rows_affected();
        }
        tx.commit().await?;

        Ok(inserted)
    }

    /// Seeds courier types, returning their assigned ids.
    pub async fn seed_courier_types(
        &self,
        courier_types: &[GeneratedCourierType],
    ) -> Result<Vec<i64>, SeedError> {
        info!("Seeding {} courier types...", courier_types.len());
        if courier_types.is_empty() {
            return Ok(Vec::new());
        }

        let mut tx = self.pool.begin().await?;
        let mut ids = Vec::with_capacity(courier_types.len());

        for chunk in courier_types.chunks(self.batch_size) {
            let mut qb: QueryBuilder<Postgres> =
                QueryBuilder::new("INSERT INTO courier_type (name, description) ");
            qb.push_values(chunk, |mut b, courier_type| {
                b.push_bind(&courier_type.name)
                    .push_bind(&courier_type.description);
            });
            qb.push(" RETURNING id");
            ids.extend(qb.build_query_scalar::<i64>().fetch_all(&mut *tx).await?);
        }

        if ids.len() != courier_types.len() {
            ids = Self::last_inserted_ids(&mut tx, "courier_type", courier_types.len()).await?;
        }
        tx.commit().await?;

        Ok(ids)
    }

    /// Seeds cook specialties, returning their assigned ids.
    pub async fn seed_specialties(
        &self,
        specialties: &[GeneratedSpecialty],
    ) -> Result<Vec<i64>, SeedError> {
        info!("Seeding {} specialties...", specialties.len());
        if specialties.is_empty() {
            return Ok(Vec::new());
        }

        let mut tx = self.pool.begin().await?;
        let mut ids = Vec::with_capacity(specialties.len());

        for chunk in specialties.chunks(self.batch_size) {
            let mut qb: QueryBuilder<Postgres> =
                QueryBuilder::new("INSERT INTO specialty (name, description) ");
            qb.push_values(chunk, |mut b, specialty| {
                b.push_bind(&specialty.name)
                    .push_bind(&specialty.description);
            });
            qb.push(" RETURNING id");
            ids.extend(qb.build_query_scalar::<i64>().fetch_all(&mut *tx).await?);
        }

        if ids.len() != specialties.len() {
            ids = Self::last_inserted_ids(&mut tx, "specialty", specialties.len()).await?;
        }
        tx.commit().await?;

        Ok(ids)
    }

    /// Seeds cooks, returning their assigned ids.
    pub async fn seed_cooks(&self, cooks: &[GeneratedCook]) -> Result<Vec<i64>, SeedError> {
        info!("Seeding {} cooks...", cooks.len());
        if cooks.is_empty() {
            return Ok(Vec::new());
        }

        let mut tx = self.pool.begin().await?;
        let mut ids = Vec::with_capacity(cooks.len());

        for chunk in cooks.chunks(self.batch_size) {
            let mut qb: QueryBuilder<Postgres> =
                QueryBuilder::new("INSERT INTO cook (user_id, hired_at, hourly_rate) ");
            qb.push_values(chunk, |mut b, cook| {
                b.push_bind(cook.user_id)
                    .push_bind(cook.hired_at)
                    .push_bind(cook.hourly_rate);
            });
            qb.push(" RETURNING id");
            ids.extend(qb.build_query_scalar::<i64>().fetch_all(&mut *tx).await?);
        }

        if ids.len() != cooks.len() {
            ids = Self::last_inserted_ids(&mut tx, "cook", cooks.len()).await?;
        }
        tx.commit().await?;

        Ok(ids)
    }

    /// Seeds cook-specialty links, returning the inserted row count.
    pub async fn seed_cook_specialties(&self, pairs: &[(i64, i64)]) -> Result<u64, SeedError> {
        info!("Seeding {} cook-specialty links...", pairs.len());
        if pairs.is_empty() {
            return Ok(0);
        }

        let mut tx = self.pool.begin().await?;
        let mut inserted = 0;

        for chunk in pairs.chunks(self.batch_size) {
            let mut qb: QueryBuilder<Postgres> =
                QueryBuilder::new("INSERT INTO cook_specialty (cook_id, specialty_id) ");
            qb.push_values(chunk, |mut b, &(cook_id, specialty_id)| {
                b.push_bind(cook_id).push_bind(specialty_id);
            });
            inserted += qb.build().execute(&mut *tx).await?.rows_affected();
        }
        tx.commit().await?;

        Ok(inserted)
    }

    /// Seeds couriers, returning their assigned ids.
    pub async fn seed_couriers(
        &self,
        couriers: &[GeneratedCourier],
    ) -> Result<Vec<i64>, SeedError> {
        info!("Seeding {} couriers...", couriers.len());
        if couriers.is_empty() {
            return Ok(Vec::new());
        }

        let mut tx = self.pool.begin().await?;
        let mut ids = Vec::with_capacity(couriers.len());

        for chunk in couriers.chunks(self.batch_size) {
            let mut qb: QueryBuilder<Postgres> =
                QueryBuilder::new("INSERT INTO courier (user_id, courier_type_id, hired_at) ");
            qb.push_values(chunk, |mut b, courier| {
                b.push_bind(courier.user_id)
                    .push_bind(courier.courier_type_id)
                    .push_bind(courier.hired_at);
            });
            qb.push(" RETURNING id");
            ids.extend(qb.build_query_scalar::<i64>().fetch_all(&mut *tx).await?);
        }

        if ids.len() != couriers.len() {
            ids = Self::last_inserted_ids(&mut tx, "courier", couriers.len()).await?;
        }
        tx.commit().await?;

        Ok(ids)
    }

    /// Seeds dieticians, returning their assigned ids.
    pub async fn seed_dieticians(
        &self,
        dieticians: &[GeneratedDietician],
    ) -> Result<Vec<i64>, SeedError> {
        info!("Seeding {} dieticians...", dieticians.len());
        if dieticians.is_empty() {
            return Ok(Vec::new());
        }

        let mut tx = self.pool.begin().await?;
        let mut ids = Vec::with_capacity(dieticians.len());

        for chunk in dieticians.chunks(self.batch_size) {
            let mut qb: QueryBuilder<Postgres> =
                QueryBuilder::new("INSERT INTO dietician (user_id, license_number, hired_at) ");
            qb.push_values(chunk, |mut b, dietician| {
                b.push_bind(dietician.user_id)
                    .push_bind(&dietician.license_number)
                    .push_bind(dietician.hired_at);
            });
            qb.push(" RETURNING id");
            ids.extend(qb.build_query_scalar::<i64>().fetch_all(&mut *tx).await?);
        }

        if ids.len() != dieticians.len() {
            ids = Self::last_inserted_ids(&mut tx, "dietician", dieticians.len()).await?;
        }
        tx.commit().await?;

        Ok(ids)
    }

    /// Seeds administrators, returning their assigned ids.
    pub async fn seed_administrators(
        &self,
        administrators: &[GeneratedAdministrator],
    ) -> Result<Vec<i64>, SeedError> {
        info!("Seeding {} administrators...", administrators.len());
        if administrators.is_empty() {
            return Ok(Vec::new());
        }

        let mut tx = self.pool.begin().await?;
        let mut ids = Vec::with_capacity(administrators.len());

        for chunk in administrators.chunks(self.batch_size) {
            let mut qb: QueryBuilder<Postgres> =
                QueryBuilder::new("INSERT INTO administrator (user_id, granted_at) ");
            qb.push_values(chunk, |mut b, administrator| {
                b.push_bind(administrator.user_id)
                    .push_bind(administrator.granted_at);
            });
            qb.push(" RETURNING id");
            ids.extend(qb.build_query_scalar::<i64>().fetch_all(&mut *tx).await?);
        }

        if ids.len() != administrators.len() {
            ids =
                Self::last_inserted_ids(&mut tx, "administrator", administrators.len()).await?;
        }
        tx.commit().await?;

        Ok(ids)
    }

    /// Seeds orders, returning their assigned ids.
    pub async fn seed_orders(&self, orders: &[GeneratedOrder]) -> Result<Vec<i64>, SeedError> {
        info!("Seeding {} orders...", orders.len());
        if orders.is_empty() {
            return Ok(Vec::new());
        }

        let mut tx = self.pool.begin().await?;
        let mut ids = Vec::with_capacity(orders.len());

        for chunk in orders.chunks(self.batch_size) {
            let mut qb: QueryBuilder<Postgres> = QueryBuilder::new(
                "INSERT INTO orders (customer_id, status, vat_rate, net_total, vat_total, \
                 gross_total, placed_at) ",
            );
            qb.push_values(chunk, |mut b, order| {
                b.push_bind(order.customer_id);
                b.push_bind(order.status.as_str())
                    .push_unseparated("::order_status");
                b.push_bind(order.vat_rate)
                    .push_bind(order.net_total)
                    .push_bind(order.vat_total)
                    .push_bind(order.gross_total)
                    .push_bind(order.placed_at);
            });
            qb.push(" RETURNING id");
            ids.extend(qb.build_query_scalar::<i64>().fetch_all(&mut *tx).await?);
        }

        if ids.len() != orders.len() {
            ids = Self::last_inserted_ids(&mut tx, "orders", orders.len()).await?;
        }
        tx.commit().await?;

        info!("Seeded {} orders", ids.len());
        Ok(ids)
    }

    /// Seeds order items, returning their assigned ids.
    pub async fn seed_order_items(
        &self,
        items: &[GeneratedOrderItem],
    ) -> Result<Vec<i64>, SeedError> {
        info!("Seeding {} order items...", items.len());
        if items.is_empty() {
            return Ok(Vec::new());
        }

        let mut tx = self.pool.begin().await?;
        let mut ids = Vec::with_capacity(items.len());

        for chunk in items.chunks(self.batch_size) {
            let mut qb: QueryBuilder<Postgres> = QueryBuilder::new(
                "INSERT INTO order_item (order_id, course_id, quantity, unit_price, \
                 expected_delivery_at, delivery_address_id) ",
            );
            qb.push_values(chunk, |mut b, item| {
                b.push_bind(item.order_id)
                    .push_bind(item.course_id)
                    .push_bind(item.quantity)
                    .push_bind(item.unit_price)
                    .push_bind(item.expected_delivery_at)
                    .push_bind(item.delivery_address_id);
            });
            qb.push(" RETURNING id");
            ids.extend(qb.build_query_scalar::<i64>().fetch_all(&mut *tx).await?);
        }

        if ids.len() != items.len() {
            ids = Self::last_inserted_ids(&mut tx, "order_item", items.len()).await?;
        }
        tx.commit().await?;

        info!("Seeded {} order items", ids.len());
        Ok(ids)
    }

    /// Seeds invoices, returning their assigned ids.
    pub async fn seed_invoices(
        &self,
        invoices: &[GeneratedInvoice],
    ) -> Result<Vec<i64>, SeedError> {
        info!("Seeding {} invoices...", invoices.len());
        if invoices.is_empty() {
            return Ok(Vec::new());
        }

        let mut tx = self.pool.begin().await?;
        let mut ids = Vec::with_capacity(invoices.len());

        for chunk in invoices.chunks(self.batch_size) {
            let mut qb: QueryBuilder<Postgres> = QueryBuilder::new(
                "INSERT INTO invoice (order_id, invoice_number, status, seller_name, \
                 seller_vat_id, buyer_name, buyer_vat_id, currency, payment_method, \
                 payment_terms, sale_date, payment_date, issue_date, vat_rate, net_total, \
                 vat_total, gross_total) ",
            );
            qb.push_values(chunk, |mut b, invoice| {
                b.push_bind(invoice.order_id)
                    .push_bind(&invoice.invoice_number);
                b.push_bind(invoice.status.as_str())
                    .push_unseparated("::invoice_status");
                b.push_bind(&invoice.seller_name)
                    .push_bind(&invoice.seller_vat_id)
                    .push_bind(&invoice.buyer_name)
                    .push_bind(&invoice.buyer_vat_id)
                    .push_bind(&invoice.currency);
                b.push_bind(invoice.payment_method.as_str())
                    .push_unseparated("::payment_method");
                b.push_bind(&invoice.payment_terms)
                    .push_bind(invoice.sale_date)
                    .push_bind(invoice.payment_date)
                    .push_bind(invoice.issue_date)
                    .push_bind(invoice.vat_rate)
                    .push_bind(invoice.net_total)
                    .push_bind(invoice.vat_total)
                    .push_bind(invoice.gross_total);
            });
            qb.push(" RETURNING id");
            ids.extend(qb.build_query_scalar::<i64>().fetch_all(&mut *tx).await?);
        }

        if ids.len() != invoices.len() {
            ids = Self::last_inserted_ids(&mut tx, "invoice", invoices.len()).await?;
        }
        tx.commit().await?;

        info!("Seeded {} invoices", ids.len());
        Ok(ids)
    }

    /// Seeds fulfillments, returning their assigned ids.
    pub async fn seed_fulfillments(
        &self,
        fulfillments: &[GeneratedFulfillment],
    ) -> Result<Vec<i64>, SeedError> {
        info!("Seeding {} fulfillments...", fulfillments.len());
        if fulfillments.is_empty() {
            return Ok(Vec::new());
        }

        let mut tx = self.pool.begin().await?;
        let mut ids = Vec::with_capacity(fulfillments.len());

        for chunk in fulfillments.chunks(self.batch_size) {
            let mut qb: QueryBuilder<Postgres> = QueryBuilder::new(
                "INSERT INTO fulfillment (order_item_id, cook_id, status, began_at, \
                 completed_at) ",
            );
            qb.push_values(chunk, |mut b, fulfillment| {
                b.push_bind(fulfillment.order_item_id)
                    .push_bind(fulfillment.cook_id);
                b.push_bind(fulfillment.status.as_str())
                    .push_unseparated("::fulfillment_status");
                b.push_bind(fulfillment.began_at)
                    .push_bind(fulfillment.completed_at);
            });
            qb.push(" RETURNING id");
            ids.extend(qb.build_query_scalar::<i64>().fetch_all(&mut *tx).await?);
        }

        if ids.len() != fulfillments.len() {
            ids = Self::last_inserted_ids(&mut tx, "fulfillment", fulfillments.len()).await?;
        }
        tx.commit().await?;

        info!("Seeded {} fulfillments", ids.len());
        Ok(ids)
    }

    /// Seeds deliveries, returning their assigned ids.
    pub async fn seed_deliveries(
        &self,
        deliveries: &[GeneratedDelivery],
    ) -> Result<Vec<i64>, SeedError> {
        info!("Seeding {} deliveries...", deliveries.len());
        if deliveries.is_empty() {
            return Ok(Vec::new());
        }

        let mut tx = self.pool.begin().await?;
        let mut ids = Vec::with_capacity(deliveries.len());

        for chunk in deliveries.chunks(self.batch_size) {
            let mut qb: QueryBuilder<Postgres> = QueryBuilder::new(
                "INSERT INTO delivery (order_id, courier_id, status, began_at, delivered_at) ",
            );
            qb.push_values(chunk, |mut b, delivery| {
                b.push_bind(delivery.order_id).push_bind(delivery.courier_id);
                b.push_bind(delivery.status.as_str())
                    .push_unseparated("::delivery_status");
                b.push_bind(delivery.began_at)
                    .push_bind(delivery.delivered_at);
            });
            qb.push(" RETURNING id");
            ids.extend(qb.build_query_scalar::<i64>().fetch_all(&mut *tx).await?);
        }

        if ids.len() != deliveries.len() {
            ids = Self::last_inserted_ids(&mut tx, "delivery", deliveries.len()).await?;
        }
        tx.commit().await?;

        info!("Seeded {} deliveries", ids.len());
        Ok(ids)
    }

    /// Seeds meal plans, returning their assigned ids.
    pub async fn seed_meal_plans(
        &self,
        meal_plans: &[GeneratedMealPlan],
    ) -> Result<Vec<i64>, SeedError> {
        info!("Seeding {} meal plans...", meal_plans.len());
        if meal_plans.is_empty() {
            return Ok(Vec::new());
        }

        let mut tx = self.pool.begin().await?;
        let mut ids = Vec::with_capacity(meal_plans.len());

        for chunk in meal_plans.chunks(self.batch_size) {
            let mut qb: QueryBuilder<Postgres> = QueryBuilder::new(
                "INSERT INTO meal_plan (dietician_id, customer_id, name, description, \
                 created_at) ",
            );
            qb.push_values(chunk, |mut b, meal_plan| {
                b.push_bind(meal_plan.dietician_id)
                    .push_bind(meal_plan.customer_id)
                    .push_bind(&meal_plan.name)
                    .push_bind(&meal_plan.description)
                    .push_bind(meal_plan.created_at);
            });
            qb.push(" RETURNING id");
            ids.extend(qb.build_query_scalar::<i64>().fetch_all(&mut *tx).await?);
        }

        if ids.len() != meal_plans.len() {
            ids = Self::last_inserted_ids(&mut tx, "meal_plan", meal_plans.len()).await?;
        }
        tx.commit().await?;

        Ok(ids)
    }

    /// Seeds meal plan days, returning their assigned ids.
    pub async fn seed_meal_plan_days(
        &self,
        days: &[GeneratedMealPlanDay],
    ) -> Result<Vec<i64>, SeedError> {
        info!("Seeding {} meal plan days...", days.len());
        if days.is_empty() {
            return Ok(Vec::new());
        }

        let mut tx = self.pool.begin().await?;
        let mut ids = Vec::with_capacity(days.len());

        for chunk in days.chunks(self.batch_size) {
            let mut qb: QueryBuilder<Postgres> =
                QueryBuilder::new("INSERT INTO meal_plan_day (meal_plan_id, day_number) ");
            qb.push_values(chunk, |mut b, day| {
                b.push_bind(day.meal_plan_id).push_bind(day.day_number);
            });
            qb.push(" RETURNING id");
            ids.extend(qb.build_query_scalar::<i64>().fetch_all(&mut *tx).await?);
        }

        if ids.len() != days.len() {
            ids = Self::last_inserted_ids(&mut tx, "meal_plan_day", days.len()).await?;
        }
        tx.commit().await?;

        Ok(ids)
    }

    /// Seeds meal plan items, returning their assigned ids.
    pub async fn seed_meal_plan_items(
        &self,
        items: &[GeneratedMealPlanItem],
    ) -> Result<Vec<i64>, SeedError> {
        info!("Seeding {} meal plan items...", items.len());
        if items.is_empty() {
            return Ok(Vec::new());
        }

        let mut tx = self.pool.begin().await?;
        let mut ids = Vec::with_capacity(items.len());

        for chunk in items.chunks(self.batch_size) {
            let mut qb: QueryBuilder<Postgres> = QueryBuilder::new(
                "INSERT INTO meal_plan_item (meal_plan_day_id, course_id, meal_type) ",
            );
            qb.push_values(chunk, |mut b, item| {
                b.push_bind(item.meal_plan_day_id).push_bind(item.course_id);
                b.push_bind(item.meal_type.as_str())
                    .push_unseparated("::meal_type");
            });
            qb.push(" RETURNING id");
            ids.extend(qb.build_query_scalar::<i64>().fetch_all(&mut *tx).await?);
        }

        if ids.len() != items.len() {
            ids = Self::last_inserted_ids(&mut tx, "meal_plan_item", items.len()).await?;
        }
        tx.commit().await?;

        Ok(ids)
    }

    /// Seeds daily menus, returning their assigned ids.
    pub async fn seed_daily_menus(
        &self,
        menus: &[GeneratedDailyMenu],
    ) -> Result<Vec<i64>, SeedError> {
        info!("Seeding {} daily menus...", menus.len());
        if menus.is_empty() {
            return Ok(Vec::new());
        }

        let mut tx = self.pool.begin().await?;
        let mut ids = Vec::with_capacity(menus.len());

        for chunk in menus.chunks(self.batch_size) {
            let mut qb: QueryBuilder<Postgres> =
                QueryBuilder::new("INSERT INTO daily_menu (menu_date, created_at) ");
            qb.push_values(chunk, |mut b, menu| {
                b.push_bind(menu.menu_date).push_bind(menu.created_at);
            });
            qb.push(" RETURNING id");
            ids.extend(qb.build_query_scalar::<i64>().fetch_all(&mut *tx).await?);
        }

        if ids.len() != menus.len() {
            ids = Self::last_inserted_ids(&mut tx, "daily_menu", menus.len()).await?;
        }
        tx.commit().await?;

        Ok(ids)
    }

    /// Seeds daily menu items, returning their assigned ids.
    pub async fn seed_daily_menu_items(
        &self,
        items: &[GeneratedDailyMenuItem],
    ) -> Result<Vec<i64>, SeedError> {
        info!("Seeding {} daily menu items...", items.len());
        if items.is_empty() {
            return Ok(Vec::new());
        }

        let mut tx = self.pool.begin().await?;
        let mut ids = Vec::with_capacity(items.len());

        for chunk in items.chunks(self.batch_size) {
            let mut qb: QueryBuilder<Postgres> = QueryBuilder::new(
                "INSERT INTO daily_menu_item (daily_menu_id, course_id, available_portions) ",
            );
            qb.push_values(chunk, |mut b, item| {
                b.push_bind(item.daily_menu_id)
                    .push_bind(item.course_id)
                    .push_bind(item.available_portions);
            });
            qb.push(" RETURNING id");
            ids.extend(qb.build_query_scalar::<i64>().fetch_all(&mut *tx).await?);
        }

        if ids.len() != items.len() {
            ids = Self::last_inserted_ids(&mut tx, "daily_menu_item", items.len()).await?;
        }
        tx.commit().await?;

        Ok(ids)
    }

    /// Seeds complaints, returning their assigned ids.
    pub async fn seed_complaints(
        &self,
        complaints: &[GeneratedComplaint],
    ) -> Result<Vec<i64>, SeedError> {
        info!("Seeding {} complaints...", complaints.len());
        if complaints.is_empty() {
            return Ok(Vec::new());
        }

        let mut tx = self.pool.begin().await?;
        let mut ids = Vec::with_capacity(complaints.len());

        for chunk in complaints.chunks(self.batch_size) {
            let mut qb: QueryBuilder<Postgres> = QueryBuilder::new(
                "INSERT INTO complaint (order_id, customer_id, course_id, status, \
                 description, refund_amount, submitted_at, resolved_at) ",
            );
            qb.push_values(chunk, |mut b, complaint| {
                b.push_bind(complaint.order_id)
                    .push_bind(complaint.customer_id)
                    .push_bind(complaint.course_id);
                b.push_bind(complaint.status.as_str())
                    .push_unseparated("::complaint_status");
                b.push_bind(&complaint.description)
                    .push_bind(complaint.refund_amount)
                    .push_bind(complaint.submitted_at)
                    .push_bind(complaint.resolved_at);
            });
            qb.push(" RETURNING id");
            ids.extend(qb.build_query_scalar::<i64>().fetch_all(&mut *tx).await?);
        }

        if ids.len() != complaints.len() {
            ids = Self::last_inserted_ids(&mut tx, "complaint", complaints.len()).await?;
        }
        tx.commit().await?;

        info!("Seeded {} complaints", ids.len());
        Ok(ids)
    }

    /// Seeds opinions, returning their assigned ids.
    pub async fn seed_opinions(
        &self,
        opinions: &[GeneratedOpinion],
    ) -> Result<Vec<i64>, SeedError> {
        info!("Seeding {} opinions...", opinions.len());
        if opinions.is_empty() {
            return Ok(Vec::new());
        }

        let mut tx = self.pool.begin().await?;
        let mut ids = Vec::with_capacity(opinions.len());

        for chunk in opinions.chunks(self.batch_size) {
            let mut qb: QueryBuilder<Postgres> = QueryBuilder::new(
                "INSERT INTO opinion (course_id, customer_id, rating, comment, created_at) ",
            );
            qb.push_values(chunk, |mut b, opinion| {
                b.push_bind(opinion.course_id)
                    .push_bind(opinion.customer_id)
                    .push_bind(opinion.rating)
                    .push_bind(&opinion.comment)
                    .push_bind(opinion.created_at);
            });
            qb.push(" RETURNING id");
            ids.extend(qb.build_query_scalar::<i64>().fetch_all(&mut *tx).await?);
        }

        if ids.len() != opinions.len() {
            ids = Self::last_inserted_ids(&mut tx, "opinion", opinions.len()).await?;
        }
        tx.commit().await?;

        Ok(ids)
    }

    /// Returns a reference to the pool for advanced usage.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}
