//! User account and customer generation.

use std::collections::HashSet;

use fake::{
    Fake,
    faker::name::en::{FirstName, LastName},
};
use rand::Rng;
use rand::distributions::Alphanumeric;
use rand::seq::SliceRandom;
use time::{Duration, OffsetDateTime};

/// Generated user account ready for database insertion.
#[derive(Debug, Clone)]
pub struct GeneratedUser {
    pub login: String,
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub surname: String,
    pub phone_number: Option<String>,
    pub date_created: OffsetDateTime,
    pub date_removed: Option<OffsetDateTime>,
    pub last_login: Option<OffsetDateTime>,
}

/// Generated customer row referencing a previously inserted user and addresses.
#[derive(Debug, Clone)]
pub struct GeneratedCustomer {
    pub user_id: i64,
    pub default_address_id: Option<i64>,
    /// All addresses assigned to this customer, default first.
    pub address_ids: Vec<i64>,
}

/// Configuration for user generation.
#[derive(Debug, Clone)]
pub struct UserGenConfig {
    /// Probability that a phone number is filled in.
    pub phone_fill_rate: f64,
    /// Account age in days (min, max) relative to the base time.
    pub account_age_days: (i64, i64),
    /// Probability that an account is soft-removed.
    pub removed_rate: f64,
    /// Probability that the account has logged in at least once.
    pub last_login_rate: f64,
    /// Email domains to draw from.
    pub email_domains: Vec<String>,
}

impl Default for UserGenConfig {
    fn default() -> Self {
        Self {
            phone_fill_rate: 0.7,
            account_age_days: (1, 730),
            removed_rate: 0.03,
            last_login_rate: 0.8,
            email_domains: vec![
                "gmail.com".to_string(),
                "outlook.com".to_string(),
                "yahoo.com".to_string(),
                "proton.me".to_string(),
            ],
        }
    }
}

/// Generates user accounts with unique logins and emails.
///
/// Uniqueness is enforced locally: a colliding login or email is simply
/// regenerated until it no longer appears in the generator's seen-sets.
pub struct UserGenerator {
    config: UserGenConfig,
    used_logins: HashSet<String>,
    used_emails: HashSet<String>,
}

impl UserGenerator {
    /// Creates a new user generator with default configuration.
    pub fn new() -> Self {
        Self::with_config(UserGenConfig::default())
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: UserGenConfig) -> Self {
        Self {
            config,
            used_logins: HashSet::new(),
            used_emails: HashSet::new(),
        }
    }

    /// Generates a single user.
    pub fn generate(&mut self, base_time: OffsetDateTime, rng: &mut impl Rng) -> GeneratedUser {
        let name: String = FirstName().fake_with_rng(rng);
        let surname: String = LastName().fake_with_rng(rng);

        let login = self.unique_login(&name, &surname, rng);
        let email = self.unique_email(&login, rng);

        // bcrypt-shaped placeholder, never a real credential
        let salt_and_digest: String = (0..53).map(|_| char::from(rng.sample(Alphanumeric))).collect();
        let password_hash = format!("$2b$12${salt_and_digest}");

        let phone_number = if rng.r#gen::<f64>() < self.config.phone_fill_rate {
            let digits: String = (0..9).map(|_| rng.gen_range(0..10).to_string()).collect();
            Some(format!("+48{digits}"))
        } else {
            None
        };

        let (min_age, max_age) = self.config.account_age_days;
        let date_created = base_time - Duration::days(rng.gen_range(min_age..=max_age));

        let last_login = (rng.r#gen::<f64>() < self.config.last_login_rate).then(|| {
            let span_hours = (base_time - date_created).whole_hours().max(1);
            date_created + Duration::hours(rng.gen_range(0..span_hours))
        });

        let date_removed = (rng.r#gen::<f64>() < self.config.removed_rate).then(|| {
            let span_days = (base_time - date_created).whole_days().max(1);
            date_created + Duration::days(rng.gen_range(0..span_days))
        });

        GeneratedUser {
            login,
            email,
            password_hash,
            name,
            surname,
            phone_number,
            date_created,
            date_removed,
            last_login,
        }
    }

    /// Generates multiple users.
    pub fn generate_batch(
        &mut self,
        count: usize,
        base_time: OffsetDateTime,
        rng: &mut impl Rng,
    ) -> Vec<GeneratedUser> {
        (0..count).map(|_| self.generate(base_time, rng)).collect()
    }

    /// Derives a login from the name, regenerating the suffix on collision.
    fn unique_login(&mut self, name: &str, surname: &str, rng: &mut impl Rng) -> String {
        let initial = name.to_lowercase().chars().next().unwrap_or('x');
        let stem: String = surname
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();

        loop {
            let candidate = format!("{initial}{stem}{}", rng.gen_range(1..10_000));
            if self.used_logins.insert(candidate.clone()) {
                return candidate;
            }
        }
    }

    /// Derives an email from the login, regenerating the domain/suffix on collision.
    fn unique_email(&mut self, login: &str, rng: &mut impl Rng) -> String {
        loop {
            let domain = &self.config.email_domains
                [rng.gen_range(0..self.config.email_domains.len())];
            let candidate = format!("{login}@{domain}");
            if self.used_emails.insert(candidate.clone()) {
                return candidate;
            }
        }
    }
}

impl Default for UserGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Generates customer rows and their address assignments.
pub struct CustomerGenerator {
    /// Addresses assigned per customer (min, max).
    pub addresses_per_customer: (usize, usize),
    /// Probability that a default address is set.
    pub default_address_rate: f64,
}

impl Default for CustomerGenerator {
    fn default() -> Self {
        Self {
            addresses_per_customer: (1, 3),
            default_address_rate: 0.9,
        }
    }
}

impl CustomerGenerator {
    /// Creates a generator with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Generates one customer per user id, drawing addresses from the pool.
    pub fn generate_batch(
        &self,
        user_ids: &[i64],
        address_pool: &[i64],
        rng: &mut impl Rng,
    ) -> Vec<GeneratedCustomer> {
        let (min_addrs, max_addrs) = self.addresses_per_customer;

        user_ids
            .iter()
            .map(|&user_id| {
                let k = rng.gen_range(min_addrs..=max_addrs).min(address_pool.len());
                let address_ids: Vec<i64> = address_pool
                    .choose_multiple(rng, k)
                    .copied()
                    .collect();

                let default_address_id = (rng.r#gen::<f64>() < self.default_address_rate)
                    .then(|| address_ids.first().copied())
                    .flatten();

                GeneratedCustomer {
                    user_id,
                    default_address_id,
                    address_ids,
                }
            })
            .collect()
    }
}

/// Expands customers into (customer_id, address_id) join rows.
///
/// `customer_ids` must align one-to-one with `customers`.
pub fn customer_address_pairs(
    customer_ids: &[i64],
    customers: &[GeneratedCustomer],
) -> Vec<(i64, i64)> {
    assert_eq!(customer_ids.len(), customers.len());

    customer_ids
        .iter()
        .zip(customers.iter())
        .flat_map(|(&customer_id, customer)| {
            customer
                .address_ids
                .iter()
                .map(move |&address_id| (customer_id, address_id))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use time::{Date, Month};

    fn base_time() -> OffsetDateTime {
        Date::from_calendar_date(2025, Month::June, 1)
            .unwrap()
            .with_hms(12, 0, 0)
            .unwrap()
            .assume_utc()
    }

    #[test]
    fn test_logins_and_emails_are_unique() {
        let mut user_gen = UserGenerator::new();
        let mut rng = StdRng::seed_from_u64(1);
        let users = user_gen.generate_batch(200, base_time(), &mut rng);

        let logins: HashSet<&str> = users.iter().map(|u| u.login.as_str()).collect();
        let emails: HashSet<&str> = users.iter().map(|u| u.email.as_str()).collect();
        assert_eq!(logins.len(), users.len());
        assert_eq!(emails.len(), users.len());
    }

    #[test]
    fn test_generation_is_deterministic() {
        let make = || {
            let mut user_gen = UserGenerator::new();
            let mut rng = StdRng::seed_from_u64(7);
            user_gen.generate_batch(20, base_time(), &mut rng)
        };

        let first = make();
        let second = make();
        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.login, b.login);
            assert_eq!(a.email, b.email);
            assert_eq!(a.date_created, b.date_created);
        }
    }

    #[test]
    fn test_timestamps_do_not_precede_creation() {
        let mut user_gen = UserGenerator::with_config(UserGenConfig {
            removed_rate: 1.0,
            last_login_rate: 1.0,
            ..Default::default()
        });
        let mut rng = StdRng::seed_from_u64(3);

        for user in user_gen.generate_batch(50, base_time(), &mut rng) {
            assert!(user.last_login.unwrap() >= user.date_created);
            assert!(user.date_removed.unwrap() >= user.date_created);
        }
    }

    #[test]
    fn test_customers_reference_known_ids() {
        let customer_gen = CustomerGenerator::new();
        let mut rng = StdRng::seed_from_u64(5);

        let user_ids: Vec<i64> = (1..=20).collect();
        let address_pool: Vec<i64> = (100..=140).collect();
        let customers = customer_gen.generate_batch(&user_ids, &address_pool, &mut rng);

        assert_eq!(customers.len(), user_ids.len());
        for customer in &customers {
            assert!(user_ids.contains(&customer.user_id));
            assert!(!customer.address_ids.is_empty());
            for address_id in &customer.address_ids {
                assert!(address_pool.contains(address_id));
            }
            if let Some(default_id) = customer.default_address_id {
                assert_eq!(default_id, customer.address_ids[0]);
            }
        }
    }

    #[test]
    fn test_customer_address_pairs_align() {
        let customers = vec![
            GeneratedCustomer {
                user_id: 1,
                default_address_id: Some(10),
                address_ids: vec![10, 11],
            },
            GeneratedCustomer {
                user_id: 2,
                default_address_id: None,
                address_ids: vec![12],
            },
        ];
        let pairs = customer_address_pairs(&[100, 200], &customers);
        assert_eq!(pairs, vec![(100, 10), (100, 11), (200, 12)]);
    }
}
