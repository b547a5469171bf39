//! Staff row generation: cooks, couriers, dieticians, administrators.
//!
//! Staff rows reference user accounts inserted beforehand; each method takes
//! the slice of user ids reserved for that role and produces one row per id.

use std::collections::HashSet;

use fake::{Fake, faker::lorem::en::Sentence};
use rand::Rng;
use rand::seq::SliceRandom;
use rust_decimal::Decimal;
use time::{Duration, OffsetDateTime};

const DEFAULT_COURIER_TYPES: [&str; 4] = ["Bicycle", "Scooter", "Car", "Van"];

const DEFAULT_SPECIALTIES: [&str; 8] = [
    "Grill",
    "Pastry",
    "Vegan cuisine",
    "Seafood",
    "Soups",
    "Salads",
    "Pizza",
    "Sous vide",
];

/// Generated courier type ready for database insertion.
#[derive(Debug, Clone)]
pub struct GeneratedCourierType {
    pub name: String,
    pub description: String,
}

/// Generated cook specialty ready for database insertion.
#[derive(Debug, Clone)]
pub struct GeneratedSpecialty {
    pub name: String,
    pub description: String,
}

/// Generated cook row referencing a previously inserted user.
#[derive(Debug, Clone)]
pub struct GeneratedCook {
    pub user_id: i64,
    pub hired_at: OffsetDateTime,
    pub hourly_rate: Decimal,
}

/// Generated courier row referencing a user and a courier type.
#[derive(Debug, Clone)]
pub struct GeneratedCourier {
    pub user_id: i64,
    pub courier_type_id: i64,
    pub hired_at: OffsetDateTime,
}

/// Generated dietician row referencing a previously inserted user.
#[derive(Debug, Clone)]
pub struct GeneratedDietician {
    pub user_id: i64,
    pub license_number: String,
    pub hired_at: OffsetDateTime,
}

/// Generated administrator row referencing a previously inserted user.
#[derive(Debug, Clone)]
pub struct GeneratedAdministrator {
    pub user_id: i64,
    pub granted_at: OffsetDateTime,
}

/// Configuration for staff generation.
#[derive(Debug, Clone)]
pub struct StaffGenConfig {
    /// Cook hourly rate in cents (min, max).
    pub hourly_rate_cents: (i64, i64),
    /// Employment age in days (min, max) relative to the base time.
    pub tenure_days: (i64, i64),
    /// Specialties per cook (min, max).
    pub specialties_per_cook: (usize, usize),
}

impl Default for StaffGenConfig {
    fn default() -> Self {
        Self {
            hourly_rate_cents: (2200, 4800),
            tenure_days: (30, 1460),
            specialties_per_cook: (1, 3),
        }
    }
}

/// Generates staff rows for user accounts assigned to staff roles.
pub struct StaffGenerator {
    config: StaffGenConfig,
    used_licenses: HashSet<String>,
}

impl StaffGenerator {
    /// Creates a new staff generator with default configuration.
    pub fn new() -> Self {
        Self::with_config(StaffGenConfig::default())
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: StaffGenConfig) -> Self {
        Self {
            config,
            used_licenses: HashSet::new(),
        }
    }

    /// Generates the default courier type set.
    pub fn generate_courier_types(&self, rng: &mut impl Rng) -> Vec<GeneratedCourierType> {
        DEFAULT_COURIER_TYPES
            .iter()
            .map(|name| GeneratedCourierType {
                name: name.to_string(),
                description: Sentence(4..8).fake_with_rng(rng),
            })
            .collect()
    }

    /// Generates the default specialty set.
    pub fn generate_specialties(&self, rng: &mut impl Rng) -> Vec<GeneratedSpecialty> {
        DEFAULT_SPECIALTIES
            .iter()
            .map(|name| GeneratedSpecialty {
                name: name.to_string(),
                description: Sentence(4..8).fake_with_rng(rng),
            })
            .collect()
    }

    /// Generates one cook per user id.
    pub fn generate_cooks(
        &self,
        user_ids: &[i64],
        base_time: OffsetDateTime,
        rng: &mut impl Rng,
    ) -> Vec<GeneratedCook> {
        let (min_rate, max_rate) = self.config.hourly_rate_cents;

        user_ids
            .iter()
            .map(|&user_id| GeneratedCook {
                user_id,
                hired_at: self.hire_date(base_time, rng),
                hourly_rate: Decimal::new(rng.gen_range(min_rate..=max_rate), 2),
            })
            .collect()
    }

    /// Links each cook to a random distinct set of specialties.
    pub fn cook_specialty_pairs(
        &self,
        cook_ids: &[i64],
        specialty_ids: &[i64],
        rng: &mut impl Rng,
    ) -> Vec<(i64, i64)> {
        if cook_ids.is_empty() || specialty_ids.is_empty() {
            return Vec::new();
        }

        let (min_k, max_k) = self.config.specialties_per_cook;
        let mut pairs = Vec::new();

        for &cook_id in cook_ids {
            let k = rng.gen_range(min_k..=max_k).min(specialty_ids.len());
            for &specialty_id in specialty_ids.choose_multiple(rng, k) {
                pairs.push((cook_id, specialty_id));
            }
        }

        pairs
    }

    /// Generates one courier per user id, each with a random courier type.
    pub fn generate_couriers(
        &self,
        user_ids: &[i64],
        courier_type_ids: &[i64],
        base_time: OffsetDateTime,
        rng: &mut impl Rng,
    ) -> Vec<GeneratedCourier> {
        user_ids
            .iter()
            .map(|&user_id| GeneratedCourier {
                user_id,
                courier_type_id: courier_type_ids[rng.gen_range(0..courier_type_ids.len())],
                hired_at: self.hire_date(base_time, rng),
            })
            .collect()
    }

    /// Generates one dietician per user id with a unique license number.
    pub fn generate_dieticians(
        &mut self,
        user_ids: &[i64],
        base_time: OffsetDateTime,
        rng: &mut impl Rng,
    ) -> Vec<GeneratedDietician> {
        user_ids
            .iter()
            .map(|&user_id| GeneratedDietician {
                user_id,
                license_number: self.unique_license(rng),
                hired_at: self.hire_date(base_time, rng),
            })
            .collect()
    }

    /// Generates one administrator per user id.
    pub fn generate_administrators(
        &self,
        user_ids: &[i64],
        base_time: OffsetDateTime,
        rng: &mut impl Rng,
    ) -> Vec<GeneratedAdministrator> {
        user_ids
            .iter()
            .map(|&user_id| GeneratedAdministrator {
                user_id,
                granted_at: self.hire_date(base_time, rng),
            })
            .collect()
    }

    fn hire_date(&self, base_time: OffsetDateTime, rng: &mut impl Rng) -> OffsetDateTime {
        let (min_days, max_days) = self.config.tenure_days;
        base_time - Duration::days(rng.gen_range(min_days..=max_days))
    }

    fn unique_license(&mut self, rng: &mut impl Rng) -> String {
        loop {
            let candidate = format!("DT-{:05}", rng.gen_range(0..100_000));
            if self.used_licenses.insert(candidate.clone()) {
                return candidate;
            }
        }
    }
}

impl Default for StaffGenerator {
    fn default() -> Self {
        Self::new()
    }
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
    fn test_couriers_reference_known_types() {
        let staff_gen = StaffGenerator::new();
        let mut rng = StdRng::seed_from_u64(1);

        let user_ids: Vec<i64> = (1..=10).collect();
        let type_ids = vec![100, 101, 102, 103];
        let couriers = staff_gen.generate_couriers(&user_ids, &type_ids, base_time(), &mut rng);

        assert_eq!(couriers.len(), user_ids.len());
        for courier in &couriers {
            assert!(type_ids.contains(&courier.courier_type_id));
            assert!(courier.hired_at < base_time());
        }
    }

    #[test]
    fn test_dietician_licenses_are_unique() {
        let mut staff_gen = StaffGenerator::new();
        let mut rng = StdRng::seed_from_u64(2);

        let user_ids: Vec<i64> = (1..=50).collect();
        let dieticians = staff_gen.generate_dieticians(&user_ids, base_time(), &mut rng);

        let licenses: HashSet<&str> = dieticians
            .iter()
            .map(|d| d.license_number.as_str())
            .collect();
        assert_eq!(licenses.len(), dieticians.len());
    }

    #[test]
    fn test_cook_specialties_within_bounds() {
        let staff_gen = StaffGenerator::new();
        let mut rng = StdRng::seed_from_u64(3);

        let cook_ids: Vec<i64> = (1..=8).collect();
        let specialty_ids: Vec<i64> = (50..=57).collect();
        let pairs = staff_gen.cook_specialty_pairs(&cook_ids, &specialty_ids, &mut rng);

        for &cook_id in &cook_ids {
            let count = pairs.iter().filter(|(c, _)| *c == cook_id).count();
            assert!((1..=3).contains(&count));
        }

        let unique: HashSet<&(i64, i64)> = pairs.iter().collect();
        assert_eq!(unique.len(), pairs.len());
    }
}
