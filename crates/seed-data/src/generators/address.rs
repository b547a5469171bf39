//! Postal address generation.

use fake::{
    Fake,
    faker::address::en::{BuildingNumber, CityName, StreetName, ZipCode},
};
use rand::Rng;
use time::{Duration, OffsetDateTime};

/// Generated address ready for database insertion.
#[derive(Debug, Clone)]
pub struct GeneratedAddress {
    pub country: String,
    pub region: Option<String>,
    pub postal_code: String,
    pub city: String,
    pub street_name: String,
    pub street_number: String,
    pub apartment: Option<String>,
    pub created_at: OffsetDateTime,
    pub deleted_at: Option<OffsetDateTime>,
}

/// Configuration for address generation.
#[derive(Debug, Clone)]
pub struct AddressGenConfig {
    /// Country applied to every generated address.
    pub default_country: String,
    /// Possible regions within the country.
    pub regions: Vec<String>,
    /// Probability that a region is filled in.
    pub region_fill_rate: f64,
    /// Probability that an apartment number is present.
    pub apartment_rate: f64,
    /// Probability that the address is soft-deleted.
    pub deleted_rate: f64,
    /// Address age in days (min, max) relative to the base time.
    pub age_days: (i64, i64),
}

impl Default for AddressGenConfig {
    fn default() -> Self {
        Self {
            default_country: "Poland".to_string(),
            regions: vec![
                "Mazowieckie".to_string(),
                "Malopolskie".to_string(),
                "Slaskie".to_string(),
                "Pomorskie".to_string(),
                "Wielkopolskie".to_string(),
            ],
            region_fill_rate: 0.6,
            apartment_rate: 0.4,
            deleted_rate: 0.05,
            age_days: (1, 730),
        }
    }
}

/// Generates postal addresses.
pub struct AddressGenerator {
    config: AddressGenConfig,
}

impl AddressGenerator {
    /// Creates a new address generator with default configuration.
    pub fn new() -> Self {
        Self {
            config: AddressGenConfig::default(),
        }
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: AddressGenConfig) -> Self {
        Self { config }
    }

    /// Generates a single address.
    pub fn generate(&self, base_time: OffsetDateTime, rng: &mut impl Rng) -> GeneratedAddress {
        let region = (rng.r#gen::<f64>() < self.config.region_fill_rate).then(|| {
            self.config.regions[rng.gen_range(0..self.config.regions.len())].clone()
        });

        let apartment = (rng.r#gen::<f64>() < self.config.apartment_rate)
            .then(|| rng.gen_range(1..80).to_string());

        let (min_age, max_age) = self.config.age_days;
        let created_at = base_time - Duration::days(rng.gen_range(min_age..=max_age));

        let deleted_at = (rng.r#gen::<f64>() < self.config.deleted_rate).then(|| {
            let span_days = (base_time - created_at).whole_days().max(1);
            created_at + Duration::days(rng.gen_range(0..span_days))
        });

        GeneratedAddress {
            country: self.config.default_country.clone(),
            region,
            postal_code: ZipCode().fake_with_rng(rng),
            city: CityName().fake_with_rng(rng),
            street_name: StreetName().fake_with_rng(rng),
            street_number: BuildingNumber().fake_with_rng(rng),
            apartment,
            created_at,
            deleted_at,
        }
    }

    /// Generates multiple addresses.
    pub fn generate_batch(
        &self,
        count: usize,
        base_time: OffsetDateTime,
        rng: &mut impl Rng,
    ) -> Vec<GeneratedAddress> {
        (0..count).map(|_| self.generate(base_time, rng)).collect()
    }
}

impl Default for AddressGenerator {
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
    fn test_generate_address() {
        let address_gen = AddressGenerator::new();
        let mut rng = StdRng::seed_from_u64(1);
        let address = address_gen.generate(base_time(), &mut rng);

        assert!(!address.city.is_empty());
        assert!(!address.street_name.is_empty());
        assert!(!address.postal_code.is_empty());
        assert_eq!(address.country, "Poland");
        assert!(address.created_at <= base_time());
    }

    #[test]
    fn test_deleted_addresses_keep_order() {
        let address_gen = AddressGenerator::with_config(AddressGenConfig {
            deleted_rate: 1.0,
            ..Default::default()
        });
        let mut rng = StdRng::seed_from_u64(2);

        for address in address_gen.generate_batch(30, base_time(), &mut rng) {
            assert!(address.deleted_at.unwrap() >= address.created_at);
        }
    }
}
