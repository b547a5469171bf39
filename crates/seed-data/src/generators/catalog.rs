//! Menu catalog generation: courses, ingredients, allergens, categories.

use std::collections::HashSet;

use fake::{
    Fake,
    faker::lorem::en::{Paragraph, Sentence, Word},
};
use rand::Rng;
use rand::seq::SliceRandom;
use rust_decimal::Decimal;
use time::OffsetDateTime;

use crate::models::MeasureUnit;

/// EU food-information regulation allergen list, used as the default set.
const DEFAULT_ALLERGENS: [&str; 14] = [
    "Gluten",
    "Crustaceans",
    "Eggs",
    "Fish",
    "Peanuts",
    "Soybeans",
    "Milk (lactose)",
    "Tree nuts",
    "Celery",
    "Mustard",
    "Sesame seeds",
    "Sulphur dioxide and sulphites",
    "Lupin",
    "Molluscs",
];

const DEFAULT_CATEGORIES: [&str; 10] = [
    "Breakfast",
    "Lunch",
    "Dinner",
    "Dessert",
    "Soup",
    "Salad",
    "Vegan",
    "Vegetarian",
    "Gluten free",
    "Seafood",
];

/// Generated course ready for database insertion.
#[derive(Debug, Clone)]
pub struct GeneratedCourse {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub protein_100g: f64,
    pub calories_100g: i32,
    pub carbohydrates_100g: f64,
    pub fat_100g: f64,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

/// Generated ingredient ready for database insertion.
#[derive(Debug, Clone)]
pub struct GeneratedIngredient {
    pub name: String,
    pub description: String,
    pub calories_100g: i32,
    pub unit_of_measure: MeasureUnit,
    pub protein_100g: f64,
    pub fat_100g: f64,
    pub carbohydrates_100g: f64,
}

/// Generated allergen ready for database insertion.
#[derive(Debug, Clone)]
pub struct GeneratedAllergen {
    pub name: String,
    pub description: String,
}

/// Generated category ready for database insertion.
#[derive(Debug, Clone)]
pub struct GeneratedCategory {
    pub name: String,
    pub description: String,
}

/// Configuration for catalog generation.
#[derive(Debug, Clone)]
pub struct CatalogGenConfig {
    /// Course price in cents (min, max).
    pub price_cents: (i64, i64),
    /// Course calories per 100g (min, max).
    pub course_calories: (i32, i32),
    /// Ingredient calories per 100g (min, max).
    pub ingredient_calories: (i32, i32),
    /// Ingredients linked to each course (min, max).
    pub ingredients_per_course: (usize, usize),
    /// Categories linked to each course (min, max).
    pub categories_per_course: (usize, usize),
    /// Probability that an ingredient carries an allergen.
    pub allergen_probability: f64,
}

impl Default for CatalogGenConfig {
    fn default() -> Self {
        Self {
            price_cents: (2000, 8500),
            course_calories: (200, 1200),
            ingredient_calories: (10, 500),
            ingredients_per_course: (3, 8),
            categories_per_course: (1, 2),
            allergen_probability: 0.2,
        }
    }
}

/// Generates the menu catalog.
pub struct CatalogGenerator {
    config: CatalogGenConfig,
}

impl CatalogGenerator {
    /// Creates a new catalog generator with default configuration.
    pub fn new() -> Self {
        Self {
            config: CatalogGenConfig::default(),
        }
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: CatalogGenConfig) -> Self {
        Self { config }
    }

    /// Generates courses with plausible nutrition values.
    pub fn generate_courses(
        &self,
        count: usize,
        base_time: OffsetDateTime,
        rng: &mut impl Rng,
    ) -> Vec<GeneratedCourse> {
        let (min_price, max_price) = self.config.price_cents;
        let (min_cal, max_cal) = self.config.course_calories;

        (0..count)
            .map(|_| {
                let main: String = Word().fake_with_rng(rng);
                let side: String = Word().fake_with_rng(rng);
                let name = format!("{} with {side}", capitalize(&main));

                GeneratedCourse {
                    name,
                    description: Paragraph(3..5).fake_with_rng(rng),
                    price: Decimal::new(rng.gen_range(min_price..=max_price), 2),
                    protein_100g: round2(rng.gen_range(5.0..50.0)),
                    calories_100g: rng.gen_range(min_cal..=max_cal),
                    carbohydrates_100g: round2(rng.gen_range(10.0..150.0)),
                    fat_100g: round2(rng.gen_range(5.0..70.0)),
                    created_at: base_time,
                    updated_at: base_time,
                }
            })
            .collect()
    }

    /// Generates ingredients.
    pub fn generate_ingredients(
        &self,
        count: usize,
        rng: &mut impl Rng,
    ) -> Vec<GeneratedIngredient> {
        let (min_cal, max_cal) = self.config.ingredient_calories;

        (0..count)
            .map(|_| GeneratedIngredient {
                name: Word().fake_with_rng(rng),
                description: Sentence(5..9).fake_with_rng(rng),
                calories_100g: rng.gen_range(min_cal..=max_cal),
                unit_of_measure: MeasureUnit::ALL[rng.gen_range(0..MeasureUnit::ALL.len())],
                protein_100g: round2(rng.gen_range(0.0..30.0)),
                fat_100g: round2(rng.gen_range(0.0..60.0)),
                carbohydrates_100g: round2(rng.gen_range(0.0..100.0)),
            })
            .collect()
    }

    /// Generates the default allergen set with faked descriptions.
    pub fn generate_allergens(&self, rng: &mut impl Rng) -> Vec<GeneratedAllergen> {
        DEFAULT_ALLERGENS
            .iter()
            .map(|name| GeneratedAllergen {
                name: name.to_string(),
                description: Sentence(6..10).fake_with_rng(rng),
            })
            .collect()
    }

    /// Generates the default category set with faked descriptions.
    pub fn generate_categories(&self, rng: &mut impl Rng) -> Vec<GeneratedCategory> {
        DEFAULT_CATEGORIES
            .iter()
            .map(|name| GeneratedCategory {
                name: name.to_string(),
                description: Sentence(4..8).fake_with_rng(rng),
            })
            .collect()
    }

    /// Links each course to a random distinct set of ingredients.
    pub fn course_ingredient_pairs(
        &self,
        course_ids: &[i64],
        ingredient_ids: &[i64],
        rng: &mut impl Rng,
    ) -> Vec<(i64, i64)> {
        if course_ids.is_empty() || ingredient_ids.is_empty() {
            return Vec::new();
        }

        let (min_k, max_k) = self.config.ingredients_per_course;
        let mut pairs = Vec::new();
        let mut seen = HashSet::new();

        for &course_id in course_ids {
            let k = rng.gen_range(min_k..=max_k).min(ingredient_ids.len());
            for &ingredient_id in ingredient_ids.choose_multiple(rng, k) {
                if seen.insert((course_id, ingredient_id)) {
                    pairs.push((course_id, ingredient_id));
                }
            }
        }

        pairs
    }

    /// Tags ingredients with allergens at the configured probability.
    pub fn allergen_ingredient_pairs(
        &self,
        allergen_ids: &[i64],
        ingredient_ids: &[i64],
        rng: &mut impl Rng,
    ) -> Vec<(i64, i64)> {
        if allergen_ids.is_empty() || ingredient_ids.is_empty() {
            return Vec::new();
        }

        let mut pairs = Vec::new();
        let mut seen = HashSet::new();

        for &ingredient_id in ingredient_ids {
            if rng.r#gen::<f64>() < self.config.allergen_probability {
                let allergen_id = allergen_ids[rng.gen_range(0..allergen_ids.len())];
                if seen.insert((allergen_id, ingredient_id)) {
                    pairs.push((allergen_id, ingredient_id));
                }
            }
        }

        pairs
    }

    /// Places each course in one or two categories.
    pub fn course_category_pairs(
        &self,
        course_ids: &[i64],
        category_ids: &[i64],
        rng: &mut impl Rng,
    ) -> Vec<(i64, i64)> {
        if course_ids.is_empty() || category_ids.is_empty() {
            return Vec::new();
        }

        let (min_k, max_k) = self.config.categories_per_course;
        let mut pairs = Vec::new();
        let mut seen = HashSet::new();

        for &course_id in course_ids {
            let k = rng.gen_range(min_k..=max_k).min(category_ids.len());
            for &category_id in category_ids.choose_multiple(rng, k) {
                if seen.insert((course_id, category_id)) {
                    pairs.push((course_id, category_id));
                }
            }
        }

        pairs
    }
}

impl Default for CatalogGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
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
    fn test_course_values_stay_in_range() {
        let catalog_gen = CatalogGenerator::new();
        let mut rng = StdRng::seed_from_u64(1);
        let courses = catalog_gen.generate_courses(50, base_time(), &mut rng);

        assert_eq!(courses.len(), 50);
        for course in &courses {
            assert!(!course.name.is_empty());
            assert!(course.price >= Decimal::new(2000, 2));
            assert!(course.price <= Decimal::new(8500, 2));
            assert!((200..=1200).contains(&course.calories_100g));
        }
    }

    #[test]
    fn test_allergen_set_matches_default_list() {
        let catalog_gen = CatalogGenerator::new();
        let mut rng = StdRng::seed_from_u64(2);
        let allergens = catalog_gen.generate_allergens(&mut rng);

        assert_eq!(allergens.len(), 14);
        assert!(allergens.iter().any(|a| a.name == "Gluten"));
    }

    #[test]
    fn test_course_ingredient_pairs_are_unique_and_valid() {
        let catalog_gen = CatalogGenerator::new();
        let mut rng = StdRng::seed_from_u64(3);

        let course_ids: Vec<i64> = (1..=20).collect();
        let ingredient_ids: Vec<i64> = (100..=160).collect();
        let pairs = catalog_gen.course_ingredient_pairs(&course_ids, &ingredient_ids, &mut rng);

        let unique: HashSet<&(i64, i64)> = pairs.iter().collect();
        assert_eq!(unique.len(), pairs.len());
        for (course_id, ingredient_id) in &pairs {
            assert!(course_ids.contains(course_id));
            assert!(ingredient_ids.contains(ingredient_id));
        }

        // Every course gets at least the configured minimum
        for &course_id in &course_ids {
            let count = pairs.iter().filter(|(c, _)| *c == course_id).count();
            assert!(count >= 3);
        }
    }

    #[test]
    fn test_empty_id_lists_produce_no_pairs() {
        let catalog_gen = CatalogGenerator::new();
        let mut rng = StdRng::seed_from_u64(4);

        assert!(catalog_gen
            .course_ingredient_pairs(&[], &[1, 2], &mut rng)
            .is_empty());
        assert!(catalog_gen
            .allergen_ingredient_pairs(&[1], &[], &mut rng)
            .is_empty());
    }
}
