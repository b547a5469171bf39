//! Meal plan and daily menu generation.

use fake::{Fake, faker::lorem::en::Sentence};
use rand::Rng;
use rand::seq::SliceRandom;
use time::{Duration, OffsetDateTime};

use crate::models::MealType;

const PLAN_NAMES: [&str; 8] = [
    "Balanced week",
    "High protein reset",
    "Mediterranean days",
    "Plant-forward cycle",
    "Low carb routine",
    "Office lunch rotation",
    "Family dinner set",
    "Light and fresh",
];

/// Generated meal plan referencing a dietician and a customer.
#[derive(Debug, Clone)]
pub struct GeneratedMealPlan {
    pub dietician_id: i64,
    pub customer_id: i64,
    pub name: String,
    pub description: String,
    pub created_at: OffsetDateTime,
}

/// Generated meal plan day referencing its plan.
#[derive(Debug, Clone)]
pub struct GeneratedMealPlanDay {
    pub meal_plan_id: i64,
    pub day_number: i32,
}

/// Generated meal plan item referencing a day and a course.
#[derive(Debug, Clone)]
pub struct GeneratedMealPlanItem {
    pub meal_plan_day_id: i64,
    pub course_id: i64,
    pub meal_type: MealType,
}

/// Generated daily menu for a calendar date.
#[derive(Debug, Clone)]
pub struct GeneratedDailyMenu {
    pub menu_date: time::Date,
    pub created_at: OffsetDateTime,
}

/// Generated daily menu item referencing a menu and a course.
#[derive(Debug, Clone)]
pub struct GeneratedDailyMenuItem {
    pub daily_menu_id: i64,
    pub course_id: i64,
    pub available_portions: i32,
}

/// Configuration for menu generation.
#[derive(Debug, Clone)]
pub struct MenuGenConfig {
    /// Days in each meal plan (min, max).
    pub days_per_plan: (i32, i32),
    /// Probability that a plan day includes a snack besides the three meals.
    pub snack_probability: f64,
    /// Courses offered on each daily menu (min, max).
    pub courses_per_menu: (usize, usize),
    /// Available portions per daily menu item (min, max).
    pub portions: (i32, i32),
    /// Plan age in days (min, max) relative to the base time.
    pub plan_age_days: (i64, i64),
}

impl Default for MenuGenConfig {
    fn default() -> Self {
        Self {
            days_per_plan: (5, 14),
            snack_probability: 0.5,
            courses_per_menu: (5, 10),
            portions: (10, 60),
            plan_age_days: (0, 180),
        }
    }
}

/// Generates meal plans and daily menus.
pub struct MenuGenerator {
    config: MenuGenConfig,
}

impl MenuGenerator {
    /// Creates a new menu generator with default configuration.
    pub fn new() -> Self {
        Self {
            config: MenuGenConfig::default(),
        }
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: MenuGenConfig) -> Self {
        Self { config }
    }

    /// Generates meal plans pairing random dieticians with random customers.
    pub fn generate_meal_plans(
        &self,
        count: usize,
        dietician_ids: &[i64],
        customer_ids: &[i64],
        base_time: OffsetDateTime,
        rng: &mut impl Rng,
    ) -> Vec<GeneratedMealPlan> {
        assert!(!dietician_ids.is_empty());
        assert!(!customer_ids.is_empty());

        let (min_age, max_age) = self.config.plan_age_days;

        (0..count)
            .map(|_| GeneratedMealPlan {
                dietician_id: dietician_ids[rng.gen_range(0..dietician_ids.len())],
                customer_id: customer_ids[rng.gen_range(0..customer_ids.len())],
                name: PLAN_NAMES[rng.gen_range(0..PLAN_NAMES.len())].to_string(),
                description: Sentence(8..14).fake_with_rng(rng),
                created_at: base_time - Duration::days(rng.gen_range(min_age..=max_age)),
            })
            .collect()
    }

    /// Generates numbered days for each meal plan.
    pub fn generate_plan_days(
        &self,
        meal_plan_ids: &[i64],
        rng: &mut impl Rng,
    ) -> Vec<GeneratedMealPlanDay> {
        let (min_days, max_days) = self.config.days_per_plan;

        meal_plan_ids
            .iter()
            .flat_map(|&meal_plan_id| {
                let days = rng.gen_range(min_days..=max_days);
                (1..=days).map(move |day_number| GeneratedMealPlanDay {
                    meal_plan_id,
                    day_number,
                })
            })
            .collect()
    }

    /// Generates the meals for each plan day.
    ///
    /// Every day gets breakfast, lunch, and dinner; a snack appears at the
    /// configured probability.
    pub fn generate_plan_items(
        &self,
        meal_plan_day_ids: &[i64],
        course_ids: &[i64],
        rng: &mut impl Rng,
    ) -> Vec<GeneratedMealPlanItem> {
        assert!(!course_ids.is_empty());

        let mut items = Vec::new();
        for &meal_plan_day_id in meal_plan_day_ids {
            let mut slots = vec![MealType::Breakfast, MealType::Lunch, MealType::Dinner];
            if rng.r#gen::<f64>() < self.config.snack_probability {
                slots.push(MealType::Snack);
            }

            for meal_type in slots {
                items.push(GeneratedMealPlanItem {
                    meal_plan_day_id,
                    course_id: course_ids[rng.gen_range(0..course_ids.len())],
                    meal_type,
                });
            }
        }

        items
    }

    /// Generates one menu per day, counting back from the base date.
    ///
    /// Dates are distinct by construction, satisfying the table's unique
    /// date constraint.
    pub fn generate_daily_menus(
        &self,
        days: usize,
        base_time: OffsetDateTime,
        rng: &mut impl Rng,
    ) -> Vec<GeneratedDailyMenu> {
        (0..days)
            .map(|offset| {
                let menu_date = base_time.date() - Duration::days(offset as i64);
                GeneratedDailyMenu {
                    menu_date,
                    created_at: base_time - Duration::days(offset as i64)
                        - Duration::hours(rng.gen_range(6..24)),
                }
            })
            .collect()
    }

    /// Generates the course offering for each daily menu.
    pub fn generate_menu_items(
        &self,
        daily_menu_ids: &[i64],
        course_ids: &[i64],
        rng: &mut impl Rng,
    ) -> Vec<GeneratedDailyMenuItem> {
        assert!(!course_ids.is_empty());

        let (min_courses, max_courses) = self.config.courses_per_menu;
        let (min_portions, max_portions) = self.config.portions;

        let mut items = Vec::new();
        for &daily_menu_id in daily_menu_ids {
            let k = rng.gen_range(min_courses..=max_courses).min(course_ids.len());
            for &course_id in course_ids.choose_multiple(rng, k) {
                items.push(GeneratedDailyMenuItem {
                    daily_menu_id,
                    course_id,
                    available_portions: rng.gen_range(min_portions..=max_portions),
                });
            }
        }

        items
    }
}

impl Default for MenuGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

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
    fn test_plan_days_are_numbered_from_one() {
        let menu_gen = MenuGenerator::new();
        let mut rng = StdRng::seed_from_u64(1);

        let plan_ids = vec![10, 20, 30];
        let days = menu_gen.generate_plan_days(&plan_ids, &mut rng);

        for &plan_id in &plan_ids {
            let numbers: Vec<i32> = days
                .iter()
                .filter(|d| d.meal_plan_id == plan_id)
                .map(|d| d.day_number)
                .collect();
            assert!(!numbers.is_empty());
            assert_eq!(numbers[0], 1);
            assert_eq!(*numbers.last().unwrap(), numbers.len() as i32);
        }
    }

    #[test]
    fn test_every_day_has_core_meals() {
        let menu_gen = MenuGenerator::new();
        let mut rng = StdRng::seed_from_u64(2);

        let day_ids: Vec<i64> = (1..=50).collect();
        let course_ids: Vec<i64> = (100..=150).collect();
        let items = menu_gen.generate_plan_items(&day_ids, &course_ids, &mut rng);

        for &day_id in &day_ids {
            let meals: Vec<MealType> = items
                .iter()
                .filter(|i| i.meal_plan_day_id == day_id)
                .map(|i| i.meal_type)
                .collect();
            assert!(meals.contains(&MealType::Breakfast));
            assert!(meals.contains(&MealType::Lunch));
            assert!(meals.contains(&MealType::Dinner));
            assert!(meals.len() <= 4);
        }
    }

    #[test]
    fn test_daily_menu_dates_are_unique() {
        let menu_gen = MenuGenerator::new();
        let mut rng = StdRng::seed_from_u64(3);

        let menus = menu_gen.generate_daily_menus(30, base_time(), &mut rng);
        let dates: HashSet<time::Date> = menus.iter().map(|m| m.menu_date).collect();
        assert_eq!(dates.len(), menus.len());
    }

    #[test]
    fn test_menu_offers_distinct_courses() {
        let menu_gen = MenuGenerator::new();
        let mut rng = StdRng::seed_from_u64(4);

        let menu_ids: Vec<i64> = (1..=10).collect();
        let course_ids: Vec<i64> = (100..=140).collect();
        let items = menu_gen.generate_menu_items(&menu_ids, &course_ids, &mut rng);

        for &menu_id in &menu_ids {
            let courses: Vec<i64> = items
                .iter()
                .filter(|i| i.daily_menu_id == menu_id)
                .map(|i| i.course_id)
                .collect();
            let unique: HashSet<i64> = courses.iter().copied().collect();
            assert_eq!(unique.len(), courses.len());
            assert!(courses.len() >= 5);
        }
    }
}
