//! Customer feedback generation: complaints and course opinions.

use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;
use rand_distr::{Distribution, Poisson};
use rust_decimal::Decimal;
use time::{Duration, OffsetDateTime};

use crate::models::ComplaintStatus;

/// Generated complaint referencing an order and its customer.
#[derive(Debug, Clone)]
pub struct GeneratedComplaint {
    pub order_id: i64,
    pub customer_id: i64,
    pub course_id: Option<i64>,
    pub status: ComplaintStatus,
    pub description: String,
    pub refund_amount: Option<Decimal>,
    pub submitted_at: OffsetDateTime,
    pub resolved_at: Option<OffsetDateTime>,
}

/// Generated course opinion left by a customer.
#[derive(Debug, Clone)]
pub struct GeneratedOpinion {
    pub course_id: i64,
    pub customer_id: i64,
    pub rating: i16,
    pub comment: Option<String>,
    pub created_at: OffsetDateTime,
}

/// Configuration for feedback generation.
#[derive(Debug, Clone)]
pub struct FeedbackGenConfig {
    /// Probability that an order receives a complaint.
    pub complaint_probability: f64,
    /// Probability that a complaint points at a specific course.
    pub course_reference_rate: f64,
    /// Probability weights for complaint status [resolved, rejected, in review, open].
    pub complaint_status_weights: (f64, f64, f64, f64),
    /// Refund in cents for resolved complaints (min, max).
    pub refund_cents: (i64, i64),
    /// Average opinions per course.
    pub avg_opinions_per_course: f64,
    /// Probability that an opinion carries a text comment.
    pub comment_probability: f64,
    /// Probability weights for ratings 1 through 5.
    pub rating_weights: [f64; 5],
}

impl Default for FeedbackGenConfig {
    fn default() -> Self {
        Self {
            complaint_probability: 0.15,
            course_reference_rate: 0.7,
            complaint_status_weights: (0.55, 0.10, 0.15, 0.20),
            refund_cents: (0, 6000),
            avg_opinions_per_course: 3.0,
            comment_probability: 0.6,
            // Skewed toward 4 and 5
            rating_weights: [0.05, 0.08, 0.17, 0.35, 0.35],
        }
    }
}

/// Generates complaints and opinions.
pub struct FeedbackGenerator {
    config: FeedbackGenConfig,
    complaint_templates: Vec<String>,
    opinion_templates: Vec<String>,
}

impl FeedbackGenerator {
    /// Creates a new feedback generator with default configuration.
    pub fn new() -> Self {
        Self::with_config(FeedbackGenConfig::default())
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: FeedbackGenConfig) -> Self {
        Self {
            config,
            complaint_templates: default_complaint_templates(),
            opinion_templates: default_opinion_templates(),
        }
    }

    /// Generates complaints for a fraction of orders.
    ///
    /// `order_ids` must align one-to-one with `customer_ids_by_order`
    /// (the customer who placed each order). Resolved complaints carry a
    /// resolution timestamp and a refund; all others carry neither.
    pub fn generate_complaints(
        &self,
        order_ids: &[i64],
        customer_ids_by_order: &[i64],
        course_ids: &[i64],
        base_time: OffsetDateTime,
        rng: &mut impl Rng,
    ) -> Vec<GeneratedComplaint> {
        assert_eq!(order_ids.len(), customer_ids_by_order.len());

        let (min_refund, max_refund) = self.config.refund_cents;
        let mut complaints = Vec::new();

        for (&order_id, &customer_id) in order_ids.iter().zip(customer_ids_by_order.iter()) {
            if rng.r#gen::<f64>() >= self.config.complaint_probability {
                continue;
            }

            let status = self.pick_complaint_status(rng);
            let submitted_at = base_time
                - Duration::days(rng.gen_range(0..90))
                - Duration::minutes(rng.gen_range(0..1440));

            let resolved_at = (status == ComplaintStatus::Resolved)
                .then(|| submitted_at + Duration::days(rng.gen_range(1..14)));
            let refund_amount = (status == ComplaintStatus::Resolved)
                .then(|| Decimal::new(rng.gen_range(min_refund..=max_refund), 2));

            let course_id = (!course_ids.is_empty()
                && rng.r#gen::<f64>() < self.config.course_reference_rate)
                .then(|| course_ids[rng.gen_range(0..course_ids.len())]);

            let description =
                self.complaint_templates[rng.gen_range(0..self.complaint_templates.len())].clone();

            complaints.push(GeneratedComplaint {
                order_id,
                customer_id,
                course_id,
                status,
                description,
                refund_amount,
                submitted_at,
                resolved_at,
            });
        }

        complaints
    }

    /// Generates opinions for courses, each from a distinct customer.
    pub fn generate_opinions(
        &self,
        course_ids: &[i64],
        customer_ids: &[i64],
        base_time: OffsetDateTime,
        rng: &mut impl Rng,
    ) -> Vec<GeneratedOpinion> {
        if customer_ids.is_empty() {
            return Vec::new();
        }

        let poisson = Poisson::new(self.config.avg_opinions_per_course).unwrap();
        let mut opinions = Vec::new();
        let mut seen = HashSet::new();

        for &course_id in course_ids {
            let count = (poisson.sample(rng) as usize).min(customer_ids.len());

            for &customer_id in customer_ids.choose_multiple(rng, count) {
                if !seen.insert((course_id, customer_id)) {
                    continue;
                }

                let comment = (rng.r#gen::<f64>() < self.config.comment_probability).then(|| {
                    self.opinion_templates[rng.gen_range(0..self.opinion_templates.len())].clone()
                });

                opinions.push(GeneratedOpinion {
                    course_id,
                    customer_id,
                    rating: self.pick_rating(rng),
                    comment,
                    created_at: base_time - Duration::days(rng.gen_range(0..180)),
                });
            }
        }

        opinions
    }

    fn pick_complaint_status(&self, rng: &mut impl Rng) -> ComplaintStatus {
        let (resolved_w, rejected_w, in_review_w, _) = self.config.complaint_status_weights;
        let roll: f64 = rng.r#gen();

        if roll < resolved_w {
            ComplaintStatus::Resolved
        } else if roll < resolved_w + rejected_w {
            ComplaintStatus::Rejected
        } else if roll < resolved_w + rejected_w + in_review_w {
            ComplaintStatus::InReview
        } else {
            ComplaintStatus::Open
        }
    }

    fn pick_rating(&self, rng: &mut impl Rng) -> i16 {
        let roll: f64 = rng.r#gen();
        let mut cumulative = 0.0;

        for (i, &weight) in self.config.rating_weights.iter().enumerate() {
            cumulative += weight;
            if roll < cumulative {
                return (i + 1) as i16;
            }
        }

        5
    }
}

impl Default for FeedbackGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn default_complaint_templates() -> Vec<String> {
    vec![
        "The order arrived cold.".into(),
        "A course was missing from the delivery.".into(),
        "The delivery was over an hour late.".into(),
        "The packaging was damaged and the food leaked.".into(),
        "I received someone else's order.".into(),
        "The portion was much smaller than described.".into(),
        "The course contained an ingredient listed as excluded.".into(),
        "The courier could not find the address and the food went back.".into(),
        "The invoice total does not match the order.".into(),
        "The meal tasted stale and off.".into(),
    ]
}

fn default_opinion_templates() -> Vec<String> {
    vec![
        "Delicious, will order again.".into(),
        "Fresh ingredients and generous portions.".into(),
        "Decent, though the sauce was bland.".into(),
        "Arrived warm and on time, tasted great.".into(),
        "Too salty for my taste.".into(),
        "Best dish in the menu rotation.".into(),
        "Good value for the price.".into(),
        "The texture was off, probably reheated.".into(),
        "My kids loved it.".into(),
        "Solid lunch option for the office.".into(),
    ]
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
    fn test_resolution_fields_follow_status() {
        let feedback_gen = FeedbackGenerator::with_config(FeedbackGenConfig {
            complaint_probability: 1.0,
            ..Default::default()
        });
        let mut rng = StdRng::seed_from_u64(1);

        let order_ids: Vec<i64> = (1..=300).collect();
        let customer_ids: Vec<i64> = order_ids.iter().map(|id| id % 20 + 1).collect();
        let course_ids: Vec<i64> = (100..=120).collect();
        let complaints = feedback_gen.generate_complaints(
            &order_ids,
            &customer_ids,
            &course_ids,
            base_time(),
            &mut rng,
        );

        assert_eq!(complaints.len(), order_ids.len());
        for complaint in &complaints {
            if complaint.status == ComplaintStatus::Resolved {
                assert!(complaint.resolved_at.unwrap() > complaint.submitted_at);
                assert!(complaint.refund_amount.is_some());
            } else {
                assert!(complaint.resolved_at.is_none());
                assert!(complaint.refund_amount.is_none());
            }
        }
    }

    #[test]
    fn test_complaint_rate_is_respected() {
        let feedback_gen = FeedbackGenerator::with_config(FeedbackGenConfig {
            complaint_probability: 0.0,
            ..Default::default()
        });
        let mut rng = StdRng::seed_from_u64(2);

        let order_ids: Vec<i64> = (1..=50).collect();
        let customer_ids = order_ids.clone();
        let complaints =
            feedback_gen.generate_complaints(&order_ids, &customer_ids, &[], base_time(), &mut rng);
        assert!(complaints.is_empty());
    }

    #[test]
    fn test_opinions_have_valid_ratings_and_no_duplicates() {
        let feedback_gen = FeedbackGenerator::new();
        let mut rng = StdRng::seed_from_u64(3);

        let course_ids: Vec<i64> = (1..=40).collect();
        let customer_ids: Vec<i64> = (100..=150).collect();
        let opinions =
            feedback_gen.generate_opinions(&course_ids, &customer_ids, base_time(), &mut rng);

        assert!(!opinions.is_empty());

        let mut seen = HashSet::new();
        for opinion in &opinions {
            assert!((1..=5).contains(&opinion.rating));
            assert!(customer_ids.contains(&opinion.customer_id));
            assert!(seen.insert((opinion.course_id, opinion.customer_id)));
        }
    }
}
