//! Kitchen fulfillment and courier delivery generation.

use rand::Rng;
use time::{Duration, OffsetDateTime};

use crate::models::{DeliveryStatus, FulfillmentStatus};

/// Generated fulfillment row: one preparation record per order item.
#[derive(Debug, Clone)]
pub struct GeneratedFulfillment {
    pub order_item_id: i64,
    pub cook_id: i64,
    pub status: FulfillmentStatus,
    pub began_at: Option<OffsetDateTime>,
    pub completed_at: Option<OffsetDateTime>,
}

/// Generated delivery row: one delivery record per order.
#[derive(Debug, Clone)]
pub struct GeneratedDelivery {
    pub order_id: i64,
    pub courier_id: i64,
    pub status: DeliveryStatus,
    pub began_at: Option<OffsetDateTime>,
    pub delivered_at: Option<OffsetDateTime>,
}

/// Configuration for logistics generation.
#[derive(Debug, Clone)]
pub struct LogisticsGenConfig {
    /// Probability weights for fulfillment status [completed, in preparation, queued].
    pub fulfillment_weights: (f64, f64, f64),
    /// Probability weights for delivery status [delivered, picked up, pending, failed].
    pub delivery_weights: (f64, f64, f64, f64),
    /// Preparation time in minutes (min, max).
    pub preparation_minutes: (i64, i64),
    /// Time on the road in minutes (min, max).
    pub transit_minutes: (i64, i64),
    /// How far in the past work may have started, in days.
    pub history_days: i64,
}

impl Default for LogisticsGenConfig {
    fn default() -> Self {
        Self {
            fulfillment_weights: (0.70, 0.20, 0.10),
            delivery_weights: (0.65, 0.15, 0.15, 0.05),
            preparation_minutes: (10, 90),
            transit_minutes: (15, 120),
            history_days: 120,
        }
    }
}

/// Generates fulfillment and delivery records.
pub struct LogisticsGenerator {
    config: LogisticsGenConfig,
}

impl LogisticsGenerator {
    /// Creates a new logistics generator with default configuration.
    pub fn new() -> Self {
        Self {
            config: LogisticsGenConfig::default(),
        }
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: LogisticsGenConfig) -> Self {
        Self { config }
    }

    /// Generates one fulfillment per order item, assigned to a random cook.
    ///
    /// Timestamps follow the status: completed records carry both, records
    /// in preparation only the start, queued records neither.
    pub fn generate_fulfillments(
        &self,
        order_item_ids: &[i64],
        cook_ids: &[i64],
        base_time: OffsetDateTime,
        rng: &mut impl Rng,
    ) -> Vec<GeneratedFulfillment> {
        assert!(!cook_ids.is_empty());

        let (completed_w, in_prep_w, _) = self.config.fulfillment_weights;
        let (min_prep, max_prep) = self.config.preparation_minutes;

        order_item_ids
            .iter()
            .map(|&order_item_id| {
                let roll: f64 = rng.r#gen();
                let status = if roll < completed_w {
                    FulfillmentStatus::Completed
                } else if roll < completed_w + in_prep_w {
                    FulfillmentStatus::InPreparation
                } else {
                    FulfillmentStatus::Queued
                };

                let began_at = (status != FulfillmentStatus::Queued)
                    .then(|| self.past_instant(base_time, rng));
                let completed_at = (status == FulfillmentStatus::Completed).then(|| {
                    began_at.unwrap() + Duration::minutes(rng.gen_range(min_prep..=max_prep))
                });

                GeneratedFulfillment {
                    order_item_id,
                    cook_id: cook_ids[rng.gen_range(0..cook_ids.len())],
                    status,
                    began_at,
                    completed_at,
                }
            })
            .collect()
    }

    /// Generates one delivery per order, assigned to a random courier.
    pub fn generate_deliveries(
        &self,
        order_ids: &[i64],
        courier_ids: &[i64],
        base_time: OffsetDateTime,
        rng: &mut impl Rng,
    ) -> Vec<GeneratedDelivery> {
        assert!(!courier_ids.is_empty());

        let (delivered_w, picked_up_w, pending_w, _) = self.config.delivery_weights;
        let (min_transit, max_transit) = self.config.transit_minutes;

        order_ids
            .iter()
            .map(|&order_id| {
                let roll: f64 = rng.r#gen();
                let status = if roll < delivered_w {
                    DeliveryStatus::Delivered
                } else if roll < delivered_w + picked_up_w {
                    DeliveryStatus::PickedUp
                } else if roll < delivered_w + picked_up_w + pending_w {
                    DeliveryStatus::Pending
                } else {
                    DeliveryStatus::Failed
                };

                let began_at = (status != DeliveryStatus::Pending)
                    .then(|| self.past_instant(base_time, rng));
                let delivered_at = (status == DeliveryStatus::Delivered).then(|| {
                    began_at.unwrap() + Duration::minutes(rng.gen_range(min_transit..=max_transit))
                });

                GeneratedDelivery {
                    order_id,
                    courier_id: courier_ids[rng.gen_range(0..courier_ids.len())],
                    status,
                    began_at,
                    delivered_at,
                }
            })
            .collect()
    }

    fn past_instant(&self, base_time: OffsetDateTime, rng: &mut impl Rng) -> OffsetDateTime {
        base_time
            - Duration::days(rng.gen_range(0..self.config.history_days))
            - Duration::minutes(rng.gen_range(0..1440))
    }
}

impl Default for LogisticsGenerator {
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
    fn test_fulfillment_timestamps_follow_status() {
        let logistics_gen = LogisticsGenerator::new();
        let mut rng = StdRng::seed_from_u64(1);

        let order_item_ids: Vec<i64> = (1..=200).collect();
        let cook_ids: Vec<i64> = (10..=17).collect();
        let fulfillments =
            logistics_gen.generate_fulfillments(&order_item_ids, &cook_ids, base_time(), &mut rng);

        assert_eq!(fulfillments.len(), order_item_ids.len());
        for f in &fulfillments {
            assert!(cook_ids.contains(&f.cook_id));
            match f.status {
                FulfillmentStatus::Completed => {
                    assert!(f.completed_at.unwrap() > f.began_at.unwrap());
                }
                FulfillmentStatus::InPreparation => {
                    assert!(f.began_at.is_some());
                    assert!(f.completed_at.is_none());
                }
                FulfillmentStatus::Queued => {
                    assert!(f.began_at.is_none());
                    assert!(f.completed_at.is_none());
                }
            }
        }
    }

    #[test]
    fn test_delivery_timestamps_follow_status() {
        let logistics_gen = LogisticsGenerator::new();
        let mut rng = StdRng::seed_from_u64(2);

        let order_ids: Vec<i64> = (1..=200).collect();
        let courier_ids: Vec<i64> = (30..=39).collect();
        let deliveries =
            logistics_gen.generate_deliveries(&order_ids, &courier_ids, base_time(), &mut rng);

        for d in &deliveries {
            assert!(courier_ids.contains(&d.courier_id));
            match d.status {
                DeliveryStatus::Delivered => {
                    assert!(d.delivered_at.unwrap() > d.began_at.unwrap());
                }
                DeliveryStatus::Pending => {
                    assert!(d.began_at.is_none());
                    assert!(d.delivered_at.is_none());
                }
                _ => assert!(d.delivered_at.is_none()),
            }
        }
    }
}
