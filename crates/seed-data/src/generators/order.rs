//! Order, order item, and invoice generation.
//!
//! Orders are generated with their item drafts embedded so the monetary
//! totals can be computed up front; the drafts are bound to real order ids
//! with [`bind_items`] once the order rows have been inserted.

use std::collections::{HashMap, HashSet};

use rand::Rng;
use rust_decimal::Decimal;
use time::{Duration, OffsetDateTime};

use crate::models::{InvoiceStatus, OrderStatus, PaymentMethod};

/// Item draft carried inside a [`GeneratedOrder`] before ids exist.
#[derive(Debug, Clone)]
pub struct OrderItemDraft {
    pub course_id: i64,
    pub quantity: i32,
    pub unit_price: Decimal,
    pub expected_delivery_at: OffsetDateTime,
    pub delivery_address_id: i64,
}

/// Generated order with embedded item drafts, totals already consistent.
#[derive(Debug, Clone)]
pub struct GeneratedOrder {
    pub customer_id: i64,
    pub status: OrderStatus,
    pub vat_rate: Decimal,
    pub net_total: Decimal,
    pub vat_total: Decimal,
    pub gross_total: Decimal,
    pub placed_at: OffsetDateTime,
    pub items: Vec<OrderItemDraft>,
}

/// Order item row ready for database insertion.
#[derive(Debug, Clone)]
pub struct GeneratedOrderItem {
    pub order_id: i64,
    pub course_id: i64,
    pub quantity: i32,
    pub unit_price: Decimal,
    pub expected_delivery_at: OffsetDateTime,
    pub delivery_address_id: i64,
}

/// Generated invoice mirroring its order's totals.
#[derive(Debug, Clone)]
pub struct GeneratedInvoice {
    pub order_id: i64,
    pub invoice_number: String,
    pub status: InvoiceStatus,
    pub seller_name: String,
    pub seller_vat_id: String,
    pub buyer_name: String,
    pub buyer_vat_id: Option<String>,
    pub currency: String,
    pub payment_method: PaymentMethod,
    pub payment_terms: Option<String>,
    pub sale_date: time::Date,
    pub payment_date: time::Date,
    pub issue_date: time::Date,
    pub vat_rate: Decimal,
    pub net_total: Decimal,
    pub vat_total: Decimal,
    pub gross_total: Decimal,
}

/// Configuration for order generation.
#[derive(Debug, Clone)]
pub struct OrderGenConfig {
    /// Items per order (min, max).
    pub items_per_order: (usize, usize),
    /// Quantity per item (min, max).
    pub quantity: (i32, i32),
    /// Order age in days (min, max) relative to the base time.
    pub age_days: (i64, i64),
    /// Expected delivery lead time in hours (min, max).
    pub delivery_lead_hours: (i64, i64),
    /// VAT rate applied to every order.
    pub vat_rate: Decimal,
    /// Probability weights over [`OrderStatus::ALL`].
    pub status_weights: [f64; 5],
    /// Seller printed on invoices.
    pub seller_name: String,
    /// Seller VAT identifier printed on invoices.
    pub seller_vat_id: String,
    /// Invoice currency (ISO 4217).
    pub currency: String,
    /// Probability that the buyer is a business with a VAT id.
    pub business_buyer_rate: f64,
    /// Probability that explicit payment terms appear on the invoice.
    pub payment_terms_rate: f64,
}

impl Default for OrderGenConfig {
    fn default() -> Self {
        Self {
            items_per_order: (1, 4),
            quantity: (1, 5),
            age_days: (0, 120),
            delivery_lead_hours: (2, 72),
            vat_rate: Decimal::new(8, 2),
            status_weights: [0.10, 0.15, 0.10, 0.15, 0.50],
            seller_name: "Copper Kettle Catering Ltd.".to_string(),
            seller_vat_id: "PL5260305006".to_string(),
            currency: "PLN".to_string(),
            business_buyer_rate: 0.2,
            payment_terms_rate: 0.3,
        }
    }
}

/// Generates orders, their items, and matching invoices.
pub struct OrderGenerator {
    config: OrderGenConfig,
    used_invoice_numbers: HashSet<String>,
}

impl OrderGenerator {
    /// Creates a new order generator with default configuration.
    pub fn new() -> Self {
        Self::with_config(OrderGenConfig::default())
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: OrderGenConfig) -> Self {
        Self {
            config,
            used_invoice_numbers: HashSet::new(),
        }
    }

    /// Generates orders for random customers over the course catalog.
    ///
    /// `course_prices` pairs course ids with their unit prices;
    /// `address_ids` supplies delivery addresses.
    pub fn generate_batch(
        &self,
        count: usize,
        customer_ids: &[i64],
        course_prices: &[(i64, Decimal)],
        address_ids: &[i64],
        base_time: OffsetDateTime,
        rng: &mut impl Rng,
    ) -> Vec<GeneratedOrder> {
        assert!(!customer_ids.is_empty());
        assert!(!course_prices.is_empty());
        assert!(!address_ids.is_empty());

        (0..count)
            .map(|_| self.generate(customer_ids, course_prices, address_ids, base_time, rng))
            .collect()
    }

    fn generate(
        &self,
        customer_ids: &[i64],
        course_prices: &[(i64, Decimal)],
        address_ids: &[i64],
        base_time: OffsetDateTime,
        rng: &mut impl Rng,
    ) -> GeneratedOrder {
        let (min_age, max_age) = self.config.age_days;
        let placed_at = base_time
            - Duration::days(rng.gen_range(min_age..=max_age))
            - Duration::minutes(rng.gen_range(0..1440));

        let (min_items, max_items) = self.config.items_per_order;
        let (min_qty, max_qty) = self.config.quantity;
        let (min_lead, max_lead) = self.config.delivery_lead_hours;

        let items: Vec<OrderItemDraft> = (0..rng.gen_range(min_items..=max_items))
            .map(|_| {
                let (course_id, unit_price) =
                    course_prices[rng.gen_range(0..course_prices.len())];
                OrderItemDraft {
                    course_id,
                    quantity: rng.gen_range(min_qty..=max_qty),
                    unit_price,
                    expected_delivery_at: placed_at
                        + Duration::hours(rng.gen_range(min_lead..=max_lead)),
                    delivery_address_id: address_ids[rng.gen_range(0..address_ids.len())],
                }
            })
            .collect();

        let net_total: Decimal = items
            .iter()
            .map(|item| item.unit_price * Decimal::from(item.quantity))
            .sum();
        let vat_total = (net_total * self.config.vat_rate).round_dp(2);
        let gross_total = net_total + vat_total;

        GeneratedOrder {
            customer_id: customer_ids[rng.gen_range(0..customer_ids.len())],
            status: self.pick_status(rng),
            vat_rate: self.config.vat_rate,
            net_total,
            vat_total,
            gross_total,
            placed_at,
            items,
        }
    }

    /// Generates an invoice per order with a unique invoice number.
    ///
    /// `order_ids` must align one-to-one with `orders`; `buyer_names` maps
    /// customer ids to display names.
    pub fn generate_invoices(
        &mut self,
        orders: &[GeneratedOrder],
        order_ids: &[i64],
        buyer_names: &HashMap<i64, String>,
        rng: &mut impl Rng,
    ) -> Vec<GeneratedInvoice> {
        assert_eq!(orders.len(), order_ids.len());

        orders
            .iter()
            .zip(order_ids.iter())
            .map(|(order, &order_id)| {
                let sale_date = order.placed_at.date();
                let issue_date = sale_date + Duration::days(rng.gen_range(0..3));
                let payment_date = issue_date + Duration::days(rng.gen_range(0..14));

                let buyer_vat_id = (rng.r#gen::<f64>() < self.config.business_buyer_rate)
                    .then(|| {
                        let digits: String =
                            (0..10).map(|_| rng.gen_range(0..10).to_string()).collect();
                        format!("PL{digits}")
                    });

                let payment_terms = (rng.r#gen::<f64>() < self.config.payment_terms_rate)
                    .then(|| format!("{} days", rng.gen_range(7..=30)));

                GeneratedInvoice {
                    order_id,
                    invoice_number: self.unique_invoice_number(sale_date.year(), rng),
                    status: Self::pick_invoice_status(rng),
                    seller_name: self.config.seller_name.clone(),
                    seller_vat_id: self.config.seller_vat_id.clone(),
                    buyer_name: buyer_names
                        .get(&order.customer_id)
                        .cloned()
                        .unwrap_or_else(|| "Retail customer".to_string()),
                    buyer_vat_id,
                    currency: self.config.currency.clone(),
                    payment_method: PaymentMethod::ALL
                        [rng.gen_range(0..PaymentMethod::ALL.len())],
                    payment_terms,
                    sale_date,
                    payment_date,
                    issue_date,
                    vat_rate: order.vat_rate,
                    net_total: order.net_total,
                    vat_total: order.vat_total,
                    gross_total: order.gross_total,
                }
            })
            .collect()
    }

    /// Picks an order status from the configured weights.
    fn pick_status(&self, rng: &mut impl Rng) -> OrderStatus {
        let roll: f64 = rng.r#gen();
        let mut cumulative = 0.0;

        for (status, &weight) in OrderStatus::ALL.iter().zip(self.config.status_weights.iter()) {
            cumulative += weight;
            if roll < cumulative {
                return *status;
            }
        }

        OrderStatus::Delivered
    }

    fn pick_invoice_status(rng: &mut impl Rng) -> InvoiceStatus {
        let roll: f64 = rng.r#gen();
        if roll < 0.70 {
            InvoiceStatus::Paid
        } else if roll < 0.90 {
            InvoiceStatus::Issued
        } else if roll < 0.98 {
            InvoiceStatus::Overdue
        } else {
            InvoiceStatus::Cancelled
        }
    }

    fn unique_invoice_number(&mut self, year: i32, rng: &mut impl Rng) -> String {
        loop {
            let candidate = format!("FV/{year}/{:06}", rng.gen_range(0..1_000_000));
            if self.used_invoice_numbers.insert(candidate.clone()) {
                return candidate;
            }
        }
    }
}

impl Default for OrderGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Binds item drafts to their inserted order ids.
///
/// `order_ids` must align one-to-one with `orders`.
pub fn bind_items(orders: &[GeneratedOrder], order_ids: &[i64]) -> Vec<GeneratedOrderItem> {
    assert_eq!(orders.len(), order_ids.len());

    orders
        .iter()
        .zip(order_ids.iter())
        .flat_map(|(order, &order_id)| {
            order.items.iter().map(move |draft| GeneratedOrderItem {
                order_id,
                course_id: draft.course_id,
                quantity: draft.quantity,
                unit_price: draft.unit_price,
                expected_delivery_at: draft.expected_delivery_at,
                delivery_address_id: draft.delivery_address_id,
            })
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

    fn course_prices() -> Vec<(i64, Decimal)> {
        (1..=20)
            .map(|id| (id, Decimal::new(2000 + id * 100, 2)))
            .collect()
    }

    #[test]
    fn test_totals_are_consistent() {
        let order_gen = OrderGenerator::new();
        let mut rng = StdRng::seed_from_u64(1);

        let customer_ids: Vec<i64> = (1..=10).collect();
        let address_ids: Vec<i64> = (100..=120).collect();
        let orders = order_gen.generate_batch(
            50,
            &customer_ids,
            &course_prices(),
            &address_ids,
            base_time(),
            &mut rng,
        );

        for order in &orders {
            let net: Decimal = order
                .items
                .iter()
                .map(|item| item.unit_price * Decimal::from(item.quantity))
                .sum();
            assert_eq!(order.net_total, net);
            assert_eq!(order.vat_total, (net * order.vat_rate).round_dp(2));
            assert_eq!(order.gross_total, order.net_total + order.vat_total);
            assert!(!order.items.is_empty());
        }
    }

    #[test]
    fn test_items_reference_catalog_and_addresses() {
        let order_gen = OrderGenerator::new();
        let mut rng = StdRng::seed_from_u64(2);

        let customer_ids: Vec<i64> = (1..=5).collect();
        let prices = course_prices();
        let address_ids: Vec<i64> = (100..=110).collect();
        let orders = order_gen.generate_batch(
            30,
            &customer_ids,
            &prices,
            &address_ids,
            base_time(),
            &mut rng,
        );

        let course_ids: Vec<i64> = prices.iter().map(|(id, _)| *id).collect();
        for order in &orders {
            assert!(customer_ids.contains(&order.customer_id));
            for item in &order.items {
                assert!(course_ids.contains(&item.course_id));
                assert!(address_ids.contains(&item.delivery_address_id));
                assert!(item.expected_delivery_at > order.placed_at);
            }
        }
    }

    #[test]
    fn test_bind_items_assigns_parent_ids() {
        let order_gen = OrderGenerator::new();
        let mut rng = StdRng::seed_from_u64(3);

        let orders = order_gen.generate_batch(
            10,
            &[1, 2],
            &course_prices(),
            &[100],
            base_time(),
            &mut rng,
        );
        let order_ids: Vec<i64> = (500..510).collect();
        let items = bind_items(&orders, &order_ids);

        let expected: usize = orders.iter().map(|o| o.items.len()).sum();
        assert_eq!(items.len(), expected);
        for item in &items {
            assert!(order_ids.contains(&item.order_id));
        }
    }

    #[test]
    fn test_invoice_numbers_are_unique() {
        let mut order_gen = OrderGenerator::new();
        let mut rng = StdRng::seed_from_u64(4);

        let orders = order_gen.generate_batch(
            100,
            &[1],
            &course_prices(),
            &[100],
            base_time(),
            &mut rng,
        );
        let order_ids: Vec<i64> = (1..=100).collect();
        let buyers = HashMap::from([(1_i64, "Jan Kowalski".to_string())]);
        let invoices = order_gen.generate_invoices(&orders, &order_ids, &buyers, &mut rng);

        let numbers: HashSet<&str> = invoices
            .iter()
            .map(|i| i.invoice_number.as_str())
            .collect();
        assert_eq!(numbers.len(), invoices.len());

        for (invoice, order) in invoices.iter().zip(orders.iter()) {
            assert_eq!(invoice.gross_total, order.gross_total);
            assert_eq!(invoice.buyer_name, "Jan Kowalski");
            assert!(invoice.issue_date >= invoice.sale_date);
            assert!(invoice.payment_date >= invoice.issue_date);
        }
    }
}
