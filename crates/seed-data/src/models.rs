//! Database enum mirrors shared across generators and the seeder.
//!
//! Each enum matches a PostgreSQL enum type (or a constrained varchar column)
//! in the target schema; `as_str` returns the exact database representation.

/// Order lifecycle status matching the `order_status` database enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Accepted,
    InProgress,
    AwaitingDelivery,
    InDelivery,
    Delivered,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Accepted,
        OrderStatus::InProgress,
        OrderStatus::AwaitingDelivery,
        OrderStatus::InDelivery,
        OrderStatus::Delivered,
    ];

    /// Returns the database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Accepted => "accepted",
            OrderStatus::InProgress => "in progress",
            OrderStatus::AwaitingDelivery => "awaiting delivery",
            OrderStatus::InDelivery => "in delivery",
            OrderStatus::Delivered => "delivered",
        }
    }
}

/// Kitchen-side preparation status matching the `fulfillment_status` enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FulfillmentStatus {
    Queued,
    InPreparation,
    Completed,
}

impl FulfillmentStatus {
    /// Returns the database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            FulfillmentStatus::Queued => "queued",
            FulfillmentStatus::InPreparation => "in preparation",
            FulfillmentStatus::Completed => "completed",
        }
    }
}

/// Courier-side delivery status matching the `delivery_status` enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryStatus {
    Pending,
    PickedUp,
    Delivered,
    Failed,
}

impl DeliveryStatus {
    /// Returns the database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryStatus::Pending => "pending",
            DeliveryStatus::PickedUp => "picked up",
            DeliveryStatus::Delivered => "delivered",
            DeliveryStatus::Failed => "failed",
        }
    }
}

/// Complaint status matching the `complaint_status` enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComplaintStatus {
    Open,
    InReview,
    Resolved,
    Rejected,
}

impl ComplaintStatus {
    /// Returns the database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ComplaintStatus::Open => "open",
            ComplaintStatus::InReview => "in review",
            ComplaintStatus::Resolved => "resolved",
            ComplaintStatus::Rejected => "rejected",
        }
    }
}

/// Invoice status matching the `invoice_status` enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvoiceStatus {
    Issued,
    Paid,
    Overdue,
    Cancelled,
}

impl InvoiceStatus {
    /// Returns the database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Issued => "issued",
            InvoiceStatus::Paid => "paid",
            InvoiceStatus::Overdue => "overdue",
            InvoiceStatus::Cancelled => "cancelled",
        }
    }
}

/// Payment method matching the `payment_method` enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
    Card,
    Transfer,
    Cash,
    Online,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 4] = [
        PaymentMethod::Card,
        PaymentMethod::Transfer,
        PaymentMethod::Cash,
        PaymentMethod::Online,
    ];

    /// Returns the database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "card",
            PaymentMethod::Transfer => "transfer",
            PaymentMethod::Cash => "cash",
            PaymentMethod::Online => "online",
        }
    }
}

/// Meal slot within a plan day, matching the `meal_type` enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    /// Returns the database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
        }
    }
}

/// Unit of measure for ingredient quantities (plain varchar column).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasureUnit {
    Gram,
    Milliliter,
    Kilogram,
    Liter,
    Piece,
}

impl MeasureUnit {
    pub const ALL: [MeasureUnit; 5] = [
        MeasureUnit::Gram,
        MeasureUnit::Milliliter,
        MeasureUnit::Kilogram,
        MeasureUnit::Liter,
        MeasureUnit::Piece,
    ];

    /// Returns the database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            MeasureUnit::Gram => "g",
            MeasureUnit::Milliliter => "ml",
            MeasureUnit::Kilogram => "kg",
            MeasureUnit::Liter => "l",
            MeasureUnit::Piece => "piece",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_status_covers_lifecycle() {
        let reprs: Vec<&str> = OrderStatus::ALL.iter().map(|s| s.as_str()).collect();
        assert_eq!(
            reprs,
            vec![
                "accepted",
                "in progress",
                "awaiting delivery",
                "in delivery",
                "delivered"
            ]
        );
    }

    #[test]
    fn test_measure_units_are_distinct() {
        let reprs: std::collections::HashSet<&str> =
            MeasureUnit::ALL.iter().map(|u| u.as_str()).collect();
        assert_eq!(reprs.len(), MeasureUnit::ALL.len());
    }
}
