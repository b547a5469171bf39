//! Entity generators for seed data.
//!
//! This module provides generators for creating plausible synthetic rows:
//! - [`UserGenerator`]: accounts with unique logins and emails
//! - [`AddressGenerator`]: postal addresses
//! - [`CatalogGenerator`]: courses, ingredients, allergens, categories
//! - [`StaffGenerator`]: cooks, couriers, dieticians, administrators
//! - [`OrderGenerator`]: orders with items and invoices
//! - [`LogisticsGenerator`]: kitchen fulfillments and deliveries
//! - [`MenuGenerator`]: meal plans and daily menus
//! - [`FeedbackGenerator`]: complaints and course opinions

pub mod address;
pub mod catalog;
pub mod feedback;
pub mod logistics;
pub mod menu;
pub mod order;
pub mod staff;
pub mod user;

pub use address::{AddressGenerator, GeneratedAddress};
pub use catalog::{
    CatalogGenerator, GeneratedAllergen, GeneratedCategory, GeneratedCourse, GeneratedIngredient,
};
pub use feedback::{FeedbackGenerator, GeneratedComplaint, GeneratedOpinion};
pub use logistics::{GeneratedDelivery, GeneratedFulfillment, LogisticsGenerator};
pub use menu::{
    GeneratedDailyMenu, GeneratedDailyMenuItem, GeneratedMealPlan, GeneratedMealPlanDay,
    GeneratedMealPlanItem, MenuGenerator,
};
pub use order::{
    GeneratedInvoice, GeneratedOrder, GeneratedOrderItem, OrderGenerator, bind_items,
};
pub use staff::{
    GeneratedAdministrator, GeneratedCook, GeneratedCourier, GeneratedCourierType,
    GeneratedDietician, GeneratedSpecialty, StaffGenerator,
};
pub use user::{
    CustomerGenerator, GeneratedCustomer, GeneratedUser, UserGenerator, customer_address_pairs,
};
