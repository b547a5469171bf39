//! Scenario orchestration for full seeding runs.

mod scenario;

pub use scenario::{ScenarioBuilder, ScenarioResult};
