pub mod billing;
pub mod config;
pub mod decimal;
pub mod engine;
pub mod errors;
pub mod payments;
pub mod portfolio;
pub mod serialization;
pub mod snapshot;
pub mod tenant;
pub mod types;
pub mod utils;

// re-export key types
pub use billing::{Accrual, AccrualEngine, DueDates, Resolution, StatusResolver};
pub use config::BillingSchedule;
pub use decimal::Money;
pub use engine::SnapshotEngine;
pub use errors::{LedgerError, Result};
pub use payments::{aggregate, LedgerSummary, PaymentRecord};
pub use portfolio::{Portfolio, PortfolioSummary};
pub use snapshot::TenantSnapshot;
pub use tenant::{Tenant, TenantBuilder};
pub use types::{PaymentId, PaymentStatus, RentFrequency, TenantId};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
pub use uuid::Uuid;

/// Initializes global tracing; safe to call more than once.
pub fn init() {
    utils::init_tracing();
}
