pub mod accrual;
pub mod status;

pub use accrual::{Accrual, AccrualEngine, DueDates};
pub use status::{Resolution, StatusResolver};
