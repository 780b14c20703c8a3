use thiserror::Error;

use crate::decimal::Money;
use crate::types::{PaymentId, TenantId};

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("tenant not found: {id}")]
    TenantNotFound {
        id: TenantId,
    },

    #[error("payment not found: {id}")]
    PaymentNotFound {
        id: PaymentId,
    },

    #[error("invalid monthly due day: {day} (expected 1-31)")]
    InvalidDueDay {
        day: u8,
    },

    #[error("invalid weekly due day: {day} (expected 0-6)")]
    InvalidDayOfWeek {
        day: u8,
    },

    #[error("negative amount: {amount}")]
    NegativeAmount {
        amount: Money,
    },

    #[error("billing schedule has no valid start date")]
    MissingStartDate,

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LedgerError>;
