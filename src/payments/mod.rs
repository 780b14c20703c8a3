pub mod ledger;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::serialization::{lenient_date, lenient_money};
use crate::types::{PaymentId, TenantId};

pub use ledger::{aggregate, LedgerSummary};

/// a single rent payment received from a tenant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRecord {
    pub id: PaymentId,
    pub tenant_id: TenantId,
    /// `None` when the stored date could not be read
    #[serde(default, deserialize_with = "lenient_date")]
    pub date_paid: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient_money")]
    pub amount_paid: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl PaymentRecord {
    /// create payment record with a fresh id
    pub fn new(tenant_id: TenantId, date_paid: NaiveDate, amount_paid: Money) -> Self {
        Self {
            id: PaymentId::generate(),
            tenant_id,
            date_paid: Some(date_paid),
            amount_paid,
            note: None,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}
