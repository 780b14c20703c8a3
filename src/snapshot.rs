use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::payments::PaymentRecord;
use crate::types::{PaymentStatus, TenantId};

/// computed billing position of one tenant as of a reference date
///
/// Recomputed on demand from the schedule and the payment list; never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantSnapshot {
    pub tenant_id: TenantId,
    pub as_of: NaiveDate,
    /// start date actually used, after any fallback to today
    pub effective_start_date: NaiveDate,
    pub periods_elapsed: u32,
    pub total_rent_expected: Money,
    pub total_paid: Money,
    /// never negative; overpayment leaves this at zero
    pub balance_due: Money,
    pub status: PaymentStatus,
    /// zero whenever `balance_due` is zero
    pub days_late: u32,
    pub first_unpaid_due_date: Option<NaiveDate>,
    pub next_due_date: NaiveDate,
    /// most recent first
    pub history: Vec<PaymentRecord>,
}

impl TenantSnapshot {
    pub fn is_overdue(&self) -> bool {
        self.status.is_overdue()
    }

    /// credit beyond the accrued obligation, which the balance never carries
    pub fn excess_paid(&self) -> Money {
        self.total_paid.saturating_sub(self.total_rent_expected)
    }

    /// convert to pretty-printed json string
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
