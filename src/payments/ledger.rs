use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::payments::PaymentRecord;
use crate::types::TenantId;

/// one tenant's payments and their total
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LedgerSummary {
    pub total_paid: Money,
    /// most recent first, undated records last
    pub history: Vec<PaymentRecord>,
}

/// select a tenant's payments, newest first, and sum them
///
/// Amounts were coerced when the records were loaded, so a malformed
/// record contributes zero here but still shows up in the history.
pub fn aggregate(payments: &[PaymentRecord], tenant_id: &TenantId) -> LedgerSummary {
    let mut history: Vec<PaymentRecord> = payments
        .iter()
        .filter(|p| &p.tenant_id == tenant_id)
        .cloned()
        .collect();

    // stable, so equal dates keep input order
    history.sort_by(|a, b| b.date_paid.cmp(&a.date_paid));

    let total_paid = history.iter().map(|p| p.amount_paid).sum();

    LedgerSummary { total_paid, history }
}
