use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::decimal::Money;
use crate::engine::SnapshotEngine;
use crate::errors::{LedgerError, Result};
use crate::payments::PaymentRecord;
use crate::snapshot::TenantSnapshot;
use crate::tenant::Tenant;
use crate::types::{PaymentId, TenantId};

/// tenant and payment collections for a small rental portfolio
///
/// This is the repository the caller owns and hands to the engine; the
/// engine itself only ever sees plain slices.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    #[serde(default)]
    pub tenants: Vec<Tenant>,
    #[serde(default)]
    pub payments: Vec<PaymentRecord>,
}

impl Portfolio {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn tenant(&self, id: &TenantId) -> Option<&Tenant> {
        self.tenants.iter().find(|t| &t.id == id)
    }

    /// add a tenant under a fresh id and return that id
    pub fn add_tenant(&mut self, mut tenant: Tenant) -> TenantId {
        tenant.id = TenantId::generate();
        let id = tenant.id.clone();
        info!(tenant_id = %id, name = %tenant.name, "tenant added");
        self.tenants.push(tenant);
        id
    }

    /// replace the stored tenant with the same id
    pub fn update_tenant(&mut self, tenant: Tenant) -> Result<()> {
        let slot = self
            .tenants
            .iter_mut()
            .find(|t| t.id == tenant.id)
            .ok_or_else(|| LedgerError::TenantNotFound { id: tenant.id.clone() })?;
        info!(tenant_id = %tenant.id, "tenant updated");
        *slot = tenant;
        Ok(())
    }

    /// remove a tenant together with their payments, returning the removed tenant
    pub fn remove_tenant(&mut self, id: &TenantId) -> Result<Tenant> {
        let index = self
            .tenants
            .iter()
            .position(|t| &t.id == id)
            .ok_or_else(|| LedgerError::TenantNotFound { id: id.clone() })?;
        let tenant = self.tenants.remove(index);

        let before = self.payments.len();
        self.payments.retain(|p| &p.tenant_id != id);
        info!(
            tenant_id = %id,
            payments_removed = before - self.payments.len(),
            "tenant removed"
        );

        Ok(tenant)
    }

    /// record a payment for a known tenant and return its id
    pub fn record_payment(
        &mut self,
        tenant_id: &TenantId,
        date_paid: NaiveDate,
        amount: Money,
        note: Option<String>,
    ) -> Result<PaymentId> {
        if self.tenant(tenant_id).is_none() {
            return Err(LedgerError::TenantNotFound { id: tenant_id.clone() });
        }

        let mut payment = PaymentRecord::new(tenant_id.clone(), date_paid, amount);
        payment.note = note;
        let id = payment.id.clone();
        info!(%tenant_id, payment_id = %id, %amount, %date_paid, "payment recorded");
        self.payments.push(payment);
        Ok(id)
    }

    pub fn remove_payment(&mut self, id: &PaymentId) -> Result<PaymentRecord> {
        let index = self
            .payments
            .iter()
            .position(|p| &p.id == id)
            .ok_or_else(|| LedgerError::PaymentNotFound { id: id.clone() })?;
        info!(payment_id = %id, "payment removed");
        Ok(self.payments.remove(index))
    }

    pub fn snapshots(&self, engine: &SnapshotEngine, as_of: NaiveDate) -> Vec<TenantSnapshot> {
        engine.compute_portfolio(&self.tenants, &self.payments, as_of)
    }

    pub fn summary(&self, engine: &SnapshotEngine, as_of: NaiveDate) -> PortfolioSummary {
        PortfolioSummary::from_snapshots(&self.snapshots(engine, as_of))
    }
}

/// portfolio-wide totals
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PortfolioSummary {
    pub tenant_count: usize,
    pub total_collected: Money,
    pub total_outstanding: Money,
    pub overdue_count: usize,
    /// whole percent of collected over collected plus outstanding
    pub collection_rate: u32,
}

impl PortfolioSummary {
    pub fn from_snapshots(snapshots: &[TenantSnapshot]) -> Self {
        let total_collected: Money = snapshots.iter().map(|s| s.total_paid).sum();
        let total_outstanding: Money = snapshots.iter().map(|s| s.balance_due).sum();
        let overdue_count = snapshots.iter().filter(|s| s.is_overdue()).count();

        Self {
            tenant_count: snapshots.len(),
            total_collected,
            total_outstanding,
            overdue_count,
            collection_rate: collection_rate(total_collected, total_outstanding),
        }
    }

    /// collected plus outstanding
    pub fn total_projected(&self) -> Money {
        self.total_collected + self.total_outstanding
    }
}

fn collection_rate(collected: Money, outstanding: Money) -> u32 {
    let projected = collected + outstanding;
    if !projected.is_positive() {
        return 0;
    }

    collected
        .as_decimal()
        .checked_div(projected.as_decimal())
        .and_then(|ratio| ratio.checked_mul(Decimal::from(100)))
        .and_then(|percent| {
            percent
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
                .to_u32()
        })
        .unwrap_or(0)
}
