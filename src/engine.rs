use chrono::{Local, NaiveDate};
use hourglass_rs::{SafeTimeProvider, TimeSource};
use tracing::{debug, warn};

use crate::billing::{AccrualEngine, StatusResolver};
use crate::payments::{aggregate, PaymentRecord};
use crate::snapshot::TenantSnapshot;
use crate::tenant::Tenant;

/// composes accrual, ledger aggregation and status resolution into snapshots
///
/// Holds no state between calls. The clock is consulted only to substitute
/// a missing start date and for the `*_today` conveniences; the reference
/// date of every computation is otherwise passed in explicitly.
#[derive(Clone)]
pub struct SnapshotEngine {
    time: SafeTimeProvider,
}

impl SnapshotEngine {
    pub fn new(time: SafeTimeProvider) -> Self {
        Self { time }
    }

    /// engine backed by the system clock
    pub fn system() -> Self {
        Self::new(SafeTimeProvider::new(TimeSource::System))
    }

    /// engine whose clock is chosen by `TIME_SOURCE` / `TIME_START`
    pub fn from_env() -> Self {
        Self::new(SafeTimeProvider::new(TimeSource::from_env()))
    }

    pub fn time_provider(&self) -> &SafeTimeProvider {
        &self.time
    }

    /// current calendar date in the local time zone according to the clock
    pub fn today(&self) -> NaiveDate {
        self.time.now().with_timezone(&Local).date_naive()
    }

    /// compute a tenant's snapshot as of `as_of`
    ///
    /// Total over any input: a missing start date becomes today, and
    /// malformed amounts were already coerced to zero on load.
    pub fn compute_snapshot(
        &self,
        tenant: &Tenant,
        payments: &[PaymentRecord],
        as_of: NaiveDate,
    ) -> TenantSnapshot {
        let schedule = &tenant.schedule;
        let start = match schedule.start_date {
            Some(date) => date,
            None => {
                let today = self.today();
                warn!(tenant_id = %tenant.id, %today, "start date missing or unreadable, using today");
                today
            }
        };

        let engine = AccrualEngine::for_schedule(schedule);
        let accrual = engine.elapsed_periods(start, as_of);

        let rent = schedule.rent_amount;
        let total_rent_expected = rent.times(accrual.periods_elapsed);

        let ledger = aggregate(payments, &tenant.id);
        let balance_due = total_rent_expected.saturating_sub(ledger.total_paid);

        let resolution = StatusResolver::new(engine).resolve(&accrual, rent, ledger.total_paid, start, as_of);

        debug!(
            tenant_id = %tenant.id,
            %as_of,
            periods = accrual.periods_elapsed,
            expected = %total_rent_expected,
            paid = %ledger.total_paid,
            balance = %balance_due,
            status = %resolution.status,
            days_late = resolution.days_late,
            "computed tenant snapshot"
        );

        TenantSnapshot {
            tenant_id: tenant.id.clone(),
            as_of,
            effective_start_date: start,
            periods_elapsed: accrual.periods_elapsed,
            total_rent_expected,
            total_paid: ledger.total_paid,
            balance_due,
            status: resolution.status,
            days_late: resolution.days_late,
            first_unpaid_due_date: resolution.first_unpaid_due_date,
            next_due_date: accrual.next_due_date,
            history: ledger.history,
        }
    }

    /// compute a tenant's snapshot as of the clock's current date
    pub fn compute_snapshot_today(&self, tenant: &Tenant, payments: &[PaymentRecord]) -> TenantSnapshot {
        self.compute_snapshot(tenant, payments, self.today())
    }

    /// compute snapshots for every tenant, in tenant order
    pub fn compute_portfolio(
        &self,
        tenants: &[Tenant],
        payments: &[PaymentRecord],
        as_of: NaiveDate,
    ) -> Vec<TenantSnapshot> {
        tenants
            .iter()
            .map(|tenant| self.compute_snapshot(tenant, payments, as_of))
            .collect()
    }
}

impl Default for SnapshotEngine {
    fn default() -> Self {
        Self::system()
    }
}
