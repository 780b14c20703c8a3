use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::billing::accrual::{Accrual, AccrualEngine};
use crate::decimal::Money;
use crate::types::PaymentStatus;

/// outcome of status resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub status: PaymentStatus,
    pub days_late: u32,
    /// due date of the oldest period not covered by payments, `None` when paid up
    pub first_unpaid_due_date: Option<NaiveDate>,
}

impl Resolution {
    fn paid() -> Self {
        Self {
            status: PaymentStatus::Paid,
            days_late: 0,
            first_unpaid_due_date: None,
        }
    }
}

/// resolves payment status and lateness from accrued periods and total paid
#[derive(Debug, Clone, Copy)]
pub struct StatusResolver {
    pub engine: AccrualEngine,
}

impl StatusResolver {
    pub fn new(engine: AccrualEngine) -> Self {
        Self { engine }
    }

    /// Payments are applied to periods oldest first. The first period whose
    /// cumulative obligation exceeds `total_paid` sets the lateness clock.
    pub fn resolve(
        &self,
        accrual: &Accrual,
        rent_amount: Money,
        total_paid: Money,
        start: NaiveDate,
        as_of: NaiveDate,
    ) -> Resolution {
        let expected = rent_amount.times(accrual.periods_elapsed);
        if !(expected - total_paid).is_positive() {
            return Resolution::paid();
        }

        let first_unpaid = self.first_unpaid_due_date(accrual.periods_elapsed, rent_amount, total_paid, start);
        let days_late = (as_of - first_unpaid).num_days().max(0);

        Resolution {
            status: PaymentStatus::Overdue,
            days_late: u32::try_from(days_late).unwrap_or(u32::MAX),
            first_unpaid_due_date: Some(first_unpaid),
        }
    }

    /// forward coverage scan over at most `periods_elapsed` due dates
    pub fn first_unpaid_due_date(
        &self,
        periods_elapsed: u32,
        rent_amount: Money,
        total_paid: Money,
        start: NaiveDate,
    ) -> NaiveDate {
        let mut due_date = start;
        let mut due_dates = self.engine.due_dates(start).skip(1);

        for count in 0..periods_elapsed {
            if total_paid < rent_amount.times(count + 1) {
                break;
            }
            match due_dates.next() {
                Some(next) => due_date = next,
                None => break,
            }
        }

        due_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RentFrequency;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn monthly() -> StatusResolver {
        StatusResolver::new(AccrualEngine::new(RentFrequency::Monthly, 1))
    }

    #[test]
    fn test_nothing_paid_counts_from_start() {
        let resolver = monthly();
        let start = date(2024, 1, 1);
        let as_of = date(2024, 3, 1);
        let accrual = resolver.engine.elapsed_periods(start, as_of);

        let resolution = resolver.resolve(&accrual, Money::from_major(1000), Money::ZERO, start, as_of);

        assert_eq!(resolution.status, PaymentStatus::Overdue);
        assert_eq!(resolution.first_unpaid_due_date, Some(date(2024, 1, 1)));
        assert_eq!(resolution.days_late, 60);
    }

    #[test]
    fn test_partial_cover_moves_to_next_period() {
        let resolver = monthly();
        let start = date(2024, 1, 1);
        let as_of = date(2024, 3, 1);
        let accrual = resolver.engine.elapsed_periods(start, as_of);

        let resolution = resolver.resolve(&accrual, Money::from_major(1000), Money::from_major(1000), start, as_of);
        assert_eq!(resolution.first_unpaid_due_date, Some(date(2024, 2, 1)));
        assert_eq!(resolution.days_late, 29);

        // a payment short of a whole period does not advance the scan
        let resolution = resolver.resolve(&accrual, Money::from_major(1000), Money::from_major(1999), start, as_of);
        assert_eq!(resolution.first_unpaid_due_date, Some(date(2024, 2, 1)));
    }

    #[test]
    fn test_latest_period_due_today_is_zero_days_late() {
        let resolver = monthly();
        let start = date(2024, 1, 1);
        let as_of = date(2024, 3, 1);
        let accrual = resolver.engine.elapsed_periods(start, as_of);

        let resolution = resolver.resolve(&accrual, Money::from_major(1000), Money::from_major(2000), start, as_of);
        assert_eq!(resolution.status, PaymentStatus::Overdue);
        assert_eq!(resolution.first_unpaid_due_date, Some(date(2024, 3, 1)));
        assert_eq!(resolution.days_late, 0);
    }

    #[test]
    fn test_fully_paid_and_overpaid() {
        let resolver = monthly();
        let start = date(2024, 1, 1);
        let as_of = date(2024, 3, 1);
        let accrual = resolver.engine.elapsed_periods(start, as_of);

        let exact = resolver.resolve(&accrual, Money::from_major(1000), Money::from_major(3000), start, as_of);
        assert_eq!(exact.status, PaymentStatus::Paid);
        assert_eq!(exact.days_late, 0);
        assert_eq!(exact.first_unpaid_due_date, None);

        let over = resolver.resolve(&accrual, Money::from_major(1000), Money::from_major(9000), start, as_of);
        assert_eq!(over.status, PaymentStatus::Paid);
        assert_eq!(over.days_late, 0);
    }

    #[test]
    fn test_zero_rent_is_always_paid() {
        let resolver = monthly();
        let start = date(2020, 1, 1);
        let as_of = date(2024, 1, 1);
        let accrual = resolver.engine.elapsed_periods(start, as_of);

        let resolution = resolver.resolve(&accrual, Money::ZERO, Money::ZERO, start, as_of);
        assert_eq!(resolution.status, PaymentStatus::Paid);

        // the scan itself stays bounded by the elapsed periods
        let due = resolver.first_unpaid_due_date(accrual.periods_elapsed, Money::ZERO, Money::ZERO, start);
        assert_eq!(due, accrual.next_due_date);
    }

    #[test]
    fn test_weekly_lateness() {
        let resolver = StatusResolver::new(AccrualEngine::new(RentFrequency::Weekly, 1));
        let start = date(2024, 1, 1);
        let as_of = date(2024, 1, 20);
        let accrual = resolver.engine.elapsed_periods(start, as_of);
        assert_eq!(accrual.periods_elapsed, 3);

        let resolution = resolver.resolve(&accrual, Money::from_major(200), Money::from_major(200), start, as_of);
        assert_eq!(resolution.first_unpaid_due_date, Some(date(2024, 1, 8)));
        assert_eq!(resolution.days_late, 12);
    }
}
