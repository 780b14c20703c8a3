use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::config::BillingSchedule;
use crate::types::RentFrequency;

/// result of counting elapsed periods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accrual {
    /// due dates on or before the reference date
    pub periods_elapsed: u32,
    /// first due date strictly after the reference date
    pub next_due_date: NaiveDate,
}

/// engine for stepping period boundaries and counting accrued periods
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccrualEngine {
    pub frequency: RentFrequency,
    pub due_day: u8,
}

impl AccrualEngine {
    pub fn new(frequency: RentFrequency, due_day: u8) -> Self {
        Self { frequency, due_day }
    }

    pub fn for_schedule(schedule: &BillingSchedule) -> Self {
        Self::new(schedule.frequency, schedule.effective_due_day())
    }

    /// next period boundary after `cursor`
    ///
    /// Monthly boundaries are the due day of the following month with
    /// calendar rollover: a due day past the end of that month spills into
    /// the month after (day 31 of April is May 1). Returns `None` only when
    /// the result would fall outside the representable date range.
    pub fn next_boundary(&self, cursor: NaiveDate) -> Option<NaiveDate> {
        match self.frequency {
            RentFrequency::Monthly => {
                let first_of_month = NaiveDate::from_ymd_opt(cursor.year(), cursor.month(), 1)?;
                first_of_month
                    .checked_add_months(Months::new(1))?
                    .checked_add_days(Days::new(u64::from(self.due_day.max(1)) - 1))
            }
            RentFrequency::Weekly => cursor.checked_add_days(Days::new(7)),
        }
    }

    /// iterate due dates starting with `start` itself
    pub fn due_dates(&self, start: NaiveDate) -> DueDates {
        DueDates {
            engine: *self,
            next: Some(start),
        }
    }

    /// count due dates in `[start, as_of]` and find the one after
    pub fn elapsed_periods(&self, start: NaiveDate, as_of: NaiveDate) -> Accrual {
        let mut periods_elapsed = 0u32;
        let mut cursor = start;

        while cursor <= as_of {
            periods_elapsed += 1;
            match self.next_boundary(cursor) {
                Some(next) => cursor = next,
                None => break,
            }
        }

        Accrual {
            periods_elapsed,
            next_due_date: cursor,
        }
    }
}

/// iterator over successive due dates
#[derive(Debug, Clone)]
pub struct DueDates {
    engine: AccrualEngine,
    next: Option<NaiveDate>,
}

impl Iterator for DueDates {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        let current = self.next?;
        self.next = self.engine.next_boundary(current);
        Some(current)
    }
}
