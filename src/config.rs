use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::errors::{LedgerError, Result};
use crate::serialization::{lenient_date, lenient_day, lenient_frequency, lenient_money};
use crate::types::{weekday_label, RentFrequency};

/// billing schedule for one tenant
///
/// Field names follow the stored record format so a schedule can be
/// flattened straight into a tenant record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingSchedule {
    /// rent owed per period, whatever the frequency
    #[serde(rename = "monthlyRent", default, deserialize_with = "lenient_money")]
    pub rent_amount: Money,
    /// absent or unrecognised values bill weekly
    #[serde(
        default = "crate::serialization::missing_frequency",
        deserialize_with = "lenient_frequency"
    )]
    pub frequency: RentFrequency,
    /// day of month (1-31), used only for monthly schedules
    #[serde(
        rename = "dueDay",
        default,
        deserialize_with = "lenient_day",
        skip_serializing_if = "Option::is_none"
    )]
    pub monthly_due_day: Option<u8>,
    /// 0 (Sun) - 6 (Sat), used only for weekly schedules
    #[serde(
        rename = "dueDayOfWeek",
        default,
        deserialize_with = "lenient_day",
        skip_serializing_if = "Option::is_none"
    )]
    pub weekly_due_day_of_week: Option<u8>,
    /// `None` when absent or unreadable
    #[serde(default, deserialize_with = "lenient_date")]
    pub start_date: Option<NaiveDate>,
}

impl BillingSchedule {
    /// create monthly schedule due on `due_day`
    pub fn monthly(rent_amount: Money, due_day: u8, start_date: NaiveDate) -> Self {
        Self {
            rent_amount,
            frequency: RentFrequency::Monthly,
            monthly_due_day: Some(due_day),
            weekly_due_day_of_week: None,
            start_date: Some(start_date),
        }
    }

    /// create weekly schedule due on `day_of_week` (0 = Sunday)
    pub fn weekly(rent_amount: Money, day_of_week: u8, start_date: NaiveDate) -> Self {
        Self {
            rent_amount,
            frequency: RentFrequency::Weekly,
            monthly_due_day: None,
            weekly_due_day_of_week: Some(day_of_week),
            start_date: Some(start_date),
        }
    }

    /// due day used when stepping monthly boundaries; missing or zero means the 1st
    pub fn effective_due_day(&self) -> u8 {
        match self.monthly_due_day {
            Some(day) if day > 0 => day,
            _ => 1,
        }
    }

    /// strict validation for callers that want to reject bad input up front
    ///
    /// The snapshot computation itself never calls this.
    pub fn validate(&self) -> Result<()> {
        if self.rent_amount.is_negative() {
            return Err(LedgerError::NegativeAmount {
                amount: self.rent_amount,
            });
        }

        if self.start_date.is_none() {
            return Err(LedgerError::MissingStartDate);
        }

        match self.frequency {
            RentFrequency::Monthly => {
                if let Some(day) = self.monthly_due_day {
                    if !(1..=31).contains(&day) {
                        return Err(LedgerError::InvalidDueDay { day });
                    }
                }
            }
            RentFrequency::Weekly => {
                if let Some(day) = self.weekly_due_day_of_week {
                    if day > 6 {
                        return Err(LedgerError::InvalidDayOfWeek { day });
                    }
                }
            }
        }

        Ok(())
    }

    /// short description of the due rule, e.g. "Due Day 1" or "Due Mons"
    pub fn due_label(&self) -> String {
        match self.frequency {
            RentFrequency::Monthly => format!("Due Day {}", self.effective_due_day()),
            RentFrequency::Weekly => {
                let day = self.weekly_due_day_of_week.unwrap_or(0);
                format!("Due {}s", weekday_label(day).unwrap_or("Sun"))
            }
        }
    }
}

impl Default for BillingSchedule {
    fn default() -> Self {
        Self {
            rent_amount: Money::ZERO,
            frequency: RentFrequency::Monthly,
            monthly_due_day: Some(1),
            weekly_due_day_of_week: None,
            start_date: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_presets() {
        let monthly = BillingSchedule::monthly(Money::from_major(1000), 15, date(2024, 1, 1));
        assert_eq!(monthly.frequency, RentFrequency::Monthly);
        assert_eq!(monthly.effective_due_day(), 15);
        assert!(monthly.validate().is_ok());

        let weekly = BillingSchedule::weekly(Money::from_major(250), 1, date(2024, 1, 1));
        assert_eq!(weekly.frequency, RentFrequency::Weekly);
        assert_eq!(weekly.monthly_due_day, None);
        assert!(weekly.validate().is_ok());
    }

    #[test]
    fn test_effective_due_day_defaults_to_first() {
        let mut schedule = BillingSchedule::monthly(Money::from_major(1000), 0, date(2024, 1, 1));
        assert_eq!(schedule.effective_due_day(), 1);

        schedule.monthly_due_day = None;
        assert_eq!(schedule.effective_due_day(), 1);
    }

    #[test]
    fn test_validation_errors() {
        let schedule = BillingSchedule::monthly(Money::from_major(1000), 32, date(2024, 1, 1));
        assert!(matches!(schedule.validate(), Err(LedgerError::InvalidDueDay { day: 32 })));

        let schedule = BillingSchedule::weekly(Money::from_major(100), 7, date(2024, 1, 1));
        assert!(matches!(schedule.validate(), Err(LedgerError::InvalidDayOfWeek { day: 7 })));

        let schedule = BillingSchedule::monthly(Money::from_major(-5), 1, date(2024, 1, 1));
        assert!(matches!(schedule.validate(), Err(LedgerError::NegativeAmount { .. })));

        let schedule = BillingSchedule {
            start_date: None,
            ..BillingSchedule::monthly(Money::from_major(1000), 1, date(2024, 1, 1))
        };
        assert!(matches!(schedule.validate(), Err(LedgerError::MissingStartDate)));
    }

    #[test]
    fn test_due_labels() {
        let monthly = BillingSchedule::monthly(Money::from_major(1000), 5, date(2024, 1, 1));
        assert_eq!(monthly.due_label(), "Due Day 5");

        let weekly = BillingSchedule::weekly(Money::from_major(250), 5, date(2024, 1, 1));
        assert_eq!(weekly.due_label(), "Due Fris");
    }

    #[test]
    fn test_lenient_record_fields() {
        let schedule: BillingSchedule = serde_json::from_value(json!({
            "monthlyRent": "not a number",
            "frequency": "Monthly",
            "dueDay": 31,
            "startDate": "garbage"
        }))
        .unwrap();

        assert_eq!(schedule.rent_amount, Money::ZERO);
        assert_eq!(schedule.monthly_due_day, Some(31));
        assert_eq!(schedule.start_date, None);
    }

    #[test]
    fn test_unrecognised_frequency_bills_weekly() {
        let schedule: BillingSchedule = serde_json::from_value(json!({
            "monthlyRent": 200,
            "frequency": "Bi-weekly",
            "dueDayOfWeek": 2,
            "startDate": "2024-01-01"
        }))
        .unwrap();
        assert_eq!(schedule.frequency, RentFrequency::Weekly);
        assert_eq!(schedule.due_label(), "Due Tues");

        let schedule: BillingSchedule = serde_json::from_value(json!({
            "monthlyRent": 200,
            "startDate": "2024-01-01"
        }))
        .unwrap();
        assert_eq!(schedule.frequency, RentFrequency::Weekly);
    }
}
