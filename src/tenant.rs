use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::BillingSchedule;
use crate::decimal::Money;
use crate::errors::Result;
use crate::types::{RentFrequency, TenantId};

/// a tenant and their billing schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tenant {
    pub id: TenantId,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(flatten)]
    pub schedule: BillingSchedule,
}

impl Tenant {
    pub fn new(name: impl Into<String>, schedule: BillingSchedule) -> Self {
        Self {
            id: TenantId::generate(),
            name: name.into(),
            phone: None,
            schedule,
        }
    }

    /// builder for creating tenants
    pub fn builder() -> TenantBuilder {
        TenantBuilder::new()
    }
}

/// builder for tenants
pub struct TenantBuilder {
    id: Option<TenantId>,
    name: String,
    phone: Option<String>,
    rent: Money,
    frequency: RentFrequency,
    due_day: u8,
    due_day_of_week: u8,
    start_date: Option<NaiveDate>,
}

impl TenantBuilder {
    pub fn new() -> Self {
        Self {
            id: None,
            name: String::new(),
            phone: None,
            rent: Money::ZERO,
            frequency: RentFrequency::Monthly,
            due_day: 1,
            due_day_of_week: 1,
            start_date: None,
        }
    }

    pub fn id(mut self, id: TenantId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn rent(mut self, rent: Money) -> Self {
        self.rent = rent;
        self
    }

    /// monthly billing due on `day`
    pub fn monthly(mut self, day: u8) -> Self {
        self.frequency = RentFrequency::Monthly;
        self.due_day = day;
        self
    }

    /// weekly billing due on `day_of_week` (0 = Sunday)
    pub fn weekly(mut self, day_of_week: u8) -> Self {
        self.frequency = RentFrequency::Weekly;
        self.due_day_of_week = day_of_week;
        self
    }

    pub fn start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    /// build without validation; a missing start date falls back to today at computation time
    pub fn build_unchecked(self) -> Tenant {
        let schedule = BillingSchedule {
            rent_amount: self.rent,
            frequency: self.frequency,
            monthly_due_day: (self.frequency == RentFrequency::Monthly).then_some(self.due_day),
            weekly_due_day_of_week: (self.frequency == RentFrequency::Weekly)
                .then_some(self.due_day_of_week),
            start_date: self.start_date,
        };

        Tenant {
            id: self.id.unwrap_or_else(TenantId::generate),
            name: self.name,
            phone: self.phone,
            schedule,
        }
    }

    /// build and validate the schedule
    pub fn build(self) -> Result<Tenant> {
        let tenant = self.build_unchecked();
        tenant.schedule.validate()?;
        Ok(tenant)
    }
}

impl Default for TenantBuilder {
    fn default() -> Self {
        Self::new()
    }
}
