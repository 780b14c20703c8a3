use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::serialization::lenient_id;

/// Declares an opaque string id. Stored records may carry uuids, short
/// base-36 strings or numbers, so the id is kept as text; fresh ids are
/// random uuids.
macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// fresh random id
            pub fn generate() -> Self {
                $name(Uuid::new_v4().to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.pad(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                $name(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                $name(id.to_string())
            }
        }

        impl From<Uuid> for $name {
            fn from(id: Uuid) -> Self {
                $name(id.to_string())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                lenient_id(deserializer).map($name)
            }
        }
    };
}

record_id!(
    /// unique identifier for a tenant
    TenantId
);

record_id!(
    /// unique identifier for a payment record
    PaymentId
);

/// billing cycle
///
/// Stored records are read with `serialization::lenient_frequency`, where
/// anything other than `"Monthly"` bills weekly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum RentFrequency {
    /// rent falls due once per calendar month
    #[default]
    Monthly,
    /// rent falls due every seven days
    Weekly,
}

impl fmt::Display for RentFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RentFrequency::Monthly => f.pad("Monthly"),
            RentFrequency::Weekly => f.pad("Weekly"),
        }
    }
}

/// payment status of a tenant as of a reference date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentStatus {
    /// cumulative payments cover every elapsed period
    Paid,
    /// at least one elapsed period is not covered
    Overdue,
}

impl PaymentStatus {
    pub fn is_overdue(&self) -> bool {
        matches!(self, PaymentStatus::Overdue)
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentStatus::Paid => f.pad("Paid"),
            PaymentStatus::Overdue => f.pad("Overdue"),
        }
    }
}

const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// short label for a weekday index, 0 = Sunday
pub fn weekday_label(day: u8) -> Option<&'static str> {
    WEEKDAY_LABELS.get(day as usize).copied()
}
