use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One bookable time window, UTC instants on the wire.
///
/// A slot is only meaningful for the (date, service, party size) it was
/// fetched under; a fresh fetch replaces the whole set, never patches it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Slot {
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
}

/// Response of an availability check: the bookable slots for one
/// (date, service, party size) query plus the business timezone that every
/// slot in this response must be displayed in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Availability {
    pub slots: Vec<Slot>,
    pub business_timezone: String,
}

impl Availability {
    /// Membership check by exact start instant, the identity slots are
    /// re-validated under after each fetch.
    pub fn contains(&self, starts_at: DateTime<Utc>) -> bool {
        self.slots.iter().any(|s| s.starts_at == starts_at)
    }
}
