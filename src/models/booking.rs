use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Slot;

/// A booking as the server knows it. Status transitions are server-owned;
/// this client only initiates creation and cancellation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    pub service_id: String,
    pub table_id: String,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub party_size: u32,
    pub customer: Customer,
    pub status: BookingStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
    NoShow,
    Rescheduled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::Completed => "completed",
            BookingStatus::NoShow => "no_show",
            BookingStatus::Rescheduled => "rescheduled",
        }
    }
}

/// Payload of a booking creation call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRequest {
    pub service_id: String,
    pub table_id: String,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub party_size: u32,
    pub customer: Customer,
}

/// Client-only state accumulated between the availability screen and the
/// booking form. Carried by value between flow stages, consumed exactly
/// once at submission; never persisted.
#[derive(Debug, Clone)]
pub struct BookingDraft {
    pub service_id: String,
    pub date: NaiveDate,
    pub slot: Slot,
    pub party_size: u32,
    pub table_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_format() {
        let status: BookingStatus = serde_json::from_str("\"no_show\"").unwrap();
        assert_eq!(status, BookingStatus::NoShow);
        assert_eq!(status.as_str(), "no_show");
        assert_eq!(
            serde_json::to_string(&BookingStatus::Confirmed).unwrap(),
            "\"confirmed\""
        );
    }

    #[test]
    fn test_customer_email_omitted_when_absent() {
        let customer = Customer {
            name: "Jane Doe".to_string(),
            phone: "+15551234567".to_string(),
            email: None,
        };
        let json = serde_json::to_string(&customer).unwrap();
        assert!(!json.contains("email"));
    }
}
