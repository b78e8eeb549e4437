use chrono::{DateTime, Duration, Utc};

use crate::api::{ApiError, BookingApi};
use crate::models::Booking;

/// Customers may cancel up to one hour before the booking starts. The
/// comparison is between instants, so it holds in every timezone.
const CANCELLATION_CUTOFF_MINUTES: i64 = 60;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CancelError {
    #[error("Bookings can only be cancelled up to an hour before they start.")]
    TooLate,

    #[error("{0}")]
    Rejected(String),
}

/// Whether a customer-initiated cancellation is still allowed at `now`.
pub fn can_cancel(booking: &Booking, now: DateTime<Utc>) -> bool {
    now + Duration::minutes(CANCELLATION_CUTOFF_MINUTES) <= booking.starts_at
}

/// Retrieve a booking for an unauthenticated customer; the phone number is
/// the lookup credential.
pub async fn find_booking(
    api: &dyn BookingApi,
    booking_id: &str,
    phone: &str,
) -> Result<Booking, ApiError> {
    api.booking_details(booking_id, phone).await
}

/// Cancel a booking on the customer's behalf. The cutoff is enforced here
/// before the network call; server rejections (the backend re-checks) come
/// back verbatim.
pub async fn cancel_booking(
    api: &dyn BookingApi,
    booking: &Booking,
    phone: &str,
    now: DateTime<Utc>,
) -> Result<Booking, CancelError> {
    if !can_cancel(booking, now) {
        return Err(CancelError::TooLate);
    }
    tracing::info!(booking_id = %booking.id, "cancelling booking");
    api.cancel_booking(&booking.id, phone)
        .await
        .map_err(|e| CancelError::Rejected(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BookingStatus, Customer};

    fn booking(starts_at: &str) -> Booking {
        Booking {
            id: "bkg-1".to_string(),
            service_id: "svc-1".to_string(),
            table_id: "t1".to_string(),
            starts_at: starts_at.parse().unwrap(),
            ends_at: "2025-03-01T18:00:00Z".parse().unwrap(),
            party_size: 2,
            customer: Customer {
                name: "Jane Doe".to_string(),
                phone: "+15551234567".to_string(),
                email: None,
            },
            status: BookingStatus::Confirmed,
        }
    }

    fn utc(s: &str) -> DateTime<Utc> {
        s.parse().unwrap()
    }

    #[test]
    fn test_cancel_allowed_well_before_start() {
        let b = booking("2025-03-01T17:00:00Z");
        assert!(can_cancel(&b, utc("2025-03-01T10:00:00Z")));
    }

    #[test]
    fn test_cancel_allowed_exactly_at_cutoff() {
        let b = booking("2025-03-01T17:00:00Z");
        assert!(can_cancel(&b, utc("2025-03-01T16:00:00Z")));
    }

    #[test]
    fn test_cancel_blocked_inside_cutoff() {
        let b = booking("2025-03-01T17:00:00Z");
        assert!(!can_cancel(&b, utc("2025-03-01T16:00:01Z")));
    }

    #[test]
    fn test_cancel_blocked_after_start() {
        let b = booking("2025-03-01T17:00:00Z");
        assert!(!can_cancel(&b, utc("2025-03-01T17:30:00Z")));
    }
}
