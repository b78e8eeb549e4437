pub mod rest;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::models::{Availability, Booking, BookingRequest, Business, Service, Table};

pub use rest::RestApi;

/// Failure of a backend call, split by who gets to explain it.
///
/// `Rejected` carries the server's own message verbatim so conflict
/// explanations ("that slot was just booked") reach the customer unchanged.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("unexpected response: {0}")]
    Decode(String),
}

/// The storefront backend, at its request/response boundary.
///
/// Availability computation, conflict prevention and booking persistence all
/// live behind this seam; the client only consumes them. Tests swap in an
/// in-memory implementation.
#[async_trait]
pub trait BookingApi: Send + Sync {
    async fn business_details(&self, slug: &str) -> Result<Business, ApiError>;

    async fn business_services(&self, slug: &str) -> Result<Vec<Service>, ApiError>;

    async fn service_tables(&self, slug: &str, service_id: &str) -> Result<Vec<Table>, ApiError>;

    async fn check_availability(
        &self,
        slug: &str,
        service_id: &str,
        date: NaiveDate,
        party_size: u32,
    ) -> Result<Availability, ApiError>;

    async fn create_booking(
        &self,
        slug: &str,
        request: &BookingRequest,
    ) -> Result<Booking, ApiError>;

    /// Phone acts as a lightweight lookup credential for unauthenticated
    /// customers.
    async fn booking_details(&self, booking_id: &str, phone: &str) -> Result<Booking, ApiError>;

    async fn cancel_booking(&self, booking_id: &str, phone: &str) -> Result<Booking, ApiError>;
}
