use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;

use super::{ApiError, BookingApi};
use crate::models::{Availability, Booking, BookingRequest, Business, Service, Table};

/// REST implementation of [`BookingApi`].
///
/// Error responses are expected as `{"error": "..."}`; the message is
/// forwarded verbatim in [`ApiError::Rejected`].
pub struct RestApi {
    base_url: String,
    client: reqwest::Client,
}

impl RestApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let resp = self
            .client
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await?;
        decode(resp).await
    }

    async fn post_json<B: serde::Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let resp = self
            .client
            .post(format!("{}{}", self.base_url, path))
            .json(body)
            .send()
            .await?;
        decode(resp).await
    }
}

async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return resp
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()));
    }
    Err(rejection(status, resp.text().await.unwrap_or_default()))
}

fn rejection(status: StatusCode, body: String) -> ApiError {
    let message = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|v| v["error"].as_str().map(str::to_string))
        .unwrap_or_else(|| {
            if body.trim().is_empty() {
                format!("request failed with status {}", status.as_u16())
            } else {
                body
            }
        });
    ApiError::Rejected {
        status: status.as_u16(),
        message,
    }
}

#[async_trait]
impl BookingApi for RestApi {
    async fn business_details(&self, slug: &str) -> Result<Business, ApiError> {
        self.get_json(&format!("/api/public/{slug}")).await
    }

    async fn business_services(&self, slug: &str) -> Result<Vec<Service>, ApiError> {
        self.get_json(&format!("/api/public/{slug}/services")).await
    }

    async fn service_tables(&self, slug: &str, service_id: &str) -> Result<Vec<Table>, ApiError> {
        self.get_json(&format!("/api/public/{slug}/services/{service_id}/tables"))
            .await
    }

    async fn check_availability(
        &self,
        slug: &str,
        service_id: &str,
        date: NaiveDate,
        party_size: u32,
    ) -> Result<Availability, ApiError> {
        self.get_json(&format!(
            "/api/public/{slug}/availability?service_id={service_id}&date={}&party_size={party_size}",
            date.format("%Y-%m-%d"),
        ))
        .await
    }

    async fn create_booking(
        &self,
        slug: &str,
        request: &BookingRequest,
    ) -> Result<Booking, ApiError> {
        self.post_json(&format!("/api/public/{slug}/bookings"), request)
            .await
    }

    async fn booking_details(&self, booking_id: &str, phone: &str) -> Result<Booking, ApiError> {
        self.get_json(&format!(
            "/api/bookings/{booking_id}?phone={}",
            urlencode(phone)
        ))
        .await
    }

    async fn cancel_booking(&self, booking_id: &str, phone: &str) -> Result<Booking, ApiError> {
        self.post_json(
            &format!("/api/bookings/{booking_id}/cancel"),
            &serde_json::json!({ "phone": phone }),
        )
        .await
    }
}

/// Minimal percent-encoding for the phone query parameter; `+` would
/// otherwise decode as a space.
fn urlencode(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for b in s.bytes() {
        match b {
            b'0'..=b'9' | b'a'..=b'z' | b'A'..=b'Z' | b'-' | b'_' | b'.' | b'~' => {
                out.push(b as char)
            }
            _ => out.push_str(&format!("%{b:02X}")),
        }
    }
    out
}
