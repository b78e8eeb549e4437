use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};

use crate::api::{ApiError, BookingApi};
use crate::models::{Availability, Booking, Service, Table};
use crate::services::assigner::{self, NoTableAvailable};
use crate::services::selector::{FetchTicket, SelectError, SlotSelector};
use crate::services::submitter::{self, CustomerDetails, FieldError};

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// One entry per failing check; all surfaced together.
    #[error("some fields need attention")]
    Validation(Vec<FieldError>),

    #[error("No time slot selected.")]
    NoSlotSelected,

    #[error("Your booking is already being submitted.")]
    InFlight,

    /// The server's explanation, verbatim; typically a slot that was
    /// booked away between selection and submission.
    #[error("{0}")]
    Rejected(String),
}

/// One customer's booking flow for one service: owns the API handle and the
/// selector, and guarantees that every date/party-size change produces
/// exactly one superseding fetch whose result passes through the
/// generation guard.
pub struct BookingSession {
    api: Arc<dyn BookingApi>,
    slug: String,
    service: Service,
    selector: SlotSelector,
    submitting: bool,
}

impl BookingSession {
    /// `today` is the viewer's current calendar day in their own locale
    /// (`Local::now().date_naive()` in the binary); past-date checks
    /// compare against it.
    pub fn new(api: Arc<dyn BookingApi>, slug: impl Into<String>, service: Service, today: NaiveDate) -> Self {
        Self {
            api,
            slug: slug.into(),
            service,
            selector: SlotSelector::new(today),
            submitting: false,
        }
    }

    pub fn service(&self) -> &Service {
        &self.service
    }

    pub fn selector(&self) -> &SlotSelector {
        &self.selector
    }

    /// Whether a submission is in flight; the submit control must be
    /// disabled while this is true.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub async fn set_date(&mut self, date: NaiveDate) -> Result<(), SelectError> {
        let ticket = self.selector.select_date(date)?;
        self.run_fetch(ticket).await;
        Ok(())
    }

    pub async fn set_party_size(&mut self, party_size: u32) -> Result<(), SelectError> {
        let ticket = self.selector.select_party_size(party_size)?;
        self.run_fetch(ticket).await;
        Ok(())
    }

    /// Manual retry for the current parameters, e.g. after a failed fetch.
    pub async fn refresh(&mut self) {
        let ticket = self.selector.refresh();
        self.run_fetch(ticket).await;
    }

    async fn run_fetch(&mut self, ticket: FetchTicket) {
        let outcome = self.fetch(ticket).await.map_err(|e| e.to_string());
        self.selector.apply(ticket, outcome);
    }

    async fn fetch(&self, ticket: FetchTicket) -> Result<(Availability, Vec<Table>), ApiError> {
        let matrix = self
            .api
            .check_availability(&self.slug, &self.service.id, ticket.date, ticket.party_size)
            .await?;
        let tables = self.api.service_tables(&self.slug, &self.service.id).await?;
        Ok((matrix, tables))
    }

    pub fn select_slot(&mut self, starts_at: DateTime<Utc>) -> Result<(), SelectError> {
        self.selector.select_slot(starts_at)
    }

    /// The table this party would get, recomputed from the current table
    /// list and party size on every call, never cached across a change.
    pub fn assigned_table(&self) -> Result<&Table, NoTableAvailable> {
        assigner::assign_table(self.selector.tables(), self.selector.party_size())
    }

    /// Validate, assemble and submit the booking. The draft is consumed by
    /// this one call; entered customer details stay with the caller so a
    /// rejected submission can be retried without re-typing.
    pub async fn submit(&mut self, details: &CustomerDetails) -> Result<Booking, SubmitError> {
        if self.submitting {
            return Err(SubmitError::InFlight);
        }
        let draft = self
            .selector
            .draft(&self.service.id)
            .ok_or(SubmitError::NoSlotSelected)?;
        let assignment = self.assigned_table();
        let request =
            submitter::prepare(&draft, assignment, details).map_err(SubmitError::Validation)?;

        self.submitting = true;
        tracing::info!(
            service_id = %request.service_id,
            starts_at = %request.starts_at,
            party_size = request.party_size,
            "submitting booking"
        );
        let result = self.api.create_booking(&self.slug, &request).await;
        self.submitting = false;

        match result {
            Ok(booking) => {
                tracing::info!(booking_id = %booking.id, "booking created");
                Ok(booking)
            }
            Err(e) => {
                tracing::warn!(error = %e, "booking rejected");
                Err(SubmitError::Rejected(e.to_string()))
            }
        }
    }
}
