use chrono::{DateTime, NaiveDate, Utc};

use crate::models::{Availability, BookingDraft, Slot, Table};

/// Fetch lifecycle of the availability screen. Any date or party-size
/// change re-enters `Loading`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchPhase {
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// Handle for one availability fetch. Applying a result requires the
/// ticket it was fetched under; a ticket from a superseded fetch no longer
/// applies, which is what makes response ordering last-request-wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    pub date: NaiveDate,
    pub party_size: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectError {
    #[error("That date has already passed. Please pick today or a later date.")]
    PastDate,

    #[error("Party size must be at least 1.")]
    PartySizeTooSmall,

    #[error("That time isn't in the current availability.")]
    SlotNotOffered,

    #[error("Availability hasn't loaded yet.")]
    NotLoaded,
}

/// Calendar/slot selection state machine for one service.
///
/// Owns the availability matrix and eligible tables for the lifetime of one
/// (date, party size) query; both are replaced wholesale on every parameter
/// change and never patched.
#[derive(Debug)]
pub struct SlotSelector {
    /// The viewer's current calendar day; past-date checks compare against
    /// this at day granularity.
    today: NaiveDate,
    date: NaiveDate,
    party_size: u32,
    generation: u64,
    phase: FetchPhase,
    slots: Vec<Slot>,
    tables: Vec<Table>,
    business_timezone: Option<String>,
    selected: Option<Slot>,
    error: Option<String>,
}

impl SlotSelector {
    /// Starts on `today` with a party of one, nothing fetched yet.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            date: today,
            party_size: 1,
            generation: 0,
            phase: FetchPhase::Idle,
            slots: Vec::new(),
            tables: Vec::new(),
            business_timezone: None,
            selected: None,
            error: None,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn party_size(&self) -> u32 {
        self.party_size
    }

    pub fn phase(&self) -> FetchPhase {
        self.phase
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    /// Zone of the most recently applied matrix, authoritative for
    /// displaying its slots.
    pub fn business_timezone(&self) -> Option<&str> {
        self.business_timezone.as_deref()
    }

    pub fn selected(&self) -> Option<&Slot> {
        self.selected.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Move to another calendar day. Days strictly before today are
    /// rejected with the state untouched. On success the previous slot
    /// selection is cleared and a new fetch begins.
    pub fn select_date(&mut self, date: NaiveDate) -> Result<FetchTicket, SelectError> {
        if date < self.today {
            return Err(SelectError::PastDate);
        }
        self.date = date;
        self.selected = None;
        Ok(self.begin_fetch())
    }

    pub fn select_party_size(&mut self, party_size: u32) -> Result<FetchTicket, SelectError> {
        if party_size < 1 {
            return Err(SelectError::PartySizeTooSmall);
        }
        self.party_size = party_size;
        self.selected = None;
        Ok(self.begin_fetch())
    }

    /// Re-fetch for the current parameters, e.g. after a failure. Unlike a
    /// parameter change this keeps the current selection; `apply`
    /// re-validates it against whatever comes back.
    pub fn refresh(&mut self) -> FetchTicket {
        self.begin_fetch()
    }

    fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        self.phase = FetchPhase::Loading;
        self.error = None;
        tracing::debug!(
            generation = self.generation,
            date = %self.date,
            party_size = self.party_size,
            "fetching availability"
        );
        FetchTicket {
            generation: self.generation,
            date: self.date,
            party_size: self.party_size,
        }
    }

    /// Apply the outcome of the fetch identified by `ticket`.
    ///
    /// Returns `false`, leaving the state untouched, when the ticket was
    /// superseded by a newer parameter change, even if its response arrived
    /// last. On success, a previously selected slot is re-validated by
    /// exact start instant and silently deselected when the fresh matrix no
    /// longer offers it (someone else booked it; not an error). On failure
    /// the slots are emptied rather than left stale.
    pub fn apply(
        &mut self,
        ticket: FetchTicket,
        outcome: Result<(Availability, Vec<Table>), String>,
    ) -> bool {
        if ticket.generation != self.generation {
            tracing::debug!(
                ticket = ticket.generation,
                current = self.generation,
                "discarding superseded availability response"
            );
            return false;
        }

        match outcome {
            Ok((matrix, tables)) => {
                if let Some(slot) = self.selected.take() {
                    if matrix.contains(slot.starts_at) {
                        self.selected = Some(slot);
                    } else {
                        tracing::info!(
                            starts_at = %slot.starts_at,
                            "previously selected slot gone from fresh availability"
                        );
                    }
                }
                self.slots = matrix.slots;
                self.business_timezone = Some(matrix.business_timezone);
                self.tables = tables;
                self.phase = FetchPhase::Loaded;
                self.error = None;
            }
            Err(message) => {
                self.slots.clear();
                self.tables.clear();
                self.selected = None;
                self.phase = FetchPhase::Failed;
                self.error = Some(message);
            }
        }
        true
    }

    /// Select a slot out of the current matrix. Only valid once loaded, and
    /// only for a slot the matrix actually contains; anything else is a
    /// caller bug and is rejected rather than accepted silently.
    pub fn select_slot(&mut self, starts_at: DateTime<Utc>) -> Result<(), SelectError> {
        if self.phase != FetchPhase::Loaded {
            return Err(SelectError::NotLoaded);
        }
        let slot = self
            .slots
            .iter()
            .find(|s| s.starts_at == starts_at)
            .cloned()
            .ok_or(SelectError::SlotNotOffered)?;
        self.selected = Some(slot);
        Ok(())
    }

    /// Package the draft for the booking form. `None` until a slot is
    /// selected; the table is assigned later, at submission time.
    pub fn draft(&self, service_id: &str) -> Option<BookingDraft> {
        self.selected.as_ref().map(|slot| BookingDraft {
            service_id: service_id.to_string(),
            date: self.date,
            slot: slot.clone(),
            party_size: self.party_size,
            table_id: None,
        })
    }
}
