use serde::{Deserialize, Serialize};

/// A bookable offering owned by a business.
///
/// `price_minor` is in integer minor currency units (cents); conversion to
/// major units happens only when rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub duration_minutes: u32,
    pub price_minor: i64,
    pub active: bool,
    pub mode: BookingMode,
    pub open_intervals: Vec<OpenInterval>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BookingMode {
    /// Availability follows the service's weekly open intervals.
    Appointment,
    /// Availability is computed session-by-session on the server; weekly
    /// intervals are ignored.
    Session,
}

/// One weekly opening window: a lowercase three-letter weekday plus
/// `HH:MM` start/end wall-clock times in the business timezone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenInterval {
    pub day: String,
    pub start: String,
    pub end: String,
}

impl Service {
    /// Weekly opening hours as one human-readable line, days in Mon..Sun
    /// order regardless of wire order. Empty string for a service with no
    /// intervals (session mode, typically).
    pub fn weekly_hours(&self) -> String {
        if self.open_intervals.is_empty() {
            return String::new();
        }

        let day_order = ["mon", "tue", "wed", "thu", "fri", "sat", "sun"];

        let mut sorted = self.open_intervals.clone();
        sorted.sort_by_key(|iv| {
            day_order
                .iter()
                .position(|d| *d == iv.day.to_lowercase())
                .unwrap_or(7)
        });

        sorted
            .iter()
            .map(|iv| format!("{}: {}-{}", capitalize(&iv.day), iv.start, iv.end))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Price in major units with the currency code, e.g. `"12.50 EUR"`.
    pub fn display_price(&self, currency: &str) -> String {
        format!(
            "{}.{:02} {}",
            self.price_minor / 100,
            self.price_minor % 100,
            currency
        )
    }
}

fn capitalize(s: &str) -> String {
    let mut c = s.chars();
    match c.next() {
        None => String::new(),
        Some(f) => f.to_uppercase().to_string() + &c.as_str().to_lowercase(),
    }
}
