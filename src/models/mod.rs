pub mod availability;
pub mod booking;
pub mod business;
pub mod service;
pub mod table;

pub use availability::{Availability, Slot};
pub use booking::{Booking, BookingDraft, BookingRequest, BookingStatus, Customer};
pub use business::Business;
pub use service::{BookingMode, OpenInterval, Service};
pub use table::Table;
