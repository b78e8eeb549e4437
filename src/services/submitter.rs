use crate::models::{BookingDraft, BookingRequest, Customer, Table};
use crate::services::assigner::NoTableAvailable;

/// Customer-entered contact fields, exactly as typed.
#[derive(Debug, Clone, Default)]
pub struct CustomerDetails {
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
}

/// A single failed validation check. Every failing check is reported, so
/// the customer sees all problems at once rather than just the first.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("Please enter your name.")]
    NameRequired,

    #[error("Please enter your phone number.")]
    PhoneRequired,

    #[error("That phone number contains characters we don't recognize.")]
    PhoneInvalid,

    #[error("That email address doesn't look right.")]
    EmailInvalid,

    #[error("{0}")]
    NoTable(#[from] NoTableAvailable),
}

/// Run every customer-field check and collect all failures.
pub fn validate_customer(details: &CustomerDetails) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if details.name.trim().is_empty() {
        errors.push(FieldError::NameRequired);
    }

    let phone = details.phone.trim();
    if phone.is_empty() {
        errors.push(FieldError::PhoneRequired);
    } else if !phone_is_plausible(phone) {
        errors.push(FieldError::PhoneInvalid);
    }

    if let Some(email) = details.email.as_deref() {
        let email = email.trim();
        if !email.is_empty() && !email_is_plausible(email) {
            errors.push(FieldError::EmailInvalid);
        }
    }

    errors
}

/// Assemble the creation request from the draft, the table assignment and
/// the customer fields. Field failures and a missing table are collected
/// together; the slot's instants pass through untouched.
pub fn prepare(
    draft: &BookingDraft,
    table: Result<&Table, NoTableAvailable>,
    details: &CustomerDetails,
) -> Result<BookingRequest, Vec<FieldError>> {
    let mut errors = validate_customer(details);

    let table_id = match table {
        Ok(table) => Some(table.id.clone()),
        Err(e) => {
            errors.push(FieldError::NoTable(e));
            None
        }
    };

    if !errors.is_empty() {
        return Err(errors);
    }

    let email = details
        .email
        .as_deref()
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .map(str::to_string);

    Ok(BookingRequest {
        service_id: draft.service_id.clone(),
        table_id: table_id.unwrap_or_default(),
        starts_at: draft.slot.starts_at,
        ends_at: draft.slot.ends_at,
        party_size: draft.party_size,
        customer: Customer {
            name: details.name.trim().to_string(),
            phone: details.phone.trim().to_string(),
            email,
        },
    })
}

/// Permissive phone shape: `+`, digits, spaces, parens and hyphens, with at
/// least one digit.
fn phone_is_plausible(phone: &str) -> bool {
    phone.chars().any(|c| c.is_ascii_digit())
        && phone
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '+' | ' ' | '(' | ')' | '-'))
}

/// Standard `local@domain.tld` shape, nothing stricter.
fn email_is_plausible(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}
