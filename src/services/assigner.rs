use crate::models::Table;

/// No table can seat the party. A user-facing validation outcome, not a
/// failure: it blocks submission and renders guidance.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Sorry, we don't have a table for a party of {party_size}. Try a smaller party size or another date.")]
pub struct NoTableAvailable {
    pub party_size: u32,
}

/// Pick the table for a party, with no choice exposed to the customer.
///
/// First fit in upstream order: the first active table with enough seats
/// wins. The list is never re-sorted; the backend's ordering is part of
/// the contract, and smallest-sufficient or any other heuristic would
/// change which table real bookings land on.
pub fn assign_table(tables: &[Table], party_size: u32) -> Result<&Table, NoTableAvailable> {
    tables
        .iter()
        .filter(|t| t.active)
        .find(|t| t.seats >= party_size)
        .ok_or(NoTableAvailable { party_size })
}
