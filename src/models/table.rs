use serde::{Deserialize, Serialize};

/// A seatable unit belonging to a service.
///
/// Tables sharing a `merge_group` can be combined server-side; this client
/// only ever assigns a single table and treats the tag as opaque.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Table {
    pub id: String,
    pub code: String,
    pub seats: u32,
    pub merge_group: Option<String>,
    pub active: bool,
    pub service_id: String,
}
