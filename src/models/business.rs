use serde::{Deserialize, Serialize};

/// Public profile of a business, as returned by the storefront API.
///
/// `timezone` is an IANA zone name (e.g. `"Europe/Tirane"`) and is
/// authoritative for displaying every timestamp belonging to this business.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Business {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub timezone: String,
    pub currency: String,
    pub address_line: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub logo_url: Option<String>,
}
