use serde::{Deserialize, Serialize};

use crate::models::error::PolicyError;

pub const ADULT_PRICE: u64 = 20;
pub const CHILD_PRICE: u64 = 10;
pub const INFANT_PRICE: u64 = 0;
pub const MAX_TICKETS_PER_PURCHASE: u32 = 20;

/// Prices and allocation limit applied to every purchase. Infants are always
/// free.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct TicketPolicy {
    pub adult_price: u64,
    pub child_price: u64,
    pub max_tickets_per_purchase: u32,
}

impl Default for TicketPolicy {
    fn default() -> Self {
        Self {
            adult_price: ADULT_PRICE,
            child_price: CHILD_PRICE,
            max_tickets_per_purchase: MAX_TICKETS_PER_PURCHASE,
        }
    }
}

impl TicketPolicy {
    /// Fields missing from `json` keep their default value.
    pub fn from_json(json: &str) -> Result<Self, PolicyError> {
        Ok(serde_json::from_str(json)?)
    }
}
