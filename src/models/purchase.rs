use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{order::AccountId, order::CustomerTicketOrder, ticket::TicketTypeRequest};

pub type PurchaseId = Uuid;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct PurchaseRequest {
    pub account_id: AccountId,
    #[serde(default)]
    pub tickets: Vec<TicketTypeRequest>,
}

impl PurchaseRequest {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Issued once the account was charged `amount` and `seats` were reserved.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct PurchaseReceipt {
    pub purchase_id: PurchaseId,
    pub account_id: AccountId,
    pub amount: u64,
    pub seats: u32,
    pub order: CustomerTicketOrder,
}
