use serde::{Deserialize, Serialize};

use super::ticket::{TicketType, TicketTypeRequest};

pub type AccountId = i64;

/// Per-category ticket counts of a single purchase.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct CustomerTicketOrder {
    pub account_id: AccountId,
    pub adult_count: u32,
    pub child_count: u32,
    pub infant_count: u32,
}

impl CustomerTicketOrder {
    pub fn total(&self) -> u64 {
        u64::from(self.adult_count) + u64::from(self.child_count) + u64::from(self.infant_count)
    }
}

/// Collapses the requests into per-category counts. Categories missing from
/// `requests` count as zero.
///
/// Never fails: business rules belong to [`crate::validation::validate`],
/// which must have accepted `requests` before the order is priced.
pub fn aggregate(account_id: AccountId, requests: &[TicketTypeRequest]) -> CustomerTicketOrder {
    let count_of = |ticket_type: TicketType| {
        requests
            .iter()
            .filter(|r| r.ticket_type() == ticket_type)
            .fold(0u32, |sum, r| sum.saturating_add(r.count()))
    };

    CustomerTicketOrder {
        account_id,
        adult_count: count_of(TicketType::Adult),
        child_count: count_of(TicketType::Child),
        infant_count: count_of(TicketType::Infant),
    }
}
