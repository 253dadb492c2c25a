use crate::{
    models::{
        error::InvalidPurchase,
        order::AccountId,
        ticket::{TicketType, TicketTypeRequest},
    },
    policy::MAX_TICKETS_PER_PURCHASE,
};

/// Checks the purchase rules with the default allocation limit.
pub fn validate(account_id: AccountId, requests: &[TicketTypeRequest]) -> Result<(), InvalidPurchase> {
    validate_with_limit(account_id, requests, MAX_TICKETS_PER_PURCHASE)
}

/// Rules are checked in order: account id, at least one adult ticket, at most
/// `max_tickets` tickets in total.
///
/// The adult rule is on the summed adult count, not on the presence of an
/// `Adult` request: `[Adult x 0, Child x 2]` is rejected as missing an adult,
/// where a type-presence check would have let the children through alone.
pub fn validate_with_limit(
    account_id: AccountId,
    requests: &[TicketTypeRequest],
    max_tickets: u32,
) -> Result<(), InvalidPurchase> {
    validate_account_id(account_id)?;

    let adults: u64 = requests
        .iter()
        .filter(|r| r.ticket_type() == TicketType::Adult)
        .map(|r| u64::from(r.count()))
        .sum();
    if adults < 1 {
        return Err(InvalidPurchase::MissingAdult);
    }

    let total: u64 = requests.iter().map(|r| u64::from(r.count())).sum();
    if total > u64::from(max_tickets) {
        return Err(InvalidPurchase::ExceedsMaxAllocation(max_tickets));
    }

    Ok(())
}

pub fn validate_account_id(account_id: AccountId) -> Result<(), InvalidPurchase> {
    if account_id < 1 {
        return Err(InvalidPurchase::InvalidAccountId(account_id));
    }
    Ok(())
}
