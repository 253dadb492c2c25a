use crate::{
    models::order::CustomerTicketOrder,
    policy::{TicketPolicy, INFANT_PRICE},
};

/// `None` when the configured prices push the total past `u64::MAX`.
pub fn payment_amount(order: &CustomerTicketOrder, policy: &TicketPolicy) -> Option<u64> {
    let adults = u64::from(order.adult_count).checked_mul(policy.adult_price)?;
    let children = u64::from(order.child_count).checked_mul(policy.child_price)?;
    let infants = u64::from(order.infant_count).checked_mul(INFANT_PRICE)?;
    adults.checked_add(children)?.checked_add(infants)
}

/// Infants sit on an adult's lap.
pub fn seat_count(order: &CustomerTicketOrder) -> u32 {
    order.adult_count.saturating_add(order.child_count)
}
