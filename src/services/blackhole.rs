use crate::models::{
    error::{PaymentError, ReservationError},
    order::AccountId,
};

use super::{SeatReservationService, TicketPaymentService};

/// Accepts every payment and reservation without doing anything.
#[derive(Debug, Default, Clone)]
pub struct Blackhole {}

impl TicketPaymentService for Blackhole {
    fn make_payment(&self, _account_id: AccountId, _amount: u64) -> Result<(), PaymentError> {
        Ok(())
    }
}

impl SeatReservationService for Blackhole {
    fn reserve_seat(&self, _account_id: AccountId, _seats: u32) -> Result<(), ReservationError> {
        Ok(())
    }
}
