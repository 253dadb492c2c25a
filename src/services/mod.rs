use std::sync::Arc;

use crate::models::{
    error::{PaymentError, ReservationError},
    order::AccountId,
};

pub mod blackhole;
pub mod in_memory;

/// Charges an account. Implemented by the payment gateway.
pub trait TicketPaymentService {
    fn make_payment(&self, account_id: AccountId, amount: u64) -> Result<(), PaymentError>;
}

/// Books seats for an account. Implemented by the venue's seat booking system.
pub trait SeatReservationService {
    fn reserve_seat(&self, account_id: AccountId, seats: u32) -> Result<(), ReservationError>;
}

impl<T: TicketPaymentService + ?Sized> TicketPaymentService for &T {
    fn make_payment(&self, account_id: AccountId, amount: u64) -> Result<(), PaymentError> {
        (**self).make_payment(account_id, amount)
    }
}

impl<T: TicketPaymentService + ?Sized> TicketPaymentService for Arc<T> {
    fn make_payment(&self, account_id: AccountId, amount: u64) -> Result<(), PaymentError> {
        (**self).make_payment(account_id, amount)
    }
}

impl<T: SeatReservationService + ?Sized> SeatReservationService for &T {
    fn reserve_seat(&self, account_id: AccountId, seats: u32) -> Result<(), ReservationError> {
        (**self).reserve_seat(account_id, seats)
    }
}

impl<T: SeatReservationService + ?Sized> SeatReservationService for Arc<T> {
    fn reserve_seat(&self, account_id: AccountId, seats: u32) -> Result<(), ReservationError> {
        (**self).reserve_seat(account_id, seats)
    }
}
