use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, RwLock,
};

use crate::models::{
    error::{PaymentError, ReservationError},
    order::AccountId,
};

use super::{SeatReservationService, TicketPaymentService};

/// Records every successful payment. Clones share the same journal.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPaymentService {
    payments: Arc<RwLock<Vec<Payment>>>,
    attempts: Arc<AtomicUsize>,
    failure: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Payment {
    pub account_id: AccountId,
    pub amount: u64,
}

impl InMemoryPaymentService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every payment is declined with `reason`.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            failure: Some(reason.into()),
            ..Self::default()
        }
    }

    pub fn payments(&self) -> Vec<Payment> {
        self.payments.read().expect("payments lock").clone()
    }

    /// Calls made, including declined ones.
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

impl TicketPaymentService for InMemoryPaymentService {
    fn make_payment(&self, account_id: AccountId, amount: u64) -> Result<(), PaymentError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        if let Some(reason) = &self.failure {
            return Err(PaymentError(reason.clone()));
        }
        log::trace!("charging account {account_id} with {amount}");
        self.payments
            .write()
            .expect("payments lock")
            .push(Payment { account_id, amount });
        Ok(())
    }
}

/// Records every successful reservation. Clones share the same journal.
#[derive(Debug, Clone, Default)]
pub struct InMemorySeatReservationService {
    reservations: Arc<RwLock<Vec<Reservation>>>,
    attempts: Arc<AtomicUsize>,
    failure: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reservation {
    pub account_id: AccountId,
    pub seats: u32,
}

impl InMemorySeatReservationService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every reservation is refused with `reason`.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            failure: Some(reason.into()),
            ..Self::default()
        }
    }

    pub fn reservations(&self) -> Vec<Reservation> {
        self.reservations.read().expect("reservations lock").clone()
    }

    /// Calls made, including refused ones.
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

impl SeatReservationService for InMemorySeatReservationService {
    fn reserve_seat(&self, account_id: AccountId, seats: u32) -> Result<(), ReservationError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        if let Some(reason) = &self.failure {
            return Err(ReservationError(reason.clone()));
        }
        log::trace!("reserving {seats} seats for account {account_id}");
        self.reservations
            .write()
            .expect("reservations lock")
            .push(Reservation { account_id, seats });
        Ok(())
    }
}
