use std::{error::Error, fmt};

use super::order::AccountId;

/// A purchase rejected by the business rules, before any service was called.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidPurchase {
    InvalidAccountId(AccountId),
    MissingAdult,
    ExceedsMaxAllocation(u32),
}

impl fmt::Display for InvalidPurchase {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidAccountId(id) => {
                write!(f, "{id} is an invalid accountId in TicketTypeRequest")
            }
            Self::MissingAdult => write!(
                f,
                "TicketTypeRequest does not contain minimum 1 adult ticket type"
            ),
            Self::ExceedsMaxAllocation(max) => write!(
                f,
                "TicketTypeRequest ticket count exceeds max allocation of {max}"
            ),
        }
    }
}

impl Error for InvalidPurchase {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentError(pub String);

impl fmt::Display for PaymentError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Payment failed: {}", self.0)
    }
}

impl Error for PaymentError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationError(pub String);

impl fmt::Display for ReservationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Seat reservation failed: {}", self.0)
    }
}

impl Error for ReservationError {}

#[derive(Debug)]
pub enum PurchaseError {
    Invalid(InvalidPurchase),
    /// The configured prices cannot express the total. No service was called.
    AmountOverflow,
    /// Nothing was charged and no seats were reserved.
    Payment(PaymentError),
    /// `charged` has already been taken from the account and is not refunded.
    Reservation {
        source: ReservationError,
        charged: u64,
    },
}

impl PurchaseError {
    pub fn invalid_purchase(&self) -> Option<&InvalidPurchase> {
        match self {
            Self::Invalid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<InvalidPurchase> for PurchaseError {
    fn from(value: InvalidPurchase) -> Self {
        PurchaseError::Invalid(value)
    }
}

impl From<PaymentError> for PurchaseError {
    fn from(value: PaymentError) -> Self {
        PurchaseError::Payment(value)
    }
}

impl fmt::Display for PurchaseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PurchaseError::Invalid(e) => write!(f, "{e}"),
            PurchaseError::AmountOverflow => {
                write!(f, "Payment amount overflows with the configured prices")
            }
            PurchaseError::Payment(e) => write!(f, "{e}"),
            PurchaseError::Reservation { source, charged } => {
                write!(f, "{source} after charging {charged}")
            }
        }
    }
}

impl Error for PurchaseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PurchaseError::Invalid(e) => Some(e),
            PurchaseError::AmountOverflow => None,
            PurchaseError::Payment(e) => Some(e),
            PurchaseError::Reservation { source, .. } => Some(source),
        }
    }
}

#[derive(Debug)]
pub enum PolicyError {
    Parse(serde_json::Error),
}

impl From<serde_json::Error> for PolicyError {
    fn from(value: serde_json::Error) -> Self {
        PolicyError::Parse(value)
    }
}

impl fmt::Display for PolicyError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "Failed to parse ticket policy: {e}"),
        }
    }
}

impl Error for PolicyError {}
