pub mod models;
pub mod policy;
pub mod pricing;
pub mod services;
pub mod ticket_service;
pub mod validation;

pub use models::{
    error::{InvalidPurchase, PurchaseError},
    order::{aggregate, AccountId, CustomerTicketOrder},
    purchase::{PurchaseId, PurchaseReceipt, PurchaseRequest},
    ticket::{TicketType, TicketTypeRequest},
};
pub use policy::TicketPolicy;
pub use ticket_service::{TicketService, TicketServiceImpl};
