pub mod error;
pub mod order;
pub mod purchase;
pub mod ticket;
