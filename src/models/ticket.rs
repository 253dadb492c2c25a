use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketType {
    Adult,
    Child,
    /// Sits on an adult's lap: no seat, no charge.
    Infant,
}

/// A number of tickets of a single type. A purchase may contain several
/// requests of the same type, their counts are summed.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct TicketTypeRequest {
    #[serde(rename = "type")]
    ticket_type: TicketType,
    count: u32,
}

impl TicketTypeRequest {
    pub fn new(ticket_type: TicketType, count: u32) -> Self {
        Self { ticket_type, count }
    }

    pub fn adult(count: u32) -> Self {
        Self::new(TicketType::Adult, count)
    }

    pub fn child(count: u32) -> Self {
        Self::new(TicketType::Child, count)
    }

    pub fn infant(count: u32) -> Self {
        Self::new(TicketType::Infant, count)
    }

    pub fn ticket_type(&self) -> TicketType {
        self.ticket_type
    }

    pub fn count(&self) -> u32 {
        self.count
    }
}
