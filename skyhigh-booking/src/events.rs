use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// User interaction on the booking form. Each one triggers a full render pass.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "value", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FormEvent {
    SetDepartureDate(NaiveDate),
    SetReturnDate(NaiveDate),
    SelectOutbound(usize),
    SelectInbound(usize),
    /// Explicit "Book Ticket" action
    Confirm,
}
