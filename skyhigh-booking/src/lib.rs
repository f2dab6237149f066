pub mod events;
pub mod form;
pub mod selector;
pub mod state;
pub mod summary;

use chrono::NaiveDate;
use skyhigh_shared::Leg;

pub use events::FormEvent;
pub use form::{BookingForm, DateInputs, FormView};
pub use selector::{render_flight_selector, FlightSelector, SelectorOption};
pub use state::SelectionState;
pub use summary::{confirm_booking, BookingSummary};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BookingError {
    #[error("No {0} flight selected")]
    SelectionMissing(Leg),
    #[error("{leg} flight index {index} is outside a catalog of {len}")]
    IndexOutOfRange { leg: Leg, index: usize, len: usize },
    #[error("Return date {return_date} must be after departure date {departure_date}")]
    InvalidDates {
        departure_date: NaiveDate,
        return_date: NaiveDate,
    },
    #[error("Date {0} has no following day")]
    DateOutOfRange(NaiveDate),
    #[error("Total price exceeds the representable amount")]
    PriceOverflow,
}

pub type BookingResult<T> = Result<T, BookingError>;
