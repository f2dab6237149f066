use chrono::NaiveDate;
use serde::Serialize;
use skyhigh_catalog::Catalog;
use skyhigh_shared::{FlightRecord, Leg, Money};
use crate::state::SelectionState;
use crate::{BookingError, BookingResult};

/// Result of the "Book Ticket" action. Derived on demand, never stored.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct BookingSummary {
    pub departure_date: NaiveDate,
    pub return_date: NaiveDate,
    pub outbound_flight: FlightRecord,
    pub inbound_flight: FlightRecord,
    pub total_price: Money,
}

impl BookingSummary {
    pub fn flight(&self, leg: Leg) -> &FlightRecord {
        match leg {
            Leg::Outbound => &self.outbound_flight,
            Leg::Inbound => &self.inbound_flight,
        }
    }

    pub fn date(&self, leg: Leg) -> NaiveDate {
        match leg {
            Leg::Outbound => self.departure_date,
            Leg::Inbound => self.return_date,
        }
    }
}

/// Look up both selected flights and price the round trip
pub fn confirm_booking(
    state: &SelectionState,
    outbound: &Catalog,
    inbound: &Catalog,
) -> BookingResult<BookingSummary> {
    if state.return_date <= state.departure_date {
        return Err(BookingError::InvalidDates {
            departure_date: state.departure_date,
            return_date: state.return_date,
        });
    }

    let outbound_flight = lookup(outbound, state.outbound_index)?;
    let inbound_flight = lookup(inbound, state.inbound_index)?;

    let total_price = outbound_flight
        .price
        .checked_add(inbound_flight.price)
        .ok_or(BookingError::PriceOverflow)?;

    Ok(BookingSummary {
        departure_date: state.departure_date,
        return_date: state.return_date,
        outbound_flight: outbound_flight.clone(),
        inbound_flight: inbound_flight.clone(),
        total_price,
    })
}

fn lookup(catalog: &Catalog, index: Option<usize>) -> BookingResult<&FlightRecord> {
    let index = index.ok_or(BookingError::SelectionMissing(catalog.leg()))?;
    catalog.get(index).ok_or(BookingError::IndexOutOfRange {
        leg: catalog.leg(),
        index,
        len: catalog.len(),
    })
}
