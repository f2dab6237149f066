use serde::Serialize;
use skyhigh_catalog::Catalog;
use skyhigh_shared::{FlightRecord, Leg, Route};
use crate::{BookingError, BookingResult};

/// One radio option. `index` is the identity, `label` is display only.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SelectorOption {
    pub index: usize,
    pub label: String,
    pub flight: FlightRecord,
}

/// Single-select list for one leg, always with exactly one option chosen
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FlightSelector {
    pub leg: Leg,
    pub route: Route,
    pub options: Vec<SelectorOption>,
    pub selected: usize,
}

/// Build the selector for `catalog`. An unset index falls back to the first entry.
pub fn render_flight_selector(catalog: &Catalog, current: Option<usize>) -> BookingResult<FlightSelector> {
    let selected = current.unwrap_or(0);
    if selected >= catalog.len() {
        return Err(BookingError::IndexOutOfRange {
            leg: catalog.leg(),
            index: selected,
            len: catalog.len(),
        });
    }

    let options = catalog
        .iter()
        .enumerate()
        .map(|(index, flight)| SelectorOption {
            index,
            label: flight.label(),
            flight: flight.clone(),
        })
        .collect();

    Ok(FlightSelector {
        leg: catalog.leg(),
        route: catalog.route().clone(),
        options,
        selected,
    })
}
