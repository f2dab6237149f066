use serde::Serialize;
use skyhigh_shared::{FlightRecord, Leg, Route};

/// Ordered, non-empty list of flights offered for one leg.
/// Insertion order is display order and position is the selection key.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Catalog {
    leg: Leg,
    route: Route,
    flights: Vec<FlightRecord>,
}

impl Catalog {
    /// Validate and wrap a flight list
    pub fn new(leg: Leg, route: Route, flights: Vec<FlightRecord>) -> Result<Self, CatalogError> {
        if flights.is_empty() {
            return Err(CatalogError::Empty(leg));
        }

        for (index, flight) in flights.iter().enumerate() {
            if !flight.price.is_positive() {
                return Err(CatalogError::InvalidPrice {
                    leg,
                    index,
                    flight_number: flight.flight_number.clone(),
                });
            }
            if !flight.has_valid_departure_time() {
                return Err(CatalogError::InvalidDepartureTime {
                    leg,
                    index,
                    value: flight.departure_time.clone(),
                });
            }
        }

        Ok(Self { leg, route, flights })
    }

    pub fn leg(&self) -> Leg {
        self.leg
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn get(&self, index: usize) -> Option<&FlightRecord> {
        self.flights.get(index)
    }

    pub fn len(&self) -> usize {
        self.flights.len()
    }

    /// Always false for a constructed catalog
    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FlightRecord> {
        self.flights.iter()
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("{0} catalog has no flights")]
    Empty(Leg),

    #[error("{leg} flight {flight_number} at position {index} has no positive price")]
    InvalidPrice {
        leg: Leg,
        index: usize,
        flight_number: String,
    },

    #[error("{leg} flight at position {index} has malformed departure time '{value}'")]
    InvalidDepartureTime {
        leg: Leg,
        index: usize,
        value: String,
    },
}
