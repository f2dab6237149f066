use skyhigh_shared::{Airport, FlightRecord, Leg, Route};
use crate::catalog::{Catalog, CatalogError};

/// Source of the two per-leg catalogs shown on the booking form
pub trait FlightCatalog: Send + Sync {
    fn outbound(&self) -> &Catalog;
    fn inbound(&self) -> &Catalog;

    fn for_leg(&self, leg: Leg) -> &Catalog {
        match leg {
            Leg::Outbound => self.outbound(),
            Leg::Inbound => self.inbound(),
        }
    }
}

pub fn hyderabad_goa() -> Route {
    Route::new(Airport::new("HYD", "Hyderabad"), Airport::new("GOI", "Goa"))
}

/// Fixed HYD → GOI schedule
pub fn list_outbound_flights() -> Vec<FlightRecord> {
    vec![
        FlightRecord::new("IndiGo", "6E-554", "06:00", "1h 15m", 3500),
        FlightRecord::new("SpiceJet", "SG-102", "09:30", "1h 20m", 3200),
        FlightRecord::new("Air India", "AI-889", "13:45", "1h 10m", 4100),
        FlightRecord::new("Vistara", "UK-876", "17:00", "1h 15m", 4500),
        FlightRecord::new("IndiGo", "6E-221", "21:15", "1h 10m", 3800),
    ]
}

/// Fixed GOI → HYD schedule
pub fn list_inbound_flights() -> Vec<FlightRecord> {
    vec![
        FlightRecord::new("IndiGo", "6E-555", "08:00", "1h 15m", 3600),
        FlightRecord::new("SpiceJet", "SG-103", "11:30", "1h 20m", 3300),
        FlightRecord::new("Air India", "AI-890", "15:45", "1h 10m", 4200),
        FlightRecord::new("Vistara", "UK-877", "19:00", "1h 15m", 4600),
        FlightRecord::new("IndiGo", "6E-222", "23:15", "1h 10m", 3900),
    ]
}

/// Catalog provider backed by the built-in schedules
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    outbound: Catalog,
    inbound: Catalog,
}

impl StaticCatalog {
    pub fn load() -> Result<Self, CatalogError> {
        let route = hyderabad_goa();
        Ok(Self {
            outbound: Catalog::new(Leg::Outbound, route.clone(), list_outbound_flights())?,
            inbound: Catalog::new(Leg::Inbound, route.reversed(), list_inbound_flights())?,
        })
    }

    /// Provider over arbitrary pre-validated catalogs
    pub fn from_catalogs(outbound: Catalog, inbound: Catalog) -> Self {
        Self { outbound, inbound }
    }
}

impl FlightCatalog for StaticCatalog {
    fn outbound(&self) -> &Catalog {
        &self.outbound
    }

    fn inbound(&self) -> &Catalog {
        &self.inbound
    }
}
