pub mod catalog;
pub mod provider;

pub use catalog::{Catalog, CatalogError};
pub use provider::{list_inbound_flights, list_outbound_flights, FlightCatalog, StaticCatalog};
