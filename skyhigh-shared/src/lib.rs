pub mod models;
pub mod money;

pub use models::flight::{FlightRecord, Leg};
pub use models::route::{Airport, Route};
pub use money::Money;
