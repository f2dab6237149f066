use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use skyhigh_catalog::Catalog;
use skyhigh_shared::{FlightRecord, Leg, Money, Route};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub leg: Leg,
    pub route: Route,
    pub currency: &'static str,
    pub flights: Vec<FlightOptionResponse>,
}

#[derive(Debug, Serialize)]
pub struct FlightOptionResponse {
    pub index: usize,
    pub label: String,
    #[serde(flatten)]
    pub flight: FlightRecord,
}

impl From<&Catalog> for CatalogResponse {
    fn from(catalog: &Catalog) -> Self {
        Self {
            leg: catalog.leg(),
            route: catalog.route().clone(),
            currency: Money::CURRENCY,
            flights: catalog
                .iter()
                .enumerate()
                .map(|(index, flight)| FlightOptionResponse {
                    index,
                    label: flight.label(),
                    flight: flight.clone(),
                })
                .collect(),
        }
    }
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/flights/outbound", get(list_outbound))
        .route("/v1/flights/inbound", get(list_inbound))
}

/// GET /v1/flights/outbound
async fn list_outbound(State(state): State<AppState>) -> Json<CatalogResponse> {
    Json(CatalogResponse::from(state.catalog.outbound()))
}

/// GET /v1/flights/inbound
async fn list_inbound(State(state): State<AppState>) -> Json<CatalogResponse> {
    Json(CatalogResponse::from(state.catalog.inbound()))
}
