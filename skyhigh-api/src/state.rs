use chrono::NaiveDate;
use skyhigh_catalog::FlightCatalog;
use std::sync::Arc;

/// Source of "today" for the date picker bounds
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Server local calendar date
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn FlightCatalog>,
    pub clock: Arc<dyn Clock>,
    pub page_title: String,
}

impl AppState {
    pub fn new(catalog: Arc<dyn FlightCatalog>, clock: Arc<dyn Clock>, page_title: impl Into<String>) -> Self {
        Self {
            catalog,
            clock,
            page_title: page_title.into(),
        }
    }
}
