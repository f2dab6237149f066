use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Airport {
    pub code: String,
    pub city: String,
}

impl Airport {
    pub fn new(code: &str, city: &str) -> Self {
        Self {
            code: code.to_string(),
            city: city.to_string(),
        }
    }
}

impl fmt::Display for Airport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.city, self.code)
    }
}

/// Origin and destination of one leg
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Route {
    pub origin: Airport,
    pub destination: Airport,
}

impl Route {
    pub fn new(origin: Airport, destination: Airport) -> Self {
        Self { origin, destination }
    }

    pub fn reversed(&self) -> Self {
        Self {
            origin: self.destination.clone(),
            destination: self.origin.clone(),
        }
    }

    /// Short code form, e.g. `HYD → GOI`
    pub fn codes(&self) -> String {
        format!("{} → {}", self.origin.code, self.destination.code)
    }
}
