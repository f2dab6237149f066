use serde::{Deserialize, Serialize};
use std::fmt;
use crate::money::Money;

/// Direction of travel within the round trip
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Leg {
    Outbound,
    Inbound,
}

impl fmt::Display for Leg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Leg::Outbound => write!(f, "outbound"),
            Leg::Inbound => write!(f, "inbound"),
        }
    }
}

/// One bookable flight as offered on the form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FlightRecord {
    pub airline: String,
    pub flight_number: String,
    /// 24-hour `HH:MM`
    pub departure_time: String,
    /// Free text, e.g. `1h 15m`
    pub duration: String,
    pub price: Money,
}

impl FlightRecord {
    pub fn new(
        airline: &str,
        flight_number: &str,
        departure_time: &str,
        duration: &str,
        price: u32,
    ) -> Self {
        Self {
            airline: airline.to_string(),
            flight_number: flight_number.to_string(),
            departure_time: departure_time.to_string(),
            duration: duration.to_string(),
            price: Money(price),
        }
    }

    /// Human readable option line carrying all five fields
    pub fn label(&self) -> String {
        format!(
            "{} ({}) | 🕒 {} | ⏳ {} | {}",
            self.airline, self.flight_number, self.departure_time, self.duration, self.price
        )
    }

    pub fn has_valid_departure_time(&self) -> bool {
        self.departure_time.len() == 5
            && chrono::NaiveTime::parse_from_str(&self.departure_time, "%H:%M").is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_contains_every_field() {
        let flight = FlightRecord::new("IndiGo", "6E-554", "06:00", "1h 15m", 3500);
        assert_eq!(flight.label(), "IndiGo (6E-554) | 🕒 06:00 | ⏳ 1h 15m | ₹3500");
    }

    #[test]
    fn test_departure_time_validation() {
        assert!(FlightRecord::new("A", "X-1", "23:15", "1h", 1).has_valid_departure_time());
        assert!(!FlightRecord::new("A", "X-1", "24:00", "1h", 1).has_valid_departure_time());
        assert!(!FlightRecord::new("A", "X-1", "6:00", "1h", 1).has_valid_departure_time());
        assert!(!FlightRecord::new("A", "X-1", "noon", "1h", 1).has_valid_departure_time());
    }
}
