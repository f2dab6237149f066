use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use skyhigh_shared::Leg;
use crate::{BookingError, BookingResult};

/// Everything the form remembers between render passes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SelectionState {
    pub departure_date: NaiveDate,
    pub return_date: NaiveDate,
    pub outbound_index: Option<usize>,
    pub inbound_index: Option<usize>,
}

impl SelectionState {
    /// Fresh page: depart today, return tomorrow, nothing picked yet
    pub fn initial(today: NaiveDate) -> BookingResult<Self> {
        Ok(Self {
            departure_date: today,
            return_date: next_day(today)?,
            outbound_index: None,
            inbound_index: None,
        })
    }

    pub fn set_selected(&mut self, leg: Leg, index: usize) {
        match leg {
            Leg::Outbound => self.outbound_index = Some(index),
            Leg::Inbound => self.inbound_index = Some(index),
        }
    }

    /// Earliest return date the picker may offer
    pub fn min_return_date(&self) -> BookingResult<NaiveDate> {
        next_day(self.departure_date)
    }

    /// Pull both dates up to their lower bounds.
    /// Returns true when either date moved.
    pub fn clamp_dates(&mut self, today: NaiveDate) -> BookingResult<bool> {
        let mut changed = false;

        if self.departure_date < today {
            tracing::debug!("Departure {} before today, clamped to {}", self.departure_date, today);
            self.departure_date = today;
            changed = true;
        }

        let min_return = self.min_return_date()?;
        if self.return_date < min_return {
            tracing::debug!("Return {} before {}, clamped", self.return_date, min_return);
            self.return_date = min_return;
            changed = true;
        }

        Ok(changed)
    }
}

pub(crate) fn next_day(date: NaiveDate) -> BookingResult<NaiveDate> {
    date.checked_add_days(Days::new(1))
        .ok_or(BookingError::DateOutOfRange(date))
}
