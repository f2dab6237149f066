use chrono::NaiveDate;
use serde::Serialize;
use skyhigh_catalog::FlightCatalog;
use skyhigh_shared::Leg;
use crate::events::FormEvent;
use crate::selector::{render_flight_selector, FlightSelector};
use crate::state::SelectionState;
use crate::summary::{confirm_booking, BookingSummary};
use crate::{BookingError, BookingResult};

/// Bounds and values for the two date pickers
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct DateInputs {
    pub departure_date: NaiveDate,
    pub departure_min: NaiveDate,
    pub return_date: NaiveDate,
    pub return_min: NaiveDate,
}

/// Output of one render pass
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FormView {
    pub state: SelectionState,
    pub dates: DateInputs,
    pub outbound: FlightSelector,
    pub inbound: FlightSelector,
    /// Present only on the pass triggered by a confirmation
    pub summary: Option<BookingSummary>,
}

/// Booking form controller.
///
/// Stateless: the caller owns the [`SelectionState`] and threads it through
/// [`BookingForm::handle`], which maps (previous state, event) to the next view.
pub struct BookingForm<'a> {
    catalog: &'a dyn FlightCatalog,
    today: NaiveDate,
}

impl<'a> BookingForm<'a> {
    pub fn new(catalog: &'a dyn FlightCatalog, today: NaiveDate) -> Self {
        Self { catalog, today }
    }

    pub fn initial_state(&self) -> BookingResult<SelectionState> {
        SelectionState::initial(self.today)
    }

    /// Clamp the dates in `state` and report the picker bounds
    pub fn render_date_inputs(&self, state: &mut SelectionState) -> BookingResult<DateInputs> {
        state.clamp_dates(self.today)?;

        Ok(DateInputs {
            departure_date: state.departure_date,
            departure_min: self.today,
            return_date: state.return_date,
            return_min: state.min_return_date()?,
        })
    }

    /// Render `state` without applying any event
    pub fn view(&self, state: &SelectionState) -> BookingResult<FormView> {
        self.render(state.clone(), false)
    }

    /// Apply one interaction and render. `state` is left untouched on error.
    pub fn handle(&self, state: &SelectionState, event: FormEvent) -> BookingResult<FormView> {
        let mut next = state.clone();
        let mut confirm = false;

        match event {
            FormEvent::SetDepartureDate(date) => next.departure_date = date,
            FormEvent::SetReturnDate(date) => next.return_date = date,
            FormEvent::SelectOutbound(index) => self.select(&mut next, Leg::Outbound, index)?,
            FormEvent::SelectInbound(index) => self.select(&mut next, Leg::Inbound, index)?,
            FormEvent::Confirm => confirm = true,
        }

        self.render(next, confirm)
    }

    /// Fold a batch of events, as submitted together by one form post.
    /// Only a trailing `Confirm` leaves a summary on the final view.
    pub fn apply_all<I>(&self, state: &SelectionState, events: I) -> BookingResult<FormView>
    where
        I: IntoIterator<Item = FormEvent>,
    {
        let mut view = self.view(state)?;
        for event in events {
            view = self.handle(&view.state, event)?;
        }
        Ok(view)
    }

    fn select(&self, state: &mut SelectionState, leg: Leg, index: usize) -> BookingResult<()> {
        let catalog = self.catalog.for_leg(leg);
        if index >= catalog.len() {
            return Err(BookingError::IndexOutOfRange {
                leg,
                index,
                len: catalog.len(),
            });
        }
        state.set_selected(leg, index);
        Ok(())
    }

    fn render(&self, mut state: SelectionState, confirm: bool) -> BookingResult<FormView> {
        let dates = self.render_date_inputs(&mut state)?;

        let outbound = render_flight_selector(self.catalog.outbound(), state.outbound_index)?;
        let inbound = render_flight_selector(self.catalog.inbound(), state.inbound_index)?;
        state.set_selected(Leg::Outbound, outbound.selected);
        state.set_selected(Leg::Inbound, inbound.selected);

        let summary = if confirm {
            let summary = confirm_booking(&state, self.catalog.outbound(), self.catalog.inbound())?;
            tracing::info!(
                "Booking confirmed: {} on {} + {} on {}, total {}",
                summary.outbound_flight.flight_number,
                summary.departure_date,
                summary.inbound_flight.flight_number,
                summary.return_date,
                summary.total_price
            );
            Some(summary)
        } else {
            None
        };

        Ok(FormView {
            state,
            dates,
            outbound,
            inbound,
            summary,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyhigh_catalog::{Catalog, StaticCatalog};
    use skyhigh_shared::{Airport, FlightRecord, Money, Route};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn today() -> NaiveDate {
        date(2026, 10, 18)
    }

    fn catalogs(outbound: Vec<FlightRecord>, inbound: Vec<FlightRecord>) -> StaticCatalog {
        let route = Route::new(Airport::new("HYD", "Hyderabad"), Airport::new("GOI", "Goa"));
        StaticCatalog::from_catalogs(
            Catalog::new(Leg::Outbound, route.clone(), outbound).unwrap(),
            Catalog::new(Leg::Inbound, route.reversed(), inbound).unwrap(),
        )
    }

    #[test]
    fn test_initial_view_defaults() {
        let catalog = StaticCatalog::load().unwrap();
        let form = BookingForm::new(&catalog, today());
        let view = form.view(&form.initial_state().unwrap()).unwrap();

        assert_eq!(view.dates.departure_min, today());
        assert_eq!(view.dates.return_min, date(2026, 10, 19));
        assert_eq!(view.state.outbound_index, Some(0));
        assert_eq!(view.state.inbound_index, Some(0));
        assert!(view.summary.is_none());
    }

    #[test]
    fn test_return_min_tracks_departure() {
        let catalog = StaticCatalog::load().unwrap();
        let form = BookingForm::new(&catalog, today());
        let state = form.initial_state().unwrap();

        let mut departure = today();
        for _ in 0..40 {
            let view = form.handle(&state, FormEvent::SetDepartureDate(departure)).unwrap();
            assert_eq!(view.dates.return_min, departure.succ_opt().unwrap());
            assert!(view.state.return_date > view.state.departure_date);
            departure = departure.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_return_on_same_day_clamped_to_tomorrow() {
        let catalog = StaticCatalog::load().unwrap();
        let form = BookingForm::new(&catalog, today());
        let state = form.initial_state().unwrap();

        let view = form.handle(&state, FormEvent::SetReturnDate(today())).unwrap();
        assert_eq!(view.state.return_date, date(2026, 10, 19));
    }

    #[test]
    fn test_departure_moved_past_return_resets_return() {
        let catalog = StaticCatalog::load().unwrap();
        let form = BookingForm::new(&catalog, today());
        let view = form
            .apply_all(
                &form.initial_state().unwrap(),
                [
                    FormEvent::SetReturnDate(date(2026, 10, 20)),
                    FormEvent::SetDepartureDate(date(2026, 10, 24)),
                ],
            )
            .unwrap();

        assert_eq!(view.state.return_date, date(2026, 10, 25));
        assert_eq!(view.dates.return_min, date(2026, 10, 25));
    }

    #[test]
    fn test_confirm_default_selection() {
        let catalog = StaticCatalog::load().unwrap();
        let form = BookingForm::new(&catalog, today());
        let view = form.handle(&form.initial_state().unwrap(), FormEvent::Confirm).unwrap();

        let summary = view.summary.unwrap();
        assert_eq!(summary.outbound_flight.flight_number, "6E-554");
        assert_eq!(summary.inbound_flight.flight_number, "6E-555");
        assert_eq!(summary.total_price, Money(7100));
    }

    #[test]
    fn test_selection_alone_does_not_confirm() {
        let catalog = StaticCatalog::load().unwrap();
        let form = BookingForm::new(&catalog, today());
        let view = form.handle(&form.initial_state().unwrap(), FormEvent::SelectOutbound(2)).unwrap();

        assert!(view.summary.is_none());
        assert_eq!(view.state.outbound_index, Some(2));
    }

    #[test]
    fn test_reselection_after_confirm_recomputes() {
        let catalog = StaticCatalog::load().unwrap();
        let form = BookingForm::new(&catalog, today());
        let state = form.initial_state().unwrap();

        let first = form.handle(&state, FormEvent::Confirm).unwrap();
        let changed = form.handle(&first.state, FormEvent::SelectInbound(3)).unwrap();
        assert!(changed.summary.is_none());

        let second = form.handle(&changed.state, FormEvent::Confirm).unwrap();
        let summary = second.summary.unwrap();
        assert_eq!(summary.inbound_flight.flight_number, "UK-877");
        assert_eq!(summary.total_price, Money(3500 + 4600));
        assert_ne!(first.summary.unwrap(), summary);
    }

    #[test]
    fn test_repeated_confirm_is_identical() {
        let catalog = StaticCatalog::load().unwrap();
        let form = BookingForm::new(&catalog, today());
        let state = form.initial_state().unwrap();

        let first = form.handle(&state, FormEvent::Confirm).unwrap();
        let second = form.handle(&first.state, FormEvent::Confirm).unwrap();
        assert_eq!(first.summary, second.summary);
    }

    #[test]
    fn test_out_of_range_selection_rejected() {
        let catalog = StaticCatalog::load().unwrap();
        let form = BookingForm::new(&catalog, today());
        let state = form.initial_state().unwrap();

        let err = form.handle(&state, FormEvent::SelectOutbound(7)).unwrap_err();
        assert_eq!(err, BookingError::IndexOutOfRange { leg: Leg::Outbound, index: 7, len: 5 });
    }

    #[test]
    fn test_identical_labels_resolved_by_position() {
        let twin = FlightRecord::new("IndiGo", "6E-554", "06:00", "1h 15m", 3500);
        let catalog = catalogs(
            vec![twin.clone(), twin.clone(), FlightRecord::new("Vistara", "UK-876", "17:00", "1h 15m", 4500)],
            vec![FlightRecord::new("IndiGo", "6E-555", "08:00", "1h 15m", 3600)],
        );
        let form = BookingForm::new(&catalog, today());

        let view = form
            .apply_all(
                &form.initial_state().unwrap(),
                [FormEvent::SelectOutbound(1), FormEvent::Confirm],
            )
            .unwrap();

        assert_eq!(view.outbound.options[0].label, view.outbound.options[1].label);
        assert_eq!(view.state.outbound_index, Some(1));
        assert_eq!(view.outbound.selected, 1);
        assert_eq!(&view.summary.unwrap().outbound_flight, catalog.outbound().get(1).unwrap());
    }

    #[test]
    fn test_single_entry_catalogs() {
        let outbound = FlightRecord::new("Akasa Air", "QP-1101", "07:40", "1h 05m", 2999);
        let inbound = FlightRecord::new("Akasa Air", "QP-1102", "20:10", "1h 05m", 3101);
        let catalog = catalogs(vec![outbound.clone()], vec![inbound.clone()]);
        let form = BookingForm::new(&catalog, today());
        let state = form.initial_state().unwrap();

        let summary = form.handle(&state, FormEvent::Confirm).unwrap().summary.unwrap();
        assert_eq!(summary.outbound_flight, outbound);
        assert_eq!(summary.inbound_flight, inbound);
        assert_eq!(summary.total_price, Money(6100));

        let err = form.handle(&state, FormEvent::SelectInbound(1)).unwrap_err();
        assert_eq!(err, BookingError::IndexOutOfRange { leg: Leg::Inbound, index: 1, len: 1 });
    }
}
