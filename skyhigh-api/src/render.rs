//! HTML for the booking page. Every function here is pure presentation.

use chrono::NaiveDate;
use html_escape::encode_text;
use skyhigh_booking::{BookingSummary, DateInputs, FlightSelector, FormView};
use skyhigh_shared::{Leg, Route};

const STYLE: &str = "\
body{font-family:sans-serif;max-width:960px;margin:2rem auto;padding:0 1rem}\
.columns{display:flex;gap:2rem}.column{flex:1}\
.option{display:block;margin:.35rem 0}\
.primary{width:100%;padding:.75rem;font-size:1rem;background:#ff4b4b;color:#fff;border:0;border-radius:.5rem}\
.success{background:#e6f4ea;color:#1e7e34;padding:1rem;border-radius:.5rem}\
.warning{background:#fff4e5;color:#8a4b00;padding:1rem;border-radius:.5rem;margin-bottom:1rem}\
.info{background:#e8f0fe;color:#1a4f9c;padding:.5rem 1rem;border-radius:.5rem}\
.metric-label{display:block;font-size:.9rem;color:#555}.metric-value{font-size:2rem}";

pub fn format_summary_date(date: NaiveDate) -> String {
    date.format("%d %b %Y").to_string()
}

/// Departure and return pickers with their lower bounds
pub fn render_date_inputs(dates: &DateInputs) -> String {
    format!(
        r#"<div class="columns">
<div class="column"><label for="departure_date">Departure Date</label><br>
<input type="date" id="departure_date" name="departure_date" value="{}" min="{}" onchange="this.form.submit()"></div>
<div class="column"><label for="return_date">Return Date</label><br>
<input type="date" id="return_date" name="return_date" value="{}" min="{}" onchange="this.form.submit()"></div>
</div>"#,
        dates.departure_date, dates.departure_min, dates.return_date, dates.return_min,
    )
}

fn selector_heading(leg: Leg, route: &Route) -> String {
    match leg {
        Leg::Outbound => format!("1. Select Outbound Flight ({})", route.codes()),
        Leg::Inbound => format!("2. Select Return Flight ({})", route.codes()),
    }
}

fn field_name(leg: Leg) -> &'static str {
    match leg {
        Leg::Outbound => "outbound",
        Leg::Inbound => "inbound",
    }
}

/// Radio group for one leg. The radio value is the catalog index.
pub fn render_flight_selector(selector: &FlightSelector) -> String {
    let name = field_name(selector.leg);
    let prompt = match selector.leg {
        Leg::Outbound => "Choose your outbound flight:",
        Leg::Inbound => "Choose your return flight:",
    };

    let mut html = format!(
        "<section id=\"{name}\">\n<h2>{}</h2>\n<p>{prompt}</p>\n",
        encode_text(&selector_heading(selector.leg, &selector.route)),
    );

    for option in &selector.options {
        let checked = if option.index == selector.selected { " checked" } else { "" };
        html.push_str(&format!(
            "<label class=\"option\"><input type=\"radio\" name=\"{name}\" value=\"{}\"{checked} onchange=\"this.form.submit()\"> {}</label>\n",
            option.index,
            encode_text(&option.label),
        ));
    }

    html.push_str("</section>");
    html
}

fn render_leg(summary: &BookingSummary, leg: Leg) -> String {
    let title = match leg {
        Leg::Outbound => "Outbound Flight",
        Leg::Inbound => "Return Flight",
    };
    let flight = summary.flight(leg);

    format!(
        r#"<div class="column">
<div class="info"><strong>{title}</strong></div>
<p><strong>Date:</strong> {}</p>
<p><strong>Airline:</strong> {}</p>
<p><strong>Flight:</strong> {}</p>
<p><strong>Time:</strong> {}</p>
<p><strong>Price:</strong> {}</p>
</div>"#,
        format_summary_date(summary.date(leg)),
        encode_text(&flight.airline),
        encode_text(&flight.flight_number),
        encode_text(&flight.departure_time),
        flight.price,
    )
}

/// Confirmation notice, one column per leg, then the combined total
pub fn render_summary(summary: &BookingSummary) -> String {
    format!(
        r#"<div class="success">🎉 Booking Confirmed! Have a safe trip.</div>
<section id="summary">
<h3>🧾 Booking Summary</h3>
<div class="columns">
{}
{}
</div>
<hr>
<div class="metric"><span class="metric-label">Total Amount Paid</span><span class="metric-value">{}</span></div>
</section>"#,
        render_leg(summary, Leg::Outbound),
        render_leg(summary, Leg::Inbound),
        summary.total_price,
    )
}

/// Full page. `notice` is shown above the form when part of a post was rejected.
pub fn render_page(title: &str, view: &FormView, notice: Option<&str>) -> String {
    let route = &view.outbound.route;
    let summary = view.summary.as_ref().map(render_summary).unwrap_or_default();
    let notice = notice
        .map(|msg| format!("<div class=\"warning\">⚠️ {}</div>\n", encode_text(msg)))
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{}</title>
<style>{STYLE}</style>
</head>
<body>
<h1>✈️ SkyHigh Flight Booking</h1>
<h3>Book your flights from <strong>{}</strong> to <strong>{}</strong></h3>
<hr>
{notice}<form method="post" action="/">
{}
<hr>
{}
<hr>
{}
<hr>
<button type="submit" class="primary" name="action" value="book">Book Ticket</button>
</form>
{summary}
</body>
</html>
"#,
        encode_text(title),
        encode_text(&route.origin.to_string()),
        encode_text(&route.destination.to_string()),
        render_date_inputs(&view.dates),
        render_flight_selector(&view.outbound),
        render_flight_selector(&view.inbound),
    )
}
