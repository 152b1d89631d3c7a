use crate::criterion::Criterion;
use crate::flight::{FlightType, Price};
use crate::session::Session;
use crate::time::{Time, format_duration};
use colored::Colorize;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct FlightRow {
    #[tabled(rename = "#")]
    position: usize,
    #[tabled(rename = "Departure")]
    departure: Time,
    #[tabled(rename = "Arrival")]
    arrival: Time,
    #[tabled(rename = "Duration")]
    duration: String,
    #[tabled(rename = "Stops")]
    flight_type: FlightType,
    #[tabled(rename = "Price")]
    price: Price,
}

pub fn flights_table(session: &Session) -> String {
    if session.is_empty() {
        return "No flights to show.".to_string();
    }
    let rows: Vec<FlightRow> = session
        .ordered()
        .enumerate()
        .map(|(i, f)| FlightRow {
            position: i + 1,
            departure: f.departure_time,
            arrival: f.arrival_time,
            duration: format_duration(f.duration()),
            flight_type: f.flight_type,
            price: f.price,
        })
        .collect();

    let mut table = Table::new(&rows);
    table.with(Style::rounded());
    table.with(Alignment::left());
    table.to_string()
}

pub fn trip_header(origin: &str, destination: &str) -> String {
    format!("Trip from {} to {}", origin, destination)
}

/// The "Recommended:" button row; active buttons are highlighted.
pub fn filter_bar(session: &Session) -> String {
    let buttons = Criterion::ALL
        .iter()
        .map(|c| {
            let label = format!("[ {} ]", c.label());
            if session.is_active(*c) {
                label.black().on_cyan().bold().to_string()
            } else {
                label.dimmed().to_string()
            }
        })
        .collect::<Vec<String>>();
    format!("Recommended: {}", buttons.join(" "))
}

pub fn applied_filters(session: &Session) -> String {
    if session.active().is_empty() {
        return "Applied filters: none".to_string();
    }
    let chips = session
        .active()
        .iter()
        .map(|c| c.label().cyan().to_string())
        .collect::<Vec<String>>();
    format!("Applied filters: {}", chips.join(" > "))
}
