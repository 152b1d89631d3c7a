use crate::flight::FlightType::{Direct, OneStop, TwoStops};
use crate::flight::{FlightRecord, FlightType};
use crate::time::Time;
use proptest::prelude::Strategy;
use proptest::prop_oneof;
use proptest::strategy::Just;

pub fn flight(departure: &str, arrival: &str, price: f64, flight_type: FlightType) -> FlightRecord {
    FlightRecord::new(departure, arrival, price, flight_type).unwrap()
}

pub fn add_flight(
    flights: &mut Vec<FlightRecord>,
    departure: &str,
    arrival: &str,
    price: f64,
    flight_type: FlightType,
) {
    flights.push(flight(departure, arrival, price, flight_type));
}

pub fn arb_flight_type() -> impl Strategy<Value = FlightType> {
    prop_oneof![Just(Direct), Just(OneStop), Just(TwoStops)]
}

pub fn arb_flight() -> impl Strategy<Value = FlightRecord> {
    (0..1440u32, 0..1440u32, 0..20u32, arb_flight_type()).prop_map(
        |(dep, arr, price, flight_type)| FlightRecord {
            departure_time: Time::from_minutes(dep).unwrap(),
            arrival_time: Time::from_minutes(arr).unwrap(),
            // coarse prices so ties actually happen
            price: crate::flight::Price(f64::from(price) * 50_000.0),
            flight_type,
        },
    )
}
