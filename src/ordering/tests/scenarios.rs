use crate::criterion::Criterion::{DirectFlight, Duration, Price};
use crate::flight::FlightType::{Direct, OneStop, TwoStops};
use crate::ordering::tests::utils::{add_flight, flight};
use crate::ordering::{reorder, reorder_records};

#[test]
fn test_no_active_criteria_keeps_fetch_order() {
    let mut flights = Vec::new();
    add_flight(&mut flights, "10:00", "12:00", 300.0, TwoStops);
    add_flight(&mut flights, "08:00", "09:00", 100.0, Direct);
    add_flight(&mut flights, "06:00", "11:00", 200.0, OneStop);

    assert_eq!(vec![0, 1, 2], reorder(&flights, &[]));
}

#[test]
fn test_empty_collection() {
    assert!(reorder(&[], &[Price, Duration, DirectFlight]).is_empty());
}

#[test]
fn test_price_ascending() {
    let mut flights = Vec::new();
    add_flight(&mut flights, "10:00", "12:00", 300.0, TwoStops);
    add_flight(&mut flights, "08:00", "09:00", 100.0, Direct);
    add_flight(&mut flights, "06:00", "11:00", 200.0, OneStop);

    assert_eq!(vec![1, 2, 0], reorder(&flights, &[Price]));
}

#[test]
fn test_overnight_flight_sorts_first_by_duration() {
    let mut flights = Vec::new();
    add_flight(&mut flights, "10:00", "10:30", 300.0, Direct);
    add_flight(&mut flights, "23:00", "01:00", 100.0, Direct);
    add_flight(&mut flights, "12:00", "12:00", 200.0, Direct);

    assert_eq!(-1380, flights[1].duration());
    assert_eq!(vec![1, 2, 0], reorder(&flights, &[Duration]));
}

#[test]
fn test_direct_flight_rule_on_mixed_stops() {
    let flights = vec![
        flight("10:00", "12:00", 100.0, TwoStops),
        flight("10:00", "12:00", 100.0, Direct),
        flight("10:00", "12:00", 100.0, OneStop),
    ];

    let ordered = reorder_records(&flights, &[DirectFlight]);
    assert_eq!(Direct, ordered[0].flight_type);
    assert_eq!(vec![1, 2, 0], reorder(&flights, &[DirectFlight]));
}

#[test]
fn test_direct_flight_rule_never_ties() {
    let two_stops = vec![
        flight("10:00", "12:00", 100.0, TwoStops),
        flight("11:00", "12:00", 200.0, TwoStops),
    ];
    assert_eq!(vec![0, 1], reorder(&two_stops, &[DirectFlight]));

    // a later direct record always claims the front
    let directs = vec![
        flight("10:00", "12:00", 100.0, Direct),
        flight("11:00", "12:00", 200.0, Direct),
    ];
    assert_eq!(vec![1, 0], reorder(&directs, &[DirectFlight]));

    let one_stops = vec![
        flight("06:00", "08:00", 100.0, OneStop),
        flight("07:00", "09:00", 200.0, OneStop),
        flight("08:00", "10:00", 300.0, OneStop),
    ];
    assert_eq!(vec![0, 1, 2], reorder(&one_stops, &[DirectFlight]));
}

#[test]
fn test_direct_flight_rule_on_sample_payload() {
    let stops = [
        Direct, TwoStops, OneStop, Direct, TwoStops, OneStop, Direct, OneStop, TwoStops, Direct,
    ];
    let flights: Vec<_> = stops
        .iter()
        .map(|s| flight("10:00", "12:00", 100.0, *s))
        .collect();

    assert_eq!(
        vec![9, 6, 3, 0, 2, 5, 7, 1, 4, 8],
        reorder(&flights, &[DirectFlight])
    );
}

#[test]
fn test_last_activated_criterion_wins() {
    let mut flights = Vec::new();
    add_flight(&mut flights, "08:00", "09:00", 500.0, Direct); // 60m
    add_flight(&mut flights, "08:00", "12:00", 100.0, TwoStops); // 240m
    add_flight(&mut flights, "08:00", "10:00", 300.0, OneStop); // 120m

    assert_eq!(vec![0, 2, 1], reorder(&flights, &[Price, Duration]));
    assert_eq!(vec![1, 2, 0], reorder(&flights, &[Duration, Price]));
}

#[test]
fn test_earlier_criterion_only_breaks_ties() {
    let mut flights = Vec::new();
    add_flight(&mut flights, "08:00", "10:00", 400.0, Direct); // 120m
    add_flight(&mut flights, "09:00", "10:00", 900.0, Direct); // 60m
    add_flight(&mut flights, "07:00", "09:00", 100.0, OneStop); // 120m
    add_flight(&mut flights, "06:00", "07:00", 200.0, TwoStops); // 60m

    // primary by duration, ties by price
    assert_eq!(vec![3, 1, 2, 0], reorder(&flights, &[Price, Duration]));
    // a price-then-duration key would have started with the cheapest flight
    assert_ne!(2, reorder(&flights, &[Price, Duration])[0]);
}

#[test]
fn test_direct_then_price_puts_cheapest_first() {
    let mut flights = Vec::new();
    add_flight(&mut flights, "08:00", "10:00", 400.0, Direct);
    add_flight(&mut flights, "08:00", "10:00", 100.0, TwoStops);

    assert_eq!(vec![1, 0], reorder(&flights, &[DirectFlight, Price]));
    assert_eq!(vec![0, 1], reorder(&flights, &[Price, DirectFlight]));
}
