use crate::flight::{FlightRecord, FlightType};
use std::cmp::Ordering;
use std::fmt;
use std::fmt::Formatter;
use std::str::FromStr;
use thiserror::Error;

pub type Comparator = fn(&FlightRecord, &FlightRecord) -> Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Criterion {
    DirectFlight,
    Price,
    Duration,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CriterionError {
    #[error("unknown filter {0:?} (expected one of: direct, price, duration)")]
    Unknown(String),
}

impl Criterion {
    /// Button order on the results screen.
    pub const ALL: [Criterion; 3] = [Criterion::DirectFlight, Criterion::Price, Criterion::Duration];

    pub fn label(&self) -> &'static str {
        match self {
            Criterion::DirectFlight => "Direct flight",
            Criterion::Price => "Best price",
            Criterion::Duration => "Duration",
        }
    }

    pub fn comparator(&self) -> Comparator {
        match self {
            Criterion::DirectFlight => by_direct_flight,
            Criterion::Price => by_price,
            Criterion::Duration => by_duration,
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Criterion {
    type Err = CriterionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "d" | "direct" | "directflight" | "direct-flight" => Ok(Criterion::DirectFlight),
            "p" | "price" | "best-price" => Ok(Criterion::Price),
            "t" | "duration" | "time" => Ok(Criterion::Duration),
            _ => Err(CriterionError::Unknown(s.to_string())),
        }
    }
}

pub fn by_price(a: &FlightRecord, b: &FlightRecord) -> Ordering {
    a.price.cmp_amount(&b.price)
}

pub fn by_duration(a: &FlightRecord, b: &FlightRecord) -> Ordering {
    a.duration().cmp(&b.duration())
}

/// Ranks `a` first when it is direct, or when it has one stop against a
/// two-stop `b`; otherwise `b` ranks first. Never reports a tie, so the
/// relation is neither reflexive nor transitive and the resulting order
/// depends on the sort that consumes it.
pub fn by_direct_flight(a: &FlightRecord, b: &FlightRecord) -> Ordering {
    match (a.flight_type, b.flight_type) {
        (FlightType::Direct, _) => Ordering::Less,
        (FlightType::OneStop, FlightType::TwoStops) => Ordering::Less,
        _ => Ordering::Greater,
    }
}
