use crate::time::{Time, TimeError, duration};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::fmt::Formatter;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlightType {
    #[serde(rename = "Directo")]
    Direct,
    #[serde(rename = "1 Escala")]
    OneStop,
    #[serde(rename = "2 Escalas")]
    TwoStops,
}

impl fmt::Display for FlightType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let label = match self {
            FlightType::Direct => "Directo",
            FlightType::OneStop => "1 Escala",
            FlightType::TwoStops => "2 Escalas",
        };
        write!(f, "{}", label)
    }
}

/// Ticket price in the single currency the provider quotes (COP).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Price(pub f64);

impl Price {
    pub fn cmp_amount(&self, other: &Price) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} COP", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordError {
    #[error(transparent)]
    Timestamp(#[from] TimeError),
    #[error("invalid price {0}: must be a finite, non-negative amount")]
    InvalidPrice(f64),
}

/// Payload shape delivered by the flights endpoint.
#[derive(Deserialize)]
struct RawFlight {
    hora_ida: String,
    hora_vuelta: String,
    precio: f64,
    tipo_vuelo: FlightType,
}

/// A single flight offer. Never mutated once ingested; orderings are views over it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawFlight")]
pub struct FlightRecord {
    pub departure_time: Time,
    pub arrival_time: Time,
    pub price: Price,
    pub flight_type: FlightType,
}

impl FlightRecord {
    pub fn new(
        departure_time: &str,
        arrival_time: &str,
        price: f64,
        flight_type: FlightType,
    ) -> Result<FlightRecord, RecordError> {
        if !price.is_finite() || price < 0.0 {
            return Err(RecordError::InvalidPrice(price));
        }
        let minutes = duration(departure_time, arrival_time)?;
        if minutes < 0 {
            debug!(
                departure_time,
                arrival_time,
                minutes,
                "arrival is earlier on the clock than departure"
            );
        }
        Ok(FlightRecord {
            departure_time: Time::parse(departure_time)?,
            arrival_time: Time::parse(arrival_time)?,
            price: Price(price),
            flight_type,
        })
    }

    /// Elapsed minutes; negative for flights landing "earlier" on the clock.
    pub fn duration(&self) -> i64 {
        self.arrival_time - self.departure_time
    }
}

impl TryFrom<RawFlight> for FlightRecord {
    type Error = RecordError;

    fn try_from(raw: RawFlight) -> Result<Self, Self::Error> {
        FlightRecord::new(&raw.hora_ida, &raw.hora_vuelta, raw.precio, raw.tipo_vuelo)
    }
}
