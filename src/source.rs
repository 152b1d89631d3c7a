use crate::flight::FlightRecord;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse flights from {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Anything able to deliver the flight offers for one search.
pub trait FlightSource {
    fn describe(&self) -> String;

    fn fetch(&self) -> Result<Vec<FlightRecord>, SourceError>;
}

/// Reads a JSON array shaped like the flights endpoint payload.
pub struct JsonFileSource {
    pub path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> JsonFileSource {
        JsonFileSource { path: path.into() }
    }
}

impl FlightSource for JsonFileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch(&self) -> Result<Vec<FlightRecord>, SourceError> {
        let data = std::fs::read_to_string(&self.path).map_err(|source| SourceError::Read {
            path: self.path.clone(),
            source,
        })?;
        serde_json::from_str(&data).map_err(|source| SourceError::Parse {
            path: self.path.clone(),
            source,
        })
    }
}

/// Fetches once. A failure is logged and leaves the screen with no flights.
pub fn load_or_empty(source: &dyn FlightSource) -> Vec<FlightRecord> {
    match source.fetch() {
        Ok(flights) => {
            info!(source = %source.describe(), count = flights.len(), "loaded flights");
            flights
        }
        Err(e) => {
            error!(source = %source.describe(), error = %e, "error fetching flights");
            Vec::new()
        }
    }
}
