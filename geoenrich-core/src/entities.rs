use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// A single match returned by a geocoding service.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub lat: f64,
    pub lng: f64,
}

impl Candidate {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Latitude and longitude of a row, either both present or both absent.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Coordinates(Option<Candidate>);

impl Coordinates {
    pub const fn absent() -> Self {
        Self(None)
    }

    pub const fn new(lat: f64, lng: f64) -> Self {
        Self(Some(Candidate::new(lat, lng)))
    }

    pub const fn is_absent(&self) -> bool {
        self.0.is_none()
    }

    /// The two output fields. Absent coordinates are empty strings.
    pub fn to_fields(self) -> [String; 2] {
        match self.0 {
            Some(Candidate { lat, lng }) => [lat.to_string(), lng.to_string()],
            None => [String::new(), String::new()],
        }
    }
}

impl From<Candidate> for Coordinates {
    fn from(from: Candidate) -> Self {
        Self(Some(from))
    }
}

/// Locates the address field of a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AddressColumn {
    /// Zero-based position.
    Index(usize),
    /// Column name looked up in the header.
    Name(String),
}

/// The column of the data file this tool was first written for.
pub const DEFAULT_ADDRESS_COLUMN_INDEX: usize = 12;

impl Default for AddressColumn {
    fn default() -> Self {
        Self::Index(DEFAULT_ADDRESS_COLUMN_INDEX)
    }
}

impl FromStr for AddressColumn {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let column = match s.trim().parse::<usize>() {
            Ok(idx) => Self::Index(idx),
            Err(_) => Self::Name(s.to_string()),
        };
        Ok(column)
    }
}

impl fmt::Display for AddressColumn {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Index(idx) => write!(f, "#{idx}"),
            Self::Name(name) => write!(f, "'{name}'"),
        }
    }
}

/// What to do if the geocoding service fails for a single row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorPolicy {
    /// Stop the whole run with the first failure.
    #[default]
    Abort,
    /// Report the failure and write the row without coordinates.
    Skip,
}

/// Counters of a finished run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub rows: u64,
    pub resolved: u64,
    pub unresolved: u64,
    pub failed: u64,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let Self {
            rows,
            resolved,
            unresolved,
            failed,
        } = self;
        write!(
            f,
            "{rows} rows ({resolved} resolved, {unresolved} unresolved, {failed} failed)"
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_coordinates_are_empty_fields() {
        assert_eq!(Coordinates::absent().to_fields(), [String::new(), String::new()]);
        assert!(Coordinates::default().is_absent());
    }

    #[test]
    fn coordinates_are_written_without_rounding() {
        let [lat, lng] = Coordinates::new(52.52, 13.405).to_fields();
        assert_eq!(lat, "52.52");
        assert_eq!(lng, "13.405");
        let [lat, lng] = Coordinates::new(-33.868_820_123_4, 151.209_295).to_fields();
        assert_eq!(lat, "-33.8688201234");
        assert_eq!(lng, "151.209295");
    }

    #[test]
    fn parse_address_column() {
        let parse = |s: &str| s.parse::<AddressColumn>().unwrap();
        assert_eq!(parse("12"), AddressColumn::Index(12));
        assert_eq!(parse(" 0 "), AddressColumn::Index(0));
        assert_eq!(parse("Adresse"), AddressColumn::Name("Adresse".to_string()));
        assert_eq!(parse("-1"), AddressColumn::Name("-1".to_string()));
    }

    #[test]
    fn default_address_column() {
        assert_eq!(AddressColumn::default(), AddressColumn::Index(12));
    }
}
