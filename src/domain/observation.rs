// Field observations submitted during a session
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("field `{0}` must not be empty")]
    EmptyField(&'static str),

    #[error("unknown occurrence type: {0}")]
    UnknownOccurrence(String),
}

/// Closed list of phenomena a user can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum OccurrenceType {
    Snow,
    #[serde(rename = "Sea Agitation")]
    SeaAgitation,
    Fog,
    #[serde(rename = "Hot Weather")]
    HotWeather,
    #[serde(rename = "Cold Weather")]
    ColdWeather,
    Precipitation,
    Thunderstorm,
    Wind,
}

impl OccurrenceType {
    pub const ALL: [OccurrenceType; 8] = [
        OccurrenceType::Snow,
        OccurrenceType::SeaAgitation,
        OccurrenceType::Fog,
        OccurrenceType::HotWeather,
        OccurrenceType::ColdWeather,
        OccurrenceType::Precipitation,
        OccurrenceType::Thunderstorm,
        OccurrenceType::Wind,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            OccurrenceType::Snow => "Snow",
            OccurrenceType::SeaAgitation => "Sea Agitation",
            OccurrenceType::Fog => "Fog",
            OccurrenceType::HotWeather => "Hot Weather",
            OccurrenceType::ColdWeather => "Cold Weather",
            OccurrenceType::Precipitation => "Precipitation",
            OccurrenceType::Thunderstorm => "Thunderstorm",
            OccurrenceType::Wind => "Wind",
        }
    }
}

impl fmt::Display for OccurrenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for OccurrenceType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|o| o.label() == s)
            .ok_or_else(|| ValidationError::UnknownOccurrence(s.to_string()))
    }
}

impl TryFrom<String> for OccurrenceType {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservationEntry {
    pub time: String,
    pub location: String,
    #[serde(default)]
    pub notes: String,
    #[serde(rename = "occurrence")]
    pub occurrence_type: OccurrenceType,
}

impl ObservationEntry {
    pub fn new(time: &str, location: &str, notes: &str, occurrence_type: OccurrenceType) -> Self {
        Self {
            time: time.to_string(),
            location: location.to_string(),
            notes: notes.to_string(),
            occurrence_type,
        }
    }
}

/// How strictly submitted entries are checked before being logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationMode {
    /// Any text is accepted, including empty strings.
    #[default]
    Lenient,
    /// `time` and `location` must contain non-whitespace text.
    Strict,
}

impl ValidationMode {
    pub fn check(&self, entry: &ObservationEntry) -> Result<(), ValidationError> {
        if *self == ValidationMode::Lenient {
            return Ok(());
        }
        if entry.time.trim().is_empty() {
            return Err(ValidationError::EmptyField("time"));
        }
        if entry.location.trim().is_empty() {
            return Err(ValidationError::EmptyField("location"));
        }
        Ok(())
    }
}

/// Append-only list of observations, in submission order.
#[derive(Debug, Clone, Default)]
pub struct ObservationLog {
    mode: ValidationMode,
    entries: Vec<ObservationEntry>,
}

impl ObservationLog {
    pub fn new(mode: ValidationMode) -> Self {
        Self {
            mode,
            entries: Vec::new(),
        }
    }

    pub fn append(&mut self, entry: ObservationEntry) -> Result<(), ValidationError> {
        self.mode.check(&entry)?;
        self.entries.push(entry);
        Ok(())
    }

    pub fn snapshot(&self) -> &[ObservationEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
