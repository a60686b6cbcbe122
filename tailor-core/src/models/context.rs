use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::TailorError;

/// Coarse time-of-day bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeOfDay {
    /// Bucket for a local hour (0-23).
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            5..=11 => Self::Morning,
            12..=16 => Self::Afternoon,
            17..=21 => Self::Evening,
            _ => Self::Night,
        }
    }
}

/// Device the user is reading on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceType {
    Mobile,
    Tablet,
    Desktop,
    EReader,
}

/// Self-reported or inferred mood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Focused,
    Relaxed,
    Curious,
    Tired,
}

/// A single contextual dimension a preference weight can attach to.
///
/// Serialized as a flat string key ("time:morning", "device:mobile")
/// so it can key a JSON map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum ContextFactor {
    Time(TimeOfDay),
    Device(DeviceType),
    Mood(Mood),
    /// Accumulated receptiveness to discovery recommendations. Fed by
    /// discovery responses through the feedback processor and read back
    /// by the discovery engine to size its divergence band.
    DiscoveryOpenness,
}

impl fmt::Display for ContextFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Time(t) => write!(f, "time:{}", variant_name(t)),
            Self::Device(d) => write!(f, "device:{}", variant_name(d)),
            Self::Mood(m) => write!(f, "mood:{}", variant_name(m)),
            Self::DiscoveryOpenness => f.write_str("discovery_openness"),
        }
    }
}

fn variant_name<T: Serialize>(value: &T) -> String {
    // Enum variants serialize to a bare JSON string in snake_case.
    serde_json::to_value(value)
        .ok()
        .and_then(|v| v.as_str().map(str::to_string))
        .unwrap_or_default()
}

fn parse_variant<T: serde::de::DeserializeOwned>(v: &str) -> Result<T, serde_json::Error> {
    serde_json::from_value(serde_json::Value::String(v.to_string()))
}

impl FromStr for ContextFactor {
    type Err = TailorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "discovery_openness" {
            return Ok(Self::DiscoveryOpenness);
        }
        match s.split_once(':') {
            Some(("time", v)) => Ok(Self::Time(parse_variant(v)?)),
            Some(("device", v)) => Ok(Self::Device(parse_variant(v)?)),
            Some(("mood", v)) => Ok(Self::Mood(parse_variant(v)?)),
            _ => Err(TailorError::InvalidContextFactor(s.to_string())),
        }
    }
}

impl From<ContextFactor> for String {
    fn from(f: ContextFactor) -> Self {
        f.to_string()
    }
}

impl TryFrom<String> for ContextFactor {
    type Error = TailorError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Contextual constraints supplied with a recommendation request.
/// All fields optional; a fully empty context triggers inference
/// from interaction history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestContext {
    pub time_of_day: Option<TimeOfDay>,
    pub device: Option<DeviceType>,
    pub location: Option<String>,
    /// Minutes the user has available to read.
    pub available_time_min: Option<u32>,
    pub mood: Option<Mood>,
}

impl RequestContext {
    /// Whether any contextual dimension is present.
    pub fn is_empty(&self) -> bool {
        self.time_of_day.is_none()
            && self.device.is_none()
            && self.location.is_none()
            && self.available_time_min.is_none()
            && self.mood.is_none()
    }

    /// The context factors this request activates.
    pub fn factors(&self) -> Vec<ContextFactor> {
        let mut out = Vec::new();
        if let Some(t) = self.time_of_day {
            out.push(ContextFactor::Time(t));
        }
        if let Some(d) = self.device {
            out.push(ContextFactor::Device(d));
        }
        if let Some(m) = self.mood {
            out.push(ContextFactor::Mood(m));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factor_string_round_trip() {
        let factors = [
            ContextFactor::Time(TimeOfDay::Morning),
            ContextFactor::Device(DeviceType::EReader),
            ContextFactor::Mood(Mood::Curious),
            ContextFactor::DiscoveryOpenness,
        ];
        for f in factors {
            let s = f.to_string();
            assert_eq!(s.parse::<ContextFactor>().unwrap(), f);
        }
    }

    #[test]
    fn unknown_factor_rejected() {
        assert!("weather:rainy".parse::<ContextFactor>().is_err());
    }

    #[test]
    fn hour_buckets() {
        assert_eq!(TimeOfDay::from_hour(8), TimeOfDay::Morning);
        assert_eq!(TimeOfDay::from_hour(14), TimeOfDay::Afternoon);
        assert_eq!(TimeOfDay::from_hour(19), TimeOfDay::Evening);
        assert_eq!(TimeOfDay::from_hour(2), TimeOfDay::Night);
    }
}
