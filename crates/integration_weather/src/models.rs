//! Weather data models
//!
//! Types for the CWA township forecast response (`F-D0047-*` datasets).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Element name of the weather condition description
pub const CONDITION_ELEMENT: &str = "Wx";

/// Element name of the temperature
pub const TEMPERATURE_ELEMENT: &str = "T";

/// Current values extracted from one forecast response
///
/// Maps each returned element name to the value of its first time slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Location name reported by the provider, if any
    pub location_name: Option<String>,
    /// Element name to first value
    pub elements: BTreeMap<String, String>,
}

impl CurrentConditions {
    /// Weather condition description (`Wx`)
    pub fn condition(&self) -> Option<&str> {
        self.element(CONDITION_ELEMENT)
    }

    /// Temperature in °C (`T`)
    pub fn temperature(&self) -> Option<&str> {
        self.element(TEMPERATURE_ELEMENT)
    }

    /// Value of an arbitrary element
    pub fn element(&self, name: &str) -> Option<&str> {
        self.elements.get(name).map(String::as_str)
    }
}

// ============================================================================
// Wire format
// ============================================================================

#[derive(Debug, Deserialize)]
pub(crate) struct ApiResponse {
    pub records: Records,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Records {
    pub locations: Vec<LocationGroup>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LocationGroup {
    pub location: Vec<Location>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Location {
    #[serde(default)]
    pub location_name: Option<String>,
    pub weather_element: Vec<WeatherElement>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WeatherElement {
    pub element_name: String,
    pub time: Vec<TimeSlot>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TimeSlot {
    pub element_value: Vec<ElementValue>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ElementValue {
    pub value: ScalarValue,
}

/// Element values are usually strings, but numbers are accepted as written
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum ScalarValue {
    Text(String),
    Number(serde_json::Number),
}

impl ScalarValue {
    pub fn into_string(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Number(number) => number.to_string(),
        }
    }
}
