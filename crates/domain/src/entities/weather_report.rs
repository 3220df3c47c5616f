//! Weather report rendered into a chat reply

use crate::replies::UNKNOWN_VALUE;

/// Current conditions for one location, as strings from the provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherReport {
    /// Human-readable place name shown in the reply
    pub location_label: String,
    /// Weather condition description (`Wx`)
    pub condition: Option<String>,
    /// Temperature in °C (`T`)
    pub temperature: Option<String>,
}

impl WeatherReport {
    /// Render the report as the chat reply text
    pub fn render(&self) -> String {
        format!(
            "📍 {} 現在天氣\n🌤 天氣：{}\n🌡 氣溫：{}°C",
            self.location_label,
            self.condition.as_deref().unwrap_or(UNKNOWN_VALUE),
            self.temperature.as_deref().unwrap_or(UNKNOWN_VALUE),
        )
    }
}
