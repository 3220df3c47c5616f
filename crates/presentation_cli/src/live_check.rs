//! Live reachability checks for `check-config --live`

use application::WeatherService;
use infrastructure::LineReplyAdapter;

/// Whether each upstream accepted a real request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiveStatus {
    pub line: bool,
    pub weather: bool,
}

impl LiveStatus {
    pub const fn all_ok(self) -> bool {
        self.line && self.weather
    }
}

/// Call the LINE bot-info endpoint and run one weather lookup concurrently
pub async fn check_upstreams(line: &LineReplyAdapter, weather: &WeatherService) -> LiveStatus {
    let (line, weather) = tokio::join!(line.is_available(), weather.is_available());
    LiveStatus { line, weather }
}
