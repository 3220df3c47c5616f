//! Domain entities - Values that flow through one webhook delivery

mod inbound_event;
mod reply_message;
mod weather_report;

pub use inbound_event::InboundEvent;
pub use reply_message::ReplyMessage;
pub use weather_report::WeatherReport;
