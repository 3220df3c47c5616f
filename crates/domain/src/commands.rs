//! Bot commands - what a user's text asks the bot to do

/// Keyword that triggers a weather lookup
pub const WEATHER_KEYWORD: &str = "PCD";

/// Intent derived from an inbound text message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotCommand {
    /// Look up the current Banqiao weather
    WeatherLookup,
    /// Anything else: answer with the usage prompt
    Prompt,
}

impl BotCommand {
    /// Classify a user's text
    ///
    /// Surrounding whitespace is ignored and the keyword is matched
    /// case-insensitively, so `" pcd "` is a weather lookup.
    pub fn parse(text: &str) -> Self {
        if text.trim().eq_ignore_ascii_case(WEATHER_KEYWORD) {
            Self::WeatherLookup
        } else {
            Self::Prompt
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_matches_exactly() {
        assert_eq!(BotCommand::parse("PCD"), BotCommand::WeatherLookup);
    }

    #[test]
    fn keyword_is_case_insensitive() {
        assert_eq!(BotCommand::parse("pcd"), BotCommand::WeatherLookup);
        assert_eq!(BotCommand::parse("Pcd"), BotCommand::WeatherLookup);
    }

    #[test]
    fn keyword_ignores_surrounding_whitespace() {
        assert_eq!(BotCommand::parse("  PCD  "), BotCommand::WeatherLookup);
        assert_eq!(BotCommand::parse("\tpcd\n"), BotCommand::WeatherLookup);
    }

    #[test]
    fn other_text_is_prompt() {
        assert_eq!(BotCommand::parse("hello"), BotCommand::Prompt);
        assert_eq!(BotCommand::parse(""), BotCommand::Prompt);
        assert_eq!(BotCommand::parse("PCD please"), BotCommand::Prompt);
        assert_eq!(BotCommand::parse("P C D"), BotCommand::Prompt);
    }

    #[test]
    fn full_width_keyword_is_not_matched() {
        assert_eq!(BotCommand::parse("ＰＣＤ"), BotCommand::Prompt);
    }
}
