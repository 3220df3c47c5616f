//! Property-based tests for domain value objects
//!
//! These tests use proptest to verify invariants across many random inputs.

use domain::{BotCommand, ReplyToken, WeatherReport};
use proptest::prelude::*;

// ============================================================================
// BotCommand Property Tests
// ============================================================================

mod bot_command_tests {
    use super::*;

    proptest! {
        #[test]
        fn keyword_matches_in_any_case_with_padding(
            mask in prop::collection::vec(any::<bool>(), 3),
            left in "[ \t\n]{0,4}",
            right in "[ \t\n]{0,4}"
        ) {
            let keyword: String = "pcd"
                .chars()
                .zip(mask)
                .map(|(c, upper)| if upper { c.to_ascii_uppercase() } else { c })
                .collect();
            let text = format!("{left}{keyword}{right}");
            prop_assert_eq!(BotCommand::parse(&text), BotCommand::WeatherLookup);
        }

        #[test]
        fn text_without_keyword_is_prompt(text in "[a-oq-z0-9 ]{0,20}") {
            prop_assert_eq!(BotCommand::parse(&text), BotCommand::Prompt);
        }
    }
}

// ============================================================================
// ReplyToken Property Tests
// ============================================================================

mod reply_token_tests {
    use super::*;

    proptest! {
        #[test]
        fn non_blank_tokens_round_trip(token in "[A-Za-z0-9]{1,64}") {
            let parsed = ReplyToken::new(token.clone());
            prop_assert!(parsed.is_ok());
            let parsed = parsed.unwrap();
            prop_assert_eq!(parsed.as_str(), token.as_str());
        }

        #[test]
        fn whitespace_tokens_rejected(token in "[ \t\n]{0,8}") {
            prop_assert!(ReplyToken::new(token).is_err());
        }
    }
}

// ============================================================================
// WeatherReport Property Tests
// ============================================================================

mod weather_report_tests {
    use super::*;

    proptest! {
        #[test]
        fn rendered_report_contains_fields(
            condition in "[^\n]{1,10}",
            temperature in "-?[0-9]{1,2}"
        ) {
            let report = WeatherReport {
                location_label: "新北市板橋區".to_string(),
                condition: Some(condition.clone()),
                temperature: Some(temperature.clone()),
            };
            let text = report.render();
            prop_assert_eq!(text.lines().count(), 3);
            let condition_line = format!("天氣：{condition}");
            let temperature_line = format!("氣溫：{temperature}°C");
            prop_assert!(text.contains(&condition_line));
            prop_assert!(text.ends_with(&temperature_line));
        }
    }
}
