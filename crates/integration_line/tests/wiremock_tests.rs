//! Integration tests for the LINE client using WireMock
//!
//! These tests mock the Messaging API to verify request shapes and error
//! mapping without making actual API calls.

use integration_line::{
    ImageType, LineClient, LineClientConfig, LineError, RichMenu, RichMenuImage,
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_bytes, body_json, header, method, path},
};

// =============================================================================
// Test Helpers
// =============================================================================

const TOKEN: &str = "test_access_token";

fn create_client(mock_server: &MockServer) -> LineClient {
    let config = LineClientConfig {
        channel_access_token: TOKEN.to_string(),
        api_base_url: mock_server.uri(),
        api_data_base_url: mock_server.uri(),
        timeout_secs: 2,
    };
    LineClient::new(config).expect("Failed to create client")
}

fn api_error_response(message: &str) -> serde_json::Value {
    serde_json::json!({
        "message": message,
        "details": []
    })
}

fn menu_texts() -> Vec<String> {
    ["PCD", "天氣", "氣溫", "降雨", "說明", "關於"]
        .iter()
        .map(ToString::to_string)
        .collect()
}

// =============================================================================
// Reply Tests
// =============================================================================

mod reply {
    use super::*;

    #[tokio::test]
    async fn sends_reply_with_bearer_token_and_text_messages() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v2/bot/message/reply"))
            .and(header("authorization", "Bearer test_access_token"))
            .and(body_json(serde_json::json!({
                "replyToken": "nHuyWiB7yP5Zw52FIkcQobQuGDXCTA",
                "messages": [{"type": "text", "text": "請輸入 PCD 取得板橋天氣"}]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_client(&mock_server);
        let result = client
            .reply_message(
                "nHuyWiB7yP5Zw52FIkcQobQuGDXCTA",
                &["請輸入 PCD 取得板橋天氣".to_string()],
            )
            .await;

        assert!(result.is_ok(), "Expected success, got: {result:?}");
    }

    #[tokio::test]
    async fn invalid_reply_token_maps_to_api_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v2/bot/message/reply"))
            .respond_with(
                ResponseTemplate::new(400).set_body_json(api_error_response("Invalid reply token")),
            )
            .mount(&mock_server)
            .await;

        let client = create_client(&mock_server);
        let result = client.reply_message("expired", &["hi".to_string()]).await;

        match result {
            Err(LineError::Api { status, message }) => {
                assert_eq!(status, 400);
                assert_eq!(message, "Invalid reply token");
            },
            other => panic!("Expected Api error, got: {other:?}"),
        }
    }

    #[tokio::test]
    async fn non_json_error_body_is_kept_verbatim() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v2/bot/message/reply"))
            .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
            .mount(&mock_server)
            .await;

        let client = create_client(&mock_server);
        let result = client.reply_message("token", &["hi".to_string()]).await;

        assert!(
            matches!(result, Err(LineError::Api { status: 502, ref message }) if message == "Bad Gateway"),
            "Got: {result:?}"
        );
    }

    #[tokio::test]
    async fn unreachable_server_is_request_error() {
        let config = LineClientConfig {
            channel_access_token: TOKEN.to_string(),
            api_base_url: "http://127.0.0.1:9".to_string(),
            api_data_base_url: "http://127.0.0.1:9".to_string(),
            timeout_secs: 1,
        };
        let client = LineClient::new(config).expect("Failed to create client");

        let result = client.reply_message("token", &["hi".to_string()]).await;
        assert!(matches!(result, Err(LineError::Request(_))), "Got: {result:?}");
    }
}

// =============================================================================
// Rich Menu Tests
// =============================================================================

mod rich_menu {
    use super::*;

    #[tokio::test]
    async fn create_returns_rich_menu_id() {
        let mock_server = MockServer::start().await;
        let menu = RichMenu::grid("PCD menu", "選單", &menu_texts()).unwrap();

        Mock::given(method("POST"))
            .and(path("/v2/bot/richmenu"))
            .and(header("authorization", "Bearer test_access_token"))
            .and(body_json(&menu))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "richMenuId": "richmenu-88c05ef6921ae53f8b58a25f3a65faf7"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_client(&mock_server);
        let id = client.create_rich_menu(&menu).await.unwrap();

        assert_eq!(id, "richmenu-88c05ef6921ae53f8b58a25f3a65faf7");
    }

    #[tokio::test]
    async fn create_rejects_invalid_menu_without_request() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let mut menu = RichMenu::grid("PCD menu", "選單", &menu_texts()).unwrap();
        menu.chat_bar_text = String::new();

        let client = create_client(&mock_server);
        let result = client.create_rich_menu(&menu).await;

        assert!(matches!(result, Err(LineError::InvalidRichMenu(_))));
    }

    #[tokio::test]
    async fn upload_sends_image_with_content_type() {
        let mock_server = MockServer::start().await;
        let bytes = vec![0x89, b'P', b'N', b'G', 0x0d, 0x0a];

        Mock::given(method("POST"))
            .and(path("/v2/bot/richmenu/richmenu-1/content"))
            .and(header("content-type", "image/png"))
            .and(header("authorization", "Bearer test_access_token"))
            .and(body_bytes(bytes.clone()))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_client(&mock_server);
        let image = RichMenuImage::new(ImageType::Png, bytes).unwrap();
        let result = client.upload_rich_menu_image("richmenu-1", image).await;

        assert!(result.is_ok(), "Got: {result:?}");
    }

    #[tokio::test]
    async fn upload_jpeg_uses_jpeg_content_type() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v2/bot/richmenu/richmenu-2/content"))
            .and(header("content-type", "image/jpeg"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_client(&mock_server);
        let image = RichMenuImage::new(ImageType::Jpeg, vec![0xff, 0xd8, 0xff]).unwrap();
        assert!(client.upload_rich_menu_image("richmenu-2", image).await.is_ok());
    }

    #[tokio::test]
    async fn set_default_posts_to_all_users() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v2/bot/user/all/richmenu/richmenu-1"))
            .and(header("authorization", "Bearer test_access_token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_client(&mock_server);
        assert!(client.set_default_rich_menu("richmenu-1").await.is_ok());
    }

    #[tokio::test]
    async fn set_default_unknown_menu_is_api_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v2/bot/user/all/richmenu/missing"))
            .respond_with(
                ResponseTemplate::new(404).set_body_json(api_error_response("richmenu not found")),
            )
            .mount(&mock_server)
            .await;

        let client = create_client(&mock_server);
        let result = client.set_default_rich_menu("missing").await;

        assert!(
            matches!(result, Err(LineError::Api { status: 404, .. })),
            "Got: {result:?}"
        );
    }
}

// =============================================================================
// Availability Tests
// =============================================================================

mod availability {
    use super::*;

    #[tokio::test]
    async fn available_when_bot_info_succeeds() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v2/bot/info"))
            .and(header("authorization", "Bearer test_access_token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "userId": "Ub9952f8...",
                "basicId": "@216ru...",
                "displayName": "PCD bot"
            })))
            .mount(&mock_server)
            .await;

        let client = create_client(&mock_server);
        assert!(client.is_available().await);
    }

    #[tokio::test]
    async fn unavailable_when_token_rejected() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v2/bot/info"))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(api_error_response("Authentication failed")),
            )
            .mount(&mock_server)
            .await;

        let client = create_client(&mock_server);
        assert!(!client.is_available().await);
    }
}
