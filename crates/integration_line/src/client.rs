//! LINE client for replies and rich menu administration
//!
//! Uses the LINE Messaging API with a channel access token.

use std::time::Duration;

use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::rich_menu::{RichMenu, RichMenuImage};

/// LINE API errors
#[derive(Debug, Error)]
pub enum LineError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Missing configuration: {0}")]
    Configuration(String),

    #[error("Invalid rich menu: {0}")]
    InvalidRichMenu(String),

    #[error("Invalid rich menu image: {0}")]
    InvalidImage(String),
}

/// LINE client configuration
#[derive(Clone)]
pub struct LineClientConfig {
    /// Long-lived channel access token
    pub channel_access_token: String,
    /// Messaging API base URL (default: https://api.line.me)
    pub api_base_url: String,
    /// Content upload base URL (default: https://api-data.line.me)
    pub api_data_base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl std::fmt::Debug for LineClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineClientConfig")
            .field("channel_access_token", &"[REDACTED]")
            .field("api_base_url", &self.api_base_url)
            .field("api_data_base_url", &self.api_data_base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Default for LineClientConfig {
    fn default() -> Self {
        Self {
            channel_access_token: String::new(),
            api_base_url: "https://api.line.me".to_string(),
            api_data_base_url: "https://api-data.line.me".to_string(),
            timeout_secs: 10,
        }
    }
}

/// LINE Messaging API client
#[derive(Debug, Clone)]
pub struct LineClient {
    client: Client,
    config: LineClientConfig,
}

/// Reply request body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ReplyRequest<'a> {
    reply_token: &'a str,
    messages: Vec<TextMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct TextMessage<'a> {
    #[serde(rename = "type")]
    msg_type: &'static str,
    text: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateRichMenuResponse {
    rich_menu_id: String,
}

/// API error response
#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    message: String,
}

impl LineClient {
    /// Create a new LINE client
    pub fn new(config: LineClientConfig) -> Result<Self, LineError> {
        if config.channel_access_token.trim().is_empty() {
            return Err(LineError::Configuration(
                "channel_access_token is required".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { client, config })
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}{path}", self.config.api_base_url.trim_end_matches('/'))
    }

    fn data_url(&self, path: &str) -> String {
        format!(
            "{}{path}",
            self.config.api_data_base_url.trim_end_matches('/')
        )
    }

    /// Reply to an event with one or more text messages
    #[instrument(skip(self, texts), fields(message_count = texts.len()))]
    pub async fn reply_message(&self, reply_token: &str, texts: &[String]) -> Result<(), LineError> {
        let request = ReplyRequest {
            reply_token,
            messages: texts
                .iter()
                .map(|text| TextMessage {
                    msg_type: "text",
                    text,
                })
                .collect(),
        };

        debug!("Sending LINE reply");

        let response = self
            .client
            .post(self.api_url("/v2/bot/message/reply"))
            .bearer_auth(&self.config.channel_access_token)
            .json(&request)
            .send()
            .await?;

        check_status(response).await.map(drop)
    }

    /// Register a rich menu and return its ID
    #[instrument(skip(self, menu), fields(name = %menu.name))]
    pub async fn create_rich_menu(&self, menu: &RichMenu) -> Result<String, LineError> {
        menu.validate()?;

        let response = self
            .client
            .post(self.api_url("/v2/bot/richmenu"))
            .bearer_auth(&self.config.channel_access_token)
            .json(menu)
            .send()
            .await?;

        let created: CreateRichMenuResponse = check_status(response).await?.json().await?;
        debug!(rich_menu_id = %created.rich_menu_id, "Rich menu created");
        Ok(created.rich_menu_id)
    }

    /// Upload the image shown for a rich menu
    #[instrument(skip(self, image), fields(bytes = image.bytes.len()))]
    pub async fn upload_rich_menu_image(
        &self,
        rich_menu_id: &str,
        image: RichMenuImage,
    ) -> Result<(), LineError> {
        let response = self
            .client
            .post(self.data_url(&format!("/v2/bot/richmenu/{rich_menu_id}/content")))
            .bearer_auth(&self.config.channel_access_token)
            .header(reqwest::header::CONTENT_TYPE, image.image_type.content_type())
            .body(image.bytes)
            .send()
            .await?;

        check_status(response).await.map(drop)
    }

    /// Make a rich menu the default for every user
    #[instrument(skip(self))]
    pub async fn set_default_rich_menu(&self, rich_menu_id: &str) -> Result<(), LineError> {
        let response = self
            .client
            .post(self.api_url(&format!("/v2/bot/user/all/richmenu/{rich_menu_id}")))
            .bearer_auth(&self.config.channel_access_token)
            .send()
            .await?;

        check_status(response).await.map(drop)
    }

    /// Check if the LINE API accepts the configured token
    #[instrument(skip(self))]
    pub async fn is_available(&self) -> bool {
        self.client
            .get(self.api_url("/v2/bot/info"))
            .bearer_auth(&self.config.channel_access_token)
            .send()
            .await
            .is_ok_and(|res| res.status().is_success())
    }
}

/// Turn a non-2xx response into [`LineError::Api`]
async fn check_status(response: Response) -> Result<Response, LineError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ApiErrorResponse>(&body)
        .map(|e| e.message)
        .unwrap_or(body);

    Err(LineError::Api {
        status: status.as_u16(),
        message,
    })
}
