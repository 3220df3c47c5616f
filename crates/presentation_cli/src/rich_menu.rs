//! Rich menu setup
//!
//! Creates the menu, uploads its image and makes it the default for all
//! users. Each step only runs after the previous one succeeded.

use std::path::Path;

use integration_line::{LineClient, LineError, RichMenu, RichMenuImage};
use tracing::info;

/// Texts sent by the six menu areas, row by row
pub const DEFAULT_ACTION_TEXTS: [&str; 6] = ["PCD", "天氣", "氣溫", "降雨", "說明", "關於"];

pub const DEFAULT_MENU_NAME: &str = "PCD Bot Menu";

pub const DEFAULT_CHAT_BAR_TEXT: &str = "選單";

/// Options for one setup run
#[derive(Debug, Clone)]
pub struct SetupOptions<'a> {
    pub image: &'a Path,
    pub name: &'a str,
    pub chat_bar_text: &'a str,
    pub action_texts: &'a [String],
}

/// Build and validate everything locally, then run the three API calls
///
/// Returns the ID of the new default menu.
pub async fn setup_rich_menu(
    client: &LineClient,
    options: &SetupOptions<'_>,
) -> Result<String, LineError> {
    let menu = RichMenu::grid(options.name, options.chat_bar_text, options.action_texts)?;
    let image = RichMenuImage::from_path(options.image).await?;

    let rich_menu_id = client.create_rich_menu(&menu).await?;
    info!(%rich_menu_id, "Rich menu created");

    client.upload_rich_menu_image(&rich_menu_id, image).await?;
    info!(%rich_menu_id, "Rich menu image uploaded");

    client.set_default_rich_menu(&rich_menu_id).await?;
    info!(%rich_menu_id, "Rich menu set as default");

    Ok(rich_menu_id)
}
