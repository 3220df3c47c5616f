//! Rich menu definitions
//!
//! Builds the request body for `POST /v2/bot/richmenu` and loads the menu
//! image uploaded afterwards.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::client::LineError;

/// Number of area rows in the grid layout
pub const GRID_ROWS: u32 = 2;

/// Number of area columns in the grid layout
pub const GRID_COLUMNS: u32 = 3;

/// Canvas width of a full-size rich menu image
pub const CANVAS_WIDTH: u32 = 2500;

/// Canvas height of a full-size rich menu image
pub const CANVAS_HEIGHT: u32 = 1686;

/// Largest image the platform accepts (1 MB)
pub const MAX_IMAGE_BYTES: usize = 1024 * 1024;

const MAX_CHAT_BAR_TEXT_CHARS: usize = 14;
const MAX_NAME_CHARS: usize = 300;
const MAX_LABEL_CHARS: usize = 20;

/// Rich menu object as accepted by the Messaging API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RichMenu {
    pub size: RichMenuSize,
    /// Whether the menu is expanded when first shown
    pub selected: bool,
    pub name: String,
    /// Text on the chat bar toggle
    pub chat_bar_text: String,
    pub areas: Vec<RichMenuArea>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RichMenuSize {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RichMenuArea {
    pub bounds: Bounds,
    pub action: MenuAction,
}

/// Tappable rectangle in image pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Action fired when an area is tapped
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum MenuAction {
    /// Send `text` as if the user typed it
    Message {
        #[serde(skip_serializing_if = "Option::is_none")]
        label: Option<String>,
        text: String,
    },
}

impl RichMenu {
    /// Build a full-size menu with a 2×3 grid of message actions
    ///
    /// Areas are laid out row by row, left to right, and tile the canvas
    /// without gaps or overlap.
    pub fn grid(
        name: impl Into<String>,
        chat_bar_text: impl Into<String>,
        texts: &[String],
    ) -> Result<Self, LineError> {
        let cells = (GRID_ROWS * GRID_COLUMNS) as usize;
        if texts.len() != cells {
            return Err(LineError::InvalidRichMenu(format!(
                "grid needs exactly {cells} action texts, got {}",
                texts.len()
            )));
        }

        let mut areas = Vec::with_capacity(cells);
        for row in 0..GRID_ROWS {
            for column in 0..GRID_COLUMNS {
                let index = (row * GRID_COLUMNS + column) as usize;
                let text = texts[index].clone();
                let label = (text.chars().count() <= MAX_LABEL_CHARS).then(|| text.clone());
                areas.push(RichMenuArea {
                    bounds: cell_bounds(row, column),
                    action: MenuAction::Message { label, text },
                });
            }
        }

        let menu = Self {
            size: RichMenuSize {
                width: CANVAS_WIDTH,
                height: CANVAS_HEIGHT,
            },
            selected: true,
            name: name.into(),
            chat_bar_text: chat_bar_text.into(),
            areas,
        };
        menu.validate()?;
        Ok(menu)
    }

    /// Check the limits the platform enforces on menu objects
    pub fn validate(&self) -> Result<(), LineError> {
        if self.name.is_empty() || self.name.chars().count() > MAX_NAME_CHARS {
            return Err(LineError::InvalidRichMenu(format!(
                "name must be 1-{MAX_NAME_CHARS} characters"
            )));
        }
        let chat_bar_chars = self.chat_bar_text.chars().count();
        if chat_bar_chars == 0 || chat_bar_chars > MAX_CHAT_BAR_TEXT_CHARS {
            return Err(LineError::InvalidRichMenu(format!(
                "chat bar text must be 1-{MAX_CHAT_BAR_TEXT_CHARS} characters"
            )));
        }
        for area in &self.areas {
            let MenuAction::Message { text, .. } = &area.action;
            if text.trim().is_empty() {
                return Err(LineError::InvalidRichMenu(
                    "area action text must not be empty".to_string(),
                ));
            }
            let b = area.bounds;
            if b.x + b.width > self.size.width || b.y + b.height > self.size.height {
                return Err(LineError::InvalidRichMenu(format!(
                    "area at ({}, {}) exceeds the canvas",
                    b.x, b.y
                )));
            }
        }
        Ok(())
    }
}

/// Bounds of one grid cell; edges fall on `i * size / n`
const fn cell_bounds(row: u32, column: u32) -> Bounds {
    let x = column * CANVAS_WIDTH / GRID_COLUMNS;
    let y = row * CANVAS_HEIGHT / GRID_ROWS;
    Bounds {
        x,
        y,
        width: (column + 1) * CANVAS_WIDTH / GRID_COLUMNS - x,
        height: (row + 1) * CANVAS_HEIGHT / GRID_ROWS - y,
    }
}

/// Image formats accepted for rich menus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageType {
    Png,
    Jpeg,
}

impl ImageType {
    /// Detect the type from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "png" => Some(Self::Png),
            "jpg" | "jpeg" => Some(Self::Jpeg),
            _ => None,
        }
    }

    pub const fn content_type(self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
        }
    }
}

/// Image bytes ready for upload
#[derive(Debug, Clone)]
pub struct RichMenuImage {
    pub image_type: ImageType,
    pub bytes: Vec<u8>,
}

impl RichMenuImage {
    /// Wrap in-memory image bytes, enforcing the size limit
    pub fn new(image_type: ImageType, bytes: Vec<u8>) -> Result<Self, LineError> {
        if bytes.is_empty() {
            return Err(LineError::InvalidImage("image is empty".to_string()));
        }
        if bytes.len() > MAX_IMAGE_BYTES {
            return Err(LineError::InvalidImage(format!(
                "image is {} bytes, limit is {MAX_IMAGE_BYTES}",
                bytes.len()
            )));
        }
        Ok(Self { image_type, bytes })
    }

    /// Load a PNG or JPEG file from disk
    pub async fn from_path(path: &Path) -> Result<Self, LineError> {
        let image_type = ImageType::from_path(path).ok_or_else(|| {
            LineError::InvalidImage(format!(
                "{} is not a .png, .jpg or .jpeg file",
                path.display()
            ))
        })?;
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| LineError::InvalidImage(format!("{}: {e}", path.display())))?;
        Self::new(image_type, bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts() -> Vec<String> {
        ["PCD", "天氣", "氣溫", "降雨", "說明", "關於"]
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn grid_has_six_areas() {
        let menu = RichMenu::grid("PCD menu", "選單", &texts()).unwrap();
        assert_eq!(menu.areas.len(), 6);
        assert_eq!(menu.size.width, 2500);
        assert_eq!(menu.size.height, 1686);
        assert!(menu.selected);
    }

    #[test]
    fn grid_tiles_canvas_exactly() {
        let menu = RichMenu::grid("PCD menu", "選單", &texts()).unwrap();

        let total: u64 = menu
            .areas
            .iter()
            .map(|a| u64::from(a.bounds.width) * u64::from(a.bounds.height))
            .sum();
        assert_eq!(total, 2500 * 1686);

        for (i, a) in menu.areas.iter().enumerate() {
            for b in &menu.areas[i + 1..] {
                let overlap_x = a.bounds.x < b.bounds.x + b.bounds.width
                    && b.bounds.x < a.bounds.x + a.bounds.width;
                let overlap_y = a.bounds.y < b.bounds.y + b.bounds.height
                    && b.bounds.y < a.bounds.y + a.bounds.height;
                assert!(!(overlap_x && overlap_y), "{a:?} overlaps {b:?}");
            }
        }
    }

    #[test]
    fn grid_cell_bounds() {
        assert_eq!(
            cell_bounds(0, 0),
            Bounds {
                x: 0,
                y: 0,
                width: 833,
                height: 843
            }
        );
        assert_eq!(
            cell_bounds(1, 2),
            Bounds {
                x: 1666,
                y: 843,
                width: 834,
                height: 843
            }
        );
    }

    #[test]
    fn grid_actions_follow_row_order() {
        let menu = RichMenu::grid("PCD menu", "選單", &texts()).unwrap();
        let MenuAction::Message { text, label } = &menu.areas[0].action;
        assert_eq!(text, "PCD");
        assert_eq!(label.as_deref(), Some("PCD"));

        let MenuAction::Message { text, .. } = &menu.areas[3].action;
        assert_eq!(text, "降雨");
        assert_eq!(menu.areas[3].bounds.y, 843);
    }

    #[test]
    fn grid_rejects_wrong_action_count() {
        let result = RichMenu::grid("PCD menu", "選單", &texts()[..5]);
        assert!(matches!(result, Err(LineError::InvalidRichMenu(_))));
    }

    #[test]
    fn grid_rejects_long_chat_bar_text() {
        let result = RichMenu::grid("PCD menu", "a chat bar text that is too long", &texts());
        assert!(matches!(result, Err(LineError::InvalidRichMenu(_))));
    }

    #[test]
    fn grid_rejects_blank_action() {
        let mut actions = texts();
        actions[4] = "  ".to_string();
        assert!(RichMenu::grid("PCD menu", "選單", &actions).is_err());
    }

    #[test]
    fn long_text_has_no_label() {
        let mut actions = texts();
        actions[1] = "x".repeat(30);
        let menu = RichMenu::grid("PCD menu", "選單", &actions).unwrap();
        let MenuAction::Message { label, .. } = &menu.areas[1].action;
        assert!(label.is_none());
    }

    #[test]
    fn serializes_to_api_shape() {
        let menu = RichMenu::grid("PCD menu", "選單", &texts()).unwrap();
        let json = serde_json::to_value(&menu).unwrap();

        assert_eq!(json["chatBarText"], "選單");
        assert_eq!(json["size"]["width"], 2500);
        assert_eq!(json["areas"][0]["action"]["type"], "message");
        assert_eq!(json["areas"][0]["action"]["text"], "PCD");
        assert_eq!(json["areas"][5]["bounds"]["x"], 1666);
    }

    #[test]
    fn image_type_from_extension() {
        assert_eq!(ImageType::from_path(Path::new("menu.png")), Some(ImageType::Png));
        assert_eq!(ImageType::from_path(Path::new("menu.JPG")), Some(ImageType::Jpeg));
        assert_eq!(ImageType::from_path(Path::new("menu.jpeg")), Some(ImageType::Jpeg));
        assert_eq!(ImageType::from_path(Path::new("menu.gif")), None);
        assert_eq!(ImageType::from_path(Path::new("menu")), None);
    }

    #[test]
    fn image_rejects_empty_and_oversized() {
        assert!(RichMenuImage::new(ImageType::Png, vec![]).is_err());
        assert!(RichMenuImage::new(ImageType::Png, vec![0; MAX_IMAGE_BYTES + 1]).is_err());
        assert!(RichMenuImage::new(ImageType::Png, vec![0; MAX_IMAGE_BYTES]).is_ok());
    }

    #[tokio::test]
    async fn image_from_path_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("menu.png");
        std::fs::write(&path, [0x89, b'P', b'N', b'G']).unwrap();

        let image = RichMenuImage::from_path(&path).await.unwrap();
        assert_eq!(image.image_type, ImageType::Png);
        assert_eq!(image.bytes.len(), 4);
    }

    #[tokio::test]
    async fn image_from_path_rejects_unknown_extension() {
        let result = RichMenuImage::from_path(Path::new("menu.bmp")).await;
        assert!(matches!(result, Err(LineError::InvalidImage(_))));
    }

    #[tokio::test]
    async fn image_from_path_reports_missing_file() {
        let result = RichMenuImage::from_path(Path::new("/nonexistent/menu.png")).await;
        assert!(matches!(result, Err(LineError::InvalidImage(_))));
    }
}
