use serde::{Deserialize, Serialize};
use tracing::Level;

use crate::core::error::BoardError;
use crate::core::models::Column;

/// Id of the optional inline JSON block in `index.html`.
pub const CONFIG_ELEMENT_ID: &str = "board-config";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub new_order_column: Column,
    pub log_level: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            new_order_column: Column::Ordered,
            log_level: "info".to_string(),
        }
    }
}

impl BoardConfig {
    pub fn from_json(raw: &str) -> Result<Self, BoardError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: BoardConfig = serde_json::from_str(raw)?;
        config.level()?;
        Ok(config)
    }

    pub fn level(&self) -> Result<Level, BoardError> {
        self.log_level
            .parse::<Level>()
            .map_err(|e| BoardError::InvalidConfig(format!("log_level {:?}: {}", self.log_level, e)))
    }

    /// Reads the inline config block from the document, falling back to
    /// defaults when it is missing or malformed. Returns the fallback error
    /// so the caller can log it once logging is up.
    pub fn load_from_document() -> (Self, Option<BoardError>) {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match raw {
            None => (Self::default(), None),
            Some(raw) => match Self::from_json(&raw) {
                Ok(config) => (config, None),
                Err(e) => (Self::default(), Some(e)),
            },
        }
    }
}
