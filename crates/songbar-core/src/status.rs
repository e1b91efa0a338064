//! The injected "now playing" block.

use serde_json::Value;

use crate::config::{Config, defaults};
use crate::protocol::Block;

/// One i3bar block describing the current song.
///
/// Converted into a [`Block`] with keys in the order `full_text`, `name`, `color`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBlock {
    pub full_text: String,
    pub name: String,
    pub color: String,
}

impl StatusBlock {
    pub fn playing(title: String, config: &Config) -> Self {
        Self {
            full_text: title,
            name: defaults::BLOCK_NAME.to_string(),
            color: config.song_color.clone(),
        }
    }

    pub fn idle(config: &Config) -> Self {
        Self {
            full_text: config.no_song_text.clone(),
            name: defaults::BLOCK_NAME.to_string(),
            color: config.no_song_color.clone(),
        }
    }

    /// Build the block for a metadata lookup result
    pub fn for_song(song: Option<String>, config: &Config) -> Self {
        match song {
            Some(title) => Self::playing(title, config),
            None => Self::idle(config),
        }
    }
}

impl From<StatusBlock> for Block {
    fn from(status: StatusBlock) -> Self {
        let mut block = Block::new();
        block.insert("full_text".to_string(), Value::String(status.full_text));
        block.insert("name".to_string(), Value::String(status.name));
        block.insert("color".to_string(), Value::String(status.color));
        block
    }
}
