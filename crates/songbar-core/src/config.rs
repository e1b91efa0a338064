//! Runtime configuration.
//!
//! A [`Config`] is built once at startup and handed to the metadata reader
//! and the relay. Nothing reads these values from global state, so tests can
//! point a relay at a temporary metadata file without touching the process.

use std::path::PathBuf;

/// Built-in values used when no override is given.
pub mod defaults {
    /// Where the media player wrapper appends its ICY info lines
    pub const METADATA_FILE: &str = "/tmp/mplayer.data";
    /// Text color when a song title is known
    pub const SONG_COLOR: &str = "#6780fb";
    /// Text color for the placeholder block
    pub const NO_SONG_COLOR: &str = "#ffffff";
    /// Placeholder text when nothing is playing
    pub const NO_SONG_TEXT: &str = "No Song Played";
    /// Value of the `name` field of the injected block
    pub const BLOCK_NAME: &str = "song";
}

/// Process exit statuses.
pub mod exit {
    /// Upstream closed, user interrupt, or downstream closed
    pub const SHUTDOWN: u8 = 3;
    /// Protocol violation or unrecoverable I/O error
    pub const FAILURE: u8 = 1;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub metadata_file: PathBuf,
    pub song_color: String,
    pub no_song_color: String,
    pub no_song_text: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            metadata_file: PathBuf::from(defaults::METADATA_FILE),
            song_color: defaults::SONG_COLOR.to_string(),
            no_song_color: defaults::NO_SONG_COLOR.to_string(),
            no_song_text: defaults::NO_SONG_TEXT.to_string(),
        }
    }
}

impl Config {
    /// Same defaults, different metadata file
    pub fn with_metadata_file(path: impl Into<PathBuf>) -> Self {
        Self {
            metadata_file: path.into(),
            ..Self::default()
        }
    }
}
