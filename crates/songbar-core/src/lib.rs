//! # songbar-core
//!
//! Core library for the songbar status-line filter.
//!
//! This crate provides:
//! - ICY metadata parsing and the "now playing" file reader
//! - The i3bar stream-line codec (continuation marker, compact encoder)
//! - The relay state machine that injects the song block into every line
//!
//! The binary in `songbar-cli` only wires these to stdin/stdout and maps
//! the relay outcome to an exit status.

pub mod config;
pub mod error;
pub mod metadata;
pub mod protocol;
pub mod relay;
pub mod status;

pub use config::Config;
pub use error::{Error, Result};
pub use metadata::{MetadataFile, SongSource, parse_attributes, stream_title};
pub use protocol::{Block, StreamLine, encode_blocks};
pub use relay::{LineWriter, Relay, Termination};
pub use status::StatusBlock;
