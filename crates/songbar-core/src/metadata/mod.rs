//! "Now playing" metadata.
//!
//! The media player side is not ours: a wrapper script pipes the player's
//! `ICY Info:` lines into a file, and that file is created, appended to and
//! deleted behind our back. This module turns its last line into an optional
//! song title.
//!
//! - **icy**: pure parsing of ICY attribute lines
//! - **file**: re-reading the metadata file on every query
//!
//! Every failure in here degrades to "no song"; nothing is reported upward.

mod file;
mod icy;

pub use file::MetadataFile;
pub use icy::{STREAM_TITLE, parse_attributes, stream_title};

/// Source of the current song title.
///
/// Implementations must not cache: each call reflects the state at the time
/// of the call.
pub trait SongSource {
    fn current_song(&self) -> Option<String>;
}

impl<S: SongSource + ?Sized> SongSource for &S {
    fn current_song(&self) -> Option<String> {
        (**self).current_song()
    }
}
