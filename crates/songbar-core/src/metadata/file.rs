use std::borrow::Cow;
use std::fs;
use std::path::PathBuf;

use encoding_rs::WINDOWS_1252;
use tracing::{debug, trace};

use super::SongSource;
use super::icy::stream_title;

/// Metadata file written by the media player wrapper.
///
/// The file is opened, read in full and closed on every query. It is
/// rewritten frequently, so nothing is cached between ticks.
#[derive(Debug, Clone)]
pub struct MetadataFile {
    path: PathBuf,
}

impl MetadataFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read the title from the last non-empty line of the file.
    pub fn read_title(&self) -> Option<String> {
        if !self.path.exists() {
            trace!("Metadata file {} does not exist", self.path.display());
            return None;
        }

        // The writer may delete the file between the check and the read
        let bytes = match fs::read(&self.path) {
            Ok(b) => b,
            Err(e) => {
                debug!("Failed to read metadata file {}: {}", self.path.display(), e);
                return None;
            }
        };

        let text = decode_text(&bytes);
        let Some(line) = last_line(&text) else {
            trace!("Metadata file {} is empty", self.path.display());
            return None;
        };

        let title = stream_title(line);
        if title.is_none() {
            debug!("No stream title in metadata line: {:?}", line);
        }
        title
    }
}

impl SongSource for MetadataFile {
    fn current_song(&self) -> Option<String> {
        self.read_title()
    }
}

/// Decode file content, falling back to Windows-1252 for non-UTF-8 titles.
///
/// Many Shoutcast servers still send Latin-1 metadata.
fn decode_text(bytes: &[u8]) -> Cow<'_, str> {
    match std::str::from_utf8(bytes) {
        Ok(s) => Cow::Borrowed(s),
        Err(_) => {
            let (decoded, _, _) = WINDOWS_1252.decode(bytes);
            decoded
        }
    }
}

fn last_line(text: &str) -> Option<&str> {
    text.lines().map(str::trim).rfind(|line| !line.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, tempdir};

    fn metadata_file(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_missing_file_is_absent() {
        let dir = tempdir().unwrap();
        let reader = MetadataFile::new(dir.path().join("mplayer.data"));
        assert_eq!(reader.current_song(), None);
    }

    #[test]
    fn test_empty_file_is_absent() {
        let file = metadata_file(b"");
        let reader = MetadataFile::new(file.path());
        assert_eq!(reader.current_song(), None);
    }

    #[test]
    fn test_reads_last_line() {
        let file = metadata_file(
            b"ICY Info: StreamTitle='Old Song';StreamUrl='';\n\
              ICY Info: StreamTitle='Test Song';StreamUrl='x';\n",
        );
        let reader = MetadataFile::new(file.path());
        assert_eq!(reader.current_song(), Some("Test Song".to_string()));
    }

    #[test]
    fn test_skips_trailing_blank_lines() {
        let file = metadata_file(b"ICY Info: StreamTitle='Test Song';\n\n   \n");
        let reader = MetadataFile::new(file.path());
        assert_eq!(reader.current_song(), Some("Test Song".to_string()));
    }

    #[test]
    fn test_last_line_without_title_is_absent() {
        // Only the final event counts, even if an earlier one had a title
        let file = metadata_file(b"ICY Info: StreamTitle='Old Song';\ngarbage no delimiter\n");
        let reader = MetadataFile::new(file.path());
        assert_eq!(reader.current_song(), None);
    }

    #[test]
    fn test_garbage_is_absent() {
        let file = metadata_file(b"garbage no delimiter");
        let reader = MetadataFile::new(file.path());
        assert_eq!(reader.current_song(), None);
    }

    #[test]
    fn test_latin1_title() {
        let file = metadata_file(b"ICY Info: StreamTitle='Beyonc\xe9 - Halo';\n");
        let reader = MetadataFile::new(file.path());
        assert_eq!(reader.current_song(), Some("Beyoncé - Halo".to_string()));
    }

    #[test]
    fn test_utf8_title() {
        let file = metadata_file("ICY Info: StreamTitle='Sigur Rós - Hoppípolla';\n".as_bytes());
        let reader = MetadataFile::new(file.path());
        assert_eq!(
            reader.current_song(),
            Some("Sigur Rós - Hoppípolla".to_string())
        );
    }

    #[test]
    fn test_rereads_on_every_query() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("mplayer.data");
        let reader = MetadataFile::new(&path);

        fs::write(&path, "ICY Info: StreamTitle='First';\n").unwrap();
        assert_eq!(reader.current_song(), Some("First".to_string()));
        assert_eq!(reader.current_song(), Some("First".to_string()));

        fs::write(&path, "ICY Info: StreamTitle='Second';\n").unwrap();
        assert_eq!(reader.current_song(), Some("Second".to_string()));

        fs::remove_file(&path).unwrap();
        assert_eq!(reader.current_song(), None);
    }

    #[test]
    fn test_directory_path_is_absent() {
        let dir = tempdir().unwrap();
        let reader = MetadataFile::new(dir.path());
        assert_eq!(reader.current_song(), None);
    }
}
