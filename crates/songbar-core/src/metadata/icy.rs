use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

/// Attribute carrying the track title
pub const STREAM_TITLE: &str = "StreamTitle";

static ATTRIBUTE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\w+)='([^']*)'").expect("attribute pattern is valid"));

/// Collect every `key='value'` pair in `payload`.
///
/// Text that does not match is skipped. A later duplicate key replaces the
/// earlier value. An unparsable payload gives an empty map.
pub fn parse_attributes(payload: &str) -> HashMap<String, String> {
    ATTRIBUTE_PATTERN
        .captures_iter(payload)
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
        .collect()
}

/// Extract the stream title from one ICY info line.
///
/// The line looks like `ICY Info: StreamTitle='Artist - Title';StreamUrl='';`.
/// Everything up to the first `:` is ignored.
pub fn stream_title(line: &str) -> Option<String> {
    let (_, payload) = line.trim().split_once(':')?;
    parse_attributes(payload.trim()).remove(STREAM_TITLE)
}
