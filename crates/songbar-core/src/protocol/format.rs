use std::io;

use serde::Serialize;
use serde_json::Serializer;
use serde_json::ser::Formatter;

use super::Block;
use crate::error::Result;

/// Compact single-line JSON with a space after `,` and `:`.
///
/// This is the layout of Python's `json.dumps` defaults, which is what
/// existing i3bar wrapper scripts emit:
/// `[{"full_text": "a", "name": "b"}, {"full_text": "c"}]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

/// Encode a block list on a single line.
///
/// String escaping is plain JSON, so newlines inside values never break the
/// line framing.
pub fn encode_blocks(blocks: &[Block]) -> Result<String> {
    let mut buf = Vec::with_capacity(128);
    let mut serializer = Serializer::with_formatter(&mut buf, SpacedFormatter);
    blocks.serialize(&mut serializer)?;
    let encoded =
        String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    Ok(encoded)
}
