use super::{Block, encode_blocks};
use crate::error::Result;

/// Marker for every array after the first in the outer stream
pub const CONTINUATION: char = ',';

/// One decoded steady-state line.
#[derive(Debug, Clone, PartialEq)]
pub struct StreamLine {
    /// Whether the line carried the leading `,`
    pub continuation: bool,
    pub blocks: Vec<Block>,
}

impl StreamLine {
    /// Split off the continuation marker and decode the rest.
    ///
    /// Only a single leading comma is treated as framing. Numbers are kept
    /// in their original textual form.
    pub fn parse(line: impl AsRef<[u8]>) -> serde_json::Result<Self> {
        let line = line.as_ref();
        let (continuation, payload) = match line.split_first() {
            Some((&first, rest)) if first == CONTINUATION as u8 => (true, rest),
            _ => (false, line),
        };

        let blocks = serde_json::from_slice(payload)?;
        Ok(Self {
            continuation,
            blocks,
        })
    }

    /// Insert a block in front of the upstream blocks
    pub fn prepend(&mut self, block: Block) {
        self.blocks.insert(0, block);
    }

    /// Encode back to one line, with the same framing prefix as the input
    pub fn encode(&self) -> Result<String> {
        let encoded = encode_blocks(&self.blocks)?;
        if self.continuation {
            Ok(format!("{CONTINUATION}{encoded}"))
        } else {
            Ok(encoded)
        }
    }
}
