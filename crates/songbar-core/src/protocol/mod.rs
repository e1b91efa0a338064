//! i3bar stream framing.
//!
//! After the two header lines, the i3bar protocol is one endless JSON array
//! whose elements are themselves arrays of blocks, one per line:
//!
//! ```text
//! {"version":1}
//! [
//! [{"full_text":"cpu 3%"}]
//! ,[{"full_text":"cpu 5%"}]
//! ```
//!
//! Every line after the first carries a leading `,`. That comma belongs to
//! the outer array, not to the line's own JSON, so it is split off before
//! decoding and put back after encoding.

mod format;
mod line;

pub use format::{SpacedFormatter, encode_blocks};
pub use line::{CONTINUATION, StreamLine};

/// One status block: a JSON object, key order preserved.
pub type Block = serde_json::Map<String, serde_json::Value>;
