//! Stream relay between i3status and i3bar.
//!
//! The relay reads one line, transforms it and writes one line, strictly in
//! that order, until the input ends:
//!
//! 1. **Version header**: forwarded unchanged
//! 2. **Array open**: forwarded unchanged
//! 3. **Steady state**: each array line gets the song block prepended
//!
//! How the session ended is returned as a [`Termination`]; only a malformed
//! upstream line or an I/O failure is an error.

mod writer;

use std::io::{BufRead, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use strum::Display;
use tracing::{debug, info, trace};

pub use writer::LineWriter;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::metadata::SongSource;
use crate::protocol::StreamLine;
use crate::status::StatusBlock;

/// Expected ways for a session to end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Termination {
    /// End of input, or an empty line
    #[strum(serialize = "upstream closed")]
    UpstreamClosed,
    /// Interrupt signal observed while waiting for input
    #[strum(serialize = "interrupted")]
    Interrupted,
    /// The status bar stopped reading
    #[strum(serialize = "downstream closed")]
    DownstreamClosed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    VersionHeader,
    ArrayOpen,
    Steady,
}

pub struct Relay<R, W: Write, S> {
    input: R,
    output: LineWriter<W>,
    songs: S,
    config: Config,
    phase: Phase,
    line_number: u64,
    buf: Vec<u8>,
    interrupt: Option<Arc<AtomicBool>>,
}

impl<R: BufRead, W: Write, S: SongSource> Relay<R, W, S> {
    pub fn new(input: R, output: W, songs: S, config: Config) -> Self {
        Self {
            input,
            output: LineWriter::new(output),
            songs,
            config,
            phase: Phase::VersionHeader,
            line_number: 0,
            buf: Vec::new(),
            interrupt: None,
        }
    }

    /// Stop before writing anything once `flag` is raised
    pub fn with_interrupt_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.interrupt = Some(flag);
        self
    }

    /// Run until the session ends.
    pub fn run(&mut self) -> Result<Termination> {
        info!(
            "Relaying status lines (metadata: {})",
            self.config.metadata_file.display()
        );

        loop {
            if let Some(termination) = self.step()? {
                debug!(
                    "Session ended: {} after {} lines",
                    termination, self.line_number
                );
                return Ok(termination);
            }
        }
    }

    /// Process a single input line.
    ///
    /// Returns `Ok(Some(_))` when the session is over.
    pub fn step(&mut self) -> Result<Option<Termination>> {
        let line = match self.next_line()? {
            Ok(line) => line,
            Err(termination) => return Ok(Some(termination)),
        };

        let output = match self.phase {
            Phase::VersionHeader => {
                debug!("Version header: {}", String::from_utf8_lossy(&line));
                self.phase = Phase::ArrayOpen;
                line
            }
            Phase::ArrayOpen => {
                self.phase = Phase::Steady;
                line
            }
            Phase::Steady => self.inject(line)?.into_bytes(),
        };

        if self.is_interrupted() {
            return Ok(Some(Termination::Interrupted));
        }

        match self.output.write_line(&output).map_err(Error::from) {
            Ok(()) => Ok(None),
            Err(e) if e.is_broken_pipe() => Ok(Some(Termination::DownstreamClosed)),
            Err(e) => Err(e),
        }
    }

    /// Read and trim the next line; an empty line ends the session.
    ///
    /// Lines stay raw bytes: header lines are forwarded without being
    /// decoded, and array lines are decoded by the JSON parser.
    fn next_line(&mut self) -> Result<std::result::Result<Vec<u8>, Termination>> {
        self.buf.clear();
        let read = self.input.read_until(b'\n', &mut self.buf)?;

        if self.is_interrupted() {
            return Ok(Err(Termination::Interrupted));
        }

        let line = self.buf.trim_ascii();
        if read == 0 || line.is_empty() {
            return Ok(Err(Termination::UpstreamClosed));
        }

        self.line_number += 1;
        Ok(Ok(line.to_vec()))
    }

    fn inject(&self, line: Vec<u8>) -> Result<String> {
        let mut stream_line = match StreamLine::parse(&line) {
            Ok(parsed) => parsed,
            Err(source) => {
                return Err(Error::Protocol {
                    line_number: self.line_number,
                    line: String::from_utf8_lossy(&line).into_owned(),
                    source,
                });
            }
        };

        let song = self.songs.current_song();
        trace!("Current song: {:?}", song);
        stream_line.prepend(StatusBlock::for_song(song, &self.config).into());
        stream_line.encode()
    }

    fn is_interrupted(&self) -> bool {
        self.interrupt
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::SeqCst))
    }
}

impl<R, W: Write, S> Relay<R, W, S> {
    pub fn lines_written(&self) -> u64 {
        self.output.lines_written()
    }

    pub fn output(&self) -> &W {
        self.output.get_ref()
    }

    pub fn into_output(self) -> W {
        self.output.into_inner()
    }
}
