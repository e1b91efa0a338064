use std::io;
use std::process;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::Result;
use tracing::debug;

/// Shutdown flag shared between the relay and the Ctrl+C handler.
///
/// The relay blocks on stdin between ticks, so raising the flag alone would
/// only take effect when the next status line arrives. The installed handler
/// therefore also ends the process itself.
#[derive(Clone)]
pub struct ShutdownSignal {
    shutdown: Arc<AtomicBool>,
}

impl ShutdownSignal {
    /// Create a new shutdown signal in the non-shutdown state.
    pub fn new() -> Self {
        Self {
            shutdown: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Raise the flag.
    pub fn trigger(&self) {
        self.shutdown.store(true, Ordering::SeqCst);
    }

    /// Flag handed to the relay.
    pub fn flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.shutdown)
    }

    /// Install the Ctrl+C handler.
    ///
    /// On interrupt the flag is raised, then the handler waits for the stdout
    /// lock so that a line being written is completed, and exits with
    /// `exit_code`.
    pub fn install_handler(&self, exit_code: u8) -> Result<()> {
        let signal = self.clone();
        ctrlc::set_handler(move || {
            debug!("Received interrupt, exiting");
            signal.trigger();
            let _stdout = io::stdout().lock();
            process::exit(i32::from(exit_code));
        })?;
        Ok(())
    }
}

impl Default for ShutdownSignal {
    fn default() -> Self {
        Self::new()
    }
}
