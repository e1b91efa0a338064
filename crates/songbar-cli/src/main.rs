mod shutdown;

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use songbar_core::config::{defaults, exit};
use songbar_core::{Config, MetadataFile, Relay, Termination};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use crate::shutdown::ShutdownSignal;

// i3 config, `bar` section: `status_command i3status | songbar`
#[derive(Parser)]
#[command(name = "songbar")]
#[command(about = "Prepend the current mplayer song to an i3bar status stream")]
struct Args {
    /// File the player's ICY info lines are written to
    #[arg(long, default_value = defaults::METADATA_FILE)]
    metadata_file: PathBuf,

    #[arg(long, default_value = defaults::SONG_COLOR)]
    song_color: String,

    #[arg(long, default_value = defaults::NO_SONG_COLOR)]
    no_song_color: String,

    /// Text shown when no title is available
    #[arg(long, default_value = defaults::NO_SONG_TEXT)]
    no_song_text: String,
}

impl Args {
    fn into_config(self) -> Config {
        Config {
            metadata_file: self.metadata_file,
            song_color: self.song_color,
            no_song_color: self.no_song_color,
            no_song_text: self.no_song_text,
        }
    }
}

fn main() -> ExitCode {
    // stdout carries the protocol, so logs go to stderr
    if let Err(e) = init_logging() {
        eprintln!("songbar: failed to initialize logging: {e}");
        return ExitCode::from(exit::FAILURE);
    }

    let args = Args::parse();

    match run(args.into_config()) {
        Ok(termination) => {
            debug!("Exiting: {}", termination);
            ExitCode::from(exit::SHUTDOWN)
        }
        Err(e) => {
            error!("{:#}", e);
            ExitCode::from(exit::FAILURE)
        }
    }
}

fn init_logging() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("songbar=warn".parse()?))
        .with_writer(io::stderr)
        .init();
    Ok(())
}

fn run(config: Config) -> Result<Termination> {
    let shutdown = ShutdownSignal::new();
    shutdown.install_handler(exit::SHUTDOWN)?;

    let songs = MetadataFile::new(&config.metadata_file);
    let mut relay = Relay::new(io::stdin().lock(), io::stdout(), songs, config)
        .with_interrupt_flag(shutdown.flag());

    Ok(relay.run()?)
}
