//! playwav plays a WAV file through the default ALSA output device.
//!
//! The crate is a thin pipeline over two collaborators: [`hound`] parses the
//! WAV container and hands out a sample cursor, the `alsa` crate talks to
//! the playback hardware. Open a source, derive a device rate from the
//! header, stream 16-bit samples until the file runs out, close the device.
//!
//! # Examples
//!
//! ```no_run
//! playwav::play_file("test.wav").expect("playback failed");
//! ```
//!
//! Sources that are already open work too, as long as the container size is
//! known:
//!
//! ```no_run
//! use std::fs::File;
//!
//! let file = File::open("test.wav").unwrap();
//! let len = file.metadata().unwrap().len();
//! playwav::play_reader(file, len).expect("playback failed");
//! ```
//!
//! Playback is blocking and mono: the call returns once the whole source has
//! played or an error occurred. Errors identify the stage that failed;
//! nothing is printed. Diagnostic events go through [`tracing`] and are only
//! visible if the host program installs a subscriber.

mod alsa_out;
mod error;
mod output;
mod player;

pub use alsa_out::{AlsaDevice, AlsaOutput};
pub use error::PlayError;
pub use output::{AudioOutput, PlaybackDevice, PlaybackParams};
pub use player::{effective_sample_rate, play_file, play_reader, Player};
