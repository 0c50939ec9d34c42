use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::alsa_out::AlsaOutput;
use crate::error::PlayError;
use crate::output::{AudioOutput, PlaybackDevice, PlaybackParams};

/// Substituted when the header's rate is missing or implausible.
const FALLBACK_SAMPLE_RATE: u32 = 44_100;
/// Declared rates above this are treated as corrupt.
const MAX_PLAUSIBLE_SAMPLE_RATE: u32 = 100_000;
/// Samples pulled from the cursor per device write.
const SAMPLES_PER_WRITE: usize = 1024;

/// Derives the device rate from the rate a WAV header declares.
///
/// A declared rate of zero or above 100 kHz is replaced with 44100 Hz. The
/// result is then halved: this keeps the perceived pitch right at the cost
/// of doubling playback duration, a long-standing workaround for a decode
/// timing mismatch.
pub fn effective_sample_rate(declared: u32) -> u32 {
    let rate = if declared == 0 || declared > MAX_PLAUSIBLE_SAMPLE_RATE {
        FALLBACK_SAMPLE_RATE
    } else {
        declared
    };
    rate / 2
}

/// Plays WAV sources through an audio output.
///
/// The output is the default ALSA device unless another [`AudioOutput`] is
/// supplied with [`Player::with_output`]. Playback is blocking: each call
/// returns once the whole source has played or an error occurred.
pub struct Player<O = AlsaOutput> {
    output: O,
}

impl Player<AlsaOutput> {
    /// Player over the default ALSA playback device.
    pub fn new() -> Self {
        Player {
            output: AlsaOutput::default(),
        }
    }
}

impl Default for Player<AlsaOutput> {
    fn default() -> Self {
        Player::new()
    }
}

impl<O: AudioOutput> Player<O> {
    /// Player over a caller-supplied output.
    pub fn with_output(output: O) -> Self {
        Player { output }
    }

    /// Plays a WAV file from the filesystem.
    ///
    /// The file handle is closed when the call returns, on every path.
    pub fn play_file(&self, path: impl AsRef<Path>) -> Result<(), PlayError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let total_len = file.metadata()?.len();
        debug!(path = %path.display(), total_len, "playing wav file");
        self.play_reader(file, total_len)
    }

    /// Plays a WAV container from an already-open byte source.
    ///
    /// `total_len` must be the container's size in bytes; the source is not
    /// read past it. A length that does not match the container produces a
    /// container or decode error, not undefined behavior.
    pub fn play_reader<R: Read>(&self, reader: R, total_len: u64) -> Result<(), PlayError> {
        let mut wav =
            hound::WavReader::new(reader.take(total_len)).map_err(PlayError::Container)?;
        let spec = wav.spec();
        let rate = effective_sample_rate(spec.sample_rate);
        debug!(
            declared_rate = spec.sample_rate,
            channels = spec.channels,
            bits = spec.bits_per_sample,
            rate,
            "wav header parsed"
        );

        let params = PlaybackParams {
            channels: 1,
            sample_rate: rate,
        };
        let mut device = self.output.open(&params)?;
        // The device drops, and so closes, on every exit path below.
        stream_samples(&mut wav, &mut device)?;
        debug!("playback finished");
        Ok(())
    }
}

/// Pumps the sample cursor into the device until end of stream.
///
/// Samples are pulled in fixed-size groups; each non-empty group is written
/// before the next is requested, so backpressure comes from the blocking
/// write. Cursor exhaustion is the normal termination; any other cursor
/// failure aborts as a decode error.
fn stream_samples<R, D>(wav: &mut hound::WavReader<R>, device: &mut D) -> Result<(), PlayError>
where
    R: Read,
    D: PlaybackDevice,
{
    let mut group = Vec::with_capacity(SAMPLES_PER_WRITE);
    let mut samples = wav.samples::<i16>();
    loop {
        group.clear();
        for sample in samples.by_ref().take(SAMPLES_PER_WRITE) {
            group.push(sample.map_err(PlayError::Decode)?);
        }
        if group.is_empty() {
            return Ok(());
        }
        device.write(&group)?;
        if group.len() < SAMPLES_PER_WRITE {
            return Ok(());
        }
    }
}

/// Plays a WAV file through the default ALSA device.
pub fn play_file(path: impl AsRef<Path>) -> Result<(), PlayError> {
    Player::new().play_file(path)
}

/// Plays a WAV container from an open byte source through the default ALSA
/// device. `total_len` is the container's size in bytes.
pub fn play_reader<R: Read>(reader: R, total_len: u64) -> Result<(), PlayError> {
    Player::new().play_reader(reader, total_len)
}
