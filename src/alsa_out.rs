use alsa::pcm::{Access, Format, HwParams, PCM};
use alsa::{Direction, ValueOr};
use tracing::debug;

use crate::error::PlayError;
use crate::output::{AudioOutput, PlaybackDevice, PlaybackParams};

/// ALSA-backed audio output.
///
/// Streams are opened on a fixed device id, `"default"` unless overridden
/// with [`AlsaOutput::new`].
pub struct AlsaOutput {
    device_name: String,
}

impl AlsaOutput {
    /// Output over a specific ALSA device id, e.g. `"plughw:0,0"`.
    pub fn new(device_name: impl Into<String>) -> Self {
        AlsaOutput {
            device_name: device_name.into(),
        }
    }
}

impl Default for AlsaOutput {
    fn default() -> Self {
        AlsaOutput::new("default")
    }
}

impl AudioOutput for AlsaOutput {
    type Device = AlsaDevice;

    fn open(&self, params: &PlaybackParams) -> Result<AlsaDevice, PlayError> {
        let pcm = PCM::new(&self.device_name, Direction::Playback, false)?;
        {
            let hwp = HwParams::any(&pcm)?;
            hwp.set_access(Access::RWInterleaved)?;
            hwp.set_format(Format::s16())?;
            hwp.set_channels(params.channels as u32)?;
            hwp.set_rate(params.sample_rate, ValueOr::Nearest)?;
            pcm.hw_params(&hwp)?;
        }
        debug!(
            device = %self.device_name,
            rate = params.sample_rate,
            channels = params.channels,
            "alsa playback device open"
        );
        Ok(AlsaDevice {
            pcm,
            channels: params.channels as usize,
        })
    }
}

/// An open ALSA PCM handle. Drains queued frames and closes on drop.
pub struct AlsaDevice {
    pcm: PCM,
    channels: usize,
}

impl PlaybackDevice for AlsaDevice {
    fn write(&mut self, samples: &[i16]) -> Result<(), PlayError> {
        let io = self.pcm.io_i16()?;
        let mut written = 0;
        while written < samples.len() {
            // writei counts frames, not samples.
            written += io.writei(&samples[written..])? * self.channels;
        }
        Ok(())
    }
}

impl Drop for AlsaDevice {
    fn drop(&mut self) {
        // Let frames still queued in the hardware buffer play out before
        // the handle closes.
        let _ = self.pcm.drain();
    }
}
