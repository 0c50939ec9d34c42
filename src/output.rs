use crate::error::PlayError;

/// Parameters for opening a playback stream.
///
/// The sample format is fixed at signed 16-bit little-endian interleaved;
/// only the channel count and rate vary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackParams {
    /// Number of interleaved channels.
    pub channels: u16,
    /// Device rate in Hz.
    pub sample_rate: u32,
}

/// An open playback stream.
///
/// Writes block until the device has accepted the whole buffer. The device
/// is released when the handle drops.
pub trait PlaybackDevice {
    fn write(&mut self, samples: &[i16]) -> Result<(), PlayError>;
}

/// Something that can open playback streams.
///
/// [`AlsaOutput`](crate::AlsaOutput) is the real implementation; tests
/// substitute a fake to keep hardware out of the loop.
pub trait AudioOutput {
    type Device: PlaybackDevice;

    fn open(&self, params: &PlaybackParams) -> Result<Self::Device, PlayError>;
}
