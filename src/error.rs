use thiserror::Error;

/// Playback failure, one variant per pipeline stage.
#[derive(Debug, Error)]
pub enum PlayError {
    /// The source was not a well-formed WAV container.
    #[error("wav reader: {0}")]
    Container(#[source] hound::Error),
    /// The playback device could not be opened or written to.
    #[error("playback device: {0}")]
    Device(String),
    /// Reading samples failed for a reason other than end of stream.
    #[error("wav decode: {0}")]
    Decode(#[source] hound::Error),
    /// The source file could not be opened or its size determined.
    #[error("open source: {0}")]
    Io(#[from] std::io::Error),
}

impl From<alsa::Error> for PlayError {
    fn from(e: alsa::Error) -> Self {
        PlayError::Device(e.to_string())
    }
}
